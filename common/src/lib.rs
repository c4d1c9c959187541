//! Trust WEDO Common Library
//!
//! CLIとWeb(WASM)で共有される型とクライアントロジック

pub mod api;
pub mod chart;
pub mod error;
pub mod i18n;
pub mod poller;
pub mod prefs;
pub mod report;
pub mod routes;
pub mod session;
pub mod types;

pub use api::{ApiEndpoints, CreateScanRequest, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use i18n::{t, Language, Theme};
pub use poller::{
    poll_until_terminal, CancelToken, Generation, JobStatusSource, PollOutcome, PollPolicy, ProgressPhase,
};
pub use prefs::{PreferenceStore, Preferences};
pub use routes::AppRoute;
pub use session::{AuthEndpoints, AuthOutcome, PasswordCredentials, Session};
pub use types::{DimensionAggregate, DimensionScore, QuickWin, Report, ScanJob, ScanStatus};
