//! Trust WEDO CLI
//!
//! バックエンドにスキャンを依頼し、結果のレポートを端末に表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod scan;
pub mod watch;
