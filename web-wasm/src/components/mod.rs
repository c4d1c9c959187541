//! UIコンポーネント

pub mod dashboard_layout;
pub mod final_cta;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navigation;
pub mod pricing;
pub mod problem;
pub mod progress_modal;
pub mod report;
pub mod scan_list;
pub mod trust_signals;
