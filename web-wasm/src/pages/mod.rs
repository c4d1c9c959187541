//! ページコンポーネント

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pdf_report;
pub mod placeholder;
pub mod report;
pub mod scans;
pub mod signup;
