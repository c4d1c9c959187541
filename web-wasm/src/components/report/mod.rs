//! レポート画面の部品

pub mod difficult_site_warning;
pub mod dimension_bars;
pub mod issue_list;
pub mod quick_wins;
pub mod radar_chart;
pub mod summary_card;
