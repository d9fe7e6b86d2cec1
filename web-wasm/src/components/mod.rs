//! 画面コンポーネント

pub mod action_bar;
pub mod alert_banner;
pub mod analysis_panel;
pub mod discrepancy_list;
pub mod header;
pub mod image_views;
pub mod recommendation_panel;
pub mod report_input;
pub mod results_section;
pub mod score_card;
pub mod upload_panel;
