//! MedAI Consensus Common Library
//!
//! Web(WASM)層と共有される型とドメインロジック:
//! - types: /analyze レスポンスの契約型
//! - state: クライアント側ケース状態（画像・レポート・解析結果）
//! - score: スコアゲージとリスク表示の判定ルール
//! - format: 表示用テキスト整形
//! - views: 画像表示の切り替えビュー
//! - export: テキストレポート出力

pub mod error;
pub mod export;
pub mod format;
pub mod score;
pub mod state;
pub mod types;
pub mod views;

pub use error::{Error, Result};
pub use export::{export_document, export_file_name, report_text};
pub use format::{group_thousands, title_case_type, trim_number};
pub use score::{risk_style, RiskStyle, ScoreTone};
pub use state::{CaseState, SelectedImage};
pub use types::AnalysisResponse;
pub use views::ImageView;
