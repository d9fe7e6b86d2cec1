//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Invalid image data: {0}")]
    InvalidImageData(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
