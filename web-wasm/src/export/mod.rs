//! テキストレポートのダウンロード

mod download;

pub use download::download_text;
