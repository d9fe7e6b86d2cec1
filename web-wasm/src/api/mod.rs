//! /analyze エンドポイント連携

mod analyze;

pub use analyze::analyze_case;
