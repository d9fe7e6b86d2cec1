//! /analyze レスポンスの契約型
//!
//! スキーマはサーバ側で正式宣言されていない（利用実績からの推定）ため、
//! `timestamp` 以外は全て防御的に扱う: フィールド欠落はデフォルト値、
//! 省略されうるセクションは Option。

use serde::{Deserialize, Serialize};

/// /analyze レスポンス全体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    /// AGREEMENT / DISAGREEMENT
    pub status: String,

    /// LOW / MEDIUM / HIGH / CRITICAL（未知の値もそのまま保持）
    pub risk_level: String,

    /// 0〜100
    pub agreement_score: f64,

    pub alert_type: String,
    pub alert_message: String,

    pub image_analysis: ImageAnalysis,
    pub text_analysis: TextAnalysis,

    pub discrepancies: Option<Discrepancies>,
    pub recommendation: Option<Recommendation>,

    /// GradCAM生成はサーバ側で失敗しうるため Option
    pub gradcam_image: Option<String>,
    pub original_image: Option<String>,

    /// ケースID（エクスポートのファイル名にも使用）
    pub timestamp: String,
}

/// 画像AI解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAnalysis {
    pub prediction: String,
    pub confidence: f64,
    pub detailed_findings: Option<DetailedFindings>,
}

/// 読影レポート解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAnalysis {
    pub text_diagnosis: String,
    pub confidence: f64,
    pub detailed_findings: Option<DetailedFindings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedFindings {
    pub specific_findings: Vec<Finding>,
}

/// 個別所見
///
/// 画像側は severity と confidence を持ち、レポート側は finding のみ。
/// 1つの型でデフォルト値により両方をカバーする。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finding {
    pub finding: String,
    pub severity: String,
    pub confidence: Option<f64>,
}

/// 不一致セクション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discrepancies {
    pub count: u32,
    pub summary: String,
    pub items: Vec<DiscrepancyItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscrepancyItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub description: String,
    pub ai_finding: String,
    pub doctor_finding: String,
}

/// 推奨アクション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub message: String,
    pub next_steps: Vec<String>,
}
