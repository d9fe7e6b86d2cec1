//! テキストレポート出力
//!
//! 解析結果を固定テンプレート（罫線区切りのセクション構成）の
//! プレーンテキストに整形する。欠けている任意セクションは
//! 明示的なプレースホルダ文言に落とす。

use std::fmt::Write as _;

use crate::format::trim_number;
use crate::state::CaseState;
use crate::types::AnalysisResponse;

const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str =
    "───────────────────────────────────────────────────────────────";

/// エクスポート時のファイル名: `MedAI_Analysis_<timestamp>.txt`
pub fn export_file_name(response: &AnalysisResponse) -> String {
    format!("MedAI_Analysis_{}.txt", response.timestamp)
}

/// エクスポートの可否判定込みで(ファイル名, 本文)を組み立てる
///
/// 結果が保存されていなければNoneを返し、呼び出し側は何もしない。
pub fn export_document(case: &CaseState, generated_at: &str) -> Option<(String, String)> {
    let result = case.result()?;
    Some((export_file_name(result), report_text(result, generated_at)))
}

/// 解析結果1件をレポート本文に整形する
///
/// `generated_at` は呼び出し側のロケール時刻文字列。WASM層では
/// `js_sys::Date` から、テストでは固定文字列から渡す。
pub fn report_text(response: &AnalysisResponse, generated_at: &str) -> String {
    let mut out = String::new();

    out.push_str("╔══════════════════════════════════════════════════════════════╗\n");
    out.push_str("║           MEDAI CONSENSUS - ANALYSIS REPORT                  ║\n");
    out.push_str("╚══════════════════════════════════════════════════════════════╝\n");
    out.push('\n');
    let _ = writeln!(out, "Generated: {generated_at}");
    let _ = writeln!(out, "Case ID: {}", response.timestamp);

    section(&mut out, "📊 AGREEMENT ANALYSIS");
    let _ = writeln!(out, "Status:           {}", response.status);
    let _ = writeln!(out, "Risk Level:       {}", response.risk_level);
    let _ = writeln!(
        out,
        "Agreement Score:  {}%",
        trim_number(response.agreement_score)
    );
    let _ = writeln!(out, "Alert:            {}", response.alert_message);

    section(&mut out, "🤖 AI IMAGE ANALYSIS");
    let image = &response.image_analysis;
    let _ = writeln!(out, "Diagnosis:        {}", image.prediction);
    let _ = writeln!(out, "Confidence:       {}%", trim_number(image.confidence));
    out.push('\n');
    out.push_str("Findings:\n");
    push_image_findings(&mut out, response);

    section(&mut out, "👨‍⚕️ CLINICAL REPORT ANALYSIS");
    let text = &response.text_analysis;
    let _ = writeln!(out, "Diagnosis:        {}", text.text_diagnosis);
    let _ = writeln!(out, "Confidence:       {}%", trim_number(text.confidence));

    let count = response.discrepancies.as_ref().map_or(0, |d| d.count);
    section(&mut out, &format!("⚠️ DISCREPANCIES ({count})"));
    push_discrepancies(&mut out, response);

    section(&mut out, "💡 RECOMMENDATIONS");
    push_recommendation(&mut out, response);

    out.push('\n');
    let _ = writeln!(out, "{HEAVY_RULE}");
    out.push('\n');
    out.push_str("DISCLAIMER: This analysis is for research purposes only and\n");
    out.push_str("should not replace professional medical judgment.\n");
    out.push('\n');
    let _ = writeln!(out, "{HEAVY_RULE}");

    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    let _ = writeln!(out, "{HEAVY_RULE}");
    out.push('\n');
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{LIGHT_RULE}");
}

fn push_image_findings(out: &mut String, response: &AnalysisResponse) {
    let findings = response
        .image_analysis
        .detailed_findings
        .as_ref()
        .map(|d| d.specific_findings.as_slice())
        .unwrap_or_default();

    if findings.is_empty() {
        out.push_str("  No specific findings listed\n");
        return;
    }

    for finding in findings {
        match finding.confidence {
            Some(confidence) => {
                let _ = writeln!(
                    out,
                    "  • {} ({}%)",
                    finding.finding,
                    trim_number(confidence)
                );
            }
            None => {
                let _ = writeln!(out, "  • {}", finding.finding);
            }
        }
    }
}

fn push_discrepancies(out: &mut String, response: &AnalysisResponse) {
    let items = response
        .discrepancies
        .as_ref()
        .map(|d| d.items.as_slice())
        .unwrap_or_default();

    if items.is_empty() {
        out.push_str("No discrepancies detected\n");
        return;
    }

    for item in items {
        out.push('\n');
        let _ = writeln!(out, "Type:        {}", item.kind);
        let _ = writeln!(out, "Severity:    {}", item.severity);
        let _ = writeln!(out, "Description: {}", item.description);
        let _ = writeln!(out, "AI Finding:  {}", item.ai_finding);
        let _ = writeln!(out, "Report:      {}", item.doctor_finding);
    }
}

fn push_recommendation(out: &mut String, response: &AnalysisResponse) {
    let Some(recommendation) = response.recommendation.as_ref() else {
        out.push_str("No recommendation provided\n");
        return;
    };

    let _ = writeln!(out, "{}", recommendation.message);
    out.push('\n');
    out.push_str("Next Steps:\n");
    for (i, step) in recommendation.next_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
}
