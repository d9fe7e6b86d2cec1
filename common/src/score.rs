//! スコアゲージとリスク表示の判定ルール
//!
//! アニメーションのタイマー自体はWASM層の責務。ここには
//! しきい値・色・ゲージ形状・カウントアップの刻み幅だけを置き、
//! タイマーなしで単体テストできるようにする。

use std::f64::consts::PI;

/// ゲージ円の半径(SVG座標系)
pub const GAUGE_RADIUS: f64 = 90.0;

/// ゲージ円周。stroke-dasharray に使う
pub const CIRCUMFERENCE: f64 = 2.0 * PI * GAUGE_RADIUS;

/// カウントアップ所要時間
pub const SCORE_ANIM_MS: u32 = 1500;

/// カウントアップの刻み間隔
pub const SCORE_TICK_MS: u32 = 16;

/// スコア値に対する stroke-dashoffset
///
/// スコアは 0..=100 にクランプする。
pub fn stroke_offset(score: f64) -> f64 {
    let score = score.clamp(0.0, 100.0);
    CIRCUMFERENCE - (score / 100.0) * CIRCUMFERENCE
}

/// カウントアップ1刻みあたりの増分
pub fn count_up_increment(target: f64, duration_ms: u32, tick_ms: u32) -> f64 {
    target / (f64::from(duration_ms) / f64::from(tick_ms))
}

/// スコアの色分け: ≥80 success, ≥60 warning, それ未満 critical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Success,
    Warning,
    Critical,
}

impl ScoreTone {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTone::Success
        } else if score >= 60.0 {
            ScoreTone::Warning
        } else {
            ScoreTone::Critical
        }
    }

    /// 対応するCSSカスタムプロパティ名
    pub fn css_var(&self) -> &'static str {
        match self {
            ScoreTone::Success => "--success",
            ScoreTone::Warning => "--warning",
            ScoreTone::Critical => "--critical",
        }
    }
}

/// リスクレベルのアイコンと色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskStyle {
    pub icon: &'static str,
    pub css_var: &'static str,
}

/// リスクレベル文字列から表示スタイルへ
///
/// 未知の値はMEDIUM扱いにフォールバックする。
pub fn risk_style(risk_level: &str) -> RiskStyle {
    match risk_level {
        "LOW" => RiskStyle {
            icon: "✅",
            css_var: "--success",
        },
        "HIGH" => RiskStyle {
            icon: "🔶",
            css_var: "--warning",
        },
        "CRITICAL" => RiskStyle {
            icon: "🚨",
            css_var: "--critical",
        },
        // MEDIUM と未知の値
        _ => RiskStyle {
            icon: "⚠️",
            css_var: "--warning",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tone_thresholds() {
        assert_eq!(ScoreTone::for_score(100.0), ScoreTone::Success);
        assert_eq!(ScoreTone::for_score(92.0), ScoreTone::Success);
        assert_eq!(ScoreTone::for_score(80.0), ScoreTone::Success);
        assert_eq!(ScoreTone::for_score(79.9), ScoreTone::Warning);
        assert_eq!(ScoreTone::for_score(60.0), ScoreTone::Warning);
        assert_eq!(ScoreTone::for_score(59.9), ScoreTone::Critical);
        assert_eq!(ScoreTone::for_score(0.0), ScoreTone::Critical);
    }

    #[test]
    fn test_score_tone_css_var() {
        assert_eq!(ScoreTone::Success.css_var(), "--success");
        assert_eq!(ScoreTone::Warning.css_var(), "--warning");
        assert_eq!(ScoreTone::Critical.css_var(), "--critical");
    }

    #[test]
    fn test_stroke_offset_endpoints() {
        // スコア0で円周全体、100で0
        assert!((stroke_offset(0.0) - CIRCUMFERENCE).abs() < 1e-9);
        assert!(stroke_offset(100.0).abs() < 1e-9);
    }

    #[test]
    fn test_stroke_offset_midpoint() {
        let half = stroke_offset(50.0);
        assert!((half - CIRCUMFERENCE / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_stroke_offset_clamps_out_of_range() {
        assert_eq!(stroke_offset(-10.0), stroke_offset(0.0));
        assert_eq!(stroke_offset(150.0), stroke_offset(100.0));
    }

    #[test]
    fn test_count_up_increment() {
        // 92を1500ms/16ms刻みで: 92 / 93.75 ≈ 0.9813
        let inc = count_up_increment(92.0, SCORE_ANIM_MS, SCORE_TICK_MS);
        assert!((inc - 92.0 / 93.75).abs() < 1e-9);

        // 全刻みを足すとターゲットに一致する
        let ticks = f64::from(SCORE_ANIM_MS) / f64::from(SCORE_TICK_MS);
        assert!((inc * ticks - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_up_increment_zero_target() {
        assert_eq!(count_up_increment(0.0, SCORE_ANIM_MS, SCORE_TICK_MS), 0.0);
    }

    // =============================================
    // リスクレベルのスタイルマッピング
    // =============================================

    #[test]
    fn test_risk_style_known_levels() {
        assert_eq!(risk_style("LOW").icon, "✅");
        assert_eq!(risk_style("LOW").css_var, "--success");
        assert_eq!(risk_style("MEDIUM").icon, "⚠️");
        assert_eq!(risk_style("MEDIUM").css_var, "--warning");
        assert_eq!(risk_style("HIGH").icon, "🔶");
        assert_eq!(risk_style("HIGH").css_var, "--warning");
        assert_eq!(risk_style("CRITICAL").icon, "🚨");
        assert_eq!(risk_style("CRITICAL").css_var, "--critical");
    }

    #[test]
    fn test_risk_style_unknown_falls_back_to_medium() {
        for level in ["", "unknown", "low", "Critical", "SEVERE"] {
            assert_eq!(risk_style(level), risk_style("MEDIUM"), "level={level:?}");
        }
    }
}
