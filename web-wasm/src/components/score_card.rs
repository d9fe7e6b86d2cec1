//! 合意スコアカードコンポーネント
//!
//! SVG円ゲージとステータス/リスクバッジ。ゲージの数値は
//! app側のカウントアップシグナル（shown_score）で駆動される。

use leptos::prelude::*;
use medai_common::score::{risk_style, stroke_offset, ScoreTone, CIRCUMFERENCE};

#[component]
pub fn ScoreCard(
    #[prop(into)] target_score: Signal<f64>,
    shown_score: ReadSignal<f64>,
    #[prop(into)] status: Signal<String>,
    #[prop(into)] risk_level: Signal<String>,
    #[prop(into)] risk_description: Signal<String>,
) -> impl IntoView {
    // 色はターゲット値で即時に決める（カウントアップ中も変わらない）
    let tone_var = move || ScoreTone::for_score(target_score.get()).css_var();

    view! {
        <div class="score-card">
            <div class="score-gauge">
                <svg viewBox="0 0 200 200" class="gauge">
                    <circle class="gauge-track" cx="100" cy="100" r="90" />
                    <circle
                        class="gauge-fill"
                        cx="100"
                        cy="100"
                        r="90"
                        style:stroke=move || format!("var({})", tone_var())
                        stroke-dasharray=format!("{CIRCUMFERENCE}")
                        stroke-dashoffset=move || format!("{}", stroke_offset(shown_score.get()))
                    />
                </svg>
                <div
                    class="score-value"
                    style:color=move || format!("var({})", tone_var())
                >
                    {move || format!("{}", shown_score.get().round() as i64)}
                </div>
            </div>
            <div class="score-meta">
                <span class=move || format!("card-badge {}", status.get().to_lowercase())>
                    {move || status.get()}
                </span>
                <div
                    class="risk-indicator"
                    style:border-left=move || {
                        format!("4px solid var({})", risk_style(&risk_level.get()).css_var)
                    }
                >
                    <span class="risk-icon">
                        {move || risk_style(&risk_level.get()).icon}
                    </span>
                    <div>
                        <div class="risk-level">{move || format!("{} Risk", risk_level.get())}</div>
                        <div class="risk-desc">{move || risk_description.get()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
