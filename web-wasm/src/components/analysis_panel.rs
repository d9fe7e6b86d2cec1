//! 解析パネルコンポーネント
//!
//! AI画像解析と読影レポート解析の両方で使う共通パネル。
//! 画像側は所見ごとのseverity/confidenceを表示し、レポート側は本文のみ。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use medai_common::format::trim_number;
use medai_common::types::Finding;

#[component]
pub fn AnalysisPanel(
    icon: &'static str,
    title: &'static str,
    #[prop(into)] diagnosis: Signal<String>,
    #[prop(into)] confidence: Signal<f64>,
    #[prop(into)] findings: Signal<Vec<Finding>>,
    show_finding_meta: bool,
    fill_delay_ms: u32,
) -> impl IntoView {
    let (bar_width, set_bar_width) = signal(0.0_f64);

    // CSSトランジションが見えるよう、バー幅は少し遅らせて反映する
    Effect::new(move |_| {
        let value = confidence.get();
        set_bar_width.set(0.0);
        Timeout::new(fill_delay_ms, move || set_bar_width.set(value)).forget();
    });

    let finding_icon = if show_finding_meta { "🔍" } else { "📋" };

    view! {
        <div class="analysis-panel">
            <h3>
                <span class="panel-icon">{icon}</span>
                {title}
            </h3>
            <div class="diagnosis">{move || diagnosis.get()}</div>
            <div class="confidence-row">
                <span class="confidence-value">
                    {move || trim_number(confidence.get())}"%"
                </span>
                <div class="confidence-bar">
                    <div
                        class="confidence-fill"
                        style:width=move || format!("{}%", bar_width.get())
                    />
                </div>
            </div>
            <div class="findings">
                {move || {
                    findings
                        .get()
                        .into_iter()
                        .map(|finding| {
                            let item_class = if show_finding_meta && !finding.severity.is_empty() {
                                format!("finding-item {}", finding.severity)
                            } else {
                                "finding-item".to_string()
                            };
                            let meta = if show_finding_meta {
                                finding.confidence.map(|c| format!("{}%", trim_number(c)))
                            } else {
                                None
                            };
                            view! {
                                <div class=item_class>
                                    <span class="finding-icon">{finding_icon}</span>
                                    <span class="finding-text">{finding.finding}</span>
                                    {meta.map(|m| view! { <span class="finding-confidence">{m}</span> })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
