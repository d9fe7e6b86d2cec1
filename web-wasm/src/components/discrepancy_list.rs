//! 不一致リストコンポーネント
//!
//! countが0かセクション自体が無い場合はパネルごと非表示。

use leptos::prelude::*;
use medai_common::format::title_case_type;
use medai_common::types::Discrepancies;

#[component]
pub fn DiscrepancyList(
    #[prop(into)] discrepancies: Signal<Option<Discrepancies>>,
) -> impl IntoView {
    let visible = move || discrepancies.get().map(|d| d.count > 0).unwrap_or(false);

    view! {
        <Show when=visible>
            <div class="discrepancy-section">
                <h3>
                    "⚠️ Discrepancies ("
                    {move || discrepancies.get().map(|d| d.count).unwrap_or(0)}
                    ")"
                </h3>
                <p class="discrepancy-summary">
                    {move || discrepancies.get().map(|d| d.summary).unwrap_or_default()}
                </p>
                <div class="discrepancy-list">
                    {move || {
                        discrepancies
                            .get()
                            .map(|d| d.items)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class=format!("discrepancy-item {}", item.severity)>
                                        <div class="discrepancy-header">
                                            <div class="discrepancy-type">
                                                {title_case_type(&item.kind)}
                                            </div>
                                            <div class=format!("severity-badge {}", item.severity)>
                                                {item.severity.clone()}
                                            </div>
                                        </div>
                                        <div class="discrepancy-desc">{item.description}</div>
                                        <div class="discrepancy-comparison">
                                            <div class="comparison-col">
                                                <div class="comparison-label">"🤖 AI Finding"</div>
                                                <div class="comparison-value">{item.ai_finding}</div>
                                            </div>
                                            <div class="comparison-col">
                                                <div class="comparison-label">"👨‍⚕️ Report Finding"</div>
                                                <div class="comparison-value">{item.doctor_finding}</div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
