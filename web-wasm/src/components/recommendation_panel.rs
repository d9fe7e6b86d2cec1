//! 推奨アクションコンポーネント

use leptos::prelude::*;
use medai_common::types::Recommendation;

#[component]
pub fn RecommendationPanel(
    #[prop(into)] recommendation: Signal<Option<Recommendation>>,
) -> impl IntoView {
    view! {
        <Show when=move || recommendation.get().is_some()>
            <div class="recommendation-panel">
                <h3>"💡 Recommendations"</h3>
                <div class="recommendation-action">
                    <div class="action-type">"Recommended Action"</div>
                    <div class="action-message">
                        {move || recommendation.get().map(|r| r.message).unwrap_or_default()}
                    </div>
                    <ol class="next-steps">
                        {move || {
                            recommendation
                                .get()
                                .map(|r| r.next_steps)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|step| view! { <li>{step}</li> })
                                .collect_view()
                        }}
                    </ol>
                </div>
            </div>
        </Show>
    }
}
