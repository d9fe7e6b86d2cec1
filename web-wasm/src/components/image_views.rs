//! 画像比較コンポーネント
//!
//! 原画像とGradCAMヒートマップをトグルで切り替える。
//! アクティブなビューは常にちょうど1つ。

use leptos::prelude::*;
use medai_common::views::ImageView;

#[component]
pub fn ImageViews<F>(
    #[prop(into)] gradcam: Signal<Option<String>>,
    #[prop(into)] original: Signal<Option<String>>,
    active: ReadSignal<ImageView>,
    on_switch: F,
) -> impl IntoView
where
    F: Fn(ImageView) + Clone + Send + Sync + 'static,
{
    view! {
        <div class="image-section">
            <div class="view-toggle">
                {ImageView::ALL
                    .into_iter()
                    .map(|v| {
                        let on_switch = on_switch.clone();
                        view! {
                            <button
                                class="toggle-btn"
                                class:active=move || active.get() == v
                                data-view=v.key()
                                on:click=move |_| on_switch(v)
                            >
                                {v.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="image-views">
                <div class="image-view" class:active=move || active.get() == ImageView::Gradcam>
                    {move || gradcam.get().map(|src| view! { <img src=src alt="AI heatmap" /> })}
                </div>
                <div class="image-view" class:active=move || active.get() == ImageView::Original>
                    {move || original.get().map(|src| view! { <img src=src alt="Original image" /> })}
                </div>
                <div
                    class="image-view comparison"
                    class:active=move || active.get() == ImageView::Comparison
                >
                    {move || original.get().map(|src| view! { <img src=src alt="Original image" /> })}
                    {move || gradcam.get().map(|src| view! { <img src=src alt="AI heatmap" /> })}
                </div>
            </div>
        </div>
    }
}
