//! 結果アクションコンポーネント（エクスポート・新規ケース）

use leptos::prelude::*;

#[component]
pub fn ActionBar<FE, FN>(on_export: FE, on_new_case: FN) -> impl IntoView
where
    FE: Fn(()) + Clone + Send + Sync + 'static,
    FN: Fn(()) + Clone + Send + Sync + 'static,
{
    view! {
        <div class="action-bar">
            <button
                class="btn btn-secondary"
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                "Export Report"
            </button>
            <button
                class="btn btn-primary"
                on:click={
                    let on_new_case = on_new_case.clone();
                    move |_| on_new_case(())
                }
            >
                "New Case"
            </button>
        </div>
    }
}
