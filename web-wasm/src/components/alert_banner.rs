//! アラートバナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn AlertBanner(
    #[prop(into)] alert_type: Signal<String>,
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=move || format!("alert-banner {}", alert_type.get())>
            {move || message.get()}
        </div>
    }
}
