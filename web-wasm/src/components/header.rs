//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"MedAI Consensus"</h1>
            <p class="subtitle">"Doctor-AI Diagnostic Agreement System"</p>
        </header>
    }
}
