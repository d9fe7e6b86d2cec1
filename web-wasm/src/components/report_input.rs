//! 読影レポート入力コンポーネント

use leptos::prelude::*;
use medai_common::format::group_thousands;
use medai_common::state::CaseState;

#[component]
pub fn ReportInput(case: RwSignal<CaseState>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="report">"Clinical Report"</label>
            <textarea
                id="report"
                rows="8"
                placeholder="Enter the radiology report text..."
                prop:value=move || case.with(|c| c.report().to_string())
                on:input=move |ev| {
                    case.update(|c| c.set_report(event_target_value(&ev)));
                }
            ></textarea>
            <div class="char-count">
                <span>{move || group_thousands(case.with(|c| c.char_count()))}</span>
                " characters"
            </div>
        </div>
    }
}
