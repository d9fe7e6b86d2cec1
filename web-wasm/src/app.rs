//! アプリケーションルート
//!
//! 入力フォーム（画像アップロード + レポート本文）と解析結果表示を束ね、
//! ケース状態 `CaseState` への変更をここのハンドラに集約する。

use gloo::console;
use gloo::dialogs;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use medai_common::export::export_document;
use medai_common::state::{CaseState, SelectedImage};
use medai_common::views::ImageView;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::components::header::Header;
use crate::components::report_input::ReportInput;
use crate::components::results_section::ResultsSection;
use crate::components::upload_panel::UploadPanel;
use crate::{anim, api, export};

#[component]
pub fn App() -> impl IntoView {
    let case = RwSignal::new(CaseState::new());
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (active_view, set_active_view) = signal(ImageView::default());
    // ゲージアニメーション中の表示値。目標値はresult側が持つ。
    let (shown_score, set_shown_score) = signal(0.0_f64);

    let result = Memo::new(move |_| case.with(|c| c.result().cloned()));
    let selected_image = Signal::derive(move || case.with(|c| c.image().cloned()));

    let on_image_selected = move |file: web_sys::File| {
        let selected = SelectedImage {
            file_name: file.name(),
            mime_type: file.type_(),
            data_url: String::new(),
        };
        let mut accepted = false;
        case.update(|c| accepted = c.select_image(selected).is_ok());
        if !accepted {
            console::warn!(format!("非画像ファイルを拒否: {}", file.type_()));
            dialogs::alert("Please upload a valid image file");
            clear_file_input();
            return;
        }
        read_preview(file, case);
    };

    let on_image_removed = move |_: ()| {
        case.update(|c| c.remove_image());
        clear_file_input();
    };

    let on_submit = move |_| {
        if !case.with_untracked(|c| c.can_submit()) {
            dialogs::alert("Please provide both image and report");
            return;
        }
        let Some(image) = case.with_untracked(|c| c.image().cloned()) else {
            return;
        };
        let report = case.with_untracked(|c| c.report().to_string());

        set_is_analyzing.set(true);
        spawn_local(async move {
            match api::analyze_case(&image, &report).await {
                Ok(response) => {
                    let score = response.agreement_score;
                    set_active_view.set(ImageView::default());
                    set_shown_score.set(0.0);
                    case.update(|c| c.store_result(response));
                    reveal_results();
                    anim::animate_score(score, set_shown_score);
                }
                Err(e) => {
                    console::error!(format!("解析リクエスト失敗: {e}"));
                    dialogs::alert("Analysis failed. Please try again.");
                }
            }
            set_is_analyzing.set(false);
        });
    };

    let on_switch_view = move |view: ImageView| set_active_view.set(view);

    let on_export = move |_: ()| {
        let generated_at: String = js_sys::Date::new_0()
            .to_locale_string("en-US", &JsValue::UNDEFINED)
            .into();
        // 結果未保存ならNoneでダウンロードは起きない
        let Some((file_name, content)) =
            case.with_untracked(|c| export_document(c, &generated_at))
        else {
            return;
        };
        if let Err(e) = export::download_text(&content, &file_name) {
            console::error!(format!("レポート保存失敗: {e:?}"));
        }
    };

    let on_new_case = move |_: ()| {
        case.update(|c| c.reset());
        set_shown_score.set(0.0);
        set_active_view.set(ImageView::default());
        clear_file_input();
        scroll_to_top();
    };

    view! {
        <Header />
        <main class="container">
            <section class="input-section">
                <UploadPanel
                    image=selected_image
                    on_select=on_image_selected
                    on_remove=on_image_removed
                />
                <ReportInput case=case />
                <button
                    class="btn btn-primary analyze-btn"
                    class:loading=move || is_analyzing.get()
                    disabled=move || !case.with(|c| c.can_submit()) || is_analyzing.get()
                    on:click=on_submit
                >
                    {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Case" }}
                </button>
            </section>

            <Show when=move || case.with(|c| c.has_result())>
                <ResultsSection
                    result=result
                    shown_score=shown_score
                    active_view=active_view
                    on_switch_view=on_switch_view
                    on_export=on_export
                    on_new_case=on_new_case
                />
            </Show>
        </main>
    }
}

/// FileReaderでプレビュー用Data URLを読み込み、完了時に状態へ反映する
fn read_preview(file: web_sys::File, case: RwSignal<CaseState>) {
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let onload = Closure::wrap(Box::new(move |event: web_sys::ProgressEvent| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(reader) = target.dyn_into::<web_sys::FileReader>() else {
            return;
        };
        if let Ok(result) = reader.result() {
            if let Some(data_url) = result.as_string() {
                case.update(|c| c.set_preview(data_url));
            }
        }
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if reader.read_as_data_url(&file).is_err() {
        console::error!("FileReaderの起動に失敗");
    }
}

/// file inputの値をクリアする（同じファイルの再選択を可能にする）
fn clear_file_input() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(input) = document.get_element_by_id("image") {
        if let Ok(input) = input.dyn_into::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}

/// 結果セクションへスムーズスクロールする（描画完了を待って少し遅らせる）
fn reveal_results() {
    Timeout::new(100, || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(section) = document.get_element_by_id("results-section") {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
