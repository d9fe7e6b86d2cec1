//! 画像アップロードコンポーネント

use leptos::prelude::*;
use medai_common::state::SelectedImage;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn UploadPanel<FS, FR>(
    #[prop(into)] image: Signal<Option<SelectedImage>>,
    on_select: FS,
    on_remove: FR,
) -> impl IntoView
where
    FS: Fn(web_sys::File) + Clone + Send + Sync + 'static,
    FR: Fn(()) + Clone + Send + Sync + 'static,
{
    let on_change = {
        let on_select = on_select.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_select(file);
            }
        }
    };

    view! {
        <div class="form-group upload-group">
            <label for="image">"Medical Image"</label>
            <input
                type="file"
                id="image"
                accept="image/*"
                on:change=on_change
            />
            <Show when=move || image.get().is_some()>
                <div class="image-preview">
                    <img
                        src=move || image.get().map(|i| i.data_url).unwrap_or_default()
                        alt=move || image.get().map(|i| i.file_name).unwrap_or_default()
                    />
                    <button
                        class="btn btn-small btn-tertiary"
                        on:click={
                            let on_remove = on_remove.clone();
                            move |_| on_remove(())
                        }
                    >
                        "Remove"
                    </button>
                </div>
            </Show>
        </div>
    }
}
