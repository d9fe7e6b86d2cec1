//! 解析リクエスト
//!
//! 選択画像（Data URL）とレポート本文をmultipartで POST /analyze に送り、
//! JSONレスポンスを契約型にパースする。リトライ・キャンセルは行わない。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use medai_common::error::{Error, Result};
use medai_common::state::SelectedImage;
use medai_common::types::AnalysisResponse;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

const ANALYZE_URL: &str = "/analyze";

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出失敗時は "image/png" をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/png")
}

/// Data URLを画像バイト列に戻す
fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::InvalidImageData("not a data URL".to_string()))?;
    STANDARD
        .decode(base64_data)
        .map_err(|e| Error::InvalidImageData(e.to_string()))
}

/// ケース1件を解析にかける
///
/// # Arguments
/// * `image` - 選択中の画像（プレビュー読込済みのData URLを持つ）
/// * `report` - 読影レポート本文
pub async fn analyze_case(image: &SelectedImage, report: &str) -> Result<AnalysisResponse> {
    let bytes = decode_data_url(&image.data_url)?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let props = BlobPropertyBag::new();
    props.set_type(extract_mime_type_from_data_url(&image.data_url));
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props).map_err(js_err)?;

    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("image", &blob, &image.file_name)
        .map_err(js_err)?;
    form.append_with_str("report", report).map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // Content-Typeはブラウザがboundary付きで設定する
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Network("fetch did not return a Response".to_string()))?;

    if !resp.ok() {
        // エラーボディのパースは試みず、ステータスだけを失敗として返す
        return Err(Error::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::Network("response body is not text".to_string()))?;

    parse_response(&body)
}

/// レスポンスボディをパースする
fn parse_response(body: &str) -> Result<AnalysisResponse> {
    let response: AnalysisResponse = serde_json::from_str(body)?;
    Ok(response)
}

fn js_err(value: JsValue) -> Error {
    Error::Network(format!("{value:?}"))
}
