//! クライアント側ケース状態
//!
//! 画面が保持する状態（選択中の画像・レポート本文・直近の解析結果）を
//! 1つのオブジェクトに集約する。描画層はここを経由してのみ状態を変更する。

use crate::error::{Error, Result};
use crate::types::AnalysisResponse;

/// 選択中の画像
///
/// 実データはData URLとして保持し、送信時にWASM層がバイト列へ戻す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    /// FileReaderで読み込んだData URL。読込完了まで空。
    pub data_url: String,
}

/// MIMEタイプが画像かどうか
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// 1ケース分のクライアント状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseState {
    image: Option<SelectedImage>,
    report: String,
    result: Option<AnalysisResponse>,
}

impl CaseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を選択する
    ///
    /// 画像以外のMIMEタイプは拒否し、状態は変化しない。
    pub fn select_image(&mut self, image: SelectedImage) -> Result<()> {
        if !is_image_mime(&image.mime_type) {
            return Err(Error::NotAnImage(image.mime_type));
        }
        self.image = Some(image);
        Ok(())
    }

    /// FileReader完了後にプレビューのData URLを反映する
    pub fn set_preview(&mut self, data_url: String) {
        if let Some(image) = self.image.as_mut() {
            image.data_url = data_url;
        }
    }

    /// 選択中の画像を外す
    pub fn remove_image(&mut self) {
        self.image = None;
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    /// 文字数カウンタ表示用
    pub fn char_count(&self) -> usize {
        self.report.chars().count()
    }

    /// 送信可否: 画像あり かつ トリム後レポートが空でない
    pub fn can_submit(&self) -> bool {
        self.image.is_some() && !self.report.trim().is_empty()
    }

    /// 解析成功時のみ呼ばれる。失敗時は既存の結果を保持する。
    pub fn store_result(&mut self, result: AnalysisResponse) {
        self.result = Some(result);
    }

    pub fn result(&self) -> Option<&AnalysisResponse> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// 新規ケース: 全状態をクリアする
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_image() -> SelectedImage {
        SelectedImage {
            file_name: "chest.png".to_string(),
            mime_type: "image/png".to_string(),
            data_url: String::new(),
        }
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_select_image_rejects_non_image() {
        let mut state = CaseState::new();
        let err = state
            .select_image(SelectedImage {
                file_name: "report.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                data_url: String::new(),
            })
            .unwrap_err();

        assert!(matches!(err, Error::NotAnImage(_)));
        // 状態は変化しない
        assert!(state.image().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_select_image_keeps_previous_on_rejection() {
        let mut state = CaseState::new();
        state.select_image(png_image()).expect("画像選択失敗");

        let result = state.select_image(SelectedImage {
            file_name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
            data_url: String::new(),
        });

        assert!(result.is_err());
        assert_eq!(state.image().map(|i| i.file_name.as_str()), Some("chest.png"));
    }

    #[test]
    fn test_set_preview() {
        let mut state = CaseState::new();
        state.select_image(png_image()).expect("画像選択失敗");
        state.set_preview("data:image/png;base64,iVBORw0KGgo=".to_string());

        assert_eq!(
            state.image().map(|i| i.data_url.as_str()),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_set_preview_without_image_is_noop() {
        let mut state = CaseState::new();
        state.set_preview("data:image/png;base64,xxxx".to_string());
        assert!(state.image().is_none());
    }

    // =============================================
    // 送信可否の全組み合わせ
    // =============================================

    #[test]
    fn test_can_submit_requires_both_inputs() {
        // (画像あり/なし) × (本文あり/なし/空白のみ)
        let cases = [
            (false, "", false),
            (false, "Patient stable.", false),
            (false, "   \n\t ", false),
            (true, "", false),
            (true, "   \n\t ", false),
            (true, "Patient stable.", true),
        ];

        for (has_image, report, expected) in cases {
            let mut state = CaseState::new();
            if has_image {
                state.select_image(png_image()).expect("画像選択失敗");
            }
            state.set_report(report.to_string());
            assert_eq!(
                state.can_submit(),
                expected,
                "has_image={has_image}, report={report:?}"
            );
        }
    }

    #[test]
    fn test_remove_image_disables_submit() {
        let mut state = CaseState::new();
        state.select_image(png_image()).expect("画像選択失敗");
        state.set_report("Patient shows no signs of fracture.".to_string());
        assert!(state.can_submit());

        state.remove_image();
        assert!(!state.can_submit());
        assert!(state.image().is_none());
        // レポート本文は残る
        assert!(!state.report().is_empty());
    }

    #[test]
    fn test_char_count() {
        let mut state = CaseState::new();
        assert_eq!(state.char_count(), 0);

        state.set_report("abc def".to_string());
        assert_eq!(state.char_count(), 7);

        // マルチバイトも1文字として数える
        state.set_report("骨折なし".to_string());
        assert_eq!(state.char_count(), 4);
    }

    #[test]
    fn test_store_result() {
        let mut state = CaseState::new();
        assert!(!state.has_result());

        let mut response = AnalysisResponse::default();
        response.timestamp = "20250830_101500".to_string();
        state.store_result(response);

        assert!(state.has_result());
        assert_eq!(
            state.result().map(|r| r.timestamp.as_str()),
            Some("20250830_101500")
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = CaseState::new();
        state.select_image(png_image()).expect("画像選択失敗");
        state.set_report("Report body".to_string());
        state.store_result(AnalysisResponse::default());

        state.reset();

        assert!(state.image().is_none());
        assert_eq!(state.report(), "");
        assert!(!state.has_result());
        assert!(!state.can_submit());
    }
}
