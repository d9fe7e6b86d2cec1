//! 画像表示の切り替えビュー
//!
//! アクティブなビューは常にちょうど1つ。列挙型1値で排他を保証する。

/// 画像比較エリアの固定ビューセット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageView {
    /// GradCAMヒートマップ
    #[default]
    Gradcam,
    /// アップロード原画像
    Original,
    /// 左右並べて比較
    Comparison,
}

impl ImageView {
    pub const ALL: [ImageView; 3] = [ImageView::Gradcam, ImageView::Original, ImageView::Comparison];

    /// トグルボタンとビュー要素の対応キー
    pub fn key(&self) -> &'static str {
        match self {
            ImageView::Gradcam => "gradcam",
            ImageView::Original => "original",
            ImageView::Comparison => "comparison",
        }
    }

    /// トグルボタンのラベル
    pub fn label(&self) -> &'static str {
        match self {
            ImageView::Gradcam => "AI Heatmap",
            ImageView::Original => "Original",
            ImageView::Comparison => "Side by Side",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_gradcam() {
        assert_eq!(ImageView::default(), ImageView::Gradcam);
    }

    #[test]
    fn test_keys_are_distinct() {
        let keys: Vec<_> = ImageView::ALL.iter().map(|v| v.key()).collect();
        assert_eq!(keys, vec!["gradcam", "original", "comparison"]);
    }

    #[test]
    fn test_exactly_one_view_active() {
        // どのビューを選んでも、ALLのうちアクティブ判定が真になるのは1つだけ
        for selected in ImageView::ALL {
            let active_count = ImageView::ALL.iter().filter(|v| **v == selected).count();
            assert_eq!(active_count, 1, "selected={selected:?}");
        }
    }
}
