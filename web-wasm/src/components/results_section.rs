//! 結果セクション
//!
//! レスポンスを各表示領域に分配する。親の`Show`が結果の存在を
//! 保証するが、ここでの派生は欠落フィールドに耐えるようにしておく。

use leptos::prelude::*;
use medai_common::types::AnalysisResponse;
use medai_common::views::ImageView;

use super::action_bar::ActionBar;
use super::alert_banner::AlertBanner;
use super::analysis_panel::AnalysisPanel;
use super::discrepancy_list::DiscrepancyList;
use super::image_views::ImageViews;
use super::recommendation_panel::RecommendationPanel;
use super::score_card::ScoreCard;

#[component]
pub fn ResultsSection<FV, FE, FN>(
    result: Memo<Option<AnalysisResponse>>,
    shown_score: ReadSignal<f64>,
    active_view: ReadSignal<ImageView>,
    on_switch_view: FV,
    on_export: FE,
    on_new_case: FN,
) -> impl IntoView
where
    FV: Fn(ImageView) + Clone + Send + Sync + 'static,
    FE: Fn(()) + Clone + Send + Sync + 'static,
    FN: Fn(()) + Clone + Send + Sync + 'static,
{
    let data = move || result.get().unwrap_or_default();

    let alert_type = Signal::derive(move || data().alert_type);
    let alert_message = Signal::derive(move || data().alert_message);
    let target_score = Signal::derive(move || data().agreement_score);
    let status = Signal::derive(move || data().status);
    let risk_level = Signal::derive(move || data().risk_level);

    let ai_diagnosis = Signal::derive(move || data().image_analysis.prediction);
    let ai_confidence = Signal::derive(move || data().image_analysis.confidence);
    let ai_findings = Signal::derive(move || {
        data()
            .image_analysis
            .detailed_findings
            .map(|d| d.specific_findings)
            .unwrap_or_default()
    });

    let doctor_diagnosis = Signal::derive(move || data().text_analysis.text_diagnosis);
    let doctor_confidence = Signal::derive(move || data().text_analysis.confidence);
    let doctor_findings = Signal::derive(move || {
        data()
            .text_analysis
            .detailed_findings
            .map(|d| d.specific_findings)
            .unwrap_or_default()
    });

    let discrepancies = Signal::derive(move || data().discrepancies);
    let recommendation = Signal::derive(move || data().recommendation);
    let gradcam = Signal::derive(move || data().gradcam_image);
    let original = Signal::derive(move || data().original_image);

    view! {
        <section id="results-section" class="results-section">
            <AlertBanner alert_type=alert_type message=alert_message />

            <ScoreCard
                target_score=target_score
                shown_score=shown_score
                status=status
                risk_level=risk_level
                risk_description=alert_message
            />

            <div class="analysis-grid">
                <AnalysisPanel
                    icon="🤖"
                    title="AI Image Analysis"
                    diagnosis=ai_diagnosis
                    confidence=ai_confidence
                    findings=ai_findings
                    show_finding_meta=true
                    fill_delay_ms=100
                />
                <AnalysisPanel
                    icon="👨‍⚕️"
                    title="Clinical Report Analysis"
                    diagnosis=doctor_diagnosis
                    confidence=doctor_confidence
                    findings=doctor_findings
                    show_finding_meta=false
                    fill_delay_ms=200
                />
            </div>

            <DiscrepancyList discrepancies=discrepancies />

            <ImageViews
                gradcam=gradcam
                original=original
                active=active_view
                on_switch=on_switch_view
            />

            <RecommendationPanel recommendation=recommendation />

            <ActionBar on_export=on_export on_new_case=on_new_case />
        </section>
    }
}
