use super::{citation_widget, layout, rating_badge, Html};
use crate::catalog::{normalize, CitationRef, RatingAxis, Stance};
use crate::report::AxisRatingView;

const SAMPLE_LABELS: [&str; 6] = ["Excellent", "Good", "Moderate", "Poor", "Extremely Poor", "Unrated"];

/// Every widget variant, rendered from synthetic values.
pub fn design_preview_page() -> String {
    let mut w = Html::new();
    w.push("<h1>Design Preview</h1><h2>Rating tiers</h2><div>");
    for label in SAMPLE_LABELS {
        let normalized = normalize(label);
        rating_badge(
            &mut w,
            &AxisRatingView {
                axis: RatingAxis::DomesticPolicy,
                axis_label: RatingAxis::DomesticPolicy.label(),
                label,
                score: normalized.score,
                tier: normalized.tier,
            },
        );
    }
    w.push("</div><h2>Stances</h2><div>");
    for stance in Stance::ordered() {
        w.push("<div class=\"position-card bucket-")
            .push(stance.bucket().as_str())
            .push("\"><span class=\"badge ")
            .push(stance.css_class())
            .push("\">")
            .text(stance.label())
            .push("</span></div>");
    }
    w.push("</div><h2>Citation</h2><p>Sample narrative sentence");
    citation_widget(
        &mut w,
        CitationRef {
            index: 1,
            url: "https://example.org/source",
        },
    );
    w.push(".</p>");
    layout("Design Preview", &w.finish())
}
