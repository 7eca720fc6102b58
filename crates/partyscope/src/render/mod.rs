//! Server-side HTML for the catalog pages.
//!
//! Output is deterministic: the same view model always renders to the same
//! bytes. Every piece of catalog text passes through [`esc`] or [`attr`].

mod pages;
#[cfg(feature = "design-preview")]
mod preview;

pub use pages::{comparison_page, home_page, not_found_page, party_report_page, reports_index_page};
#[cfg(feature = "design-preview")]
pub use preview::design_preview_page;

use crate::catalog::citations::COPY_CONFIRMATION_MS;
use crate::catalog::{CitationRef, CitationWidget, Segment};
use crate::report::AxisRatingView;
use std::borrow::Cow;

pub(crate) fn esc(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

pub(crate) fn attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

pub(crate) struct Html {
    buf: String,
}

impl Html {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
        }
    }

    pub(crate) fn push<S: AsRef<str>>(&mut self, s: S) -> &mut Self {
        self.buf.push_str(s.as_ref());
        self
    }

    pub(crate) fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&esc(s));
        self
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

const STYLES: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f9fafb;color:#111827}\
header,main{max-width:72rem;margin:0 auto;padding:1.5rem}\
nav a{margin-right:1rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(20rem,1fr));gap:1.5rem}\
.party-card,.report-entry,.position-card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;cursor:pointer}\
.badge{display:inline-block;border-radius:9999px;padding:.1rem .6rem;font-size:.8rem;margin:.1rem}\
.tier-excellent{background:#d1fae5;color:#065f46}\
.tier-good{background:#ecfdf5;color:#047857}\
.tier-moderate{background:#eff6ff;color:#1d4ed8}\
.tier-poor{background:#fff7ed;color:#c2410c}\
.tier-extremely-poor{background:#fef2f2;color:#b91c1c}\
.tier-default{background:#f9fafb;color:#374151}\
.stance-strongly-supportive{background:#d1fae5;color:#065f46}\
.stance-supportive{background:#ecfdf5;color:#047857}\
.stance-neutral{background:#f3f4f6;color:#1f2937}\
.stance-opposed{background:#ffedd5;color:#9a3412}\
.stance-strongly-opposed{background:#fee2e2;color:#991b1b}\
.bucket-supportive{border-left:4px solid #10b981}\
.bucket-neutral{border-left:4px solid #9ca3af}\
.bucket-opposed{border-left:4px solid #ef4444}\
.leaning{position:relative;height:.5rem;background:linear-gradient(90deg,#ef4444,#9ca3af,#3b82f6);border-radius:9999px}\
.leaning-marker{position:absolute;top:-.25rem;width:1rem;height:1rem;border-radius:9999px;background:#111827;transform:translateX(-50%)}\
.win-rate{height:.5rem;background:#e5e7eb;border-radius:9999px;overflow:hidden;margin:.25rem 0}\
.win-rate span{display:block;height:100%}\
.win-rate-strong{background:#10b981}\
.win-rate-solid{background:#22c55e}\
.win-rate-moderate{background:#3b82f6}\
.win-rate-low{background:#f97316}\
.win-rate-none{background:#9ca3af}\
.narrative{white-space:pre-line;line-height:1.6}\
.citation{position:relative;display:inline-block}\
.citation-open{font-size:.75rem;padding:0 .35rem;border-radius:9999px;background:#f3f4f6;text-decoration:none}\
.citation-tip{display:none;position:absolute;bottom:100%;left:0;background:#fff;border:1px solid #e5e7eb;padding:.5rem;max-width:20rem;word-break:break-all;z-index:10}\
.citation:hover .citation-tip{display:block}\
.muted{color:#9ca3af}\
table{width:100%;border-collapse:collapse}th,td{padding:.75rem;border-bottom:1px solid #f3f4f6;text-align:left}\
";

fn script() -> String {
    format!(
        "function partyscopeCopy(event,button){{event.stopPropagation();\
navigator.clipboard.writeText(button.dataset.url);button.textContent=\"Copied!\";\
setTimeout(function(){{button.textContent=\"Copy Link\";}},{COPY_CONFIRMATION_MS});}}\
function partyscopeOpen(event,url){{event.stopPropagation();event.preventDefault();\
window.open(url,\"_blank\",\"noopener\");}}"
    )
}

/// Wraps page content in the shared document shell.
pub(crate) fn layout(title: &str, body: &str) -> String {
    let mut w = Html::new();
    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">")
        .push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")
        .push("<title>")
        .text(title)
        .push(" | Partyscope</title><style>")
        .push(STYLES)
        .push("</style><script>")
        .push(script())
        .push("</script></head><body>")
        .push("<header><nav><a href=\"/\">Home</a><a href=\"/reports\">Reports</a>")
        .push("<a href=\"/compare\">Compare</a></nav></header><main>")
        .push(body)
        .push("</main></body></html>");
    w.finish()
}

pub(crate) fn rating_badge(w: &mut Html, rating: &AxisRatingView<'_>) {
    w.push("<span class=\"badge ")
        .push(rating.tier.css_class())
        .push("\" title=\"")
        .push(attr(rating.axis_label))
        .push(": ")
        .push(rating.score.to_string())
        .push("/100\">")
        .text(rating.axis_label)
        .push(": ")
        .text(rating.label)
        .push("</span>");
}

/// Citation button: opens the source in a new tab, with a copy control in
/// the tooltip. Neither action bubbles to the enclosing element.
pub(crate) fn citation_widget(w: &mut Html, reference: CitationRef<'_>) {
    let widget = CitationWidget::new(reference);
    let url = attr(widget.url());
    w.push("<span class=\"citation\"><a class=\"citation-open\" href=\"")
        .push(&url)
        .push("\" target=\"_blank\" rel=\"noopener noreferrer\" onclick=\"partyscopeOpen(event,this.href)\">")
        .text(&widget.label())
        .push("</a><span class=\"citation-tip\"><span class=\"citation-url\">")
        .text(widget.url())
        .push("</span><button type=\"button\" class=\"citation-copy\" data-url=\"")
        .push(&url)
        .push("\" onclick=\"partyscopeCopy(event,this)\">Copy Link</button></span></span>");
}

pub(crate) fn narrative(w: &mut Html, segments: &[Segment<'_>]) {
    w.push("<div class=\"narrative\">");
    for segment in segments {
        match segment {
            Segment::Text { text } => {
                w.text(text);
            }
            Segment::Citation(reference) => citation_widget(w, *reference),
        }
    }
    w.push("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attributes() {
        assert_eq!(esc("<b>Labor & Greens</b>"), "&lt;b&gt;Labor &amp; Greens&lt;/b&gt;");
        assert_eq!(attr("a\"b"), "a&quot;b");
    }

    #[test]
    fn citation_widget_contains_both_actions() {
        let mut w = Html::new();
        citation_widget(
            &mut w,
            CitationRef {
                index: 3,
                url: "https://example.org/?a=1&b=2",
            },
        );
        let html = w.finish();
        assert!(html.contains(">[3]</a>"));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("href=\"https://example.org/?a=1&amp;b=2\""));
        assert!(html.contains("partyscopeCopy(event,this)"));
        assert!(html.contains("partyscopeOpen(event,this.href)"));
    }

    #[test]
    fn script_stops_propagation_and_resets_after_delay() {
        let script = script();
        assert_eq!(script.matches("event.stopPropagation()").count(), 2);
        assert!(script.contains("},2000);"));
    }

    #[test]
    fn narrative_keeps_dangling_markers_as_text() {
        let mut w = Html::new();
        narrative(
            &mut w,
            &[
                Segment::text("See "),
                Segment::text("[9]"),
                Segment::text(" <here>"),
            ],
        );
        assert_eq!(
            w.finish(),
            "<div class=\"narrative\">See [9] &lt;here&gt;</div>"
        );
    }
}
