//! Inline citation markers (`[3]`) inside narrative text.

use super::domain::Citation;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// How long the "Copied!" confirmation stays up after a copy.
pub const COPY_CONFIRMATION_MS: i64 = 2_000;

fn citation_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\[[0-9]+\]").expect("citation marker pattern is valid"))
}

/// A resolved marker: the id as written and the source it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitationRef<'a> {
    pub index: u32,
    pub url: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment<'a> {
    Text { text: &'a str },
    Citation(CitationRef<'a>),
}

impl<'a> Segment<'a> {
    pub const fn text(text: &'a str) -> Self {
        Self::Text { text }
    }
}

/// Splits `text` on citation markers, resolving each against `citations`.
///
/// Lookups only ever consult the citations passed in, which must be the
/// owning party's list. A marker with no matching id stays in the output as
/// literal text. With no citations, or no markers, the text comes back as a
/// single segment.
pub fn interpolate<'a>(text: &'a str, citations: &'a [Citation]) -> Vec<Segment<'a>> {
    if citations.is_empty() {
        return vec![Segment::text(text)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for marker in citation_marker().find_iter(text) {
        segments.push(Segment::text(&text[cursor..marker.start()]));
        segments.push(resolve_marker(marker.as_str(), citations));
        cursor = marker.end();
    }

    if segments.is_empty() {
        return vec![Segment::text(text)];
    }

    segments.push(Segment::text(&text[cursor..]));
    segments
}

fn resolve_marker<'a>(marker: &'a str, citations: &'a [Citation]) -> Segment<'a> {
    let digits = &marker[1..marker.len() - 1];
    let found = digits
        .parse::<u32>()
        .ok()
        .and_then(|id| citations.iter().find(|citation| citation.id == id));

    match found {
        Some(citation) => Segment::Citation(CitationRef {
            index: citation.id,
            url: &citation.url,
        }),
        None => Segment::text(marker),
    }
}

/// Concatenates segments back into text, writing citations as `[n]`.
pub fn to_plain_text(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text { text } => out.push_str(text),
            Segment::Citation(reference) => {
                out.push_str(&format!("[{}]", reference.index));
            }
        }
    }
    out
}

/// Side effects a citation widget asks the browser for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum WidgetEffect<'a> {
    OpenInNewContext { url: &'a str },
    CopyToClipboard { url: &'a str },
}

/// State behind one rendered citation button.
///
/// Both actions are contained: they never reach a click handler on the
/// surrounding card.
#[derive(Debug, Clone)]
pub struct CitationWidget<'a> {
    reference: CitationRef<'a>,
    copied_at: Option<DateTime<Utc>>,
}

impl<'a> CitationWidget<'a> {
    pub fn new(reference: CitationRef<'a>) -> Self {
        Self {
            reference,
            copied_at: None,
        }
    }

    pub fn label(&self) -> String {
        format!("[{}]", self.reference.index)
    }

    pub fn url(&self) -> &'a str {
        self.reference.url
    }

    pub fn open(&self) -> WidgetEffect<'a> {
        WidgetEffect::OpenInNewContext {
            url: self.reference.url,
        }
    }

    pub fn copy(&mut self, now: DateTime<Utc>) -> WidgetEffect<'a> {
        self.copied_at = Some(now);
        WidgetEffect::CopyToClipboard {
            url: self.reference.url,
        }
    }

    pub fn is_confirming(&self, now: DateTime<Utc>) -> bool {
        self.copied_at
            .map(|at| now - at < Duration::milliseconds(COPY_CONFIRMATION_MS))
            .unwrap_or(false)
    }

    pub fn copy_label(&self, now: DateTime<Utc>) -> &'static str {
        if self.is_confirming(now) {
            "Copied!"
        } else {
            "Copy Link"
        }
    }
}
