//! View models for party cards and the detailed party report.

use crate::catalog::timeline::DEFAULT_TIMELINE_TITLE;
use crate::catalog::{
    interpolate, normalize, Candidate, Catalog, Citation, Party, PartyType, RatingAxis,
    RatingTier, Segment, TimelineEvent,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisRatingView<'a> {
    pub axis: RatingAxis,
    pub axis_label: &'static str,
    pub label: &'a str,
    pub score: u8,
    pub tier: RatingTier,
}

impl<'a> AxisRatingView<'a> {
    pub fn new(party: &'a Party, axis: RatingAxis) -> Self {
        let label = party.rating(axis);
        let normalized = normalize(label);
        Self {
            axis,
            axis_label: axis.label(),
            label,
            score: normalized.score,
            tier: normalized.tier,
        }
    }
}

/// Where the leaning marker sits and which band it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeaningView {
    pub value: f32,
    pub marker_pct: f32,
    pub band: &'static str,
}

impl LeaningView {
    pub fn new(value: f32) -> Self {
        let marker_pct = value.clamp(0.0, 100.0);
        let band = match marker_pct {
            v if v < 20.0 => "Far Left",
            v if v < 40.0 => "Center-Left",
            v if v < 60.0 => "Center",
            v if v < 80.0 => "Center-Right",
            _ => "Far Right",
        };
        Self {
            value,
            marker_pct,
            band,
        }
    }
}

/// Card shown in the catalog grid.
#[derive(Debug, Clone, Serialize)]
pub struct PartyCardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<&'a str>,
    pub party_type: PartyType,
    pub type_label: &'static str,
    pub leaning: LeaningView,
    pub ratings: Vec<AxisRatingView<'a>>,
    pub summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<&'a Candidate>,
    pub website_url: &'a str,
}

impl<'a> PartyCardView<'a> {
    pub fn new(party: &'a Party) -> Self {
        Self {
            id: &party.id,
            name: &party.name,
            color: &party.color,
            logo: party.logo.as_deref(),
            party_type: party.party_type,
            type_label: party.party_type.badge_label(),
            leaning: LeaningView::new(party.political_leaning),
            ratings: RatingAxis::ordered()
                .into_iter()
                .map(|axis| AxisRatingView::new(party, axis))
                .collect(),
            summary: party.summary(RatingAxis::DomesticPolicy),
            candidate: party.candidate.as_ref(),
            website_url: &party.website_url,
        }
    }
}

/// One row of the reports index.
#[derive(Debug, Clone, Serialize)]
pub struct ReportIndexEntry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<&'a str>,
    pub type_label: &'static str,
    pub inclusivity: AxisRatingView<'a>,
    pub conflict_stance: AxisRatingView<'a>,
    pub summary: &'a str,
    pub href: String,
}

impl<'a> ReportIndexEntry<'a> {
    pub fn new(party: &'a Party) -> Self {
        Self {
            id: &party.id,
            name: &party.name,
            logo: party.logo.as_deref(),
            type_label: party.party_type.badge_label(),
            inclusivity: AxisRatingView::new(party, RatingAxis::Inclusivity),
            conflict_stance: AxisRatingView::new(party, RatingAxis::ConflictStance),
            summary: party.summary(RatingAxis::Inclusivity),
            href: report_href(&party.id),
        }
    }
}

pub fn report_index(catalog: &Catalog) -> Vec<ReportIndexEntry<'_>> {
    catalog.parties().iter().map(ReportIndexEntry::new).collect()
}

pub fn report_href(party_id: &str) -> String {
    format!("/reports/{}", urlencoding::encode(party_id))
}

/// Colour band for the historic win-rate bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinRateBand {
    Strong,
    Solid,
    Moderate,
    Low,
    None,
}

impl WinRateBand {
    pub fn from_rate(rate: f32) -> Self {
        match rate {
            r if r >= 0.4 => Self::Strong,
            r if r >= 0.2 => Self::Solid,
            r if r >= 0.1 => Self::Moderate,
            r if r > 0.0 => Self::Low,
            _ => Self::None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Solid => "solid",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsView<'a> {
    pub historic_win_rate: f32,
    pub historic_win_rate_display: String,
    pub win_rate_band: WinRateBand,
    pub historic_win_rate_calculation: &'a str,
    pub national_popularity: f32,
    pub national_popularity_display: String,
    pub national_popularity_calculation: &'a str,
}

impl<'a> StatsView<'a> {
    pub fn new(party: &'a Party) -> Self {
        Self {
            historic_win_rate: party.historic_win_rate,
            historic_win_rate_display: format!("{:.0}%", party.historic_win_rate * 100.0),
            win_rate_band: WinRateBand::from_rate(party.historic_win_rate),
            historic_win_rate_calculation: &party.historic_win_rate_calculation,
            national_popularity: party.national_popularity,
            national_popularity_display: format!("{}%", party.national_popularity),
            national_popularity_calculation: &party.national_popularity_calculation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisSection<'a> {
    pub rating: AxisRatingView<'a>,
    pub summary: &'a str,
    pub narrative: Vec<Segment<'a>>,
    pub highlights_heading: &'static str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub highlights: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineView<'a> {
    pub title: &'static str,
    pub events: &'a [TimelineEvent],
}

/// Everything the detail page shows for one party.
#[derive(Debug, Clone, Serialize)]
pub struct PartyReport<'a> {
    pub card: PartyCardView<'a>,
    pub stats: StatsView<'a>,
    pub sections: Vec<AxisSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineView<'a>>,
    pub references: &'a [Citation],
}

impl<'a> PartyReport<'a> {
    pub fn build(catalog: &'a Catalog, party: &'a Party) -> Self {
        let sections = RatingAxis::ordered()
            .into_iter()
            .map(|axis| AxisSection {
                rating: AxisRatingView::new(party, axis),
                summary: party.summary(axis),
                narrative: interpolate(party.details(axis), &party.citations),
                highlights_heading: axis.highlights_heading(),
                highlights: catalog.highlights(&party.id, axis),
            })
            .collect();

        let events = catalog.timeline(&party.id);
        let timeline = (!events.is_empty()).then_some(TimelineView {
            title: DEFAULT_TIMELINE_TITLE,
            events,
        });

        Self {
            card: PartyCardView::new(party),
            stats: StatsView::new(party),
            sections,
            timeline,
            references: &party.citations,
        }
    }

    pub fn section(&self, axis: RatingAxis) -> Option<&AxisSection<'a>> {
        self.sections.iter().find(|section| section.rating.axis == axis)
    }
}

/// Outcome of looking up a report by party id.
#[derive(Debug, Clone)]
pub enum ReportLookup<'a> {
    Found(Box<PartyReport<'a>>),
    NotFound { party_id: String },
}

impl<'a> ReportLookup<'a> {
    pub fn find(catalog: &'a Catalog, party_id: &str) -> Self {
        match catalog.party(party_id) {
            Some(party) => Self::Found(Box::new(PartyReport::build(catalog, party))),
            None => Self::NotFound {
                party_id: party_id.to_string(),
            },
        }
    }
}
