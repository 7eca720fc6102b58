pub mod citations;
pub mod domain;
pub mod rating;
pub mod search;
pub mod timeline;

pub use citations::{interpolate, CitationRef, CitationWidget, Segment};
pub use domain::{
    Candidate, Citation, Issue, Party, PartyPosition, PartyType, PerAxis, RatingAxis, Stance,
    TimelineEvent,
};
pub use rating::{normalize, RatingScore, RatingTier};
pub use search::{filter_parties, BrowseState, BrowseView};
pub use timeline::TimelineBook;

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("party id '{0}' appears more than once")]
    DuplicatePartyId(String),
}

/// Shape of a catalog document on disk.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    parties: Vec<Party>,
    #[serde(default)]
    issues: Vec<Issue>,
    #[serde(default)]
    positions: Vec<PartyPosition>,
    #[serde(default)]
    timelines: TimelineBook,
    #[serde(default)]
    highlights: HashMap<String, PerAxis<Vec<String>>>,
}

/// The read-only data set every view draws from. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parties: Vec<Party>,
    issues: Vec<Issue>,
    positions: Vec<PartyPosition>,
    timelines: TimelineBook,
    highlights: HashMap<String, PerAxis<Vec<String>>>,
}

impl Catalog {
    pub fn new(
        parties: Vec<Party>,
        issues: Vec<Issue>,
        positions: Vec<PartyPosition>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            parties,
            issues,
            positions,
            ..Self::default()
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn with_timelines(mut self, timelines: TimelineBook) -> Self {
        self.timelines = timelines;
        self
    }

    pub fn with_highlights(mut self, highlights: HashMap<String, PerAxis<Vec<String>>>) -> Self {
        self.highlights = highlights;
        self
    }

    /// The data set compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_reader(BUNDLED_CATALOG.as_bytes())?;
        info!(
            parties = catalog.parties.len(),
            issues = catalog.issues.len(),
            positions = catalog.positions.len(),
            source = "bundled",
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(std::io::BufReader::new(file))?;
        info!(
            parties = catalog.parties.len(),
            issues = catalog.issues.len(),
            positions = catalog.positions.len(),
            source = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        let catalog = Self {
            parties: document.parties,
            issues: document.issues,
            positions: document.positions,
            timelines: document.timelines,
            highlights: document.highlights,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for party in &self.parties {
            if !seen.insert(party.id.as_str()) {
                return Err(CatalogError::DuplicatePartyId(party.id.clone()));
            }

            for axis in RatingAxis::ordered() {
                let label = party.rating(axis);
                if !rating::is_axis_label(axis, label) {
                    warn!(
                        party = %party.id,
                        axis = axis.slug(),
                        label,
                        "rating label outside the axis vocabulary"
                    );
                }
            }
        }

        for party_id in self.timelines.party_ids() {
            if !seen.contains(party_id) {
                warn!(party = party_id, "timeline entry for unknown party");
            }
        }

        Ok(())
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn positions(&self) -> &[PartyPosition] {
        &self.positions
    }

    pub fn party(&self, party_id: &str) -> Option<&Party> {
        let found = self.parties.iter().find(|party| party.id == party_id);
        if found.is_none() {
            debug!(party = party_id, "unknown party id");
        }
        found
    }

    pub fn issue(&self, issue_id: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == issue_id)
    }

    pub fn timeline(&self, party_id: &str) -> &[TimelineEvent] {
        self.timelines.events(party_id)
    }

    pub fn highlights(&self, party_id: &str, axis: RatingAxis) -> &[String] {
        self.highlights
            .get(party_id)
            .map(|per_axis| per_axis.get(axis).as_slice())
            .unwrap_or(&[])
    }
}
