use super::{categories, ComparisonCell, ComparisonMatrix, IssueQuery, IssueRow, StanceBucket};
use crate::catalog::{Catalog, Issue, PartyPosition, Stance};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PositionDetailView<'a> {
    pub stance: Stance,
    pub stance_label: &'static str,
    pub bucket: StanceBucket,
    pub summary: &'a str,
    pub key_points: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_record: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<&'a str>,
}

impl<'a> From<&'a PartyPosition> for PositionDetailView<'a> {
    fn from(position: &'a PartyPosition) -> Self {
        Self {
            stance: position.stance,
            stance_label: position.stance.label(),
            bucket: position.stance.bucket(),
            summary: &position.summary,
            key_points: &position.key_points,
            voting_record: position.voting_record.as_deref(),
            source_url: position.source_url.as_deref(),
        }
    }
}

/// Result of a single (party, issue) lookup. Absence is a normal answer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PositionLookupView<'a> {
    Stated {
        party_id: &'a str,
        issue_id: &'a str,
        #[serde(flatten)]
        position: PositionDetailView<'a>,
    },
    Absent {
        party_id: &'a str,
        issue_id: &'a str,
    },
}

impl<'a> PositionLookupView<'a> {
    pub fn new(party_id: &'a str, issue_id: &'a str, position: Option<&'a PartyPosition>) -> Self {
        match position {
            Some(position) => Self::Stated {
                party_id,
                issue_id,
                position: position.into(),
            },
            None => Self::Absent { party_id, issue_id },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PartyCellView<'a> {
    pub party_id: &'a str,
    pub party_name: &'a str,
    pub initials: String,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionDetailView<'a>>,
}

impl<'a> From<&ComparisonCell<'a>> for PartyCellView<'a> {
    fn from(cell: &ComparisonCell<'a>) -> Self {
        Self {
            party_id: &cell.party.id,
            party_name: &cell.party.name,
            initials: cell.party.initials(),
            color: &cell.party.color,
            position: cell.position.map(PositionDetailView::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueRowView<'a> {
    pub issue: &'a Issue,
    pub parties: Vec<PartyCellView<'a>>,
}

impl<'a> From<&IssueRow<'a>> for IssueRowView<'a> {
    fn from(row: &IssueRow<'a>) -> Self {
        Self {
            issue: row.issue,
            parties: row.cells.iter().map(PartyCellView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView<'a> {
    pub search: &'a str,
    pub category: &'a str,
    pub categories: Vec<&'a str>,
    pub issues: Vec<IssueRowView<'a>>,
}

impl<'a> ComparisonView<'a> {
    pub fn build(catalog: &'a Catalog, query: &'a IssueQuery) -> Self {
        let matrix = ComparisonMatrix::build(catalog, query);
        Self {
            search: &query.q,
            category: query.category.as_str(),
            categories: categories(catalog.issues()),
            issues: matrix.rows.iter().map(IssueRowView::from).collect(),
        }
    }
}
