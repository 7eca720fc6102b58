//! Issue-by-issue comparison of party positions.

pub mod views;

use crate::catalog::search::contains_ignore_case;
use crate::catalog::{Catalog, Issue, Party, PartyPosition, Stance};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Selector value that disables the category check.
pub const ALL_CATEGORIES: &str = "all";

/// Three-way coarsening of [`Stance`] used by the card view. Lossy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StanceBucket {
    Supportive,
    Neutral,
    Opposed,
}

impl StanceBucket {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supportive => "supportive",
            Self::Neutral => "neutral",
            Self::Opposed => "opposed",
        }
    }
}

impl Stance {
    pub const fn bucket(self) -> StanceBucket {
        match self {
            Stance::StronglySupportive | Stance::Supportive => StanceBucket::Supportive,
            Stance::Neutral => StanceBucket::Neutral,
            Stance::Opposed | Stance::StronglyOpposed => StanceBucket::Opposed,
        }
    }
}

/// The recorded position for a pair, or `None` when the party stated none.
/// Duplicate records resolve to the first one in catalog order.
pub fn resolve_position<'a>(
    positions: &'a [PartyPosition],
    party_id: &str,
    issue_id: &str,
) -> Option<&'a PartyPosition> {
    positions
        .iter()
        .find(|position| position.party_id == party_id && position.issue_id == issue_id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => issue.category == *category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

/// Search box plus category selector of the comparison tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

impl IssueQuery {
    pub fn new(q: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            q: q.into(),
            category,
        }
    }
}

pub fn filter_issues<'a>(issues: &'a [Issue], query: &IssueQuery) -> Vec<&'a Issue> {
    issues
        .iter()
        .filter(|issue| query.category.matches(issue) && contains_ignore_case(&issue.name, &query.q))
        .collect()
}

/// `"all"` followed by each distinct category in first-occurrence order.
pub fn categories(issues: &[Issue]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_CATEGORIES];
    for issue in issues {
        if seen.insert(issue.category.as_str()) {
            options.push(issue.category.as_str());
        }
    }
    options
}

#[derive(Debug, Clone)]
pub struct ComparisonCell<'a> {
    pub party: &'a Party,
    pub position: Option<&'a PartyPosition>,
}

#[derive(Debug, Clone)]
pub struct IssueRow<'a> {
    pub issue: &'a Issue,
    pub cells: Vec<ComparisonCell<'a>>,
}

/// Filtered issues, each with one cell per party in catalog order.
#[derive(Debug, Clone)]
pub struct ComparisonMatrix<'a> {
    pub rows: Vec<IssueRow<'a>>,
}

impl<'a> ComparisonMatrix<'a> {
    pub fn build(catalog: &'a Catalog, query: &IssueQuery) -> Self {
        let rows = filter_issues(catalog.issues(), query)
            .into_iter()
            .map(|issue| IssueRow {
                issue,
                cells: catalog
                    .parties()
                    .iter()
                    .map(|party| ComparisonCell {
                        party,
                        position: resolve_position(catalog.positions(), &party.id, &issue.id),
                    })
                    .collect(),
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
