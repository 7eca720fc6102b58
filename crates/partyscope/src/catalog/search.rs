use super::domain::Party;
use super::Catalog;
use serde::{Deserialize, Serialize};

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parties whose display name contains `term`, ignoring case, in catalog order.
pub fn filter_parties<'a>(parties: &'a [Party], term: &str) -> Vec<&'a Party> {
    parties
        .iter()
        .filter(|party| contains_ignore_case(&party.name, term))
        .collect()
}

/// Transient state of the catalog page: the search box and the party being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseState {
    #[serde(default, rename = "q")]
    pub search_term: String,
    #[serde(default, rename = "party", skip_serializing_if = "Option::is_none")]
    pub selected_party: Option<String>,
}

/// What the catalog page should show for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseView<'a> {
    Listing(Vec<&'a Party>),
    Detail(&'a Party),
    NotFound(&'a str),
}

impl BrowseState {
    pub fn with_search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            selected_party: None,
        }
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn select(&mut self, party_id: impl Into<String>) {
        self.selected_party = Some(party_id.into());
    }

    /// Leaves the detail view; the search term is kept.
    pub fn back(&mut self) {
        self.selected_party = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_party
            .as_deref()
            .filter(|party_id| !party_id.is_empty())
    }

    pub fn view<'a>(&'a self, catalog: &'a Catalog) -> BrowseView<'a> {
        match self.selected() {
            Some(party_id) => match catalog.party(party_id) {
                Some(party) => BrowseView::Detail(party),
                None => BrowseView::NotFound(party_id),
            },
            None => BrowseView::Listing(filter_parties(catalog.parties(), &self.search_term)),
        }
    }

    /// Query string reproducing this state, including the leading `?` when non-empty.
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();
        if !self.search_term.is_empty() {
            pairs.push(format!("q={}", urlencoding::encode(&self.search_term)));
        }
        if let Some(party_id) = self.selected() {
            pairs.push(format!("party={}", urlencoding::encode(party_id)));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::party;

    fn parties() -> Vec<Party> {
        vec![
            party("labor", "Australian Labor Party"),
            party("greens", "Australian Greens"),
            party("green-left", "Green Left Alliance"),
        ]
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        let parties = parties();
        let ids: Vec<_> = filter_parties(&parties, "")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["labor", "greens", "green-left"]);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let parties = parties();
        let ids: Vec<_> = filter_parties(&parties, "GREEN")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["greens", "green-left"]);
    }

    #[test]
    fn no_match_yields_empty_vec() {
        let parties = parties();
        assert!(filter_parties(&parties, "zzz").is_empty());
    }

    #[test]
    fn query_string_encodes_state() {
        let mut state = BrowseState::with_search("labor party");
        assert_eq!(state.query_string(), "?q=labor%20party");
        state.select("labor");
        assert_eq!(state.query_string(), "?q=labor%20party&party=labor");
        state.back();
        assert_eq!(state.query_string(), "?q=labor%20party");
        assert_eq!(BrowseState::default().query_string(), "");
    }

    #[test]
    fn blank_selection_counts_as_none() {
        let state = BrowseState {
            search_term: String::new(),
            selected_party: Some(String::new()),
        };
        assert_eq!(state.selected(), None);
    }
}
