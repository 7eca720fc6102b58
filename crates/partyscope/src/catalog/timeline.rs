use super::domain::TimelineEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TIMELINE_TITLE: &str = "Timeline of Key Actions";

/// Timeline events keyed by party id. A party without an entry has no timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimelineBook {
    entries: HashMap<String, Vec<TimelineEvent>>,
}

impl TimelineBook {
    pub fn insert(&mut self, party_id: impl Into<String>, events: Vec<TimelineEvent>) {
        self.entries.insert(party_id.into(), events);
    }

    pub fn events(&self, party_id: &str) -> &[TimelineEvent] {
        self.entries
            .get(party_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn party_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
