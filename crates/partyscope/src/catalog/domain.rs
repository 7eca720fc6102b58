use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyType {
    Major,
    Minor,
    Independent,
}

impl PartyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Independent => "Independent",
        }
    }

    /// Badge text shown next to the party name.
    pub const fn badge_label(self) -> &'static str {
        match self {
            Self::Major => "Major Party",
            Self::Minor => "Minor Party",
            Self::Independent => "Independent",
        }
    }
}

/// The four independent dimensions every party is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingAxis {
    Inclusivity,
    ConflictStance,
    DomesticPolicy,
    GlobalOppression,
}

impl RatingAxis {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Inclusivity,
            Self::ConflictStance,
            Self::DomesticPolicy,
            Self::GlobalOppression,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inclusivity => "Muslim Inclusivity",
            Self::ConflictStance => "Gaza Stance",
            Self::DomesticPolicy => "Domestic Policy",
            Self::GlobalOppression => "Global Muslim Oppression",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Inclusivity => "inclusivity",
            Self::ConflictStance => "conflict_stance",
            Self::DomesticPolicy => "domestic_policy",
            Self::GlobalOppression => "global_oppression",
        }
    }

    /// Heading used above the highlight list of a report section.
    pub const fn highlights_heading(self) -> &'static str {
        match self {
            Self::ConflictStance => "Key Positions & Statements",
            _ => "Key Policies & Actions",
        }
    }
}

/// One value per rating axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerAxis<T> {
    pub inclusivity: T,
    pub conflict_stance: T,
    pub domestic_policy: T,
    pub global_oppression: T,
}

impl<T> PerAxis<T> {
    pub fn get(&self, axis: RatingAxis) -> &T {
        match axis {
            RatingAxis::Inclusivity => &self.inclusivity,
            RatingAxis::ConflictStance => &self.conflict_stance,
            RatingAxis::DomesticPolicy => &self.domestic_policy,
            RatingAxis::GlobalOppression => &self.global_oppression,
        }
    }

    pub fn from_fn(mut f: impl FnMut(RatingAxis) -> T) -> Self {
        Self {
            inclusivity: f(RatingAxis::Inclusivity),
            conflict_stance: f(RatingAxis::ConflictStance),
            domestic_policy: f(RatingAxis::DomesticPolicy),
            global_oppression: f(RatingAxis::GlobalOppression),
        }
    }
}

/// A numbered source. Ids are unique only within the owning party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: u32,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub color: String,
    pub party_type: PartyType,
    /// 0 = far left, 100 = far right.
    pub political_leaning: f32,
    /// Raw labels; unknown labels are tolerated and normalize to the default tier.
    pub ratings: PerAxis<String>,
    pub summaries: PerAxis<String>,
    pub details: PerAxis<String>,
    pub website_url: String,
    /// Share of contested elections won, 0..=1.
    pub historic_win_rate: f32,
    pub historic_win_rate_calculation: String,
    pub national_popularity: f32,
    pub national_popularity_calculation: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
}

impl Party {
    pub fn rating(&self, axis: RatingAxis) -> &str {
        self.ratings.get(axis)
    }

    pub fn summary(&self, axis: RatingAxis) -> &str {
        self.summaries.get(axis)
    }

    pub fn details(&self, axis: RatingAxis) -> &str {
        self.details.get(axis)
    }

    /// First character of each space-separated word of the display name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// Five-point support scale recorded for a (party, issue) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    #[serde(rename = "Strongly Supportive")]
    StronglySupportive,
    Supportive,
    Neutral,
    Opposed,
    #[serde(rename = "Strongly Opposed")]
    StronglyOpposed,
}

impl Stance {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StronglySupportive,
            Self::Supportive,
            Self::Neutral,
            Self::Opposed,
            Self::StronglyOpposed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglySupportive => "Strongly Supportive",
            Self::Supportive => "Supportive",
            Self::Neutral => "Neutral",
            Self::Opposed => "Opposed",
            Self::StronglyOpposed => "Strongly Opposed",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::StronglySupportive => "stance-strongly-supportive",
            Self::Supportive => "stance-supportive",
            Self::Neutral => "stance-neutral",
            Self::Opposed => "stance-opposed",
            Self::StronglyOpposed => "stance-strongly-opposed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPosition {
    pub party_id: String,
    pub issue_id: String,
    pub stance: Stance,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voting_record: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_labels_round_trip_through_serde() {
        for stance in Stance::ordered() {
            let encoded = serde_json::to_string(&stance).expect("stance serializes");
            assert_eq!(encoded, format!("\"{}\"", stance.label()));
        }
    }

    #[test]
    fn axis_slugs_match_serde_names() {
        for axis in RatingAxis::ordered() {
            let decoded: RatingAxis =
                serde_json::from_str(&format!("\"{}\"", axis.slug())).expect("axis parses");
            assert_eq!(decoded, axis);
        }
    }

    #[test]
    fn badge_label_only_suffixes_parties() {
        assert_eq!(PartyType::Major.badge_label(), "Major Party");
        assert_eq!(PartyType::Minor.badge_label(), "Minor Party");
        assert_eq!(PartyType::Independent.badge_label(), "Independent");
    }
}
