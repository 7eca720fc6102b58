//! Maps qualitative rating labels onto a 0-100 score and a color tier.
//!
//! Every view that shows a rating goes through [`normalize`]; the mapping is
//! total, so labels outside the known vocabulary land on
//! [`RatingTier::Default`] instead of failing.

use super::domain::RatingAxis;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingTier {
    Excellent,
    Good,
    Moderate,
    Poor,
    ExtremelyPoor,
    Default,
}

impl RatingTier {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Excellent,
            Self::Good,
            Self::Moderate,
            Self::Poor,
            Self::ExtremelyPoor,
            Self::Default,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
            Self::ExtremelyPoor => "extremely-poor",
            Self::Default => "default",
        }
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::Excellent => 90,
            Self::Good => 80,
            Self::Moderate => 70,
            Self::Poor => 50,
            Self::ExtremelyPoor => 30,
            Self::Default => 60,
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "tier-excellent",
            Self::Good => "tier-good",
            Self::Moderate => "tier-moderate",
            Self::Poor => "tier-poor",
            Self::ExtremelyPoor => "tier-extremely-poor",
            Self::Default => "tier-default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingScore {
    pub score: u8,
    pub tier: RatingTier,
}

/// Case-insensitive lookup of a rating label. Defined for every input.
pub fn normalize(label: &str) -> RatingScore {
    let tier = match label.to_lowercase().as_str() {
        "excellent" => RatingTier::Excellent,
        "good" => RatingTier::Good,
        "moderate" | "mixed" => RatingTier::Moderate,
        "poor" | "negative" => RatingTier::Poor,
        "extremely poor" | "very poor" | "dangerous" => RatingTier::ExtremelyPoor,
        _ => RatingTier::Default,
    };

    RatingScore {
        score: tier.score(),
        tier,
    }
}

/// Closed label vocabulary for each axis, best first.
pub const fn axis_labels(axis: RatingAxis) -> &'static [&'static str] {
    match axis {
        RatingAxis::Inclusivity => &["Excellent", "Good", "Moderate", "Poor", "Extremely Poor"],
        RatingAxis::ConflictStance => &["Excellent", "Good", "Mixed", "Negative", "Very Poor"],
        RatingAxis::DomesticPolicy | RatingAxis::GlobalOppression => {
            &["Excellent", "Good", "Moderate", "Poor", "Very Poor"]
        }
    }
}

pub fn is_axis_label(axis: RatingAxis, label: &str) -> bool {
    axis_labels(axis).contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_map_to_expected_scores() {
        let cases = [
            ("excellent", 90, RatingTier::Excellent),
            ("good", 80, RatingTier::Good),
            ("moderate", 70, RatingTier::Moderate),
            ("mixed", 70, RatingTier::Moderate),
            ("poor", 50, RatingTier::Poor),
            ("negative", 50, RatingTier::Poor),
            ("extremely poor", 30, RatingTier::ExtremelyPoor),
            ("very poor", 30, RatingTier::ExtremelyPoor),
            ("dangerous", 30, RatingTier::ExtremelyPoor),
        ];

        for (label, score, tier) in cases {
            assert_eq!(normalize(label), RatingScore { score, tier }, "{label}");
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(normalize("Excellent"), normalize("EXCELLENT"));
        assert_eq!(normalize("excellent"), normalize("EXCELLENT"));
        assert_eq!(normalize("Very Poor").tier, RatingTier::ExtremelyPoor);
    }

    #[test]
    fn unknown_labels_fall_back_to_default() {
        for label in ["", "N/A", "  good", "Goodish", "very  poor"] {
            let score = normalize(label);
            assert_eq!(score.score, 60, "{label:?}");
            assert_eq!(score.tier, RatingTier::Default, "{label:?}");
        }
    }

    #[test]
    fn every_axis_label_has_a_real_tier() {
        for axis in RatingAxis::ordered() {
            for label in axis_labels(axis) {
                assert_ne!(normalize(label).tier, RatingTier::Default, "{label}");
            }
        }
        assert!(is_axis_label(RatingAxis::ConflictStance, "Mixed"));
        assert!(!is_axis_label(RatingAxis::ConflictStance, "Poor"));
    }

    #[test]
    fn tier_serializes_as_kebab_case() {
        let encoded = serde_json::to_string(&RatingTier::ExtremelyPoor).expect("serializes");
        assert_eq!(encoded, "\"extremely-poor\"");
        for tier in RatingTier::ordered() {
            assert_eq!(
                serde_json::to_string(&tier).expect("serializes"),
                format!("\"{}\"", tier.as_str())
            );
        }
    }
}
