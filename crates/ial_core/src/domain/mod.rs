use serde::{Deserialize, Serialize};

mod lenient;

/// Sector tag carried by every curated evidence card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Education,
    Health,
    #[serde(rename = "Social Protection")]
    SocialProtection,
    Agriculture,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Education,
        Domain::Health,
        Domain::SocialProtection,
        Domain::Agriculture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Education => "Education",
            Domain::Health => "Health",
            Domain::SocialProtection => "Social Protection",
            Domain::Agriculture => "Agriculture",
        }
    }

    /// Exact label match; labels outside the enumeration yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == label)
    }
}

/// One extracted, human-reviewed finding from a study.
///
/// Every text field decodes leniently: a card with missing or oddly typed
/// fields still loads, and those fields read as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceCard {
    #[serde(default, deserialize_with = "lenient::text")]
    pub card_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub study_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub citation: String,
    #[serde(
        default,
        deserialize_with = "lenient::domain",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<Domain>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub intervention: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub outcome: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub finding_summary: String,
    // Comma-joined country/region names.
    #[serde(default, deserialize_with = "lenient::text")]
    pub geography: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub source_url: String,
    #[serde(default, deserialize_with = "lenient::flags")]
    pub quality_flags: Vec<String>,
}

/// Card fields that take part in keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Intervention,
    Outcome,
    FindingSummary,
    Domain,
    Geography,
    Citation,
    StudyId,
}

impl EvidenceCard {
    pub fn field_text(&self, field: CardField) -> &str {
        match field {
            CardField::Intervention => &self.intervention,
            CardField::Outcome => &self.outcome,
            CardField::FindingSummary => &self.finding_summary,
            CardField::Domain => self.domain.map(|d| d.as_str()).unwrap_or(""),
            CardField::Geography => &self.geography,
            CardField::Citation => &self.citation,
            CardField::StudyId => &self.study_id,
        }
    }

    /// Trimmed, non-empty country/region names from `geography`.
    pub fn countries(&self) -> impl Iterator<Item = &str> + '_ {
        self.geography
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
