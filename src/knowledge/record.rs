//! Breed record type definitions.

use crate::attributes::{ParsedRange, parse_percentage, parse_range};
use crate::constants::knowledge::INDIAN_MARKER;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Animal type of a breed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum BreedType {
    /// Cattle (Bos taurus / Bos indicus).
    Cow,
    /// Water buffalo.
    Buffalo,
}

impl std::fmt::Display for BreedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cow => f.pad("Cow"),
            Self::Buffalo => f.pad("Buffalo"),
        }
    }
}

/// Origin partition used by the analytics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Origin text names India.
    Indian,
    /// Everything else.
    International,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Indian => f.pad("Indian"),
            Self::International => f.pad("International"),
        }
    }
}

/// Curated attributes of one breed.
///
/// Numeric attributes are stored as display text; use the `*_range`
/// accessors for parsed bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRecord {
    /// Classifier label, e.g. `Holstein_Friesian`.
    pub name: String,
    /// Cow or buffalo.
    #[serde(rename = "type")]
    pub breed_type: BreedType,
    /// Region of origin.
    pub origin: String,
    /// Key traits.
    pub characteristics: String,
    /// Milk yield, e.g. `"1200-1800 liters/lactation"`.
    pub milk_yield: String,
    /// Milk fat, e.g. `"4.5-5.0%"`.
    pub fat_content: String,
    /// Coat color.
    pub color: String,
    /// Body size.
    pub size: String,
    /// Body weight by sex.
    pub weight: String,
    /// Distinguishing features.
    pub special_features: String,
    /// Climate the breed is adapted to.
    pub climate_adaptation: String,
    /// Dairy, draft or dual purpose.
    pub breeding_purpose: String,
    /// Lactation length.
    pub lactation_period: String,
    /// Interval between calvings.
    pub calving_interval: String,
    /// Short summary.
    pub description: String,
}

impl BreedRecord {
    /// Origin partition of this breed.
    pub fn origin_partition(&self) -> Origin {
        if self.origin.contains(INDIAN_MARKER) {
            Origin::Indian
        } else {
            Origin::International
        }
    }

    /// Parsed milk yield in liters per lactation.
    pub fn yield_range(&self) -> Result<ParsedRange> {
        parse_range(&self.milk_yield)
    }

    /// Parsed fat content in percent.
    pub fn fat_range(&self) -> Result<ParsedRange> {
        parse_percentage(&self.fat_content)
    }
}
