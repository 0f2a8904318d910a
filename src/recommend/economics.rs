//! Coarse economic profile of a breed.

use crate::constants::yield_tier;
use crate::knowledge::BreedRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market value of the milk a breed produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilkValue {
    /// Yield lower bound above 2000 L.
    High,
    /// Yield lower bound above 1000 L.
    Medium,
    /// Everything else, including unparsable yields.
    Low,
}

/// Upkeep cost of a breed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceCost {
    /// Hardy breeds.
    Low,
    /// Everything else.
    Medium,
}

/// Kind of farmer a breed suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmerType {
    /// Commercial dairy operations.
    Commercial,
    /// Small-scale and subsistence farmers.
    SmallScale,
}

/// Economic summary shown next to the advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicProfile {
    /// Main source of income, taken from the breeding purpose.
    pub primary_income: String,
    /// Milk value tier.
    pub milk_value: MilkValue,
    /// Maintenance cost tier.
    pub maintenance: MaintenanceCost,
    /// Best-suited farmer.
    pub farmer_type: FarmerType,
    /// Best-suited farm size, as recorded.
    pub farm_size: String,
    /// Best-suited climate, as recorded.
    pub climate: String,
}

impl EconomicProfile {
    /// Derive the economic profile of a record.
    pub fn from_record(record: &BreedRecord) -> Self {
        let floor = record.yield_range().map_or(0.0, |range| range.min);

        let milk_value = if floor > yield_tier::HIGH {
            MilkValue::High
        } else if floor > yield_tier::MODERATE {
            MilkValue::Medium
        } else {
            MilkValue::Low
        };

        Self {
            primary_income: record.breeding_purpose.clone(),
            milk_value,
            maintenance: if record.characteristics.to_lowercase().contains("hardy") {
                MaintenanceCost::Low
            } else {
                MaintenanceCost::Medium
            },
            farmer_type: if floor > yield_tier::HIGH {
                FarmerType::Commercial
            } else {
                FarmerType::SmallScale
            },
            farm_size: record.size.clone(),
            climate: record.climate_adaptation.clone(),
        }
    }
}

impl fmt::Display for MilkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

impl fmt::Display for MaintenanceCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
        })
    }
}

impl fmt::Display for FarmerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Commercial => "Commercial",
            Self::SmallScale => "Small-scale",
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    fn profile(name: &str) -> EconomicProfile {
        EconomicProfile::from_record(KnowledgeBase::global().lookup(name).unwrap())
    }

    #[test]
    fn test_holstein_is_commercial() {
        let p = profile("Holstein_Friesian");
        assert_eq!(p.milk_value, MilkValue::High);
        assert_eq!(p.farmer_type, FarmerType::Commercial);
    }

    #[test]
    fn test_gir_is_medium_value_small_scale() {
        let p = profile("Gir");
        assert_eq!(p.milk_value, MilkValue::Medium);
        assert_eq!(p.farmer_type, FarmerType::SmallScale);
        assert_eq!(p.maintenance, MaintenanceCost::Medium);
        assert_eq!(p.farm_size, "Medium to large");
        assert_eq!(p.primary_income, "Dual purpose - milk and draft");
    }

    #[test]
    fn test_hardy_breed_is_low_maintenance() {
        let mut record = KnowledgeBase::global().lookup("Gir").unwrap().clone();
        record.characteristics = "Good draught animal, HARDY".to_string();
        assert_eq!(
            EconomicProfile::from_record(&record).maintenance,
            MaintenanceCost::Low
        );
    }

    #[test]
    fn test_unparsable_yield_is_low_value() {
        let mut record = KnowledgeBase::global().lookup("Jersey").unwrap().clone();
        record.milk_yield = "unknown".to_string();
        let p = EconomicProfile::from_record(&record);
        assert_eq!(p.milk_value, MilkValue::Low);
        assert_eq!(p.farmer_type, FarmerType::SmallScale);
    }
}
