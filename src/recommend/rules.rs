//! Ordered advisory rules.
//!
//! Each rule inspects one record and contributes at most one advisory.
//! Text matching is case-insensitive substring matching.

use crate::constants::{HIGH_FAT_PERCENT, yield_tier};
use crate::knowledge::BreedRecord;

struct Rule {
    name: &'static str,
    applies: fn(&BreedRecord) -> bool,
    advisory: &'static str,
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Lower bound of the yield range; unparsable yields count as zero so they
/// land in the low tier.
fn yield_floor(record: &BreedRecord) -> f64 {
    record.yield_range().map_or(0.0, |range| range.min)
}

fn fat_ceiling(record: &BreedRecord) -> Option<f64> {
    record.fat_range().ok().map(|range| range.max)
}

static RULES: &[Rule] = &[
    Rule {
        name: "heat",
        applies: |r| contains(&r.characteristics, "heat tolerant"),
        advisory: "Suitable for hot climates - requires minimal cooling arrangements",
    },
    Rule {
        name: "arid",
        applies: |r| {
            contains(&r.characteristics, "drought") || contains(&r.climate_adaptation, "arid")
        },
        advisory: "Good for arid regions - requires less water than exotic breeds",
    },
    Rule {
        name: "yield_high",
        applies: |r| yield_floor(r) > yield_tier::HIGH,
        advisory: "High milk producer - suitable for commercial dairy farming",
    },
    Rule {
        name: "yield_moderate",
        applies: |r| {
            let floor = yield_floor(r);
            floor > yield_tier::MODERATE && floor <= yield_tier::HIGH
        },
        advisory: "Moderate milk producer - good for small to medium dairy operations",
    },
    Rule {
        name: "yield_low",
        applies: |r| yield_floor(r) <= yield_tier::MODERATE,
        advisory: "Low milk yield - better for draft purposes or subsistence farming",
    },
    Rule {
        name: "draft",
        applies: |r| contains(&r.breeding_purpose, "draft"),
        advisory: "Excellent for agricultural work - can be used for plowing and transportation",
    },
    Rule {
        name: "small",
        applies: |r| contains(&r.size, "small"),
        advisory: "Suitable for small farms - requires less space and feed",
    },
    Rule {
        name: "high_fat",
        applies: |r| fat_ceiling(r).is_some_and(|max| max > HIGH_FAT_PERCENT),
        advisory: "High fat milk - excellent for making ghee, butter, and cheese",
    },
    Rule {
        name: "disease",
        applies: |r| contains(&r.characteristics, "disease resistant"),
        advisory: "Disease resistant - requires minimal veterinary intervention",
    },
];

/// Advisories for a record, in fixed rule order.
///
/// Exactly one yield-tier advisory is always present.
pub fn recommendations(record: &BreedRecord) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(record))
        .inspect(|rule| tracing::trace!("Rule {} matched {}", rule.name, record.name))
        .map(|rule| rule.advisory.to_string())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    fn for_breed(name: &str) -> Vec<String> {
        recommendations(KnowledgeBase::global().lookup(name).unwrap())
    }

    fn tier_count(advice: &[String]) -> usize {
        advice
            .iter()
            .filter(|a| a.contains("milk producer") || a.starts_with("Low milk yield"))
            .count()
    }

    #[test]
    fn test_gir_recommendations_in_rule_order() {
        assert_eq!(
            for_breed("Gir"),
            [
                "Suitable for hot climates - requires minimal cooling arrangements",
                "Moderate milk producer - good for small to medium dairy operations",
                "Excellent for agricultural work - can be used for plowing and transportation",
                "Disease resistant - requires minimal veterinary intervention",
            ]
        );
    }

    #[test]
    fn test_holstein_is_high_producer() {
        let advice = for_breed("Holstein_Friesian");
        assert!(
            advice
                .iter()
                .any(|a| a == "High milk producer - suitable for commercial dairy farming")
        );
        assert_eq!(tier_count(&advice), 1);
    }

    #[test]
    fn test_jersey_small_and_high_fat() {
        let advice = for_breed("Jersey");
        assert!(advice.iter().any(|a| a.starts_with("Suitable for small farms")));
        assert!(advice.iter().any(|a| a.starts_with("High fat milk")));
    }

    #[test]
    fn test_every_record_has_exactly_one_yield_tier() {
        for record in KnowledgeBase::global().records() {
            let advice = recommendations(record);
            assert_eq!(tier_count(&advice), 1, "{}", record.name);
        }
    }

    #[test]
    fn test_recommendations_are_idempotent() {
        let record = KnowledgeBase::global().lookup("Sahiwal").unwrap();
        assert_eq!(recommendations(record), recommendations(record));
    }

    #[test]
    fn test_unparsable_yield_falls_into_low_tier() {
        let mut record = KnowledgeBase::global().lookup("Gir").unwrap().clone();
        record.milk_yield = "varies".to_string();
        record.fat_content = "unknown".to_string();
        let advice = recommendations(&record);
        assert!(advice.iter().any(|a| a.starts_with("Low milk yield")));
        assert!(!advice.iter().any(|a| a.starts_with("High fat milk")));
    }

    #[test]
    fn test_matching_ignores_case() {
        let mut record = KnowledgeBase::global().lookup("Gir").unwrap().clone();
        record.characteristics = "DROUGHT hardy".to_string();
        record.climate_adaptation = String::new();
        let advice = recommendations(&record);
        assert!(advice.iter().any(|a| a.starts_with("Good for arid regions")));
        assert!(!advice.iter().any(|a| a.starts_with("Suitable for hot climates")));
    }
}
