//! What the cascade reports about an identified breed.

use crate::analytics::{PeerEntry, peer_comparison, peer_set_for};
use crate::constants::knowledge::PLACEHOLDER_MESSAGE;
use crate::knowledge::{BreedRecord, KnowledgeBase, display_name};
use crate::recommend::{EconomicProfile, recommendations};
use serde::{Deserialize, Serialize};

/// Everything known about a breed with a curated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedInsight {
    /// The curated record.
    pub record: BreedRecord,
    /// Label with spaces.
    pub display_name: String,
    /// Yield and fat comparison against the peer set of the same type.
    pub peers: Vec<PeerEntry>,
    /// Farming advisories in rule order.
    pub recommendations: Vec<String>,
    /// Economic profile.
    pub economics: EconomicProfile,
}

impl BreedInsight {
    /// Assemble the insight bundle for a record.
    pub fn build(kb: &KnowledgeBase, record: &BreedRecord, peer_limit: usize) -> Self {
        Self {
            display_name: display_name(&record.name),
            peers: peer_comparison(
                kb,
                &record.name,
                peer_set_for(record.breed_type),
                peer_limit,
            ),
            recommendations: recommendations(record),
            economics: EconomicProfile::from_record(record),
            record: record.clone(),
        }
    }
}

/// Degraded result for a label without a curated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Label produced by the classifier.
    pub label: String,
    /// Label with spaces.
    pub display_name: String,
    /// Explanation shown to the user.
    pub message: String,
}

impl Placeholder {
    /// Placeholder for `label`.
    pub fn for_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            display_name: display_name(label),
            message: PLACEHOLDER_MESSAGE.to_string(),
        }
    }
}

/// Breed details: a full insight or a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreedDetails {
    /// The label has a curated record.
    Found(Box<BreedInsight>),
    /// The label has no curated record.
    NotFound(Placeholder),
}

impl BreedDetails {
    /// Look up `label` and build the matching details.
    pub fn resolve(kb: &KnowledgeBase, label: &str, peer_limit: usize) -> Self {
        kb.lookup(label).map_or_else(
            || Self::NotFound(Placeholder::for_label(label)),
            |record| Self::Found(Box::new(BreedInsight::build(kb, record, peer_limit))),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_breed() {
        let kb = KnowledgeBase::global();
        let BreedDetails::Found(insight) = BreedDetails::resolve(kb, "Murrah", 5) else {
            panic!("Murrah should have a record");
        };
        assert_eq!(insight.display_name, "Murrah");
        assert_eq!(insight.peers.len(), 5);
        assert!(insight.peers[0].is_target);
        assert!(!insight.recommendations.is_empty());
    }

    #[test]
    fn test_resolve_unknown_breed_is_placeholder() {
        let details = BreedDetails::resolve(KnowledgeBase::global(), "Mystery_Breed", 5);
        assert_eq!(
            details,
            BreedDetails::NotFound(Placeholder {
                label: "Mystery_Breed".to_string(),
                display_name: "Mystery Breed".to_string(),
                message: PLACEHOLDER_MESSAGE.to_string(),
            })
        );
    }

    #[test]
    fn test_details_serialize_with_status_tag() {
        let details = BreedDetails::resolve(KnowledgeBase::global(), "Unknown", 5);
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["label"], "Unknown");
    }
}
