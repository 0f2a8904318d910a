//! Side-by-side comparison of a breed against a curated peer set.

use crate::constants::knowledge::{BUFFALO_PEERS, COW_PEERS};
use crate::knowledge::{BreedType, KnowledgeBase, display_name};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One bar in the yield and fat comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerEntry {
    /// Breed label.
    pub breed: String,
    /// Label with spaces.
    pub display_name: String,
    /// Midpoint of the milk yield range (liters per lactation).
    pub avg_yield: f64,
    /// Midpoint of the fat content range (percent).
    pub avg_fat: f64,
    /// Whether this entry is the breed being compared.
    pub is_target: bool,
}

/// Curated comparison set for an animal type.
pub fn peer_set_for(breed_type: BreedType) -> &'static [&'static str] {
    match breed_type {
        BreedType::Cow => &COW_PEERS,
        BreedType::Buffalo => &BUFFALO_PEERS,
    }
}

/// Compare `target` against `peers`.
///
/// Peers without a record are dropped. The target is placed first when it
/// is not already in the set, the sequence is cut to `limit` entries in
/// insertion order, and then breeds whose yield or fat does not parse are
/// left out.
pub fn peer_comparison(
    kb: &KnowledgeBase,
    target: &str,
    peers: &[&str],
    limit: usize,
) -> Vec<PeerEntry> {
    let mut candidates: Vec<&str> = peers
        .iter()
        .copied()
        .filter(|name| kb.lookup(name).is_some())
        .collect();
    if !candidates.contains(&target) {
        candidates.insert(0, target);
    }
    candidates.truncate(limit);

    candidates
        .into_iter()
        .filter_map(|name| {
            let record = kb.lookup(name)?;
            let ranges = record.yield_range().and_then(|y| Ok((y, record.fat_range()?)));
            match ranges {
                Ok((milk, fat)) => Some(PeerEntry {
                    breed: record.name.clone(),
                    display_name: display_name(&record.name),
                    avg_yield: milk.average,
                    avg_fat: fat.average,
                    is_target: record.name == target,
                }),
                Err(e) => {
                    debug!("Excluding {name} from peer comparison: {e}");
                    None
                }
            }
        })
        .collect()
}
