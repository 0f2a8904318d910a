//! Counts, rankings and averages across all records.

use crate::error::{Error, Result};
use crate::knowledge::{BreedRecord, BreedType, KnowledgeBase, Origin, display_name};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Number of records per animal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeCounts {
    /// Cow breeds.
    pub cow: usize,
    /// Buffalo breeds.
    pub buffalo: usize,
}

/// Number of records per origin partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OriginCounts {
    /// Breeds whose origin names India.
    pub indian: usize,
    /// All other breeds.
    pub international: usize,
}

/// One row of the milk yield ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldRank {
    /// Breed label.
    pub breed: String,
    /// Label with spaces.
    pub display_name: String,
    /// Cow or buffalo.
    pub breed_type: BreedType,
    /// Upper bound of the yield range (liters per lactation).
    pub max_yield: f64,
}

/// Database summary shown alongside classification results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Total number of records.
    pub total: usize,
    /// Records per type.
    pub by_type: TypeCounts,
    /// Records per origin partition.
    pub by_origin: OriginCounts,
    /// Highest producers, best first.
    pub top_by_yield: Vec<YieldRank>,
    /// Mean of the maximum yields, absent when no yield parses.
    pub average_max_yield: Option<f64>,
}

/// Count records by animal type.
pub fn count_by_type(kb: &KnowledgeBase) -> TypeCounts {
    kb.records()
        .iter()
        .fold(TypeCounts::default(), |mut counts, record| {
            match record.breed_type {
                BreedType::Cow => counts.cow += 1,
                BreedType::Buffalo => counts.buffalo += 1,
            }
            counts
        })
}

/// Count records by origin partition.
pub fn count_by_origin(kb: &KnowledgeBase) -> OriginCounts {
    kb.records()
        .iter()
        .fold(OriginCounts::default(), |mut counts, record| {
            match record.origin_partition() {
                Origin::Indian => counts.indian += 1,
                Origin::International => counts.international += 1,
            }
            counts
        })
}

/// Records whose milk yield parses, paired with the upper bound.
fn parsable_max_yields(kb: &KnowledgeBase) -> impl Iterator<Item = (&BreedRecord, f64)> {
    kb.records()
        .iter()
        .filter_map(|record| match record.yield_range() {
            Ok(range) => Some((record, range.max)),
            Err(e) => {
                debug!("Excluding {} from yield statistics: {e}", record.name);
                None
            }
        })
}

/// Top `n` breeds by maximum milk yield.
///
/// Sorted descending by yield; ties are broken by ascending breed name.
pub fn top_by_yield(kb: &KnowledgeBase, n: usize) -> Vec<YieldRank> {
    let mut ranked: Vec<YieldRank> = parsable_max_yields(kb)
        .map(|(record, max_yield)| YieldRank {
            breed: record.name.clone(),
            display_name: display_name(&record.name),
            breed_type: record.breed_type,
            max_yield,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.max_yield
            .partial_cmp(&a.max_yield)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.breed.cmp(&b.breed))
    });
    ranked.truncate(n);
    ranked
}

/// Mean of the maximum milk yield across records with a parsable yield.
pub fn average_max_yield(kb: &KnowledgeBase) -> Result<f64> {
    let (sum, count) = parsable_max_yields(kb)
        .fold((0.0_f64, 0_usize), |(sum, count), (_, max)| {
            (sum + max, count + 1)
        });

    if count == 0 {
        return Err(Error::NoData {
            statistic: "average maximum milk yield",
        });
    }

    #[allow(clippy::cast_precision_loss)]
    Ok(sum / count as f64)
}

/// Build the full database summary.
pub fn snapshot(kb: &KnowledgeBase, top_n: usize) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total: kb.len(),
        by_type: count_by_type(kb),
        by_origin: count_by_origin(kb),
        top_by_yield: top_by_yield(kb, top_n),
        average_max_yield: average_max_yield(kb).ok(),
    }
}
