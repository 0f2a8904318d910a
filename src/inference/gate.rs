//! Confidence gate between the species and breed stages.

use crate::constants::gate::{CATTLE_LABELS, MIN_CONFIDENCE};
use crate::inference::ClassificationResult;
use serde::{Deserialize, Serialize};

/// Why the cascade stopped after the species stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    /// Species label is neither Cow nor Buffalo.
    NotCattle,
    /// Species confidence is below the threshold.
    LowConfidence,
}

/// Outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    /// Whether breed identification runs.
    pub proceed: bool,
    /// Set whenever `proceed` is false.
    pub reason: Option<GateReason>,
}

/// Decide whether breed identification should run.
///
/// Proceeds iff the label is Cow or Buffalo and confidence is at least
/// 0.60. A non-cattle label is reported ahead of low confidence, and a
/// NaN confidence never passes.
pub fn evaluate(species: &ClassificationResult) -> GateDecision {
    let confident = species.confidence >= MIN_CONFIDENCE;
    let reason = if !CATTLE_LABELS.contains(&species.label.as_str()) {
        Some(GateReason::NotCattle)
    } else if !confident {
        Some(GateReason::LowConfidence)
    } else {
        None
    };

    GateDecision {
        proceed: reason.is_none(),
        reason,
    }
}
