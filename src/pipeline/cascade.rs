//! Species, gate, breed and knowledge lookup for a single image.

use crate::analytics::{AnalyticsSnapshot, snapshot};
use crate::constants::analytics::{DEFAULT_PEER_LIMIT, DEFAULT_TOP_N};
use crate::error::Result;
use crate::inference::{GateDecision, ModelRegistry, SpeciesPrediction, gate};
use crate::knowledge::KnowledgeBase;
use crate::pipeline::insight::BreedDetails;
use crate::vision::normalize;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Structured outcome for one image.
///
/// When the gate stops the cascade, every field after `gate` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeResult {
    /// Species stage output.
    pub species: SpeciesPrediction,
    /// Gate outcome.
    pub gate: GateDecision,
    /// Label from the breed classifier.
    pub breed_label: Option<String>,
    /// Curated details or a placeholder for the breed label.
    pub breed: Option<BreedDetails>,
    /// Knowledge-base summary.
    pub analytics: Option<AnalyticsSnapshot>,
    /// Farming advisories; absent when the breed has no record.
    pub recommendations: Option<Vec<String>>,
}

/// Tunables for the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOptions {
    /// Length of the yield ranking in the summary.
    pub top_n: usize,
    /// Length of the peer comparison.
    pub peer_limit: usize,
}

impl Default for CascadeOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            peer_limit: DEFAULT_PEER_LIMIT,
        }
    }
}

/// The two-stage classification cascade.
pub struct Cascade<'a> {
    models: &'a ModelRegistry,
    kb: &'a KnowledgeBase,
    options: CascadeOptions,
}

impl<'a> Cascade<'a> {
    /// Create a cascade over shared models and knowledge.
    pub fn new(models: &'a ModelRegistry, kb: &'a KnowledgeBase, options: CascadeOptions) -> Self {
        Self {
            models,
            kb,
            options,
        }
    }

    /// Run the cascade on a decoded image.
    ///
    /// Only model and image failures abort; a breed without a record
    /// becomes a placeholder.
    pub fn run(&self, image: &DynamicImage) -> Result<CascadeResult> {
        let tensor = normalize(image)?;

        let species = self.models.species()?.classify(&tensor)?;
        let decision = gate::evaluate(&species.result);
        if !decision.proceed {
            info!(
                "Stopping after species stage: {} ({:.1}%)",
                species.result.label,
                species.result.confidence * 100.0
            );
            return Ok(CascadeResult {
                species,
                gate: decision,
                breed_label: None,
                breed: None,
                analytics: None,
                recommendations: None,
            });
        }

        let label = self.models.breed()?.identify(&tensor)?;
        debug!("Resolving breed details for {label}");
        let details = BreedDetails::resolve(self.kb, label, self.options.peer_limit);
        let recommendations = match &details {
            BreedDetails::Found(insight) => Some(insight.recommendations.clone()),
            BreedDetails::NotFound(_) => None,
        };

        Ok(CascadeResult {
            species,
            gate: decision,
            breed_label: Some(label.to_string()),
            breed: Some(details),
            analytics: Some(snapshot(self.kb, self.options.top_n)),
            recommendations,
        })
    }
}
