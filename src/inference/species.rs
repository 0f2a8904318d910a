//! Species classifier: Buffalo, Cow or None.

use crate::constants::{SPECIES_LABELS, confidence};
use crate::error::{Error, Result};
use crate::inference::model::{ImageModel, argmax, distribution, verify_output_len};
use crate::vision::ImageTensor;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Top label of a classification with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning label.
    pub label: String,
    /// Probability of the winning label, in `[0, 1]`.
    pub confidence: f32,
}

/// Probability assigned to one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelProbability {
    /// Class label.
    pub label: String,
    /// Softmax probability.
    pub probability: f32,
}

/// Descriptive confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// At least 0.80.
    High,
    /// At least 0.60.
    Moderate,
    /// Below 0.60.
    Low,
}

impl ConfidenceLevel {
    /// Tier for a probability.
    pub fn from_confidence(value: f32) -> Self {
        if value >= confidence::HIGH {
            Self::High
        } else if value >= confidence::MODERATE {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        })
    }
}

/// Full output of the species stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesPrediction {
    /// Winning label and confidence.
    pub result: ClassificationResult,
    /// Tier of the winning confidence.
    pub level: ConfidenceLevel,
    /// Every label's probability, in label order.
    pub probabilities: Vec<LabelProbability>,
}

/// Three-way species classifier.
pub struct SpeciesClassifier {
    model: Box<dyn ImageModel>,
}

impl SpeciesClassifier {
    /// Wrap a model, rejecting it unless it emits one logit per species label.
    pub fn new(model: Box<dyn ImageModel>) -> Result<Self> {
        verify_output_len(model.as_ref(), SPECIES_LABELS.len())?;
        Ok(Self { model })
    }

    /// Classify a normalized image.
    pub fn classify(&self, input: &ImageTensor) -> Result<SpeciesPrediction> {
        let logits = self.model.forward(input)?;
        if logits.len() != SPECIES_LABELS.len() {
            return Err(Error::ModelUnavailable {
                path: self.model.path().to_path_buf(),
                reason: format!(
                    "model produced {} outputs, expected {}",
                    logits.len(),
                    SPECIES_LABELS.len()
                ),
            });
        }

        let probs = distribution(self.model.as_ref(), &logits)?;
        let best = argmax(&probs).ok_or_else(|| Error::Internal {
            message: "empty species distribution".to_string(),
        })?;
        let result = ClassificationResult {
            label: SPECIES_LABELS[best].to_string(),
            confidence: probs[best],
        };
        debug!("Species: {} ({:.3})", result.label, result.confidence);

        Ok(SpeciesPrediction {
            level: ConfidenceLevel::from_confidence(result.confidence),
            probabilities: SPECIES_LABELS
                .iter()
                .zip(&probs)
                .map(|(label, &probability)| LabelProbability {
                    label: (*label).to_string(),
                    probability,
                })
                .collect(),
            result,
        })
    }
}
