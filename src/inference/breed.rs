//! Breed classifier over the 41 supported breeds.

use crate::constants::BREED_LABELS;
use crate::error::{Error, Result};
use crate::inference::model::{ImageModel, argmax, distribution, verify_output_len};
use crate::vision::ImageTensor;
use tracing::debug;

/// Breed classifier.
///
/// Reports only the most probable label; the distribution stays internal.
pub struct BreedClassifier {
    model: Box<dyn ImageModel>,
}

impl BreedClassifier {
    /// Wrap a model, rejecting it unless it emits one logit per breed label.
    pub fn new(model: Box<dyn ImageModel>) -> Result<Self> {
        verify_output_len(model.as_ref(), BREED_LABELS.len())?;
        Ok(Self { model })
    }

    /// Most probable breed label for a normalized image.
    pub fn identify(&self, input: &ImageTensor) -> Result<&'static str> {
        let logits = self.model.forward(input)?;
        if logits.len() != BREED_LABELS.len() {
            return Err(Error::ModelUnavailable {
                path: self.model.path().to_path_buf(),
                reason: format!(
                    "model produced {} outputs, expected {}",
                    logits.len(),
                    BREED_LABELS.len()
                ),
            });
        }

        let probs = distribution(self.model.as_ref(), &logits)?;
        let best = argmax(&probs).ok_or_else(|| Error::Internal {
            message: "empty breed distribution".to_string(),
        })?;
        debug!("Breed: {} ({:.3})", BREED_LABELS[best], probs[best]);
        Ok(BREED_LABELS[best])
    }
}
