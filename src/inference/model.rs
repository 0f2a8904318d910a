//! ONNX model sessions behind a small trait.

use crate::config::InferenceDevice;
use crate::error::{Error, Result};
use crate::inference::device::execution_providers;
use crate::vision::ImageTensor;
use ort::logging::LogLevel;
use ort::session::{Session, SessionInputs};
use ort::value::TensorRef;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// A network mapping one normalized image to a vector of logits.
pub trait ImageModel: Send + Sync {
    /// Where the weights were loaded from.
    fn path(&self) -> &Path;

    /// Run a forward pass and return raw logits.
    fn forward(&self, input: &ImageTensor) -> Result<Vec<f32>>;
}

/// An ONNX Runtime session for a single-input, single-output classifier.
pub struct OnnxModel {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    path: PathBuf,
}

impl OnnxModel {
    /// Load a model from disk onto the requested device.
    ///
    /// Every failure is reported as [`Error::ModelUnavailable`].
    pub fn load(path: &Path, device: InferenceDevice) -> Result<Self> {
        let unavailable = |reason: String| Error::ModelUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        if !path.is_file() {
            return Err(unavailable("model file not found".to_string()));
        }

        let (providers, device_label) = execution_providers(device);
        info!("Loading {} on {device_label}", path.display());

        let session = Session::builder()
            .map_err(|e| unavailable(e.to_string()))?
            .with_log_level(LogLevel::Error)
            .map_err(|e| unavailable(e.to_string()))?
            .with_execution_providers(providers)
            .map_err(|e| unavailable(e.to_string()))?
            .commit_from_file(path)
            .map_err(|e| unavailable(format!("failed to create ONNX session: {e}")))?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| unavailable("model declares no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| unavailable("model declares no outputs".to_string()))?;
        debug!("Model IO: {input_name} -> {output_name}");

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            path: path.to_path_buf(),
        })
    }
}

impl ImageModel for OnnxModel {
    fn path(&self) -> &Path {
        &self.path
    }

    fn forward(&self, input: &ImageTensor) -> Result<Vec<f32>> {
        let tensor = TensorRef::from_array_view((input.batch_shape(), input.as_slice()))
            .map_err(|e| Error::Inference {
                reason: format!("failed to build input tensor: {e}"),
            })?;
        let inputs: SessionInputs<'_, '_, 0> =
            SessionInputs::ValueMap(vec![(Cow::Borrowed(self.input_name.as_str()), tensor.into())]);

        let mut session = self.session.lock().map_err(|_| Error::Inference {
            reason: "model session lock poisoned".to_string(),
        })?;
        let outputs = session.run(inputs).map_err(|e| Error::Inference {
            reason: format!("forward pass failed: {e}"),
        })?;

        let (_, logits) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference {
                reason: format!("failed to read output '{}': {e}", self.output_name),
            })?;
        Ok(logits.to_vec())
    }
}

/// Numerically stable softmax.
///
/// Accumulates in `f64` so the result sums to one within `1e-6`.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let Some(max) = logits.iter().copied().reduce(f32::max) else {
        return Vec::new();
    };
    let exps: Vec<f64> = logits
        .iter()
        .map(|&v| (f64::from(v) - f64::from(max)).exp())
        .collect();
    let sum: f64 = exps.iter().sum();

    #[allow(clippy::cast_possible_truncation)]
    exps.iter().map(|&e| (e / sum) as f32).collect()
}

/// Softmax over logits that must all be finite.
///
/// A NaN or infinite logit yields [`Error::Inference`] instead of a
/// distribution full of NaN.
pub(crate) fn distribution(model: &dyn ImageModel, logits: &[f32]) -> Result<Vec<f32>> {
    if let Some(bad) = logits.iter().find(|v| !v.is_finite()) {
        return Err(Error::Inference {
            reason: format!(
                "model '{}' produced a non-finite logit ({bad})",
                model.path().display()
            ),
        });
    }
    Ok(softmax(logits))
}

/// Index of the largest value; the first one wins on ties.
pub(crate) fn argmax(values: &[f32]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (idx, &v)| match best {
            Some((_, best_v)) if best_v >= v => best,
            _ => Some((idx, v)),
        })
        .map(|(idx, _)| idx)
}

/// Probe a model with a blank input and check its output width.
pub(crate) fn verify_output_len(model: &dyn ImageModel, expected: usize) -> Result<()> {
    let logits = model.forward(&ImageTensor::zeros())?;
    if logits.len() == expected {
        Ok(())
    } else {
        Err(Error::ModelUnavailable {
            path: model.path().to_path_buf(),
            reason: format!("model produces {} outputs, expected {expected}", logits.len()),
        })
    }
}
