//! Species and breed classification.

mod breed;
mod device;
pub mod gate;
pub(crate) mod model;
mod registry;
mod species;

pub use breed::BreedClassifier;
pub use gate::{GateDecision, GateReason};
pub use model::{ImageModel, OnnxModel, softmax};
pub use registry::{Loader, ModelPaths, ModelRegistry};
pub use species::{
    ClassificationResult, ConfidenceLevel, LabelProbability, SpeciesClassifier, SpeciesPrediction,
};
