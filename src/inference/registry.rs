//! Process-wide model handles, each loaded at most once.

use crate::config::{Config, InferenceDevice, default_model_path};
use crate::constants::model_files;
use crate::error::{Error, Result};
use crate::inference::{BreedClassifier, OnnxModel, SpeciesClassifier};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::info;

/// Deferred constructor for a model slot.
pub type Loader<T> = Box<dyn Fn() -> Result<T> + Send + Sync>;

/// One lazily loaded model.
struct Slot<T> {
    value: OnceLock<Arc<T>>,
    guard: Mutex<()>,
    loader: Loader<T>,
}

impl<T> Slot<T> {
    fn new(loader: Loader<T>) -> Self {
        Self {
            value: OnceLock::new(),
            guard: Mutex::new(()),
            loader,
        }
    }

    /// Return the loaded value, running the loader on first use.
    ///
    /// Concurrent first callers block on the guard so the loader runs once.
    /// A failed load leaves the slot empty and the next call retries.
    fn get(&self) -> Result<Arc<T>> {
        if let Some(value) = self.value.get() {
            return Ok(Arc::clone(value));
        }

        let _lock = self.guard.lock().map_err(|_| Error::Internal {
            message: "model load guard poisoned".to_string(),
        })?;
        if let Some(value) = self.value.get() {
            return Ok(Arc::clone(value));
        }

        let value = Arc::new((self.loader)()?);
        let stored = self.value.get_or_init(|| value);
        Ok(Arc::clone(stored))
    }

    fn is_loaded(&self) -> bool {
        self.value.get().is_some()
    }
}

/// Resolved model file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    /// Species classifier weights.
    pub species: PathBuf,
    /// Breed classifier weights.
    pub breed: PathBuf,
}

impl ModelPaths {
    /// Paths from config, falling back to the default locations.
    pub fn from_config(config: &Config) -> Self {
        Self {
            species: config
                .models
                .species
                .clone()
                .unwrap_or_else(|| default_model_path(model_files::SPECIES)),
            breed: config
                .models
                .breed
                .clone()
                .unwrap_or_else(|| default_model_path(model_files::BREED)),
        }
    }
}

/// Shared, read-only classifier handles.
pub struct ModelRegistry {
    species: Slot<SpeciesClassifier>,
    breed: Slot<BreedClassifier>,
}

impl ModelRegistry {
    /// Registry backed by ONNX files.
    pub fn from_paths(paths: ModelPaths, device: InferenceDevice) -> Self {
        let ModelPaths { species, breed } = paths;
        Self::with_loaders(
            Box::new(move || {
                info!("Loading species classifier");
                SpeciesClassifier::new(Box::new(OnnxModel::load(&species, device)?))
            }),
            Box::new(move || {
                info!("Loading breed classifier");
                BreedClassifier::new(Box::new(OnnxModel::load(&breed, device)?))
            }),
        )
    }

    /// Registry with custom loaders.
    pub fn with_loaders(
        species: Loader<SpeciesClassifier>,
        breed: Loader<BreedClassifier>,
    ) -> Self {
        Self {
            species: Slot::new(species),
            breed: Slot::new(breed),
        }
    }

    /// The species classifier, loading it on first use.
    pub fn species(&self) -> Result<Arc<SpeciesClassifier>> {
        self.species.get()
    }

    /// The breed classifier, loading it on first use.
    pub fn breed(&self) -> Result<Arc<BreedClassifier>> {
        self.breed.get()
    }

    /// Whether the breed classifier has been loaded.
    pub fn breed_loaded(&self) -> bool {
        self.breed.is_loaded()
    }
}
