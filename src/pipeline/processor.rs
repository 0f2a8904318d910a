//! Single image processing.

use crate::error::Result;
use crate::pipeline::{Cascade, CascadeResult};
use crate::vision::{ImageMetadata, load_image};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Cascade output for one file, with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReport {
    /// Facts about the input image.
    pub image: ImageMetadata,
    /// Cascade outcome.
    pub result: CascadeResult,
    /// Wall time spent on this image, in seconds.
    pub duration_secs: f64,
}

/// Load an image file and run the cascade on it.
pub fn process_file(input_path: &Path, cascade: &Cascade<'_>) -> Result<ImageReport> {
    let start_time = Instant::now();
    info!("Processing: {}", input_path.display());

    let loaded = load_image(input_path)?;
    let result = cascade.run(&loaded.image)?;

    Ok(ImageReport {
        image: loaded.metadata,
        result,
        duration_secs: start_time.elapsed().as_secs_f64(),
    })
}
