//! Decode uploaded images and capture their basic metadata.

use crate::constants::preprocess::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use image::{DynamicImage, ImageReader};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Basic facts about an input image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// File name without directories.
    pub name: String,
    /// Size of the encoded file in bytes.
    pub byte_size: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color layout of the decoded image, e.g. `Rgb8`.
    pub color_mode: String,
}

/// A decoded image with its metadata.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Decoded pixels.
    pub image: DynamicImage,
    /// Facts about the source file.
    pub metadata: ImageMetadata,
}

/// Check whether a path has an accepted image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(OsStr::new(known)))
    })
}

/// Decode an image from memory.
///
/// `name` only labels errors and metadata.
pub fn decode_image(name: &str, bytes: &[u8]) -> Result<LoadedImage> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::InvalidImage {
            name: name.to_string(),
            reason: e.to_string(),
        })?
        .decode()
        .map_err(|e| Error::InvalidImage {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidImage {
            name: name.to_string(),
            reason: "image has zero width or height".to_string(),
        });
    }

    let metadata = ImageMetadata {
        name: name.to_string(),
        byte_size: bytes.len() as u64,
        width: image.width(),
        height: image.height(),
        color_mode: format!("{:?}", image.color()),
    };
    debug!(
        "Decoded {name}: {}x{} {}",
        metadata.width, metadata.height, metadata.color_mode
    );

    Ok(LoadedImage { image, metadata })
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let bytes = std::fs::read(path).map_err(|e| Error::InvalidImage {
        name: name.clone(),
        reason: e.to_string(),
    })?;
    decode_image(&name, &bytes)
}
