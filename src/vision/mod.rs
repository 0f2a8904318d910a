//! Image loading and preprocessing for the classifiers.

mod loader;
mod normalize;

pub use loader::{ImageMetadata, LoadedImage, decode_image, is_supported_image, load_image};
pub use normalize::{ImageTensor, normalize};
