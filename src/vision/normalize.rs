//! Resize and normalize an image into the classifier input tensor.

use crate::constants::preprocess::{CHANNELS, INPUT_SIZE, MEAN, STD};
use crate::error::{Error, Result};
use image::DynamicImage;
use image::imageops::FilterType;
use ndarray::Array3;

/// Normalized image in channel-first layout, `[3, 224, 224]`.
///
/// Channel order is RGB. Values are `(pixel / 255 - mean) / std` with the
/// ImageNet statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Array3<f32>,
}

impl ImageTensor {
    /// Tensor shape with a leading batch dimension of one.
    pub fn batch_shape(&self) -> Vec<i64> {
        let mut shape = vec![1_i64];
        shape.extend(
            self.data
                .shape()
                .iter()
                .map(|&d| i64::try_from(d).unwrap_or(i64::MAX)),
        );
        shape
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.data.shape()[0]
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.data.shape()[1]
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.data.shape()[2]
    }

    /// Contiguous values in `C, H, W` order.
    pub fn as_slice(&self) -> &[f32] {
        // Built with `Array3::from_shape_fn`, which is always standard layout.
        self.data.as_slice().unwrap_or_default()
    }

    /// A zero-valued tensor of the model input shape.
    pub fn zeros() -> Self {
        let side = INPUT_SIZE as usize;
        Self {
            data: Array3::zeros((CHANNELS, side, side)),
        }
    }

    /// Value at `(channel, y, x)`.
    pub fn get(&self, channel: usize, y: usize, x: usize) -> Option<f32> {
        self.data.get((channel, y, x)).copied()
    }
}

/// Convert an image to the classifier input tensor.
///
/// The image is converted to RGB, resized to 224x224 ignoring aspect ratio
/// and normalized per channel.
pub fn normalize(image: &DynamicImage) -> Result<ImageTensor> {
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidImage {
            name: "<memory>".to_string(),
            reason: "image has zero width or height".to_string(),
        });
    }

    let resized = image
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
        .to_rgb8();
    let side = INPUT_SIZE as usize;

    let data = Array3::from_shape_fn((CHANNELS, side, side), |(c, y, x)| {
        #[allow(clippy::cast_possible_truncation)]
        let pixel = resized.get_pixel(x as u32, y as u32);
        (f32::from(pixel[c]) / 255.0 - MEAN[c]) / STD[c]
    });

    Ok(ImageTensor { data })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_output_shape_is_fixed() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(640, 480));
        let tensor = normalize(&img).unwrap();
        assert_eq!(tensor.channels(), 3);
        assert_eq!(tensor.height(), 224);
        assert_eq!(tensor.width(), 224);
        assert_eq!(tensor.batch_shape(), vec![1, 3, 224, 224]);
        assert_eq!(tensor.as_slice().len(), 3 * 224 * 224);
    }

    #[test]
    fn test_black_pixels_map_to_negative_mean_over_std() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let tensor = normalize(&img).unwrap();
        for c in 0..3 {
            let expected = -MEAN[c] / STD[c];
            assert!((tensor.get(c, 100, 100).unwrap() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_white_red_channel_value() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 0, 0])));
        let tensor = normalize(&img).unwrap();
        let expected_red = (1.0 - MEAN[0]) / STD[0];
        assert!((tensor.get(0, 0, 0).unwrap() - expected_red).abs() < 1e-5);
        assert!((tensor.get(1, 0, 0).unwrap() - (-MEAN[1] / STD[1])).abs() < 1e-5);
    }

    #[test]
    fn test_grayscale_is_expanded_to_three_channels() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(50, 30, Luma([128])));
        let tensor = normalize(&img).unwrap();
        assert_eq!(tensor.channels(), 3);
        let value = f32::from(128_u8) / 255.0;
        assert!((tensor.get(2, 5, 5).unwrap() - (value - MEAN[2]) / STD[2]).abs() < 0.05);
    }

    #[test]
    fn test_zero_extent_is_invalid() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 10));
        assert!(matches!(normalize(&img), Err(Error::InvalidImage { .. })));
    }

    #[test]
    fn test_zeros_matches_input_shape() {
        assert_eq!(ImageTensor::zeros().batch_shape(), vec![1, 3, 224, 224]);
    }
}
