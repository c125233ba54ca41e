use std::path::Path;

use image::{DynamicImage, GenericImageView};
use ndarray::{Array2, Array3};
use tracing::debug;

use crate::error::{Error, Result};

/// Reduce 16-bit and float sources to their 8-bit counterpart so every
/// layer enters the pipeline as [0,255] channel samples.
fn to_eight_bit(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => img,
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(img.to_luma8()),
        DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb8(img.to_rgb8())
        }
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}

/// Decode an image into an H×W×C grid of integer channel samples as floats.
/// The channel count follows the source color mode (1 gray, 2 gray+alpha,
/// 3 RGB, 4 RGBA). No normalization is applied.
pub fn load_layer(path: &Path) -> Result<Array3<f64>> {
    debug!("opening layer {:?}", path);
    let img = image::open(path).map_err(|e| Error::resource(path, e))?;
    let img = to_eight_bit(img);

    let (rows, cols) = (img.height() as usize, img.width() as usize);
    let channels = img.color().channel_count() as usize;
    let samples: Vec<f64> = img.as_bytes().iter().map(|&b| f64::from(b)).collect();

    Array3::from_shape_vec((rows, cols, channels), samples)
        .map_err(|e| Error::Processing(e.to_string()))
}

/// Decode an image as a single-channel luminance mask, rescaled from
/// [0,255] into [0,1].
pub fn load_mask(path: &Path) -> Result<Array2<f64>> {
    debug!("opening mask {:?}", path);
    let img = image::open(path).map_err(|e| Error::resource(path, e))?;
    let luma = img.to_luma8();

    let (rows, cols) = (luma.height() as usize, luma.width() as usize);
    let samples: Vec<f64> = luma.as_raw().iter().map(|&b| f64::from(b) / 255.0).collect();

    Array2::from_shape_vec((rows, cols), samples).map_err(|e| Error::Processing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn missing_resource_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_layer(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
        let err = load_mask(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
    }

    #[test]
    fn rgb_layer_keeps_three_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layer.png");
        let mut img = RgbImage::new(2, 3);
        img.put_pixel(1, 2, Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let layer = load_layer(&path).unwrap();
        assert_eq!(layer.dim(), (3, 2, 3));
        assert_eq!(layer[(2, 1, 0)], 10.0);
        assert_eq!(layer[(2, 1, 1)], 20.0);
        assert_eq!(layer[(2, 1, 2)], 30.0);
    }

    #[test]
    fn mask_is_luminance_over_255() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let mut img = GrayImage::new(2, 2);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([51]));
        img.put_pixel(0, 1, Luma([204]));
        img.put_pixel(1, 1, Luma([255]));
        img.save(&path).unwrap();

        let mask = load_mask(&path).unwrap();
        assert_eq!(mask.dim(), (2, 2));
        assert_eq!(mask[(0, 0)], 0.0);
        assert!((mask[(0, 1)] - 0.2).abs() < 1e-12);
        assert!((mask[(1, 0)] - 0.8).abs() < 1e-12);
        assert_eq!(mask[(1, 1)], 1.0);
    }
}
