use image::{DynamicImage, RgbImage};
use imageproc::stats::root_mean_squared_error;

use crate::error::{AppError, Result};

/// Maximum representable value for an 8-bit sample, used as the PSNR peak.
const MAX_SAMPLE_VALUE: f64 = 255.0;

/// Resizes `other` to exactly match the dimensions of `reference`.
///
/// The reference image defines the target resolution. Resizing an image that
/// already has the target dimensions returns a pixel-identical copy.
pub fn resize_to_match(reference: &DynamicImage, other: &DynamicImage) -> DynamicImage {
    let (width, height) = (reference.width(), reference.height());
    if other.width() == width && other.height() == height {
        return other.clone();
    }
    other.resize_exact(width, height, image::imageops::FilterType::Triangle)
}

/// Computes the peak signal-to-noise ratio between two equally sized images.
///
/// Defined as `20·log10(255) − 10·log10(MSE)` where MSE is the mean squared
/// per-sample difference across all channels. Identical buffers have zero
/// MSE and map to `f64::INFINITY`.
pub fn psnr(a: &RgbImage, b: &RgbImage) -> Result<f64> {
    if a.dimensions() != b.dimensions() {
        return Err(AppError::InvalidInput(format!(
            "dimension mismatch: {}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }

    let rmse = root_mean_squared_error(a, b);
    if rmse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(20.0 * (MAX_SAMPLE_VALUE / rmse).log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient_image(width: u32, height: u32) -> RgbImage {
        let mut imgbuf = RgbImage::new(width, height);
        for (x, y, pixel) in imgbuf.enumerate_pixels_mut() {
            *pixel = Rgb([
                (x as f32 * 255.0 / width as f32) as u8,
                (y as f32 * 255.0 / height as f32) as u8,
                128,
            ]);
        }
        imgbuf
    }

    fn offset_image(base: &RgbImage, offset: u8) -> RgbImage {
        let mut shifted = base.clone();
        for pixel in shifted.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                *channel = channel.saturating_add(offset);
            }
        }
        shifted
    }

    #[test]
    fn test_psnr_identical_images_is_infinite() {
        let img = gradient_image(16, 16);
        let score = psnr(&img, &img.clone()).unwrap();
        assert!(score.is_infinite());
    }

    #[test]
    fn test_psnr_decreases_with_offset() {
        let base = gradient_image(32, 32);
        let small = psnr(&base, &offset_image(&base, 5)).unwrap();
        let large = psnr(&base, &offset_image(&base, 40)).unwrap();
        assert!(small.is_finite());
        assert!(large.is_finite());
        assert!(small > large);
    }

    #[test]
    fn test_psnr_black_vs_white_is_low() {
        let black = RgbImage::from_pixel(50, 50, Rgb([0, 0, 0]));
        let white = RgbImage::from_pixel(50, 50, Rgb([255, 255, 255]));
        let score = psnr(&black, &white).unwrap();
        // MSE is 255^2, so the score collapses to 0 dB
        assert!(score.is_finite());
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_psnr_rejects_dimension_mismatch() {
        let a = gradient_image(8, 8);
        let b = gradient_image(4, 4);
        assert!(psnr(&a, &b).is_err());
    }

    #[test]
    fn test_resize_to_match_is_idempotent() {
        let img = DynamicImage::ImageRgb8(gradient_image(20, 10));
        let resized = resize_to_match(&img, &img);
        assert_eq!(resized.to_rgb8().as_raw(), img.to_rgb8().as_raw());
    }

    #[test]
    fn test_resize_to_match_changes_dimensions() {
        let reference = DynamicImage::ImageRgb8(gradient_image(20, 10));
        let other = DynamicImage::ImageRgb8(gradient_image(40, 40));
        let resized = resize_to_match(&reference, &other);
        assert_eq!((resized.width(), resized.height()), (20, 10));
    }
}
