//! Utility functions and helpers for the imagesim library

use std::path::Path;

use image::DynamicImage;

use crate::error::Result;

/// Decodes an image from a file path.
///
/// A missing file or undecodable content surfaces as `AppError::Image`.
pub(crate) fn load_image(path: &Path) -> Result<DynamicImage> {
    log::debug!("Decoding image: {}", path.display());
    let image = image::open(path)?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("no/such/image.png"));
        assert!(matches!(result, Err(crate::error::AppError::Image(_))));
    }

    #[test]
    fn test_load_image_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.png");
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
    }
}
