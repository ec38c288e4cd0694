//! Text extraction from raster images.
//!
//! The OCR engine is consumed as a black box behind the [`TextExtractor`]
//! trait so it can be swapped or mocked in tests.

use image::DynamicImage;

use crate::error::Result;
#[cfg(feature = "ocr")]
use crate::{config::ModelConfig, error::AppError};

/// Extracts machine-readable text from a decoded image.
pub trait TextExtractor {
    /// Runs OCR over the image and returns the recognized text.
    ///
    /// Grayscale conversion is owned by the pipeline: implementations
    /// receive a `Luma8` image and may use its buffer directly. The returned
    /// string may be empty when no text is found.
    fn extract_text(&self, image: &DynamicImage) -> Result<String>;
}

/// OCR engine backed by `ocrs` with RTen detection and recognition models.
#[cfg(feature = "ocr")]
pub struct OcrsExtractor {
    engine: ocrs::OcrEngine,
}

#[cfg(feature = "ocr")]
impl OcrsExtractor {
    /// Loads the detection and recognition models and builds the engine.
    ///
    /// Missing or corrupt model files are fatal; there is no fallback.
    pub fn new(detection_model: &std::path::Path, recognition_model: &std::path::Path) -> Result<Self> {
        log::debug!(
            "Loading OCR models: {} / {}",
            detection_model.display(),
            recognition_model.display()
        );

        let detection = rten::Model::load_file(detection_model).map_err(|e| {
            AppError::Model(format!(
                "failed to load detection model {}: {}",
                detection_model.display(),
                e
            ))
        })?;
        let recognition = rten::Model::load_file(recognition_model).map_err(|e| {
            AppError::Model(format!(
                "failed to load recognition model {}: {}",
                recognition_model.display(),
                e
            ))
        })?;

        let engine = ocrs::OcrEngine::new(ocrs::OcrEngineParams {
            detection_model: Some(detection),
            recognition_model: Some(recognition),
            ..Default::default()
        })
        .map_err(|e| AppError::Model(format!("failed to initialize OCR engine: {}", e)))?;

        Ok(Self { engine })
    }

    /// Builds the extractor from [`ModelConfig::from_env`] paths.
    pub fn from_env() -> Result<Self> {
        let config = ModelConfig::from_env();
        Self::new(&config.detection_model, &config.recognition_model)
    }
}

#[cfg(feature = "ocr")]
impl std::fmt::Debug for OcrsExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrsExtractor").finish_non_exhaustive()
    }
}

#[cfg(feature = "ocr")]
impl TextExtractor for OcrsExtractor {
    fn extract_text(&self, image: &DynamicImage) -> Result<String> {
        // The pipeline already grayscaled; convert only if handed color input.
        let converted;
        let gray = match image.as_luma8() {
            Some(gray) => gray,
            None => {
                converted = image.to_luma8();
                &converted
            }
        };
        let source = ocrs::ImageSource::from_bytes(gray.as_raw(), gray.dimensions())
            .map_err(|e| AppError::Ocr(format!("unsupported image buffer: {}", e)))?;

        let input = self
            .engine
            .prepare_input(source)
            .map_err(|e| AppError::Ocr(format!("failed to prepare OCR input: {}", e)))?;

        let text = self
            .engine
            .get_text(&input)
            .map_err(|e| AppError::Ocr(format!("text recognition failed: {}", e)))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "ocr")]
    #[test]
    fn test_missing_models_are_fatal() {
        let missing = std::path::Path::new("does/not/exist.rten");
        let result = OcrsExtractor::new(missing, missing);
        assert!(matches!(result, Err(crate::error::AppError::Model(_))));
    }

    #[test]
    fn test_extractor_trait_is_object_safe() {
        struct Fixed;
        impl TextExtractor for Fixed {
            fn extract_text(&self, _image: &DynamicImage) -> Result<String> {
                Ok("HELLO".to_string())
            }
        }

        let extractor: &dyn TextExtractor = &Fixed;
        let img = DynamicImage::new_luma8(4, 4);
        assert_eq!(extractor.extract_text(&img).unwrap(), "HELLO");
    }
}
