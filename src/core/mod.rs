//! Core functionality for image comparison

/// Pixel-level similarity metrics (PSNR, resize helpers).
pub mod metrics;
/// Text extraction from images via OCR.
pub mod ocr;
/// Semantic similarity scoring between extracted text strings.
pub mod similarity;
