#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

//! # imagesim
//!
//! A Rust library and pair of command-line tools for scoring the similarity
//! of two images.
//!
//! ## Pipelines
//!
//! - **Pixel similarity**: decode both images, resize the candidate to the
//!   reference's dimensions, and compute the peak signal-to-noise ratio
//!   (PSNR) over the raw pixel buffers. Identical images score
//!   `f64::INFINITY`.
//! - **Text similarity**: decode both images, convert each to grayscale,
//!   extract text with an OCR engine, and score the two strings with a
//!   pre-trained sentence-embedding model.
//!
//! The OCR engine and the similarity model sit behind the [`TextExtractor`]
//! and [`SimilarityScorer`] traits so they can be swapped or mocked.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imagesim::{compare_pixels, Result};
//!
//! fn main() -> Result<()> {
//!     let score = compare_pixels("V.png", "ZC1.png")?;
//!     println!("Similarity Score: {}", score);
//!     Ok(())
//! }
//! ```

// Internal modules
/// Model artifact locations.
pub mod config;
pub mod core;
/// Defines the application's error types and result aliases.
pub mod error;
pub mod models;
mod utils;

use std::path::Path;

use image::DynamicImage;

// Public API exports
pub use crate::{
    config::ModelConfig,
    core::metrics::{psnr, resize_to_match},
    core::ocr::TextExtractor,
    core::similarity::SimilarityScorer,
    error::{AppError, Result, ResultExt},
    models::report::{ComparisonMethod, ComparisonReport},
};

#[cfg(feature = "ocr")]
pub use crate::core::ocr::OcrsExtractor;

#[cfg(feature = "embeddings")]
pub use crate::core::similarity::{cosine_similarity, MiniLmScorer};

#[allow(dead_code, unreachable_pub)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Initialize the application with default settings
///
/// Sets up logging. Should be called early in the application startup
/// process; safe to skip when embedding the library elsewhere.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
pub fn init() -> Result<()> {
    let env = env_logger::Env::default()
        .default_filter_or("info")
        .default_write_style_or("auto");

    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_module_path(false)
        .format_target(false)
        .init();

    log::info!(
        "Initializing {} {}",
        built_info::PKG_NAME,
        built_info::PKG_VERSION
    );
    Ok(())
}

/// Computes a pixel-level similarity score between two images.
///
/// Decodes both files, resizes the candidate to the reference's dimensions,
/// and returns the PSNR over the pixel buffers. Identical images return
/// `f64::INFINITY`.
///
/// # Errors
///
/// Returns an error if either file is missing or cannot be decoded.
pub fn compare_pixels<P: AsRef<Path>>(reference: P, candidate: P) -> Result<f64> {
    let reference_img = utils::load_image(reference.as_ref())?;
    let candidate_img = utils::load_image(candidate.as_ref())?;

    let resized = core::metrics::resize_to_match(&reference_img, &candidate_img);
    core::metrics::psnr(&reference_img.to_rgb8(), &resized.to_rgb8())
}

/// Computes a text-based similarity score with explicit backends.
///
/// Decodes both files, converts each to grayscale, extracts text with
/// `extractor` (trimming surrounding whitespace), and scores the pair with
/// `scorer`. Empty extracted strings are passed through to the scorer
/// unchanged.
///
/// # Errors
///
/// Returns an error on decode failure, OCR failure, or scorer failure.
pub fn compare_text_with<P: AsRef<Path>>(
    reference: P,
    candidate: P,
    extractor: &dyn TextExtractor,
    scorer: &dyn SimilarityScorer,
) -> Result<f32> {
    let text_a = extract_trimmed_text(reference.as_ref(), extractor)?;
    let text_b = extract_trimmed_text(candidate.as_ref(), extractor)?;

    log::debug!("Extracted text: {:?} vs {:?}", text_a, text_b);
    scorer.similarity(&text_a, &text_b)
}

/// Computes a text-based similarity score with the bundled backends.
///
/// Loads the OCR models and the sentence-embedding model from
/// [`ModelConfig::from_env`], then runs [`compare_text_with`]. Model loading
/// happens once per call and dominates the latency.
///
/// # Errors
///
/// Returns an error if any model fails to load, or on decode/OCR/scoring
/// failure.
#[cfg(all(feature = "ocr", feature = "embeddings"))]
pub fn compare_text<P: AsRef<Path>>(reference: P, candidate: P) -> Result<f32> {
    let extractor = OcrsExtractor::from_env()?;
    let scorer = MiniLmScorer::from_env()?;
    compare_text_with(reference, candidate, &extractor, &scorer)
}

fn extract_trimmed_text(path: &Path, extractor: &dyn TextExtractor) -> Result<String> {
    let image = utils::load_image(path)?;
    let gray = DynamicImage::ImageLuma8(image.to_luma8());
    let text = extractor.extract_text(&gray)?;
    Ok(text.trim().to_string())
}
