//! Semantic text similarity scoring.
//!
//! The pre-trained model is consumed as a black box behind the
//! [`SimilarityScorer`] trait; the bundled backend embeds both strings with a
//! MiniLM-class sentence-embedding ONNX model and reports cosine similarity.

use crate::error::Result;
#[cfg(feature = "embeddings")]
use crate::{
    config::ModelConfig,
    error::{AppError, ResultExt},
};

#[cfg(feature = "embeddings")]
use ndarray::{Array1, Array2};
#[cfg(feature = "embeddings")]
use ort::session::{builder::GraphOptimizationLevel, Session};
#[cfg(feature = "embeddings")]
use ort::value::TensorRef;
#[cfg(feature = "embeddings")]
use std::path::Path;
#[cfg(feature = "embeddings")]
use std::sync::Mutex;
#[cfg(feature = "embeddings")]
use tokenizers::Tokenizer;

/// Maps a pair of text strings to a scalar semantic-similarity score.
pub trait SimilarityScorer {
    /// Returns a bounded similarity score for the pair.
    ///
    /// Empty strings are valid input; the score is model-defined.
    fn similarity(&self, a: &str, b: &str) -> Result<f32>;
}

/// Sentence-embedding scorer backed by ONNX Runtime.
///
/// Loads the model once at construction; inference runs on CPU. The session
/// is wrapped in a mutex because ONNX Runtime requires exclusive access to
/// run, while the trait takes `&self`.
#[cfg(feature = "embeddings")]
pub struct MiniLmScorer {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    output_name: String,
    needs_token_type_ids: bool,
}

#[cfg(feature = "embeddings")]
impl MiniLmScorer {
    /// Loads the embedding model and its tokenizer.
    ///
    /// Missing weights or a corrupt tokenizer file are fatal.
    pub fn new(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
        log::debug!("Loading embedding model: {}", model_path.display());

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?
            .commit_from_file(model_path)?;

        let tokenizer = Tokenizer::from_file(tokenizer_path).map_err(|e| {
            AppError::Model(format!(
                "failed to load tokenizer {}: {}",
                tokenizer_path.display(),
                e
            ))
        })?;

        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| AppError::Model("embedding model has no outputs".to_string()))?;

        let needs_token_type_ids = session
            .inputs
            .iter()
            .any(|input| input.name == "token_type_ids");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            output_name,
            needs_token_type_ids,
        })
    }

    /// Builds the scorer from [`ModelConfig::from_env`] paths.
    pub fn from_env() -> Result<Self> {
        let config = ModelConfig::from_env();
        Self::new(&config.embedding_model, &config.tokenizer)
    }

    /// Computes a mean-pooled sentence embedding for a single string.
    fn embed(&self, text: &str) -> Result<Array1<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| AppError::Model(format!("tokenizer encode failed: {}", e)))?;

        let ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let seq_len = ids.len();

        let input_ids =
            Array2::from_shape_vec((1, seq_len), ids).context("failed to shape input_ids")?;
        let attention_mask = Array2::from_shape_vec((1, seq_len), mask.clone())
            .context("failed to shape attention_mask")?;
        let token_type_ids = Array2::<i64>::zeros((1, seq_len));

        let mut session = self
            .session
            .lock()
            .map_err(|_| AppError::Internal("embedding session lock poisoned".to_string()))?;

        let outputs = if self.needs_token_type_ids {
            let inputs = ort::inputs![
                "input_ids" => TensorRef::from_array_view(input_ids.view())?,
                "attention_mask" => TensorRef::from_array_view(attention_mask.view())?,
                "token_type_ids" => TensorRef::from_array_view(token_type_ids.view())?
            ];
            session.run(inputs)?
        } else {
            let inputs = ort::inputs![
                "input_ids" => TensorRef::from_array_view(input_ids.view())?,
                "attention_mask" => TensorRef::from_array_view(attention_mask.view())?
            ];
            session.run(inputs)?
        };

        let (shape, data) = outputs[self.output_name.as_str()].try_extract_tensor::<f32>()?;
        if shape.len() != 3 {
            return Err(AppError::Model(format!(
                "unexpected embedding output shape {:?}",
                shape
            )));
        }
        let tokens = shape[1] as usize;
        let hidden = shape[2] as usize;

        // Mean pooling over non-padding tokens
        let mut pooled = Array1::<f32>::zeros(hidden);
        let mut counted = 0.0f32;
        for token in 0..tokens.min(seq_len) {
            if mask[token] == 0 {
                continue;
            }
            let row = &data[token * hidden..(token + 1) * hidden];
            for (acc, &value) in pooled.iter_mut().zip(row) {
                *acc += value;
            }
            counted += 1.0;
        }
        if counted > 0.0 {
            pooled.mapv_inplace(|value| value / counted);
        }

        Ok(pooled)
    }
}

#[cfg(feature = "embeddings")]
impl std::fmt::Debug for MiniLmScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmScorer")
            .field("output_name", &self.output_name)
            .field("needs_token_type_ids", &self.needs_token_type_ids)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "embeddings")]
impl SimilarityScorer for MiniLmScorer {
    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let embedding_a = self.embed(a)?;
        let embedding_b = self.embed(b)?;
        Ok(cosine_similarity(&embedding_a, &embedding_b))
    }
}

/// Computes cosine similarity between two embeddings, clamped to [-1, 1].
///
/// Zero-norm vectors score 0.
#[cfg(feature = "embeddings")]
pub fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let dot_product = a.dot(b);
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();

    if norm_a > 0.0 && norm_b > 0.0 {
        (dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
