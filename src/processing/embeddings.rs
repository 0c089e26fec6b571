//! Embedding generation using Model2Vec

use crate::config::Config;
use crate::error::{Result, ScreenerError};
use log::info;
use model2vec_rs::model::StaticModel;
use std::time::Instant;

/// Seam between the scorer and the embedding backend. Implementations
/// must be shareable read-only across calls; tests substitute a
/// deterministic stub.
pub trait Embedder: Send + Sync {
    /// Encode one text into a fixed-length vector. Empty text yields a
    /// valid (zero-information) vector, not an error.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Identity of the underlying model, for logs and reports.
    fn id(&self) -> &str;
}

/// Process-wide handle over the pretrained Model2Vec model. Loaded once
/// at startup and only ever read afterwards.
pub struct EmbeddingEngine {
    model: StaticModel,
    model_name: String,
}

impl EmbeddingEngine {
    pub fn load(config: &Config) -> Result<Self> {
        let model_ref = config.resolve_model();
        let start_time = Instant::now();

        info!("Loading Model2Vec embedding model: {}", model_ref.display());

        let model = StaticModel::from_pretrained(&model_ref, None, None, None).map_err(|e| {
            ScreenerError::ModelLoading(format!(
                "Failed to load embedding model '{}': {}",
                model_ref.display(),
                e
            ))
        })?;

        info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: config.model.embedding_model.clone(),
        })
    }
}

impl Embedder for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }

    fn id(&self) -> &str {
        &self.model_name
    }
}

/// Cosine similarity between two embeddings. Zero-norm vectors (e.g.
/// from empty text) score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ScreenerError::Processing(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
