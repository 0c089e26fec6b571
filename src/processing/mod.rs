//! Core screening logic: normalization, matching, scoring, orchestration

pub mod analyzer;
pub mod embeddings;
pub mod matcher;
pub mod normalizer;
pub mod scorer;

pub use analyzer::{ScreeningEngine, ScreeningResult};
pub use embeddings::{Embedder, EmbeddingEngine};
pub use matcher::SkillMatcher;
pub use normalizer::TextNormalizer;
pub use scorer::{skill_coverage, Confidence, SemanticScorer};
