//! Semantic match score, skill coverage and confidence classification

use crate::error::Result;
use crate::processing::embeddings::{cosine_similarity, Embedder};
use crate::processing::normalizer::TextNormalizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Turns cosine similarity between two texts into an integer
/// percentage. Deterministic for a fixed model.
pub struct SemanticScorer<'a> {
    embedder: &'a dyn Embedder,
    normalizer: TextNormalizer,
}

impl<'a> SemanticScorer<'a> {
    pub fn new(embedder: &'a dyn Embedder) -> Self {
        Self {
            embedder,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Percentage is truncated, not rounded; user-visible numbers depend
    /// on it. Negative similarity clamps to 0.
    pub fn score(&self, text_a: &str, text_b: &str) -> Result<u8> {
        let embedding_a = self.embedder.embed(&self.normalizer.normalize(text_a))?;
        let embedding_b = self.embedder.embed(&self.normalizer.normalize(text_b))?;

        let similarity = cosine_similarity(&embedding_a, &embedding_b)?;
        Ok((similarity.clamp(0.0, 1.0) * 100.0) as u8)
    }
}

/// Fraction of job-required skills present in the resume, as a truncated
/// percentage. No required skills is defined as 0% coverage.
pub fn skill_coverage(found: &BTreeSet<String>, required: &BTreeSet<String>) -> u8 {
    if required.is_empty() {
        return 0;
    }

    let matched = required.intersection(found).count();
    ((matched * 100) / required.len()) as u8
}

/// Confidence in the match, derived from both the semantic score and the
/// skill coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Threshold cascade, evaluated in this order; no other tie-break.
    pub fn classify(score: u8, coverage: u8) -> Self {
        if score >= 75 && coverage >= 65 {
            Confidence::High
        } else if score >= 55 && coverage >= 40 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScreenerError;

    struct FixedEmbedder {
        vector: Vec<f32>,
    }

    impl Embedder for FixedEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            if text.is_empty() {
                return Ok(vec![0.0; self.vector.len()]);
            }
            Ok(self.vector.clone())
        }

        fn id(&self) -> &str {
            "fixed"
        }
    }

    struct FailingEmbedder;

    impl Embedder for FailingEmbedder {
        fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Err(ScreenerError::Embedding("encode failed".to_string()))
        }

        fn id(&self) -> &str {
            "failing"
        }
    }

    fn skill_set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_texts_score_100() {
        let embedder = FixedEmbedder {
            vector: vec![0.3, 0.7, 0.1],
        };
        let scorer = SemanticScorer::new(&embedder);
        assert_eq!(scorer.score("some resume", "some job").unwrap(), 100);
    }

    #[test]
    fn test_empty_text_scores_zero_without_erroring() {
        let embedder = FixedEmbedder {
            vector: vec![0.3, 0.7, 0.1],
        };
        let scorer = SemanticScorer::new(&embedder);
        assert_eq!(scorer.score("", "some job").unwrap(), 0);
    }

    #[test]
    fn test_embedding_failure_propagates() {
        let scorer = SemanticScorer::new(&FailingEmbedder);
        assert!(matches!(
            scorer.score("a", "b"),
            Err(ScreenerError::Embedding(_))
        ));
    }

    #[test]
    fn test_coverage_truncates() {
        // floor(200 / 3) = 66, not 67
        let required = skill_set(&["python", "sql", "docker"]);
        let found = skill_set(&["python", "sql"]);
        assert_eq!(skill_coverage(&found, &required), 66);
    }

    #[test]
    fn test_coverage_empty_required_is_zero() {
        let required = BTreeSet::new();
        let found = skill_set(&["python"]);
        assert_eq!(skill_coverage(&found, &required), 0);
    }

    #[test]
    fn test_coverage_superset_is_100() {
        let required = skill_set(&["python", "sql"]);
        let found = skill_set(&["python", "sql", "docker"]);
        assert_eq!(skill_coverage(&found, &required), 100);
    }

    #[test]
    fn test_coverage_disjoint_is_zero() {
        let required = skill_set(&["python"]);
        let found = skill_set(&["docker"]);
        assert_eq!(skill_coverage(&found, &required), 0);
    }

    #[test]
    fn test_classify_needs_both_thresholds() {
        assert_eq!(Confidence::classify(80, 70), Confidence::High);
        assert_eq!(Confidence::classify(80, 50), Confidence::Medium);
        assert_eq!(Confidence::classify(60, 70), Confidence::Medium);
        assert_eq!(Confidence::classify(75, 65), Confidence::High);
        assert_eq!(Confidence::classify(74, 100), Confidence::Medium);
        assert_eq!(Confidence::classify(55, 40), Confidence::Medium);
        assert_eq!(Confidence::classify(54, 100), Confidence::Low);
        assert_eq!(Confidence::classify(100, 39), Confidence::Low);
        assert_eq!(Confidence::classify(0, 0), Confidence::Low);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let steps: Vec<u8> = (0..=100).step_by(5).collect();
        for &score in &steps {
            for &coverage in &steps {
                let here = Confidence::classify(score, coverage);
                if score < 100 {
                    assert!(Confidence::classify(score + 5, coverage) >= here);
                }
                if coverage < 100 {
                    assert!(Confidence::classify(score, coverage + 5) >= here);
                }
            }
        }
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(Confidence::High.to_string(), "High");
        assert_eq!(Confidence::Medium.to_string(), "Medium");
        assert_eq!(Confidence::Low.to_string(), "Low");
    }
}
