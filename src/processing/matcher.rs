//! Whole-word skill extraction against the catalog lexicon

use crate::error::{Result, ScreenerError};
use crate::processing::normalizer::TextNormalizer;
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// Finds catalog skills occurring in a text as whole words. A match
/// counts only when the characters adjacent to it are absent or
/// non-alphanumeric, so "java" never fires inside "javascript" while
/// "c++" and "c#" still match at token edges.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    skills: Vec<String>,
    normalizer: TextNormalizer,
}

impl SkillMatcher {
    /// Compile the lexicon once; skills run through the same normalizer
    /// as the text so entries like "ci/cd" line up with their normalized
    /// occurrences. The canonical (lowercased) catalog spelling is what
    /// gets reported.
    pub fn new(lexicon: &[String]) -> Result<Self> {
        let normalizer = TextNormalizer::new();

        let mut entries: Vec<(String, String)> = lexicon
            .iter()
            .map(|skill| (normalizer.normalize(skill), skill.trim().to_lowercase()))
            .filter(|(pattern, _)| !pattern.is_empty())
            .collect();
        entries.sort();
        entries.dedup_by(|a, b| a.0 == b.0);

        let patterns: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();
        let automaton = AhoCorasick::new(&patterns).map_err(|e| {
            ScreenerError::Processing(format!("Failed to build skill matcher: {}", e))
        })?;

        let skills = entries.into_iter().map(|(_, canonical)| canonical).collect();

        Ok(Self {
            automaton,
            skills,
            normalizer,
        })
    }

    /// Extract the deduplicated, sorted set of lexicon skills present in
    /// `text` as whole words.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let normalized = self.normalizer.normalize(text);
        let bytes = normalized.as_bytes();

        let mut found = BTreeSet::new();
        for mat in self.automaton.find_overlapping_iter(&normalized) {
            let left_bounded = mat.start() == 0 || !bytes[mat.start() - 1].is_ascii_alphanumeric();
            let right_bounded =
                mat.end() == bytes.len() || !bytes[mat.end()].is_ascii_alphanumeric();

            if left_bounded && right_bounded {
                found.insert(self.skills[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
