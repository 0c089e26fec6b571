//! Text normalization for skill matching and scoring

use regex::Regex;

/// Normalizes free text to lowercase `[a-z0-9+#.\s]` with single spaces.
/// `+`, `#` and `.` survive so tokens like "c++", "c#" and "node.js"
/// stay matchable.
pub struct TextNormalizer {
    disallowed: Regex,
    whitespace: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let disallowed = Regex::new(r"[^a-z0-9+#.\s]").expect("Invalid character-class regex");
        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            disallowed,
            whitespace,
        }
    }

    /// Total over any input; empty in, empty out. Disallowed characters
    /// become spaces before the whitespace collapse so adjacent tokens
    /// never fuse.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.disallowed.replace_all(&lowered, " ");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }
}
