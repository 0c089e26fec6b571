//! Screening engine: one resume against one job description

use crate::catalog::SkillCatalog;
use crate::error::Result;
use crate::processing::embeddings::Embedder;
use crate::processing::matcher::SkillMatcher;
use crate::processing::scorer::{skill_coverage, Confidence, SemanticScorer};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeSet;

/// Orchestrates matching, scoring and classification. The matcher is
/// compiled once from the catalog lexicon; everything else is created
/// fresh per screening.
pub struct ScreeningEngine<'a> {
    embedder: &'a dyn Embedder,
    matcher: SkillMatcher,
}

/// Outcome of a single screening run.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningResult {
    pub role: String,
    pub score: u8,
    pub coverage: u8,
    pub confidence: Confidence,
    pub found: BTreeSet<String>,
    pub required: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl<'a> ScreeningEngine<'a> {
    pub fn new(catalog: &SkillCatalog, embedder: &'a dyn Embedder) -> Result<Self> {
        let matcher = SkillMatcher::new(catalog.lexicon())?;
        debug!("Skill matcher compiled with {} skills", matcher.skill_count());

        Ok(Self { embedder, matcher })
    }

    pub fn screen(&self, role: &str, resume_text: &str, job_desc: &str) -> Result<ScreeningResult> {
        info!("Screening resume against role '{}'", role);

        let found = self.matcher.extract(resume_text);
        debug!("Resume skills: {:?}", found);

        let required = self.matcher.extract(job_desc);
        debug!("Job-required skills: {:?}", required);

        let scorer = SemanticScorer::new(self.embedder);
        let score = scorer.score(resume_text, job_desc)?;

        let coverage = skill_coverage(&found, &required);
        let missing: BTreeSet<String> = required.difference(&found).cloned().collect();
        let confidence = Confidence::classify(score, coverage);

        info!(
            "Score {}%, coverage {}%, confidence {} ({} missing skills)",
            score,
            coverage,
            confidence,
            missing.len()
        );

        Ok(ScreeningResult {
            role: role.to_string(),
            score,
            coverage,
            confidence,
            found,
            required,
            missing,
        })
    }
}
