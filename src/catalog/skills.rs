//! Skill catalog: categorized skill table plus the flat matching lexicon

use crate::error::{Result, ScreenerError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Reserved category for skills no declared category claims.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Loaded once per process and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
    lexicon: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SkillRecord {
    skill: String,
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    /// Load the lexicon from the skills CSV (single `skill` column) and
    /// the category table from `categories_path` when given, the built-in
    /// table otherwise.
    pub fn load(skills_path: &Path, categories_path: Option<&Path>) -> Result<Self> {
        let lexicon = Self::load_lexicon(skills_path)?;

        let categories = match categories_path {
            Some(path) => Self::load_categories(path)?,
            None => Self::builtin_categories(),
        };

        Ok(Self::from_parts(categories, lexicon))
    }

    /// Assemble a catalog from already-built parts. Skills are lowercased
    /// here so every consumer sees the catalog invariant hold.
    pub fn from_parts(mut categories: Vec<SkillCategory>, lexicon: Vec<String>) -> Self {
        for category in &mut categories {
            for skill in &mut category.skills {
                *skill = skill.trim().to_lowercase();
            }
        }
        Self::warn_duplicate_assignments(&categories);

        let lexicon = lexicon
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            categories,
            lexicon,
        }
    }

    fn load_lexicon(path: &Path) -> Result<Vec<String>> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            ScreenerError::CatalogLoad(format!(
                "Cannot load skill catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut lexicon = Vec::new();
        for record in reader.deserialize() {
            let record: SkillRecord = record.map_err(|e| {
                ScreenerError::CatalogLoad(format!(
                    "Malformed row in skill catalog '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            lexicon.push(record.skill);
        }
        Ok(lexicon)
    }

    fn load_categories(path: &Path) -> Result<Vec<SkillCategory>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScreenerError::CatalogLoad(format!(
                "Cannot load category table '{}': {}",
                path.display(),
                e
            ))
        })?;
        let file: CategoryFile = toml::from_str(&content).map_err(|e| {
            ScreenerError::CatalogLoad(format!(
                "Malformed category table '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(file.categories)
    }

    /// A skill assigned to more than one category is ambiguous; the first
    /// declared category wins and the rest are ignored during
    /// categorization.
    fn warn_duplicate_assignments(categories: &[SkillCategory]) {
        let mut seen: HashSet<&str> = HashSet::new();
        for category in categories {
            for skill in &category.skills {
                if !seen.insert(skill) {
                    warn!(
                        "Skill '{}' appears in more than one category; keeping its first assignment",
                        skill
                    );
                }
            }
        }
    }

    pub fn lexicon(&self) -> &[String] {
        &self.lexicon
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Group skills by their first matching category, in declared
    /// category order, unknowns under "Other" last. Categories with no
    /// assigned skills are omitted.
    pub fn categorize(&self, skills: &BTreeSet<String>) -> Vec<(String, Vec<String>)> {
        let mut grouped: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|c| (c.name.clone(), Vec::new()))
            .collect();
        let mut other = Vec::new();

        for skill in skills {
            match self
                .categories
                .iter()
                .position(|c| c.skills.iter().any(|s| s == skill))
            {
                Some(idx) => grouped[idx].1.push(skill.clone()),
                None => other.push(skill.clone()),
            }
        }

        if !other.is_empty() {
            grouped.push((OTHER_CATEGORY.to_string(), other));
        }

        grouped.retain(|(_, skills)| !skills.is_empty());
        grouped
    }

    fn builtin_categories() -> Vec<SkillCategory> {
        let table: [(&str, &[&str]); 9] = [
            ("Programming", &["python", "java", "c++", "javascript"]),
            (
                "Data & Analytics",
                &[
                    "pandas",
                    "numpy",
                    "sql",
                    "excel",
                    "statistics",
                    "data visualization",
                    "power bi",
                    "tableau",
                ],
            ),
            (
                "Machine Learning",
                &[
                    "machine learning",
                    "scikit-learn",
                    "feature engineering",
                    "model deployment",
                ],
            ),
            (
                "Deep Learning",
                &["deep learning", "tensorflow", "pytorch", "cnn", "transformers"],
            ),
            (
                "NLP",
                &[
                    "nlp",
                    "bert",
                    "tokenization",
                    "sentiment analysis",
                    "named entity recognition",
                ],
            ),
            (
                "Computer Vision",
                &[
                    "computer vision",
                    "opencv",
                    "yolo",
                    "object detection",
                    "segmentation",
                ],
            ),
            ("Backend / APIs", &["flask", "django", "api", "rest api"]),
            (
                "Cloud & DevOps",
                &["aws", "azure", "docker", "kubernetes", "ci/cd", "linux"],
            ),
            ("Databases", &["mysql", "mongodb", "data warehouse"]),
        ];

        table
            .iter()
            .map(|(name, skills)| SkillCategory {
                name: name.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    }
}
