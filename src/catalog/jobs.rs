//! Job-description table: role -> free-text description

use crate::error::{Result, ScreenerError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    pub description: String,
}

/// Loaded wholesale at startup; declaration order is preserved for
/// listing.
#[derive(Debug, Clone)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
}

impl JobBoard {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            ScreenerError::CatalogLoad(format!(
                "Cannot load job descriptions '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut postings: Vec<JobPosting> = Vec::new();
        for record in reader.deserialize() {
            let posting: JobPosting = record.map_err(|e| {
                ScreenerError::CatalogLoad(format!(
                    "Malformed row in job descriptions '{}': {}",
                    path.display(),
                    e
                ))
            })?;

            // The role column is a unique key; keep the first occurrence.
            if postings.iter().any(|p| p.role == posting.role) {
                warn!("Duplicate role '{}' in job table; keeping the first row", posting.role);
                continue;
            }
            postings.push(posting);
        }

        Ok(Self { postings })
    }

    pub fn from_postings(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.postings
            .iter()
            .find(|p| p.role == role)
            .map(|p| p.description.as_str())
    }

    pub fn roles(&self) -> Vec<&str> {
        self.postings.iter().map(|p| p.role.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_and_lookup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "role,description").unwrap();
        writeln!(file, "Data Scientist,\"Python, SQL and machine learning\"").unwrap();
        writeln!(file, "Backend Developer,\"Flask and REST API experience\"").unwrap();

        let board = JobBoard::load(file.path()).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.roles(), vec!["Data Scientist", "Backend Developer"]);
        assert_eq!(
            board.get("Data Scientist"),
            Some("Python, SQL and machine learning")
        );
        assert_eq!(board.get("Unknown Role"), None);
    }

    #[test]
    fn test_duplicate_role_keeps_first() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "role,description").unwrap();
        writeln!(file, "Data Scientist,first description").unwrap();
        writeln!(file, "Data Scientist,second description").unwrap();

        let board = JobBoard::load(file.path()).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.get("Data Scientist"), Some("first description"));
    }

    #[test]
    fn test_missing_resource_is_fatal() {
        let result = JobBoard::load(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(ScreenerError::CatalogLoad(_))));
    }
}
