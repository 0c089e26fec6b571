//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub resources: ResourceConfig,
    pub model: ModelConfig,
    pub output: OutputConfig,
}

/// Paths of the two tabular resources the screener cannot run without,
/// plus an optional category-table override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub jobs_path: PathBuf,
    pub skills_path: PathBuf,
    pub categories_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    /// Model2Vec repo id, or the name of a folder under `models_dir`.
    pub embedding_model: String,
    /// Printed verbatim in the report's "Model Used:" line.
    pub model_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub color: bool,
    pub show_tips: bool,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-screener")
            .join("models");

        Self {
            resources: ResourceConfig {
                jobs_path: PathBuf::from("data/job_descriptions.csv"),
                skills_path: PathBuf::from("data/skills.csv"),
                categories_path: None,
            },
            model: ModelConfig {
                models_dir,
                embedding_model: "minishlab/M2V_base_output".to_string(),
                model_label: "Model2Vec (M2V_base_output)".to_string(),
            },
            output: OutputConfig {
                color: true,
                show_tips: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ScreenerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    /// Resolve the embedding model to a local folder if one exists under
    /// `models_dir`, otherwise hand the raw id through so the loader can
    /// fetch it from the HuggingFace Hub.
    pub fn resolve_model(&self) -> PathBuf {
        let local = self.model.models_dir.join(&self.model.embedding_model);
        if local.exists() {
            local
        } else {
            PathBuf::from(&self.model.embedding_model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_paths() {
        let config = Config::default();
        assert_eq!(
            config.resources.jobs_path,
            PathBuf::from("data/job_descriptions.csv")
        );
        assert_eq!(
            config.resources.skills_path,
            PathBuf::from("data/skills.csv")
        );
        assert!(config.resources.categories_path.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.model.embedding_model, config.model.embedding_model);
        assert_eq!(parsed.output.color, config.output.color);
    }

    #[test]
    fn test_resolve_model_falls_back_to_repo_id() {
        let mut config = Config::default();
        config.model.models_dir = PathBuf::from("/nonexistent/models");
        assert_eq!(
            config.resolve_model(),
            PathBuf::from("minishlab/M2V_base_output")
        );
    }
}
