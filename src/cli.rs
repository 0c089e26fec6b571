//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Semantic resume screening against job descriptions")]
#[command(
    long_about = "Score a resume against a job role using sentence embeddings and keyword-based skill coverage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a resume against a job role
    Screen {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job role to screen against (see `roles`)
        #[arg(short = 'j', long)]
        role: String,

        /// Write the plain-text report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print a preview of the extracted resume text
        #[arg(short, long)]
        detailed: bool,
    },

    /// List job roles available in the job-description table
    Roles,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.pdf");
        assert!(validate_file_extension(&path, &["pdf", "docx", "txt"]).is_ok());

        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf"]).is_ok());

        let path = PathBuf::from("resume.xyz");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_err());

        let path = PathBuf::from("resume");
        assert!(validate_file_extension(&path, &["pdf"]).is_err());
    }
}
