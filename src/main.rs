//! Resume screener: semantic resume screening against job descriptions

mod catalog;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use catalog::{JobBoard, SkillCatalog};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ScreenerError};
use input::DocumentReader;
use log::{error, info};
use output::{ConsoleFormatter, ReportFormatter};
use processing::{EmbeddingEngine, ScreeningEngine};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resume,
            role,
            report,
            detailed,
        } => screen(resume, role, report, detailed, config).await,

        Commands::Roles => {
            let jobs = JobBoard::load(&config.resources.jobs_path)?;
            println!("Available job roles:");
            for role in jobs.roles() {
                println!("  {}", role);
            }
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}

async fn screen(
    resume: PathBuf,
    role: String,
    report: Option<PathBuf>,
    detailed: bool,
    config: Config,
) -> Result<()> {
    cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
        .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

    // Both tabular resources are required; failing to load either is
    // fatal and surfaces before any extraction work.
    let jobs = JobBoard::load(&config.resources.jobs_path)?;
    let catalog = SkillCatalog::load(
        &config.resources.skills_path,
        config.resources.categories_path.as_deref(),
    )?;

    let job_desc = jobs.get(&role).ok_or_else(|| {
        ScreenerError::InvalidInput(format!(
            "Unknown job role '{}'. Available: {}",
            role,
            jobs.roles().join(", ")
        ))
    })?;

    info!("Extracting resume text from {}", resume.display());
    let mut reader = DocumentReader::new();
    let resume_text = reader.read(&resume).await?;

    let formatter = ConsoleFormatter::new(&config);
    if detailed {
        formatter.print_preview(&resume_text);
    }

    let embedder = EmbeddingEngine::load(&config)?;
    let engine = ScreeningEngine::new(&catalog, &embedder)?;
    let result = engine.screen(&role, &resume_text, job_desc)?;

    formatter.print_summary(&result, &catalog);

    if let Some(path) = report {
        let rendered =
            ReportFormatter::new(config.model.model_label.clone()).render(&result, Local::now());
        std::fs::write(&path, rendered)?;
        println!("\nReport saved to {}", path.display());
    }

    Ok(())
}
