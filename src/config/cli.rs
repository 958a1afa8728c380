use crate::config::toml_config::TomlConfig;
use crate::config::JobConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "bq-convert")]
#[command(about = "Convert BigQuery exports (JSON array or JSONL) into JSON array datasets")]
pub struct CliConfig {
    /// Path to a TOML job file; the built-in dashboard job is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that default and relative input/output directories resolve against
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Override the directory holding the raw export files
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Override the directory the datasets are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show what would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the job from the TOML file (or the dashboard default) and applies directory overrides.
    pub fn job_config(&self) -> Result<JobConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let toml_config = TomlConfig::from_file(path)?;
                toml_config.validate()?;
                toml_config.into_job_config(&self.project_root)
            }
            None => JobConfig::dashboard(&self.project_root),
        };

        if let Some(input_dir) = &self.input_dir {
            config.input_dir = input_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }

        Ok(config)
    }
}
