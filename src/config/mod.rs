#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "data_raw";
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";

/// Datasets the dashboard fetches; each is exported under its own name.
pub const DASHBOARD_DATASETS: [&str; 5] = [
    "kpi_summary",
    "severity_bucket_dist",
    "insurance_mix",
    "top_specialties",
    "amount_by_insurance_severity",
];

/// One raw export file and the dataset basename it becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMapping {
    pub input: String,
    pub output: String,
}

impl FileMapping {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Processed in this order.
    pub mappings: Vec<FileMapping>,
    pub required_outputs: Vec<String>,
}

impl JobConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            mappings: Vec::new(),
            required_outputs: Vec::new(),
        }
    }

    /// The job the dashboard ships with: every dataset maps from `<name>.json` and is required.
    pub fn dashboard(project_root: &Path) -> Self {
        DASHBOARD_DATASETS.iter().fold(
            Self::new(
                project_root.join(DEFAULT_INPUT_DIR),
                project_root.join(DEFAULT_OUTPUT_DIR),
            ),
            |config, name| {
                config
                    .with_mapping(format!("{}.json", name), *name)
                    .with_required(*name)
            },
        )
    }

    pub fn with_mapping(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.mappings.push(FileMapping::new(input, output));
        self
    }

    pub fn with_required(mut self, basename: impl Into<String>) -> Self {
        self.required_outputs.push(basename.into());
        self
    }

    pub fn is_required(&self, basename: &str) -> bool {
        self.required_outputs.iter().any(|name| name == basename)
    }

    /// Required basenames that no mapping produces. These can only be satisfied by files
    /// already present in the output directory.
    pub fn unconfigured_required(&self) -> Vec<&str> {
        self.required_outputs
            .iter()
            .filter(|name| !self.mappings.iter().any(|m| &m.output == *name))
            .map(String::as_str)
            .collect()
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_dir", &self.input_dir.to_string_lossy())?;
        validation::validate_path("output_dir", &self.output_dir.to_string_lossy())?;

        for mapping in &self.mappings {
            validation::validate_file_name("datasets.input", &mapping.input)?;
            validation::validate_file_name("datasets.output", &mapping.output)?;
        }
        validation::validate_unique(
            "datasets.output",
            self.mappings.iter().map(|m| m.output.as_str()),
        )?;

        for name in &self.required_outputs {
            validation::validate_file_name("required_outputs", name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_job() {
        let config = JobConfig::dashboard(Path::new("/srv/dashboard"));

        assert_eq!(config.input_dir, PathBuf::from("/srv/dashboard/data_raw"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/dashboard/public/data"));
        assert_eq!(config.mappings.len(), 5);
        assert_eq!(
            config.mappings[0],
            FileMapping::new("kpi_summary.json", "kpi_summary")
        );
        assert_eq!(
            config.mappings[4],
            FileMapping::new(
                "amount_by_insurance_severity.json",
                "amount_by_insurance_severity"
            )
        );
        assert_eq!(config.required_outputs, DASHBOARD_DATASETS.to_vec());
        assert!(config.unconfigured_required().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unconfigured_required() {
        let config = JobConfig::new("in", "out")
            .with_mapping("bquxjob_1.json", "kpi_summary")
            .with_required("kpi_summary")
            .with_required("insurance_mix");

        assert_eq!(config.unconfigured_required(), vec!["insurance_mix"]);
        assert!(config.is_required("kpi_summary"));
        assert!(!config.is_required("top_specialties"));
        // Still a valid job; the run reports the gap.
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_output_rejected() {
        let config = JobConfig::new("in", "out")
            .with_mapping("a.json", "kpi_summary")
            .with_mapping("b.json", "kpi_summary");

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_path_like_names_rejected() {
        let config = JobConfig::new("in", "out").with_mapping("../secrets.json", "kpi_summary");
        assert!(config.validate().is_err());

        let config = JobConfig::new("in", "out").with_required("");
        assert!(config.validate().is_err());

        let config = JobConfig::new("", "out");
        assert!(config.validate().is_err());
    }
}
