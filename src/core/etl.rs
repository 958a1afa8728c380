use crate::config::{FileMapping, JobConfig};
use crate::core::pipeline::ConversionPipeline;
use crate::domain::events::ConversionEvent;
use crate::domain::model::{PairOutcome, PairResult, RunSummary};
use crate::domain::ports::{Reporter, Storage};
use crate::utils::error::{ConvertError, Result};
use chrono::Utc;
use std::path::Path;

pub const MISSING_INPUT_REASON: &str = "file not found";

/// A pair as it would be processed, without touching any file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPair {
    pub mapping: FileMapping,
    pub input_present: bool,
    pub output_present: bool,
    pub required: bool,
}

/// Runs every configured pair in order, isolating per-pair failures.
pub struct JobRunner<S: Storage> {
    storage: S,
    config: JobConfig,
}

impl<S: Storage> JobRunner<S> {
    pub fn new(storage: S, config: JobConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn plan(&self) -> Vec<PlannedPair> {
        self.config
            .mappings
            .iter()
            .map(|mapping| PlannedPair {
                mapping: mapping.clone(),
                input_present: self.storage.input_exists(&mapping.input),
                output_present: self.storage.output_exists(&mapping.output),
                required: self.config.is_required(&mapping.output),
            })
            .collect()
    }

    /// Returns `Err` only for run-level failures (missing input directory, unwritable output
    /// directory). Missing required outputs are reported in the summary; see
    /// [`RunSummary::into_result`].
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let started_at = Utc::now();
        let execution_id = format!("run_{}", started_at.format("%Y%m%d_%H%M%S"));

        reporter.report(&ConversionEvent::RunStarted {
            execution_id: execution_id.clone(),
            input_dir: self.storage.input_root().to_path_buf(),
            output_dir: self.storage.output_root().to_path_buf(),
        });

        if !self.storage.input_root_exists() {
            return Err(ConvertError::InputDirMissing {
                path: self.storage.input_root().display().to_string(),
            });
        }

        if self.storage.ensure_output_root()? {
            reporter.report(&ConversionEvent::OutputDirCreated {
                path: self.storage.output_root().to_path_buf(),
            });
        }

        let pipeline = ConversionPipeline::new(&self.storage);
        let mut results = Vec::with_capacity(self.config.mappings.len());

        for mapping in &self.config.mappings {
            reporter.report(&ConversionEvent::PairStarted {
                input: mapping.input.clone(),
                output: mapping.output.clone(),
            });

            let outcome = if !self.storage.input_exists(&mapping.input) {
                PairOutcome::Skipped {
                    reason: MISSING_INPUT_REASON.to_string(),
                }
            } else {
                match pipeline.run(mapping, reporter) {
                    Ok(conversion) => PairOutcome::Converted {
                        format: conversion.format,
                        rows: conversion.rows,
                        output_path: conversion.output_path,
                    },
                    Err(e) => PairOutcome::Failed {
                        reason: e.to_string(),
                    },
                }
            };

            let result = PairResult {
                input: mapping.input.clone(),
                output: mapping.output.clone(),
                outcome,
            };
            reporter.report(&ConversionEvent::PairFinished(result.clone()));
            results.push(result);
        }

        // Checked against the disk, so outputs from earlier runs count too.
        let missing_required: Vec<String> = self
            .config
            .required_outputs
            .iter()
            .filter(|basename| !self.storage.output_exists(basename))
            .cloned()
            .collect();

        let summary = RunSummary {
            execution_id,
            started_at,
            finished_at: Utc::now(),
            results,
            missing_required,
        };
        reporter.report(&ConversionEvent::RunFinished(summary.clone()));

        Ok(summary)
    }
}

/// Writes the run summary as pretty JSON.
pub fn export_report(summary: &RunSummary, path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(summary)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)?;
    tracing::info!("📄 Run report written to {}", path.display());
    Ok(())
}
