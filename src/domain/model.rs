use crate::utils::error::{ConvertError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One exported row. No schema is imposed; whatever BigQuery wrote is carried through.
pub type Record = serde_json::Value;

/// How an input file was laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// A single JSON document starting with `[`.
    JsonArray,
    /// One JSON value per line.
    JsonLines,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::JsonArray => write!(f, "JSON array"),
            SourceFormat::JsonLines => write!(f, "JSONL"),
        }
    }
}

/// The parsed content of one input file.
///
/// JSONL input always yields an array. Array-mode input yields whatever the document parsed
/// to, which is an array in every well-formed export but is not checked to be one.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    document: serde_json::Value,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            document: serde_json::Value::Array(records),
        }
    }

    pub fn from_document(document: serde_json::Value) -> Self {
        Self { document }
    }

    /// Number of top-level elements, or `None` when the document is not an array.
    pub fn row_count(&self) -> Option<usize> {
        self.document.as_array().map(Vec::len)
    }

    pub fn is_array(&self) -> bool {
        self.document.is_array()
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.document
    }

    pub fn into_value(self) -> serde_json::Value {
        self.document
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairOutcome {
    Converted {
        format: SourceFormat,
        rows: Option<usize>,
        output_path: PathBuf,
    },
    Failed {
        reason: String,
    },
    Skipped {
        reason: String,
    },
}

impl PairOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PairOutcome::Converted { .. })
    }
}

/// Outcome of one configured `input → output` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub input: String,
    pub output: String,
    #[serde(flatten)]
    pub outcome: PairOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub execution_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<PairResult>,
    pub missing_required: Vec<String>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Failed and skipped pairs together, matching the tally printed at the end of a run.
    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PairOutcome::Skipped { .. }))
            .count()
    }

    pub fn total_rows(&self) -> usize {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                PairOutcome::Converted { rows, .. } => *rows,
                _ => None,
            })
            .sum()
    }

    pub fn result_for(&self, output: &str) -> Option<&PairResult> {
        self.results.iter().find(|r| r.output == output)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }

    /// Turns a run with missing required outputs into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(ConvertError::MissingRequiredOutputs {
                missing: self.missing_required,
            })
        }
    }
}
