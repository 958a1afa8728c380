use crate::domain::model::{PairResult, RunSummary, SourceFormat};
use std::path::PathBuf;

/// Progress notifications emitted by the job runner, in the order they happen.
#[derive(Debug, Clone)]
pub enum ConversionEvent {
    RunStarted {
        execution_id: String,
        input_dir: PathBuf,
        output_dir: PathBuf,
    },
    OutputDirCreated {
        path: PathBuf,
    },
    PairStarted {
        input: String,
        output: String,
    },
    FormatDetected {
        input: String,
        format: SourceFormat,
    },
    PairFinished(PairResult),
    RunFinished(RunSummary),
}
