pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{
    reporter::{CollectingReporter, TracingReporter},
    storage::LocalStorage,
};
pub use config::{FileMapping, JobConfig};
pub use crate::core::etl::JobRunner;
pub use domain::model::{Dataset, PairOutcome, PairResult, Record, RunSummary, SourceFormat};
pub use utils::error::{ConvertError, Result};
