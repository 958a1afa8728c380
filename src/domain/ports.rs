use crate::domain::events::ConversionEvent;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where raw exports are read from and converted datasets are written to.
pub trait Storage: Send + Sync {
    fn input_root(&self) -> &Path;
    fn output_root(&self) -> &Path;

    fn input_root_exists(&self) -> bool;

    /// Creates the output root and any missing parents. Returns `true` if it had to be created.
    fn ensure_output_root(&self) -> Result<bool>;

    fn input_exists(&self, name: &str) -> bool;
    fn read_input(&self, name: &str) -> Result<String>;

    /// `true` if `<basename>.json` is present in the output root.
    fn output_exists(&self, basename: &str) -> bool;

    /// Replaces `<basename>.json` in the output root and returns its path.
    fn write_output(&self, basename: &str, data: &[u8]) -> Result<PathBuf>;
}

/// Observer for run progress.
pub trait Reporter {
    fn report(&mut self, event: &ConversionEvent);
}
