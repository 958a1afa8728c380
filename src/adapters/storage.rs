use crate::core::writer::output_file_name;
use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    fn output_path(&self, basename: &str) -> PathBuf {
        self.output_dir.join(output_file_name(basename))
    }
}

impl Storage for LocalStorage {
    fn input_root(&self) -> &Path {
        &self.input_dir
    }

    fn output_root(&self) -> &Path {
        &self.output_dir
    }

    fn input_root_exists(&self) -> bool {
        self.input_dir.is_dir()
    }

    fn ensure_output_root(&self) -> Result<bool> {
        if self.output_dir.is_dir() {
            return Ok(false);
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| ConvertError::OutputDirError {
            path: self.output_dir.display().to_string(),
            source,
        })?;
        Ok(true)
    }

    fn input_exists(&self, name: &str) -> bool {
        self.input_dir.join(name).is_file()
    }

    fn read_input(&self, name: &str) -> Result<String> {
        let content = fs::read_to_string(self.input_dir.join(name))?;
        Ok(content)
    }

    fn output_exists(&self, basename: &str) -> bool {
        self.output_path(basename).is_file()
    }

    fn write_output(&self, basename: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.output_path(basename);
        fs::write(&full_path, data)?;
        Ok(full_path)
    }
}
