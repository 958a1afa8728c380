use crate::config::FileMapping;
use crate::core::{parse, writer};
use crate::domain::events::ConversionEvent;
use crate::domain::model::{Dataset, SourceFormat};
use crate::domain::ports::{Reporter, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// What a successful pair conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub format: SourceFormat,
    pub rows: Option<usize>,
    pub output_path: PathBuf,
}

/// Extract → transform → load for a single `input → output` pair.
pub struct ConversionPipeline<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> ConversionPipeline<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn extract(&self, mapping: &FileMapping) -> Result<String> {
        self.storage.read_input(&mapping.input)
    }

    pub fn transform(&self, content: &str) -> Result<(SourceFormat, Dataset)> {
        parse::parse_dataset(content)
    }

    pub fn load(&self, mapping: &FileMapping, dataset: &Dataset) -> Result<PathBuf> {
        let body = writer::render_dataset(dataset)?;
        self.storage.write_output(&mapping.output, body.as_bytes())
    }

    /// Nothing is written unless parsing succeeded.
    pub fn run(&self, mapping: &FileMapping, reporter: &mut dyn Reporter) -> Result<Conversion> {
        let content = self.extract(mapping)?;
        tracing::debug!("📥 Read {} bytes from {}", content.len(), mapping.input);

        let (format, dataset) = self.transform(&content)?;
        reporter.report(&ConversionEvent::FormatDetected {
            input: mapping.input.clone(),
            format,
        });
        tracing::debug!("🔄 Parsed {} as {}", mapping.input, format);

        let output_path = self.load(mapping, &dataset)?;
        tracing::debug!("💾 Wrote {}", output_path.display());

        Ok(Conversion {
            format,
            rows: dataset.row_count(),
            output_path,
        })
    }
}
