use crate::domain::events::ConversionEvent;
use crate::domain::model::{PairOutcome, SourceFormat};
use crate::domain::ports::Reporter;

/// Writes run progress to the tracing subscriber installed by the binary.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, event: &ConversionEvent) {
        match event {
            ConversionEvent::RunStarted {
                execution_id,
                input_dir,
                output_dir,
            } => {
                tracing::info!("🚀 BigQuery export → JSON array conversion ({})", execution_id);
                tracing::info!("Input directory:  {}", input_dir.display());
                tracing::info!("Output directory: {}", output_dir.display());
            }
            ConversionEvent::OutputDirCreated { path } => {
                tracing::info!("✓ Created output directory: {}", path.display());
            }
            ConversionEvent::PairStarted { input, output } => {
                tracing::info!("📝 Processing: {} → {}.json", input, output);
            }
            ConversionEvent::FormatDetected { format, .. } => match format {
                SourceFormat::JsonArray => tracing::info!("   ✓ Already JSON array format"),
                SourceFormat::JsonLines => {
                    tracing::info!("   ✓ Detected JSONL format, converting...")
                }
            },
            ConversionEvent::PairFinished(result) => match &result.outcome {
                PairOutcome::Converted {
                    rows: Some(rows),
                    output_path,
                    ..
                } => {
                    tracing::info!("   ✓ Written {} rows to {}", rows, output_path.display());
                }
                PairOutcome::Converted {
                    rows: None,
                    output_path,
                    ..
                } => {
                    tracing::warn!(
                        "   ⚠️ {} did not contain an array; wrote the document unchanged to {}",
                        result.input,
                        output_path.display()
                    );
                }
                PairOutcome::Failed { reason } => {
                    tracing::error!("   ✗ Error processing {}: {}", result.input, reason);
                }
                PairOutcome::Skipped { reason } => {
                    tracing::warn!("⚠️ Skipping: {} ({})", result.input, reason);
                }
            },
            ConversionEvent::RunFinished(summary) => {
                tracing::info!(
                    "📊 Conversion summary: {} succeeded, {} failed ({} skipped), {} rows written",
                    summary.succeeded(),
                    summary.failed(),
                    summary.skipped(),
                    summary.total_rows()
                );
                for name in &summary.missing_required {
                    tracing::error!("❌ Missing required output: {}.json", name);
                }
            }
        }
    }
}

/// Keeps every event in memory; useful for tests and for callers that render their own report.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Vec<ConversionEvent>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ConversionEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ConversionEvent> {
        self.events
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, event: &ConversionEvent) {
        self.events.push(event.clone());
    }
}
