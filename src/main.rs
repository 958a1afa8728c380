use anyhow::Context;
use bq_convert::config::cli::LogFormat;
use bq_convert::core::etl::{export_report, PlannedPair};
use bq_convert::utils::{logger, validation::Validate};
use bq_convert::{CliConfig, ConvertError, JobRunner, LocalStorage, RunSummary, TracingReporter};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    match args.log_format {
        LogFormat::Pretty => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("Starting bq-convert");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = match args.job_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    for name in config.unconfigured_required() {
        tracing::warn!(
            "⚠️ Required dataset '{}' has no configured input; it must already exist in the output directory",
            name
        );
    }

    let storage = LocalStorage::new(config.input_dir.clone(), config.output_dir.clone());
    let runner = JobRunner::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        display_plan(&runner.plan());
        return Ok(());
    }

    let mut reporter = TracingReporter::new();
    let summary = match runner.run(&mut reporter) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    };

    if let Some(path) = &args.report {
        export_report(&summary, path)
            .with_context(|| format!("failed to write run report to {}", path.display()))?;
    }

    display_summary(&summary);

    match summary.into_result() {
        Ok(_) => {
            println!();
            println!("✅ All required datasets converted successfully!");
            println!();
            println!("You can now access these files from your frontend:");
            for name in &runner.config().required_outputs {
                println!("   fetch(\"/data/{}.json\")", name);
            }
            Ok(())
        }
        Err(e) => {
            if let ConvertError::MissingRequiredOutputs { missing } = &e {
                eprintln!();
                eprintln!("❌ ERROR: Missing required output files:");
                for name in missing {
                    eprintln!("   - {}.json", name);
                }
                eprintln!();
                eprintln!("💡 {}", e.recovery_suggestion());
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn fail(e: &ConvertError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}

fn display_summary(summary: &RunSummary) {
    println!();
    println!("{}", "=".repeat(60));
    println!("📊 CONVERSION SUMMARY");
    println!("{}", "=".repeat(60));
    println!("✓ Successful: {}", summary.succeeded());
    println!("✗ Failed:     {}", summary.failed());
}

fn display_plan(plan: &[PlannedPair]) {
    println!("📋 Conversion plan:");
    for pair in plan {
        let input = if pair.input_present { "found" } else { "missing" };
        let output = if pair.output_present { "exists" } else { "absent" };
        let required = if pair.required { " [required]" } else { "" };
        println!(
            "  {} ({}) → {}.json ({}){}",
            pair.mapping.input, input, pair.mapping.output, output, required
        );
    }
    println!();
    println!("✅ Dry run complete. Run without --dry-run to convert.");
}
