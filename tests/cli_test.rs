use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DATASETS: [&str; 5] = [
    "kpi_summary",
    "severity_bucket_dist",
    "insurance_mix",
    "top_specialties",
    "amount_by_insurance_severity",
];

fn run_cli(project_root: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bq-convert"))
        .arg("--project-root")
        .arg(project_root)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn seed_inputs(project_root: &Path, names: &[&str]) {
    let input_dir = project_root.join("data_raw");
    fs::create_dir_all(&input_dir).unwrap();
    for name in names {
        fs::write(
            input_dir.join(format!("{}.json", name)),
            "{\"total_claims\":\"100\",\"avg_amount\":500}\n",
        )
        .unwrap();
    }
}

#[test]
fn test_exits_non_zero_without_input_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &[]);

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("public").exists());
}

#[test]
fn test_exits_zero_when_all_required_present() {
    let temp_dir = TempDir::new().unwrap();
    seed_inputs(temp_dir.path(), &DATASETS);

    let output = run_cli(temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fetch(\"/data/kpi_summary.json\")"));
    for name in DATASETS {
        assert!(temp_dir
            .path()
            .join("public")
            .join("data")
            .join(format!("{}.json", name))
            .is_file());
    }
}

#[test]
fn test_missing_required_dataset_fails_and_is_named() {
    let temp_dir = TempDir::new().unwrap();
    seed_inputs(temp_dir.path(), &DATASETS[..4]);

    let output = run_cli(temp_dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("amount_by_insurance_severity.json"));
}

#[test]
fn test_non_required_failure_still_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    seed_inputs(temp_dir.path(), &["kpi_summary"]);
    fs::write(temp_dir.path().join("data_raw").join("extra.json"), "{broken").unwrap();
    let config_path = temp_dir.path().join("job.toml");
    fs::write(
        &config_path,
        r#"
required_outputs = ["kpi_summary"]

[[datasets]]
input = "kpi_summary.json"
output = "kpi_summary"

[[datasets]]
input = "extra.json"
output = "extra"
"#,
    )
    .unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["--config", config_path.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(!temp_dir.path().join("public/data/extra.json").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    seed_inputs(temp_dir.path(), &DATASETS);

    let output = run_cli(temp_dir.path(), &["--dry-run"]);

    assert!(output.status.success());
    assert!(!temp_dir.path().join("public").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kpi_summary.json (found)"));
}

#[test]
fn test_report_flag_writes_summary() {
    let temp_dir = TempDir::new().unwrap();
    seed_inputs(temp_dir.path(), &DATASETS);
    let report = temp_dir.path().join("report.json");

    let output = run_cli(temp_dir.path(), &["--report", report.to_str().unwrap()]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 5);
}

#[test]
fn test_invalid_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    seed_inputs(temp_dir.path(), &DATASETS);
    let config_path = temp_dir.path().join("job.toml");
    fs::write(&config_path, "[[datasets]]\ninput = \"../x.json\"\noutput = \"x\"\n").unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["--config", config_path.to_str().unwrap()],
    );

    assert!(!output.status.success());
}
