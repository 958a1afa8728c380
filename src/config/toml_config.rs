use crate::config::{JobConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A job definition read from a TOML file.
///
/// ```toml
/// required_outputs = ["kpi_summary"]
///
/// [paths]
/// input_dir = "data_raw"
/// output_dir = "public/data"
///
/// [[datasets]]
/// input = "bquxjob_12345678_abc.json"
/// output = "kpi_summary"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Defaults to every configured dataset output.
    pub required_outputs: Option<Vec<String>>,
    pub paths: Option<PathsConfig>,
    #[serde(default)]
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub input: String,
    pub output: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXPORT_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_dir(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.input_dir.as_deref())
            .unwrap_or(DEFAULT_INPUT_DIR)
    }

    pub fn output_dir(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.output_dir.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    /// Relative directories resolve against `project_root`.
    pub fn into_job_config(self, project_root: &Path) -> JobConfig {
        let mut config = JobConfig::new(
            project_root.join(self.input_dir()),
            project_root.join(self.output_dir()),
        );

        config.required_outputs = match self.required_outputs {
            Some(required) => required,
            None => self.datasets.iter().map(|d| d.output.clone()).collect(),
        };
        config.mappings = self
            .datasets
            .into_iter()
            .map(|d| crate::config::FileMapping::new(d.input, d.output))
            .collect();

        config
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.datasets.is_empty() && self.required_outputs.is_none() {
            return Err(ConvertError::ConfigValidationError {
                field: "datasets".to_string(),
                message: "At least one [[datasets]] entry or a required_outputs list is needed"
                    .to_string(),
            });
        }
        self.clone().into_job_config(Path::new(".")).validate()
    }
}
