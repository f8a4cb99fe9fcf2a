use crate::utils::error::{PasteboxError, Result};
use crate::utils::validation::{
    validate_delimiter, validate_non_empty_string, validate_one_of, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern should compile"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasteboxConfig {
    pub csv: Option<CsvConfig>,
    pub trace: Option<TraceConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsvConfig {
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraceConfig {
    pub separator: Option<String>,
    pub include_backtrace: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}

impl PasteboxConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PasteboxError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PasteboxError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CSV_DELIMITER})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(delimiter) = self.csv.as_ref().and_then(|csv| csv.delimiter.as_deref()) {
            validate_delimiter("csv.delimiter", delimiter)?;
        }

        if let Some(separator) = self.trace.as_ref().and_then(|t| t.separator.as_deref()) {
            validate_non_empty_string("trace.separator", separator)?;
        }

        if let Some(logging) = &self.logging {
            validate_one_of("logging.level", logging.level(), &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn csv(&self) -> CsvConfig {
        self.csv.clone().unwrap_or_default()
    }

    pub fn trace(&self) -> TraceConfig {
        self.trace.clone().unwrap_or_default()
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

impl Validate for PasteboxConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
