use crate::core::format::AddressFormat;
use crate::domain::model::{HashStrategy, TimestampPolicy};
use crate::utils::error::{IdentError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// 地址縮寫時兩端最多保留的字元數
const MAX_ADDRESS_EDGE: usize = 64;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub timestamp: TimestampConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub address: AddressConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimestampConfig {
    #[serde(default)]
    pub policy: TimestampPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub strategy: HashStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressConfig {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IdentError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IdentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${IDENT_KIT_POLICY})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn timestamp_policy(&self) -> TimestampPolicy {
        self.timestamp.policy
    }

    pub fn hash_strategy(&self) -> HashStrategy {
        self.extraction.strategy
    }

    pub fn address_format(&self) -> AddressFormat {
        let defaults = AddressFormat::default();
        AddressFormat {
            start: self.address.start.unwrap_or(defaults.start),
            end: self.address.end.unwrap_or(defaults.end),
            placeholder: self
                .address
                .placeholder
                .clone()
                .unwrap_or(defaults.placeholder),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        if let Some(start) = self.address.start {
            validation::validate_range("address.start", start, 0, MAX_ADDRESS_EDGE)?;
        }
        if let Some(end) = self.address.end {
            validation::validate_range("address.end", end, 0, MAX_ADDRESS_EDGE)?;
        }
        if let Some(placeholder) = &self.address.placeholder {
            validation::validate_non_empty_string("address.placeholder", placeholder)?;
        }

        Ok(())
    }
}
