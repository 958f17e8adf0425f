use crate::config::defaults;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{validate_settings, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based settings. Every section and key is optional and falls back to
/// the built-in job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub user_agent: String,
    pub search_timeout_seconds: u64,
    pub download_timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            search_timeout_seconds: defaults::DEFAULT_SEARCH_TIMEOUT_SECS,
            download_timeout_seconds: defaults::DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub upcs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub image_dir: String,
    pub report_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_dir: defaults::DEFAULT_IMAGE_DIR.to_string(),
            report_file: defaults::DEFAULT_REPORT_PATH.to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ScrapeError::ConfigError {
            message: format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScrapeError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn image_dir(&self) -> &str {
        &self.output.image_dir
    }

    fn report_path(&self) -> &str {
        &self.output.report_file
    }

    fn user_agent(&self) -> &str {
        &self.source.user_agent
    }

    fn search_timeout_secs(&self) -> u64 {
        self.source.search_timeout_seconds
    }

    fn download_timeout_secs(&self) -> u64 {
        self.source.download_timeout_seconds
    }

    fn upc_list(&self) -> &[String] {
        &self.input.upcs
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
