use crate::config::defaults;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_settings, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "upc-image-scraper")]
#[command(about = "Download catalog product images by UPC and report the codes that were not found")]
pub struct CliConfig {
    #[arg(long, default_value = defaults::DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = defaults::DEFAULT_IMAGE_DIR)]
    pub image_dir: String,

    #[arg(long, default_value = defaults::DEFAULT_REPORT_PATH)]
    pub report_path: String,

    /// Comma separated UPCs; the built-in list is used when omitted
    #[arg(long, value_delimiter = ',')]
    pub upcs: Vec<String>,

    #[arg(long, default_value = defaults::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Search request deadline in seconds
    #[arg(long, default_value_t = defaults::DEFAULT_SEARCH_TIMEOUT_SECS)]
    pub search_timeout: u64,

    /// Image download deadline in seconds
    #[arg(long, default_value_t = defaults::DEFAULT_DOWNLOAD_TIMEOUT_SECS)]
    pub download_timeout: u64,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the run summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Print the search URL for every UPC without fetching anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn image_dir(&self) -> &str {
        &self.image_dir
    }

    fn report_path(&self) -> &str {
        &self.report_path
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn search_timeout_secs(&self) -> u64 {
        self.search_timeout
    }

    fn download_timeout_secs(&self) -> u64 {
        self.download_timeout
    }

    fn upc_list(&self) -> &[String] {
        &self.upcs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
