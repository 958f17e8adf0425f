use crate::domain::model::Upc;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScrapeError};
use url::Url;

const TIMEOUT_SECS: std::ops::RangeInclusive<u64> = 1..=600;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> ScrapeError {
    ScrapeError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The catalog root must be an absolute http(s) URL.
fn check_base_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| invalid("base_url", raw, format!("not a URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid("base_url", raw, "catalog URL must be http(s) with a host"));
    }
    Ok(())
}

fn check_output_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() || path.contains('\0') {
        return Err(invalid(field, path, "output path must be a non-empty file system path"));
    }
    Ok(())
}

fn check_timeout(field: &str, secs: u64) -> Result<()> {
    if !TIMEOUT_SECS.contains(&secs) {
        return Err(invalid(
            field,
            secs,
            format!("timeout must be {} to {} seconds", TIMEOUT_SECS.start(), TIMEOUT_SECS.end()),
        ));
    }
    Ok(())
}

/// Checks every setting a run depends on, whatever the configuration source.
pub fn validate_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    check_base_url(config.base_url())?;
    check_output_path("image_dir", config.image_dir())?;
    check_output_path("report_path", config.report_path())?;
    if config.user_agent().trim().is_empty() {
        return Err(invalid(
            "user_agent",
            config.user_agent(),
            "the catalog rejects requests without a User-Agent",
        ));
    }
    check_timeout("search_timeout", config.search_timeout_secs())?;
    check_timeout("download_timeout", config.download_timeout_secs())?;

    for raw in config.upc_list() {
        Upc::parse(raw)?;
    }

    Ok(())
}
