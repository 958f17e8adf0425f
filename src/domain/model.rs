use crate::utils::error::{Result, ScrapeError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A product barcode, used both as the search key and as the image file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Upc(String);

impl Upc {
    pub const MIN_DIGITS: usize = 8;
    pub const MAX_DIGITS: usize = 14;

    pub fn parse(raw: &str) -> Result<Self> {
        let code = raw.trim();
        let invalid = |reason: String| ScrapeError::InvalidConfigValueError {
            field: "upcs".to_string(),
            value: raw.to_string(),
            reason,
        };

        if !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("UPC must contain only digits".to_string()));
        }
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&code.len()) {
            return Err(invalid(format!(
                "UPC must have between {} and {} digits",
                Self::MIN_DIGITS,
                Self::MAX_DIGITS
            )));
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Upc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct DownloadedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub source_url: String,
}

impl DownloadedImage {
    const DEFAULT_EXTENSION: &'static str = "jpg";

    /// File extension for the saved image. The response `Content-Type` wins,
    /// then the URL path, then `jpg`.
    pub fn extension(&self) -> &'static str {
        if let Some(ext) = self.content_type.as_deref().and_then(extension_for_mime) {
            return ext;
        }

        let path = self
            .source_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        path.rsplit_once('.')
            .and_then(|(_, ext)| extension_for_suffix(ext))
            .unwrap_or(Self::DEFAULT_EXTENSION)
    }
}

fn extension_for_mime(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match mime.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

fn extension_for_suffix(suffix: &str) -> Option<&'static str> {
    match suffix.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("jpg"),
        "png" => Some("png"),
        "webp" => Some("webp"),
        "gif" => Some("gif"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    Downloaded {
        image_url: String,
        file_name: String,
        bytes: usize,
    },
    NotFound,
    Failed {
        reason: String,
    },
}

impl LookupOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, LookupOutcome::Downloaded { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcResult {
    pub upc: Upc,
    #[serde(flatten)]
    pub outcome: LookupOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub results: Vec<UpcResult>,
    pub report_path: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn found(&self) -> Vec<&Upc> {
        self.results
            .iter()
            .filter(|r| r.outcome.is_downloaded())
            .map(|r| &r.upc)
            .collect()
    }

    /// Codes with no match or with an error, in input order.
    pub fn not_found(&self) -> Vec<&Upc> {
        self.results
            .iter()
            .filter(|r| !r.outcome.is_downloaded())
            .map(|r| &r.upc)
            .collect()
    }

    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, LookupOutcome::Failed { .. }))
            .count()
    }
}
