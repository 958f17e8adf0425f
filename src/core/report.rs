use crate::domain::model::{RunSummary, Upc};
use crate::utils::error::Result;
use std::path::Path;

/// One UPC per line, in the order given.
pub fn render(upcs: &[&Upc]) -> String {
    upcs.iter().map(|upc| format!("{}\n", upc)).collect()
}

/// Writes the not-found report. The file is created even when `upcs` is empty.
pub async fn write_report(path: &Path, upcs: &[&Upc]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, render(upcs)).await?;
    tracing::debug!("Report with {} entries written to {}", upcs.len(), path.display());
    Ok(())
}

/// Writes the per-UPC results as pretty JSON. The parent directory must exist.
pub async fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_vec_pretty(summary)?;
    tokio::fs::write(path, json).await?;
    tracing::debug!("Summary with {} results written to {}", summary.results.len(), path.display());
    Ok(())
}
