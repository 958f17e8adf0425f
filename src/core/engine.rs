use crate::core::report;
use crate::domain::model::{LookupOutcome, RunSummary, Upc, UpcResult};
use crate::domain::ports::{ImageSource, Storage};
use crate::utils::error::Result;
use chrono::Utc;
use std::path::PathBuf;

/// Runs the lookup for every UPC, one at a time, and writes the not-found report.
pub struct ScrapeEngine<Src: ImageSource, S: Storage> {
    source: Src,
    storage: S,
    report_path: PathBuf,
}

impl<Src: ImageSource, S: Storage> ScrapeEngine<Src, S> {
    pub fn new(source: Src, storage: S, report_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            storage,
            report_path: report_path.into(),
        }
    }

    pub async fn run(&self, upcs: &[Upc]) -> Result<RunSummary> {
        let started_at = Utc::now();
        self.storage.prepare().await?;

        tracing::info!("Processing {} UPCs", upcs.len());

        let mut results = Vec::with_capacity(upcs.len());
        for upc in upcs {
            tracing::info!("🔎 Searching UPC {}...", upc);

            let outcome = match self.process(upc).await {
                Ok(Some(outcome)) => {
                    if let LookupOutcome::Downloaded { file_name, .. } = &outcome {
                        tracing::info!("✅ Downloaded: {}", file_name);
                    }
                    outcome
                }
                Ok(None) => {
                    tracing::warn!("❌ Not found: {}", upc);
                    LookupOutcome::NotFound
                }
                Err(e) => {
                    tracing::warn!("⚠️ Error with {}: {}", upc, e);
                    LookupOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            results.push(UpcResult {
                upc: upc.clone(),
                outcome,
            });
        }

        let summary = RunSummary {
            results,
            report_path: self.report_path.display().to_string(),
            started_at,
            finished_at: Utc::now(),
        };

        report::write_report(&self.report_path, &summary.not_found()).await?;

        tracing::info!(
            "📊 Images downloaded: {}, UPCs not found: {} ({} errors), report: {}",
            summary.found().len(),
            summary.not_found().len(),
            summary.failed_count(),
            summary.report_path
        );

        Ok(summary)
    }

    /// `Ok(None)` when no product card matches.
    async fn process(&self, upc: &Upc) -> Result<Option<LookupOutcome>> {
        let Some(image_url) = self.source.find_image_url(upc).await? else {
            return Ok(None);
        };
        tracing::debug!("Image for {} at {}", upc, image_url);

        let image = self.source.fetch_image(&image_url).await?;
        let file_name = format!("{}.{}", upc, image.extension());
        self.storage.write_file(&file_name, &image.bytes).await?;

        Ok(Some(LookupOutcome::Downloaded {
            image_url: image_url.to_string(),
            file_name,
            bytes: image.bytes.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DownloadedImage;
    use crate::utils::error::ScrapeError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::Mutex;
    use url::Url;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        fail_prepare: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                fail_prepare: false,
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn prepare(&self) -> Result<()> {
            if self.fail_prepare {
                return Err(ScrapeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "cannot create image directory",
                )));
            }
            Ok(())
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    enum Entry {
        Image(&'static str, Vec<u8>),
        Missing,
        SearchError,
        DownloadError(&'static str),
    }

    struct MockSource {
        catalog: HashMap<String, Entry>,
        searches: Arc<Mutex<Vec<String>>>,
    }

    impl MockSource {
        fn new(entries: Vec<(&str, Entry)>) -> Self {
            Self {
                catalog: entries
                    .into_iter()
                    .map(|(upc, entry)| (upc.to_string(), entry))
                    .collect(),
                searches: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    fn config_error(message: &str) -> ScrapeError {
        ScrapeError::ConfigError {
            message: message.to_string(),
        }
    }

    #[async_trait::async_trait]
    impl ImageSource for MockSource {
        async fn find_image_url(&self, upc: &Upc) -> Result<Option<Url>> {
            self.searches.lock().await.push(upc.to_string());
            match self.catalog.get(upc.as_str()) {
                Some(Entry::Image(url, _)) | Some(Entry::DownloadError(url)) => {
                    Ok(Some(Url::parse(url)?))
                }
                Some(Entry::SearchError) => Err(config_error("search failed")),
                Some(Entry::Missing) | None => Ok(None),
            }
        }

        async fn fetch_image(&self, url: &Url) -> Result<DownloadedImage> {
            let bytes = self.catalog.values().find_map(|entry| match entry {
                Entry::Image(u, bytes) if *u == url.as_str() => Some(bytes.clone()),
                _ => None,
            });
            bytes
                .map(|bytes| DownloadedImage {
                    bytes,
                    content_type: Some("image/jpeg".to_string()),
                    source_url: url.to_string(),
                })
                .ok_or_else(|| config_error("download failed"))
        }
    }

    fn upcs(codes: &[&str]) -> Vec<Upc> {
        codes.iter().map(|c| Upc::parse(c).unwrap()).collect()
    }

    #[tokio::test]
    async fn test_run_mixed_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("missing.txt");

        let source = MockSource::new(vec![
            ("11111111", Entry::Missing),
            ("22222222", Entry::Image("https://x.com/22.jpg", vec![1, 2, 3])),
            ("33333333", Entry::SearchError),
            ("44444444", Entry::DownloadError("https://x.com/44.jpg")),
            ("55555555", Entry::Image("https://x.com/55.jpg", vec![9])),
        ]);
        let searches = source.searches.clone();
        let storage = MockStorage::new();
        let engine = ScrapeEngine::new(source, storage.clone(), &report_path);

        let input = upcs(&["11111111", "22222222", "33333333", "44444444", "55555555"]);
        let summary = engine.run(&input).await.unwrap();

        assert_eq!(searches.lock().await.len(), 5);
        assert_eq!(summary.results.len(), 5);
        assert_eq!(summary.found().len(), 2);
        assert_eq!(summary.failed_count(), 2);
        assert_eq!(summary.results[0].outcome, LookupOutcome::NotFound);
        assert_eq!(
            summary.results[1].outcome,
            LookupOutcome::Downloaded {
                image_url: "https://x.com/22.jpg".to_string(),
                file_name: "22222222.jpg".to_string(),
                bytes: 3,
            }
        );

        assert_eq!(storage.get_file("22222222.jpg").await.unwrap(), vec![1, 2, 3]);
        assert_eq!(storage.get_file("55555555.jpg").await.unwrap(), vec![9]);
        assert!(storage.get_file("44444444.jpg").await.is_none());

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert_eq!(report, "11111111\n33333333\n44444444\n");
    }

    #[tokio::test]
    async fn test_run_all_found_writes_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("missing.txt");

        let source = MockSource::new(vec![(
            "75026967",
            Entry::Image("https://x.com/a.jpg", vec![0xFF]),
        )]);
        let engine = ScrapeEngine::new(source, MockStorage::new(), &report_path);

        let summary = engine.run(&upcs(&["75026967"])).await.unwrap();

        assert!(summary.not_found().is_empty());
        assert_eq!(std::fs::read_to_string(&report_path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_storage_prepare_failure_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("missing.txt");

        let source = MockSource::new(vec![]);
        let searches = source.searches.clone();
        let mut storage = MockStorage::new();
        storage.fail_prepare = true;
        let engine = ScrapeEngine::new(source, storage, &report_path);

        let result = engine.run(&upcs(&["75026967"])).await;

        assert!(matches!(result, Err(ScrapeError::IoError(_))));
        assert!(searches.lock().await.is_empty());
        assert!(!report_path.exists());
    }
}
