use crate::config::defaults;
use crate::domain::model::{DownloadedImage, Upc};
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

pub trait Storage: Send + Sync {
    /// Makes sure the storage root exists before anything is written.
    fn prepare(&self) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn image_dir(&self) -> &str;
    fn report_path(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn search_timeout_secs(&self) -> u64;
    fn download_timeout_secs(&self) -> u64;

    /// Explicitly configured codes. Empty means the built-in list.
    fn upc_list(&self) -> &[String];

    fn upcs(&self) -> Result<Vec<Upc>> {
        let explicit = self.upc_list();
        if explicit.is_empty() {
            defaults::DEFAULT_UPCS.iter().map(|raw| Upc::parse(raw)).collect()
        } else {
            explicit.iter().map(|raw| Upc::parse(raw)).collect()
        }
    }
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Searches the catalog for `upc` and returns the image of the first matching product card.
    async fn find_image_url(&self, upc: &Upc) -> Result<Option<Url>>;
    async fn fetch_image(&self, url: &Url) -> Result<DownloadedImage>;
}
