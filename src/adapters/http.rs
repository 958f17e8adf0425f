use crate::core::matcher::{with_trailing_slash, ProductMatcher};
use crate::domain::model::{DownloadedImage, Upc};
use crate::domain::ports::{ConfigProvider, ImageSource};
use crate::utils::error::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const SEARCH_PATH: &str = "index.php";
const SEARCH_PARAM: &str = "buscar";

/// Talks to the catalog site: one search page per UPC, one GET per image.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    matcher: ProductMatcher,
    search_timeout: Duration,
    download_timeout: Duration,
}

impl CatalogClient {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        search_timeout: Duration,
        download_timeout: Duration,
    ) -> Result<Self> {
        let base_url = with_trailing_slash(&Url::parse(base_url)?);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            matcher: ProductMatcher::new(&base_url)?,
            base_url,
            search_timeout,
            download_timeout,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.user_agent(),
            Duration::from_secs(config.search_timeout_secs()),
            Duration::from_secs(config.download_timeout_secs()),
        )
    }

    /// `{base_url}/index.php?buscar={upc}`
    pub fn search_url(&self, upc: &Upc) -> Result<Url> {
        let mut url = self.base_url.join(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair(SEARCH_PARAM, upc.as_str());
        Ok(url)
    }

    /// One `"{upc} -> {search url}"` line per code, in input order. Nothing is sent.
    pub fn search_plan(&self, upcs: &[Upc]) -> Result<Vec<String>> {
        upcs.iter()
            .map(|upc| Ok(format!("{} -> {}", upc, self.search_url(upc)?)))
            .collect()
    }
}

#[async_trait::async_trait]
impl ImageSource for CatalogClient {
    async fn find_image_url(&self, upc: &Upc) -> Result<Option<Url>> {
        let url = self.search_url(upc)?;
        tracing::debug!("Searching catalog: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html")
            .timeout(self.search_timeout)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Search response status: {}", response.status());
        let html = response.text().await?;

        Ok(self.matcher.find_image_url(&html, upc.as_str()))
    }

    async fn fetch_image(&self, url: &Url) -> Result<DownloadedImage> {
        tracing::debug!("Downloading image: {}", url);

        let response = self
            .client
            .get(url.clone())
            .timeout(self.download_timeout)
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();

        tracing::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(DownloadedImage {
            bytes,
            content_type,
            source_url: url.to_string(),
        })
    }
}
