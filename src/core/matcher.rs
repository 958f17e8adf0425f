//! Locates a product card for a UPC in a catalog search results page.
//!
//! A results page lists products as `.contproducto` cards. Each card carries
//! its code in a `label.clave` and a product picture in an `<img>`; the image
//! `src` is usually relative to the site root.

use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

const CARD_SELECTOR: &str = ".contproducto";
const CODE_SELECTOR: &str = "label.clave";
const IMAGE_SELECTOR: &str = "img";

pub struct ProductMatcher {
    base_url: Url,
    card: Selector,
    code: Selector,
    image: Selector,
}

impl ProductMatcher {
    pub fn new(base_url: &Url) -> Result<Self> {
        Ok(Self {
            base_url: with_trailing_slash(base_url),
            card: compile(CARD_SELECTOR)?,
            code: compile(CODE_SELECTOR)?,
            image: compile(IMAGE_SELECTOR)?,
        })
    }

    /// Returns the absolute image URL of the first card whose code label
    /// contains `upc`, skipping cards that have no usable image.
    pub fn find_image_url(&self, html: &str, upc: &str) -> Option<Url> {
        let document = Html::parse_document(html);

        document
            .select(&self.card)
            .filter(|card| self.card_matches(card, upc))
            .find_map(|card| self.card_image(&card))
    }

    fn card_matches(&self, card: &ElementRef<'_>, upc: &str) -> bool {
        card.select(&self.code)
            .next()
            .map(|label| normalize_whitespace(&label.text().collect::<String>()).contains(upc))
            .unwrap_or(false)
    }

    fn card_image(&self, card: &ElementRef<'_>) -> Option<Url> {
        let src = card.select(&self.image).next()?.value().attr("src")?.trim();
        if src.is_empty() {
            return None;
        }

        match self.base_url.join(src) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Ignoring unresolvable image src '{}': {}", src, e);
                None
            }
        }
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Relative references resolve below the base path only when it ends in `/`.
pub(crate) fn with_trailing_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        return url.clone();
    }
    let mut url = url.clone();
    let path = format!("{}/", url.path());
    url.set_path(&path);
    url
}
