pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{http::CatalogClient, storage::LocalStorage};
pub use crate::core::{engine::ScrapeEngine, matcher::ProductMatcher};
pub use crate::domain::model::{LookupOutcome, RunSummary, Upc};
pub use crate::utils::error::{Result, ScrapeError};
