pub mod engine;
pub mod matcher;
pub mod report;

pub use crate::domain::model::{LookupOutcome, RunSummary, Upc, UpcResult};
pub use crate::domain::ports::{ConfigProvider, ImageSource, Storage};
pub use crate::utils::error::Result;
