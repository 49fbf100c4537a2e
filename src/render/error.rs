use polars::prelude::PolarsError;
use thiserror::Error;

/// A failure while turning the forecast into charts or tables.
///
/// Only ever replaces the forecast section of the page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to build forecast frame: {0}")]
    Frame(#[from] PolarsError),

    #[error("Failed to build chart: {0}")]
    Chart(String),
}
