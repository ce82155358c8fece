//! Dataset provider trait and structured error types.
//!
//! The DatasetProvider trait abstracts over dataset sources (synthetic
//! generation, CSV import) so the presentation layer can swap sources and
//! tests can substitute fixtures.

use crate::domain::Dataset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error types for dataset operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {index} failed validation: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Where a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Synthetic,
    CsvImport,
}

/// Trait for dataset sources.
///
/// Implementations produce one complete dataset per `load` call. Providers
/// are pure with respect to the returned dataset: nothing mutates it after
/// construction.
pub trait DatasetProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Which source category this provider represents.
    fn source(&self) -> DataSource;

    /// Produce the dataset.
    fn load(&self) -> Result<Dataset, DataError>;
}
