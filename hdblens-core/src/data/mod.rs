//! Dataset sources and caching

pub mod cache;
pub mod csv;
pub mod provider;
pub mod synthetic;

pub use cache::{DatasetCache, DatasetKey};
pub use csv::{export_csv, import_csv, CsvProvider};
pub use provider::{DataError, DataSource, DatasetProvider};
pub use synthetic::{generate, generate_detailed, SyntheticProvider, DEFAULT_COUNT, DEFAULT_SEED};
