//! Domain types for HDBLens.

pub mod dataset;
pub mod record;

pub use dataset::{Dataset, DatasetFingerprint};
pub use record::{FlatCategory, Town, Transaction, UnknownLabel};
