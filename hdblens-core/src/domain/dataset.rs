//! Dataset — an immutable ordered collection of transactions.

use super::record::Transaction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content fingerprint of a dataset (BLAKE3 over the canonical JSON
/// serialization of the records, in order).
///
/// Two datasets with identical records have identical fingerprints, so a
/// fingerprint comparison is a cheap reproducibility check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetFingerprint(pub String);

impl fmt::Display for DatasetFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of transactions for one session.
///
/// Immutable once constructed: queries only ever borrow the records, so the
/// dataset can be shared read-only (e.g. behind an `Arc`) without
/// synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Transaction>,
}

impl Dataset {
    pub fn new(records: Vec<Transaction>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Content fingerprint over the ordered records.
    pub fn fingerprint(&self) -> DatasetFingerprint {
        let json = serde_json::to_string(&self.records).expect("Dataset serialization failed");
        DatasetFingerprint(blake3::hash(json.as_bytes()).to_hex().to_string())
    }
}
