//! CSV import and export of datasets.
//!
//! The CSV schema is the serde field order of `Transaction`. Import rejects
//! rows that fail the record sanity check rather than silently carrying bad
//! data into the aggregate queries.

use super::provider::{DataError, DataSource, DatasetProvider};
use crate::domain::{Dataset, Transaction};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Write every record of the dataset as one CSV row.
pub fn export_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<(), DataError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in dataset.iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a dataset previously written by `export_csv`.
pub fn import_csv<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<Transaction>().enumerate() {
        let record = row?;
        if !record.is_sane() {
            return Err(DataError::InvalidRecord {
                index,
                reason: "field out of documented range".into(),
            });
        }
        records.push(record);
    }
    Ok(Dataset::new(records))
}

/// Provider that loads a dataset from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    path: PathBuf,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn source(&self) -> DataSource {
        DataSource::CsvImport
    }

    fn load(&self) -> Result<Dataset, DataError> {
        let file = File::open(&self.path)?;
        import_csv(file)
    }
}
