//! Feature record for the price model.
//!
//! The serving endpoint expects exactly five columns in a fixed order. The
//! prediction client forwards values unmodified; range validation is the
//! presentation layer's job before invocation (see `FeatureRecord::validate`).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Wire column order for the model service.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "month",
    "block",
    "floor_area_sqm",
    "lease_commence_date",
    "year",
];

/// Documented input ranges. Enforced by the presentation layer, not by the
/// prediction client.
pub const MONTH_RANGE: (u32, u32) = (1, 12);
pub const BLOCK_RANGE: (u16, u16) = (1, 999);
pub const FLOOR_AREA_RANGE: (f64, f64) = (20.0, 200.0);
pub const LEASE_YEAR_RANGE: (i32, i32) = (1960, 2024);

/// How many calendar years ahead (starting from the reference year) a target
/// year may lie.
pub const TARGET_YEAR_WINDOW: i32 = 2;

/// One feature row for a prediction request. Constructed fresh per request,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub month: u32,
    pub block: u16,
    pub floor_area_sqm: f64,
    pub lease_commence_date: i32,
    pub year: i32,
}

#[derive(Debug, Error, PartialEq)]
pub enum FeatureRangeError {
    #[error("month must be in 1..=12, got {0}")]
    Month(u32),

    #[error("block must be in 1..=999, got {0}")]
    Block(u16),

    #[error("floor area must be in 20.0..=200.0 sqm, got {0}")]
    FloorArea(f64),

    #[error("lease commencement year must be in 1960..=2024, got {0}")]
    LeaseYear(i32),

    #[error("target year must be in {min}..={max}, got {got}")]
    TargetYear { got: i32, min: i32, max: i32 },
}

impl FeatureRecord {
    /// One row of wire values, in `FEATURE_COLUMNS` order, unmodified.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            json!(self.month),
            json!(self.block),
            json!(self.floor_area_sqm),
            json!(self.lease_commence_date),
            json!(self.year),
        ]
    }

    /// Check the documented input ranges. The target-year window starts at
    /// `reference_year` and spans `TARGET_YEAR_WINDOW` calendar years.
    ///
    /// Called by the presentation layer before invoking the prediction
    /// client; the client itself never validates.
    pub fn validate(&self, reference_year: i32) -> Result<(), FeatureRangeError> {
        if !(MONTH_RANGE.0..=MONTH_RANGE.1).contains(&self.month) {
            return Err(FeatureRangeError::Month(self.month));
        }
        if !(BLOCK_RANGE.0..=BLOCK_RANGE.1).contains(&self.block) {
            return Err(FeatureRangeError::Block(self.block));
        }
        if !(FLOOR_AREA_RANGE.0..=FLOOR_AREA_RANGE.1).contains(&self.floor_area_sqm) {
            return Err(FeatureRangeError::FloorArea(self.floor_area_sqm));
        }
        if !(LEASE_YEAR_RANGE.0..=LEASE_YEAR_RANGE.1).contains(&self.lease_commence_date) {
            return Err(FeatureRangeError::LeaseYear(self.lease_commence_date));
        }
        let max_year = reference_year + TARGET_YEAR_WINDOW - 1;
        if !(reference_year..=max_year).contains(&self.year) {
            return Err(FeatureRangeError::TargetYear {
                got: self.year,
                min: reference_year,
                max: max_year,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_record() -> FeatureRecord {
        FeatureRecord {
            month: 6,
            block: 123,
            floor_area_sqm: 70.0,
            lease_commence_date: 1995,
            year: 2024,
        }
    }

    #[test]
    fn row_follows_wire_column_order() {
        let row = reference_record().to_row();
        assert_eq!(row.len(), FEATURE_COLUMNS.len());
        assert_eq!(row[0], json!(6));
        assert_eq!(row[1], json!(123));
        assert_eq!(row[2], json!(70.0));
        assert_eq!(row[3], json!(1995));
        assert_eq!(row[4], json!(2024));
    }

    #[test]
    fn reference_record_validates() {
        assert!(reference_record().validate(2024).is_ok());
    }

    #[test]
    fn out_of_window_target_year_is_rejected() {
        let mut record = reference_record();
        record.year = 2030;
        assert!(matches!(
            record.validate(2024),
            Err(FeatureRangeError::TargetYear { got: 2030, .. })
        ));
    }

    #[test]
    fn next_calendar_year_is_inside_window() {
        let mut record = reference_record();
        record.year = 2025;
        assert!(record.validate(2024).is_ok());
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        let mut record = reference_record();
        record.month = 0;
        assert_eq!(record.validate(2024), Err(FeatureRangeError::Month(0)));

        let mut record = reference_record();
        record.floor_area_sqm = 10.0;
        assert!(matches!(
            record.validate(2024),
            Err(FeatureRangeError::FloorArea(_))
        ));

        let mut record = reference_record();
        record.lease_commence_date = 1900;
        assert!(matches!(
            record.validate(2024),
            Err(FeatureRangeError::LeaseYear(1900))
        ));
    }
}
