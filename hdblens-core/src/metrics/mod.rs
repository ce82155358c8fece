//! Derived metrics — pure query functions over a dataset.
//!
//! Every function here is a pure query: dataset (or value slice) in,
//! aggregate out. Nothing mutates the dataset, and repeated calls return
//! identical results. Aggregates over an empty dataset are a typed failure
//! (`MetricsError::EmptyDataset`), never a NaN sentinel.

use crate::domain::{Dataset, Town, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("dataset is empty: aggregate is undefined")]
    EmptyDataset,

    #[error("histogram requires at least one bucket")]
    ZeroBuckets,
}

/// Mean resale price over all records.
pub fn mean_price(dataset: &Dataset) -> Result<f64, MetricsError> {
    mean(dataset, |tx| tx.resale_price)
}

/// Mean floor area over all records.
pub fn mean_floor_area(dataset: &Dataset) -> Result<f64, MetricsError> {
    mean(dataset, |tx| tx.floor_area_sqm)
}

/// Mean of per-record price/area ratios.
///
/// This is the arithmetic mean of each record's own ratio, which differs
/// from mean price divided by mean area whenever areas are non-uniform.
pub fn mean_price_per_sqm(dataset: &Dataset) -> Result<f64, MetricsError> {
    mean(dataset, Transaction::price_per_sqm)
}

fn mean(dataset: &Dataset, value: impl Fn(&Transaction) -> f64) -> Result<f64, MetricsError> {
    if dataset.is_empty() {
        return Err(MetricsError::EmptyDataset);
    }
    let sum: f64 = dataset.iter().map(value).sum();
    Ok(sum / dataset.len() as f64)
}

/// Building age relative to a reference year. See
/// [`Transaction::building_age`]; negative values pass through without
/// clamping.
pub fn building_age(record: &Transaction, reference_year: i32) -> i32 {
    record.building_age(reference_year)
}

/// Mean price for one (year, month) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: u32,
    pub mean_price: f64,
    pub transaction_count: usize,
}

/// Mean resale price per distinct (year, month), in chronological order.
///
/// Exactly one entry per (year, month) pair present in the data; an empty
/// dataset yields an empty sequence.
pub fn monthly_trend(dataset: &Dataset) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for tx in dataset.iter() {
        let entry = groups.entry((tx.year, tx.month)).or_insert((0.0, 0));
        entry.0 += tx.resale_price;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|((year, month), (sum, count))| MonthlyAggregate {
            year,
            month,
            mean_price: sum / count as f64,
            transaction_count: count,
        })
        .collect()
}

/// Mean price and transaction count for one town.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownAggregate {
    pub town: Town,
    pub mean_price: f64,
    pub transaction_count: usize,
}

/// Per-town mean price and transaction count, one entry per town present.
///
/// Ordered by town for deterministic output.
pub fn town_breakdown(dataset: &Dataset) -> Vec<TownAggregate> {
    let mut groups: BTreeMap<Town, (f64, usize)> = BTreeMap::new();
    for tx in dataset.iter() {
        let entry = groups.entry(tx.town).or_insert((0.0, 0));
        entry.0 += tx.resale_price;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(town, (sum, count))| TownAggregate {
            town,
            mean_price: sum / count as f64,
            transaction_count: count,
        })
        .collect()
}

/// One equal-width histogram bucket over `[start, end)`; the final bucket is
/// closed at the value maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split `[min(values), max(values)]` into `bucket_count` equal-width buckets
/// and count the values landing in each.
///
/// The bucket counts always sum to `values.len()`. When every value is equal
/// the width degenerates to zero and all values are counted in the first
/// bucket.
pub fn histogram(values: &[f64], bucket_count: usize) -> Result<Vec<HistogramBucket>, MetricsError> {
    if bucket_count == 0 {
        return Err(MetricsError::ZeroBuckets);
    }
    if values.is_empty() {
        return Err(MetricsError::EmptyDataset);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bucket_count as f64;

    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|i| HistogramBucket {
            start: min + width * i as f64,
            // Close the final bucket exactly at the maximum so the sequence
            // covers [min, max] without floating-point drift.
            end: if i + 1 == bucket_count {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = if width == 0.0 {
            0
        } else {
            (((v - min) / width) as usize).min(bucket_count - 1)
        };
        buckets[idx].count += 1;
    }

    Ok(buckets)
}

/// Headline metrics for the dashboard's summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub mean_price: f64,
    pub mean_price_per_sqm: f64,
    pub mean_floor_area: f64,
    pub transaction_count: usize,
}

impl MarketSummary {
    /// Compute all headline metrics for the dataset.
    pub fn compute(dataset: &Dataset) -> Result<Self, MetricsError> {
        Ok(Self {
            mean_price: mean_price(dataset)?,
            mean_price_per_sqm: mean_price_per_sqm(dataset)?,
            mean_floor_area: mean_floor_area(dataset)?,
            transaction_count: dataset.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlatCategory, Transaction};

    fn tx(price: f64, area: f64, year: i32, month: u32, town: Town) -> Transaction {
        Transaction {
            flat_type: FlatCategory::FourRoom,
            floor_area_sqm: area,
            resale_price: price,
            block: 100,
            street_name: "Street 1".into(),
            town,
            year,
            month,
            lease_commence_year: 1990,
        }
    }

    #[test]
    fn mean_price_of_two_records() {
        let ds = Dataset::new(vec![
            tx(300_000.0, 60.0, 2021, 1, Town::Bedok),
            tx(500_000.0, 100.0, 2021, 2, Town::Bedok),
        ]);
        assert_eq!(mean_price(&ds).unwrap(), 400_000.0);
    }

    #[test]
    fn empty_dataset_is_typed_failure() {
        let ds = Dataset::new(Vec::new());
        assert_eq!(mean_price(&ds).unwrap_err(), MetricsError::EmptyDataset);
        assert_eq!(
            mean_price_per_sqm(&ds).unwrap_err(),
            MetricsError::EmptyDataset
        );
        assert!(MarketSummary::compute(&ds).is_err());
        assert!(monthly_trend(&ds).is_empty());
        assert!(town_breakdown(&ds).is_empty());
    }

    #[test]
    fn mean_of_ratios_is_not_ratio_of_means() {
        // 100k over 50 sqm (2000/sqm) and 100k over 100 sqm (1000/sqm):
        // mean of ratios = 1500, ratio of means = 100k / 75 ≈ 1333.33.
        let ds = Dataset::new(vec![
            tx(100_000.0, 50.0, 2021, 1, Town::Bedok),
            tx(100_000.0, 100.0, 2021, 1, Town::Bedok),
        ]);
        let per_sqm = mean_price_per_sqm(&ds).unwrap();
        let ratio_of_means = mean_price(&ds).unwrap() / mean_floor_area(&ds).unwrap();
        assert_eq!(per_sqm, 1500.0);
        assert!((per_sqm - ratio_of_means).abs() > 100.0);
    }

    #[test]
    fn monthly_trend_is_chronological_and_distinct() {
        let ds = Dataset::new(vec![
            tx(400_000.0, 80.0, 2022, 1, Town::Bedok),
            tx(300_000.0, 80.0, 2021, 12, Town::Bedok),
            tx(500_000.0, 80.0, 2022, 1, Town::Bedok),
            tx(250_000.0, 80.0, 2021, 3, Town::Bedok),
        ]);
        let trend = monthly_trend(&ds);
        assert_eq!(trend.len(), 3);
        assert_eq!((trend[0].year, trend[0].month), (2021, 3));
        assert_eq!((trend[1].year, trend[1].month), (2021, 12));
        assert_eq!((trend[2].year, trend[2].month), (2022, 1));
        assert_eq!(trend[2].mean_price, 450_000.0);
        assert_eq!(trend[2].transaction_count, 2);
    }

    #[test]
    fn town_breakdown_counts_per_town() {
        let ds = Dataset::new(vec![
            tx(400_000.0, 80.0, 2022, 1, Town::Punggol),
            tx(600_000.0, 80.0, 2022, 2, Town::Punggol),
            tx(350_000.0, 80.0, 2022, 3, Town::AngMoKio),
        ]);
        let breakdown = town_breakdown(&ds);
        assert_eq!(breakdown.len(), 2);
        let punggol = breakdown.iter().find(|t| t.town == Town::Punggol).unwrap();
        assert_eq!(punggol.transaction_count, 2);
        assert_eq!(punggol.mean_price, 500_000.0);
    }

    #[test]
    fn histogram_covers_range_and_counts_everything() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let buckets = histogram(&values, 3).unwrap();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].start, 1.0);
        assert_eq!(buckets[2].end, 10.0);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn histogram_maximum_lands_in_last_bucket() {
        let values = [0.0, 10.0];
        let buckets = histogram(&values, 5).unwrap();
        assert_eq!(buckets[4].count, 1);
        assert_eq!(buckets[0].count, 1);
    }

    #[test]
    fn histogram_degenerate_input_counts_in_first_bucket() {
        let values = [7.0, 7.0, 7.0];
        let buckets = histogram(&values, 4).unwrap();
        assert_eq!(buckets[0].count, 3);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn histogram_rejects_empty_and_zero_buckets() {
        assert_eq!(histogram(&[], 3).unwrap_err(), MetricsError::EmptyDataset);
        assert_eq!(
            histogram(&[1.0], 0).unwrap_err(),
            MetricsError::ZeroBuckets
        );
    }

    #[test]
    fn building_age_passes_through_negative_values() {
        let mut record = tx(400_000.0, 80.0, 2022, 1, Town::Bedok);
        record.lease_commence_year = 1995;
        assert_eq!(building_age(&record, 2024), 29);
        record.lease_commence_year = 2024;
        assert_eq!(building_age(&record, 2020), -4);
    }
}
