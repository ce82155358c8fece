//! HDBLens Core — property-transaction analytics and price prediction.
//!
//! This crate contains the reproducible logic behind the dashboard:
//! - Domain types (transactions, flat categories, towns, datasets)
//! - Deterministic synthetic dataset generation with explicit memoization
//! - Pure aggregate queries (means, monthly trend, town breakdown, histograms)
//! - Prediction client over a pluggable model-service boundary
//!
//! The presentation layer (hdblens-cli) only reads: it renders aggregates and
//! collects prediction inputs, validating them before they reach the client.

pub mod data;
pub mod domain;
pub mod metrics;
pub mod predict;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the session dataset and everything the
    /// presentation layer holds across a session are Send + Sync.
    ///
    /// The dataset is read-only shared state: multiple queries may read it
    /// concurrently with no synchronization because nothing mutates it after
    /// construction. This check keeps that guarantee from regressing.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Dataset>();
        require_sync::<domain::Dataset>();
        require_send::<domain::Transaction>();
        require_sync::<domain::Transaction>();

        require_send::<data::DatasetCache>();
        require_sync::<data::DatasetCache>();
        require_send::<data::SyntheticProvider>();
        require_sync::<data::SyntheticProvider>();

        require_send::<metrics::MarketSummary>();
        require_sync::<metrics::MarketSummary>();

        require_send::<predict::FeatureRecord>();
        require_sync::<predict::FeatureRecord>();
        require_send::<predict::PredictionClient>();
        require_sync::<predict::PredictionClient>();
        require_send::<predict::HttpModelService>();
        require_sync::<predict::HttpModelService>();
    }
}
