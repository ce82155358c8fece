//! Model service boundary.
//!
//! The trained price model is an external, versioned dependency. The
//! `ModelService` trait keeps that boundary mockable: the real backend talks
//! HTTP, tests substitute stubs. Every failure at this boundary is converted
//! to one of the two `PredictionError` variants so callers can branch
//! precisely; nothing from the model boundary escapes as a panic.

use super::features::FeatureRecord;
use thiserror::Error;

/// Closed set of prediction failures.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The named model/version could not be resolved or loaded.
    #[error("model '{model}' unavailable: {cause}")]
    ModelUnavailable { model: String, cause: String },

    /// The model was reached but raised while predicting.
    #[error("model invocation failed: {cause}")]
    InvocationFailure { cause: String },
}

/// One scalar price estimate per feature row, or a typed failure.
pub trait ModelService: Send + Sync {
    /// Symbolic name (with version selector) of the model this service
    /// resolves.
    fn name(&self) -> &str;

    /// Predict one price for one feature row.
    fn predict_row(&self, record: &FeatureRecord) -> Result<f64, PredictionError>;
}
