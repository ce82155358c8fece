//! Prediction pipeline: feature records, the model-service boundary, and the
//! client that ties them together.

pub mod client;
pub mod features;
pub mod http;
pub mod service;

pub use client::{Prediction, PredictionClient};
pub use features::{FeatureRangeError, FeatureRecord, FEATURE_COLUMNS, TARGET_YEAR_WINDOW};
pub use http::HttpModelService;
pub use service::{ModelService, PredictionError};
