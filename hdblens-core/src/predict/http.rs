//! HTTP model-serving backend.
//!
//! Talks to an MLflow-style serving endpoint: the model is addressed by a
//! symbolic name plus a version selector (default "latest"), never a literal
//! artifact path. One POST to `/invocations` per prediction, carrying the
//! five feature columns and a single row in `dataframe_split` form; one
//! scalar comes back in `predictions`.

use super::features::{FeatureRecord, FEATURE_COLUMNS};
use super::service::{ModelService, PredictionError};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Serving endpoint response: one prediction per submitted row.
#[derive(Debug, Deserialize)]
struct InvocationResponse {
    predictions: Vec<f64>,
}

/// Blocking HTTP client for a model-serving endpoint.
pub struct HttpModelService {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
}

impl HttpModelService {
    pub const DEFAULT_MODEL: &'static str = "House_Price_XGBoost_Model";
    pub const DEFAULT_VERSION: &'static str = "latest";

    pub fn new(base_url: impl Into<String>, model_name: &str, version: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            model: format!("{model_name}/{version}"),
        }
    }

    fn invocation_url(&self) -> String {
        format!("{}/invocations", self.base_url.trim_end_matches('/'))
    }

    fn unavailable(&self, cause: impl Into<String>) -> PredictionError {
        PredictionError::ModelUnavailable {
            model: self.model.clone(),
            cause: cause.into(),
        }
    }
}

impl ModelService for HttpModelService {
    fn name(&self) -> &str {
        &self.model
    }

    fn predict_row(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let body = json!({
            "dataframe_split": {
                "columns": FEATURE_COLUMNS,
                "data": [record.to_row()],
            }
        });

        let response = self
            .client
            .post(self.invocation_url())
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    self.unavailable(e.to_string())
                } else {
                    PredictionError::InvocationFailure {
                        cause: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // The endpoint is up but the named model/version is not served.
            return Err(self.unavailable(format!("serving endpoint returned {status}")));
        }
        if !status.is_success() {
            return Err(PredictionError::InvocationFailure {
                cause: format!("serving endpoint returned {status}"),
            });
        }

        let parsed: InvocationResponse =
            response
                .json()
                .map_err(|e| PredictionError::InvocationFailure {
                    cause: format!("unexpected response body: {e}"),
                })?;

        parsed
            .predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::InvocationFailure {
                cause: "serving endpoint returned no predictions".into(),
            })
    }
}
