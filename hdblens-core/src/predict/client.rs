//! Prediction client — packages one feature record, invokes the model
//! service, and returns a typed result.

use super::features::FeatureRecord;
use super::service::{ModelService, PredictionError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A successful price estimate, plus the derived follow-on figures the
/// dashboard shows alongside it. All follow-ons exist only on a successful
/// prediction; a failed invocation yields nothing derivable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub price: f64,
}

impl Prediction {
    /// Rough monthly mortgage factor used by the dashboard's context block.
    pub const MONTHLY_MORTGAGE_FACTOR: f64 = 0.003;
    /// Standard down-payment ratio shown alongside the estimate.
    pub const DOWN_PAYMENT_RATIO: f64 = 0.25;

    pub fn price_per_sqm(&self, floor_area_sqm: f64) -> f64 {
        self.price / floor_area_sqm
    }

    pub fn monthly_mortgage(&self) -> f64 {
        self.price * Self::MONTHLY_MORTGAGE_FACTOR
    }

    pub fn down_payment(&self) -> f64 {
        self.price * Self::DOWN_PAYMENT_RATIO
    }
}

/// Thin request/response flow to the model service.
///
/// The client forwards feature values unmodified, in the documented column
/// order, and performs no validation on either the inputs (the presentation
/// layer validates before calling) or the returned price magnitude.
pub struct PredictionClient {
    service: Arc<dyn ModelService>,
}

impl PredictionClient {
    pub fn new(service: Arc<dyn ModelService>) -> Self {
        Self { service }
    }

    /// Name of the model this client resolves against.
    pub fn model_name(&self) -> &str {
        self.service.name()
    }

    /// Request one price estimate. Every failure from the model boundary
    /// arrives as a `PredictionError` value the caller can branch on.
    pub fn predict(&self, record: &FeatureRecord) -> Result<Prediction, PredictionError> {
        let price = self.service.predict_row(record)?;
        Ok(Prediction { price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_figures_follow_the_estimate() {
        let prediction = Prediction { price: 500_000.0 };
        assert_eq!(prediction.price_per_sqm(100.0), 5_000.0);
        assert_eq!(prediction.monthly_mortgage(), 1_500.0);
        assert_eq!(prediction.down_payment(), 125_000.0);
    }
}
