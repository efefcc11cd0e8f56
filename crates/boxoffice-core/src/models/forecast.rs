use serde::{Deserialize, Serialize};

use super::{PredictionResult, ProfitStatus};
use crate::format::format_amount;

/// Unformatted outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub predicted_revenue: f64,
    pub budget: f64,
    /// Signed `predicted_revenue - budget`.
    pub margin: f64,
    pub status: ProfitStatus,
}

impl Forecast {
    pub fn new(predicted_revenue: f64, budget: f64) -> Self {
        let margin = predicted_revenue - budget;
        Self {
            predicted_revenue,
            budget,
            margin,
            status: ProfitStatus::from_margin(margin),
        }
    }

    /// Format for transmission. `profit_loss` carries the absolute margin.
    pub fn to_result(&self) -> PredictionResult {
        PredictionResult {
            predicted_revenue: format_amount(self.predicted_revenue),
            status: self.status,
            profit_loss: format_amount(self.margin.abs()),
        }
    }
}
