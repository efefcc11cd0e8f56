use std::fmt;

use serde::{Deserialize, Serialize};

/// Profit/loss classification of predicted revenue against budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfitStatus {
    Profit,
    Loss,
}

impl ProfitStatus {
    /// `Profit` iff `margin >= 0`.
    pub fn from_margin(margin: f64) -> Self {
        if margin >= 0.0 {
            ProfitStatus::Profit
        } else {
            ProfitStatus::Loss
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfitStatus::Profit => "Profit",
            ProfitStatus::Loss => "Loss",
        }
    }
}

impl fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire form of a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Thousands-separated, two decimals.
    pub predicted_revenue: String,
    pub status: ProfitStatus,
    /// Absolute margin, thousands-separated, two decimals.
    pub profit_loss: String,
}
