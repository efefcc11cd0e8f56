use crate::errors::ModelError;
use crate::models::FeatureRow;

/// Pre-trained regression model mapping one feature row to predicted revenue.
///
/// Implementations are loaded once and invoked read-only from many requests
/// at once; any internal serialization is the implementation's concern.
pub trait IRevenueModel: Send + Sync {
    /// Predict revenue for a single row.
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
