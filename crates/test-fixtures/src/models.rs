//! Stub revenue models.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use boxoffice_core::constants::GENRE_COLUMN;
use boxoffice_core::errors::ModelError;
use boxoffice_core::models::{FeatureRow, FeatureValue};
use boxoffice_core::traits::IRevenueModel;

/// Returns the same revenue for every row and counts invocations.
#[derive(Debug)]
pub struct FixedRevenueModel {
    revenue: f64,
    calls: AtomicUsize,
}

impl FixedRevenueModel {
    pub fn new(revenue: f64) -> Self {
        Self {
            revenue,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IRevenueModel for FixedRevenueModel {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.revenue)
    }

    fn name(&self) -> &str {
        "fixed-revenue"
    }
}

/// Looks revenue up by genre, rejecting genres it was not "trained" on,
/// the way a fitted one-hot encoder does.
#[derive(Debug, Clone)]
pub struct GenreRevenueModel {
    revenue_by_genre: HashMap<String, f64>,
}

impl GenreRevenueModel {
    pub fn new(revenue_by_genre: HashMap<String, f64>) -> Self {
        Self { revenue_by_genre }
    }

    pub fn single(genre: &str, revenue: f64) -> Self {
        Self::new(HashMap::from([(genre.to_string(), revenue)]))
    }
}

impl IRevenueModel for GenreRevenueModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        match row.get(GENRE_COLUMN) {
            Some(FeatureValue::Text(genre)) => self.revenue_by_genre.get(genre).copied().ok_or_else(
                || ModelError::UnknownCategory {
                    column: GENRE_COLUMN.to_string(),
                    value: genre.clone(),
                },
            ),
            _ => Err(ModelError::MissingValue {
                column: GENRE_COLUMN.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "genre-table"
    }
}

/// Always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingModel {
    error: ModelError,
}

impl FailingModel {
    pub fn new(error: ModelError) -> Self {
        Self { error }
    }
}

impl IRevenueModel for FailingModel {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}
