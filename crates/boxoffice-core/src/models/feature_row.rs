use serde::Serialize;

use super::FeatureValue;
use crate::constants::FEATURE_COLUMNS;

/// One record laid out in the trained feature schema.
///
/// Columns always appear in `FEATURE_COLUMNS` order. Numeric columns hold
/// `Number` or `Missing`; categorical columns hold `Text` or `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    cells: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRow {
    /// Build a row from values given in `FEATURE_COLUMNS` order.
    pub fn from_ordered(values: [FeatureValue; FEATURE_COLUMNS.len()]) -> Self {
        Self {
            cells: FEATURE_COLUMNS.iter().copied().zip(values).collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    /// Numeric value of `column`, if present.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(FeatureValue::as_number)
    }

    /// Text value of `column`, if present.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FeatureValue::as_text)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.cells.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        self.cells.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
