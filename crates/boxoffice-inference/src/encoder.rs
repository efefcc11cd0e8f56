//! Feature row → dense `f32` vector, in the layout the model was fit on.

use boxoffice_core::constants::{self, GENRE_COLUMN};
use boxoffice_core::errors::ModelError;
use boxoffice_core::models::{FeatureRow, FeatureValue};

use crate::manifest::ModelManifest;

/// Encodes numeric columns as-is and expands the genre column in place into
/// a one-hot block over the manifest's categories.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    columns: Vec<String>,
    genre_categories: Vec<String>,
}

impl FeatureEncoder {
    pub fn new(manifest: &ModelManifest) -> Self {
        Self {
            columns: manifest.columns.clone(),
            genre_categories: manifest.genre_categories.clone(),
        }
    }

    /// Length of the encoded vector.
    pub fn width(&self) -> usize {
        self.columns
            .iter()
            .map(|c| {
                if constants::is_categorical(c) {
                    self.genre_categories.len()
                } else {
                    1
                }
            })
            .sum()
    }

    /// Encode one row.
    ///
    /// # Errors
    /// `MissingValue` for an absent cell, `UnknownCategory` for a genre not
    /// seen during training.
    pub fn encode(&self, row: &FeatureRow) -> Result<Vec<f32>, ModelError> {
        let mut out = Vec::with_capacity(self.width());
        for column in &self.columns {
            let value = row.get(column).unwrap_or(&FeatureValue::Missing);
            if constants::is_categorical(column) {
                self.encode_genre(column, value, &mut out)?;
            } else {
                let n = value.as_number().ok_or_else(|| missing_or_mistyped(column, value))?;
                out.push(n as f32);
            }
        }
        Ok(out)
    }

    fn encode_genre(
        &self,
        column: &str,
        value: &FeatureValue,
        out: &mut Vec<f32>,
    ) -> Result<(), ModelError> {
        let label = value.as_text().ok_or_else(|| missing_or_mistyped(column, value))?;
        let index = self
            .genre_categories
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| ModelError::UnknownCategory {
                column: GENRE_COLUMN.to_string(),
                value: label.to_string(),
            })?;
        out.extend((0..self.genre_categories.len()).map(|i| if i == index { 1.0 } else { 0.0 }));
        Ok(())
    }
}

fn missing_or_mistyped(column: &str, value: &FeatureValue) -> ModelError {
    match value {
        FeatureValue::Missing => ModelError::MissingValue {
            column: column.to_string(),
        },
        other => ModelError::InferenceFailed {
            reason: format!("column {column} cannot encode a {} value", other.kind()),
        },
    }
}
