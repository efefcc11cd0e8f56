use serde_json::{Map, Value};

use super::{FeatureRow, FeatureValue};
use crate::constants::{self, FIELD_TO_COLUMN};
use crate::errors::PredictionError;

/// Movie attributes as received from a client.
///
/// Built fresh per call from untyped JSON. Absent keys and `null` become
/// `FeatureValue::Missing`; no required-field validation happens here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionRequest {
    pub year: FeatureValue,
    pub rating: FeatureValue,
    pub genre: FeatureValue,
    pub run_time: FeatureValue,
    pub budget: FeatureValue,
}

impl PredictionRequest {
    pub fn new(
        year: impl Into<FeatureValue>,
        rating: impl Into<FeatureValue>,
        genre: impl Into<FeatureValue>,
        run_time: impl Into<FeatureValue>,
        budget: impl Into<FeatureValue>,
    ) -> Self {
        Self {
            year: year.into(),
            rating: rating.into(),
            genre: genre.into(),
            run_time: run_time.into(),
            budget: budget.into(),
        }
    }

    /// Read the request from an untyped JSON body.
    ///
    /// # Errors
    /// `InvalidInput` if the body is not an object or a field holds a
    /// boolean, array, or object.
    pub fn from_json(body: &Value) -> Result<Self, PredictionError> {
        let object = body.as_object().ok_or_else(|| {
            PredictionError::invalid_input(format!(
                "request body must be a JSON object, got {}",
                json_kind(body)
            ))
        })?;

        Ok(Self {
            year: read_field(object, constants::YEAR_FIELD)?,
            rating: read_field(object, constants::RATING_FIELD)?,
            genre: read_field(object, constants::GENRE_FIELD)?,
            run_time: read_field(object, constants::RUN_TIME_FIELD)?,
            budget: read_field(object, constants::BUDGET_FIELD)?,
        })
    }

    /// Values in `FIELD_TO_COLUMN` order.
    fn ordered_fields(&self) -> [&FeatureValue; FIELD_TO_COLUMN.len()] {
        [
            &self.year,
            &self.rating,
            &self.genre,
            &self.run_time,
            &self.budget,
        ]
    }

    /// Map the request onto the trained feature schema, coercing each value
    /// to its column's kind.
    ///
    /// # Errors
    /// `InvalidInput` if a numeric column holds non-numeric text.
    pub fn to_feature_row(&self) -> Result<FeatureRow, PredictionError> {
        let fields = self.ordered_fields();
        let mut values: [FeatureValue; FIELD_TO_COLUMN.len()] = Default::default();
        for (slot, ((field, column), value)) in values
            .iter_mut()
            .zip(FIELD_TO_COLUMN.iter().zip(fields))
        {
            *slot = if constants::is_categorical(column) {
                coerce_categorical(value)
            } else {
                coerce_numeric(field, value)?
            };
        }
        Ok(FeatureRow::from_ordered(values))
    }
}

fn read_field(object: &Map<String, Value>, field: &str) -> Result<FeatureValue, PredictionError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(FeatureValue::Missing),
        Some(Value::Number(n)) => n.as_f64().map(FeatureValue::Number).ok_or_else(|| {
            PredictionError::invalid_input(format!("field `{field}` is not a representable number"))
        }),
        Some(Value::String(s)) => Ok(FeatureValue::Text(s.clone())),
        Some(other) => Err(PredictionError::invalid_input(format!(
            "field `{field}` has unsupported type {}",
            json_kind(other)
        ))),
    }
}

fn coerce_numeric(field: &str, value: &FeatureValue) -> Result<FeatureValue, PredictionError> {
    match value {
        FeatureValue::Number(_) | FeatureValue::Missing => Ok(value.clone()),
        FeatureValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(FeatureValue::Number(n)),
            _ => Err(PredictionError::invalid_input(format!(
                "could not convert `{field}` value {s:?} to a number"
            ))),
        },
    }
}

fn coerce_categorical(value: &FeatureValue) -> FeatureValue {
    match value {
        FeatureValue::Number(n) => FeatureValue::Text(n.to_string()),
        other => other.clone(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
