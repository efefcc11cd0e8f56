use boxoffice_core::constants::VERSION;
use serde::{Deserialize, Serialize};

/// Overall service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// Serving, but `/predict` cannot compute.
    Degraded,
}

/// Health snapshot served at `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub model_loaded: bool,
    pub model: Option<String>,
    pub version: String,
}

impl HealthReport {
    /// Build a report from the loaded model's name, if any.
    pub fn from_model(model_name: Option<&str>) -> Self {
        let model_loaded = model_name.is_some();
        Self {
            status: if model_loaded {
                HealthStatus::Ok
            } else {
                HealthStatus::Degraded
            },
            model_loaded,
            model: model_name.map(str::to_string),
            version: VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_model_is_ok() {
        let report = HealthReport::from_model(Some("movie_revenue_predictor"));
        assert_eq!(report.status, HealthStatus::Ok);
        assert!(report.model_loaded);
    }

    #[test]
    fn missing_model_is_degraded() {
        let report = HealthReport::from_model(None);
        assert_eq!(report.status, HealthStatus::Degraded);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["model"], serde_json::Value::Null);
    }
}
