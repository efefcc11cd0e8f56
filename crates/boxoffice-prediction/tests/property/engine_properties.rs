use boxoffice_core::models::ProfitStatus;
use boxoffice_prediction::{ModelState, PredictionEngine};
use proptest::prelude::*;
use serde_json::json;
use test_fixtures::FixedRevenueModel;

proptest! {
    #[test]
    fn status_is_profit_iff_margin_non_negative(
        revenue in 0f64..1e10,
        budget in 0f64..1e10,
    ) {
        let engine = PredictionEngine::new(ModelState::ready(FixedRevenueModel::new(revenue)));
        let payload = json!({"year": 2000, "rating": 6.0, "genre": "Drama", "run_time": 100, "budget": budget});
        let forecast = engine.forecast(&payload).unwrap();
        let expected = if revenue - budget >= 0.0 { ProfitStatus::Profit } else { ProfitStatus::Loss };
        prop_assert_eq!(forecast.status, expected);

        let result = forecast.to_result();
        prop_assert!(!result.profit_loss.starts_with('-'));
        prop_assert_eq!(result.status, expected);
    }

    #[test]
    fn repeated_calls_format_identically(revenue in -1e9f64..1e9, budget in 0f64..1e9) {
        let engine = PredictionEngine::new(ModelState::ready(FixedRevenueModel::new(revenue)));
        let payload = json!({"genre": "Drama", "budget": budget});
        prop_assert_eq!(engine.predict(&payload).unwrap(), engine.predict(&payload).unwrap());
    }
}
