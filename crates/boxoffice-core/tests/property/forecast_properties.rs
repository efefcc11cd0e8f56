use boxoffice_core::models::{Forecast, ProfitStatus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn status_follows_margin_sign(revenue in -1e10f64..1e10, budget in 0f64..1e10) {
        let forecast = Forecast::new(revenue, budget);
        let expected = if revenue - budget >= 0.0 { ProfitStatus::Profit } else { ProfitStatus::Loss };
        prop_assert_eq!(forecast.status, expected);
    }

    #[test]
    fn profit_loss_is_never_negative(revenue in -1e10f64..1e10, budget in -1e10f64..1e10) {
        let result = Forecast::new(revenue, budget).to_result();
        prop_assert!(!result.profit_loss.starts_with('-'));
    }
}
