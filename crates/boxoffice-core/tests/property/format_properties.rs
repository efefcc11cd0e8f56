use boxoffice_core::format::format_amount;
use proptest::prelude::*;

fn strip(formatted: &str) -> f64 {
    formatted.replace(',', "").parse().unwrap()
}

proptest! {
    #[test]
    fn formatting_is_deterministic(v in -1e12f64..1e12) {
        prop_assert_eq!(format_amount(v), format_amount(v));
    }

    #[test]
    fn always_two_decimals(v in -1e12f64..1e12) {
        let s = format_amount(v);
        let (_, fraction) = s.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    #[test]
    fn groups_are_three_digits(v in 0f64..1e15) {
        let s = format_amount(v);
        let (whole, _) = s.split_once('.').unwrap();
        let groups: Vec<&str> = whole.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for g in &groups[1..] {
            prop_assert_eq!(g.len(), 3);
        }
    }

    #[test]
    fn stripped_value_is_within_rounding(v in -1e9f64..1e9) {
        let back = strip(&format_amount(v));
        prop_assert!((back - v).abs() <= 0.005 + 1e-6, "{} vs {}", back, v);
    }
}
