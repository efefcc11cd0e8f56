//! Revenue formatting: thousands separators, two decimal digits.
//!
//! Output never depends on the process locale: `,` groups thousands and `.`
//! separates decimals.

/// Format `value` as `1,234,567.89`.
///
/// Negative values keep a leading `-`. Non-finite values fall back to their
/// `Display` form.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_thousands(whole))
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_millions() {
        assert_eq!(format_amount(1_500_000.0), "1,500,000.00");
        assert_eq!(format_amount(800_000.0), "800,000.00");
    }

    #[test]
    fn small_values_have_no_separator() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(12.3), "12.30");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn group_boundaries() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn non_finite_falls_back() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "inf");
    }
}
