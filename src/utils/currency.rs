//! Rupee amount formatting

use bigdecimal::BigDecimal;

/// Currency symbol used in every message and log entry
pub const RUPEE_SYMBOL: &str = "₹";

/// Render an amount as a plain decimal without trailing fractional zeros,
/// e.g. `7000`, `3989.5`, `0.0000001`. Never uses exponent notation.
pub fn format_amount(amount: &BigDecimal) -> String {
    let normalized = amount.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    if scale <= 0 {
        // normalized() folds trailing integer zeros into a negative scale
        normalized.with_scale(0).to_plain_string()
    } else {
        normalized.to_plain_string()
    }
}

/// Render an amount with the rupee symbol, e.g. `₹7000`
pub fn format_rupees(amount: &BigDecimal) -> String {
    format!("{}{}", RUPEE_SYMBOL, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_integral_amounts() {
        assert_eq!(format_amount(&BigDecimal::from(7000)), "7000");
        assert_eq!(format_amount(&BigDecimal::from(0)), "0");
        assert_eq!(format_amount(&BigDecimal::from_str("250.00").unwrap()), "250");
    }

    #[test]
    fn test_format_fractional_amounts() {
        assert_eq!(
            format_amount(&BigDecimal::from_str("3989.50").unwrap()),
            "3989.5"
        );
        assert_eq!(format_rupees(&BigDecimal::from_str("0.25").unwrap()), "₹0.25");
    }

    #[test]
    fn test_format_small_amounts_without_exponent() {
        assert_eq!(
            format_rupees(&BigDecimal::from_str("0.0000001").unwrap()),
            "₹0.0000001"
        );
        assert_eq!(
            format_amount(&BigDecimal::from_str("1E-9").unwrap()),
            "0.000000001"
        );
        assert_eq!(format_amount(&BigDecimal::from_str("5E+7").unwrap()), "50000000");
    }
}
