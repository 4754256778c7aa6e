//! Domain model for a monetary value.
//!
//! Every cross-currency conversion pivots through USD using two fixed rate
//! tables, so no N×N rate matrix is needed. Extending the supported set means
//! extending both tables plus the validity set together.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed set of currency codes the conversion tables know about.
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["USD", "GBP", "EUR", "CAN"];

/// Rate from each supported currency into USD.
static TO_USD: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("USD", 1.0),
        ("GBP", 2.0),
        ("EUR", 2.0 / 3.0),
        ("CAN", 0.8),
    ])
});

/// Rate from USD into each supported currency.
static FROM_USD: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("USD", 1.0),
        ("GBP", 0.5),
        ("EUR", 1.5),
        ("CAN", 1.25),
    ])
});

#[derive(Debug, thiserror::Error)]
pub enum MoneyError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

/// A monetary value in a given currency.
///
/// Immutable value type: every operation returns a new `Money` rather than
/// mutating in place. Construction never validates the code — a `Money` can
/// hold an unknown currency, but any operation touching it fails with
/// [`MoneyError::UnsupportedCurrency`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Membership test against the fixed supported set.
    pub fn is_valid_currency(code: &str) -> bool {
        SUPPORTED_CURRENCIES.contains(&code)
    }

    /// Convert into `target` by pivoting through USD.
    pub fn convert(&self, target: &str) -> Result<Money, MoneyError> {
        let to_usd = TO_USD
            .get(self.currency.as_str())
            .ok_or_else(|| MoneyError::UnsupportedCurrency(self.currency.clone()))?;
        let from_usd = FROM_USD
            .get(target)
            .ok_or_else(|| MoneyError::UnsupportedCurrency(target.to_string()))?;

        Ok(Money::new(self.amount * to_usd * from_usd, target))
    }

    /// Sum of the two values, expressed in `other`'s currency.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if !Self::is_valid_currency(&other.currency) {
            return Err(MoneyError::UnsupportedCurrency(other.currency.clone()));
        }
        let converted = self.convert(&other.currency)?;
        Ok(Money::new(
            converted.amount + other.amount,
            other.currency.clone(),
        ))
    }

    /// Difference of the two values, expressed in `self`'s currency.
    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        if !Self::is_valid_currency(&other.currency) {
            return Err(MoneyError::UnsupportedCurrency(other.currency.clone()));
        }
        let converted = other.convert(&self.currency)?;
        Ok(Money::new(
            self.amount - converted.amount,
            self.currency.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_create_money() {
        let one_usd = Money::new(1.0, "USD");
        assert_eq!(one_usd.amount, 1.0);
        assert_eq!(one_usd.currency, "USD");

        let ten_gbp = Money::new(10.0, "GBP");
        assert_eq!(ten_gbp.amount, 10.0);
        assert_eq!(ten_gbp.currency, "GBP");
    }

    #[test]
    fn test_is_valid_currency() {
        for code in SUPPORTED_CURRENCIES {
            assert!(Money::is_valid_currency(code));
        }
        assert!(!Money::is_valid_currency("JPY"));
        assert!(!Money::is_valid_currency("usd"));
        assert!(!Money::is_valid_currency(""));
    }

    #[test]
    fn test_usd_to_gbp() {
        let gbp = Money::new(10.0, "USD").convert("GBP").unwrap();
        assert_eq!(gbp.currency, "GBP");
        assert_close(gbp.amount, 5.0);
    }

    #[test]
    fn test_usd_to_eur() {
        let eur = Money::new(10.0, "USD").convert("EUR").unwrap();
        assert_eq!(eur.currency, "EUR");
        assert_close(eur.amount, 15.0);
    }

    #[test]
    fn test_usd_to_can() {
        let can = Money::new(12.0, "USD").convert("CAN").unwrap();
        assert_eq!(can.currency, "CAN");
        assert_close(can.amount, 15.0);
    }

    #[test]
    fn test_gbp_to_usd() {
        let usd = Money::new(5.0, "GBP").convert("USD").unwrap();
        assert_eq!(usd.currency, "USD");
        assert_close(usd.amount, 10.0);
    }

    #[test]
    fn test_eur_to_usd() {
        let usd = Money::new(15.0, "EUR").convert("USD").unwrap();
        assert_eq!(usd.currency, "USD");
        assert_close(usd.amount, 10.0);
    }

    #[test]
    fn test_can_to_usd() {
        let usd = Money::new(15.0, "CAN").convert("USD").unwrap();
        assert_eq!(usd.currency, "USD");
        assert_close(usd.amount, 12.0);
    }

    #[test]
    fn test_gbp_to_eur() {
        let eur = Money::new(5.0, "GBP").convert("EUR").unwrap();
        assert_eq!(eur.currency, "EUR");
        assert_close(eur.amount, 15.0);
    }

    #[test]
    fn test_eur_to_gbp() {
        let gbp = Money::new(15.0, "EUR").convert("GBP").unwrap();
        assert_eq!(gbp.currency, "GBP");
        assert_close(gbp.amount, 5.0);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for source in SUPPORTED_CURRENCIES {
            for target in SUPPORTED_CURRENCIES {
                let original = Money::new(123.45, source);
                let round_tripped = original
                    .convert(target)
                    .unwrap()
                    .convert(source)
                    .unwrap();
                assert_eq!(round_tripped.currency, source);
                assert_close(round_tripped.amount, original.amount);
            }
        }
    }

    #[test]
    fn test_add_same_currency() {
        let total = Money::new(10.0, "USD").add(&Money::new(10.0, "USD")).unwrap();
        assert_eq!(total.currency, "USD");
        assert_close(total.amount, 20.0);
    }

    #[test]
    fn test_add_takes_other_currency() {
        let total = Money::new(10.0, "USD").add(&Money::new(5.0, "GBP")).unwrap();
        assert_eq!(total.currency, "GBP");
        assert_close(total.amount, 10.0);
    }

    #[test]
    fn test_add_gbp_to_eur() {
        let total = Money::new(5.0, "GBP").add(&Money::new(15.0, "EUR")).unwrap();
        assert_eq!(total.currency, "EUR");
        assert_close(total.amount, 30.0);
    }

    #[test]
    fn test_add_can_to_usd() {
        let total = Money::new(15.0, "CAN").add(&Money::new(10.0, "USD")).unwrap();
        assert_eq!(total.currency, "USD");
        assert_close(total.amount, 22.0);
    }

    #[test]
    fn test_subtract_same_currency() {
        let result = Money::new(10.0, "USD")
            .subtract(&Money::new(5.0, "USD"))
            .unwrap();
        assert_eq!(result.currency, "USD");
        assert_close(result.amount, 5.0);
    }

    #[test]
    fn test_subtract_keeps_self_currency() {
        let result = Money::new(10.0, "USD")
            .subtract(&Money::new(5.0, "GBP"))
            .unwrap();
        assert_eq!(result.currency, "USD");
        assert_close(result.amount, 0.0);
    }

    #[test]
    fn test_subtract_can_minus_usd() {
        let result = Money::new(15.0, "CAN")
            .subtract(&Money::new(10.0, "USD"))
            .unwrap();
        assert_eq!(result.currency, "CAN");
        assert_close(result.amount, 2.5);
    }

    #[test]
    fn test_convert_from_unsupported_currency() {
        let err = Money::new(10.0, "JPY").convert("USD").unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedCurrency(code) if code == "JPY"));
    }

    #[test]
    fn test_convert_to_unsupported_currency() {
        let err = Money::new(10.0, "USD").convert("XYZ").unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedCurrency(code) if code == "XYZ"));
    }

    #[test]
    fn test_add_unsupported_currency() {
        let err = Money::new(10.0, "USD")
            .add(&Money::new(1.0, "JPY"))
            .unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedCurrency(code) if code == "JPY"));
    }

    #[test]
    fn test_subtract_unsupported_currency() {
        let err = Money::new(10.0, "USD")
            .subtract(&Money::new(1.0, "JPY"))
            .unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedCurrency(code) if code == "JPY"));
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let ten_usd = Money::new(10.0, "USD");
        let _ = ten_usd.convert("GBP").unwrap();
        let _ = ten_usd.add(&Money::new(1.0, "USD")).unwrap();
        assert_eq!(ten_usd, Money::new(10.0, "USD"));
    }

    #[test]
    fn test_money_serializes_as_plain_fields() {
        let money = Money::new(10.0, "USD");
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 10.0, "currency": "USD"}));

        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, money);
    }
}
