//! Fare amounts.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when a fare amount cannot be represented.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid cost {amount}: {reason}")]
pub struct InvalidCost {
    amount: f64,
    reason: &'static str,
}

/// A non-negative fare, stored in minor currency units (cents).
///
/// Whole cents give `Cost` a total order.
///
/// # Examples
///
/// ```
/// use route_comparator::domain::Cost;
///
/// let fare = Cost::from_amount(12.5).unwrap();
/// assert_eq!(fare.cents(), 1250);
/// assert_eq!(fare.to_string(), "12.50");
///
/// // Negative and non-finite amounts are rejected
/// assert!(Cost::from_amount(-1.0).is_err());
/// assert!(Cost::from_amount(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(u64);

impl Cost {
    /// Largest amount accepted by [`Cost::from_amount`].
    pub const MAX_AMOUNT: f64 = 1.0e12;

    /// A fare from a whole number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Cost(cents)
    }

    /// A fare from a whole number of currency units.
    pub const fn from_units(units: u32) -> Self {
        Cost(units as u64 * 100)
    }

    /// Parse a fare from a decimal amount in currency units.
    ///
    /// The amount is rounded to the nearest cent.
    pub fn from_amount(amount: f64) -> Result<Self, InvalidCost> {
        if !amount.is_finite() {
            return Err(InvalidCost {
                amount,
                reason: "must be a finite number",
            });
        }
        if amount < 0.0 {
            return Err(InvalidCost {
                amount,
                reason: "must not be negative",
            });
        }
        if amount > Self::MAX_AMOUNT {
            return Err(InvalidCost {
                amount,
                reason: "too large",
            });
        }

        Ok(Cost((amount * 100.0).round() as u64))
    }

    /// The fare in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// The fare in currency units.
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_amount_rounds_to_cents() {
        assert_eq!(Cost::from_amount(15.0).unwrap().cents(), 1500);
        assert_eq!(Cost::from_amount(12.5).unwrap().cents(), 1250);
        assert_eq!(Cost::from_amount(9.999).unwrap().cents(), 1000);
        assert_eq!(Cost::from_amount(0.0).unwrap().cents(), 0);
    }

    #[test]
    fn reject_negative() {
        let err = Cost::from_amount(-0.5).unwrap_err();
        assert_eq!(err.to_string(), "invalid cost -0.5: must not be negative");
    }

    #[test]
    fn reject_non_finite() {
        assert!(Cost::from_amount(f64::NAN).is_err());
        assert!(Cost::from_amount(f64::INFINITY).is_err());
        assert!(Cost::from_amount(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn reject_too_large() {
        assert!(Cost::from_amount(Cost::MAX_AMOUNT * 10.0).is_err());
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Cost::from_units(15).to_string(), "15.00");
        assert_eq!(Cost::from_cents(1205).to_string(), "12.05");
        assert_eq!(Cost::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn ordering_follows_amount() {
        assert!(Cost::from_units(10) < Cost::from_units(15));
        assert!(Cost::from_cents(1001) > Cost::from_units(10));
        assert_eq!(Cost::from_units(20), Cost::from_cents(2000));
    }

    #[test]
    fn serializes_as_amount() {
        let json = serde_json::to_string(&Cost::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");
    }
}
