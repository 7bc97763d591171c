//! Token amount type for representing ledger values
//!
//! Amounts are stored as `rust_decimal::Decimal` to avoid floating-point
//! precision issues: token amounts carry many significant digits and must
//! survive aggregation without drift. The serde shape is deliberately
//! lenient: feeds occasionally deliver amounts as numbers, numeric strings,
//! or null, and one malformed record must not abort an aggregation pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::Direction;

/// A token amount: a token symbol plus a decimal value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    /// Token symbol (e.g. "DAI", "USDC", "ETH")
    pub token: String,

    /// Decimal value, coerced to zero when the source field is malformed
    #[serde(with = "lenient", default)]
    pub value: Decimal,
}

impl TokenAmount {
    /// Create a token amount
    pub fn new(token: impl Into<String>, value: Decimal) -> Self {
        Self {
            token: token.into(),
            value,
        }
    }

    /// Create a zero amount of the given token
    pub fn zero(token: impl Into<String>) -> Self {
        Self::new(token, Decimal::ZERO)
    }

    /// The value signed by transaction direction: positive for inflows,
    /// negative for outflows
    pub fn signed(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::Inflow => self.value,
            Direction::Outflow => -self.value,
        }
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.token)
    }
}

/// Lenient serde codec for decimal fields
///
/// Accepts numbers, numeric strings, and null; anything else coerces to
/// zero so a single malformed record cannot abort a whole pass.
pub(crate) mod lenient {
    use rust_decimal::Decimal;
    use serde::de::{Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // UFCS: Decimal has an inherent `serialize()` returning its raw
        // bytes, which would shadow the trait method here.
        serde::Serialize::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientVisitor)
    }

    struct LenientVisitor;

    fn coerced(raw: &dyn fmt::Display) -> Decimal {
        tracing::debug!(raw = %raw, "coercing non-numeric amount to zero");
        Decimal::ZERO
    }

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal number, numeric string, or null")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Decimal, E> {
            Ok(Decimal::try_from(v).unwrap_or_else(|_| coerced(&v)))
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Decimal, E> {
            Ok(v.trim().parse::<Decimal>().unwrap_or_else(|_| coerced(&v)))
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Decimal, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(LenientVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_by_direction() {
        let amount = TokenAmount::new("DAI", dec!(100.25));
        assert_eq!(amount.signed(Direction::Inflow), dec!(100.25));
        assert_eq!(amount.signed(Direction::Outflow), dec!(-100.25));
    }

    #[test]
    fn test_display() {
        let amount = TokenAmount::new("USDC", dec!(12.5));
        assert_eq!(format!("{}", amount), "12.5 USDC");
    }

    #[test]
    fn test_deserialize_from_number() {
        let amount: TokenAmount =
            serde_json::from_str(r#"{"token":"DAI","value":42.5}"#).unwrap();
        assert_eq!(amount.value, dec!(42.5));
    }

    #[test]
    fn test_deserialize_from_string() {
        let amount: TokenAmount =
            serde_json::from_str(r#"{"token":"DAI","value":"1234567.000000000000000001"}"#)
                .unwrap();
        assert_eq!(
            amount.value,
            "1234567.000000000000000001".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_deserialize_null_coerces_to_zero() {
        let amount: TokenAmount =
            serde_json::from_str(r#"{"token":"DAI","value":null}"#).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_deserialize_garbage_coerces_to_zero() {
        let amount: TokenAmount =
            serde_json::from_str(r#"{"token":"DAI","value":"n/a"}"#).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_deserialize_missing_defaults_to_zero() {
        let amount: TokenAmount = serde_json::from_str(r#"{"token":"DAI"}"#).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_serialize_emits_decimal_not_raw_bytes() {
        // The value must go through the serde trait impl, not Decimal's
        // inherent byte-array serialize.
        let amount = TokenAmount::new("DAI", dec!(42.5));
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, r#"{"token":"DAI","value":"42.5"}"#);
    }

    #[test]
    fn test_serialization_round_trip() {
        let amount = TokenAmount::new("USDT", dec!(0.000001));
        let json = serde_json::to_string(&amount).unwrap();
        let back: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, back);
    }
}
