//! Decimal-string money parsing.
//!
//! The report endpoint sends amounts as decimal strings (`"1234.50"`), and
//! occasionally as bare JSON numbers. This module is the single place where
//! they become numbers: `f64` for charting, [`Decimal`] wherever parts must
//! add up to a whole exactly.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::str::FromStr;

/// Parse a decimal-formatted amount.
///
/// Returns `None` for empty input, anything that is not a plain decimal
/// (one optional leading sign, digits with at most one `.`, optional
/// exponent), and values `f64` cannot hold, so a malformed string never
/// leaks a `NaN` into arithmetic.
pub fn parse_money(raw: &str) -> Option<f64> {
    split_amount(raw)?;
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a decimal-formatted amount exactly.
///
/// Same grammar as [`parse_money`]; `None` also when the value does not fit
/// a [`Decimal`] (more than 28 significant digits or fractional places).
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let (negative, mantissa, exponent) = split_amount(raw)?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    if exponent < 0 {
        let scale = value.scale().checked_add(exponent.unsigned_abs())?;
        value.set_scale(scale).ok()?;
    } else if exponent > 0 {
        let factor = 10i128.checked_pow(exponent.unsigned_abs())?;
        value = value.checked_mul(Decimal::from_i128(factor)?)?;
    }
    Some(if negative { -value } else { value })
}

/// Exact decimal for an amount already parsed to `f64`.
///
/// Goes through the shortest round-trip text of the float, so `0.1`
/// becomes `0.1` and not its binary expansion.
pub fn to_decimal(value: f64) -> Decimal {
    parse_decimal(&value.to_string())
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or_else(|| {
            log::warn!("amount {value} has no decimal representation, using 0");
            Decimal::ZERO
        })
}

/// Sign, mantissa and exponent of a well-formed amount.
fn split_amount(raw: &str) -> Option<(bool, &str, i32)> {
    let text = raw.trim();
    let (negative, unsigned) = match *text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().ok()?),
        None => (unsigned, 0),
    };
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count();
    let dots = mantissa.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != mantissa.len() {
        return None;
    }
    Some((negative, mantissa, exponent))
}

/// Value as it appears on the wire: a decimal string or a JSON number.
enum RawAmount {
    Text(String),
    Number(f64),
    Null,
}

struct RawAmountVisitor;

impl<'de> Visitor<'de> for RawAmountVisitor {
    type Value = RawAmount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RawAmount::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RawAmount::Text(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(RawAmount::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RawAmount::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RawAmount::Number(v as f64))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawAmount::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawAmount::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(RawAmountVisitor)
    }
}

/// Serde adapter for a required amount. A missing, null, or malformed value
/// breaks the snapshot contract and fails deserialization.
pub mod amount {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match deserializer.deserialize_any(RawAmountVisitor)? {
            RawAmount::Number(v) if v.is_finite() => Ok(v),
            RawAmount::Number(v) => Err(de::Error::custom(format!("non-finite amount {v}"))),
            RawAmount::Text(s) => parse_money(&s)
                .ok_or_else(|| de::Error::custom(format!("malformed amount '{s}'"))),
            RawAmount::Null => Err(de::Error::custom("required amount is null")),
        }
    }
}

/// Serde adapter for an optional amount. Null and malformed values both
/// become `None`; use with `#[serde(default)]` so a missing field does too.
pub mod optional_amount {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Ok(match deserializer.deserialize_option(RawAmountVisitor)? {
            RawAmount::Number(v) => Some(v).filter(|v| v.is_finite()),
            RawAmount::Text(s) => {
                let parsed = parse_money(&s);
                if parsed.is_none() {
                    log::warn!("ignoring malformed optional amount '{s}'");
                }
                parsed
            }
            RawAmount::Null => None,
        })
    }
}

/// Serde adapter for a list of required amounts (heatmap cells).
pub mod amount_list {
    use super::*;
    use serde::Deserialize;

    struct Required(f64);

    impl<'de> Deserialize<'de> for Required {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            super::amount::deserialize(deserializer).map(Required)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let cells = Vec::<Required>::deserialize(deserializer)?;
        Ok(cells.into_iter().map(|Required(v)| v).collect())
    }
}
