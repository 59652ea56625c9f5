use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The notation a price was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// UK-style fraction, e.g. `"10/1"` (also accepts `-` or `:` separators).
    Fractional,
    /// Continental decimal, e.g. `11.0`.
    Decimal,
    /// US moneyline, e.g. `"+1000"` or `"-400"`.
    American,
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OddsFormat::Fractional => "fractional",
            OddsFormat::Decimal => "decimal",
            OddsFormat::American => "american",
        })
    }
}

/// A wager price as supplied by a caller, before normalization.
///
/// Callers hand prices over either as text (`"10/1"`, `"+800"`, `"3.5"`)
/// or as a bare number (`11`, `-400`). The converter works out which
/// notation it is looking at.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wager_engine::odds::price::Price;
///
/// let from_text = Price::from("10/1");
/// let from_number = Price::from(dec!(-400));
/// assert_ne!(from_text, from_number);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Text(String),
    Number(Decimal),
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Price::Text(s.to_string())
    }
}

impl From<String> for Price {
    fn from(s: String) -> Self {
        Price::Text(s)
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Price::Number(d)
    }
}

impl From<i32> for Price {
    fn from(n: i32) -> Self {
        Price::Number(Decimal::from(n))
    }
}

impl From<i64> for Price {
    fn from(n: i64) -> Self {
        Price::Number(Decimal::from(n))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Text(s) => f.write_str(s),
            Price::Number(d) => write!(f, "{}", d),
        }
    }
}
