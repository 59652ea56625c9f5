use crate::odds::price::{OddsFormat, Price};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from price parsing and conversion.
#[derive(Debug, Error)]
pub enum OddsError {
    /// The price matched a known notation but is not a valid price in it.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    /// The price matched none of the supported notations.
    #[error("cannot determine odds format: {0}")]
    UnknownFormat(String),
}

/// A price rendered in all three supported notations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedOdds {
    /// The notation the input was detected as.
    pub original_format: OddsFormat,
    /// Fractional rendering, e.g. `"10/1"`.
    pub fractional: String,
    /// Decimal price. The canonical intermediate form for all conversions.
    pub decimal: Decimal,
    /// Moneyline rendering, e.g. `"+1000"` or `"-400"`.
    pub american: String,
}

/// Denominator used when deriving a fraction from a decimal price.
/// The fraction is reduced to lowest terms afterwards.
const FRACTION_SCALE: i64 = 100_000_000;

/// Detect the notation of a price and render it in all three.
///
/// Detection priority: a `digits/digits` shape (separators `/`, `-`, `:`)
/// is fractional; a leading `+` or `-` is a moneyline; anything that parses
/// as a number is decimal. Negative bare numbers are moneylines.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wager_engine::odds::converter::convert;
/// use wager_engine::odds::price::OddsFormat;
///
/// let odds = convert("10/1").unwrap();
/// assert_eq!(odds.original_format, OddsFormat::Fractional);
/// assert_eq!(odds.decimal, dec!(11));
/// assert_eq!(odds.american, "+1000");
/// ```
///
/// # Errors
///
/// Returns [`OddsError::UnknownFormat`] when the input matches no notation,
/// and [`OddsError::InvalidPrice`] for prices that are malformed within
/// their notation: a zero or negative denominator, a decimal price of 1 or
/// less, a positive moneyline below `+100`, or a negative moneyline that
/// would imply a decimal price of 2 or more.
pub fn convert(price: impl Into<Price>) -> Result<ConvertedOdds, OddsError> {
    let price = price.into();
    match detect_format(&price)? {
        OddsFormat::Fractional => {
            // Only text can be fractional; render the normalized input
            // fraction rather than re-deriving it from the decimal.
            let Price::Text(text) = &price else {
                return Err(OddsError::UnknownFormat(price.to_string()));
            };
            let (numerator, denominator) = parse_fraction(text)?;
            let decimal =
                Decimal::ONE + Decimal::from(numerator) / Decimal::from(denominator);
            Ok(ConvertedOdds {
                original_format: OddsFormat::Fractional,
                fractional: format!("{numerator}/{denominator}"),
                american: decimal_to_american(decimal)?,
                decimal,
            })
        }
        OddsFormat::American => {
            let decimal = american_to_decimal(&price)?;
            Ok(ConvertedOdds {
                original_format: OddsFormat::American,
                fractional: decimal_to_fractional(decimal)?,
                american: decimal_to_american(decimal)?,
                decimal,
            })
        }
        OddsFormat::Decimal => {
            let decimal = match &price {
                Price::Number(d) => *d,
                Price::Text(s) => s
                    .parse::<Decimal>()
                    .map_err(|_| OddsError::InvalidPrice(s.clone()))?,
            };
            Ok(ConvertedOdds {
                original_format: OddsFormat::Decimal,
                fractional: decimal_to_fractional(decimal)?,
                american: decimal_to_american(decimal)?,
                decimal,
            })
        }
    }
}

/// Work out which notation a price is written in.
fn detect_format(price: &Price) -> Result<OddsFormat, OddsError> {
    match price {
        Price::Number(d) => {
            if d.is_sign_negative() && !d.is_zero() {
                Ok(OddsFormat::American)
            } else {
                Ok(OddsFormat::Decimal)
            }
        }
        Price::Text(s) => {
            if is_fraction_text(s) {
                Ok(OddsFormat::Fractional)
            } else if s.starts_with('+') || s.starts_with('-') {
                Ok(OddsFormat::American)
            } else if s.parse::<Decimal>().is_ok() {
                Ok(OddsFormat::Decimal)
            } else {
                Err(OddsError::UnknownFormat(s.clone()))
            }
        }
    }
}

fn is_fraction_separator(c: char) -> bool {
    matches!(c, '/' | '-' | ':')
}

/// Matches `digits SEP digits` and nothing else.
fn is_fraction_text(s: &str) -> bool {
    let Some(idx) = s.find(is_fraction_separator) else {
        return false;
    };
    let numerator = &s[..idx];
    let denominator = &s[idx + 1..];
    !numerator.is_empty()
        && !denominator.is_empty()
        && numerator.bytes().all(|b| b.is_ascii_digit())
        && denominator.bytes().all(|b| b.is_ascii_digit())
}

/// Split a fraction into numerator and denominator, requiring a positive
/// denominator.
fn parse_fraction(text: &str) -> Result<(i64, i64), OddsError> {
    let invalid = || OddsError::InvalidPrice(text.to_string());
    let idx = text.find(is_fraction_separator).ok_or_else(invalid)?;
    let numerator: i64 = text[..idx].parse().map_err(|_| invalid())?;
    let denominator: i64 = text[idx + 1..].parse().map_err(|_| invalid())?;
    if denominator <= 0 {
        return Err(invalid());
    }
    Ok((numerator, denominator))
}

/// Convert a moneyline price to decimal.
///
/// `+N` is valid when the implied decimal is at least 2 (a genuine
/// underdog price); `-N` when it is below 2. Anything else is
/// inconsistent with moneyline semantics.
fn american_to_decimal(price: &Price) -> Result<Decimal, OddsError> {
    match price {
        Price::Number(d) => {
            let magnitude = d
                .abs()
                .trunc()
                .to_i64()
                .ok_or_else(|| OddsError::InvalidPrice(d.to_string()))?;
            negative_moneyline_to_decimal(magnitude, &d.to_string())
        }
        Price::Text(s) => {
            if let Some(rest) = s.strip_prefix('+') {
                let n: i64 = rest
                    .parse()
                    .map_err(|_| OddsError::InvalidPrice(s.clone()))?;
                let decimal = (Decimal::from(n) + Decimal::ONE_HUNDRED) / Decimal::ONE_HUNDRED;
                if decimal < Decimal::TWO {
                    return Err(OddsError::InvalidPrice(s.clone()));
                }
                Ok(decimal)
            } else if let Some(rest) = s.strip_prefix('-') {
                let magnitude: i64 = rest
                    .parse()
                    .map_err(|_| OddsError::InvalidPrice(s.clone()))?;
                negative_moneyline_to_decimal(magnitude, s)
            } else {
                Err(OddsError::InvalidPrice(s.clone()))
            }
        }
    }
}

fn negative_moneyline_to_decimal(magnitude: i64, original: &str) -> Result<Decimal, OddsError> {
    if magnitude <= 0 {
        return Err(OddsError::InvalidPrice(original.to_string()));
    }
    let decimal = (Decimal::from(magnitude) + Decimal::ONE_HUNDRED) / Decimal::from(magnitude);
    if decimal >= Decimal::TWO {
        return Err(OddsError::InvalidPrice(original.to_string()));
    }
    Ok(decimal)
}

/// Render a decimal price as a fraction in lowest terms.
fn decimal_to_fractional(decimal: Decimal) -> Result<String, OddsError> {
    if decimal <= Decimal::ONE {
        return Err(OddsError::InvalidPrice(decimal.to_string()));
    }
    let scaled = (decimal - Decimal::ONE)
        .checked_mul(Decimal::from(FRACTION_SCALE))
        .ok_or_else(|| OddsError::InvalidPrice(decimal.to_string()))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let mut numerator = scaled
        .to_i64()
        .ok_or_else(|| OddsError::InvalidPrice(decimal.to_string()))?;
    let mut denominator = FRACTION_SCALE;
    let factor = gcd(numerator, denominator);
    if factor > 1 {
        numerator /= factor;
        denominator /= factor;
    }
    Ok(format!("{numerator}/{denominator}"))
}

/// Render a decimal price as a moneyline.
fn decimal_to_american(decimal: Decimal) -> Result<String, OddsError> {
    if decimal <= Decimal::ONE {
        return Err(OddsError::InvalidPrice(decimal.to_string()));
    }
    let magnitude = if decimal < Decimal::TWO {
        // Odds-on: negative moneyline, the sign falls out of 1 - decimal.
        Decimal::ONE_HUNDRED / (Decimal::ONE - decimal)
    } else {
        Decimal::ONE_HUNDRED * (decimal - Decimal::ONE)
    };
    let rounded = magnitude
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| OddsError::InvalidPrice(decimal.to_string()))?;
    if rounded < 0 {
        Ok(rounded.to_string())
    } else {
        Ok(format!("+{rounded}"))
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.abs()
}
