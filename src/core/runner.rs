use crate::odds::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a selection finished, derived from its finishing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Finished first.
    Won,
    /// Finished inside the place terms but not first.
    Placed,
    /// Finished outside the places (position zero).
    Lost,
    /// The selection did not run; stakes on it roll through untouched.
    Void,
}

impl Outcome {
    /// Classify a finishing position: `1` won, anything above placed,
    /// `0` lost, and negative positions mark a void (non-runner).
    pub fn from_position(position: i32) -> Self {
        match position {
            1 => Outcome::Won,
            p if p > 1 => Outcome::Placed,
            0 => Outcome::Lost,
            _ => Outcome::Void,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Won => "won",
            Outcome::Placed => "placed",
            Outcome::Lost => "lost",
            Outcome::Void => "void",
        })
    }
}

/// A settled selection on a slip: its price, each-way place terms, and
/// where it finished.
///
/// Prices and terms accept any supported notation. Place terms are the
/// fraction of the win odds paid on the place half of an each-way bet,
/// conventionally `"1/4"` or `"1/5"`.
///
/// # Examples
///
/// ```
/// use wager_engine::core::runner::{Outcome, Runner};
///
/// let winner = Runner::new("10/1", "1/4", 1);
/// assert_eq!(winner.outcome(), Outcome::Won);
///
/// let non_runner = Runner::new("2.5", "1/5", -1);
/// assert_eq!(non_runner.outcome(), Outcome::Void);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// The price taken on this selection.
    price: Price,
    /// Fraction of the win odds paid on the place half.
    each_way_terms: Price,
    /// Finishing position. 1 won, >1 placed, 0 lost, negative void.
    finish_position: i32,
}

impl Runner {
    pub fn new(
        price: impl Into<Price>,
        each_way_terms: impl Into<Price>,
        finish_position: i32,
    ) -> Self {
        Self {
            price: price.into(),
            each_way_terms: each_way_terms.into(),
            finish_position,
        }
    }

    // --- Accessors ---

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn each_way_terms(&self) -> &Price {
        &self.each_way_terms
    }

    pub fn finish_position(&self) -> i32 {
        self.finish_position
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_position(self.finish_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_position() {
        assert_eq!(Outcome::from_position(1), Outcome::Won);
        assert_eq!(Outcome::from_position(2), Outcome::Placed);
        assert_eq!(Outcome::from_position(5), Outcome::Placed);
        assert_eq!(Outcome::from_position(0), Outcome::Lost);
        assert_eq!(Outcome::from_position(-1), Outcome::Void);
        assert_eq!(Outcome::from_position(-7), Outcome::Void);
    }

    #[test]
    fn test_runner_accessors() {
        let runner = Runner::new("9/2", "1/5", 3);
        assert_eq!(runner.price(), &Price::from("9/2"));
        assert_eq!(runner.each_way_terms(), &Price::from("1/5"));
        assert_eq!(runner.finish_position(), 3);
        assert_eq!(runner.outcome(), Outcome::Placed);
    }

    #[test]
    fn test_runner_deserializes_mixed_notations() {
        let json = r#"{"price": 2.5, "each_way_terms": "1/4", "finish_position": 1}"#;
        let runner: Runner = serde_json::from_str(json).unwrap();
        assert_eq!(runner.outcome(), Outcome::Won);
    }
}
