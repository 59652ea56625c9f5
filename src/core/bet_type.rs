use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a bet-type name is not in the catalog.
#[derive(Debug, Error)]
#[error("unrecognised bet type: {0}")]
pub struct UnknownBetType(pub String);

/// The catalog of supported bet types.
///
/// Each type fixes the number of selections it covers and which combination
/// sizes are staked as separate sub-bets ("lines"):
///
/// - **Straight accumulators** (single through eightfold) stake one line:
///   the combination of every selection.
/// - **Full covers** (trixie, yankee, super yankee, heinz, super heinz,
///   goliath) stake every combination of two or more selections.
/// - **Full covers with singles** (patent and the lucky family) additionally
///   stake each selection on its own. The names give the line count away:
///   a Lucky 15 on four selections is 4 singles + 6 doubles + 4 trebles +
///   1 fourfold.
///
/// # Examples
///
/// ```
/// use wager_engine::core::bet_type::BetType;
///
/// assert_eq!(BetType::Trixie.selections(), 3);
/// assert_eq!(BetType::Trixie.line_count(), 4); // 3 doubles + 1 treble
/// assert_eq!(BetType::Lucky15.line_count(), 15);
/// assert_eq!(BetType::from_name("GOLIATH"), Some(BetType::Goliath));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetType {
    // The basics
    Single,
    Double,
    Treble,
    // Straight accumulators
    Fourfold,
    Fivefold,
    Sixfold,
    Sevenfold,
    Eightfold,
    // Full covers
    Trixie,
    Yankee,
    SuperYankee,
    Heinz,
    SuperHeinz,
    Goliath,
    // Full covers with singles
    Patent,
    Lucky15,
    Lucky31,
    Lucky63,
    Lucky127,
    Lucky255,
}

impl BetType {
    /// Every bet type in the catalog.
    pub const ALL: [BetType; 20] = [
        BetType::Single,
        BetType::Double,
        BetType::Treble,
        BetType::Fourfold,
        BetType::Fivefold,
        BetType::Sixfold,
        BetType::Sevenfold,
        BetType::Eightfold,
        BetType::Trixie,
        BetType::Yankee,
        BetType::SuperYankee,
        BetType::Heinz,
        BetType::SuperHeinz,
        BetType::Goliath,
        BetType::Patent,
        BetType::Lucky15,
        BetType::Lucky31,
        BetType::Lucky63,
        BetType::Lucky127,
        BetType::Lucky255,
    ];

    /// Number of selections this bet type covers.
    pub fn selections(&self) -> usize {
        match self {
            BetType::Single => 1,
            BetType::Double => 2,
            BetType::Treble | BetType::Trixie | BetType::Patent => 3,
            BetType::Fourfold | BetType::Yankee | BetType::Lucky15 => 4,
            BetType::Fivefold | BetType::SuperYankee | BetType::Lucky31 => 5,
            BetType::Sixfold | BetType::Heinz | BetType::Lucky63 => 6,
            BetType::Sevenfold | BetType::SuperHeinz | BetType::Lucky127 => 7,
            BetType::Eightfold | BetType::Goliath | BetType::Lucky255 => 8,
        }
    }

    /// Whether every combination size up to the selection count is staked,
    /// rather than only the full accumulator.
    pub fn is_full_cover(&self) -> bool {
        matches!(
            self,
            BetType::Trixie
                | BetType::Yankee
                | BetType::SuperYankee
                | BetType::Heinz
                | BetType::SuperHeinz
                | BetType::Goliath
                | BetType::Patent
                | BetType::Lucky15
                | BetType::Lucky31
                | BetType::Lucky63
                | BetType::Lucky127
                | BetType::Lucky255
        )
    }

    /// Whether single-selection combinations are staked.
    pub fn includes_singles(&self) -> bool {
        matches!(
            self,
            BetType::Single
                | BetType::Patent
                | BetType::Lucky15
                | BetType::Lucky31
                | BetType::Lucky63
                | BetType::Lucky127
                | BetType::Lucky255
        )
    }

    /// Whether a combination of `size` selections is staked as a line.
    ///
    /// A straight accumulator stakes only the combination of every
    /// selection. A full cover stakes sizes 2..=selections, plus size 1
    /// when singles are included. A single-selection type without singles
    /// coverage would stake nothing at all.
    pub fn stakes_size(&self, size: usize) -> bool {
        if self.selections() == 1 && !self.includes_singles() {
            return false;
        }
        if self.is_full_cover() {
            size <= self.selections() && (size > 1 || self.includes_singles())
        } else {
            size == self.selections()
        }
    }

    /// Number of lines (sub-bets) this type stakes.
    ///
    /// ```
    /// use wager_engine::core::bet_type::BetType;
    ///
    /// assert_eq!(BetType::Single.line_count(), 1);
    /// assert_eq!(BetType::Patent.line_count(), 7);
    /// assert_eq!(BetType::Goliath.line_count(), 247);
    /// assert_eq!(BetType::Lucky255.line_count(), 255);
    /// ```
    pub fn line_count(&self) -> u32 {
        let n = self.selections();
        (1..=n)
            .filter(|&k| self.stakes_size(k))
            .map(|k| binomial(n, k))
            .sum()
    }

    /// Canonical lowercase name, as used in slip data.
    pub fn name(&self) -> &'static str {
        match self {
            BetType::Single => "single",
            BetType::Double => "double",
            BetType::Treble => "treble",
            BetType::Fourfold => "fourfold",
            BetType::Fivefold => "fivefold",
            BetType::Sixfold => "sixfold",
            BetType::Sevenfold => "sevenfold",
            BetType::Eightfold => "eightfold",
            BetType::Trixie => "trixie",
            BetType::Yankee => "yankee",
            BetType::SuperYankee => "superyankee",
            BetType::Heinz => "heinz",
            BetType::SuperHeinz => "superheinz",
            BetType::Goliath => "goliath",
            BetType::Patent => "patent",
            BetType::Lucky15 => "lucky15",
            BetType::Lucky31 => "lucky31",
            BetType::Lucky63 => "lucky63",
            BetType::Lucky127 => "lucky127",
            BetType::Lucky255 => "lucky255",
        }
    }

    /// Look up a bet type by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BetType {
    type Err = UnknownBetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownBetType(s.to_string()))
    }
}

/// n choose k for the small values that arise here (n ≤ 8).
fn binomial(n: usize, k: usize) -> u32 {
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result as u32
}
