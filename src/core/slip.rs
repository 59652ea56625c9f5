use crate::core::bet_type::BetType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bet slip: what was wagered, at what unit stake, and how.
///
/// The stake is the amount placed per line, not the total outlay. A
/// £2 each-way yankee, for instance, costs 2 × 11 × £2 = £44. Slips are
/// immutable once created; the settlement engine reads them alongside
/// the settled runners.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wager_engine::core::bet_type::BetType;
/// use wager_engine::core::slip::BetSlip;
///
/// let slip = BetSlip::new(BetType::Yankee, dec!(2)).with_each_way(true);
/// assert_eq!(slip.bet_type(), BetType::Yankee);
/// assert!(slip.each_way());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetSlip {
    /// Unique identifier for this slip.
    id: Uuid,
    /// The bet type being settled.
    bet_type: BetType,
    /// Stake per line.
    stake: Decimal,
    /// Whether the stake is doubled across win and place halves.
    each_way: bool,
    /// When this slip was created.
    placed_at: DateTime<Utc>,
    /// Optional reference or memo.
    reference: Option<String>,
}

impl BetSlip {
    /// Create a win-only slip with the given unit stake.
    pub fn new(bet_type: BetType, stake: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            bet_type,
            stake,
            each_way: false,
            placed_at: Utc::now(),
            reference: None,
        }
    }

    /// Create a slip with a specific ID (useful for testing / determinism).
    pub fn with_id(id: Uuid, bet_type: BetType, stake: Decimal) -> Self {
        Self {
            id,
            bet_type,
            stake,
            each_way: false,
            placed_at: Utc::now(),
            reference: None,
        }
    }

    /// Mark the slip each-way. Doubles the outlay: every line is staked
    /// once on the win half and once on the place half.
    pub fn with_each_way(mut self, each_way: bool) -> Self {
        self.each_way = each_way;
        self
    }

    /// Set a reference string.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bet_type(&self) -> BetType {
        self.bet_type
    }

    pub fn stake(&self) -> Decimal {
        self.stake
    }

    pub fn each_way(&self) -> bool {
        self.each_way
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Total outlay for this slip: stake × lines, doubled if each-way.
    pub fn total_stake(&self) -> Decimal {
        let halves = if self.each_way {
            Decimal::TWO
        } else {
            Decimal::ONE
        };
        self.stake * Decimal::from(self.bet_type.line_count()) * halves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_slip_defaults() {
        let slip = BetSlip::new(BetType::Treble, dec!(10));
        assert_eq!(slip.bet_type(), BetType::Treble);
        assert_eq!(slip.stake(), dec!(10));
        assert!(!slip.each_way());
        assert!(slip.reference().is_none());
    }

    #[test]
    fn test_slip_builders() {
        let slip = BetSlip::new(BetType::Patent, dec!(5))
            .with_each_way(true)
            .with_reference("acct-771");
        assert!(slip.each_way());
        assert_eq!(slip.reference(), Some("acct-771"));
    }

    #[test]
    fn test_slip_with_id_is_deterministic() {
        let id = Uuid::new_v4();
        let slip = BetSlip::with_id(id, BetType::Single, dec!(1));
        assert_eq!(slip.id(), id);
    }

    #[test]
    fn test_total_stake() {
        assert_eq!(BetSlip::new(BetType::Single, dec!(5)).total_stake(), dec!(5));
        assert_eq!(BetSlip::new(BetType::Trixie, dec!(10)).total_stake(), dec!(40));
        let ew_yankee = BetSlip::new(BetType::Yankee, dec!(2)).with_each_way(true);
        assert_eq!(ew_yankee.total_stake(), dec!(44));
    }
}
