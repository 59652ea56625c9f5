use crate::core::bet_type::BetType;
use crate::core::runner::{Outcome, Runner};
use crate::core::slip::BetSlip;
use crate::odds::converter::{self, OddsError};
use crate::odds::price::Price;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors arising from settling a slip.
#[derive(Debug, Error)]
pub enum SettleError {
    /// The stake is negative.
    #[error("invalid stake: {0}")]
    InvalidStake(Decimal),
    /// The runner count does not match the bet type.
    #[error("{bet_type} needs {expected} runners, got {actual}")]
    WrongRunnerCount {
        bet_type: BetType,
        expected: usize,
        actual: usize,
    },
    /// A runner carried an unparseable price or place terms.
    #[error(transparent)]
    Price(#[from] OddsError),
}

/// The outcome of settling a slip: money out, money back, and the
/// difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Number of lines staked.
    pub num_bets: u32,
    /// Total outlay, rounded to cents.
    pub total_stake: Decimal,
    /// Total returned across all lines, rounded to cents.
    pub returns: Decimal,
    /// `returns - total_stake`. Negative when the slip lost money.
    pub profit: Decimal,
}

impl SettlementResult {
    /// The result of a slip that staked nothing.
    pub fn zero() -> Self {
        Self {
            num_bets: 0,
            total_stake: Decimal::ZERO,
            returns: Decimal::ZERO,
            profit: Decimal::ZERO,
        }
    }
}

impl fmt::Display for SettlementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bets, staked {}, returned {}, profit {}",
            self.num_bets, self.total_stake, self.returns, self.profit
        )
    }
}

/// A runner normalized for arithmetic: decimal price, place-terms
/// fraction, and outcome.
#[derive(Debug, Clone, Copy)]
struct Leg {
    price: Decimal,
    place_terms: Decimal,
    outcome: Outcome,
}

impl Leg {
    fn from_runner(runner: &Runner) -> Result<Self, SettleError> {
        Ok(Self {
            price: converter::convert(runner.price().clone())?.decimal,
            place_terms: place_terms_fraction(runner.each_way_terms())?,
            outcome: runner.outcome(),
        })
    }

    /// Multiplier this leg contributes to the win half of a line.
    fn win_factor(&self) -> Decimal {
        match self.outcome {
            Outcome::Won => self.price,
            Outcome::Void => Decimal::ONE,
            Outcome::Placed | Outcome::Lost => Decimal::ZERO,
        }
    }

    /// Multiplier this leg contributes to the place half of a line.
    /// A winner also places, at the reduced place odds.
    fn place_factor(&self) -> Decimal {
        match self.outcome {
            Outcome::Won | Outcome::Placed => {
                Decimal::ONE + (self.price - Decimal::ONE) * self.place_terms
            }
            Outcome::Void => Decimal::ONE,
            Outcome::Lost => Decimal::ZERO,
        }
    }
}

/// Place terms ride through the converter like any price: `"1/4"`, its
/// decimal form `1.25`, and `"-400"` all mean quarter-odds. The place
/// multiplier is the converted decimal minus 1.
fn place_terms_fraction(terms: &Price) -> Result<Decimal, SettleError> {
    Ok(converter::convert(terms.clone())?.decimal - Decimal::ONE)
}

/// Running totals while enumerating the lines of a slip. One accumulator
/// lives per `settle` call, so concurrent settlements never share state.
#[derive(Debug, Default)]
struct Accumulator {
    returns: Decimal,
}

/// Settles bet slips against their runners.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wager_engine::core::bet_type::BetType;
/// use wager_engine::core::runner::Runner;
/// use wager_engine::core::slip::BetSlip;
/// use wager_engine::engine::settlement::SettlementEngine;
///
/// let slip = BetSlip::new(BetType::Double, dec!(10));
/// let runners = [Runner::new("1/1", "1/4", 1), Runner::new("3/1", "1/4", 1)];
/// let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
/// assert_eq!(result.returns, dec!(80));
/// ```
pub struct SettlementEngine;

impl SettlementEngine {
    /// Settle a slip against its runners.
    ///
    /// A zero stake, or no runners supplied at all, settles to the zero
    /// result. A negative stake and a runner count that does not match
    /// the bet type are errors, checked in that order.
    pub fn settle(
        slip: &BetSlip,
        runners: Option<&[Runner]>,
    ) -> Result<SettlementResult, SettleError> {
        if slip.stake() < Decimal::ZERO {
            return Err(SettleError::InvalidStake(slip.stake()));
        }
        if slip.stake().is_zero() {
            return Ok(SettlementResult::zero());
        }
        let Some(runners) = runners else {
            return Ok(SettlementResult::zero());
        };
        let bet_type = slip.bet_type();
        if runners.len() != bet_type.selections() {
            return Err(SettleError::WrongRunnerCount {
                bet_type,
                expected: bet_type.selections(),
                actual: runners.len(),
            });
        }

        let legs = runners
            .iter()
            .map(Leg::from_runner)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "settling {} slip {} at stake {} ({} lines)",
            bet_type,
            slip.id(),
            slip.stake(),
            bet_type.line_count()
        );

        let mut acc = Accumulator::default();
        for size in 1..=legs.len() {
            if bet_type.stakes_size(size) {
                cover(slip, &legs, 0, size, Decimal::ONE, Decimal::ONE, &mut acc);
            }
        }

        let total_stake = round_to_cents(slip.total_stake());
        let returns = round_to_cents(acc.returns);
        Ok(SettlementResult {
            num_bets: bet_type.line_count(),
            total_stake,
            returns,
            profit: returns - total_stake,
        })
    }
}

/// Enumerate every `size`-selection combination of `legs[start..]`,
/// multiplying leg factors into the running win and place amounts, and
/// add each completed line's return to the accumulator.
fn cover(
    slip: &BetSlip,
    legs: &[Leg],
    start: usize,
    size: usize,
    win_running: Decimal,
    place_running: Decimal,
    acc: &mut Accumulator,
) {
    if size == 0 {
        acc.returns += slip.stake() * win_running;
        if slip.each_way() {
            acc.returns += slip.stake() * place_running;
        }
        return;
    }
    // A dead line stays dead; no leg factor can revive it.
    if win_running.is_zero() && (!slip.each_way() || place_running.is_zero()) {
        return;
    }
    for i in start..=legs.len() - size {
        cover(
            slip,
            legs,
            i + 1,
            size - 1,
            win_running * legs[i].win_factor(),
            place_running * legs[i].place_factor(),
            acc,
        );
    }
}

fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
