//! # wager-engine
//!
//! Bet settlement and odds conversion engine for multi-selection betting slips.
//!
//! Given a bet slip (type, stake, each-way flag) and the settled runners for
//! each selection, the engine enumerates every sub-bet the type implies and
//! computes total stake, returns, and profit. Prices may be supplied in
//! fractional, decimal, or moneyline (American) notation.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: the bet-type catalog, bet slips, runners
//! - **odds** — Price notation detection and conversion
//! - **engine** — Combination enumeration and settlement
//!
//! ## Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use wager_engine::core::bet_type::BetType;
//! use wager_engine::core::runner::Runner;
//! use wager_engine::core::slip::BetSlip;
//! use wager_engine::engine::settlement::SettlementEngine;
//!
//! let slip = BetSlip::new(BetType::Single, dec!(5));
//! let runners = [Runner::new("10/1", "1/4", 1)];
//!
//! let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
//! assert_eq!(result.returns, dec!(55));
//! assert_eq!(result.profit, dec!(50));
//! ```

pub mod core;
pub mod engine;
pub mod odds;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::bet_type::BetType;
    pub use crate::core::runner::{Outcome, Runner};
    pub use crate::core::slip::BetSlip;
    pub use crate::engine::settlement::{SettleError, SettlementEngine, SettlementResult};
    pub use crate::odds::converter::{convert, ConvertedOdds, OddsError};
    pub use crate::odds::price::{OddsFormat, Price};
}
