//! Foundational types: the bet-type catalog, bet slips, and runners.

pub mod bet_type;
pub mod runner;
pub mod slip;
