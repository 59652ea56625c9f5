//! Combination enumeration and bet settlement.

pub mod settlement;
