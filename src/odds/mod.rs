//! Price notation detection and conversion between fractional, decimal,
//! and moneyline (American) odds.

pub mod converter;
pub mod price;
