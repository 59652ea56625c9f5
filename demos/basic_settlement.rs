//! Basic slip settlement example.
//!
//! Demonstrates settling a win single, an each-way single, and a
//! part-void double, plus odds conversion between notations.

use rust_decimal_macros::dec;
use wager_engine::core::bet_type::BetType;
use wager_engine::core::runner::Runner;
use wager_engine::core::slip::BetSlip;
use wager_engine::engine::settlement::SettlementEngine;
use wager_engine::odds::converter::convert;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  wager-engine: Basic Settlement Example    ║");
    println!("╚════════════════════════════════════════════╝\n");

    // --- Scenario 1: A simple win single ---
    println!("━━━ Scenario 1: Win Single ━━━\n");

    let slip = BetSlip::new(BetType::Single, dec!(5)).with_reference("acct-1017");
    let runners = [Runner::new("10/1", "1/4", 1)];
    let result = SettlementEngine::settle(&slip, Some(&runners)).expect("single settles");

    println!("£5 single at 10/1, won:");
    println!("  {}", result);
    println!();

    // --- Scenario 2: Each-way single, placed only ---
    println!("━━━ Scenario 2: Each-Way Single, Placed ━━━\n");

    let slip = BetSlip::new(BetType::Single, dec!(10)).with_each_way(true);
    let runners = [Runner::new("10/1", "1/4", 3)];
    let result = SettlementEngine::settle(&slip, Some(&runners)).expect("each-way settles");

    println!("£10 each-way single at 10/1 (1/4 odds a place), finished 3rd:");
    println!("  {}", result);
    println!();

    // --- Scenario 3: Double with a non-runner ---
    println!("━━━ Scenario 3: Double With a Non-Runner ━━━\n");

    let slip = BetSlip::new(BetType::Double, dec!(20));
    let runners = [Runner::new("3/1", "1/4", -1), Runner::new("4/1", "1/4", 1)];
    let result = SettlementEngine::settle(&slip, Some(&runners)).expect("double settles");

    println!("£20 double, first leg void, second won at 4/1:");
    println!("  {}", result);
    println!();

    // --- Scenario 4: One price, three notations ---
    println!("━━━ Scenario 4: Odds Conversion ━━━\n");

    for price in ["100/30", "2.5", "-400", "+225"] {
        let odds = convert(price).expect("board prices convert");
        println!(
            "  {:>7}  →  fractional {:>7}  decimal {:>7}  american {:>6}",
            price, odds.fractional, odds.decimal, odds.american
        );
    }
}
