//! Tour of the full-cover bet types.
//!
//! Settles the same four-runner card as a fourfold, a yankee, and a
//! lucky 15 to show how coverage changes the outlay and the payout when
//! one leg is beaten.

use rust_decimal_macros::dec;
use wager_engine::core::bet_type::BetType;
use wager_engine::core::runner::Runner;
use wager_engine::core::slip::BetSlip;
use wager_engine::engine::settlement::SettlementEngine;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  wager-engine: Full Cover Tour             ║");
    println!("╚════════════════════════════════════════════╝\n");

    // Three winners and one beaten favourite
    let runners = [
        Runner::new("4/1", "1/4", 1),
        Runner::new("3/1", "1/4", 1),
        Runner::new("2/1", "1/4", 1),
        Runner::new("4/5", "1/4", 0),
    ];

    println!("Card: 4/1 won, 3/1 won, 2/1 won, 4/5 lost. £2 per line.\n");

    println!(
        "{:<10} {:>6} {:>12} {:>12} {:>12}",
        "TYPE", "LINES", "OUTLAY", "RETURNS", "PROFIT"
    );
    for bet_type in [BetType::Fourfold, BetType::Yankee, BetType::Lucky15] {
        let slip = BetSlip::new(bet_type, dec!(2));
        let result = SettlementEngine::settle(&slip, Some(&runners)).expect("card settles");
        println!(
            "{:<10} {:>6} {:>12} {:>12} {:>12}",
            bet_type.name(),
            result.num_bets,
            result.total_stake,
            result.returns,
            result.profit
        );
    }

    println!();
    println!("The fourfold dies with its beaten leg. The yankee keeps the");
    println!("three doubles and the treble on the winners, and the lucky 15");
    println!("adds their singles on top.");
    println!();

    // The whole catalog at a glance
    println!("━━━ Catalog ━━━\n");
    for bet_type in BetType::ALL {
        println!(
            "  {:<12} {} selections, {} lines",
            bet_type.name(),
            bet_type.selections(),
            bet_type.line_count()
        );
    }
}
