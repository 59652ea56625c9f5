use approx::abs_diff_eq;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wager_engine::core::bet_type::BetType;
use wager_engine::core::runner::Runner;
use wager_engine::core::slip::BetSlip;
use wager_engine::engine::settlement::SettlementEngine;
use wager_engine::odds::converter::convert;

/// Generate a random bet type from the full catalog.
fn arb_bet_type() -> impl Strategy<Value = BetType> {
    prop::sample::select(BetType::ALL.to_vec())
}

/// Generate a random unit stake with up to two decimal places.
fn arb_stake() -> impl Strategy<Value = Decimal> {
    (1u64..10_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Generate a random fractional price from a realistic board.
fn arb_price() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "1/4", "2/5", "1/2", "4/5", "1/1", "6/4", "2/1", "100/30", "7/2", "5/1", "10/1", "33/1",
        "100/1",
    ])
}

/// Generate place terms.
fn arb_terms() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["1/4", "1/5", "1/6"])
}

/// Generate a finishing position: won, placed, lost, or void.
fn arb_position() -> impl Strategy<Value = i32> {
    prop::sample::select(vec![1, 2, 3, 0, -1])
}

fn arb_runner() -> impl Strategy<Value = Runner> {
    (arb_price(), arb_terms(), arb_position())
        .prop_map(|(price, terms, position)| Runner::new(price, terms, position))
}

/// A full slip: type, stake, each-way flag, and a matching runner set.
fn arb_slip() -> impl Strategy<Value = (BetSlip, Vec<Runner>)> {
    (arb_bet_type(), arb_stake(), any::<bool>()).prop_flat_map(|(bet_type, stake, each_way)| {
        prop::collection::vec(arb_runner(), bet_type.selections()).prop_map(move |runners| {
            (
                BetSlip::new(bet_type, stake).with_each_way(each_way),
                runners,
            )
        })
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Total stake is stake × lines, doubled for each-way.
    //
    // Whatever the runners did, the outlay is fixed by the bet type.
    // ===================================================================
    #[test]
    fn total_stake_is_fixed_by_the_type((slip, runners) in arb_slip()) {
        let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        let halves = if slip.each_way() { dec!(2) } else { dec!(1) };
        prop_assert_eq!(
            result.total_stake,
            slip.stake() * Decimal::from(slip.bet_type().line_count()) * halves,
            "Outlay must not depend on results"
        );
    }

    // ===================================================================
    // INVARIANT 2: Profit is exactly returns minus total stake.
    // ===================================================================
    #[test]
    fn profit_is_returns_minus_stake((slip, runners) in arb_slip()) {
        let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        prop_assert_eq!(result.profit, result.returns - result.total_stake);
    }

    // ===================================================================
    // INVARIANT 3: Returns are never negative.
    //
    // The worst case is losing every line, which returns nothing; no
    // combination of results can return less than zero.
    // ===================================================================
    #[test]
    fn returns_never_negative((slip, runners) in arb_slip()) {
        let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        prop_assert!(result.returns >= Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 4: All legs void refunds the outlay exactly.
    // ===================================================================
    #[test]
    fn all_void_refunds_stake(
        bet_type in arb_bet_type(),
        stake in arb_stake(),
        each_way in any::<bool>(),
    ) {
        let slip = BetSlip::new(bet_type, stake).with_each_way(each_way);
        let runners = vec![Runner::new("5/1", "1/4", -1); bet_type.selections()];
        let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        prop_assert_eq!(result.returns, result.total_stake);
        prop_assert_eq!(result.profit, Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 5: All legs lost on a win-only slip returns nothing.
    // ===================================================================
    #[test]
    fn all_lost_returns_nothing(bet_type in arb_bet_type(), stake in arb_stake()) {
        let slip = BetSlip::new(bet_type, stake);
        let runners = vec![Runner::new("5/1", "1/4", 0); bet_type.selections()];
        let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        prop_assert_eq!(result.returns, Decimal::ZERO);
        prop_assert_eq!(result.profit, -result.total_stake);
    }

    // ===================================================================
    // INVARIANT 6: Settlement is deterministic.
    //
    // Settling the same slip twice produces identical results. No
    // hidden state survives a call.
    // ===================================================================
    #[test]
    fn settlement_is_deterministic((slip, runners) in arb_slip()) {
        let first = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        let second = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        prop_assert_eq!(first, second);
    }

    // ===================================================================
    // INVARIANT 7: A zero stake settles to the zero result.
    // ===================================================================
    #[test]
    fn zero_stake_settles_to_zero(bet_type in arb_bet_type(), each_way in any::<bool>()) {
        let slip = BetSlip::new(bet_type, Decimal::ZERO).with_each_way(each_way);
        let runners = vec![Runner::new("5/1", "1/4", 1); bet_type.selections()];
        let result = SettlementEngine::settle(&slip, Some(&runners)).unwrap();
        prop_assert_eq!(result.returns, Decimal::ZERO);
        prop_assert_eq!(result.total_stake, Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 8: Conversion round-trips through every notation.
    //
    // Converting a price and re-converting each rendering lands on the
    // same decimal, within the precision of the fractional scale.
    // ===================================================================
    #[test]
    fn conversion_round_trips(price in arb_price()) {
        let odds = convert(price).unwrap();
        let via_fraction = convert(odds.fractional.as_str()).unwrap();
        prop_assert_eq!(odds.decimal, via_fraction.decimal);

        // The moneyline rendering is rounded to a whole number, so allow
        // the error that rounding introduces.
        let via_american = convert(odds.american.as_str()).unwrap();
        let original = odds.decimal.to_f64().unwrap();
        let round_tripped = via_american.decimal.to_f64().unwrap();
        prop_assert!(
            abs_diff_eq!(original, round_tripped, epsilon = 0.01),
            "{} came back as {} via {}",
            original,
            round_tripped,
            odds.american
        );
    }

    // ===================================================================
    // INVARIANT 9: Detection never panics on arbitrary text.
    //
    // Garbage input must come back as an error, not a crash.
    // ===================================================================
    #[test]
    fn conversion_never_panics(input in "\\PC{0,12}") {
        let _ = convert(input.as_str());
    }
}
