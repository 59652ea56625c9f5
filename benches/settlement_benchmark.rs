use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use wager_engine::core::bet_type::BetType;
use wager_engine::core::runner::Runner;
use wager_engine::core::slip::BetSlip;
use wager_engine::engine::settlement::SettlementEngine;
use wager_engine::odds::converter::convert;

fn winners(count: usize) -> Vec<Runner> {
    vec![Runner::new("5/1", "1/4", 1); count]
}

fn bench_settle_single(c: &mut Criterion) {
    let slip = BetSlip::new(BetType::Single, dec!(10));
    let runners = winners(1);

    c.bench_function("settle_single", |b| {
        b.iter(|| SettlementEngine::settle(black_box(&slip), black_box(Some(&runners))))
    });
}

fn bench_settle_yankee(c: &mut Criterion) {
    let slip = BetSlip::new(BetType::Yankee, dec!(10));
    let runners = winners(4);

    c.bench_function("settle_yankee", |b| {
        b.iter(|| SettlementEngine::settle(black_box(&slip), black_box(Some(&runners))))
    });
}

fn bench_settle_goliath(c: &mut Criterion) {
    let slip = BetSlip::new(BetType::Goliath, dec!(10));
    let runners = winners(8);

    c.bench_function("settle_goliath_247_lines", |b| {
        b.iter(|| SettlementEngine::settle(black_box(&slip), black_box(Some(&runners))))
    });
}

fn bench_settle_lucky255_each_way(c: &mut Criterion) {
    let slip = BetSlip::new(BetType::Lucky255, dec!(10)).with_each_way(true);
    let runners = winners(8);

    c.bench_function("settle_lucky255_each_way", |b| {
        b.iter(|| SettlementEngine::settle(black_box(&slip), black_box(Some(&runners))))
    });
}

fn bench_convert_fractional(c: &mut Criterion) {
    c.bench_function("convert_fractional", |b| {
        b.iter(|| convert(black_box("100/30")))
    });
}

criterion_group!(
    benches,
    bench_settle_single,
    bench_settle_yankee,
    bench_settle_goliath,
    bench_settle_lucky255_each_way,
    bench_convert_fractional
);
criterion_main!(benches);
