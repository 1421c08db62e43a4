//! Benchmarks for the advisor.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use holdem_advisor::cards::HandEvaluator;
use holdem_advisor::{
    Analyzer, Board, Card, EconomicState, EquityConfig, HoleCards, OpponentProfile, Position,
    SimulatedEquity,
};

fn hole(s: &str) -> HoleCards {
    s.parse().unwrap()
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn evaluate_7_benchmark(c: &mut Criterion) {
    let evaluator = HandEvaluator::new();
    let cards: Vec<Card> = holdem_advisor::cards::parse_cards("AhKh Qh Jc 7d 3s 2h").unwrap();

    c.bench_function("evaluate_7_cards", |b| {
        b.iter(|| evaluator.evaluate(black_box(&cards)))
    });
}

fn preflop_benchmark(c: &mut Criterion) {
    let analyzer = Analyzer::new(SimulatedEquity::default());
    let economics = EconomicState::new(3.0, 1.0, 100.0);
    let profile = OpponentProfile::default();
    let hand = hole("AhQd");

    c.bench_function("analyze_preflop", |b| {
        b.iter(|| {
            analyzer.analyze(
                black_box(&hand),
                &Board::new(),
                Position::CO,
                &economics,
                &profile,
                None,
            )
        })
    });
}

fn postflop_benchmark(c: &mut Criterion) {
    let analyzer = Analyzer::new(SimulatedEquity::new(EquityConfig::fast().with_seed(42)));
    let economics = EconomicState::new(20.0, 10.0, 200.0);
    let profile = OpponentProfile::default();
    let hand = hole("KdQd");

    let mut group = c.benchmark_group("analyze_postflop");
    group.sample_size(20);
    for (name, cards) in [("flop", "Qs 9d 4d"), ("turn", "Qs 9d 4d 2c"), ("river", "Qs 9d 4d 2c 7h")] {
        let b_board = board(cards);
        group.bench_function(name, |b| {
            b.iter(|| analyzer.analyze(black_box(&hand), &b_board, Position::BTN, &economics, &profile, None))
        });
    }
    group.finish();
}

criterion_group!(benches, evaluate_7_benchmark, preflop_benchmark, postflop_benchmark);
criterion_main!(benches);
