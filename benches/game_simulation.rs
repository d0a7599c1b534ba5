use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twenty_one::rng::GameRng;
use twenty_one::simulation::{play_game, run_trials, summarize_trials_parallel};
use twenty_one::strategy::{stop_at, Louis, StrategySpec};

fn benchmark_single_game(c: &mut Criterion) {
    let mut rng = GameRng::new(Some(12345));

    c.bench_function("single_game_louis", |b| {
        b.iter(|| play_game(black_box(&stop_at(17)), black_box(&Louis), &mut rng))
    });
}

fn benchmark_multiple_games(c: &mut Criterion) {
    c.bench_function("10000_games", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(Some(42));
            run_trials(black_box(&Louis), black_box(&stop_at(17)), 10_000, &mut rng)
        })
    });
}

fn benchmark_parallel_games(c: &mut Criterion) {
    let player: StrategySpec = "both(louis, stop_at(15))".parse().expect("valid strategy");
    let house = StrategySpec::StopAt(17);

    c.bench_function("100000_games_parallel", |b| {
        b.iter(|| summarize_trials_parallel(black_box(&player), black_box(&house), 100_000, 7))
    });
}

fn benchmark_strategy_parsing(c: &mut Criterion) {
    c.bench_function("parse_strategy", |b| {
        b.iter(|| black_box("both(louis, both(stop_at(15), always_draw))").parse::<StrategySpec>())
    });
}

criterion_group!(
    benches,
    benchmark_single_game,
    benchmark_multiple_games,
    benchmark_parallel_games,
    benchmark_strategy_parsing
);
criterion_main!(benches);
