use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use xgsim_terminal::config::SimConfig;
use xgsim_terminal::outcomes::aggregate;
use xgsim_terminal::simulate::simulate_chances;
use xgsim_terminal::summary::{rank_scores, summarize};

// A realistic shot list: 24 home chances from one match.
const HOME_CHANCES: [f64; 24] = [
    0.29, 0.07, 0.04, 0.09, 0.05, 0.06, 0.03, 0.04, 0.13, 0.01, 0.04, 0.05, 0.1, 0.12, 0.04,
    0.02, 0.13, 0.04, 0.15, 0.03, 0.05, 0.29, 0.16, 0.16,
];
const AWAY_CHANCES: [f64; 4] = [0.1, 0.06, 0.7, 0.06];

fn bench_simulate_chances(c: &mut Criterion) {
    let cfg = SimConfig::default();
    c.bench_function("simulate_chances_10k", |b| {
        b.iter(|| {
            let mut rng = cfg.rng();
            let goals =
                simulate_chances(&mut rng, black_box(cfg.n_trials), black_box(&HOME_CHANCES))
                    .unwrap();
            black_box(goals.len());
        })
    });
}

fn bench_aggregate_and_summarize(c: &mut Criterion) {
    let cfg = SimConfig::default();
    let mut rng = cfg.rng();
    let home = simulate_chances(&mut rng, cfg.n_trials, &HOME_CHANCES).unwrap();
    let away = simulate_chances(&mut rng, cfg.n_trials, &AWAY_CHANCES).unwrap();

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let rows = aggregate(black_box(&home), black_box(&away)).unwrap();
            black_box(rows.len());
        })
    });

    let rows = aggregate(&home, &away).unwrap();
    c.bench_function("summarize_10k", |b| {
        b.iter(|| {
            let summary = summarize(black_box(&rows), 0, 1).unwrap();
            black_box(summary.trials);
        })
    });

    c.bench_function("rank_scores_10k", |b| {
        b.iter(|| {
            let ranked = rank_scores(black_box(&rows));
            black_box(ranked.len());
        })
    });
}

criterion_group!(perf, bench_simulate_chances, bench_aggregate_and_summarize);
criterion_main!(perf);
