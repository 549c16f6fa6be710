use criterion::{criterion_group, criterion_main, Criterion};
use nim::search::{plain, Searcher};
use nim::{GameState, WinMode};
use std::hint::black_box;

fn corpus() -> Vec<GameState> {
    (1..=8).flat_map(|red| (0..=8).map(move |blue| GameState::new(red, blue))).collect()
}

fn bench_alphabeta(c: &mut Criterion) {
    let states = corpus();

    for mode in [WinMode::Standard, WinMode::Misere] {
        let mut searcher = Searcher::new(mode);
        c.bench_function(&format!("alphabeta/{mode:?}/depth6"), |b| {
            b.iter(|| {
                let mut nodes = 0;
                for state in &states {
                    nodes += searcher.search(black_box(state), 6).nodes;
                }
                black_box(nodes)
            })
        });
    }
}

fn bench_plain(c: &mut Criterion) {
    let states = corpus();

    c.bench_function("plain/Standard/depth6", |b| {
        b.iter(|| {
            let mut nodes = 0;
            for state in &states {
                nodes += plain::best_move(black_box(state), 6, WinMode::Standard).nodes;
            }
            black_box(nodes)
        })
    });
}

criterion_group!(benches, bench_alphabeta, bench_plain);
criterion_main!(benches);
