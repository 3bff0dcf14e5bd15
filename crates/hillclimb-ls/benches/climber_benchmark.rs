// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hillclimb_ls::config::SearchConfig;
use hillclimb_ls::continuous::ContinuousHillClimber;
use hillclimb_ls::discrete::DiscreteHillClimber;
use hillclimb_ls::eval::attack_count;
use hillclimb_ls::monitor::no_op::NoOpMonitor;
use hillclimb_model::board::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use std::num::NonZeroUsize;

fn bench_attack_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("attack_count");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for n in [8_usize, 16, 32, 64] {
        let Some(size) = NonZeroUsize::new(n) else {
            continue;
        };
        let board = Board::random(size, &mut rng);

        // One evaluation checks every unordered column pair.
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| attack_count(black_box(board.rows())))
        });
    }
    group.finish();
}

fn bench_nqueens_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("nqueens_climb");

    for n in [8_usize, 16, 32] {
        let climber = DiscreteHillClimber::new(n)
            .unwrap_or_else(|e| panic!("Benchmark configuration error: {}", e));

        group.bench_with_input(BenchmarkId::from_parameter(n), &climber, |b, climber| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let outcome = climber.run(&mut rng, &mut NoOpMonitor);
                black_box(outcome.result().attacks())
            })
        });
    }
    group.finish();
}

fn bench_eggholder_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("eggholder_climb");

    for (patience, step) in [(100_u64, 1.0_f64), (1000, 1.0), (100, 10.0)] {
        let config = SearchConfig::new(patience, step)
            .unwrap_or_else(|e| panic!("Benchmark configuration error: {}", e));
        let climber = ContinuousHillClimber::new(config);
        let label = format!("patience={}/step={}", patience, step);

        group.bench_with_input(BenchmarkId::from_parameter(label), &climber, |b, climber| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let outcome = climber.run(&mut rng, &mut NoOpMonitor);
                black_box(outcome.result().value())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_attack_count,
    bench_nqueens_climb,
    bench_eggholder_climb
);
criterion_main!(benches);
