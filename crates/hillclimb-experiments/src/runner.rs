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

//! Batch execution of independent trials.
//!
//! Trials share nothing, so a batch may be split across worker threads. The
//! runner partitions the trial indices into contiguous chunks, one per
//! worker, runs every chunk on a scoped thread and concatenates the chunks
//! in index order. The output order is therefore the trial order regardless
//! of the worker count.
//!
//! Every trial gets its own `ChaCha8Rng`. With a base seed, trial `i` of
//! stream `s` is seeded from `seed + i` and placed on stream `s`, so a seeded
//! batch produces the same results for any number of workers. Without a seed
//! each generator is seeded from the OS.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::num::NonZeroUsize;
use tracing::debug;

/// Runs batches of trials sequentially or on scoped worker threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRunner {
    workers: NonZeroUsize,
    seed: Option<u64>,
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self::sequential(None)
    }
}

impl TrialRunner {
    /// Creates a runner that uses up to `workers` threads.
    #[inline]
    pub fn new(workers: NonZeroUsize, seed: Option<u64>) -> Self {
        Self { workers, seed }
    }

    /// Creates a runner that executes every trial on the calling thread.
    #[inline]
    pub fn sequential(seed: Option<u64>) -> Self {
        Self::new(NonZeroUsize::MIN, seed)
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the generator for trial `index` on `stream`.
    pub fn trial_rng(&self, stream: u64, index: usize) -> ChaCha8Rng {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => ChaCha8Rng::from_os_rng(),
        };
        rng.set_stream(stream);
        rng
    }

    /// Runs `trials` trials and returns their results in trial order.
    ///
    /// `trial` receives the trial index and the trial's own generator.
    pub fn run<T, F>(&self, stream: u64, trials: usize, trial: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize, &mut ChaCha8Rng) -> T + Sync,
    {
        let workers = self.workers.get().min(trials);
        if workers <= 1 {
            return self.run_range(stream, 0..trials, &trial);
        }

        let chunk = trials.div_ceil(workers);
        debug!(trials, workers, chunk, stream, "running trial batch in parallel");

        let trial = &trial;
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..trials)
                .step_by(chunk)
                .map(|start| {
                    let end = (start + chunk).min(trials);
                    scope.spawn(move || self.run_range(stream, start..end, trial))
                })
                .collect();

            let mut results = Vec::with_capacity(trials);
            for handle in handles {
                match handle.join() {
                    Ok(chunk) => results.extend(chunk),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            results
        })
    }

    fn run_range<T, F>(&self, stream: u64, range: std::ops::Range<usize>, trial: &F) -> Vec<T>
    where
        F: Fn(usize, &mut ChaCha8Rng) -> T,
    {
        range
            .map(|index| {
                let mut rng = self.trial_rng(stream, index);
                trial(index, &mut rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_results_are_in_trial_order() {
        for w in [1, 2, 3, 8, 64] {
            let runner = TrialRunner::new(workers(w), Some(0));
            let indices = runner.run(0, 17, |index, _rng| index);
            assert_eq!(indices, (0..17).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_seeded_batches_do_not_depend_on_worker_count() {
        let draw = |_index: usize, rng: &mut ChaCha8Rng| rng.random::<u64>();
        let sequential = TrialRunner::sequential(Some(123)).run(5, 20, draw);
        let parallel = TrialRunner::new(workers(4), Some(123)).run(5, 20, draw);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_streams_and_indices_give_distinct_generators() {
        let runner = TrialRunner::sequential(Some(1));
        let a = runner.trial_rng(0, 0).random::<u64>();
        let b = runner.trial_rng(1, 0).random::<u64>();
        let c = runner.trial_rng(0, 1).random::<u64>();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, runner.trial_rng(0, 0).random::<u64>());
    }

    #[test]
    fn test_empty_batch() {
        let runner = TrialRunner::new(workers(4), None);
        let results: Vec<usize> = runner.run(0, 0, |index, _rng| index);
        assert!(results.is_empty());
    }

    #[test]
    #[should_panic(expected = "trial 2 failed")]
    fn test_worker_panics_propagate() {
        let runner = TrialRunner::new(workers(2), Some(0));
        runner.run(0, 4, |index, _rng| {
            if index == 2 {
                panic!("trial 2 failed");
            }
            index
        });
    }
}
