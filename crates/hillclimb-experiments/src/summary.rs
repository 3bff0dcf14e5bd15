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

//! Aggregates over a batch of trial results.

use hillclimb_model::solution::{EggholderTrialResult, NQueensTrialResult};

/// Distribution of the minima found by a batch of Eggholder climbs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggholderSummary {
    pub trials: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

impl EggholderSummary {
    /// Summarizes `results`, or returns `None` if there are none.
    pub fn from_results(results: &[EggholderTrialResult]) -> Option<Self> {
        let first = results.first()?.value();
        let (best, worst, sum) = results.iter().map(|r| r.value()).fold(
            (first, first, 0.0),
            |(best, worst, sum), v| (best.min(v), worst.max(v), sum + v),
        );

        Some(Self {
            trials: results.len(),
            best,
            mean: sum / results.len() as f64,
            worst,
        })
    }
}

impl std::fmt::Display for EggholderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Eggholder Summary:")?;
        writeln!(f, "   Trials:       {}", self.trials)?;
        writeln!(f, "   Best:         {:.4}", self.best)?;
        writeln!(f, "   Mean:         {:.4}", self.mean)?;
        writeln!(f, "   Worst:        {:.4}", self.worst)?;
        Ok(())
    }
}

/// How often a batch of N-Queens climbs reached zero attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NQueensSummary {
    pub board_size: usize,
    pub trials: usize,
    pub solutions: usize,
    /// Lowest attack count over all trials.
    pub fewest_attacks: usize,
}

impl NQueensSummary {
    /// Summarizes `results` for boards of `board_size`.
    pub fn from_results(board_size: usize, results: &[NQueensTrialResult]) -> Self {
        Self {
            board_size,
            trials: results.len(),
            solutions: results.iter().filter(|r| r.is_solution()).count(),
            fewest_attacks: results.iter().map(|r| r.attacks()).min().unwrap_or(0),
        }
    }

    /// Fraction of trials that ended on a solution; zero for an empty batch.
    #[inline]
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.solutions as f64 / self.trials as f64
    }
}

impl std::fmt::Display for NQueensSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "N = {}: {} / {} solved ({:.1}%), fewest attacks {}",
            self.board_size,
            self.solutions,
            self.trials,
            self.success_rate() * 100.0,
            self.fewest_attacks
        )
    }
}
