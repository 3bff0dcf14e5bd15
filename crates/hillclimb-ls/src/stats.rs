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

//! Statistics reporting for local search runs.
//!
//! A lightweight container for the counters a climb maintains: iterations,
//! objective evaluations, accepted moves and total elapsed time. What an
//! "iteration" is depends on the climber: one proposed point for the
//! continuous climber, one full neighbourhood sweep for the discrete one.
//! Counters saturate instead of overflowing.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalSearchStatistics {
    /// Number of iterations performed.
    pub iterations: u64,

    /// Number of objective evaluations, including the initial state.
    pub evaluations: u64,

    /// Number of iterations that ended in a strict improvement.
    pub accepted: u64,

    /// Total time taken by the climb.
    pub time_total: Duration,
}

impl Default for LocalSearchStatistics {
    fn default() -> Self {
        Self {
            iterations: 0,
            evaluations: 0,
            accepted: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl LocalSearchStatistics {
    /// Called at the start of each iteration.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called for each objective evaluation.
    #[inline]
    pub fn on_evaluation(&mut self) {
        self.evaluations = self.evaluations.saturating_add(1);
    }

    /// Called when an iteration improves the current state.
    #[inline]
    pub fn on_accepted(&mut self) {
        self.accepted = self.accepted.saturating_add(1);
    }

    /// Sets the total time taken by the climb.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the number of iterations that did not improve the current state.
    #[inline]
    pub fn rejected(&self) -> u64 {
        self.iterations.saturating_sub(self.accepted)
    }
}

impl std::fmt::Display for LocalSearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hillclimb Statistics:")?;
        writeln!(f, "   Iterations:   {}", self.iterations)?;
        writeln!(f, "   Evaluations:  {}", self.evaluations)?;
        writeln!(f, "   Accepted:     {}", self.accepted)?;
        writeln!(f, "   Rejected:     {}", self.rejected())?;
        writeln!(f, "   Total Time:   {:?}", self.time_total)?;
        Ok(())
    }
}
