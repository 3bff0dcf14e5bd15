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

//! Local search outcome and termination reporting.
//!
//! `LocalSearchOutcome` bundles the terminal result of a climb with the run
//! statistics and the reason the climb stopped. Neither climber can fail or be
//! cancelled once started, so the reason only records which stopping rule
//! fired.

use crate::stats::LocalSearchStatistics;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocalSearchTerminationReason {
    /// The configured number of consecutive proposals was rejected.
    PatienceExhausted(u64),

    /// A full neighbourhood sweep found no strictly improving move.
    LocalOptimum,
}

impl std::fmt::Display for LocalSearchTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalSearchTerminationReason::PatienceExhausted(n) => {
                write!(f, "Patience Exhausted after {} rejections", n)
            }
            LocalSearchTerminationReason::LocalOptimum => write!(f, "Local Optimum Reached"),
        }
    }
}

/// Result of a climb after termination.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchOutcome<R> {
    result: R,
    termination_reason: LocalSearchTerminationReason,
    statistics: LocalSearchStatistics,
}

impl<R> LocalSearchOutcome<R> {
    /// Creates an outcome for a climb stopped by its patience counter.
    #[inline]
    pub fn patience_exhausted(
        result: R,
        max_no_improve: u64,
        statistics: LocalSearchStatistics,
    ) -> Self {
        Self {
            result,
            termination_reason: LocalSearchTerminationReason::PatienceExhausted(max_no_improve),
            statistics,
        }
    }

    /// Creates an outcome for a climb that reached a local optimum.
    #[inline]
    pub fn local_optimum(result: R, statistics: LocalSearchStatistics) -> Self {
        Self {
            result,
            termination_reason: LocalSearchTerminationReason::LocalOptimum,
            statistics,
        }
    }

    /// Returns the terminal result.
    #[inline]
    pub fn result(&self) -> &R {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &LocalSearchTerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &LocalSearchStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the terminal result.
    #[inline]
    pub fn into_result(self) -> R {
        self.result
    }
}
