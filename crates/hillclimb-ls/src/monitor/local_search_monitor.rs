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

//! Monitoring interface for local search runs.
//!
//! Callbacks for the lifecycle of one climb: start, each accepted or rejected
//! iteration, and the end. A monitor only observes. It cannot steer or stop a
//! climb; the stopping rules belong to the climbers themselves.
//!
//! The trait is generic over the state type `S` (a `Point2D` or a `Board`)
//! and the objective value type `V` (`f64` or an attack count).

use crate::stats::LocalSearchStatistics;

/// A monitor for local search algorithms.
pub trait LocalSearchMonitor<S, V>
where
    S: ?Sized,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once with the initial state and its objective value.
    fn on_start(&mut self, initial: &S, value: V);

    /// Called when an iteration strictly improves the current state.
    /// `current` is the new current state.
    fn on_accept(&mut self, current: &S, value: V, statistics: &LocalSearchStatistics);

    /// Called when an iteration ends without improvement.
    ///
    /// Receives the rejected candidate when the climber proposes one
    /// candidate per iteration, or the unchanged current state when it scans
    /// a whole neighbourhood per iteration.
    fn on_reject(&mut self, state: &S, value: V, statistics: &LocalSearchStatistics);

    /// Called once with the terminal state after the climb stopped.
    fn on_end(&mut self, best: &S, value: V, statistics: &LocalSearchStatistics);
}

impl<S, V> std::fmt::Debug for dyn LocalSearchMonitor<S, V>
where
    S: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalSearchMonitor {{ name: {} }}", self.name())
    }
}

impl<S, V> std::fmt::Display for dyn LocalSearchMonitor<S, V>
where
    S: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalSearchMonitor: {}", self.name())
    }
}

impl<S, V, M> LocalSearchMonitor<S, V> for &mut M
where
    S: ?Sized,
    M: LocalSearchMonitor<S, V> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_start(&mut self, initial: &S, value: V) {
        (**self).on_start(initial, value);
    }

    fn on_accept(&mut self, current: &S, value: V, statistics: &LocalSearchStatistics) {
        (**self).on_accept(current, value, statistics);
    }

    fn on_reject(&mut self, state: &S, value: V, statistics: &LocalSearchStatistics) {
        (**self).on_reject(state, value, statistics);
    }

    fn on_end(&mut self, best: &S, value: V, statistics: &LocalSearchStatistics) {
        (**self).on_end(best, value, statistics);
    }
}
