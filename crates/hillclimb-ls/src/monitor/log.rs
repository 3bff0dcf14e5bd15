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

//! Structured logging for local search runs.
//!
//! `TracingMonitor` turns the lifecycle of a climb into `tracing` events: one
//! `debug!` event at start and end, and a `trace!` event per accepted move.
//! Rejections are not logged unless explicitly enabled, since the continuous
//! climber rejects far more proposals than it accepts. The end of a climb can
//! additionally be reported at `info` level.

use crate::{monitor::local_search_monitor::LocalSearchMonitor, stats::LocalSearchStatistics};
use tracing::{debug, info, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingMonitor {
    label: String,
    log_rejections: bool,
    summary: bool,
}

impl TracingMonitor {
    /// Creates a new `TracingMonitor`; `label` is attached to every event.
    pub fn new<L>(label: L) -> Self
    where
        L: Into<String>,
    {
        Self {
            label: label.into(),
            log_rejections: false,
            summary: false,
        }
    }

    /// Also emit a `trace!` event for every rejected iteration.
    pub fn with_rejections(mut self, yes: bool) -> Self {
        self.log_rejections = yes;
        self
    }

    /// Also emit an `info!` event with the final value when the climb ends.
    pub fn with_summary(mut self, yes: bool) -> Self {
        self.summary = yes;
        self
    }

    /// Returns the label attached to every event.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for TracingMonitor {
    fn default() -> Self {
        Self::new("climb")
    }
}

impl<S, V> LocalSearchMonitor<S, V> for TracingMonitor
where
    S: std::fmt::Display + ?Sized,
    V: std::fmt::Display,
{
    fn name(&self) -> &str {
        "TracingMonitor"
    }

    fn on_start(&mut self, initial: &S, value: V) {
        debug!(label = %self.label, initial = %initial, value = %value, "climb started");
    }

    fn on_accept(&mut self, current: &S, value: V, statistics: &LocalSearchStatistics) {
        trace!(
            label = %self.label,
            iteration = statistics.iterations,
            state = %current,
            value = %value,
            "move accepted"
        );
    }

    fn on_reject(&mut self, state: &S, value: V, statistics: &LocalSearchStatistics) {
        if self.log_rejections {
            trace!(
                label = %self.label,
                iteration = statistics.iterations,
                state = %state,
                value = %value,
                "move rejected"
            );
        }
    }

    fn on_end(&mut self, best: &S, value: V, statistics: &LocalSearchStatistics) {
        debug!(
            label = %self.label,
            best = %best,
            value = %value,
            iterations = statistics.iterations,
            evaluations = statistics.evaluations,
            accepted = statistics.accepted,
            elapsed = ?statistics.time_total,
            "climb finished"
        );
        if self.summary {
            info!(
                label = %self.label,
                value = %value,
                accepted = statistics.accepted,
                "climb result"
            );
        }
    }
}
