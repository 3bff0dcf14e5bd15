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

use crate::{monitor::local_search_monitor::LocalSearchMonitor, stats::LocalSearchStatistics};

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<S, V> LocalSearchMonitor<S, V> for NoOpMonitor
where
    S: ?Sized,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn on_start(&mut self, _initial: &S, _value: V) {}

    #[inline(always)]
    fn on_accept(&mut self, _current: &S, _value: V, _statistics: &LocalSearchStatistics) {}

    #[inline(always)]
    fn on_reject(&mut self, _state: &S, _value: V, _statistics: &LocalSearchStatistics) {}

    #[inline(always)]
    fn on_end(&mut self, _best: &S, _value: V, _statistics: &LocalSearchStatistics) {}
}
