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

//! Configuration errors.
//!
//! Both climbers are total over their valid inputs, so the only failure a
//! caller can observe is handing them a configuration that makes no sense:
//! an empty board, a patience of zero (the loop would never propose a move),
//! or a step size that is not a positive finite number. These are reported
//! eagerly by the constructors instead of surfacing as an empty result or a
//! loop that never ends.

use crate::index::{ColumnIndex, RowIndex};
use thiserror::Error;

/// The error type for rejected search and experiment configurations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    /// The allowed number of consecutive non-improving proposals is zero.
    #[error("max_no_improve must be positive")]
    ZeroPatience,

    /// The perturbation step size is zero, negative, or not finite.
    #[error("step_size must be a positive finite number, got {0}")]
    InvalidStepSize(f64),

    /// The search box bounds are reversed or not finite.
    #[error("search bounds must be finite with lo <= hi, got [{lo}, {hi}]")]
    InvalidBounds { lo: f64, hi: f64 },

    /// The N-Queens board has no columns.
    #[error("board size must be positive")]
    ZeroBoardSize,

    /// A queen was placed on a row outside of `0..size`.
    #[error("{row} in {column} is out of range for a board of size {size}")]
    RowOutOfRange {
        column: ColumnIndex,
        row: RowIndex,
        size: usize,
    },

    /// A batch was requested with zero trials.
    #[error("number of trials must be positive")]
    ZeroTrials,

    /// A batch was requested with zero workers.
    #[error("number of workers must be positive")]
    ZeroWorkers,
}
