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

//! Terminal results of a single trial.
//!
//! One result is created when a climb terminates and is never modified
//! afterwards. They are the only values the experiment driver receives from
//! the search core.

use crate::{board::Board, point::Point2D};

/// The outcome of one continuous hill-climbing trial on the Eggholder landscape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggholderTrialResult {
    point: Point2D,
    value: f64,
}

impl EggholderTrialResult {
    /// Creates a new result from the last accepted point and its objective value.
    #[inline]
    pub const fn new(point: Point2D, value: f64) -> Self {
        Self { point, value }
    }

    /// Returns the last accepted point.
    #[inline]
    pub const fn point(&self) -> Point2D {
        self.point
    }

    /// Returns the final x-coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.point.x()
    }

    /// Returns the final y-coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.point.y()
    }

    /// Returns the objective value at the final point.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for EggholderTrialResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EggholderTrialResult(point: {}, value: {})", self.point, self.value)
    }
}

/// The outcome of one N-Queens hill-climbing trial.
///
/// `is_solution` is derived from `attacks == 0` at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NQueensTrialResult {
    board: Board,
    attacks: usize,
    is_solution: bool,
}

impl NQueensTrialResult {
    /// Creates a new result from the final board and its attack count.
    #[inline]
    pub fn new(board: Board, attacks: usize) -> Self {
        Self {
            board,
            attacks,
            is_solution: attacks == 0,
        }
    }

    /// Returns the final board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of attacking pairs on the final board.
    #[inline]
    pub fn attacks(&self) -> usize {
        self.attacks
    }

    /// Returns `true` if the final board has no attacking pairs.
    #[inline]
    pub fn is_solution(&self) -> bool {
        self.is_solution
    }
}

impl std::fmt::Display for NQueensTrialResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NQueensTrialResult(board: {}, attacks: {}, solution: {})",
            self.board, self.attacks, self.is_solution
        )
    }
}
