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

//! Objective evaluation for local search.
//!
//! Both landscapes searched by this crate are minimized. The continuous side
//! is abstracted behind `ContinuousObjective` so the climber can be driven by
//! any pure function of a point; the Eggholder function is the one used in
//! experiments. Its surface is highly multimodal, which is why the continuous
//! climber terminates on patience instead of on a fixed iteration budget.
//!
//! The discrete side is the N-Queens attack count. It is scored from scratch
//! for every probed neighbour: each unordered column pair is checked for a
//! shared row and for a shared diagonal, and each triggered condition adds one.
//! Because columns are distinct, a pair sharing a row has row distance zero
//! and can never also satisfy the diagonal test, so no pair contributes twice.

use hillclimb_model::{index::RowIndex, point::Point2D};

/// A pure, deterministic objective over a two-dimensional real domain.
pub trait ContinuousObjective: Send + Sync {
    /// Returns the name of the objective.
    fn name(&self) -> &str;

    /// Evaluates the objective at `point`. Lower is better.
    fn evaluate(&self, point: Point2D) -> f64;
}

impl std::fmt::Debug for dyn ContinuousObjective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContinuousObjective {{ name: {} }}", self.name())
    }
}

/// The Eggholder benchmark function:
///
/// $$ f(x, y) = -(y + 47)\sin\sqrt{|x/2 + (y + 47)|} - x\sin\sqrt{|x - (y + 47)|} $$
///
/// Total over all finite inputs: the absolute values keep the square roots real.
///
/// # Examples
///
/// ```rust
/// # use hillclimb_ls::eval::eggholder;
/// let v = eggholder(512.0, 404.2319);
/// assert!((v - (-959.6407)).abs() < 1e-3);
/// ```
#[inline]
pub fn eggholder(x: f64, y: f64) -> f64 {
    let shifted = y + 47.0;
    -shifted * (x / 2.0 + shifted).abs().sqrt().sin() - x * (x - shifted).abs().sqrt().sin()
}

/// The Eggholder landscape as a `ContinuousObjective`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Eggholder;

impl Eggholder {
    /// Creates a new Eggholder objective.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl ContinuousObjective for Eggholder {
    fn name(&self) -> &str {
        "Eggholder"
    }

    #[inline]
    fn evaluate(&self, point: Point2D) -> f64 {
        eggholder(point.x(), point.y())
    }
}

impl std::fmt::Display for Eggholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Eggholder")
    }
}

/// Counts the attacking queen pairs on a board given as one row per column.
///
/// For every unordered column pair `(i, j)` with `i < j`, one is added if the
/// queens share a row and one is added if they share a diagonal
/// (`|row_i - row_j| == j - i`). The two checks are independent.
///
/// # Examples
///
/// ```rust
/// # use hillclimb_ls::eval::attack_count;
/// # use hillclimb_model::index::RowIndex;
/// let rows: Vec<RowIndex> = [0, 0, 1].into_iter().map(RowIndex::new).collect();
/// // (0, 1) share a row, (1, 2) share a diagonal.
/// assert_eq!(attack_count(&rows), 2);
/// ```
pub fn attack_count(rows: &[RowIndex]) -> usize {
    let mut attacks = 0;
    for (i, &a) in rows.iter().enumerate() {
        for (offset, &b) in rows[i + 1..].iter().enumerate() {
            let column_distance = offset + 1;
            if a == b {
                attacks += 1;
            }
            if a.abs_diff(b) == column_distance {
                attacks += 1;
            }
        }
    }
    attacks
}
