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

use hillclimb_core::math::interval::ClosedInterval;

/// A candidate position `(x, y)` in a continuous two-dimensional search space.
///
/// Points are plain values: a move never edits a point in place, it produces
/// a new one, so an evaluated point can be held on to freely.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns this point translated by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns this point with each coordinate clamped into `bounds`.
    #[inline]
    pub fn clamped(&self, bounds: &ClosedInterval<f64>) -> Self {
        Self::new(bounds.clamp(self.x), bounds.clamp(self.y))
    }

    /// Returns `true` if both coordinates lie within `bounds`.
    #[inline]
    pub fn is_within(&self, bounds: &ClosedInterval<f64>) -> bool {
        bounds.contains(self.x) && bounds.contains(self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
