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

use num_traits::Float;

/// A closed interval `[lo, hi]` over a floating point type.
///
/// Both endpoints are finite and belong to the interval. The interval is the
/// box side of a continuous search space: candidates outside of it are pulled
/// back with [`ClosedInterval::clamp`], which saturates at the nearest endpoint
/// and never wraps around.
///
/// # Invariants
/// `lo <= hi`, and both bounds are finite.
///
/// # Examples
///
/// ```rust
/// # use hillclimb_core::math::interval::ClosedInterval;
///
/// let iv = ClosedInterval::new(-1.0, 1.0);
/// assert_eq!(iv.clamp(3.5), 1.0);
/// assert!(iv.contains(-1.0));
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct ClosedInterval<T>
where
    T: Float,
{
    lo: T,
    hi: T,
}

impl<T> ClosedInterval<T>
where
    T: Float,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or if either bound is not finite.
    #[inline]
    pub fn new(lo: T, hi: T) -> Self {
        assert!(
            lo.is_finite() && hi.is_finite() && lo <= hi,
            "Invalid interval: bounds must be finite and lo must be less than or equal to hi"
        );
        Self { lo, hi }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `lo > hi` or if either bound is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hillclimb_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0.0, 10.0).is_some());
    /// assert!(ClosedInterval::try_new(10.0, 0.0).is_none());
    /// assert!(ClosedInterval::try_new(0.0, f64::INFINITY).is_none());
    /// ```
    #[inline]
    pub fn try_new(lo: T, hi: T) -> Option<Self> {
        if lo.is_finite() && hi.is_finite() && lo <= hi {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    /// Creates the symmetric interval `[-radius, radius]`.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or not finite.
    #[inline]
    pub fn symmetric(radius: T) -> Self {
        Self::new(-radius, radius)
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn start(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn end(&self) -> T {
        self.hi
    }

    /// Returns the length `hi - lo` of the interval.
    #[inline]
    pub fn len(&self) -> T {
        self.hi - self.lo
    }

    /// Returns `true` if the interval consists of a single point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns `true` if `value` lies within `[lo, hi]`.
    ///
    /// `NaN` is never contained.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Clamps `value` into `[lo, hi]`.
    ///
    /// Values below `lo` map to `lo`, values above `hi` map to `hi`.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        self.lo.max(self.hi.min(value))
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosedInterval[{:?}, {:?}]", self.lo, self.hi)
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let iv = ClosedInterval::new(-2.0_f64, 6.0);
        assert_eq!(iv.start(), -2.0);
        assert_eq!(iv.end(), 6.0);
        assert_eq!(iv.len(), 8.0);
        assert!(!iv.is_degenerate());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panics_on_reversed_bounds() {
        let _ = ClosedInterval::new(1.0_f64, -1.0);
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panics_on_nan() {
        let _ = ClosedInterval::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(0.0_f64, 0.0).is_some());
        assert!(ClosedInterval::try_new(1.0_f64, 0.0).is_none());
        assert!(ClosedInterval::try_new(f64::NEG_INFINITY, 0.0).is_none());
    }

    #[test]
    fn test_symmetric() {
        let iv = ClosedInterval::symmetric(10_000.0_f64);
        assert_eq!(iv.start(), -10_000.0);
        assert_eq!(iv.end(), 10_000.0);
    }

    #[test]
    fn test_contains_includes_endpoints() {
        let iv = ClosedInterval::new(-1.0_f64, 1.0);
        assert!(iv.contains(-1.0));
        assert!(iv.contains(1.0));
        assert!(iv.contains(0.0));
        assert!(!iv.contains(1.000_001));
        assert!(!iv.contains(f64::NAN));
    }

    #[test]
    fn test_clamp_saturates_at_bounds() {
        let iv = ClosedInterval::new(-10.0_f64, 10.0);
        assert_eq!(iv.clamp(-10.5), -10.0);
        assert_eq!(iv.clamp(10.5), 10.0);
        assert_eq!(iv.clamp(3.25), 3.25);
        assert_eq!(iv.clamp(-10.0), -10.0);
    }

    #[test]
    fn test_degenerate_interval_clamps_to_point() {
        let iv = ClosedInterval::new(2.0_f32, 2.0);
        assert!(iv.is_degenerate());
        assert_eq!(iv.clamp(-100.0), 2.0);
        assert_eq!(iv.clamp(100.0), 2.0);
    }

    #[test]
    fn test_display() {
        let iv = ClosedInterval::new(-1.5_f64, 2.5);
        assert_eq!(format!("{}", iv), "[-1.5, 2.5]");
    }
}
