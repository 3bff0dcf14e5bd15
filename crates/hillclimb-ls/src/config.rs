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

//! Configuration of the continuous climber.
//!
//! A `SearchConfig` is validated once, on construction, and is read-only
//! afterwards; a climber holding one can never loop forever on a zero
//! patience or propose moves with a meaningless step size.

use hillclimb_core::math::interval::ClosedInterval;
use hillclimb_model::error::InvalidConfiguration;

/// Default number of consecutive non-improving proposals before a climb stops.
pub const DEFAULT_MAX_NO_IMPROVE: u64 = 100;

/// Default width of the uniform perturbation applied to each coordinate.
pub const DEFAULT_STEP_SIZE: f64 = 1.0;

/// Default half-width of the square search box `[-b, b]^2`.
pub const DEFAULT_BOUND: f64 = 10_000.0;

/// Parameters of a continuous hill climb.
///
/// * `max_no_improve`: consecutive rejected proposals allowed before termination.
/// * `step_size`: each coordinate is perturbed by a value drawn uniformly from
///   `[-step_size / 2, step_size / 2)`.
/// * `bounds`: both coordinates are clamped into this interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    max_no_improve: u64,
    step_size: f64,
    bounds: ClosedInterval<f64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_no_improve: DEFAULT_MAX_NO_IMPROVE,
            step_size: DEFAULT_STEP_SIZE,
            bounds: ClosedInterval::symmetric(DEFAULT_BOUND),
        }
    }
}

impl SearchConfig {
    /// Creates a configuration with the default search box.
    pub fn new(max_no_improve: u64, step_size: f64) -> Result<Self, InvalidConfiguration> {
        SearchConfigBuilder::new()
            .max_no_improve(max_no_improve)
            .step_size(step_size)
            .build()
    }

    /// Returns a builder initialised with the defaults.
    #[inline]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Returns the number of consecutive rejections that ends a climb.
    #[inline]
    pub fn max_no_improve(&self) -> u64 {
        self.max_no_improve
    }

    /// Returns the perturbation width.
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the per-coordinate bounds of the search box.
    #[inline]
    pub fn bounds(&self) -> ClosedInterval<f64> {
        self.bounds
    }
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchConfig(max_no_improve: {}, step_size: {}, bounds: {})",
            self.max_no_improve, self.step_size, self.bounds
        )
    }
}

/// Builder for `SearchConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfigBuilder {
    max_no_improve: u64,
    step_size: f64,
    lo: f64,
    hi: f64,
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfigBuilder {
    /// Creates a builder with the default parameters.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_no_improve: DEFAULT_MAX_NO_IMPROVE,
            step_size: DEFAULT_STEP_SIZE,
            lo: -DEFAULT_BOUND,
            hi: DEFAULT_BOUND,
        }
    }

    /// Sets the number of consecutive rejections that ends a climb.
    #[inline]
    pub fn max_no_improve(mut self, max_no_improve: u64) -> Self {
        self.max_no_improve = max_no_improve;
        self
    }

    /// Sets the perturbation width.
    #[inline]
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the per-coordinate bounds of the search box.
    #[inline]
    pub fn bounds(mut self, lo: f64, hi: f64) -> Self {
        self.lo = lo;
        self.hi = hi;
        self
    }

    /// Validates the parameters and builds the configuration.
    pub fn build(self) -> Result<SearchConfig, InvalidConfiguration> {
        if self.max_no_improve == 0 {
            return Err(InvalidConfiguration::ZeroPatience);
        }

        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(InvalidConfiguration::InvalidStepSize(self.step_size));
        }

        // The start point is sampled uniformly from the box, which needs a finite width.
        let bounds = ClosedInterval::try_new(self.lo, self.hi)
            .filter(|b| b.len().is_finite())
            .ok_or(InvalidConfiguration::InvalidBounds {
                lo: self.lo,
                hi: self.hi,
            })?;

        Ok(SearchConfig {
            max_no_improve: self.max_no_improve,
            step_size: self.step_size,
            bounds,
        })
    }
}
