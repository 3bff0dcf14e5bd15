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

//! # Hillclimb Local Search
//!
//! The two local-search climbers and the objectives they minimize.
//!
//! ## Climbers
//!
//! - `continuous`: `ContinuousHillClimber`, a single-trajectory stochastic
//!   climber over a bounded 2-D box. Each iteration proposes one uniformly
//!   perturbed point, accepts it only on strict improvement, and stops after
//!   `max_no_improve` consecutive rejections.
//! - `discrete`: `DiscreteHillClimber`, a steepest-descent climber for
//!   N-Queens. Each sweep scores every single-queen move, commits the best
//!   strictly improving one, and stops at the first sweep without improvement.
//!
//! ## Supporting modules
//!
//! - `eval`: The Eggholder landscape and the N-Queens attack count.
//! - `config`: `SearchConfig` for the continuous climber, validated on construction.
//! - `probe`: A scoped tentative edit of one board column that always reverts.
//! - `monitor`: Observers for the lifecycle of a climb (logging, tests).
//! - `stats` and `result`: Run statistics and the outcome wrapper.
//! - `trial`: The two entry points used by batch drivers.
//!
//! Randomness is never global: every climb takes a caller-owned `rand::Rng`,
//! so a seeded generator reproduces a trial exactly.

pub mod config;
pub mod continuous;
pub mod discrete;
pub mod eval;
pub mod monitor;
pub mod probe;
pub mod result;
pub mod stats;
pub mod trial;
