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

//! Single-trial entry points.
//!
//! These are the two calls a batch driver makes per trial. They validate the
//! raw parameters, build the climber, run it once without a monitor and
//! return only the terminal result. Callers that need statistics or a monitor
//! use the climbers directly.

use crate::{
    config::SearchConfig, continuous::ContinuousHillClimber, discrete::DiscreteHillClimber,
    monitor::no_op::NoOpMonitor,
};
use hillclimb_model::{
    error::InvalidConfiguration,
    solution::{EggholderTrialResult, NQueensTrialResult},
};
use rand::Rng;

/// Runs one Eggholder climb over `[-10000, 10000]^2`.
///
/// Returns an error if `max_no_improve` is zero or if `step_size` is not a
/// positive finite number.
pub fn run_eggholder_trial<R>(
    max_no_improve: u64,
    step_size: f64,
    rng: &mut R,
) -> Result<EggholderTrialResult, InvalidConfiguration>
where
    R: Rng + ?Sized,
{
    let config = SearchConfig::new(max_no_improve, step_size)?;
    let outcome = ContinuousHillClimber::new(config).run(rng, &mut NoOpMonitor);
    Ok(outcome.into_result())
}

/// Runs one N-Queens climb from a random `board_size x board_size` board.
///
/// Returns an error if `board_size` is zero.
pub fn run_nqueens_trial<R>(
    board_size: usize,
    rng: &mut R,
) -> Result<NQueensTrialResult, InvalidConfiguration>
where
    R: Rng + ?Sized,
{
    let climber = DiscreteHillClimber::new(board_size)?;
    Ok(climber.run(rng, &mut NoOpMonitor).into_result())
}
