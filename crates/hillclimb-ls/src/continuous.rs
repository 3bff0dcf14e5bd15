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

//! Stochastic hill climbing over a bounded two-dimensional box.
//!
//! `ContinuousHillClimber` keeps a single current point. Every iteration
//! draws an offset for each coordinate uniformly from
//! `[-step_size / 2, step_size / 2)`, clamps the moved point back into the
//! search box and evaluates it. The candidate replaces the current point only
//! if its value is strictly lower; equal values count as a failure. The climb
//! stops once `max_no_improve` consecutive proposals have failed, and the
//! point held at that moment is returned. It is never worse than the start.
//!
//! The climber owns no randomness. Every draw comes from the generator passed
//! to `run`, in a fixed order: the start `x`, the start `y`, then `dx` and
//! `dy` for every iteration.

use crate::{
    config::SearchConfig,
    eval::{ContinuousObjective, Eggholder},
    monitor::local_search_monitor::LocalSearchMonitor,
    result::LocalSearchOutcome,
    stats::LocalSearchStatistics,
};
use hillclimb_model::{point::Point2D, solution::EggholderTrialResult};
use rand::Rng;

/// A single-trajectory stochastic climber that minimizes a `ContinuousObjective`.
#[derive(Debug, Clone)]
pub struct ContinuousHillClimber<O = Eggholder> {
    config: SearchConfig,
    objective: O,
}

impl ContinuousHillClimber<Eggholder> {
    /// Creates a climber over the Eggholder landscape.
    #[inline]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_objective(config, Eggholder::new())
    }
}

impl<O> ContinuousHillClimber<O>
where
    O: ContinuousObjective,
{
    /// Creates a climber over an arbitrary objective.
    #[inline]
    pub fn with_objective(config: SearchConfig, objective: O) -> Self {
        Self { config, objective }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the objective.
    #[inline]
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Runs one climb from a start point drawn uniformly from the search box.
    pub fn run<R, M>(
        &self,
        rng: &mut R,
        monitor: &mut M,
    ) -> LocalSearchOutcome<EggholderTrialResult>
    where
        R: Rng + ?Sized,
        M: LocalSearchMonitor<Point2D, f64> + ?Sized,
    {
        let bounds = self.config.bounds();
        let x = rng.random_range(bounds.start()..=bounds.end());
        let y = rng.random_range(bounds.start()..=bounds.end());
        self.run_from(Point2D::new(x, y), rng, monitor)
    }

    /// Runs one climb from `start`.
    ///
    /// A start outside the search box is clamped into it first.
    pub fn run_from<R, M>(
        &self,
        start: Point2D,
        rng: &mut R,
        monitor: &mut M,
    ) -> LocalSearchOutcome<EggholderTrialResult>
    where
        R: Rng + ?Sized,
        M: LocalSearchMonitor<Point2D, f64> + ?Sized,
    {
        let started_at = std::time::Instant::now();
        let bounds = self.config.bounds();
        let step_size = self.config.step_size();
        let patience = self.config.max_no_improve();

        let mut stats = LocalSearchStatistics::default();
        let mut current = start.clamped(&bounds);
        let mut current_value = self.objective.evaluate(current);
        stats.on_evaluation();
        monitor.on_start(&current, current_value);

        let mut no_improve: u64 = 0;
        while no_improve < patience {
            stats.on_iteration();

            let dx = (rng.random::<f64>() - 0.5) * step_size;
            let dy = (rng.random::<f64>() - 0.5) * step_size;
            let candidate = current.translated(dx, dy).clamped(&bounds);
            let candidate_value = self.objective.evaluate(candidate);
            stats.on_evaluation();

            if candidate_value < current_value {
                current = candidate;
                current_value = candidate_value;
                no_improve = 0;
                stats.on_accepted();
                monitor.on_accept(&current, current_value, &stats);
            } else {
                no_improve += 1;
                monitor.on_reject(&candidate, candidate_value, &stats);
            }
        }

        stats.set_total_time(started_at.elapsed());
        monitor.on_end(&current, current_value, &stats);

        LocalSearchOutcome::patience_exhausted(
            EggholderTrialResult::new(current, current_value),
            patience,
            stats,
        )
    }
}

impl<O> std::fmt::Display for ContinuousHillClimber<O>
where
    O: ContinuousObjective,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ContinuousHillClimber({}, {})",
            self.objective.name(),
            self.config
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eval::eggholder, monitor::no_op::NoOpMonitor, result::LocalSearchTerminationReason};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Replays a fixed list of `u64` values, cycling when exhausted.
    struct ScriptedRng {
        values: Vec<u64>,
        cursor: usize,
    }

    impl ScriptedRng {
        fn new(values: Vec<u64>) -> Self {
            Self { values, cursor: 0 }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    /// `x + y`: moving towards negative infinity always improves.
    struct Plane;

    impl ContinuousObjective for Plane {
        fn name(&self) -> &str {
            "Plane"
        }

        fn evaluate(&self, point: Point2D) -> f64 {
            point.x() + point.y()
        }
    }

    #[derive(Default)]
    struct Recorder {
        start: Option<f64>,
        accepted: Vec<(Point2D, f64)>,
        rejected: Vec<(Point2D, f64)>,
        end: Option<(Point2D, f64)>,
    }

    impl LocalSearchMonitor<Point2D, f64> for Recorder {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn on_start(&mut self, _initial: &Point2D, value: f64) {
            self.start = Some(value);
        }

        fn on_accept(&mut self, current: &Point2D, value: f64, _s: &LocalSearchStatistics) {
            self.accepted.push((*current, value));
        }

        fn on_reject(&mut self, state: &Point2D, value: f64, _s: &LocalSearchStatistics) {
            self.rejected.push((*state, value));
        }

        fn on_end(&mut self, best: &Point2D, value: f64, _s: &LocalSearchStatistics) {
            self.end = Some((*best, value));
        }
    }

    const LOW: u64 = 0;
    const HIGH: u64 = u64::MAX;

    fn plane_climber(max_no_improve: u64, step_size: f64) -> ContinuousHillClimber<Plane> {
        let config = SearchConfig::new(max_no_improve, step_size).unwrap();
        ContinuousHillClimber::with_objective(config, Plane)
    }

    #[test]
    fn test_patience_counter_resets_on_improvement() {
        let climber = plane_climber(3, 1.0);
        let mut rng = ScriptedRng::new(vec![
            LOW, LOW, HIGH, HIGH, HIGH, HIGH, LOW, LOW, HIGH, HIGH, HIGH, HIGH, HIGH, HIGH,
        ]);
        let mut recorder = Recorder::default();

        let outcome = climber.run_from(Point2D::new(0.0, 0.0), &mut rng, &mut recorder);

        assert_eq!(outcome.statistics().iterations, 7);
        assert_eq!(outcome.statistics().accepted, 2);
        assert_eq!(outcome.statistics().rejected(), 5);
        assert_eq!(outcome.statistics().evaluations, 8);
        assert_eq!(outcome.result().point(), Point2D::new(-1.0, -1.0));
        assert_eq!(outcome.result().value(), -2.0);
        assert_eq!(
            outcome.termination_reason(),
            &LocalSearchTerminationReason::PatienceExhausted(3)
        );
        assert_eq!(recorder.accepted.len(), 2);
        assert_eq!(recorder.rejected.len(), 5);
        assert_eq!(recorder.end, Some((Point2D::new(-1.0, -1.0), -2.0)));
    }

    #[test]
    fn test_only_rejections_returns_start_after_patience() {
        let climber = plane_climber(4, 1.0);
        let mut rng = ScriptedRng::new(vec![HIGH]);
        let mut recorder = Recorder::default();

        let outcome = climber.run_from(Point2D::new(0.0, 0.0), &mut rng, &mut recorder);

        assert_eq!(outcome.statistics().iterations, 4);
        assert_eq!(outcome.statistics().accepted, 0);
        assert_eq!(outcome.result().point(), Point2D::new(0.0, 0.0));
        assert_eq!(outcome.result().value(), 0.0);
        assert_eq!(recorder.rejected.len(), 4);
        for (candidate, value) in &recorder.rejected {
            assert!(candidate.x() > 0.49 && candidate.y() > 0.49);
            assert!(*value > 0.0);
        }
    }

    #[test]
    fn test_candidates_are_clamped_and_ties_rejected() {
        let climber = plane_climber(5, 1.0);
        let mut rng = ScriptedRng::new(vec![LOW]);

        let outcome = climber.run_from(Point2D::new(-9998.0, -9998.0), &mut rng, &mut NoOpMonitor);

        // Four half-steps reach the corner; every later proposal clamps onto it.
        assert_eq!(outcome.statistics().accepted, 4);
        assert_eq!(outcome.statistics().iterations, 9);
        assert_eq!(outcome.result().point(), Point2D::new(-10000.0, -10000.0));
        assert_eq!(outcome.result().value(), -20000.0);
    }

    #[test]
    fn test_start_outside_bounds_is_clamped() {
        let config = SearchConfig::builder()
            .max_no_improve(1)
            .step_size(1.0)
            .bounds(-1.0, 1.0)
            .build()
            .unwrap();
        let climber = ContinuousHillClimber::with_objective(config, Plane);
        let mut rng = ScriptedRng::new(vec![HIGH]);
        let mut recorder = Recorder::default();

        let outcome = climber.run_from(Point2D::new(50.0, -50.0), &mut rng, &mut recorder);

        assert_eq!(recorder.start, Some(0.0));
        assert_eq!(outcome.result().point(), Point2D::new(1.0, -1.0));
    }

    #[test]
    fn test_eggholder_climb_never_worsens_and_stays_in_bounds() {
        let config = SearchConfig::default();
        let climber = ContinuousHillClimber::new(config);
        let bounds = config.bounds();

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut recorder = Recorder::default();
            let outcome = climber.run(&mut rng, &mut recorder);
            let result = outcome.result();

            let initial = recorder.start.unwrap();
            assert!(result.value() <= initial);
            assert!(result.point().is_within(&bounds));
            assert_eq!(result.value(), eggholder(result.x(), result.y()));

            let mut previous = initial;
            for (point, value) in &recorder.accepted {
                assert!(*value < previous);
                assert!(point.is_within(&bounds));
                previous = *value;
            }
            for (point, _) in &recorder.rejected {
                assert!(point.is_within(&bounds));
            }

            // The last `max_no_improve` iterations are all rejections.
            assert!(outcome.statistics().rejected() >= config.max_no_improve());
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_climb() {
        let climber = ContinuousHillClimber::new(SearchConfig::new(50, 2.0).unwrap());

        let a = climber.run(&mut ChaCha8Rng::seed_from_u64(7), &mut NoOpMonitor);
        let b = climber.run(&mut ChaCha8Rng::seed_from_u64(7), &mut NoOpMonitor);

        assert_eq!(a.result(), b.result());
        assert_eq!(a.statistics().iterations, b.statistics().iterations);
    }

    #[test]
    fn test_display() {
        let climber = ContinuousHillClimber::new(SearchConfig::default());
        assert!(climber.to_string().starts_with("ContinuousHillClimber(Eggholder, "));
    }
}
