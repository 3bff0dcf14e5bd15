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

//! Steepest-descent hill climbing for N-Queens.
//!
//! `DiscreteHillClimber` scores the full single-queen-move neighbourhood of
//! the current board on every sweep. Columns are scanned in order and, inside
//! a column, every row other than the current one is tried. Each probe goes
//! through a `ColumnProbe`, so the board is back in its pre-sweep state once
//! the probe for a column is dropped. The sweep remembers the single move with
//! the lowest attack count seen anywhere in the neighbourhood; a later move
//! replaces it only if strictly better, so the first of several equally good
//! moves wins. After the sweep the remembered move is committed, or the climb
//! stops if no move beat the current count.
//!
//! There are no sideways moves and no restarts, so a trial may end on a local
//! optimum with attacks left. Apart from the initial board the climb is fully
//! deterministic.

use crate::{
    eval::attack_count,
    monitor::local_search_monitor::LocalSearchMonitor,
    probe::ColumnProbe,
    result::LocalSearchOutcome,
    stats::LocalSearchStatistics,
};
use hillclimb_model::{
    board::Board,
    error::InvalidConfiguration,
    index::{ColumnIndex, RowIndex},
    solution::NQueensTrialResult,
};
use rand::Rng;
use std::num::NonZeroUsize;

/// The best move found during one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BestMove {
    column: ColumnIndex,
    row: RowIndex,
    attacks: usize,
}

/// A steepest-descent climber over boards of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscreteHillClimber {
    board_size: NonZeroUsize,
}

impl DiscreteHillClimber {
    /// Creates a climber for `board_size x board_size` boards.
    ///
    /// Returns an error if `board_size` is zero.
    pub fn new(board_size: usize) -> Result<Self, InvalidConfiguration> {
        NonZeroUsize::new(board_size)
            .map(|board_size| Self { board_size })
            .ok_or(InvalidConfiguration::ZeroBoardSize)
    }

    /// Returns the board size.
    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size.get()
    }

    /// Runs one climb from a random board.
    ///
    /// The generator is only used to draw the initial board.
    pub fn run<R, M>(&self, rng: &mut R, monitor: &mut M) -> LocalSearchOutcome<NQueensTrialResult>
    where
        R: Rng + ?Sized,
        M: LocalSearchMonitor<Board, usize> + ?Sized,
    {
        self.run_from(Board::random(self.board_size, rng), monitor)
    }

    /// Runs one climb from `board`.
    ///
    /// # Panics
    ///
    /// Panics if the size of `board` differs from the climber's board size.
    pub fn run_from<M>(
        &self,
        mut board: Board,
        monitor: &mut M,
    ) -> LocalSearchOutcome<NQueensTrialResult>
    where
        M: LocalSearchMonitor<Board, usize> + ?Sized,
    {
        let size = self.board_size();
        assert_eq!(
            board.size(),
            size,
            "called `DiscreteHillClimber::run_from` with a board of size {} but the climber expects size {}",
            board.size(),
            size
        );

        let started_at = std::time::Instant::now();
        let mut stats = LocalSearchStatistics::default();
        let mut current_attacks = attack_count(board.rows());
        stats.on_evaluation();
        monitor.on_start(&board, current_attacks);

        loop {
            stats.on_iteration();

            match Self::sweep(&mut board, current_attacks, &mut stats) {
                Some(best) => {
                    board.set_row(best.column, best.row);
                    current_attacks = best.attacks;
                    stats.on_accepted();
                    monitor.on_accept(&board, current_attacks, &stats);
                }
                None => {
                    monitor.on_reject(&board, current_attacks, &stats);
                    break;
                }
            }
        }

        stats.set_total_time(started_at.elapsed());
        monitor.on_end(&board, current_attacks, &stats);

        LocalSearchOutcome::local_optimum(NQueensTrialResult::new(board, current_attacks), stats)
    }

    /// Scores every single-queen move of `board` and returns the best one if
    /// it beats `current_attacks`. The board is unchanged on return.
    fn sweep(
        board: &mut Board,
        current_attacks: usize,
        stats: &mut LocalSearchStatistics,
    ) -> Option<BestMove> {
        let size = board.size();
        let mut best: Option<BestMove> = None;
        let mut best_attacks = current_attacks;

        for column in ColumnIndex::range(size) {
            let mut probe = ColumnProbe::new(board, column);
            let original = probe.original_row();

            for row in RowIndex::range(size) {
                if row == original {
                    continue;
                }

                let attacks = attack_count(probe.try_row(row));
                stats.on_evaluation();

                if attacks < best_attacks {
                    best_attacks = attacks;
                    best = Some(BestMove {
                        column,
                        row,
                        attacks,
                    });
                }
            }
        }

        best
    }
}

impl std::fmt::Display for DiscreteHillClimber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiscreteHillClimber(N = {})", self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::no_op::NoOpMonitor, result::LocalSearchTerminationReason};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct Recorder {
        start: Option<usize>,
        accepted: Vec<usize>,
        rejected: usize,
        end: Option<(Board, usize)>,
    }

    impl LocalSearchMonitor<Board, usize> for Recorder {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn on_start(&mut self, initial: &Board, value: usize) {
            assert_eq!(attack_count(initial.rows()), value);
            self.start = Some(value);
        }

        fn on_accept(&mut self, current: &Board, value: usize, _s: &LocalSearchStatistics) {
            assert_eq!(attack_count(current.rows()), value);
            self.accepted.push(value);
        }

        fn on_reject(&mut self, _state: &Board, _value: usize, _s: &LocalSearchStatistics) {
            self.rejected += 1;
        }

        fn on_end(&mut self, best: &Board, value: usize, _s: &LocalSearchStatistics) {
            self.end = Some((best.clone(), value));
        }
    }

    fn board(rows: &[usize]) -> Board {
        Board::from_rows(rows.iter().copied()).unwrap()
    }

    fn is_local_optimum(board: &Board, attacks: usize) -> bool {
        let mut working = board.clone();
        let size = working.size();
        for column in ColumnIndex::range(size) {
            let mut probe = ColumnProbe::new(&mut working, column);
            for row in RowIndex::range(size) {
                if attack_count(probe.try_row(row)) < attacks {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_zero_board_size_is_rejected() {
        assert_eq!(
            DiscreteHillClimber::new(0),
            Err(InvalidConfiguration::ZeroBoardSize)
        );
    }

    #[test]
    fn test_single_queen_is_an_immediate_solution() {
        let climber = DiscreteHillClimber::new(1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let outcome = climber.run(&mut rng, &mut NoOpMonitor);

        assert!(outcome.result().is_solution());
        assert_eq!(outcome.result().attacks(), 0);
        assert_eq!(outcome.result().board(), &board(&[0]));
        assert_eq!(outcome.statistics().iterations, 1);
        assert_eq!(outcome.statistics().accepted, 0);
        assert_eq!(
            outcome.termination_reason(),
            &LocalSearchTerminationReason::LocalOptimum
        );
    }

    #[test]
    fn test_solution_is_left_unchanged() {
        let climber = DiscreteHillClimber::new(8).unwrap();
        let solution = board(&[0, 4, 7, 5, 2, 6, 1, 3]);
        let outcome = climber.run_from(solution.clone(), &mut NoOpMonitor);

        assert_eq!(outcome.result().board(), &solution);
        assert!(outcome.result().is_solution());
        assert_eq!(outcome.statistics().accepted, 0);
    }

    #[test]
    fn test_two_by_two_has_no_improving_move() {
        let climber = DiscreteHillClimber::new(2).unwrap();
        let outcome = climber.run_from(board(&[0, 0]), &mut NoOpMonitor);

        assert_eq!(outcome.result().board(), &board(&[0, 0]));
        assert_eq!(outcome.result().attacks(), 1);
        assert!(!outcome.result().is_solution());
    }

    #[test]
    fn test_sweeps_commit_the_first_strictly_best_move() {
        // Sweep 1 from [1, 1, 1] (3 attacks): the first 2-attack move is
        // column 0 to row 0. Sweep 2 finds column 1 to row 2 (1 attack).
        // Sweep 3 finds nothing below 1.
        let climber = DiscreteHillClimber::new(3).unwrap();
        let mut recorder = Recorder::default();
        let outcome = climber.run_from(board(&[1, 1, 1]), &mut recorder);

        assert_eq!(recorder.start, Some(3));
        assert_eq!(recorder.accepted, vec![2, 1]);
        assert_eq!(recorder.rejected, 1);
        assert_eq!(recorder.end, Some((board(&[0, 2, 1]), 1)));
        assert_eq!(outcome.result().board(), &board(&[0, 2, 1]));
        assert_eq!(outcome.statistics().iterations, 3);
        assert_eq!(outcome.statistics().accepted, 2);
        assert_eq!(outcome.statistics().evaluations, 1 + 3 * 3 * 2);
    }

    #[test]
    fn test_random_climbs_end_on_local_optima_without_worsening() {
        let climber = DiscreteHillClimber::new(6).unwrap();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut recorder = Recorder::default();
            let outcome = climber.run(&mut rng, &mut recorder);
            let result = outcome.result();

            let initial = recorder.start.unwrap();
            assert!(result.attacks() <= initial);
            assert_eq!(attack_count(result.board().rows()), result.attacks());
            assert!(is_local_optimum(result.board(), result.attacks()));
            assert_eq!(result.is_solution(), result.attacks() == 0);

            let mut previous = initial;
            for &value in &recorder.accepted {
                assert!(value < previous);
                previous = value;
            }
        }
    }

    #[test]
    fn test_eight_queens_finds_solutions_regularly() {
        // Plain steepest descent solves roughly one random 8-queens board in
        // seven, so 200 climbs average about 28 solutions. The floor sits
        // more than two standard deviations below that.
        let climber = DiscreteHillClimber::new(8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        let solved = (0..200)
            .filter(|_| climber.run(&mut rng, &mut NoOpMonitor).result().is_solution())
            .count();
        assert!(solved >= 16, "only {} of 200 climbs solved 8-queens", solved);
    }

    #[test]
    #[should_panic(expected = "called `DiscreteHillClimber::run_from` with a board of size 2")]
    fn test_run_from_rejects_mismatched_board() {
        let climber = DiscreteHillClimber::new(3).unwrap();
        climber.run_from(board(&[0, 1]), &mut NoOpMonitor);
    }

    #[test]
    fn test_display() {
        let climber = DiscreteHillClimber::new(8).unwrap();
        assert_eq!(climber.to_string(), "DiscreteHillClimber(N = 8)");
    }
}
