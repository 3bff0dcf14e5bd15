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

//! The two experiments and the full study.
//!
//! An experiment is a batch of independent trials of one climber with one
//! parameter set. `run_study` runs the Eggholder experiment and one N-Queens
//! experiment per board size, writes every table through a `CsvSink` and
//! returns the summaries. A persistence error aborts the study.

use crate::{
    config::ExperimentConfig,
    error::ExperimentError,
    record::{EggholderRecord, NQueensRecord, SuccessRecord},
    runner::TrialRunner,
    sink::CsvSink,
    summary::{EggholderSummary, NQueensSummary},
};
use hillclimb_ls::{
    config::SearchConfig, continuous::ContinuousHillClimber, discrete::DiscreteHillClimber,
    monitor::log::TracingMonitor,
};
use hillclimb_model::{
    error::InvalidConfiguration,
    solution::{EggholderTrialResult, NQueensTrialResult},
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Generator stream of the Eggholder experiment. N-Queens experiments use
/// their board size, so no two experiments share a stream.
const EGGHOLDER_STREAM: u64 = 0;

/// Per-move events of trial `index`, labelled with its one-based run number.
fn trial_monitor(index: usize) -> TracingMonitor {
    TracingMonitor::new(format!("run-{}", index + 1))
}

/// A batch of Eggholder climbs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggholderExperiment {
    pub trials: usize,
    pub max_no_improve: u64,
    pub step_size: f64,
}

impl EggholderExperiment {
    /// Runs every trial and returns the results in trial order.
    pub fn run(
        &self,
        runner: &TrialRunner,
    ) -> Result<Vec<EggholderTrialResult>, InvalidConfiguration> {
        if self.trials == 0 {
            return Err(InvalidConfiguration::ZeroTrials);
        }

        info!(
            trials = self.trials,
            max_no_improve = self.max_no_improve,
            step_size = self.step_size,
            "running Eggholder experiment"
        );

        let climber = ContinuousHillClimber::new(SearchConfig::new(
            self.max_no_improve,
            self.step_size,
        )?);

        Ok(runner.run(EGGHOLDER_STREAM, self.trials, |index, rng| {
            let mut monitor = trial_monitor(index);
            let result = climber.run(rng, &mut monitor).into_result();
            debug!(
                run = index + 1,
                x = result.x(),
                y = result.y(),
                value = result.value(),
                "Eggholder trial finished"
            );
            result
        }))
    }
}

/// A batch of N-Queens climbs on boards of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueensExperiment {
    pub trials: usize,
    pub board_size: usize,
}

impl NQueensExperiment {
    /// Runs every trial and returns the results in trial order.
    pub fn run(
        &self,
        runner: &TrialRunner,
    ) -> Result<Vec<NQueensTrialResult>, InvalidConfiguration> {
        if self.trials == 0 {
            return Err(InvalidConfiguration::ZeroTrials);
        }

        info!(
            trials = self.trials,
            board_size = self.board_size,
            "running N-Queens experiment"
        );

        let climber = DiscreteHillClimber::new(self.board_size)?;

        Ok(runner.run(self.board_size as u64, self.trials, |index, rng| {
            let mut monitor = trial_monitor(index);
            let result = climber.run(rng, &mut monitor).into_result();
            debug!(
                run = index + 1,
                attacks = result.attacks(),
                is_solution = result.is_solution(),
                "N-Queens trial finished"
            );
            result
        }))
    }
}

/// Summaries and written files of a complete study.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyReport {
    pub eggholder: Option<EggholderSummary>,
    pub nqueens: Vec<NQueensSummary>,
    pub files: Vec<PathBuf>,
}

/// Runs the full study described by `config` and writes its tables.
pub fn run_study(config: &ExperimentConfig) -> Result<StudyReport, ExperimentError> {
    config.validate()?;

    let workers = NonZeroUsize::new(config.workers()).ok_or(InvalidConfiguration::ZeroWorkers)?;
    let runner = TrialRunner::new(workers, config.seed());
    let sink = CsvSink::new(config.out_dir());
    sink.ensure_dir()?;

    let mut files = Vec::with_capacity(config.board_sizes().len() + 2);

    let eggholder = EggholderExperiment {
        trials: config.trials(),
        max_no_improve: config.max_no_improve(),
        step_size: config.step_size(),
    };
    let eggholder_results = eggholder.run(&runner)?;
    let records: Vec<EggholderRecord> = eggholder_results
        .iter()
        .enumerate()
        .map(|(index, result)| EggholderRecord::from_trial(index, result))
        .collect();
    let path = sink.write_eggholder(&records)?;
    info!(path = %path.display(), "Eggholder results saved");
    files.push(path);

    let eggholder_summary = EggholderSummary::from_results(&eggholder_results);
    if let Some(summary) = &eggholder_summary {
        info!(
            best = summary.best,
            mean = summary.mean,
            worst = summary.worst,
            "Eggholder summary"
        );
    }

    let mut nqueens = Vec::with_capacity(config.board_sizes().len());
    for &board_size in config.board_sizes() {
        let experiment = NQueensExperiment {
            trials: config.trials(),
            board_size,
        };
        let results = experiment.run(&runner)?;
        let records: Vec<NQueensRecord> = results
            .iter()
            .enumerate()
            .map(|(index, result)| NQueensRecord::from_trial(index, result))
            .collect();
        let path = sink.write_nqueens(board_size, &records)?;
        info!(board_size, path = %path.display(), "N-Queens results saved");
        files.push(path);

        let summary = NQueensSummary::from_results(board_size, &results);
        info!(
            board_size,
            solutions = summary.solutions,
            trials = summary.trials,
            "N-Queens summary"
        );
        nqueens.push(summary);
    }

    let success: Vec<SuccessRecord> = nqueens
        .iter()
        .map(|s| SuccessRecord {
            board_size: s.board_size,
            solutions: s.solutions,
            trials: s.trials,
        })
        .collect();
    let path = sink.write_success(&success)?;
    info!(path = %path.display(), "N-Queens success counts saved");
    files.push(path);

    Ok(StudyReport {
        eggholder: eggholder_summary,
        nqueens,
        files,
    })
}
