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

//! Configuration of an experiment run.
//!
//! The defaults reproduce the reference study: 100 Eggholder trials with a
//! patience of 100 and a step size of 1, and 100 N-Queens trials for each of
//! the board sizes 8, 16 and 32, written below `results/`.

use hillclimb_ls::config::{DEFAULT_MAX_NO_IMPROVE, DEFAULT_STEP_SIZE, SearchConfig};
use hillclimb_model::error::InvalidConfiguration;
use std::path::{Path, PathBuf};

/// Default number of trials per experiment.
pub const DEFAULT_TRIALS: usize = 100;

/// Default N-Queens board sizes.
pub const DEFAULT_BOARD_SIZES: [usize; 3] = [8, 16, 32];

/// Default output directory for CSV files.
pub const DEFAULT_OUT_DIR: &str = "results";

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    trials: usize,
    max_no_improve: u64,
    step_size: f64,
    board_sizes: Vec<usize>,
    seed: Option<u64>,
    workers: usize,
    out_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_no_improve: DEFAULT_MAX_NO_IMPROVE,
            step_size: DEFAULT_STEP_SIZE,
            board_sizes: DEFAULT_BOARD_SIZES.to_vec(),
            seed: None,
            workers: 1,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExperimentConfig {
    #[inline]
    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::new()
    }

    /// Number of trials per experiment (and per board size).
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    #[inline]
    pub fn max_no_improve(&self) -> u64 {
        self.max_no_improve
    }

    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[inline]
    pub fn board_sizes(&self) -> &[usize] {
        &self.board_sizes
    }

    /// Base seed; `None` draws every trial generator from the OS.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[inline]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Checks every parameter without running anything.
    ///
    /// The search parameters are checked the same way the climbers check
    /// them, so a run never fails halfway through a batch.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.trials == 0 {
            return Err(InvalidConfiguration::ZeroTrials);
        }
        if self.workers == 0 {
            return Err(InvalidConfiguration::ZeroWorkers);
        }
        SearchConfig::new(self.max_no_improve, self.step_size)?;
        if self.board_sizes.contains(&0) {
            return Err(InvalidConfiguration::ZeroBoardSize);
        }
        Ok(())
    }
}

impl std::fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ExperimentConfig(trials: {}, max_no_improve: {}, step_size: {}, board_sizes: {:?}, seed: ",
            self.trials, self.max_no_improve, self.step_size, self.board_sizes
        )?;
        match self.seed {
            Some(seed) => write!(f, "{}", seed)?,
            None => write!(f, "os")?,
        }
        write!(
            f,
            ", workers: {}, out_dir: {})",
            self.workers,
            self.out_dir.display()
        )
    }
}

/// Builder for `ExperimentConfig`. `build` validates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfigBuilder {
    config: ExperimentConfig,
}

impl Default for ExperimentConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperimentConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            config: ExperimentConfig::default(),
        }
    }

    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    #[inline]
    pub fn max_no_improve(mut self, max_no_improve: u64) -> Self {
        self.config.max_no_improve = max_no_improve;
        self
    }

    #[inline]
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.config.step_size = step_size;
        self
    }

    #[inline]
    pub fn board_sizes<I>(mut self, board_sizes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.config.board_sizes = board_sizes.into_iter().collect();
        self
    }

    #[inline]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    #[inline]
    pub fn out_dir<P>(mut self, out_dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.config.out_dir = out_dir.into();
        self
    }

    pub fn build(self) -> Result<ExperimentConfig, InvalidConfiguration> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_reference_study() {
        let config = ExperimentConfig::default();
        assert_eq!(config.trials(), 100);
        assert_eq!(config.max_no_improve(), 100);
        assert_eq!(config.step_size(), 1.0);
        assert_eq!(config.board_sizes(), &[8, 16, 32]);
        assert_eq!(config.seed(), None);
        assert_eq!(config.workers(), 1);
        assert_eq!(config.out_dir(), Path::new("results"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExperimentConfig::builder()
            .trials(5)
            .max_no_improve(20)
            .step_size(0.5)
            .board_sizes([4, 5])
            .seed(Some(9))
            .workers(3)
            .out_dir("out")
            .build()
            .unwrap();
        assert_eq!(config.trials(), 5);
        assert_eq!(config.max_no_improve(), 20);
        assert_eq!(config.step_size(), 0.5);
        assert_eq!(config.board_sizes(), &[4, 5]);
        assert_eq!(config.seed(), Some(9));
        assert_eq!(config.workers(), 3);
        assert_eq!(config.out_dir(), Path::new("out"));
    }

    #[test]
    fn test_build_rejects_invalid_parameters() {
        assert_eq!(
            ExperimentConfig::builder().trials(0).build(),
            Err(InvalidConfiguration::ZeroTrials)
        );
        assert_eq!(
            ExperimentConfig::builder().workers(0).build(),
            Err(InvalidConfiguration::ZeroWorkers)
        );
        assert_eq!(
            ExperimentConfig::builder().max_no_improve(0).build(),
            Err(InvalidConfiguration::ZeroPatience)
        );
        assert_eq!(
            ExperimentConfig::builder().step_size(-2.0).build(),
            Err(InvalidConfiguration::InvalidStepSize(-2.0))
        );
        assert_eq!(
            ExperimentConfig::builder().board_sizes([8, 0]).build(),
            Err(InvalidConfiguration::ZeroBoardSize)
        );
    }

    #[test]
    fn test_display_mentions_seed_source() {
        let unseeded = ExperimentConfig::default().to_string();
        assert!(unseeded.contains("seed: os"));

        let seeded = ExperimentConfig::builder()
            .seed(Some(42))
            .build()
            .unwrap()
            .to_string();
        assert!(seeded.contains("seed: 42"));
    }
}
