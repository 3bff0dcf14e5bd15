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

use anyhow::Context;
use clap::Parser;
use hillclimb_experiments::{
    config::{DEFAULT_BOARD_SIZES, DEFAULT_OUT_DIR, DEFAULT_TRIALS, ExperimentConfig},
    experiment::run_study,
};
use hillclimb_ls::config::{DEFAULT_MAX_NO_IMPROVE, DEFAULT_STEP_SIZE};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs the Eggholder and N-Queens hill climbing experiments and writes the
/// results as CSV tables.
#[derive(Debug, Parser)]
#[command(name = "hillclimb", version)]
#[command(about = "Hill climbing experiments on the Eggholder function and N-Queens")]
struct Cli {
    /// Number of trials per experiment and per board size
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Consecutive rejected proposals before an Eggholder climb stops
    #[arg(long, default_value_t = DEFAULT_MAX_NO_IMPROVE)]
    max_no_improve: u64,

    /// Width of the uniform perturbation of each coordinate
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: f64,

    /// N-Queens board sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_BOARD_SIZES)]
    board_sizes: Vec<usize>,

    /// Base seed for reproducible runs (trial generators are drawn from the OS if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of worker threads per batch
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Directory the CSV tables are written to
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ExperimentConfig> {
        ExperimentConfig::builder()
            .trials(self.trials)
            .max_no_improve(self.max_no_improve)
            .step_size(self.step_size)
            .board_sizes(self.board_sizes)
            .seed(self.seed)
            .workers(self.workers)
            .out_dir(self.out_dir)
            .build()
            .context("invalid command line arguments")
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().into_config()?;
    info!(%config, "starting experiments");

    let report = run_study(&config)
        .with_context(|| format!("experiment run into {} failed", config.out_dir().display()))?;

    if let Some(summary) = &report.eggholder {
        println!("{}", summary);
    }
    for summary in &report.nqueens {
        println!("{}", summary);
    }
    for file in &report.files {
        println!("Saved {}", file.display());
    }

    Ok(())
}
