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

//! # Hillclimb Experiments
//!
//! Batch driver for the two climbers of `hillclimb-ls`. It runs many
//! independent trials, writes every trial to a CSV table and reports how the
//! climbers fared: the distribution of Eggholder minima and the number of
//! N-Queens trials that reached zero attacks for each board size.
//!
//! - `config`: `ExperimentConfig` and its builder.
//! - `runner`: `TrialRunner`, sequential or scoped-thread batches with one
//!   generator per trial.
//! - `experiment`: `EggholderExperiment`, `NQueensExperiment` and `run_study`.
//! - `record` and `sink`: CSV rows and the directory they are written to.
//! - `summary`: Aggregates over a batch.
//! - `error`: `ExperimentError`.

pub mod config;
pub mod error;
pub mod experiment;
pub mod record;
pub mod runner;
pub mod sink;
pub mod summary;
