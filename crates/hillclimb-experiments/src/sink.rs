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

//! CSV persistence of experiment results.
//!
//! `CsvSink` owns an output directory and knows the file name of every
//! result table. Writers create the directory on first use and replace
//! existing files. Readers parse a file back into its records, which is how
//! the round trip of the written tables is checked.

use crate::{
    error::ExperimentError,
    record::{EggholderRecord, NQueensRecord, SuccessRecord},
};
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};

pub const EGGHOLDER_FILE: &str = "eggholder_results.csv";
pub const NQUEENS_SUCCESS_FILE: &str = "nqueens_success.csv";

/// Returns the file name of the N-Queens table for `board_size`.
#[inline]
pub fn nqueens_file_name(board_size: usize) -> String {
    format!("nqueens_results_N{}.csv", board_size)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// Creates a sink writing into `dir`. Nothing is touched until the first write.
    #[inline]
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { dir: dir.into() }
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the output directory and its parents if missing.
    pub fn ensure_dir(&self) -> Result<(), ExperimentError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ExperimentError::io(&self.dir, e))
    }

    #[inline]
    pub fn eggholder_path(&self) -> PathBuf {
        self.dir.join(EGGHOLDER_FILE)
    }

    #[inline]
    pub fn nqueens_path(&self, board_size: usize) -> PathBuf {
        self.dir.join(nqueens_file_name(board_size))
    }

    #[inline]
    pub fn success_path(&self) -> PathBuf {
        self.dir.join(NQUEENS_SUCCESS_FILE)
    }

    /// Writes the Eggholder table and returns its path.
    pub fn write_eggholder(&self, records: &[EggholderRecord]) -> Result<PathBuf, ExperimentError> {
        self.write(self.eggholder_path(), records)
    }

    /// Writes the N-Queens table for `board_size` and returns its path.
    pub fn write_nqueens(
        &self,
        board_size: usize,
        records: &[NQueensRecord],
    ) -> Result<PathBuf, ExperimentError> {
        self.write(self.nqueens_path(board_size), records)
    }

    /// Writes the success table and returns its path.
    pub fn write_success(&self, records: &[SuccessRecord]) -> Result<PathBuf, ExperimentError> {
        self.write(self.success_path(), records)
    }

    fn write<T>(&self, path: PathBuf, records: &[T]) -> Result<PathBuf, ExperimentError>
    where
        T: Serialize,
    {
        self.ensure_dir()?;
        write_records(&path, records)?;
        Ok(path)
    }
}

/// Writes `records` to `path` with a header row, replacing any existing file.
pub fn write_records<T>(path: &Path, records: &[T]) -> Result<(), ExperimentError>
where
    T: Serialize,
{
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExperimentError::csv(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ExperimentError::csv(path, e))?;
    }
    writer.flush().map_err(|e| ExperimentError::io(path, e))
}

/// Reads every record of the CSV file at `path`.
pub fn read_records<T>(path: &Path) -> Result<Vec<T>, ExperimentError>
where
    T: DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path).map_err(|e| ExperimentError::csv(path, e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ExperimentError::csv(path, e))
}

#[inline]
pub fn read_eggholder(path: &Path) -> Result<Vec<EggholderRecord>, ExperimentError> {
    read_records(path)
}

#[inline]
pub fn read_nqueens(path: &Path) -> Result<Vec<NQueensRecord>, ExperimentError> {
    read_records(path)
}

#[inline]
pub fn read_success(path: &Path) -> Result<Vec<SuccessRecord>, ExperimentError> {
    read_records(path)
}
