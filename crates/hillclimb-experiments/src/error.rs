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

use hillclimb_model::error::InvalidConfiguration;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an experiment run.
///
/// Search itself cannot fail once configured, so every variant is either a
/// rejected configuration or a persistence failure.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] InvalidConfiguration),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to process CSV file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExperimentError {
    /// Wraps an I/O error that occurred while accessing `path`.
    pub fn io<P>(path: P, source: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a CSV error that occurred while reading or writing `path`.
    pub fn csv<P>(path: P, source: csv::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_converts() {
        let err: ExperimentError = InvalidConfiguration::ZeroTrials.into();
        assert!(matches!(
            err,
            ExperimentError::Configuration(InvalidConfiguration::ZeroTrials)
        ));
        assert!(err.to_string().starts_with("invalid configuration: "));
    }

    #[test]
    fn test_io_error_names_the_path() {
        let err = ExperimentError::io(
            "results/out.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to access results/out.csv: denied");
    }
}
