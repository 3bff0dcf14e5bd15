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

//! Tabular records written by the experiment driver.
//!
//! One record type per CSV file. Column names and the run numbering (1-based)
//! follow the published result files, including the capitalised `True` and
//! `False` of the `Is Solution` column. Parsing also accepts the lowercase
//! spelling.

use hillclimb_model::solution::{EggholderTrialResult, NQueensTrialResult};
use serde::{Deserialize, Serialize};

/// One row of `eggholder_results.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EggholderRecord {
    #[serde(rename = "Run")]
    pub run: usize,

    #[serde(rename = "Minimum Value")]
    pub minimum_value: f64,
}

impl EggholderRecord {
    /// Creates the record of the trial with zero-based index `index`.
    #[inline]
    pub fn from_trial(index: usize, result: &EggholderTrialResult) -> Self {
        Self {
            run: index + 1,
            minimum_value: result.value(),
        }
    }
}

/// One row of `nqueens_results_N{N}.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NQueensRecord {
    #[serde(rename = "Run")]
    pub run: usize,

    #[serde(rename = "Attacks")]
    pub attacks: usize,

    #[serde(rename = "Is Solution", with = "capitalized_bool")]
    pub is_solution: bool,
}

impl NQueensRecord {
    /// Creates the record of the trial with zero-based index `index`.
    #[inline]
    pub fn from_trial(index: usize, result: &NQueensTrialResult) -> Self {
        Self {
            run: index + 1,
            attacks: result.attacks(),
            is_solution: result.is_solution(),
        }
    }
}

/// One row of `nqueens_success.csv`: solved trials per board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRecord {
    #[serde(rename = "N")]
    pub board_size: usize,

    #[serde(rename = "Solutions")]
    pub solutions: usize,

    #[serde(rename = "Trials")]
    pub trials: usize,
}

mod capitalized_bool {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "True" | "true" => Ok(true),
            "False" | "false" => Ok(false),
            other => Err(D::Error::custom(format!(
                "expected `True` or `False`, got `{}`",
                other
            ))),
        }
    }
}
