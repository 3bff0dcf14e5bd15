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

//! N-Queens board representation.
//!
//! A `Board` stores exactly one queen per column: entry `c` is the row of the
//! queen standing in column `c`. Column conflicts are therefore impossible by
//! construction, while row and diagonal conflicts are allowed and are the
//! quantity a search minimizes. Boards are mutated in place by the search and
//! cloned only when a result is frozen.

use crate::{
    error::InvalidConfiguration,
    index::{ColumnIndex, RowIndex},
};
use rand::Rng;
use std::num::NonZeroUsize;

/// A placement of `n` queens on an `n x n` board, one queen per column.
///
/// # Invariants
/// * `size() > 0`
/// * Every row is in `0..size()`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<RowIndex>,
}

impl Board {
    /// Creates a board from the row of each column.
    ///
    /// Returns an error if `rows` is empty or if any row is out of range.
    pub fn new(rows: Vec<RowIndex>) -> Result<Self, InvalidConfiguration> {
        let size = rows.len();
        if size == 0 {
            return Err(InvalidConfiguration::ZeroBoardSize);
        }

        if let Some((column, &row)) = rows.iter().enumerate().find(|(_, r)| r.get() >= size) {
            return Err(InvalidConfiguration::RowOutOfRange {
                column: ColumnIndex::new(column),
                row,
                size,
            });
        }

        Ok(Self { rows })
    }

    /// Creates a board from plain `usize` rows.
    #[inline]
    pub fn from_rows<I>(rows: I) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = usize>,
    {
        Self::new(rows.into_iter().map(RowIndex::new).collect())
    }

    /// Creates a random board of the given size.
    ///
    /// Every column draws its row independently and uniformly from `0..size`,
    /// so several queens may start on the same row.
    pub fn random<R>(size: NonZeroUsize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let size = size.get();
        let rows = (0..size)
            .map(|_| RowIndex::new(rng.random_range(0..size)))
            .collect();

        Self { rows }
    }

    /// Returns the board size `n` (number of columns, equal to the number of rows).
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of the queen in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn row(&self, column: ColumnIndex) -> RowIndex {
        let index = column.get();
        assert!(
            index < self.size(),
            "called `Board::row` with column index out of bounds: the len is {} but the index is {}",
            self.size(),
            index
        );
        self.rows[index]
    }

    /// Moves the queen in `column` to `row`.
    ///
    /// # Panics
    ///
    /// Panics if `column` or `row` is out of bounds.
    #[inline]
    pub fn set_row(&mut self, column: ColumnIndex, row: RowIndex) {
        let size = self.size();
        assert!(
            column.get() < size && row.get() < size,
            "called `Board::set_row` with index out of bounds: the size is {} but the column is {} and the row is {}",
            size,
            column.get(),
            row.get()
        );
        self.rows[column.get()] = row;
    }

    /// Returns the row of every column as a slice.
    #[inline]
    pub fn rows(&self) -> &[RowIndex] {
        &self.rows
    }

    /// Returns the rows as plain `usize` values.
    #[inline]
    pub fn to_usize_vec(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.get()).collect()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board{:?}", self.to_usize_vec())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row.get())?;
        }
        write!(f, "]")
    }
}
