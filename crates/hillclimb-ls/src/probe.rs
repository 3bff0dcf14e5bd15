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

//! Scoped tentative edits of a single board column.
//!
//! The steepest-descent sweep scores a neighbour by moving one queen, scoring
//! the board and moving the queen back. `ColumnProbe` ties the move-back to
//! scope exit: it remembers the row the queen stood on when the probe was
//! opened and writes it back when the probe is dropped, on every exit path
//! including unwinding. Committing a move happens after the probe is gone,
//! through `Board::set_row`.
//!
//! While a probe is alive it holds the only mutable borrow of the board, so
//! no other code can observe or edit the board in its intermediate state.

use hillclimb_model::{
    board::Board,
    index::{ColumnIndex, RowIndex},
};

/// A tentative edit of one column that reverts when dropped.
///
/// # Examples
///
/// ```rust
/// # use hillclimb_ls::probe::ColumnProbe;
/// # use hillclimb_model::{board::Board, index::{ColumnIndex, RowIndex}};
/// let mut board = Board::from_rows([0, 1, 2]).unwrap();
/// {
///     let mut probe = ColumnProbe::new(&mut board, ColumnIndex::new(1));
///     let rows = probe.try_row(RowIndex::new(2));
///     assert_eq!(rows[1], RowIndex::new(2));
/// }
/// assert_eq!(board.row(ColumnIndex::new(1)), RowIndex::new(1));
/// ```
pub struct ColumnProbe<'a> {
    board: &'a mut Board,
    column: ColumnIndex,
    original: RowIndex,
}

impl<'a> ColumnProbe<'a> {
    /// Opens a probe on `column` of `board`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn new(board: &'a mut Board, column: ColumnIndex) -> Self {
        let original = board.row(column);
        Self {
            board,
            column,
            original,
        }
    }

    /// Returns the probed column.
    #[inline]
    pub fn column(&self) -> ColumnIndex {
        self.column
    }

    /// Returns the row the queen stood on when the probe was opened.
    #[inline]
    pub fn original_row(&self) -> RowIndex {
        self.original
    }

    /// Moves the probed queen to `row` and returns the resulting rows.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn try_row(&mut self, row: RowIndex) -> &[RowIndex] {
        self.board.set_row(self.column, row);
        self.board.rows()
    }
}

impl Drop for ColumnProbe<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.set_row(self.column, self.original);
    }
}

impl std::fmt::Debug for ColumnProbe<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnProbe")
            .field("column", &self.column)
            .field("original", &self.original)
            .field("board", &self.board)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[usize]) -> Board {
        Board::from_rows(rows.iter().copied()).unwrap()
    }

    #[test]
    fn test_probe_reverts_on_drop() {
        let mut b = board(&[3, 1, 0, 2]);
        {
            let mut probe = ColumnProbe::new(&mut b, ColumnIndex::new(2));
            assert_eq!(probe.original_row(), RowIndex::new(0));
            for r in RowIndex::range(4) {
                let rows = probe.try_row(r);
                assert_eq!(rows[2], r);
            }
        }
        assert_eq!(b, board(&[3, 1, 0, 2]));
    }

    #[test]
    fn test_probe_leaves_other_columns_alone() {
        let mut b = board(&[0, 0, 0]);
        let mut probe = ColumnProbe::new(&mut b, ColumnIndex::new(0));
        let rows: Vec<usize> = probe.try_row(RowIndex::new(2)).iter().map(|r| r.get()).collect();
        assert_eq!(rows, vec![2, 0, 0]);
        assert_eq!(probe.column(), ColumnIndex::new(0));
    }

    #[test]
    fn test_probe_reverts_when_unwinding() {
        let mut b = board(&[1, 0]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut probe = ColumnProbe::new(&mut b, ColumnIndex::new(1));
            probe.try_row(RowIndex::new(1));
            panic!("scoring failed");
        }));
        assert!(result.is_err());
        assert_eq!(b, board(&[1, 0]));
    }

    #[test]
    #[should_panic(expected = "called `Board::row` with column index out of bounds")]
    fn test_probe_rejects_out_of_range_column() {
        let mut b = board(&[0, 1]);
        let _ = ColumnProbe::new(&mut b, ColumnIndex::new(2));
    }

    #[test]
    fn test_consecutive_probes_each_restore() {
        let mut b = board(&[0, 2, 1]);
        for c in ColumnIndex::range(3) {
            let mut probe = ColumnProbe::new(&mut b, c);
            probe.try_row(RowIndex::new(0));
        }
        assert_eq!(b, board(&[0, 2, 1]));
    }
}
