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

//! # Hillclimb Model
//!
//! **The domain data of the two local-search problems.**
//!
//! This crate holds the state and result types that flow in and out of the
//! climbers in `hillclimb_ls`. It contains no search logic.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed board coordinates (`ColumnIndex`, `RowIndex`).
//! * **`point`**: `Point2D`, a candidate position in a continuous search box.
//! * **`board`**: `Board`, one queen per column, rows free to collide.
//! * **`solution`**: The immutable per-trial results handed to the experiment driver.
//! * **`error`**: `InvalidConfiguration`, the single error every constructor reports.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: A column is not a row. Board coordinates are distinct types.
//! 2.  **Fail-Fast**: Constructors validate eagerly so the search loops never see an invalid state.
//! 3.  **No Shared State**: Every value here lives for at most one trial.

pub mod board;
pub mod error;
pub mod index;
pub mod point;
pub mod solution;
