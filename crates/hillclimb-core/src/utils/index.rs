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

//! # Strongly Typed Indices
//!
//! Phantom-typed wrappers around `usize` that keep index spaces apart. A
//! board position, for instance, is a column *and* a row; both are plain
//! `usize` values underneath, and swapping them by accident compiles fine.
//! `TypedIndex<T>` carries a tag type `T: TypedIndexTag` so that the compiler
//! refuses such mix-ups, while the wrapper itself stays a transparent `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use hillclimb_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct ColumnTag;
//! impl TypedIndexTag for ColumnTag { const NAME: &'static str = "Column"; }
//!
//! type Column = TypedIndex<ColumnTag>;
//! let c = Column::new(3);
//! assert_eq!(c.get(), 3);
//! assert_eq!(format!("{}", c), "Column(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the absolute distance between two indices of the same space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hillclimb_core::utils::index::{TypedIndex, TypedIndexTag};
    /// # #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// # struct Tag;
    /// # impl TypedIndexTag for Tag { const NAME: &'static str = "Idx"; }
    /// let a = TypedIndex::<Tag>::new(2);
    /// let b = TypedIndex::<Tag>::new(7);
    /// assert_eq!(a.abs_diff(b), 5);
    /// assert_eq!(b.abs_diff(a), 5);
    /// ```
    #[inline(always)]
    pub const fn abs_diff(self, other: Self) -> usize {
        self.index.abs_diff(other.index)
    }

    /// Returns an iterator over all indices in `0..len`.
    #[inline]
    pub fn range(len: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..len).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}
