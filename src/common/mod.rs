mod error;


use std::cmp::Ordering;

pub use self::error::{Error, Result};

/// A `(start, len)` sub-range of a region, already clamped to its bounds.
///
/// Every windowed operation builds one of these first, so
/// `start + len <= size` holds for every slice taken from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub len: usize,
}

impl Window {
    /// Clamp a caller-supplied `(offset, length)` to a region of `size` bytes.
    /// An offset at or past the end yields an empty window positioned at `size`.
    #[inline]
    pub fn clamp(size: usize, offset: usize, length: usize) -> Self {
        let start = offset.min(size);
        let len = length.min(size - start);
        Window { start, len }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end()]
    }

    #[inline]
    pub fn slice_mut<'a>(&self, data: &'a mut [u8]) -> &'a mut [u8] {
        &mut data[self.start..self.end()]
    }
}

/// Map a search result to the host convention: the index, or -1 when absent.
#[inline]
pub fn as_host_index(found: Option<usize>) -> i64 {
    found.map_or(-1, |i| i as i64)
}

/// Map an ordering to the host convention of -1, 0 or 1.
#[inline]
pub fn ordering_to_i32(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
