//! Lexicographic comparison of two clamped windows.
use std::cmp::Ordering;

use crate::common::Window;

/// Compare `a[a_offset..a_offset + a_length]` with `b[b_offset..b_offset + b_length]`,
/// both clamped. Bytes are compared over the shared prefix; when that prefix
/// is equal the shorter window sorts first.
pub fn compare(
    a: &[u8],
    a_offset: usize,
    a_length: usize,
    b: &[u8],
    b_offset: usize,
    b_length: usize,
) -> Ordering {
    let wa = Window::clamp(a.len(), a_offset, a_length);
    let wb = Window::clamp(b.len(), b_offset, b_length);
    compare_bytes(wa.slice(a), wb.slice(b))
}

/// Compare two whole byte slices (memcmp over the overlap, then length).
#[inline]
pub fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    a[..n].cmp(&b[..n]).then(a.len().cmp(&b.len()))
}

/// True if both slices hold the same bytes.
#[inline]
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && compare_bytes(a, b) == Ordering::Equal
}
