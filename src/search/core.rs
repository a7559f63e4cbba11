//! Forward and backward search over a clamped window of a region.
//!
//! Every result is an absolute index into the region, not into the window.

use crate::common::Window;

/// First occurrence of `value` in the window, via SIMD memchr.
pub fn index_of_byte(region: &[u8], value: u8, offset: usize, length: usize) -> Option<usize> {
    let window = Window::clamp(region.len(), offset, length);
    memchr::memchr(value, window.slice(region)).map(|pos| window.start + pos)
}

/// Last occurrence of `value` in the window, via SIMD memrchr.
pub fn last_index_of_byte(region: &[u8], value: u8, offset: usize, length: usize) -> Option<usize> {
    let window = Window::clamp(region.len(), offset, length);
    memchr::memrchr(value, window.slice(region)).map(|pos| window.start + pos)
}

/// First occurrence of `needle` fully inside the window.
///
/// An empty needle matches at `offset`, or at the region end when `offset`
/// lies past it, whatever the window length.
pub fn index_of_buffer(region: &[u8], needle: &[u8], offset: usize, length: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(offset.min(region.len()));
    }
    let window = Window::clamp(region.len(), offset, length);
    if needle.len() > window.len {
        return None;
    }
    if let [byte] = needle {
        return memchr::memchr(*byte, window.slice(region)).map(|pos| window.start + pos);
    }
    memchr::memmem::find(window.slice(region), needle).map(|pos| window.start + pos)
}

/// Last occurrence of `needle` fully inside the window.
///
/// An empty needle matches at the end of the window, `offset + length`,
/// clamped to the region size.
pub fn last_index_of_buffer(region: &[u8], needle: &[u8], offset: usize, length: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(offset.saturating_add(length).min(region.len()));
    }
    let window = Window::clamp(region.len(), offset, length);
    if needle.len() > window.len {
        return None;
    }
    if let [byte] = needle {
        return memchr::memrchr(*byte, window.slice(region)).map(|pos| window.start + pos);
    }
    memchr::memmem::rfind(window.slice(region), needle).map(|pos| window.start + pos)
}

/// True if `needle` occurs anywhere in the window.
#[inline]
pub fn includes(region: &[u8], needle: &[u8], offset: usize, length: usize) -> bool {
    index_of_buffer(region, needle, offset, length).is_some()
}
