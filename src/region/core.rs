use std::ops::{Deref, DerefMut};

use crate::common::{Error, Result};

/// A fixed-size, owned span of bytes.
///
/// The size is set at allocation and never changes; the region dereferences
/// to `[u8]`, so every windowed operation takes it as a plain slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Region {
    bytes: Vec<u8>,
}

impl Region {
    #[inline]
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Region { bytes }
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Give up the region, keeping its backing allocation.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for Region {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Region {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for Region {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsMut<[u8]> for Region {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl From<Vec<u8>> for Region {
    fn from(bytes: Vec<u8>) -> Self {
        Region { bytes }
    }
}

impl From<&[u8]> for Region {
    fn from(bytes: &[u8]) -> Self {
        Region {
            bytes: bytes.to_vec(),
        }
    }
}

/// New region of exactly `size` zero bytes.
#[inline]
pub fn allocate_zeroed(size: usize) -> Region {
    Region::from_vec(vec![0u8; size])
}

/// New region of exactly `size` bytes whose contents are unspecified.
///
/// Callers must write before reading. A fresh allocation comes from the
/// allocator's zeroed pages; [`RegionPool::allocate_uninit`](super::RegionPool::allocate_uninit)
/// hands back recycled memory with whatever bytes it last held.
#[inline]
pub fn allocate_uninit(size: usize) -> Region {
    Region::from_vec(vec![0u8; size])
}

/// Allocate `size` bytes, zeroed or not.
#[inline]
pub fn allocate(size: usize, zeroed: bool) -> Region {
    if zeroed {
        allocate_zeroed(size)
    } else {
        allocate_uninit(size)
    }
}

/// Allocate zeroed memory from a host-supplied signed size.
///
/// Negative sizes are rejected with [`Error::InvalidArgument`]; a failed
/// reservation is reported as [`Error::AllocationFailed`] instead of aborting.
/// Zeroed memory also satisfies an "uninitialized" request.
pub fn allocate_checked(size: i64) -> Result<Region> {
    let len = usize::try_from(size)
        .ok()
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or_else(|| Error::InvalidArgument(format!("invalid allocation size {}", size)))?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { size: len })?;
    bytes.resize(len, 0);
    Ok(Region::from_vec(bytes))
}

/// Join slices into one region of `total_len` bytes (default: their summed length).
/// Input beyond `total_len` is dropped; any shortfall is zero-filled.
pub fn concat(list: &[&[u8]], total_len: Option<usize>) -> Region {
    let total = total_len.unwrap_or_else(|| list.iter().map(|item| item.len()).sum());
    let mut bytes = Vec::with_capacity(total);
    for item in list {
        let room = total - bytes.len();
        if room == 0 {
            break;
        }
        bytes.extend_from_slice(&item[..item.len().min(room)]);
    }
    bytes.resize(total, 0);
    Region::from_vec(bytes)
}

/// Copy `source[source_start..source_end]` into `target` at `target_start`.
///
/// The source range is clamped to the source, and the copy is cut short
/// where the target ends. Returns the number of bytes copied.
pub fn copy(
    source: &[u8],
    target: &mut [u8],
    target_start: usize,
    source_start: usize,
    source_end: usize,
) -> usize {
    if target_start >= target.len() || source_start >= source_end {
        return 0;
    }
    let source_end = source_end.min(source.len());
    let source_start = source_start.min(source_end);
    let len = (source_end - source_start).min(target.len() - target_start);

    target[target_start..target_start + len]
        .copy_from_slice(&source[source_start..source_start + len]);
    len
}

/// Copy `view[offset..offset + length]` into a new region. Unlike the windowed
/// operations this does not clamp: a range past the end is an error.
/// `length` defaults to the rest of the view.
pub fn copy_bytes_from(view: &[u8], offset: usize, length: Option<usize>) -> Result<Region> {
    let out_of_range = || Error::OutOfRange {
        offset,
        len: length.unwrap_or(0),
        size: view.len(),
    };
    if offset > view.len() {
        return Err(out_of_range());
    }
    let len = length.unwrap_or(view.len() - offset);
    let end = offset.checked_add(len).ok_or_else(out_of_range)?;
    let src = view.get(offset..end).ok_or_else(out_of_range)?;
    Ok(Region::from(src))
}

/// Reverse the byte order of every `width`-byte group in place.
fn swap(region: &mut [u8], width: usize) -> Result<()> {
    if region.len() % width != 0 {
        return Err(Error::Misaligned {
            width,
            len: region.len(),
        });
    }
    for group in region.chunks_exact_mut(width) {
        group.reverse();
    }
    Ok(())
}

/// Swap the byte order of each 16-bit group in place.
pub fn swap16(region: &mut [u8]) -> Result<()> {
    swap(region, 2)
}

/// Swap the byte order of each 32-bit group in place.
pub fn swap32(region: &mut [u8]) -> Result<()> {
    swap(region, 4)
}

/// Swap the byte order of each 64-bit group in place.
pub fn swap64(region: &mut [u8]) -> Result<()> {
    swap(region, 8)
}
