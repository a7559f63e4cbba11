//! Fixed-width integer and float access at byte offsets.
//!
//! Unlike the windowed codec operations these do not clamp: reading or
//! writing past the end of the region is an [`Error::OutOfRange`].

use crate::common::{Error, Result};

/// Widest integer the variable-width accessors handle, in bytes.
pub const MAX_INT_WIDTH: usize = 6;

/// Bounds-check `region[offset..offset + len]` and return its range.
#[inline]
fn checked_range(size: usize, offset: usize, len: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(offset..end),
        _ => Err(Error::OutOfRange { offset, len, size }),
    }
}

#[inline]
fn check_width(byte_length: usize) -> Result<()> {
    if (1..=MAX_INT_WIDTH).contains(&byte_length) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "byte length {} must be between 1 and {}",
            byte_length, MAX_INT_WIDTH
        )))
    }
}

/// Sign-extend the low `byte_length * 8` bits of `value`.
#[inline]
fn sign_extend(value: u64, byte_length: usize) -> i64 {
    let shift = 64 - 8 * byte_length as u32;
    ((value << shift) as i64) >> shift
}

/// Unsigned little-endian integer of `byte_length` (1..=6) bytes.
pub fn read_uint_le(region: &[u8], offset: usize, byte_length: usize) -> Result<u64> {
    check_width(byte_length)?;
    let range = checked_range(region.len(), offset, byte_length)?;
    Ok(region[range]
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Unsigned big-endian integer of `byte_length` (1..=6) bytes.
pub fn read_uint_be(region: &[u8], offset: usize, byte_length: usize) -> Result<u64> {
    check_width(byte_length)?;
    let range = checked_range(region.len(), offset, byte_length)?;
    Ok(region[range]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Two's complement little-endian integer of `byte_length` (1..=6) bytes.
pub fn read_int_le(region: &[u8], offset: usize, byte_length: usize) -> Result<i64> {
    read_uint_le(region, offset, byte_length).map(|v| sign_extend(v, byte_length))
}

/// Two's complement big-endian integer of `byte_length` (1..=6) bytes.
pub fn read_int_be(region: &[u8], offset: usize, byte_length: usize) -> Result<i64> {
    read_uint_be(region, offset, byte_length).map(|v| sign_extend(v, byte_length))
}

/// Store the low `byte_length` bytes of `value` little-endian.
/// Returns the offset just past the written bytes.
pub fn write_uint_le(region: &mut [u8], value: u64, offset: usize, byte_length: usize) -> Result<usize> {
    check_width(byte_length)?;
    let range = checked_range(region.len(), offset, byte_length)?;
    let end = range.end;
    region[range].copy_from_slice(&value.to_le_bytes()[..byte_length]);
    Ok(end)
}

/// Store the low `byte_length` bytes of `value` big-endian.
/// Returns the offset just past the written bytes.
pub fn write_uint_be(region: &mut [u8], value: u64, offset: usize, byte_length: usize) -> Result<usize> {
    check_width(byte_length)?;
    let range = checked_range(region.len(), offset, byte_length)?;
    let end = range.end;
    region[range].copy_from_slice(&value.to_be_bytes()[8 - byte_length..]);
    Ok(end)
}

/// Store `value` as a `byte_length`-byte two's complement integer, little-endian.
pub fn write_int_le(region: &mut [u8], value: i64, offset: usize, byte_length: usize) -> Result<usize> {
    write_uint_le(region, value as u64, offset, byte_length)
}

/// Store `value` as a `byte_length`-byte two's complement integer, big-endian.
pub fn write_int_be(region: &mut [u8], value: i64, offset: usize, byte_length: usize) -> Result<usize> {
    write_uint_be(region, value as u64, offset, byte_length)
}

macro_rules! fixed_width {
    ($($read:ident, $write:ident, $ty:ty, $from:ident, $to:ident;)*) => {
        $(
            #[inline]
            pub fn $read(region: &[u8], offset: usize) -> Result<$ty> {
                const N: usize = std::mem::size_of::<$ty>();
                let range = checked_range(region.len(), offset, N)?;
                let mut bytes = [0u8; N];
                bytes.copy_from_slice(&region[range]);
                Ok(<$ty>::$from(bytes))
            }

            /// Returns the offset just past the written bytes.
            #[inline]
            pub fn $write(region: &mut [u8], value: $ty, offset: usize) -> Result<usize> {
                const N: usize = std::mem::size_of::<$ty>();
                let range = checked_range(region.len(), offset, N)?;
                let end = range.end;
                region[range].copy_from_slice(&value.$to());
                Ok(end)
            }
        )*
    };
}

fixed_width! {
    read_u8, write_u8, u8, from_le_bytes, to_le_bytes;
    read_i8, write_i8, i8, from_le_bytes, to_le_bytes;
    read_u16_le, write_u16_le, u16, from_le_bytes, to_le_bytes;
    read_u16_be, write_u16_be, u16, from_be_bytes, to_be_bytes;
    read_i16_le, write_i16_le, i16, from_le_bytes, to_le_bytes;
    read_i16_be, write_i16_be, i16, from_be_bytes, to_be_bytes;
    read_u32_le, write_u32_le, u32, from_le_bytes, to_le_bytes;
    read_u32_be, write_u32_be, u32, from_be_bytes, to_be_bytes;
    read_i32_le, write_i32_le, i32, from_le_bytes, to_le_bytes;
    read_i32_be, write_i32_be, i32, from_be_bytes, to_be_bytes;
    read_u64_le, write_u64_le, u64, from_le_bytes, to_le_bytes;
    read_u64_be, write_u64_be, u64, from_be_bytes, to_be_bytes;
    read_i64_le, write_i64_le, i64, from_le_bytes, to_le_bytes;
    read_i64_be, write_i64_be, i64, from_be_bytes, to_be_bytes;
    read_f32_le, write_f32_le, f32, from_le_bytes, to_le_bytes;
    read_f32_be, write_f32_be, f32, from_be_bytes, to_be_bytes;
    read_f64_le, write_f64_le, f64, from_le_bytes, to_le_bytes;
    read_f64_be, write_f64_be, f64, from_be_bytes, to_be_bytes;
}
