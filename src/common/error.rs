use thiserror::Error;

/// Errors surfaced by the few buffer operations that can fail.
///
/// Decoding, searching, comparing and filling never fail: out-of-range
/// windows are clamped and malformed input is repaired or truncated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("access of {len} bytes at offset {offset} is out of range for a region of {size} bytes")]
    OutOfRange {
        offset: usize,
        len: usize,
        size: usize,
    },

    #[error("region size {len} must be a multiple of {width} bytes")]
    Misaligned { width: usize, len: usize },

    #[error("failed to allocate {size} bytes")]
    AllocationFailed { size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
