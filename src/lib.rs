// Allow pre-existing clippy lints across the codebase
#![allow(
    clippy::len_without_is_empty,
    clippy::doc_lazy_continuation,
    clippy::manual_range_contains,
    clippy::too_many_arguments
)]

//! Binary buffer primitives: allocate fixed-size byte regions and encode,
//! decode, search, compare and fill them.
//!
//! Every operation borrows the region it works on and takes an
//! `(offset, length)` window that is clamped to the region's bounds, so no
//! call reads or writes outside the slice it was given.

/// Use mimalloc as the global allocator.
/// Region allocation and pool refills are dominated by small, short-lived
/// allocations, where mimalloc's thread-local caching pays off.
#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod base64;
pub mod common;
pub mod encoding;
pub mod fill;
pub mod hex;
pub mod int;
pub mod latin1;
pub mod region;
pub mod search;
pub mod utf8;

pub use common::{Error, Result, Window, as_host_index, ordering_to_i32};
pub use encoding::{
    Encoding, atob, btoa, byte_length, byte_length_named, decode, decode_named, transcode, write,
    write_named,
};
pub use fill::{fill_byte, fill_pattern};
pub use latin1::is_ascii;
pub use region::{Region, RegionPool, allocate, allocate_checked, allocate_uninit, allocate_zeroed};
pub use search::{
    compare, equals, includes, index_of_buffer, index_of_byte, last_index_of_buffer,
    last_index_of_byte,
};
pub use utf8::is_valid as is_utf8;
