pub mod core;


pub use self::core::{byte_length, decode, decode_into, encode, encoded_length};
