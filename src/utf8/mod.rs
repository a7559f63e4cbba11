mod core;


pub use self::core::{REPLACEMENT, decode_with_replacement, is_valid};
