mod core;


pub use self::core::{char_count, decode_ascii, decode_latin1, encode_into, is_ascii};
