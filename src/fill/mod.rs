mod core;


pub use self::core::{fill_byte, fill_pattern};
