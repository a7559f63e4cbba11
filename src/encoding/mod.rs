mod core;


pub use self::core::{
    Encoding, atob, btoa, byte_length, byte_length_named, decode, decode_named, encode, transcode,
    write, write_named,
};
