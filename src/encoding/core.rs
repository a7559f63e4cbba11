use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result, Window};
use crate::{base64, hex, latin1, utf8};

/// Text encodings understood by `write`, `decode` and `byte_length`.
///
/// `binary` is an alias of [`Encoding::Latin1`] and `utf-8` of [`Encoding::Utf8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
    Hex,
    Base64,
}

impl Encoding {
    /// Look up an encoding by its case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "utf8" | "utf-8" => Some(Encoding::Utf8),
            "latin1" | "binary" => Some(Encoding::Latin1),
            "ascii" => Some(Encoding::Ascii),
            "hex" => Some(Encoding::Hex),
            "base64" => Some(Encoding::Base64),
            _ => None,
        }
    }

    /// Resolve a name, falling back to utf8 for anything unrecognized.
    pub fn from_name_or_utf8(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown encoding {:?}, falling back to utf8", name);
            Encoding::Utf8
        })
    }

    pub fn is_encoding(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Latin1 => "latin1",
            Encoding::Ascii => "ascii",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownEncoding(s.to_string()))
    }
}

/// Bytes `text` occupies once encoded, computed without encoding it.
pub fn byte_length(text: &str, encoding: Encoding) -> usize {
    match encoding {
        // Rust strings are already UTF-8, so the length is exact.
        Encoding::Utf8 => text.len(),
        Encoding::Latin1 | Encoding::Ascii => latin1::char_count(text),
        Encoding::Hex => hex::byte_length(text),
        Encoding::Base64 => base64::byte_length(text),
    }
}

/// [`byte_length`] by encoding name. Unknown names count raw text bytes.
pub fn byte_length_named(text: &str, name: &str) -> usize {
    match Encoding::from_name(name) {
        Some(encoding) => byte_length(text, encoding),
        None => {
            log::debug!("unknown encoding {:?}, using raw text length", name);
            text.len()
        }
    }
}

/// Encode `text` into `region[offset..offset + length]`, clamped to the region.
/// Returns the number of bytes actually written.
///
/// utf8 output is cut at a character boundary so no partial character is
/// written. Hex and base64 decode leniently (see their modules).
pub fn write(region: &mut [u8], text: &str, offset: usize, length: usize, encoding: Encoding) -> usize {
    let window = Window::clamp(region.len(), offset, length);
    if window.is_empty() {
        return 0;
    }
    let dst = window.slice_mut(region);

    match encoding {
        Encoding::Utf8 => {
            let mut n = text.len().min(dst.len());
            while !text.is_char_boundary(n) {
                n -= 1;
            }
            dst[..n].copy_from_slice(&text.as_bytes()[..n]);
            n
        }
        Encoding::Latin1 | Encoding::Ascii => latin1::encode_into(text, dst),
        Encoding::Hex => hex::decode_into(text, dst),
        Encoding::Base64 => {
            let decoded = base64::decode(text);
            let n = decoded.len().min(dst.len());
            dst[..n].copy_from_slice(&decoded[..n]);
            n
        }
    }
}

/// [`write`] by encoding name. An unrecognized name is an error here, since
/// guessing would silently store the wrong bytes.
pub fn write_named(
    region: &mut [u8],
    text: &str,
    offset: usize,
    length: usize,
    name: &str,
) -> Result<usize> {
    let encoding: Encoding = name.parse()?;
    Ok(write(region, text, offset, length, encoding))
}

/// Decode `region[offset..offset + length]` (clamped) to text.
/// Valid utf8 is borrowed straight from the region.
pub fn decode(region: &[u8], offset: usize, length: usize, encoding: Encoding) -> Cow<'_, str> {
    let window = Window::clamp(region.len(), offset, length);
    if window.is_empty() {
        return Cow::Borrowed("");
    }
    let data = window.slice(region);

    match encoding {
        Encoding::Utf8 => utf8::decode_with_replacement(data),
        Encoding::Latin1 => Cow::Owned(latin1::decode_latin1(data)),
        Encoding::Ascii => Cow::Owned(latin1::decode_ascii(data)),
        Encoding::Hex => Cow::Owned(hex::encode(data)),
        Encoding::Base64 => Cow::Owned(base64::encode(data)),
    }
}

/// [`decode`] by encoding name. Unknown names decode as utf8.
pub fn decode_named<'a>(region: &'a [u8], offset: usize, length: usize, name: &str) -> Cow<'a, str> {
    decode(region, offset, length, Encoding::from_name_or_utf8(name))
}

/// Encode `text` into a freshly allocated vector of exactly the bytes written.
pub fn encode(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => return text.as_bytes().to_vec(),
        Encoding::Base64 => return base64::decode(text),
        _ => {}
    }
    let mut out = vec![0u8; byte_length(text, encoding)];
    let n = write(&mut out, text, 0, usize::MAX, encoding);
    out.truncate(n);
    out
}

/// Re-encode bytes: decode them under `from`, encode the text under `to`.
pub fn transcode(source: &[u8], from: Encoding, to: Encoding) -> Vec<u8> {
    let text = decode(source, 0, source.len(), from);
    encode(&text, to)
}

/// Decode base64 into a latin1 "binary string".
pub fn atob(data: &str) -> String {
    latin1::decode_latin1(&base64::decode(data))
}

/// Encode a latin1 "binary string" as base64.
/// Characters above U+00FF cannot be represented and are rejected.
pub fn btoa(data: &str) -> Result<String> {
    if let Some(ch) = data.chars().find(|&ch| u32::from(ch) > 0xFF) {
        return Err(Error::InvalidArgument(format!(
            "character {:?} (U+{:04X}) is outside the latin1 range",
            ch,
            u32::from(ch)
        )));
    }
    Ok(base64::encode(&encode(data, Encoding::Latin1)))
}
