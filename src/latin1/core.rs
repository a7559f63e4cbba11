use crate::utf8::REPLACEMENT;

/// Check if all bytes in the slice are ASCII (< 128).
/// Uses word-at-a-time trick for SIMD-like speed.
#[inline]
pub fn is_ascii(data: &[u8]) -> bool {
    let chunks = data.chunks_exact(8);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        if u64::from_ne_bytes(word) & 0x8080_8080_8080_8080 != 0 {
            return false;
        }
    }

    remainder.iter().all(|&b| b & 0x80 == 0)
}

/// Decode latin1 (alias: binary). Every byte is the code point of the same value,
/// so bytes >= 0x80 come out as two-byte UTF-8 sequences. Never fails.
pub fn decode_latin1(data: &[u8]) -> String {
    if is_ascii(data) {
        // SAFETY: ASCII bytes are valid single-byte UTF-8.
        return unsafe { String::from_utf8_unchecked(data.to_vec()) };
    }
    let mut out = String::with_capacity(data.len() * 2);
    out.extend(data.iter().map(|&b| char::from(b)));
    out
}

/// Decode ASCII: bytes <= 0x7F pass through, every other byte becomes U+FFFD.
pub fn decode_ascii(data: &[u8]) -> String {
    if is_ascii(data) {
        // SAFETY: ASCII bytes are valid single-byte UTF-8.
        return unsafe { String::from_utf8_unchecked(data.to_vec()) };
    }
    let mut out = String::with_capacity(data.len() + data.len() / 2);
    for &b in data {
        if b <= 0x7F {
            out.push(char::from(b));
        } else {
            out.push(REPLACEMENT);
        }
    }
    out
}

/// Number of bytes `text` occupies once written as latin1: one per character.
#[inline]
pub fn char_count(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

/// Write `text` as latin1 into `dst`, one byte per character, truncating each
/// code point to its low 8 bits. Returns the number of bytes written.
pub fn encode_into(text: &str, dst: &mut [u8]) -> usize {
    let mut n = 0;
    for (slot, ch) in dst.iter_mut().zip(text.chars()) {
        *slot = (u32::from(ch) & 0xFF) as u8;
        n += 1;
    }
    n
}
