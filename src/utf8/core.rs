use std::borrow::Cow;
use std::ops::RangeInclusive;

/// U+FFFD REPLACEMENT CHARACTER, substituted for each malformed unit.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Length of the well-formed sequence starting at `data[i]`, or `None` if the
/// byte there does not begin one.
///
/// Leading bytes 0x80-0xC1 and 0xF5-0xFF never start a sequence. Continuation
/// bytes must be 0x80-0xBF, and the second byte is narrowed for 0xE0
/// (no overlongs), 0xED (no surrogates), 0xF0 (no overlongs) and 0xF4
/// (nothing past U+10FFFF). A sequence cut off by the end of `data` is invalid.
#[inline]
fn sequence_len(data: &[u8], i: usize) -> Option<usize> {
    let b1 = data[i];
    if b1 <= 0x7F {
        return Some(1);
    }

    let (len, second): (usize, RangeInclusive<u8>) = match b1 {
        0xC2..=0xDF => (2, 0x80..=0xBF),
        0xE0 => (3, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
        0xED => (3, 0x80..=0x9F),
        0xF0 => (4, 0x90..=0xBF),
        0xF1..=0xF3 => (4, 0x80..=0xBF),
        0xF4 => (4, 0x80..=0x8F),
        _ => return None,
    };

    let seq = data.get(i..i + len)?;
    if !second.contains(&seq[1]) {
        return None;
    }
    if seq[2..].iter().all(|&b| is_continuation(b)) {
        Some(len)
    } else {
        None
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Single left-to-right scan: true if every byte belongs to a well-formed sequence.
pub fn is_valid(data: &[u8]) -> bool {
    let mut i = 0;
    while i < data.len() {
        // ASCII runs are the common case
        if data[i] <= 0x7F {
            i += 1;
            continue;
        }
        match sequence_len(data, i) {
            Some(len) => i += len,
            None => return false,
        }
    }
    true
}

/// Decode bytes as UTF-8, replacing malformed input with U+FFFD.
///
/// Valid input is borrowed as-is. Otherwise every malformed unit becomes one
/// replacement character and the scan resumes one byte past the fault, so a
/// truncated three-byte sequence yields one U+FFFD per stray byte.
pub fn decode_with_replacement(data: &[u8]) -> Cow<'_, str> {
    if is_valid(data) {
        // SAFETY: `is_valid` accepts exactly the well-formed UTF-8 byte sequences.
        return Cow::Borrowed(unsafe { std::str::from_utf8_unchecked(data) });
    }
    Cow::Owned(decode_slow(data))
}

/// Byte-by-byte repair pass, only reached when validation failed.
fn decode_slow(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() + data.len() / 10);
    let mut replaced = 0usize;
    // Start of the current run of well-formed bytes
    let mut run = 0;
    let mut i = 0;

    while i < data.len() {
        match sequence_len(data, i) {
            Some(len) => i += len,
            None => {
                // SAFETY: data[run..i] consists solely of sequences accepted by `sequence_len`.
                out.push_str(unsafe { std::str::from_utf8_unchecked(&data[run..i]) });
                out.push(REPLACEMENT);
                replaced += 1;
                i += 1;
                run = i;
            }
        }
    }
    // SAFETY: as above, the tail run only holds accepted sequences.
    out.push_str(unsafe { std::str::from_utf8_unchecked(&data[run..]) });

    log::trace!(
        "utf8 slow path: {} bytes decoded with {} replacement characters",
        data.len(),
        replaced
    );
    out
}
