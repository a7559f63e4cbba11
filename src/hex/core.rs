const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Convert bytes to lowercase hex string, high nibble first.
pub fn encode(data: &[u8]) -> String {
    let mut out = Vec::with_capacity(data.len() * 2);
    for &b in data {
        out.push(HEX_DIGITS[(b >> 4) as usize]);
        out.push(HEX_DIGITS[(b & 0x0F) as usize]);
    }
    // SAFETY: every pushed byte comes from HEX_DIGITS, which is ASCII.
    unsafe { String::from_utf8_unchecked(out) }
}

/// Bytes produced by decoding `text`: one per complete pair of characters.
#[inline]
pub fn byte_length(text: &str) -> usize {
    text.len() / 2
}

#[inline]
fn digit(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

/// Parse one two-character pair the way a permissive C `strtol(pair, 16)` does.
///
/// Lenient on purpose: parsing stops at the first non-digit, so `"4z"` is
/// 0x04 and `"zz"` is 0x00. Leading whitespace and a sign are accepted in the
/// first position; a negative value wraps to its low byte (`"-1"` is 0xFF).
pub fn parse_pair(hi: u8, lo: u8) -> u8 {
    match (digit(hi), digit(lo)) {
        (Some(h), Some(l)) => (h << 4) | l,
        (Some(h), None) => h,
        (None, Some(l)) => match hi {
            b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b'+' => l,
            b'-' => l.wrapping_neg(),
            _ => 0,
        },
        (None, None) => 0,
    }
}

/// Decode hex text into `dst`, one byte per pair, stopping when either the
/// pairs or the destination run out. A trailing odd character is ignored.
/// Returns the number of bytes written.
pub fn decode_into(text: &str, dst: &mut [u8]) -> usize {
    let pairs = text.as_bytes().chunks_exact(2);
    let mut n = 0;
    for (slot, pair) in dst.iter_mut().zip(pairs) {
        *slot = parse_pair(pair[0], pair[1]);
        n += 1;
    }
    n
}

/// Decode hex text into a new vector. See [`decode_into`].
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = vec![0u8; byte_length(text)];
    let n = decode_into(text, &mut out);
    out.truncate(n);
    out
}
