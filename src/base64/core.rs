const BASE64_ENGINE: &base64_simd::Base64 = &base64_simd::STANDARD;

/// Sentinel in [`DECODE_TABLE`] for bytes outside the alphabet, `=` included.
const INVALID: u8 = 0xFF;

/// Reverse lookup for the RFC 4648 standard alphabet.
/// Built at compile time so there is no mutable global state.
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    const ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Number of base64 characters produced for `len` input bytes: `4 * ceil(len / 3)`.
#[inline]
pub fn encoded_length(len: usize) -> usize {
    BASE64_ENGINE.encoded_length(len)
}

/// Encode bytes as padded standard base64.
/// SIMD-encoded; output length is always a multiple of 4.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }
    BASE64_ENGINE.encode_to_string(data)
}

/// Count trailing `=` characters, looking at most two back.
#[inline]
fn padding_count(text: &[u8]) -> usize {
    match text {
        [.., b'=', b'='] => 2,
        [.., b'='] => 1,
        _ => 0,
    }
}

/// Bytes that [`decode`] produces for well-formed input, computed without decoding.
/// `(len * 3) / 4 - padding`, saturating at zero for degenerate input like `"="`.
#[inline]
pub fn byte_length(text: &str) -> usize {
    let text = text.as_bytes();
    ((text.len() * 3) / 4).saturating_sub(padding_count(text))
}

/// Lenient base64 decode.
///
/// Never fails. Decoding stops at the first group whose first or second
/// character is outside the alphabet; `=` and any other invalid character in
/// the third or fourth position simply produce no byte for that position.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(byte_length(text));
    decode_into(text.as_bytes(), &mut out);
    out
}

/// Decode into an existing vector, appending. See [`decode`].
pub fn decode_into(text: &[u8], out: &mut Vec<u8>) {
    for group in text.chunks(4) {
        let a = lookup(group, 0);
        let b = lookup(group, 1);
        if a == INVALID || b == INVALID {
            break;
        }
        out.push((a << 2) | (b >> 4));

        let c = lookup(group, 2);
        if c == INVALID {
            continue;
        }
        out.push((b << 4) | (c >> 2));

        let d = lookup(group, 3);
        if d != INVALID {
            out.push((c << 6) | d);
        }
    }
}

/// Table value of the character at `pos`, or [`INVALID`] past the group end.
#[inline]
fn lookup(group: &[u8], pos: usize) -> u8 {
    group
        .get(pos)
        .map_or(INVALID, |&ch| DECODE_TABLE[ch as usize])
}
