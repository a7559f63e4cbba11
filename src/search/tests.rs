use super::*;
use proptest::prelude::*;
use std::cmp::Ordering;

// ===== BYTE SEARCH =====

#[test]
fn test_index_of_byte() {
    let data = b"hello world";
    assert_eq!(index_of_byte(data, b'o', 0, data.len()), Some(4));
    assert_eq!(index_of_byte(data, b'o', 5, data.len()), Some(7));
    assert_eq!(index_of_byte(data, b'z', 0, data.len()), None);
}

#[test]
fn test_index_of_byte_respects_window_length() {
    let data = b"hello world";
    // 'w' is at 6, outside [0, 5)
    assert_eq!(index_of_byte(data, b'w', 0, 5), None);
}

#[test]
fn test_index_of_byte_offset_past_end() {
    assert_eq!(index_of_byte(b"abc", b'a', 3, 10), None);
    assert_eq!(index_of_byte(b"abc", b'a', 100, 10), None);
}

#[test]
fn test_last_index_of_byte() {
    let data = b"hello world";
    assert_eq!(last_index_of_byte(data, b'o', 0, data.len()), Some(7));
    assert_eq!(last_index_of_byte(data, b'o', 0, 6), Some(4));
    assert_eq!(last_index_of_byte(data, b'h', 1, 100), None);
    assert_eq!(last_index_of_byte(b"", b'h', 0, 0), None);
}

// ===== NEEDLE SEARCH =====

#[test]
fn test_index_of_buffer_world() {
    let data = b"hello world";
    assert_eq!(index_of_buffer(data, b"world", 0, 11), Some(6));
}

#[test]
fn test_index_of_buffer_from_offset() {
    let data = b"abcabcabc";
    assert_eq!(index_of_buffer(data, b"abc", 1, 100), Some(3));
    assert_eq!(index_of_buffer(data, b"c", 3, 100), Some(5));
}

#[test]
fn test_index_of_buffer_must_fit_window() {
    let data = b"hello world";
    // "world" straddles the end of [0, 9)
    assert_eq!(index_of_buffer(data, b"world", 0, 9), None);
    assert_eq!(index_of_buffer(data, b"hello world!", 0, 100), None);
}

#[test]
fn test_index_of_buffer_empty_needle() {
    let data = b"0123456789";
    assert_eq!(index_of_buffer(data, b"", 3, 5), Some(3));
    assert_eq!(index_of_buffer(data, b"", 0, 0), Some(0));
    // Offset past the end matches at the end of the region
    assert_eq!(index_of_buffer(data, b"", 25, 5), Some(10));
}

#[test]
fn test_last_index_of_buffer() {
    let data = b"abcabcabc";
    assert_eq!(last_index_of_buffer(data, b"abc", 0, 9), Some(6));
    assert_eq!(last_index_of_buffer(data, b"abc", 0, 8), Some(3));
    assert_eq!(last_index_of_buffer(data, b"b", 0, 8), Some(7));
    assert_eq!(last_index_of_buffer(data, b"xyz", 0, 9), None);
    assert_eq!(last_index_of_buffer(data, b"abc", 9, 9), None);
}

#[test]
fn test_last_index_of_buffer_empty_needle_matches_window_end() {
    let data = b"0123456789";
    assert_eq!(last_index_of_buffer(data, b"", 2, 5), Some(7));
    assert_eq!(last_index_of_buffer(data, b"", 8, 5), Some(10));
    assert_eq!(last_index_of_buffer(data, b"", usize::MAX, usize::MAX), Some(10));
}

#[test]
fn test_includes() {
    assert!(includes(b"hello world", b"lo w", 0, 11));
    assert!(!includes(b"hello world", b"hello", 1, 11));
}

// ===== COMPARE =====

#[test]
fn test_compare_equal() {
    assert_eq!(compare(b"abc", 0, 3, b"abc", 0, 3), Ordering::Equal);
}

#[test]
fn test_compare_bytes_differ() {
    assert_eq!(compare(b"abc", 0, 3, b"abd", 0, 3), Ordering::Less);
    assert_eq!(compare(b"b", 0, 1, b"abc", 0, 3), Ordering::Greater);
}

#[test]
fn test_compare_shorter_prefix_first() {
    assert_eq!(compare(b"ab", 0, 2, b"abc", 0, 3), Ordering::Less);
    assert_eq!(compare(b"abc", 0, 3, b"ab", 0, 2), Ordering::Greater);
}

#[test]
fn test_compare_windows() {
    // "llo" vs "llo"
    assert_eq!(compare(b"hello", 2, 3, b"yellow", 2, 3), Ordering::Equal);
    // Overrunning windows are clamped: "lo" vs "low"
    assert_eq!(compare(b"hello", 3, 10, b"yellow", 3, 10), Ordering::Less);
    // Offsets past the end compare as empty
    assert_eq!(compare(b"abc", 9, 1, b"", 0, 0), Ordering::Equal);
}

#[test]
fn test_compare_unsigned_bytes() {
    assert_eq!(compare(&[0x7F], 0, 1, &[0x80], 0, 1), Ordering::Less);
}

#[test]
fn test_equals() {
    assert!(equals(b"abc", b"abc"));
    assert!(!equals(b"abc", b"abcd"));
    assert!(!equals(b"abc", b"abd"));
}

// ===== PROPERTIES =====

proptest! {
    #[test]
    fn prop_index_of_byte_is_lowest(data in proptest::collection::vec(0u8..4, 0..64), v in 0u8..4) {
        let expected = data.iter().position(|&b| b == v);
        prop_assert_eq!(index_of_byte(&data, v, 0, data.len()), expected);
    }

    #[test]
    fn prop_last_index_of_byte_is_highest(data in proptest::collection::vec(0u8..4, 0..64), v in 0u8..4) {
        let expected = data.iter().rposition(|&b| b == v);
        prop_assert_eq!(last_index_of_byte(&data, v, 0, data.len()), expected);
    }

    #[test]
    fn prop_needle_search_matches_naive(
        data in proptest::collection::vec(0u8..3, 0..48),
        needle in proptest::collection::vec(0u8..3, 1..4),
    ) {
        let first = data.windows(needle.len()).position(|w| w == needle.as_slice());
        let last = data.windows(needle.len()).rposition(|w| w == needle.as_slice());
        prop_assert_eq!(index_of_buffer(&data, &needle, 0, data.len()), first);
        prop_assert_eq!(last_index_of_buffer(&data, &needle, 0, data.len()), last);
    }

    #[test]
    fn prop_compare_antisymmetric(
        a in proptest::collection::vec(any::<u8>(), 0..16),
        b in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let ab = compare(&a, 0, a.len(), &b, 0, b.len());
        let ba = compare(&b, 0, b.len(), &a, 0, a.len());
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(compare(&a, 0, a.len(), &a, 0, a.len()), Ordering::Equal);
        prop_assert_eq!(ab, a.cmp(&b));
    }
}
