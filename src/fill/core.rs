use crate::common::Window;

/// Set every byte of the clamped window to `value`.
pub fn fill_byte(region: &mut [u8], value: u8, offset: usize, length: usize) {
    let window = Window::clamp(region.len(), offset, length);
    window.slice_mut(region).fill(value);
}

/// Repeat `pattern` across the clamped window, starting from its first byte.
/// The last repetition is cut short if the window ends mid-pattern, so `"abc"`
/// over 7 bytes gives `abcabca`. An empty pattern leaves the region untouched.
pub fn fill_pattern(region: &mut [u8], pattern: &[u8], offset: usize, length: usize) {
    let window = Window::clamp(region.len(), offset, length);
    if window.is_empty() || pattern.is_empty() {
        return;
    }
    let dst = window.slice_mut(region);

    if let [byte] = pattern {
        dst.fill(*byte);
        return;
    }

    // Seed one copy, then keep doubling the filled prefix with copy_within.
    // Every copy starts at offset 0, so the pattern phase is preserved.
    let first = pattern.len().min(dst.len());
    dst[..first].copy_from_slice(&pattern[..first]);
    let mut filled = first;
    while filled < dst.len() {
        let n = filled.min(dst.len() - filled);
        dst.copy_within(..n, filled);
        filled += n;
    }
}
