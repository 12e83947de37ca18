//! UTF-8 code point counting and scanning over raw byte ranges.
//!
//! All routines are total: they count leading (non-continuation) bytes, so
//! malformed input yields an unspecified but in-bounds answer rather than a
//! fault.

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of code points encoded in `bytes`.
///
/// Counts leading bytes, so the result equals the code point count for
/// well-formed UTF-8 and stays within `[0, bytes.len()]` otherwise.
pub fn count_code_points(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| !is_continuation(**b)).count()
}

/// Byte index reached after skipping `count` code points from the start.
///
/// Returns `bytes.len()` when the range holds fewer than `count` code
/// points; never overruns the range.
pub fn skip_code_points_forward(bytes: &[u8], count: usize) -> usize {
    let mut remaining = count;
    for (i, byte) in bytes.iter().enumerate() {
        if !is_continuation(*byte) {
            if remaining == 0 {
                return i;
            }
            remaining -= 1;
        }
    }
    bytes.len()
}

/// Byte index where the trailing `count` code points of `bytes` begin.
///
/// Returns `0` when the range holds fewer than `count` code points; never
/// overruns the range.
pub fn skip_code_points_backward(bytes: &[u8], count: usize) -> usize {
    let mut remaining = count;
    let mut i = bytes.len();
    while i > 0 && remaining > 0 {
        i -= 1;
        if !is_continuation(bytes[i]) {
            remaining -= 1;
        }
    }
    i
}
