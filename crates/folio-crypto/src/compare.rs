//! Constant-time string equality.

/// Compare two strings without leaking where they first differ.
///
/// Every byte position up to `max(len(left), len(right))` is visited
/// regardless of earlier mismatches, accumulating a running bitwise OR of
/// per-position XOR differences (missing positions read as zero) plus a
/// length-difference term. Equality holds iff the accumulator ends at zero.
///
/// Must not early-return: response latency would otherwise reveal the length
/// of the matching prefix of an expected digest.
pub fn constant_time_equals(left: &str, right: &str) -> bool {
    let left = left.as_bytes();
    let right = right.as_bytes();
    let width = left.len().max(right.len());

    let mut diff = left.len() ^ right.len();
    for index in 0..width {
        let l = left.get(index).copied().unwrap_or(0) as usize;
        let r = right.get(index).copied().unwrap_or(0) as usize;
        diff |= l ^ r;
    }

    diff == 0
}
