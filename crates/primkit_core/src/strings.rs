//! NUL-terminated byte string helpers over caller-owned buffers.
//!
//! # Invariants
//! - A string ends at its first NUL byte, or at the end of the slice.
//! - `string_copy` never writes more than `max_len` bytes nor past `dest.len()`.
//! - Nothing here allocates.

/// Number of bytes before the first NUL. Absent input has length 0.
pub fn string_length(s: Option<&[u8]>) -> i32 {
    let Some(s) = s else {
        return 0;
    };
    let mut len = 0;
    while len < s.len() && s[len] != 0 {
        len += 1;
    }
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Bounded copy of `src` into `dest`.
///
/// Copies at most `max_len - 1` bytes, stopping early at the NUL in `src`,
/// then writes a NUL after the last copied byte. Absent buffers or
/// `max_len <= 0` leave `dest` untouched.
pub fn string_copy(dest: Option<&mut [u8]>, src: Option<&[u8]>, max_len: i32) {
    let (Some(dest), Some(src)) = (dest, src) else {
        return;
    };
    if max_len <= 0 || dest.is_empty() {
        return;
    }

    let capacity = usize::try_from(max_len).map_or(dest.len(), |cap| cap.min(dest.len()));
    let mut i = 0;
    while i < capacity - 1 && i < src.len() && src[i] != 0 {
        dest[i] = src[i];
        i += 1;
    }
    dest[i] = 0;
}
