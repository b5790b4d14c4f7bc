//! Exported C functions.
//!
//! Each export is a thin shim: convert pointers to `Option` references,
//! then delegate to `primkit_core`.

use log::trace;
use primkit_core::{arith, bits, counter, geometry, strings, Point, Rectangle};
use std::ffi::{c_char, c_int, CStr};

const CORE_VERSION_CSTR: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

fn note_absent(symbol: &str) {
    trace!("event=null_input module=ffi status=degraded symbol={symbol}");
}

/// `int add(int a, int b)`; wraps on overflow.
#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    arith::add(a, b)
}

/// `int multiply(int a, int b)`; wraps on overflow.
#[no_mangle]
pub extern "C" fn multiply(a: c_int, b: c_int) -> c_int {
    arith::multiply(a, b)
}

/// `int factorial(int n)`; 1 for `n <= 1`.
#[no_mangle]
pub extern "C" fn factorial(n: c_int) -> c_int {
    arith::factorial(n)
}

/// `void point_init(Point* p, int x, int y)`
///
/// # Safety
/// `p` must be null or point to a writable `Point`.
#[no_mangle]
pub unsafe extern "C" fn point_init(p: *mut Point, x: c_int, y: c_int) {
    // SAFETY: caller guarantees `p` is null or valid for writes.
    let p = unsafe { p.as_mut() };
    if p.is_none() {
        note_absent("point_init");
    }
    geometry::point_init(p, x, y);
}

/// `void rect_init(Rectangle* r, int x, int y, int w, int h)`
///
/// # Safety
/// `r` must be null or point to a writable `Rectangle`.
#[no_mangle]
pub unsafe extern "C" fn rect_init(r: *mut Rectangle, x: c_int, y: c_int, w: c_int, h: c_int) {
    // SAFETY: caller guarantees `r` is null or valid for writes.
    let r = unsafe { r.as_mut() };
    if r.is_none() {
        note_absent("rect_init");
    }
    geometry::rect_init(r, x, y, w, h);
}

/// `int rect_area(const Rectangle* r)`; 0 for null.
///
/// # Safety
/// `r` must be null or point to a readable `Rectangle`.
#[no_mangle]
pub unsafe extern "C" fn rect_area(r: *const Rectangle) -> c_int {
    // SAFETY: caller guarantees `r` is null or valid for reads.
    let r = unsafe { r.as_ref() };
    if r.is_none() {
        note_absent("rect_area");
    }
    geometry::rect_area(r)
}

/// `bool rect_contains_point(const Rectangle* r, const Point* p)`; false if either is null.
///
/// # Safety
/// `r` and `p` must each be null or point to a readable value.
#[no_mangle]
pub unsafe extern "C" fn rect_contains_point(r: *const Rectangle, p: *const Point) -> bool {
    // SAFETY: caller guarantees both pointers are null or valid for reads.
    let (r, p) = unsafe { (r.as_ref(), p.as_ref()) };
    if r.is_none() || p.is_none() {
        note_absent("rect_contains_point");
    }
    geometry::rect_contains_point(r, p)
}

/// `int string_length(const char* s)`; 0 for null.
///
/// # Safety
/// `s` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn string_length(s: *const c_char) -> c_int {
    if s.is_null() {
        note_absent("string_length");
        return strings::string_length(None);
    }
    // SAFETY: non-null and NUL-terminated per caller contract.
    let bytes = unsafe { CStr::from_ptr(s) }.to_bytes_with_nul();
    strings::string_length(Some(bytes))
}

/// `void string_copy(char* dest, const char* src, int max_len)`
///
/// Copies at most `max_len - 1` bytes and always NUL-terminates `dest`.
/// Null pointers or `max_len <= 0` are a no-op.
///
/// # Safety
/// - `dest` must be writable for `max_len` bytes.
/// - `src` must be NUL-terminated or readable for `max_len - 1` bytes.
/// - The buffers must not overlap.
#[no_mangle]
pub unsafe extern "C" fn string_copy(dest: *mut c_char, src: *const c_char, max_len: c_int) {
    if dest.is_null() || src.is_null() {
        note_absent("string_copy");
        return;
    }
    let Ok(capacity) = usize::try_from(max_len) else {
        return;
    };
    if capacity == 0 {
        return;
    }

    // Only read the source bytes the copy can consume.
    let mut src_len = 0;
    // SAFETY: reads stay within `max_len - 1` bytes or stop at the terminator.
    while src_len < capacity - 1 && unsafe { *src.add(src_len) } != 0 {
        src_len += 1;
    }

    // SAFETY: `src_len` bytes were just read; `dest` holds at least
    // `src_len + 1 <= max_len` bytes; the regions are disjoint per contract.
    let (src, dest) = unsafe {
        (
            std::slice::from_raw_parts(src.cast::<u8>(), src_len),
            std::slice::from_raw_parts_mut(dest.cast::<u8>(), src_len + 1),
        )
    };
    strings::string_copy(Some(dest), Some(src), max_len);
}

/// `int count_bits(uint32_t value)`
#[no_mangle]
pub extern "C" fn count_bits(value: u32) -> c_int {
    bits::count_bits(value)
}

/// `uint8_t reverse_bits(uint8_t b)`
#[no_mangle]
pub extern "C" fn reverse_bits(b: u8) -> u8 {
    bits::reverse_bits(b)
}

/// `void increment_counter(void)`
#[no_mangle]
pub extern "C" fn increment_counter() {
    counter::increment_counter();
}

/// `int get_counter(void)`
#[no_mangle]
pub extern "C" fn get_counter() -> c_int {
    counter::get_counter()
}

/// `void reset_counter(void)`
#[no_mangle]
pub extern "C" fn reset_counter() {
    counter::reset_counter();
}

/// Returns the symbol/layout contract version.
#[no_mangle]
pub extern "C" fn primkit_abi_version() -> u32 {
    crate::ABI_VERSION
}

/// Returns the core version as a static NUL-terminated string. Never free it.
#[no_mangle]
pub extern "C" fn primkit_core_version() -> *const c_char {
    CORE_VERSION_CSTR.as_ptr().cast()
}

/// Starts file logging. Returns 0 on success and -1 on failure.
///
/// Safe to call repeatedly with the same arguments.
///
/// # Safety
/// `level` and `log_dir` must be null or point to NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn primkit_init_logging(level: *const c_char, log_dir: *const c_char) -> c_int {
    if level.is_null() || log_dir.is_null() {
        note_absent("primkit_init_logging");
        return -1;
    }
    // SAFETY: both pointers are non-null and NUL-terminated per contract.
    let (level, log_dir) = unsafe { (CStr::from_ptr(level), CStr::from_ptr(log_dir)) };
    let (Ok(level), Ok(log_dir)) = (level.to_str(), log_dir.to_str()) else {
        return -1;
    };
    match primkit_core::init_logging(level, log_dir) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}
