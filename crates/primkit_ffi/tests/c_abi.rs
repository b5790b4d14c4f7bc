use primkit_ffi::{
    add, count_bits, factorial, get_counter, increment_counter, multiply, point_init, rect_area,
    rect_contains_point, rect_init, reset_counter, reverse_bits, string_copy, string_length,
    Point, Rectangle,
};
use std::ffi::{c_char, CStr};
use std::ptr;

#[test]
fn scalar_exports_delegate_to_core() {
    assert_eq!(add(2, 40), 42);
    assert_eq!(multiply(-3, 5), -15);
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(-4), 1);
    assert_eq!(count_bits(0xFFFF_FFFF), 32);
    assert_eq!(reverse_bits(0b1000_0000), 0b0000_0001);
}

#[test]
fn geometry_exports_write_through_pointers() {
    let mut rect = Rectangle::default();
    let mut point = Point::default();
    unsafe {
        rect_init(&mut rect, 0, 0, 1, 1);
        point_init(&mut point, 0, 0);
        assert_eq!(rect_area(&rect), 1);
        assert!(rect_contains_point(&rect, &point));

        point_init(&mut point, 1, 0);
        assert!(!rect_contains_point(&rect, &point));
    }
    assert_eq!(rect, Rectangle::new(0, 0, 1, 1));
}

#[test]
fn geometry_exports_tolerate_null() {
    let rect = Rectangle::new(0, 0, 4, 4);
    let point = Point::new(1, 1);
    unsafe {
        point_init(ptr::null_mut(), 1, 2);
        rect_init(ptr::null_mut(), 1, 2, 3, 4);
        assert_eq!(rect_area(ptr::null()), 0);
        assert!(!rect_contains_point(ptr::null(), &point));
        assert!(!rect_contains_point(&rect, ptr::null()));
    }
}

#[test]
fn string_exports_follow_c_semantics() {
    unsafe {
        assert_eq!(string_length(ptr::null()), 0);
        assert_eq!(string_length(c"".as_ptr()), 0);
        assert_eq!(string_length(c"abc".as_ptr()), 3);

        let mut dest = [0x7f as c_char; 8];
        string_copy(dest.as_mut_ptr(), c"hello".as_ptr(), 3);
        assert_eq!(CStr::from_ptr(dest.as_ptr()), c"he");
        assert_eq!(dest[3], 0x7f);

        string_copy(dest.as_mut_ptr(), c"hi".as_ptr(), 8);
        assert_eq!(CStr::from_ptr(dest.as_ptr()), c"hi");
    }
}

#[test]
fn string_copy_null_and_nonpositive_len_are_noops() {
    let mut dest = [0x7f as c_char; 4];
    unsafe {
        string_copy(ptr::null_mut(), c"abc".as_ptr(), 4);
        string_copy(dest.as_mut_ptr(), ptr::null(), 4);
        string_copy(dest.as_mut_ptr(), c"abc".as_ptr(), 0);
        string_copy(dest.as_mut_ptr(), c"abc".as_ptr(), -1);
    }
    assert_eq!(dest, [0x7f as c_char; 4]);
}

#[test]
fn string_copy_does_not_read_past_max_len() {
    // No terminator: only the first `max_len - 1` bytes may be read.
    let src = [b'a' as c_char, b'b' as c_char, b'c' as c_char];
    let mut dest = [0x7f as c_char; 4];
    unsafe {
        string_copy(dest.as_mut_ptr(), src.as_ptr(), 4);
        assert_eq!(CStr::from_ptr(dest.as_ptr()), c"abc");
    }
}

// Only test in this binary touching the process counter.
#[test]
fn counter_exports_share_process_state() {
    reset_counter();
    increment_counter();
    increment_counter();
    assert_eq!(get_counter(), 2);
    assert_eq!(primkit_core::get_counter(), 2);
    reset_counter();
    assert_eq!(get_counter(), 0);
}
