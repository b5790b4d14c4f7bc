use primkit_core::{add, checked_factorial, factorial, multiply, ArithError};

const SAMPLES: [i32; 9] = [0, 1, -1, 7, -13, 46_341, i32::MAX, i32::MIN, 1 << 30];

#[test]
fn add_and_multiply_are_commutative() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
            assert_eq!(multiply(a, b), multiply(b, a), "multiply({a}, {b})");
        }
    }
}

#[test]
fn add_and_multiply_basic_values() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-2, 3), 1);
    assert_eq!(multiply(6, 7), 42);
    assert_eq!(multiply(-6, 7), -42);
}

#[test]
fn factorial_known_values() {
    assert_eq!(factorial(0), 1);
    assert_eq!(factorial(1), 1);
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(10), 3_628_800);
}

#[test]
fn factorial_is_one_for_all_n_at_most_one() {
    for n in [1, 0, -1, -2, -100, i32::MIN] {
        assert_eq!(factorial(n), 1, "n={n}");
    }
}

#[test]
fn factorial_wraps_past_twelve() {
    assert_eq!(factorial(13), 13_i32.wrapping_mul(479_001_600));
    assert_eq!(checked_factorial(13), Err(ArithError::Overflow { n: 13 }));
}
