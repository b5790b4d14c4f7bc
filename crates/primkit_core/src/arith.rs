//! Fixed-width integer arithmetic.
//!
//! # Invariants
//! - All operations use `i32` with two's-complement wraparound.
//! - `factorial` is directly recursive and returns 1 for every `n <= 1`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returns `a + b`, wrapping on overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns `a * b`, wrapping on overflow.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Recursive factorial.
///
/// Negative inputs hit the `n <= 1` base case and return 1. Results past
/// `12!` wrap silently; use [`checked_factorial`] to detect that.
pub fn factorial(n: i32) -> i32 {
    if n <= 1 {
        return 1;
    }
    n.wrapping_mul(factorial(n - 1))
}

/// Recursive factorial that reports overflow instead of wrapping.
///
/// # Errors
/// - Returns `ArithError::Overflow` when the product does not fit in `i32`.
pub fn checked_factorial(n: i32) -> Result<i32, ArithError> {
    if n <= 1 {
        return Ok(1);
    }
    let rest = checked_factorial(n - 1)?;
    n.checked_mul(rest).ok_or(ArithError::Overflow { n })
}

/// Arithmetic errors for the checked variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// `n!` does not fit in `i32`.
    Overflow { n: i32 },
}

impl Display for ArithError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { n } => write!(f, "factorial({n}) overflows i32"),
        }
    }
}

impl Error for ArithError {}
