use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Result type for Fibonacci computations
pub type Result<T> = std::result::Result<T, FibonacciError>;

/// Errors that can occur when computing a Fibonacci number
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("n must be non-negative, got {0}")]
    NegativeInput(i64),
}

/// Compute the nth Fibonacci number.
///
/// * `n` - the zero-based position in the sequence.
///
/// Runs the bottom-up iteration over a `(prev, curr)` pair, one step per
/// index from 2 through `n`. O(n) big-integer additions, two live values.
///
/// Returns [`FibonacciError::NegativeInput`] when `n < 0`; every
/// non-negative input produces a value.
pub fn fibonacci(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(FibonacciError::NegativeInput(n));
    }
    if n == 0 {
        return Ok(BigUint::zero());
    }

    let mut prev = BigUint::zero();
    let mut curr = BigUint::one();
    for _ in 2..=n {
        let next = &prev + &curr;
        prev = mem::replace(&mut curr, next);
    }
    Ok(curr)
}
