//! Iterative Fibonacci calculator.
//!
//! The sequence is zero-indexed: F(0) = 0, F(1) = 1, and
//! F(n) = F(n-1) + F(n-2) for n >= 2. Values are returned as
//! [`num_bigint::BigUint`], so there is no upper bound on `n` beyond
//! available memory.

pub mod sequence;

pub use sequence::{fibonacci, FibonacciError, Result};
