//! `dmat` - Generic dense row-major matrix type with shape-checked arithmetic.
//!
//! This crate provides:
//! - A `Matrix<T>` type over contiguous, exclusively-owned storage
//! - Shape-checked addition, subtraction, matrix product and scalar
//!   multiplication, each with a non-mutating and an in-place form
//! - Row/column mutation, in-place transposition and tolerance-based
//!   equality comparison
//! - A `Scalar` trait bounding usable element types (f32, f64, i32, i64)
//! - Operator impls (`+`, `-`, `*`, indexing) over the checked API
//!
//! Fallible operations validate before mutating: a call that returns
//! an error has not changed the receiver.

pub mod element;
pub mod error;
pub mod matrix;
pub mod ops;

// Re-export primary types at the crate root for convenience.
pub use element::Scalar;
pub use error::{Axis, MatrixError, Result};
pub use matrix::Matrix;
