//! Operator sugar layered over the checked `Matrix` API.
//!
//! The inherent methods return `Result` and are the primary surface;
//! these impls are for call sites that prefer `+`, `-` and `*` and
//! accept a panic on a shape violation.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::element::Scalar;
use crate::matrix::Matrix;

/// Element-wise sum.
///
/// # Panics
/// Panics if the shapes are not add-compatible.
impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Matrix<T> {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Element-wise difference.
///
/// # Panics
/// Panics if the shapes are not add-compatible.
impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Matrix<T> {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Matrix product.
///
/// # Panics
/// Panics if the shapes are not mul-compatible.
impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Matrix<T> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Scalar multiplication, matrix on the left.
impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

// Scalar on the left needs one impl per element type; a blanket impl
// over T would be a foreign-type impl for the primitives.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

scalar_lhs_mul!(f32, f64, i32, i64);

/// # Panics
/// Panics if the shapes are not add-compatible.
impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        Matrix::add_assign(self, rhs).map(|_| ()).unwrap_or_else(|e| panic!("{e}"));
    }
}

/// # Panics
/// Panics if the shapes are not add-compatible.
impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        Matrix::sub_assign(self, rhs).map(|_| ()).unwrap_or_else(|e| panic!("{e}"));
    }
}

/// In-place matrix product; the receiver takes the product's shape.
///
/// # Panics
/// Panics if the shapes are not mul-compatible.
impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        self.matmul_assign(rhs).map(|_| ()).unwrap_or_else(|e| panic!("{e}"));
    }
}

/// In-place scalar multiplication.
impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_assign(scalar);
    }
}

/// # Panics
/// Panics if the index is out of range.
impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
/// Panics if the index is out of range.
impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col).unwrap_or_else(|e| panic!("{e}"))
    }
}
