use std::fmt;
use std::mem;

use crate::element::Scalar;
use crate::error::{Axis, MatrixError, Result};

/// A dense matrix with exclusively-owned, contiguous storage.
///
/// Elements are stored row-major: `(r, c)` lives at flat index
/// `r * cols + c`. `data.len() == rows * cols` holds for every
/// constructed value; operations that would break a shape rule fail
/// before touching the receiver, so a failed call leaves it unchanged.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `rows` x `cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a one-filled `rows` x `cols` matrix.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::one(); rows * cols],
        }
    }

    /// Create a matrix that adopts `data` as its row-major elements.
    ///
    /// # Errors
    /// `DimensionMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The elements in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Overwrite every element with zero; returns the receiver so
    /// calls can be chained.
    pub fn fill_zeros(&mut self) -> &mut Self {
        self.data.fill(T::zero());
        self
    }

    /// Overwrite every element with one; returns the receiver.
    pub fn fill_ones(&mut self) -> &mut Self {
        self.data.fill(T::one());
        self
    }

    /// Borrow the element at `(row, col)`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index exceeds its dimension.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_index(row, col)?;
        Ok(&self.data[row * self.cols + col])
    }

    /// Mutably borrow the element at `(row, col)`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index exceeds its dimension.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_index(row, col)?;
        Ok(&mut self.data[row * self.cols + col])
    }

    /// Borrow row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Col,
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// Copy `values` into row `row`, starting at column 0. A short
    /// slice leaves the remaining columns untouched.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `row >= rows`; `SizeTooLarge` if
    /// `values.len() > cols`.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        if values.len() > self.cols {
            return Err(MatrixError::SizeTooLarge {
                axis: Axis::Row,
                len: values.len(),
                bound: self.cols,
            });
        }
        let start = row * self.cols;
        self.data[start..start + values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Copy `values` into column `col`, starting at row 0. A short
    /// slice leaves the remaining rows untouched.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `col >= cols`; `SizeTooLarge` if
    /// `values.len() > rows`.
    pub fn set_col(&mut self, col: usize, values: &[T]) -> Result<()> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Col,
                index: col,
                bound: self.cols,
            });
        }
        if values.len() > self.rows {
            return Err(MatrixError::SizeTooLarge {
                axis: Axis::Col,
                len: values.len(),
                bound: self.rows,
            });
        }
        for (i, &v) in values.iter().enumerate() {
            self.data[i * self.cols + col] = v;
        }
        Ok(())
    }

    /// Replace every element with `values`, row-major.
    ///
    /// # Errors
    /// `DimensionMismatch` if `values.len() != rows * cols`.
    pub fn set_elements(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.data.len() {
            return Err(MatrixError::DimensionMismatch {
                rows: self.rows,
                cols: self.cols,
                len: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// True if `self + rhs` / `self - rhs` is defined: equal,
    /// nonempty shapes.
    pub fn is_add_compatible(&self, rhs: &Self) -> bool {
        self.rows == rhs.rows && self.cols == rhs.cols && self.rows > 0 && self.cols > 0
    }

    /// True if the matrix product `self * rhs` is defined: inner
    /// dimensions match and no dimension is zero.
    pub fn is_mul_compatible(&self, rhs: &Self) -> bool {
        self.cols == rhs.rows && self.rows > 0 && self.cols > 0 && rhs.cols > 0
    }

    fn incompatible(&self, rhs: &Self) -> MatrixError {
        MatrixError::IncompatibleDimensions {
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: rhs.rows,
            rhs_cols: rhs.cols,
        }
    }

    /// Element-wise sum, as a new matrix.
    ///
    /// # Errors
    /// `IncompatibleDimensions` unless the shapes are add-compatible.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if !self.is_add_compatible(rhs) {
            return Err(self.incompatible(rhs));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Element-wise difference, as a new matrix.
    ///
    /// # Errors
    /// `IncompatibleDimensions` unless the shapes are add-compatible.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        if !self.is_add_compatible(rhs) {
            return Err(self.incompatible(rhs));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Add `rhs` into the receiver; returns it for chaining.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
        if !self.is_add_compatible(rhs) {
            return Err(self.incompatible(rhs));
        }
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a + b;
        }
        Ok(self)
    }

    /// Subtract `rhs` from the receiver; returns it for chaining.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
        if !self.is_add_compatible(rhs) {
            return Err(self.incompatible(rhs));
        }
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a - b;
        }
        Ok(self)
    }

    /// Matrix product: `self` is `[m, k]`, `rhs` is `[k, n]`, the
    /// result is `[m, n]` with `c(i,j) = sum over p of a(i,p)*b(p,j)`.
    ///
    /// # Errors
    /// `IncompatibleDimensions` unless `self.cols == rhs.rows` and
    /// every dimension is nonzero.
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if !self.is_mul_compatible(rhs) {
            return Err(self.incompatible(rhs));
        }
        let (m, k, n) = (self.rows, self.cols, rhs.cols);
        let mut data = vec![T::zero(); m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::zero();
                for p in 0..k {
                    sum = sum + self.data[i * k + p] * rhs.data[p * n + j];
                }
                data[i * n + j] = sum;
            }
        }
        Ok(Matrix {
            rows: m,
            cols: n,
            data,
        })
    }

    /// Replace the receiver with `self * rhs`; returns it for
    /// chaining. The receiver is untouched when the product is not
    /// defined.
    pub fn matmul_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
        *self = self.matmul(rhs)?;
        Ok(self)
    }

    /// Every element multiplied by `scalar`, as a new matrix.
    pub fn scale(&self, scalar: T) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * scalar).collect(),
        }
    }

    /// Multiply every element by `scalar` in place; returns the
    /// receiver for chaining.
    pub fn scale_assign(&mut self, scalar: T) -> &mut Self {
        for x in &mut self.data {
            *x = *x * scalar;
        }
        self
    }

    /// Tolerance equality: true iff the shapes match and every pair
    /// of elements differs by less than `T::epsilon()`. Matrices of
    /// different shapes compare unequal.
    pub fn approx_eq(&self, rhs: &Self) -> bool {
        self.rows == rhs.rows
            && self.cols == rhs.cols
            && self
                .data
                .iter()
                .zip(&rhs.data)
                .all(|(&a, &b)| a.abs_diff(b) < T::epsilon())
    }

    /// Transpose in place, swapping the dimensions; returns the
    /// receiver for chaining.
    ///
    /// A row or column vector keeps its flat layout, so only the
    /// dimension labels swap. Every other shape rebuilds the buffer
    /// out of place, which stays correct for non-square matrices.
    pub fn transpose(&mut self) -> &mut Self {
        if self.rows > 1 && self.cols > 1 {
            let mut data = vec![T::zero(); self.data.len()];
            for r in 0..self.rows {
                for c in 0..self.cols {
                    data[c * self.rows + r] = self.data[r * self.cols + c];
                }
            }
            self.data = data;
        }
        mem::swap(&mut self.rows, &mut self.cols);
        self
    }
}

/// Equality is the tolerance comparison of [`Matrix::approx_eq`].
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

/// Each row on its own line; elements right-aligned to width 6 with
/// two decimal places, each followed by a space.
impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{:>6.2} ", self.data[r * self.cols + c])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_is_zero_filled() {
        let m: Matrix<f64> = Matrix::new(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.data(), &[0.0; 12]);
    }

    #[test]
    fn test_from_vec_checks_length() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(*m.at(1, 2).unwrap(), 6.0);

        let err = Matrix::from_vec(2, 3, vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                rows: 2,
                cols: 3,
                len: 2
            }
        );
    }

    #[test]
    fn test_fill_chaining() {
        let mut m: Matrix<f64> = Matrix::new(2, 2);
        assert_eq!(m.fill_ones().data(), &[1.0; 4]);
        assert_eq!(m.fill_zeros().data(), &[0.0; 4]);
        assert!(m.approx_eq(&Matrix::new(2, 2)));
    }

    #[test]
    fn test_at_bounds() {
        let mut m: Matrix<f64> = Matrix::new(2, 2);
        *m.at_mut(0, 1).unwrap() = 10.5;
        assert_eq!(*m.at(0, 1).unwrap(), 10.5);

        assert_eq!(
            m.at(2, 0).unwrap_err(),
            MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: 2,
                bound: 2
            }
        );
        assert_eq!(
            m.at(0, 5).unwrap_err(),
            MatrixError::IndexOutOfRange {
                axis: Axis::Col,
                index: 5,
                bound: 2
            }
        );
    }

    #[test]
    fn test_row_slice() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(1).unwrap(), &[4.0, 5.0, 6.0]);
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_set_row_partial() {
        let mut m: Matrix<f64> = Matrix::ones(10, 10);
        m.set_row(0, &[22.0, 33.0, 44.0, 55.0]).unwrap();
        assert_eq!(&m.row(0).unwrap()[..4], &[22.0, 33.0, 44.0, 55.0]);
        assert_eq!(&m.row(0).unwrap()[4..], &[1.0; 6]);
        assert_eq!(m.row(1).unwrap(), &[1.0; 10]);
    }

    #[test]
    fn test_set_row_errors() {
        let mut m: Matrix<f64> = Matrix::new(2, 3);
        assert!(matches!(
            m.set_row(2, &[1.0]).unwrap_err(),
            MatrixError::IndexOutOfRange { axis: Axis::Row, .. }
        ));
        assert!(matches!(
            m.set_row(0, &[1.0, 2.0, 3.0, 4.0]).unwrap_err(),
            MatrixError::SizeTooLarge { axis: Axis::Row, .. }
        ));
        // failed calls must not have touched the receiver
        assert_eq!(m.data(), &[0.0; 6]);
    }

    #[test]
    fn test_set_col_non_square() {
        // 3x2: the column write must land at stride `cols`, not `rows`
        let mut m: Matrix<f64> = Matrix::new(3, 2);
        m.set_col(1, &[7.0, 8.0, 9.0]).unwrap();
        assert_eq!(m.data(), &[0.0, 7.0, 0.0, 8.0, 0.0, 9.0]);
    }

    #[test]
    fn test_set_col_errors() {
        let mut m: Matrix<f64> = Matrix::new(2, 2);
        assert!(matches!(
            m.set_col(2, &[1.0]).unwrap_err(),
            MatrixError::IndexOutOfRange { axis: Axis::Col, .. }
        ));
        assert!(matches!(
            m.set_col(0, &[1.0, 2.0, 3.0]).unwrap_err(),
            MatrixError::SizeTooLarge { axis: Axis::Col, .. }
        ));
    }

    #[test]
    fn test_set_elements() {
        let mut m: Matrix<f64> = Matrix::new(2, 1);
        m.set_elements(&[7.5, 10.8]).unwrap();
        assert_eq!(m.data(), &[7.5, 10.8]);
        assert!(m.set_elements(&[1.0]).is_err());
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![0.5, 1.5, 2.5, 3.5]).unwrap();
        let sum = a.add(&b).unwrap();
        assert!(sum.sub(&b).unwrap().approx_eq(&a));
        // commutative
        assert!(b.add(&a).unwrap().approx_eq(&sum));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a: Matrix<f64> = Matrix::new(2, 2);
        let b: Matrix<f64> = Matrix::new(3, 3);
        assert!(!a.is_add_compatible(&b));
        assert_eq!(
            a.add(&b).unwrap_err(),
            MatrixError::IncompatibleDimensions {
                lhs_rows: 2,
                lhs_cols: 2,
                rhs_rows: 3,
                rhs_cols: 3
            }
        );
    }

    #[test]
    fn test_add_assign_in_place() {
        let mut a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = a.clone();
        a.add_assign(&b).unwrap();
        assert_eq!(a.data(), &[2.0, 4.0, 6.0, 8.0]);
        a.sub_assign(&b).unwrap().sub_assign(&b).unwrap();
        assert_eq!(a.data(), &[0.0; 4]);
    }

    #[test]
    fn test_mul_compatibility() {
        let a: Matrix<f64> = Matrix::new(2, 3);
        let b: Matrix<f64> = Matrix::new(3, 4);
        assert!(a.is_mul_compatible(&b));
        assert!(!a.is_mul_compatible(&a));
        assert!(!b.is_mul_compatible(&a.matmul(&b).unwrap()));
    }

    #[test]
    fn test_matmul_square() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let c = a.matmul(&a).unwrap();
        assert_eq!(c.data(), &[7.0, 10.0, 15.0, 22.0]);
    }

    #[test]
    fn test_matmul_rectangular() {
        // [1,2,3;4,5,6] (2x3) * [7,8;9,10;11,12] (3x2) = [58,64;139,154]
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_abs_diff_eq!(c.data()[0], 58.0);
        assert_abs_diff_eq!(c.data()[1], 64.0);
        assert_abs_diff_eq!(c.data()[2], 139.0);
        assert_abs_diff_eq!(c.data()[3], 154.0);
    }

    #[test]
    fn test_matmul_identity() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut id: Matrix<f64> = Matrix::new(2, 2);
        *id.at_mut(0, 0).unwrap() = 1.0;
        *id.at_mut(1, 1).unwrap() = 1.0;
        assert!(a.matmul(&id).unwrap().approx_eq(&a));
    }

    #[test]
    fn test_matmul_assign_keeps_receiver_on_error() {
        let mut a = Matrix::from_vec(2, 3, vec![1.0; 6]).unwrap();
        let b: Matrix<f64> = Matrix::new(2, 2);
        assert!(a.matmul_assign(&b).is_err());
        assert_eq!(a.data(), &[1.0; 6]);

        let c: Matrix<f64> = Matrix::ones(3, 4);
        a.matmul_assign(&c).unwrap();
        assert_eq!(a.rows(), 2);
        assert_eq!(a.cols(), 4);
        assert_eq!(a.data(), &[3.0; 8]);
    }

    #[test]
    fn test_scale() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(a.scale(1.0).approx_eq(&a));
        assert!(a.scale(0.0).approx_eq(&Matrix::new(2, 2)));
        let mut b = a.clone();
        b.scale_assign(2.0);
        assert_eq!(b.data(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut b = a.clone();
        *b.at_mut(0, 0).unwrap() = 1.0 + f64::EPSILON / 2.0;
        assert!(a.approx_eq(&b));
        *b.at_mut(0, 0).unwrap() = 1.0 + 1e-9;
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn test_approx_eq_shape_mismatch_is_unequal() {
        let a: Matrix<f64> = Matrix::new(2, 3);
        let b: Matrix<f64> = Matrix::new(3, 2);
        assert!(!a.approx_eq(&b));
        assert!(a != b);
    }

    #[test]
    fn test_transpose_square() {
        let mut m = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
            .unwrap();
        m.transpose();
        assert_eq!(m.data(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_transpose_vector_swaps_labels() {
        let mut v = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
        v.transpose();
        assert_eq!(v.rows(), 1);
        assert_eq!(v.cols(), 3);
        assert_eq!(v.data(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_transpose_involutive_non_square() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut m = a.clone();
        m.transpose();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        m.transpose();
        assert!(m.approx_eq(&a));
    }

    #[test]
    fn test_display_fixed_width() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.5, 30.25, 4.0]).unwrap();
        assert_eq!(m.to_string(), "  1.00   2.50 \n 30.25   4.00 \n");
    }

    #[test]
    fn test_integer_matrix() {
        let a = Matrix::from_vec(2, 2, vec![1i32, 2, 3, 4]).unwrap();
        let c = a.matmul(&a).unwrap();
        assert_eq!(c.data(), &[7, 10, 15, 22]);
        assert!(a.approx_eq(&a.clone()));
        assert!(!a.approx_eq(&a.scale(2)));
    }
}
