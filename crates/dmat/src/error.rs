use std::fmt;

use thiserror::Error;

/// Which dimension an out-of-range index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("data length {len} does not match a {rows}x{cols} matrix")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
    #[error("incompatible dimensions: {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    IncompatibleDimensions {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("{axis} index {index} is out of range ({axis} count is {bound})")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },
    #[error("{len} values do not fit in a {axis} of length {bound}")]
    SizeTooLarge {
        axis: Axis,
        len: usize,
        bound: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_shapes() {
        let e = MatrixError::DimensionMismatch {
            rows: 2,
            cols: 3,
            len: 5,
        };
        assert_eq!(e.to_string(), "data length 5 does not match a 2x3 matrix");

        let e = MatrixError::IndexOutOfRange {
            axis: Axis::Col,
            index: 4,
            bound: 3,
        };
        assert_eq!(
            e.to_string(),
            "column index 4 is out of range (column count is 3)"
        );
    }
}
