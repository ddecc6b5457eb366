use std::fmt;

use num_traits::Num;

/// Element types a [`Matrix`](crate::Matrix) can hold.
///
/// Requires the arithmetic a matrix needs (`num_traits::Num` covers
/// `+`, `-`, `*` and zero/one construction) plus an ordering and a
/// tolerance for equality comparison. `epsilon` is the smallest
/// difference the type treats as significant: machine epsilon for
/// floats, `1` for integers (so tolerance comparison degenerates to
/// exact equality).
pub trait Scalar: Num + Copy + PartialOrd + fmt::Display {
    /// Comparison tolerance; two values closer than this are equal.
    fn epsilon() -> Self;

    /// Absolute difference, computed without going negative so it is
    /// safe for unsigned-style types as well.
    fn abs_diff(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
}

impl Scalar for f32 {
    fn epsilon() -> Self {
        f32::EPSILON
    }
}

impl Scalar for f64 {
    fn epsilon() -> Self {
        f64::EPSILON
    }
}

impl Scalar for i32 {
    fn epsilon() -> Self {
        1
    }
}

impl Scalar for i64 {
    fn epsilon() -> Self {
        1
    }
}
