//! Physical pixel unit used for viewport dimensions and seek targets.
//!
//! Settle offsets from the host surface stay floating point through the
//! reconciler, where rounding does the work. [`Px`] covers the integer
//! side: viewport dimensions and the seek targets derived from them.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A physical pixel value.
///
/// Supports negative values so intermediate arithmetic (for example an
/// overscrolled settle offset) does not have to special-case underflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts to f32 for offset arithmetic.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Multiplies by a slide index, clamping at the i32 range.
    pub fn saturating_mul_index(self, index: usize) -> Self {
        if index == 0 {
            return Self::ZERO;
        }
        let wide = i64::from(self.0).saturating_mul(index as i64);
        if wide > i64::from(i32::MAX) {
            Self(i32::MAX)
        } else if wide < i64::from(i32::MIN) {
            Self(i32::MIN)
        } else {
            Self(wide as i32)
        }
    }

}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(320);
        let b = Px(20);

        assert_eq!(a + b, Px(340));
        assert_eq!(a - b, Px(300));
        assert_eq!(Px(i32::MAX) + Px(1), Px(i32::MAX));
    }

    #[test]
    fn test_saturating_mul_index() {
        assert_eq!(Px(320).saturating_mul_index(0), Px::ZERO);
        assert_eq!(Px(320).saturating_mul_index(2), Px(640));
        assert_eq!(Px(i32::MAX).saturating_mul_index(3), Px(i32::MAX));
    }
}
