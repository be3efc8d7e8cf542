// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Vec2`] is a 2D floating-point (`f32`) type used for pointer positions
//! and position deltas. Axis encodings used by input hardware rarely exceed
//! `f32` precision, and all resampling arithmetic is performed in `f32`.

use std::ops::{Add, Mul, Sub};

/// 2D vector
///
/// Usually used as either a coordinate or a difference of coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2::splat(0.0);

    /// Constructs a new instance with each element initialized to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Vec2(value, value)
    }

    /// Take the absolute value of each component
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn abs(self) -> Self {
        Vec2(self.0.abs(), self.1.abs())
    }

    /// Take the maximum component
    #[inline]
    pub fn max_comp(self) -> f32 {
        self.0.max(self.1)
    }

    /// Linear interpolation: `self + alpha * (rhs - self)`
    ///
    /// This form returns `self` exactly when `alpha == 0`. `alpha` is not
    /// clamped; values outside `[0, 1]` extrapolate along the same line.
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn lerp(self, rhs: Self, alpha: f32) -> Self {
        self + (rhs - self) * alpha
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_is_exact_at_end_points() {
        let a = Vec2(0.1, -7.3);
        let b = Vec2(4.5, 2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_extrapolates_beyond_one() {
        let a = Vec2(1.0, 2.0);
        let b = Vec2(2.0, 4.0);
        assert_eq!(a.lerp(b, 1.5), Vec2(2.5, 5.0));
        assert_eq!(Vec2::ZERO.lerp(b, 0.5), Vec2(1.0, 2.0));
    }
}
