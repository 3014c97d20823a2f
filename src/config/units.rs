//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles and motor steps to prevent
//! unit confusion at compile time.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Angular position in degrees.
///
/// The user-facing unit of the `P` command. Internally converted to [`Steps`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Motor position in steps (absolute from origin).
///
/// Uses i64 for unlimited range in either direction; negative values are
/// reverse rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Zero steps.
    pub const ZERO: Self = Self(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Check for zero remaining distance.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert an angle to an absolute step position.
    ///
    /// Uses round-half-away-from-zero semantics, so `180.0` degrees at
    /// 200 steps/rev is exactly 100 steps and `-90.0` degrees is -50.
    #[inline]
    pub fn from_degrees(degrees: Degrees, steps_per_revolution: u32) -> Self {
        Self(libm::roundf(degrees.0 / 360.0 * steps_per_revolution as f32) as i64)
    }

    /// Convert to degrees for a given resolution.
    #[inline]
    pub fn to_degrees(self, steps_per_revolution: u32) -> Degrees {
        Degrees(self.0 as f32 * 360.0 / steps_per_revolution as f32)
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
