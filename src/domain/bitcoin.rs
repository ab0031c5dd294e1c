use serde::Deserialize;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A currency amount held as a binary float.
///
/// Arithmetic is plain `f64` arithmetic, rounding included. Callers that need
/// exact decimal amounts should not use this type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Bitcoin(pub f64);

impl Bitcoin {
    pub const ZERO: Self = Self(0.0);

    /// Strictly below zero. `-0.0` and `NaN` are not negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Bitcoin {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Bitcoin {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Bitcoin {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Bitcoin {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Bitcoin {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
