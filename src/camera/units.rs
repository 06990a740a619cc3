//! Unit newtypes for the orbit camera.
//!
//! Angles and pointer positions are both plain `f64`s underneath, but they
//! live in different spaces. Keeping them in separate types stops a viewport
//! fraction from being added to an azimuth by accident.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use glam::DVec2;

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f64);

impl Radians {
    pub const ZERO: Self = Self(0.0);
    pub const PI: Self = Self(std::f64::consts::PI);
    pub const INFINITY: Self = Self(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self(f64::NEG_INFINITY);

    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Clamp into `[min, max]` using `max(min, min(max, self))` ordering, so
    /// infinite bounds pass values through untouched.
    pub fn clamp(self, min: Radians, max: Radians) -> Self {
        Self(min.0.max(max.0.min(self.0)))
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Radians {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Radians {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Radians {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Radians {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Pointer position as fractions of the viewport size.
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right. Values
/// outside that range are kept as-is; the cursor may leave the window
/// during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportPoint(pub DVec2);

impl ViewportPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Convert a pixel position into viewport fractions.
    pub fn from_pixels(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self(DVec2::new(x / width, y / height))
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }
}

impl Sub for ViewportPoint {
    type Output = DVec2;

    fn sub(self, rhs: Self) -> DVec2 {
        self.0 - rhs.0
    }
}
