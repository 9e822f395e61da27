//! Single-precision complex scalar, matching the GPU uniform precision.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point in the complex plane. Serialized as `[re, im]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);

    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Narrow a double-precision plane coordinate.
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(re as f32, im as f32)
    }

    pub fn norm_sqr(self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    pub fn norm(self) -> f32 {
        self.re.hypot(self.im)
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).norm()
    }

    pub const fn to_array(self) -> [f32; 2] {
        [self.re, self.im]
    }
}

impl From<[f32; 2]> for Complex {
    fn from([re, im]: [f32; 2]) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex> for [f32; 2] {
    fn from(z: Complex) -> Self {
        z.to_array()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    /// `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f32> for Complex {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}
