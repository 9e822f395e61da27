//! Polynomial coefficient engine for the Newton and Nova fractals.
//!
//! The shader evaluates `p(z)` and `p'(z)` from a coefficient array, while the
//! user edits roots. [`expand_roots`] turns a root list into the coefficients
//! of the monic polynomial `(z - r0)(z - r1)...(z - rn-1)`.
//!
//! Coefficients are stored so that index = degree: `coef[0]` is the constant
//! term and `coef[n]` the leading coefficient, which is always exactly `1`.

mod roots;

pub use roots::{RootError, RootSet};

use crate::complex::Complex;

/// Largest number of roots the shader uniform array supports.
pub const MAX_ROOTS: usize = 10;

/// Coefficient slots in the shader uniform array (one more than roots).
pub const MAX_COEFFICIENTS: usize = MAX_ROOTS + 1;

/// Coefficients of a monic polynomial, lowest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    coef: Vec<Complex>,
}

/// Expand `roots` into the coefficients of the monic polynomial having
/// exactly those roots (repeated roots give repeated factors).
///
/// Always recomputes from scratch. An empty root list yields the constant
/// polynomial `1`.
///
/// # Panics
///
/// Panics if more than [`MAX_ROOTS`] roots are given. Callers enforce the
/// capacity up front, which [`RootSet`] does by construction.
pub fn expand_roots(roots: &[Complex]) -> Coefficients {
    let n = roots.len();
    assert!(
        n <= MAX_ROOTS,
        "expand_roots: {n} roots exceeds capacity of {MAX_ROOTS}"
    );

    let mut coef = vec![Complex::ZERO; n + 1];
    coef[n] = Complex::ONE;

    // After `k` factors the partial product of degree `k` occupies
    // `coef[n - k..=n]` with its leading term pinned at `coef[n]`.
    // Multiplying by `(z - r)` extends it one slot downwards.
    for (k, &root) in roots.iter().rev().enumerate() {
        let neg_root = -root;
        for j in (n - k - 1)..n {
            coef[j] = coef[j] + neg_root * coef[j + 1];
        }
    }

    Coefficients { coef }
}

impl Coefficients {
    /// Number of coefficients (`degree + 1`).
    pub fn len(&self) -> usize {
        self.coef.len()
    }

    /// Never true: even the empty root set has the constant coefficient.
    pub fn is_empty(&self) -> bool {
        self.coef.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.coef.len() - 1
    }

    pub fn as_slice(&self) -> &[Complex] {
        &self.coef
    }

    pub fn leading(&self) -> Complex {
        self.coef[self.coef.len() - 1]
    }

    /// Evaluate the polynomial at `z` using Horner's scheme.
    pub fn eval(&self, z: Complex) -> Complex {
        self.coef
            .iter()
            .rev()
            .fold(Complex::ZERO, |acc, &c| acc * z + c)
    }

    /// Coefficients of `p'`, same index = degree convention.
    ///
    /// The derivative of a constant is the zero constant.
    pub fn derivative(&self) -> Self {
        if self.coef.len() <= 1 {
            return Self {
                coef: vec![Complex::ZERO],
            };
        }
        let coef = self
            .coef
            .iter()
            .enumerate()
            .skip(1)
            .map(|(degree, &c)| c * degree as f32)
            .collect();
        Self { coef }
    }

    /// Zero-padded `vec2` array in the layout the Newton/Nova shaders read.
    pub fn uniform_array(&self) -> [[f32; 2]; MAX_COEFFICIENTS] {
        let mut out = [[0.0; 2]; MAX_COEFFICIENTS];
        for (slot, c) in out.iter_mut().zip(&self.coef) {
            *slot = c.to_array();
        }
        out
    }
}

impl std::ops::Index<usize> for Coefficients {
    type Output = Complex;

    fn index(&self, degree: usize) -> &Complex {
        &self.coef[degree]
    }
}
