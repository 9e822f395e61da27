//! Editable, capacity-bounded root list.

use thiserror::Error;

use super::{Coefficients, MAX_ROOTS, expand_roots};
use crate::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RootError {
    #[error("root set is full")]
    Full,
    #[error("root index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered roots of the Newton/Nova polynomial, at most [`MAX_ROOTS`].
///
/// Indices are stable during edits: removing a root shifts every later root
/// down by one and leaves the others untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootSet {
    roots: Vec<Complex>,
}

impl RootSet {
    pub fn new() -> Self {
        Self {
            roots: Vec::with_capacity(MAX_ROOTS),
        }
    }

    /// Build from a slice, keeping the first [`MAX_ROOTS`] entries.
    ///
    /// Returns the set and the number of roots that did not fit.
    pub fn from_slice(roots: &[Complex]) -> (Self, usize) {
        let kept = roots.len().min(MAX_ROOTS);
        let set = Self {
            roots: roots[..kept].to_vec(),
        };
        (set, roots.len() - kept)
    }

    /// The three cube roots of unity (`z^3 - 1`).
    pub fn unity_cube() -> Self {
        let h = 3f32.sqrt() / 2.0;
        Self {
            roots: vec![
                Complex::ONE,
                Complex::new(-0.5, h),
                Complex::new(-0.5, -h),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.roots.len() >= MAX_ROOTS
    }

    pub fn as_slice(&self) -> &[Complex] {
        &self.roots
    }

    pub fn get(&self, index: usize) -> Option<Complex> {
        self.roots.get(index).copied()
    }

    /// Append a root, returning its index.
    pub fn push(&mut self, z: Complex) -> Result<usize, RootError> {
        if self.is_full() {
            return Err(RootError::Full);
        }
        self.roots.push(z);
        Ok(self.roots.len() - 1)
    }

    /// Remove the root at `index`, shifting later roots down.
    pub fn remove(&mut self, index: usize) -> Result<Complex, RootError> {
        if index >= self.roots.len() {
            return Err(RootError::OutOfRange {
                index,
                len: self.roots.len(),
            });
        }
        Ok(self.roots.remove(index))
    }

    /// Move the root at `index` to `z`.
    pub fn set(&mut self, index: usize, z: Complex) -> Result<(), RootError> {
        let len = self.roots.len();
        let slot = self
            .roots
            .get_mut(index)
            .ok_or(RootError::OutOfRange { index, len })?;
        *slot = z;
        Ok(())
    }

    /// Index of the root closest to `z`, if it lies within `snap`.
    ///
    /// Ties resolve to the lowest index.
    pub fn nearest(&self, z: Complex, snap: f32) -> Option<usize> {
        self.roots
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.distance(z)))
            .filter(|&(_, d)| d <= snap)
            .fold(None, |best: Option<(usize, f32)>, (i, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            })
            .map(|(i, _)| i)
    }

    /// Fresh coefficient expansion of the current roots.
    pub fn coefficients(&self) -> Coefficients {
        expand_roots(&self.roots)
    }
}
