// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Structural Validators** - *Predicates for whole mathematical objects*
//!
//! The structural checks own only the error reporting; whether a matrix is a
//! covariance matrix or a vector is a simplex is decided by a validator.
//!
//! Any `Fn(&[&[T]]) -> bool` is a [`CovMatrixValidator`] and any
//! `Fn(&[T]) -> bool` is a [`SimplexValidator`], so a LAPACK-backed test or a
//! stub can be plugged in directly. [`SimplexTolerance`] is the bundled
//! simplex validator.

use num_traits::Float;

use crate::config::CONSTRAINT_TOLERANCE;

/// Decides whether a row-major square matrix is symmetric positive semi-definite.
pub trait CovMatrixValidator<T> {
    fn is_valid_cov_matrix(&self, sigma: &[&[T]]) -> bool;
}

impl<T, F> CovMatrixValidator<T> for F
where
    F: Fn(&[&[T]]) -> bool,
{
    #[inline]
    fn is_valid_cov_matrix(&self, sigma: &[&[T]]) -> bool {
        self(sigma)
    }
}

/// Decides whether a vector is a probability simplex.
pub trait SimplexValidator<T> {
    fn is_valid_simplex(&self, theta: &[T]) -> bool;
}

impl<T, F> SimplexValidator<T> for F
where
    F: Fn(&[T]) -> bool,
{
    #[inline]
    fn is_valid_simplex(&self, theta: &[T]) -> bool {
        self(theta)
    }
}

/// Simplex test: every entry `>= 0` and `|1 - sum| <= tolerance`.
///
/// The tolerance is widened to `len * T::epsilon()` when that is larger, so
/// rounding in a valid `f32` simplex is not mistaken for a violation.
///
/// An empty vector sums to zero and is therefore not a simplex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexTolerance {
    pub tolerance: f64,
}

impl SimplexTolerance {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for SimplexTolerance {
    fn default() -> Self {
        Self::new(CONSTRAINT_TOLERANCE)
    }
}

impl<T: Float> SimplexValidator<T> for SimplexTolerance {
    fn is_valid_simplex(&self, theta: &[T]) -> bool {
        // Summation error grows with the length and the element precision.
        let rounding = theta.len() as f64 * T::epsilon().to_f64().unwrap_or(0.0);
        let tolerance = self.tolerance.max(rounding);
        let mut sum = 0.0f64;
        for &t in theta {
            let t = match t.to_f64() {
                Some(v) => v,
                None => return false,
            };
            // NaN fails this comparison too.
            if !(t >= 0.0) {
                return false;
            }
            sum += t;
        }
        (1.0 - sum).abs() <= tolerance
    }
}
