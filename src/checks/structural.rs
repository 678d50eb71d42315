// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Structural Checks** - *Intervals, sizes, covariance matrices and simplices*
//!
//! Checks over whole objects. Interval and size checks compose the scalar
//! checks; the covariance-matrix and simplex checks wrap a caller-supplied
//! [validator](crate::validators) and return exactly its verdict.

use num_traits::Float;

use crate::checks::scalar::{check_lower_bound, check_upper_bound};
use crate::checks::{fail, Check, CheckResult};
use crate::errors::ErrorKind;
use crate::message::format_matrix;
use crate::policy::ErrorPolicy;
use crate::traits::check_value::{CheckValue, Fallback};
use crate::validators::{CovMatrixValidator, SimplexValidator};

/// Succeeds if both bounds are finite and `lower < upper`.
///
/// The lower bound is checked first, then the upper bound, then their order;
/// the first failure ends the check.
pub fn check_bounds<T, R, P>(function: &str, lower: T, upper: T, policy: P) -> CheckResult<R>
where
    T: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    crate::try_check!(check_lower_bound(function, lower, policy));
    crate::try_check!(check_upper_bound(function, upper, policy));
    if lower < upper {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::OrderingViolation,
        function,
        "lower parameter is %1%, but must be less than upper!",
        lower,
    )
}

/// Succeeds if `i == j`. The policy receives `i`; the message also names `j`.
pub fn check_size_match<R, P>(function: &str, i: usize, j: usize, policy: P) -> CheckResult<R>
where
    R: Fallback,
    P: ErrorPolicy,
{
    if i == j {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::SizeMismatch,
        function,
        format!("i and j must be same.  Found i=%1%, j={j}"),
        i,
    )
}

/// Succeeds if `validator` accepts `sigma` as a covariance matrix.
///
/// `sigma` is row-major, one slice per row. On failure the message dumps the
/// whole matrix and the policy receives `sigma[0][0]`, or NaN for an empty
/// matrix.
pub fn check_cov_matrix<T, R, V, P>(
    function: &str,
    sigma: &[&[T]],
    validator: &V,
    policy: P,
) -> CheckResult<R>
where
    T: CheckValue + Float,
    R: Fallback,
    V: CovMatrixValidator<T> + ?Sized,
    P: ErrorPolicy,
{
    if validator.is_valid_cov_matrix(sigma) {
        return Ok(Check::Passed);
    }
    let corner = sigma
        .first()
        .and_then(|row| row.first())
        .copied()
        .unwrap_or_else(T::nan);
    fail(
        policy,
        ErrorKind::InvalidCovMatrix,
        function,
        format!(
            "Sigma is not a valid covariance matrix. \
             Sigma must be symmetric and positive semi-definite. Sigma:\n{}\nSigma(0,0): %1%",
            format_matrix(sigma)
        ),
        corner,
    )
}

/// Succeeds if `validator` accepts `theta` as a simplex.
///
/// On failure the policy receives `theta[0]`, or NaN for an empty vector.
pub fn check_simplex<T, R, V, P>(
    function: &str,
    theta: &[T],
    name: &str,
    validator: &V,
    policy: P,
) -> CheckResult<R>
where
    T: CheckValue + Float,
    R: Fallback,
    V: SimplexValidator<T> + ?Sized,
    P: ErrorPolicy,
{
    if validator.is_valid_simplex(theta) {
        return Ok(Check::Passed);
    }
    let first = theta.first().copied().unwrap_or_else(T::nan);
    fail(
        policy,
        ErrorKind::InvalidSimplex,
        function,
        format!("{name} is not a valid simplex. The first element of the simplex is: %1%."),
        first,
    )
}
