// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Checks** - *Range, sign and parameter guards*
//!
//! Range and sign checks on named parameters, plus the fixed-wording checks
//! for the scale, inverse-scale, location and bound parameters of a
//! distribution.
//!
//! The range and sign checks accept any [`Operand`], so the same call also
//! validates a sequence elementwise. Integer inputs are finite by
//! representation, and unsigned inputs are nonnegative by representation.

use crate::checks::{check_elements, fail, Check, CheckResult};
use crate::errors::ErrorKind;
use crate::policy::ErrorPolicy;
use crate::traits::check_value::{CheckValue, Fallback};
use crate::traits::operand::Operand;

/// Succeeds if `x` is finite and strictly greater than `low`.
#[inline]
pub fn check_greater<O, R, P>(
    function: &str,
    x: O,
    low: O::Elem,
    name: &str,
    policy: P,
) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
{
    check_elements(
        function,
        x,
        name,
        ErrorKind::OutOfRange,
        format_args!("but must be finite and greater than {low}"),
        policy,
        |v: O::Elem| v.is_finite_value() && v > low,
    )
}

/// Succeeds if `x` is finite and `low <= x <= high`.
#[inline]
pub fn check_bounded<O, R, P>(
    function: &str,
    x: O,
    low: O::Elem,
    high: O::Elem,
    name: &str,
    policy: P,
) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
{
    check_elements(
        function,
        x,
        name,
        ErrorKind::OutOfRange,
        format_args!("but must be finite and between {low} and {high}"),
        policy,
        |v: O::Elem| v.is_finite_value() && low <= v && v <= high,
    )
}

/// Succeeds if `x` is finite and `x >= 0`.
///
/// Always succeeds for unsigned element types, without reading the value.
#[inline]
pub fn check_nonnegative<O, R, P>(function: &str, x: O, name: &str, policy: P) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
{
    if !<O::Elem as CheckValue>::SIGNED {
        return Ok(Check::Passed);
    }
    check_elements(
        function,
        x,
        name,
        ErrorKind::NotNonnegative,
        "but must be finite and >= 0!",
        policy,
        |v: O::Elem| v.is_finite_value() && v >= O::Elem::zero_value(),
    )
}

#[inline(always)]
fn is_finite_positive<T: CheckValue>(v: T) -> bool {
    v.is_finite_value() && v > T::zero_value()
}

/// Succeeds if the scale parameter is finite and `> 0`.
#[inline]
pub fn check_scale<T, R, P>(function: &str, scale: T, policy: P) -> CheckResult<R>
where
    T: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    if is_finite_positive(scale) {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::InvalidScale,
        function,
        "Scale parameter is %1%, but must be > 0!",
        scale,
    )
}

/// Succeeds if the inverse scale (rate) parameter is finite and `> 0`.
#[inline]
pub fn check_inv_scale<T, R, P>(function: &str, inv_scale: T, policy: P) -> CheckResult<R>
where
    T: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    if is_finite_positive(inv_scale) {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::InvalidScale,
        function,
        "Inverse scale parameter is %1%, but must be > 0!",
        inv_scale,
    )
}

/// Succeeds if the location parameter is finite. Its sign is unconstrained.
#[inline]
pub fn check_location<T, R, P>(function: &str, location: T, policy: P) -> CheckResult<R>
where
    T: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    if location.is_finite_value() {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::InvalidLocationOrBound,
        function,
        "Location parameter is %1%, but must be finite!",
        location,
    )
}

#[inline]
pub fn check_lower_bound<T, R, P>(function: &str, lb: T, policy: P) -> CheckResult<R>
where
    T: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    if lb.is_finite_value() {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::InvalidLocationOrBound,
        function,
        "Lower bound is %1%, but must be finite!",
        lb,
    )
}

#[inline]
pub fn check_upper_bound<T, R, P>(function: &str, ub: T, policy: P) -> CheckResult<R>
where
    T: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    if ub.is_finite_value() {
        return Ok(Check::Passed);
    }
    fail(
        policy,
        ErrorKind::InvalidLocationOrBound,
        function,
        "Upper bound is %1%, but must be finite!",
        ub,
    )
}
