// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Aggregate Checks** - *Elementwise NaN, finiteness and positivity guards*
//!
//! Each check accepts a scalar, a sequence or a vector (see [`Operand`]).
//! Sequences and vectors are scanned from index 0; the first violating
//! element `k` is reported as `name[k]`, its value is handed to the policy,
//! and no element after `k` is read.
//!
//! Cost is O(1) for a scalar and O(k + 1) for a sequence failing at `k`.

use crate::checks::{check_elements, CheckResult};
use crate::errors::ErrorKind;
use crate::policy::ErrorPolicy;
use crate::traits::check_value::{CheckValue, Fallback};
use crate::traits::operand::Operand;

/// Succeeds if no element of `y` is NaN. Infinities pass.
#[inline]
pub fn check_not_nan<O, R, P>(function: &str, y: O, name: &str, policy: P) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y,
        name,
        ErrorKind::IsNan,
        "but must not be nan!",
        policy,
        |v: O::Elem| !v.is_nan_value(),
    )
}

/// Succeeds if every element of `y` is finite.
#[inline]
pub fn check_finite<O, R, P>(function: &str, y: O, name: &str, policy: P) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y,
        name,
        ErrorKind::NotFinite,
        "but must be finite!",
        policy,
        |v: O::Elem| v.is_finite_value(),
    )
}

/// Succeeds if every element of `y` is finite and `> 0`.
#[inline]
pub fn check_positive<O, R, P>(function: &str, y: O, name: &str, policy: P) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y,
        name,
        ErrorKind::NotPositive,
        "but must be finite and > 0!",
        policy,
        |v: O::Elem| v.is_finite_value() && v > O::Elem::zero_value(),
    )
}
