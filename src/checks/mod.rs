// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Checks Module** - *Domain guards for numerical kernels*
//!
//! Every check shares one calling convention:
//!
//! ```text
//! check_<name>(function, value(s), <extra args>, name, policy) -> CheckResult<R>
//! ```
//!
//! and one outcome contract:
//!
//! - `Ok(Check::Passed)`: the value is valid and nothing was produced.
//! - `Ok(Check::Failed(r))`: the value is invalid and the policy supplied the
//!   fallback `r`, which is now the authoritative result for the call.
//! - `Err(DomainError)`: the policy escalated.
//!
//! Callers chain checks with [`try_check!`](crate::try_check) and stop at the first
//! outcome that is not `Passed`. [`Check::write_to`] maps an outcome onto a
//! caller-owned output slot, written on failure only.
//!
//! ## Modules
//! - **`scalar`**: bounds, sign and parameter checks on single values
//! - **`aggregate`**: NaN, finiteness and positivity over values, sequences and vectors
//! - **`structural`**: interval bounds, size agreement, covariance matrices and simplices

pub mod aggregate;
pub mod scalar;
pub mod structural;

use std::borrow::Cow;
use std::fmt::Display;

use crate::errors::{DomainError, ErrorKind};
use crate::message::param_template;
use crate::policy::{Diagnostic, ErrorPolicy};
use crate::traits::check_value::{CheckValue, Fallback};
use crate::traits::operand::Operand;

/// Outcome of a check that did not escalate.
#[must_use = "a failed check carries the fallback the caller must return"]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check<R> {
    /// The value satisfied the condition.
    Passed,
    /// The value violated the condition; holds the policy's fallback.
    Failed(R),
}

impl<R> Check<R> {
    #[inline(always)]
    pub fn is_passed(&self) -> bool {
        matches!(self, Check::Passed)
    }

    #[inline(always)]
    pub fn is_failed(&self) -> bool {
        !self.is_passed()
    }

    /// The fallback, if the check failed.
    #[inline(always)]
    pub fn fallback(self) -> Option<R> {
        match self {
            Check::Passed => None,
            Check::Failed(r) => Some(r),
        }
    }

    /// Writes the fallback into `slot` on failure and returns whether the check passed.
    ///
    /// `slot` is left untouched when the check passed.
    #[inline(always)]
    pub fn write_to(self, slot: &mut R) -> bool {
        match self {
            Check::Passed => true,
            Check::Failed(r) => {
                *slot = r;
                false
            }
        }
    }

    /// Runs `next` only if this check passed.
    #[inline(always)]
    pub fn and_then<F>(self, next: F) -> CheckResult<R>
    where
        F: FnOnce() -> CheckResult<R>,
    {
        match self {
            Check::Passed => next(),
            failed => Ok(failed),
        }
    }
}

/// Result of a check: an outcome, or the error an escalating policy raised.
pub type CheckResult<R> = Result<Check<R>, DomainError>;

/// Evaluates a check and returns early from the enclosing function unless it passed.
///
/// The enclosing function must return `CheckResult<R>`.
///
/// ```ignore
/// fn check_params(mu: f64, sigma: f64) -> CheckResult<f64> {
///     try_check!(check_location("normal_lpdf", mu, RaiseError));
///     try_check!(check_scale("normal_lpdf", sigma, RaiseError));
///     Ok(Check::Passed)
/// }
/// ```
#[macro_export]
macro_rules! try_check {
    ($check:expr) => {
        match $check? {
            $crate::checks::Check::Passed => {}
            failed => return ::core::result::Result::Ok(failed),
        }
    };
}

/// Hands a violation to the policy and wraps its fallback.
#[inline]
pub(crate) fn fail<'a, V, R, P>(
    policy: P,
    kind: ErrorKind,
    function: &'a str,
    template: impl Into<Cow<'a, str>>,
    value: V,
) -> CheckResult<R>
where
    V: CheckValue,
    R: Fallback,
    P: ErrorPolicy,
{
    policy
        .on_domain_error(Diagnostic::new(kind, function, template, value))
        .map(Check::Failed)
}

/// Shared body of the named-parameter checks.
///
/// Scans `value` for the first element failing `is_valid`; on a hit builds
/// `"<name>[i] is %1%, <requirement>"` and consults the policy once.
#[inline(always)]
pub(crate) fn check_elements<O, R, P, F>(
    function: &str,
    value: O,
    name: &str,
    kind: ErrorKind,
    requirement: impl Display,
    policy: P,
    is_valid: F,
) -> CheckResult<R>
where
    O: Operand,
    R: Fallback,
    P: ErrorPolicy,
    F: FnMut(O::Elem) -> bool,
{
    match value.first_violation(is_valid) {
        None => Ok(Check::Passed),
        Some(hit) => fail(
            policy,
            kind,
            function,
            param_template(name, hit.index, requirement),
            hit.value,
        ),
    }
}
