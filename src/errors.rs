// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Domain Error Reporting*
//!
//! Error types raised when a checked parameter falls outside the input domain
//! of the function that received it.
//!
//! ## Violation Categories
//! - **Value Errors**: NaN, non-finite, non-positive and negative values
//! - **Range Errors**: values outside `(low, ∞)` or `[low, high]`
//! - **Parameter Errors**: invalid scale, location or bound parameters
//! - **Consistency Errors**: bound ordering and size mismatches
//! - **Structural Errors**: invalid covariance matrices and simplices
//!
//! A [`DomainError`] is only ever produced by an
//! [`ErrorPolicy`](crate::policy::ErrorPolicy) that chooses to escalate.

use core::fmt;
use std::error::Error;

use crate::config::MESSAGE_PREFIX;

/// The kind of precondition a checked value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value is NaN.
    IsNan,

    /// Value is NaN or ±infinity.
    NotFinite,

    /// Value is outside a `greater than` or `[low, high]` range.
    OutOfRange,

    /// Value is not strictly positive.
    NotPositive,

    /// Value is negative.
    NotNonnegative,

    /// Scale or inverse scale parameter is not finite and positive.
    InvalidScale,

    /// Location parameter or interval bound is not finite.
    InvalidLocationOrBound,

    /// Lower bound is not strictly less than the upper bound.
    OrderingViolation,

    /// Two sizes that must agree do not.
    SizeMismatch,

    /// Matrix is not symmetric positive semi-definite.
    InvalidCovMatrix,

    /// Vector is not a probability simplex.
    InvalidSimplex,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::IsNan => "Is NaN",
            ErrorKind::NotFinite => "Not finite",
            ErrorKind::OutOfRange => "Out of range",
            ErrorKind::NotPositive => "Not positive",
            ErrorKind::NotNonnegative => "Not nonnegative",
            ErrorKind::InvalidScale => "Invalid scale parameter",
            ErrorKind::InvalidLocationOrBound => "Invalid location or bound",
            ErrorKind::OrderingViolation => "Ordering violation",
            ErrorKind::SizeMismatch => "Size mismatch",
            ErrorKind::InvalidCovMatrix => "Invalid covariance matrix",
            ErrorKind::InvalidSimplex => "Invalid simplex",
        };
        f.write_str(label)
    }
}

/// A reported violation of a precondition on a function's input domain.
///
/// Carries the violation kind, the (type-qualified) function name and the
/// message with the offending value already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    kind: ErrorKind,
    function: String,
    message: String,
}

impl DomainError {
    /// Builds an error from already rendered parts.
    pub fn new(kind: ErrorKind, function: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            function: function.into(),
            message: message.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the function whose precondition failed.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The message naming the parameter, its value and the required condition.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}: {}",
            self.kind, MESSAGE_PREFIX, self.function, self.message
        )
    }
}

impl Error for DomainError {}
