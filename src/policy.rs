// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Policies** - *What a detected violation turns into*
//!
//! A check that finds a violation hands a [`Diagnostic`] to the caller's
//! [`ErrorPolicy`], which either escalates with a [`DomainError`] or yields a
//! fallback value for the caller to continue with.
//!
//! The policy is a generic parameter of every check, so the choice is made at
//! compile time and costs nothing on the success path.
//!
//! ## Policies
//! - [`RaiseError`]: escalate with `Err(DomainError)`. The default.
//! - [`NanOnError`]: return NaN and continue.
//! - [`WarnOnError`]: emit a `log::warn!` record, then return NaN.
//! - [`ConstantOnError`]: return a caller-chosen constant.

use std::borrow::Cow;

use log::warn;
use num_traits::NumCast;

use crate::errors::{DomainError, ErrorKind};
use crate::message::{qualify_function, render, substitute};
use crate::traits::check_value::{CheckValue, Fallback};

/// Everything a policy needs to report one violation.
#[derive(Debug, Clone)]
pub struct Diagnostic<'a, V> {
    pub kind: ErrorKind,
    /// Function name; may contain the placeholder, replaced by the type name of `V`.
    pub function: &'a str,
    /// Message with one placeholder for `value`.
    pub template: Cow<'a, str>,
    /// The offending value.
    pub value: V,
}

impl<'a, V: CheckValue> Diagnostic<'a, V> {
    #[inline]
    pub fn new(
        kind: ErrorKind,
        function: &'a str,
        template: impl Into<Cow<'a, str>>,
        value: V,
    ) -> Self {
        Self {
            kind,
            function,
            template: template.into(),
            value,
        }
    }

    /// The template with the offending value substituted.
    pub fn message(&self) -> String {
        substitute(&self.template, self.value)
    }

    /// `"Error in function <function>: <message>"`.
    pub fn render(&self) -> String {
        render(self.function, &self.template, self.value)
    }

    pub fn into_error(self) -> DomainError {
        DomainError::new(
            self.kind,
            qualify_function::<V>(self.function),
            self.message(),
        )
    }
}

/// Strategy deciding how a domain violation becomes an outcome.
///
/// Implementations must be pure: no shared mutable state, safe to call
/// concurrently from any thread.
pub trait ErrorPolicy: Copy + Send + Sync {
    /// Returns the fallback to store in place of the caller's result, or
    /// the error to escalate.
    fn on_domain_error<V, R>(&self, diag: Diagnostic<'_, V>) -> Result<R, DomainError>
    where
        V: CheckValue,
        R: Fallback;
}

/// Escalates every violation as a [`DomainError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaiseError;

impl ErrorPolicy for RaiseError {
    #[inline]
    fn on_domain_error<V, R>(&self, diag: Diagnostic<'_, V>) -> Result<R, DomainError>
    where
        V: CheckValue,
        R: Fallback,
    {
        Err(diag.into_error())
    }
}

/// Records the violation as a NaN fallback and lets the caller continue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NanOnError;

impl ErrorPolicy for NanOnError {
    #[inline]
    fn on_domain_error<V, R>(&self, _diag: Diagnostic<'_, V>) -> Result<R, DomainError>
    where
        V: CheckValue,
        R: Fallback,
    {
        Ok(R::nan())
    }
}

/// Logs the rendered diagnostic at `warn` level, then behaves like [`NanOnError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarnOnError;

impl ErrorPolicy for WarnOnError {
    fn on_domain_error<V, R>(&self, diag: Diagnostic<'_, V>) -> Result<R, DomainError>
    where
        V: CheckValue,
        R: Fallback,
    {
        warn!("{}: {}", diag.kind, diag.render());
        Ok(R::nan())
    }
}

/// Returns a fixed constant as the fallback.
///
/// A constant that does not fit the slot type degrades to NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantOnError(pub f64);

impl ErrorPolicy for ConstantOnError {
    #[inline]
    fn on_domain_error<V, R>(&self, _diag: Diagnostic<'_, V>) -> Result<R, DomainError>
    where
        V: CheckValue,
        R: Fallback,
    {
        Ok(<R as NumCast>::from(self.0).unwrap_or_else(R::nan))
    }
}

/// Policy used when the caller has no preference.
pub type DefaultPolicy = RaiseError;
