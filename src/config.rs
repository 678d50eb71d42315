// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Diagnostic and Tolerance Parameters*
//!
//! Global configuration constants controlling diagnostic rendering and the
//! tolerance used by the bundled structural validators.
//! These values are compile-time constants.

/// Substitution placeholder for the offending value inside a message template.
///
/// When it appears in a *function name* it is replaced by the type name of the
/// offending value instead, so `"normal_lpdf(%1%)"` renders as `"normal_lpdf(f64)"`.
pub const PLACEHOLDER: &str = "%1%";

/// Leading text of every rendered diagnostic, followed by the function name.
pub const MESSAGE_PREFIX: &str = "Error in function ";

/// Absolute tolerance on `|1 - sum(theta)|` accepted by
/// [`SimplexTolerance::default`](crate::validators::SimplexTolerance).
pub const CONSTRAINT_TOLERANCE: f64 = 1e-8;
