// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Domain Checks** - *Parameter validation for numerical kernels*
//!
//! Guards statistical and numerical routines against invalid inputs (NaN,
//! infinities, out-of-range scalars, malformed covariance matrices and
//! simplices) before any expensive computation runs.
//!
//! ## Outcome contract
//! Every check returns a [`CheckResult`]:
//! - `Ok(Check::Passed)` when the input is valid,
//! - `Ok(Check::Failed(fallback))` when it is not and the [`ErrorPolicy`]
//!   chose to continue with a fallback (e.g. NaN),
//! - `Err(DomainError)` when the policy chose to escalate.
//!
//! The policy is a type parameter, so the success path carries no dispatch
//! and allocates nothing.
//!
//! ## Example
//! ```rust,ignore
//! use domain_checks::prelude::*;
//!
//! fn normal_lpdf(y: &[f64], mu: f64, sigma: f64) -> Result<f64, DomainError> {
//!     let mut lp = 0.0;
//!     let guard = check_not_nan("normal_lpdf(%1%)", y, "Random variate", RaiseError)?
//!         .and_then(|| check_location("normal_lpdf(%1%)", mu, RaiseError))?
//!         .and_then(|| check_scale("normal_lpdf(%1%)", sigma, RaiseError))?;
//!     if !guard.write_to(&mut lp) {
//!         return Ok(lp);
//!     }
//!     // ... density evaluation
//!     Ok(lp)
//! }
//! ```

pub mod checks;
pub mod config;
pub mod errors;
pub mod message;
pub mod policy;
pub mod validators;

pub mod traits {
    pub mod check_value;
    pub mod dense_iter;
    pub mod operand;
}

pub use checks::aggregate::{check_finite, check_not_nan, check_positive};
pub use checks::scalar::{
    check_bounded, check_greater, check_inv_scale, check_location, check_lower_bound,
    check_nonnegative, check_scale, check_upper_bound,
};
pub use checks::structural::{check_bounds, check_cov_matrix, check_simplex, check_size_match};
pub use checks::{Check, CheckResult};
pub use errors::{DomainError, ErrorKind};
pub use policy::{
    ConstantOnError, DefaultPolicy, Diagnostic, ErrorPolicy, NanOnError, RaiseError, WarnOnError,
};

/// Items intended for glob-import: `use domain_checks::prelude::*;`
pub mod prelude {
    pub use crate::checks::aggregate::{check_finite, check_not_nan, check_positive};
    pub use crate::checks::scalar::{
        check_bounded, check_greater, check_inv_scale, check_location, check_lower_bound,
        check_nonnegative, check_scale, check_upper_bound,
    };
    pub use crate::checks::structural::{
        check_bounds, check_cov_matrix, check_simplex, check_size_match,
    };
    pub use crate::checks::{Check, CheckResult};
    pub use crate::errors::{DomainError, ErrorKind};
    pub use crate::policy::{
        ConstantOnError, DefaultPolicy, ErrorPolicy, NanOnError, RaiseError, WarnOnError,
    };
    pub use crate::traits::check_value::{CheckValue, Fallback};
    pub use crate::traits::operand::Operand;
    pub use crate::try_check;
    pub use crate::validators::{CovMatrixValidator, SimplexTolerance, SimplexValidator};
}
