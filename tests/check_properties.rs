// Behavioural tests for the check contract: pass/fail outcomes, fallback
// slots, short-circuiting and diagnostic text.

mod util;

use domain_checks::prelude::*;
use util::{assert_nan_fallback, assert_passed, expect_error, tagged, take_inspected};

const F: &str = "normal_lpdf(%1%)";

#[test]
fn positive_passes_and_keeps_slot() {
    for x in [1e-300, 0.5, 1.0, 42.0, f64::MAX] {
        let mut slot = -7.0f64;
        let passed = check_positive(F, x, "sigma", NanOnError)
            .unwrap()
            .write_to(&mut slot);
        assert!(passed, "x = {x}");
        assert_eq!(slot, -7.0);
    }
}

#[test]
fn positive_rejects_and_writes_fallback() {
    for x in [f64::NAN, f64::NEG_INFINITY, f64::INFINITY, 0.0, -0.0, -3.5] {
        let mut slot = -7.0f64;
        let passed = check_positive(F, x, "sigma", NanOnError)
            .unwrap()
            .write_to(&mut slot);
        assert!(!passed, "x = {x}");
        assert!(slot.is_nan(), "x = {x}");
    }
}

#[test]
fn bounded_two_to_five() {
    assert_passed::<f64>(check_bounded(F, 2.0, 2.0, 5.0, "x", RaiseError));
    assert_passed::<f64>(check_bounded(F, 5.0, 2.0, 5.0, "x", RaiseError));
    assert_nan_fallback(check_bounded(F, 1.999, 2.0, 5.0, "x", NanOnError));
    assert_nan_fallback(check_bounded(F, f64::NAN, 2.0, 5.0, "x", NanOnError));
}

#[test]
fn aggregate_finite_stops_at_first_violation() {
    let ys = tagged(&[1.0, 2.0, f64::NAN, 99.0]);
    take_inspected();
    let err = expect_error(check_finite(F, &ys, "y", RaiseError));
    assert_eq!(err.message(), "y[2] is NaN, but must be finite!");
    assert_eq!(take_inspected(), vec![0, 1, 2]);

    assert_passed::<f64>(check_not_nan(F, &ys[..2], "y", RaiseError));
    assert_eq!(take_inspected(), vec![0, 1]);
}

#[test]
fn aggregate_finite_on_vec_names_index_two() {
    let ys = vec![1.0, 2.0, f64::NAN, 99.0];
    let err = expect_error(check_finite(F, &ys, "y", RaiseError));
    assert!(err.message().starts_with("y[2] is NaN"));
    assert!(!err.message().contains("[3]"));
}

#[test]
fn nonnegative_unsigned_is_trivial() {
    assert_passed::<f64>(check_nonnegative(F, u32::MAX, "n", RaiseError));
    assert_passed::<f64>(check_nonnegative(F, u64::MAX, "n", RaiseError));
    assert_passed::<f64>(check_nonnegative(F, usize::MAX, "n", RaiseError));
    assert_passed::<f64>(check_nonnegative(F, 0u8, "n", RaiseError));
}

#[test]
fn bounds_ordering_violation() {
    let err = expect_error(check_bounds(F, 5.0, 3.0, RaiseError));
    assert_eq!(err.kind(), ErrorKind::OrderingViolation);
    // Each bound on its own is fine.
    assert_passed::<f64>(check_lower_bound(F, 5.0, RaiseError));
    assert_passed::<f64>(check_upper_bound(F, 3.0, RaiseError));
}

#[test]
fn size_match_mentions_j() {
    assert_passed::<f64>(check_size_match(F, 3, 3, RaiseError));
    let err = expect_error(check_size_match(F, 3, 4, RaiseError));
    assert!(err.message().contains('4'));
    assert_eq!(err.kind(), ErrorKind::SizeMismatch);
}

#[test]
fn structural_checks_return_validator_verdict() {
    let row = [1.0];
    let sigma: [&[f64]; 1] = [&row];
    let accept = |_: &[&[f64]]| true;
    let reject = |_: &[&[f64]]| false;
    assert_passed::<f64>(check_cov_matrix(F, &sigma, &accept, RaiseError));
    assert_nan_fallback(check_cov_matrix(F, &sigma, &reject, NanOnError));

    let theta = [2.0, -1.0];
    let accept = |_: &[f64]| true;
    let reject = |_: &[f64]| false;
    // Not a simplex, but the validator has the final word.
    assert_passed::<f64>(check_simplex(F, &theta, "theta", &accept, RaiseError));
    let err = expect_error(check_simplex(F, &theta, "theta", &reject, RaiseError));
    assert_eq!(err.kind(), ErrorKind::InvalidSimplex);
    assert!(err.message().contains("is: 2."));
}

#[test]
fn function_name_is_type_qualified() {
    let err = expect_error(check_scale(F, -1.0f32, RaiseError));
    assert_eq!(err.function(), "normal_lpdf(f32)");
    assert_eq!(
        err.to_string(),
        "Invalid scale parameter: Error in function normal_lpdf(f32): \
         Scale parameter is -1, but must be > 0!"
    );
}

#[test]
fn constant_policy_fills_slot() {
    let mut slot = 1.0f32;
    let passed = check_location(F, f64::NAN, ConstantOnError(-2.5))
        .unwrap()
        .write_to(&mut slot);
    assert!(!passed);
    assert_eq!(slot, -2.5);
}

#[test]
fn warn_policy_continues() {
    assert_nan_fallback(check_inv_scale(F, 0.0, WarnOnError));
}

fn lognormal_guard(y: &[f64], mu: f64, sigma: f64, lp: &mut f64) -> Result<bool, DomainError> {
    const FN: &str = "lognormal_lpdf(%1%)";
    let outcome = check_not_nan(FN, y, "Random variate", NanOnError)?
        .and_then(|| check_nonnegative(FN, y, "Random variate", NanOnError))?
        .and_then(|| check_location(FN, mu, RaiseError))?
        .and_then(|| check_scale(FN, sigma, RaiseError))?;
    Ok(outcome.write_to(lp))
}

#[test]
fn chained_guard_short_circuits() {
    let mut lp = 0.0;
    assert!(lognormal_guard(&[0.5, 1.0], 0.0, 1.0, &mut lp).unwrap());
    assert_eq!(lp, 0.0);

    // The variate fails first with a sentinel, so the invalid scale never raises.
    assert!(!lognormal_guard(&[0.5, -1.0], 0.0, -1.0, &mut lp).unwrap());
    assert!(lp.is_nan());

    let err = lognormal_guard(&[0.5], 0.0, 0.0, &mut lp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidScale);
}

fn uniform_guard(y: f64, alpha: f64, beta: f64) -> CheckResult<f64> {
    const FN: &str = "uniform_lpdf";
    try_check!(check_not_nan(FN, y, "Random variate", NanOnError));
    try_check!(check_bounds(FN, alpha, beta, NanOnError));
    Ok(Check::Passed)
}

#[test]
fn try_check_macro_returns_first_failure() {
    assert_passed(uniform_guard(0.5, 0.0, 1.0));
    assert_nan_fallback(uniform_guard(f64::NAN, 1.0, 0.0));
    assert_nan_fallback(uniform_guard(0.5, 1.0, 0.0));
}

#[test]
fn policies_are_thread_safe_values() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                let xs: Vec<f64> = (0..100).map(|i| (i + t) as f64 - 50.0).collect();
                let r: CheckResult<f64> = check_positive("f", &xs, "x", NanOnError);
                r.unwrap().is_failed()
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
