#![allow(unused)]

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;

use domain_checks::prelude::*;

pub fn assert_passed<R: std::fmt::Debug>(r: CheckResult<R>) {
    match r {
        Ok(Check::Passed) => {}
        other => panic!("expected Passed, got {other:?}"),
    }
}

pub fn assert_nan_fallback(r: CheckResult<f64>) {
    match r {
        Ok(Check::Failed(v)) => assert!(v.is_nan(), "expected NaN fallback, got {v}"),
        other => panic!("expected Failed(NaN), got {other:?}"),
    }
}

pub fn expect_error(r: CheckResult<f64>) -> DomainError {
    match r {
        Err(e) => e,
        Ok(c) => panic!("expected DomainError, got {c:?}"),
    }
}

thread_local! {
    static INSPECTED: RefCell<Vec<usize>> = RefCell::new(Vec::new());
}

/// Float element that records its position each time a check inspects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tagged {
    pub index: usize,
    pub value: f64,
}

impl Tagged {
    fn seen(self) -> f64 {
        INSPECTED.with(|v| v.borrow_mut().push(self.index));
        self.value
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl CheckValue for Tagged {
    const SIGNED: bool = true;

    fn is_nan_value(self) -> bool {
        self.seen().is_nan()
    }

    fn is_finite_value(self) -> bool {
        self.seen().is_finite()
    }

    fn zero_value() -> Self {
        Tagged {
            index: usize::MAX,
            value: 0.0,
        }
    }
}

pub fn tagged(data: &[f64]) -> Vec<Tagged> {
    data.iter()
        .enumerate()
        .map(|(index, &value)| Tagged { index, value })
        .collect()
}

/// Indices inspected on this thread since the last call.
pub fn take_inspected() -> Vec<usize> {
    INSPECTED.with(|v| std::mem::take(&mut *v.borrow_mut()))
}
