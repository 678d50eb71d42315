// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **CheckValue trait** - *Numeric predicates for checked elements*
//!
//! Unifies the predicates the checks need (NaN, finiteness, sign) across
//! floating-point and integer element types, so one generic check body serves
//! every primitive numeric type.

use core::fmt::Display;

use num_traits::{Float, Zero};

/// A scalar numeric value that can be checked and reported.
///
/// Integers are never NaN and always finite. Unsigned integers report
/// `SIGNED == false`, which lets sign checks succeed without inspecting the value.
pub trait CheckValue: Copy + PartialOrd + Display + 'static {
    /// `false` when the type cannot represent negative values.
    const SIGNED: bool;

    fn is_nan_value(self) -> bool;

    fn is_finite_value(self) -> bool;

    fn zero_value() -> Self;
}

macro_rules! impl_check_value_float {
    ($($t:ty),*) => {$(
        impl CheckValue for $t {
            const SIGNED: bool = true;

            #[inline(always)]
            fn is_nan_value(self) -> bool {
                Float::is_nan(self)
            }

            #[inline(always)]
            fn is_finite_value(self) -> bool {
                Float::is_finite(self)
            }

            #[inline(always)]
            fn zero_value() -> Self {
                <$t as Zero>::zero()
            }
        }
    )*};
}

macro_rules! impl_check_value_int {
    ($signed:expr; $($t:ty),*) => {$(
        impl CheckValue for $t {
            const SIGNED: bool = $signed;

            #[inline(always)]
            fn is_nan_value(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_finite_value(self) -> bool {
                true
            }

            #[inline(always)]
            fn zero_value() -> Self {
                <$t as Zero>::zero()
            }
        }
    )*};
}

impl_check_value_float!(f32, f64);
impl_check_value_int!(true; i8, i16, i32, i64, i128, isize);
impl_check_value_int!(false; u8, u16, u32, u64, u128, usize);

/// Numeric type of a fallback slot.
///
/// Fallbacks are real-valued so that a sentinel (NaN) is always representable,
/// whatever the type of the offending value.
pub trait Fallback: Float {}

impl<F: Float> Fallback for F {}
