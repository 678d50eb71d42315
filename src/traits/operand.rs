// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Operand trait** - *Shapes a check can be applied to*
//!
//! A check is written once against [`Operand`] and is then available for every
//! supported shape:
//!
//! - **Scalar**: any primitive [`CheckValue`], passed by value.
//! - **Sequence**: `&[T]`, `&Vec<T>` and `&[T; N]`.
//! - **Vector**: `&minarrow::FloatArray<T>` (feature `arrow`), whose null
//!   lanes are skipped.
//!
//! Elements are visited in index order and the scan stops at the first
//! element that fails the predicate.

#[cfg(feature = "arrow")]
use minarrow::FloatArray;

use super::check_value::CheckValue;
use super::dense_iter::DenseIter;

/// The first element that failed a predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Violating<T> {
    /// Position in the operand; `None` for scalars.
    pub index: Option<usize>,
    pub value: T,
}

/// A value, sequence or vector whose elements can be checked.
pub trait Operand: Copy {
    type Elem: CheckValue;

    /// Returns the first element for which `is_valid` is `false`.
    ///
    /// Elements after the returned one are never passed to `is_valid`.
    fn first_violation<F>(self, is_valid: F) -> Option<Violating<Self::Elem>>
    where
        F: FnMut(Self::Elem) -> bool;
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            type Elem = $t;

            #[inline(always)]
            fn first_violation<F>(self, mut is_valid: F) -> Option<Violating<$t>>
            where
                F: FnMut($t) -> bool,
            {
                if is_valid(self) {
                    None
                } else {
                    Some(Violating { index: None, value: self })
                }
            }
        }
    )*};
}

impl_scalar_operand!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[inline(always)]
fn scan<T, I, F>(lanes: I, mut is_valid: F) -> Option<Violating<T>>
where
    T: CheckValue,
    I: Iterator<Item = (usize, T)>,
    F: FnMut(T) -> bool,
{
    for (i, v) in lanes {
        if !is_valid(v) {
            return Some(Violating {
                index: Some(i),
                value: v,
            });
        }
    }
    None
}

impl<'a, T: CheckValue> Operand for &'a [T] {
    type Elem = T;

    #[inline(always)]
    fn first_violation<F>(self, is_valid: F) -> Option<Violating<T>>
    where
        F: FnMut(T) -> bool,
    {
        scan(DenseIter::dense(self), is_valid)
    }
}

impl<'a, T: CheckValue> Operand for &'a Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn first_violation<F>(self, is_valid: F) -> Option<Violating<T>>
    where
        F: FnMut(T) -> bool,
    {
        self.as_slice().first_violation(is_valid)
    }
}

impl<'a, T: CheckValue, const N: usize> Operand for &'a [T; N] {
    type Elem = T;

    #[inline(always)]
    fn first_violation<F>(self, is_valid: F) -> Option<Violating<T>>
    where
        F: FnMut(T) -> bool,
    {
        self.as_slice().first_violation(is_valid)
    }
}

#[cfg(feature = "arrow")]
impl<'a, T> Operand for &'a FloatArray<T>
where
    T: CheckValue + minarrow::traits::type_unions::Float,
{
    type Elem = T;

    #[inline(always)]
    fn first_violation<F>(self, is_valid: F) -> Option<Violating<T>>
    where
        F: FnMut(T) -> bool,
    {
        scan(
            DenseIter::new(self.data.as_slice(), self.null_mask.as_ref()),
            is_valid,
        )
    }
}
