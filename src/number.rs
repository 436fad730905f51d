//! Scope functions for numeric receivers.
//!
//! Any receiver whose [`ValueOf::Primitive`] is a Rust numeric primitive is accepted: the primitive itself, a borrow,
//! a `Box`/`Rc`/`Arc`, a `Cell`, a `Wrapping` or a `NonZero*` integer. The receiver is normalized with
//! [`ValueOf::value_of`] before the callback runs, and the receiver-returning operations return that primitive.
//!
//! ## Examples
//!
//! ```rust
//! use scopefn::number;
//!
//! assert_eq!(number::let_(5_i32, |x| x + 1), 6);
//! assert_eq!(number::take_if(Box::new(4_u32), |x| x % 2 == 0), Some(4));
//! assert_eq!(number::take_if(5_u32, |x| x % 2 == 0), None);
//! ```

use scopefn_core::{DomainId, Number, OperationId, ValueOf};

use crate::errors::{Rejected, gate};

/// Call `f` with the receiver's primitive and return `f`'s result.
#[doc(alias = "let")]
#[inline]
pub fn let_<W, R>(value: W, f: impl FnOnce(W::Primitive) -> R) -> R
where
    W: ValueOf<Primitive: Number>,
{
    f(value.value_of())
}

/// Call `f` with the receiver's primitive and return the primitive.
#[inline]
pub fn also<W>(value: W, f: impl FnOnce(W::Primitive)) -> W::Primitive
where
    W: ValueOf<Primitive: Number>,
{
    let n = value.value_of();
    f(n);
    n
}

/// Call `f` with the borrowed receiver's primitive as context and return `f`'s result.
#[inline]
pub fn run<W, R>(value: &W, f: impl FnOnce(W::Primitive) -> R) -> R
where
    W: ValueOf<Primitive: Number> + ?Sized,
{
    f(value.value_of())
}

/// Call `f` with the borrowed receiver's primitive as context and return the primitive.
#[inline]
pub fn apply<W>(value: &W, f: impl FnOnce(W::Primitive)) -> W::Primitive
where
    W: ValueOf<Primitive: Number> + ?Sized,
{
    let n = value.value_of();
    f(n);
    n
}

/// Return the primitive if `predicate` holds, `None` otherwise.
#[inline]
pub fn take_if<W>(value: W, predicate: impl FnOnce(W::Primitive) -> bool) -> Option<W::Primitive>
where
    W: ValueOf<Primitive: Number>,
{
    let n = value.value_of();
    if predicate(n) { Some(n) } else { None }
}

/// Return the primitive if `predicate` does not hold, `None` otherwise.
#[inline]
pub fn take_unless<W>(value: W, predicate: impl FnOnce(W::Primitive) -> bool) -> Option<W::Primitive>
where
    W: ValueOf<Primitive: Number>,
{
    let n = value.value_of();
    if predicate(n) { None } else { Some(n) }
}

/// Like [`take_if`], but a failed predicate returns the primitive inside [`Rejected`].
#[inline]
pub fn require_if<W>(
    value: W,
    predicate: impl FnOnce(W::Primitive) -> bool,
) -> Result<W::Primitive, Rejected<W::Primitive>>
where
    W: ValueOf<Primitive: Number>,
{
    let n = value.value_of();
    gate(predicate(n), OperationId::TakeIf, DomainId::Number, n)
}

/// Like [`take_unless`], but a satisfied predicate returns the primitive inside [`Rejected`].
#[inline]
pub fn require_unless<W>(
    value: W,
    predicate: impl FnOnce(W::Primitive) -> bool,
) -> Result<W::Primitive, Rejected<W::Primitive>>
where
    W: ValueOf<Primitive: Number>,
{
    let n = value.value_of();
    gate(!predicate(n), OperationId::TakeUnless, DomainId::Number, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::num::{NonZeroU8, Wrapping};
    use std::rc::Rc;
    use std::sync::Arc;

    #[test]
    fn wrappers_normalize_before_callback() {
        assert_eq!(let_(Box::new(41_i64), |n: i64| n + 1), 42);
        assert_eq!(let_(Rc::new(1.5_f64), |n| n * 2.0), 3.0);
        assert_eq!(let_(Wrapping(7_u8), |n| n), 7);
        assert_eq!(also(Arc::new(9_usize), |_| {}), 9);
    }

    #[test]
    fn non_zero_receiver_yields_plain_integer() {
        let Some(nz) = NonZeroU8::new(3) else {
            panic!("3 is non-zero");
        };
        let out: u8 = also(nz, |n| assert_eq!(n, 3));
        assert_eq!(out, 3);
    }

    #[test]
    fn run_and_apply_borrow_the_receiver() {
        let boxed = Box::new(10_i16);
        assert_eq!(run(&boxed, |n| n - 1), 9);
        let seen = Cell::new(0_i16);
        assert_eq!(apply(&boxed, |n| seen.set(n)), 10);
        assert_eq!(seen.get(), 10);
        assert_eq!(*boxed, 10);
    }

    #[test]
    fn cell_receiver_reads_current_value() {
        let cell = Cell::new(1_u32);
        cell.set(2);
        assert_eq!(take_if(&cell, |n| n == 2), Some(2));
    }

    #[test]
    fn take_if_take_unless_parity() {
        assert_eq!(take_if(4_i32, |x| x % 2 == 0), Some(4));
        assert_eq!(take_if(5_i32, |x| x % 2 == 0), None);
        assert_eq!(take_unless(4_i32, |x| x % 2 == 0), None);
        assert_eq!(take_unless(5_i32, |x| x % 2 == 0), Some(5));
    }

    #[test]
    fn nan_is_passed_through_not_special_cased() {
        let out = take_unless(f64::NAN, |x| x > 0.0);
        assert!(out.is_some_and(f64::is_nan));
    }

    #[test]
    fn require_reports_number_domain() {
        assert_eq!(require_if(3_u64, |n| n > 1).ok(), Some(3));
        let err = require_unless(Box::new(3_u64), |n| n > 1).expect_err("3 > 1 is rejected");
        assert_eq!(err.to_string(), "takeUnless rejected the number receiver");
        assert_eq!(err.into_inner(), 3);
    }
}
