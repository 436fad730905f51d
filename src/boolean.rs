//! Scope functions for boolean receivers.
//!
//! Any receiver whose [`ValueOf::Primitive`] is `bool` is accepted (`bool`, `&bool`, `Box<bool>`, `Cell<bool>`...).
//! It is normalized with [`ValueOf::value_of`] before the callback runs.
//!
//! Unlike the other domains, `take_if`/`take_unless` take an *optional* predicate. Without one, the receiver's own
//! value decides:
//!
//! | receiver | `take_if(b, None)` | `take_unless(b, None)` |
//! |----------|--------------------|------------------------|
//! | `true`   | `Some(true)`       | `None`                 |
//! | `false`  | `None`             | `Some(false)`          |
//!
//! With a predicate, the predicate alone decides, as everywhere else.
//!
//! ## Examples
//!
//! ```rust
//! use scopefn::boolean::{self, NoPredicate};
//!
//! assert_eq!(boolean::take_unless(true, None::<NoPredicate>), None);
//! assert_eq!(boolean::take_unless_value(false), Some(false));
//! assert_eq!(boolean::take_if(false, Some(|b: bool| !b)), Some(false));
//! ```

use scopefn_core::{DomainId, OperationId, ValueOf};

use crate::errors::{Rejected, gate};

/// Predicate type to name when passing `None` to [`take_if`]/[`take_unless`].
pub type NoPredicate = fn(bool) -> bool;

/// Call `f` with the receiver's `bool` and return `f`'s result.
#[doc(alias = "let")]
#[inline]
pub fn let_<B, R>(value: B, f: impl FnOnce(bool) -> R) -> R
where
    B: ValueOf<Primitive = bool>,
{
    f(value.value_of())
}

/// Call `f` with the receiver's `bool` and return the `bool`.
#[inline]
pub fn also<B>(value: B, f: impl FnOnce(bool)) -> bool
where
    B: ValueOf<Primitive = bool>,
{
    let b = value.value_of();
    f(b);
    b
}

/// Call `f` with the borrowed receiver's `bool` as context and return `f`'s result.
#[inline]
pub fn run<B, R>(value: &B, f: impl FnOnce(bool) -> R) -> R
where
    B: ValueOf<Primitive = bool> + ?Sized,
{
    f(value.value_of())
}

/// Call `f` with the borrowed receiver's `bool` as context and return the `bool`.
#[inline]
pub fn apply<B>(value: &B, f: impl FnOnce(bool)) -> bool
where
    B: ValueOf<Primitive = bool> + ?Sized,
{
    let b = value.value_of();
    f(b);
    b
}

// The predicate runs at most once; without one, the value is its own verdict.
#[inline]
fn verdict<P: FnOnce(bool) -> bool>(b: bool, predicate: Option<P>) -> bool {
    match predicate {
        Some(p) => p(b),
        None => b,
    }
}

/// Return the `bool` if `predicate` holds (or, without a predicate, if it is `true`), `None` otherwise.
#[inline]
pub fn take_if<B, P>(value: B, predicate: Option<P>) -> Option<bool>
where
    B: ValueOf<Primitive = bool>,
    P: FnOnce(bool) -> bool,
{
    let b = value.value_of();
    verdict(b, predicate).then_some(b)
}

/// Return the `bool` if `predicate` does not hold (or, without a predicate, if it is `false`), `None` otherwise.
#[inline]
pub fn take_unless<B, P>(value: B, predicate: Option<P>) -> Option<bool>
where
    B: ValueOf<Primitive = bool>,
    P: FnOnce(bool) -> bool,
{
    let b = value.value_of();
    (!verdict(b, predicate)).then_some(b)
}

/// [`take_if`] without a predicate: `Some(true)` for `true`, `None` for `false`.
#[inline]
pub fn take_if_value<B: ValueOf<Primitive = bool>>(value: B) -> Option<bool> {
    take_if(value, None::<NoPredicate>)
}

/// [`take_unless`] without a predicate: `Some(false)` for `false`, `None` for `true`.
#[inline]
pub fn take_unless_value<B: ValueOf<Primitive = bool>>(value: B) -> Option<bool> {
    take_unless(value, None::<NoPredicate>)
}

/// Like [`take_if`], but a failed check returns the `bool` inside [`Rejected`].
#[inline]
pub fn require_if<B, P>(value: B, predicate: Option<P>) -> Result<bool, Rejected<bool>>
where
    B: ValueOf<Primitive = bool>,
    P: FnOnce(bool) -> bool,
{
    let b = value.value_of();
    gate(verdict(b, predicate), OperationId::TakeIf, DomainId::Boolean, b)
}

/// Like [`take_unless`], but a passed check returns the `bool` inside [`Rejected`].
#[inline]
pub fn require_unless<B, P>(value: B, predicate: Option<P>) -> Result<bool, Rejected<bool>>
where
    B: ValueOf<Primitive = bool>,
    P: FnOnce(bool) -> bool,
{
    let b = value.value_of();
    gate(!verdict(b, predicate), OperationId::TakeUnless, DomainId::Boolean, b)
}
