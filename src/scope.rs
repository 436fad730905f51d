//! Scope functions for any value (the `object` domain).
//!
//! The receiver is passed through unchanged: no normalization happens before the callback runs. The operations are
//! available both as methods via the [`Scope`] extension trait and as free functions taking the receiver first.
//!
//! ## Binding
//!
//! - Argument-style operations (`let_`, `also`, `take_if`, `take_unless`) take the receiver by value.
//! - Context-style operations (`run`, `apply`) borrow the receiver and hand the callback `&Self`.
//!
//! ## Notes
//!
//! - `Option` has an inherent `take_if(&mut self, ..)` which wins method resolution on `Option` receivers. Use
//!   `Scope::take_if(opt, ..)` or [`take_if`] there.
//!
//! ## Examples
//!
//! ```rust
//! use scopefn::prelude::*;
//!
//! let six = 5_i32.let_(|x| x + 1);
//! assert_eq!(six, 6);
//!
//! let even = 4_i32.take_if(|x| x % 2 == 0);
//! assert_eq!(even, Some(4));
//!
//! let name = String::from("ferris").also(|s| assert_eq!(s.len(), 6));
//! assert_eq!(name, "ferris");
//! ```

use scopefn_core::{DomainId, OperationId};

use crate::errors::{Rejected, gate};

/// Scope-function extensions, implemented for every type.
pub trait Scope {
    /// Call `f` with the receiver as its argument and return `f`'s result.
    #[doc(alias = "let")]
    #[inline]
    fn let_<R, F>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Call `f` with the receiver as its argument and return the receiver.
    #[inline]
    fn also<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Call `f` with the receiver as its context and return `f`'s result.
    #[inline]
    fn run<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }

    /// Call `f` with the receiver as its context and return the receiver.
    #[inline]
    fn apply<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        f(self);
        self
    }

    /// Return `Some(self)` if `predicate` holds, `None` otherwise.
    #[inline]
    fn take_if<P>(self, predicate: P) -> Option<Self>
    where
        Self: Sized,
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) { Some(self) } else { None }
    }

    /// Return `Some(self)` if `predicate` does not hold, `None` otherwise.
    #[inline]
    fn take_unless<P>(self, predicate: P) -> Option<Self>
    where
        Self: Sized,
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) { None } else { Some(self) }
    }

    /// Like [`Scope::also`], but `f` may fail. Its error is returned as is.
    #[inline]
    fn try_also<E, F>(self, f: F) -> Result<Self, E>
    where
        Self: Sized,
        F: FnOnce(&Self) -> Result<(), E>,
    {
        f(&self)?;
        Ok(self)
    }

    /// Like [`Scope::apply`], but `f` may fail. Its error is returned as is.
    #[inline]
    fn try_apply<E, F>(&self, f: F) -> Result<&Self, E>
    where
        F: FnOnce(&Self) -> Result<(), E>,
    {
        f(self)?;
        Ok(self)
    }

    /// Like [`Scope::take_if`], but a failed predicate hands the receiver back inside [`Rejected`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use scopefn::prelude::*;
    ///
    /// let err = vec![1, 2].require_if(|v| v.is_empty()).unwrap_err();
    /// assert_eq!(err.to_string(), "takeIf rejected the object receiver");
    /// assert_eq!(err.into_inner(), vec![1, 2]);
    /// ```
    #[inline]
    fn require_if<P>(self, predicate: P) -> Result<Self, Rejected<Self>>
    where
        Self: Sized,
        P: FnOnce(&Self) -> bool,
    {
        let keep = predicate(&self);
        gate(keep, OperationId::TakeIf, DomainId::Object, self)
    }

    /// Like [`Scope::take_unless`], but a satisfied predicate hands the receiver back inside [`Rejected`].
    #[inline]
    fn require_unless<P>(self, predicate: P) -> Result<Self, Rejected<Self>>
    where
        Self: Sized,
        P: FnOnce(&Self) -> bool,
    {
        let keep = !predicate(&self);
        gate(keep, OperationId::TakeUnless, DomainId::Object, self)
    }
}

impl<T: ?Sized> Scope for T {}

// --- Free functions ----------------------------------------------------------------------------

/// Call `f` with `value` as its argument and return `f`'s result.
#[doc(alias = "let")]
#[inline]
pub fn let_<T, R>(value: T, f: impl FnOnce(T) -> R) -> R {
    value.let_(f)
}

/// Call `f` with `value` as its argument and return `value`.
#[inline]
pub fn also<T>(value: T, f: impl FnOnce(&T)) -> T {
    value.also(f)
}

/// Call `f` with `value` as its context and return `f`'s result.
#[inline]
pub fn run<T: ?Sized, R>(value: &T, f: impl FnOnce(&T) -> R) -> R {
    value.run(f)
}

/// Call `f` with `value` as its context and return `value`.
#[inline]
pub fn apply<T: ?Sized>(value: &T, f: impl FnOnce(&T)) -> &T {
    value.apply(f)
}

/// Return `Some(value)` if `predicate` holds, `None` otherwise.
#[inline]
pub fn take_if<T>(value: T, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
    Scope::take_if(value, predicate)
}

/// Return `Some(value)` if `predicate` does not hold, `None` otherwise.
#[inline]
pub fn take_unless<T>(value: T, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
    Scope::take_unless(value, predicate)
}

/// Return `Ok(value)` if `predicate` holds, otherwise hand `value` back inside [`Rejected`].
#[inline]
pub fn require_if<T>(value: T, predicate: impl FnOnce(&T) -> bool) -> Result<T, Rejected<T>> {
    value.require_if(predicate)
}

/// Return `Ok(value)` if `predicate` does not hold, otherwise hand `value` back inside [`Rejected`].
#[inline]
pub fn require_unless<T>(value: T, predicate: impl FnOnce(&T) -> bool) -> Result<T, Rejected<T>> {
    value.require_unless(predicate)
}
