//! Scope functions for text receivers.
//!
//! Any `S: AsRef<str>` is accepted (`&str`, `String`, `Box<str>`, `Cow<str>`, `Rc<str>`...). Callbacks always see the
//! plain `&str`; receiver-returning operations hand back the receiver itself, so no copy of the text is made.

use scopefn_core::{DomainId, OperationId};

use crate::errors::{Rejected, gate};

/// Call `f` with the receiver as `&str` and return `f`'s result.
///
/// ## Examples
///
/// ```rust
/// use scopefn::text;
///
/// assert_eq!(text::let_(String::from("hi"), str::len), 2);
/// ```
#[doc(alias = "let")]
#[inline]
pub fn let_<S: AsRef<str>, R>(value: S, f: impl FnOnce(&str) -> R) -> R {
    f(value.as_ref())
}

/// Call `f` with the receiver as `&str` and return the receiver.
#[inline]
pub fn also<S: AsRef<str>>(value: S, f: impl FnOnce(&str)) -> S {
    f(value.as_ref());
    value
}

/// Call `f` with the borrowed receiver as context and return `f`'s result.
#[inline]
pub fn run<S: AsRef<str> + ?Sized, R>(value: &S, f: impl FnOnce(&str) -> R) -> R {
    f(value.as_ref())
}

/// Call `f` with the borrowed receiver as context and return the receiver.
#[inline]
pub fn apply<S: AsRef<str> + ?Sized>(value: &S, f: impl FnOnce(&str)) -> &S {
    f(value.as_ref());
    value
}

/// Return the receiver if `predicate` holds, `None` otherwise.
///
/// ## Examples
///
/// ```rust
/// use scopefn::text;
///
/// let name = text::take_if("  ", |s| !s.trim().is_empty());
/// assert_eq!(name, None);
/// ```
#[inline]
pub fn take_if<S: AsRef<str>>(value: S, predicate: impl FnOnce(&str) -> bool) -> Option<S> {
    if predicate(value.as_ref()) { Some(value) } else { None }
}

/// Return the receiver if `predicate` does not hold, `None` otherwise.
#[inline]
pub fn take_unless<S: AsRef<str>>(value: S, predicate: impl FnOnce(&str) -> bool) -> Option<S> {
    if predicate(value.as_ref()) { None } else { Some(value) }
}

/// Like [`take_if`], but a failed predicate hands the receiver back inside [`Rejected`].
#[inline]
pub fn require_if<S: AsRef<str>>(value: S, predicate: impl FnOnce(&str) -> bool) -> Result<S, Rejected<S>> {
    let keep = predicate(value.as_ref());
    gate(keep, OperationId::TakeIf, DomainId::Text, value)
}

/// Like [`take_unless`], but a satisfied predicate hands the receiver back inside [`Rejected`].
#[inline]
pub fn require_unless<S: AsRef<str>>(value: S, predicate: impl FnOnce(&str) -> bool) -> Result<S, Rejected<S>> {
    let keep = !predicate(value.as_ref());
    gate(keep, OperationId::TakeUnless, DomainId::Text, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn also_logs_once_and_returns_receiver() {
        let log = RefCell::new(Vec::new());
        let out = also("hi", |s| log.borrow_mut().push(s.to_owned()));
        assert_eq!(out, "hi");
        assert_eq!(*log.borrow(), vec!["hi".to_owned()]);
    }

    #[test]
    fn wrappers_are_seen_as_str() {
        let boxed: Box<str> = "boxed".into();
        assert_eq!(let_(boxed, |s| s.to_uppercase()), "BOXED");
        let shared: Rc<str> = Rc::from("shared");
        assert_eq!(let_(Rc::clone(&shared), str::len), 6);
        let cow: Cow<'_, str> = Cow::Borrowed("cow");
        assert_eq!(also(cow, |_| {}), "cow");
    }

    #[test]
    fn run_and_apply_accept_unsized_str() {
        assert_eq!(run("abc", |s| s.chars().rev().collect::<String>()), "cba");
        let owned = String::from("kept");
        let back: &String = apply(&owned, |s| assert_eq!(s, "kept"));
        assert!(std::ptr::eq(back, &owned));
    }

    #[test]
    fn take_if_returns_the_original_receiver_type() {
        let kept: Option<String> = take_if(String::from("value"), |s| s.starts_with('v'));
        assert_eq!(kept.as_deref(), Some("value"));
        assert_eq!(take_unless(String::from("value"), |s| s.starts_with('v')), None);
        assert_eq!(take_unless("", str::is_empty), None);
        assert_eq!(take_unless("x", str::is_empty), Some("x"));
    }

    #[test]
    fn unicode_is_untouched() {
        let s = "héllo wörld";
        assert_eq!(let_(s, |t| t.chars().count()), 11);
        assert_eq!(take_if(s, |t| t.contains('ö')), Some(s));
    }

    #[test]
    fn require_reports_text_domain() {
        let err = require_if(String::from("nope"), |s| s.len() > 10).expect_err("short text is rejected");
        assert_eq!(err.to_string(), "takeIf rejected the text receiver");
        assert_eq!(err.into_inner(), "nope");
        assert_eq!(require_unless("ok", str::is_empty).ok(), Some("ok"));
    }
}
