//! Error type for the strict `require_*` operations.
//!
//! `take_if`/`take_unless` report a failed predicate as `None`, which drops the receiver. The `require_*` forms
//! return [`Rejected`] instead so the caller gets the value back and can use `?`.
//!
//! Errors produced by callbacks are never wrapped: `try_also`/`try_apply` return the callback's own `E`.

use scopefn_core::{DomainId, OperationId};
use thiserror::Error;

/// A predicate-gated operation refused its receiver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} rejected the {domain} receiver")]
pub struct Rejected<T> {
    operation: OperationId,
    domain: DomainId,
    value: T,
}

impl<T> Rejected<T> {
    /// The operation that rejected the receiver (`takeIf` or `takeUnless`).
    pub fn operation(&self) -> OperationId {
        self.operation
    }

    /// The receiver domain the operation ran in.
    pub fn domain(&self) -> DomainId {
        self.domain
    }

    /// Borrow the rejected receiver.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Recover the rejected receiver.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Turn a gate decision into a `require_*` result, tracing the rejection.
#[inline]
pub(crate) fn gate<T>(keep: bool, operation: OperationId, domain: DomainId, value: T) -> Result<T, Rejected<T>> {
    if keep {
        return Ok(value);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "scopefn", op = %operation, domain = %domain, "predicate rejected receiver");
    Err(Rejected {
        operation,
        domain,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kept_value_is_returned_as_ok() {
        assert_eq!(gate(true, OperationId::TakeIf, DomainId::Object, "x"), Ok("x"));
    }

    #[test]
    fn rejection_message_names_operation_and_domain() {
        let err = gate(false, OperationId::TakeUnless, DomainId::Number, 4_i32).expect_err("false gate rejects");
        assert_eq!(err.to_string(), "takeUnless rejected the number receiver");
        assert_eq!(err.operation(), OperationId::TakeUnless);
        assert_eq!(err.domain(), DomainId::Number);
        assert_eq!(*err.value(), 4);
        assert_eq!(err.into_inner(), 4);
    }

    #[test]
    fn rejected_is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err =
            gate(false, OperationId::TakeIf, DomainId::Text, String::from("s")).expect_err("false gate rejects");
        assert_error(&err);
    }
}
