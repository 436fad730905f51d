//! Tracing helpers for inspecting values mid-chain.
//!
//! Events are emitted under the `scopefn` target, so they can be filtered with e.g. `RUST_LOG=scopefn=debug`.

use std::fmt::Debug;

use scopefn_core::OperationId;

/// `also`-style taps that report the receiver through `tracing`.
pub trait TraceScope: Debug {
    /// Emit a `debug` event carrying the receiver and `label`, then return the receiver.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use scopefn::prelude::*;
    ///
    /// let total = [1, 2, 3].iter().sum::<i32>().also_trace("sum");
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn also_trace(self, label: &str) -> Self
    where
        Self: Sized,
    {
        tracing::debug!(target: "scopefn", op = %OperationId::Also, label, value = ?self);
        self
    }

    /// Borrowing variant of [`TraceScope::also_trace`].
    #[inline]
    fn apply_trace(&self, label: &str) -> &Self {
        tracing::debug!(target: "scopefn", op = %OperationId::Apply, label, value = ?self);
        self
    }
}

impl<T: Debug + ?Sized> TraceScope for T {}
