//! Scope operation vocabulary.
//!
//! This module defines the canonical set of scope operations along with how each one hands the receiver to its
//! callback and what it gives back.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and accepts both the canonical camelCase spelling (`"takeIf"`) and
//!   the Rust item name (`"take_if"`).
//! - `let` is a reserved word in Rust, so the operation is exposed as `let_`.
//!
//! ## Examples
//! ```rust
//! use scopefn_core::lang::operations::{self, Binding, OperationId, Returns};
//!
//! let info = operations::info_for(OperationId::Apply);
//! assert_eq!(info.binding, Binding::Context);
//! assert_eq!(info.returns, Returns::Receiver);
//! ```

use core::fmt;

/// Stable identifier for every scope operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    // Callback result
    Let,
    Run,

    // Receiver pass-through
    Also,
    Apply,

    // Predicate gated
    TakeIf,
    TakeUnless,
}

/// Describe how the receiver reaches the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// The receiver is the callback's argument (`it`).
    Argument,
    /// The receiver is the callback's context (`this`). Rust has no implicit receiver binding, so it is still passed
    /// as an explicit parameter, but by shared reference.
    Context,
}

/// Describe what an operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Returns {
    /// Whatever the callback returned.
    CallbackResult,
    /// The receiver, unchanged.
    Receiver,
    /// `Some(receiver)` or the absent marker `None`.
    ReceiverOrAbsent,
}

/// Metadata for a scope operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub id: OperationId,
    pub canonical: &'static str,
    pub rust_name: &'static str,
    pub binding: Binding,
    pub returns: Returns,
    pub description: &'static str,
}

/// Registry of all scope operations.
pub const OPERATIONS: &[OperationInfo] = &[
    op(
        OperationId::Let,
        "let",
        "let_",
        Binding::Argument,
        Returns::CallbackResult,
        "Call the block with the receiver as its argument and return the block's result.",
    ),
    op(
        OperationId::Run,
        "run",
        "run",
        Binding::Context,
        Returns::CallbackResult,
        "Call the block with the receiver as its context and return the block's result.",
    ),
    op(
        OperationId::Also,
        "also",
        "also",
        Binding::Argument,
        Returns::Receiver,
        "Call the block with the receiver as its argument and return the receiver.",
    ),
    op(
        OperationId::Apply,
        "apply",
        "apply",
        Binding::Context,
        Returns::Receiver,
        "Call the block with the receiver as its context and return the receiver.",
    ),
    op(
        OperationId::TakeIf,
        "takeIf",
        "take_if",
        Binding::Argument,
        Returns::ReceiverOrAbsent,
        "Return the receiver if it satisfies the predicate, otherwise nothing.",
    ),
    op(
        OperationId::TakeUnless,
        "takeUnless",
        "take_unless",
        Binding::Argument,
        Returns::ReceiverOrAbsent,
        "Return the receiver if it does not satisfy the predicate, otherwise nothing.",
    ),
];

/// Resolve a spelling to an [`OperationId`].
///
/// ## Parameters
/// - `spelling`: either the canonical (`"takeUnless"`) or Rust (`"take_unless"`) spelling.
///
/// ## Returns
/// - `Some(OperationId)` if `spelling` names a known operation.
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperationId> {
    OPERATIONS
        .iter()
        .find(|o| o.canonical == spelling || o.rust_name == spelling)
        .map(|o| o.id)
}

/// Return the canonical spelling for an operation.
pub fn as_str(id: OperationId) -> &'static str {
    info_for(id).canonical
}

/// Return the Rust item name for an operation.
pub fn rust_name(id: OperationId) -> &'static str {
    info_for(id).rust_name
}

/// Return the full metadata entry for an operation.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperationId) -> &'static OperationInfo {
    OPERATIONS.iter().find(|o| o.id == id).expect("operation info missing")
}

impl OperationId {
    /// Whether the operation hands back the receiver (possibly as `Option`) rather than the callback's result.
    pub fn returns_receiver(self) -> bool {
        !matches!(info_for(self).returns, Returns::CallbackResult)
    }

    /// Whether the operation is gated by a predicate.
    pub fn is_predicate_gated(self) -> bool {
        matches!(info_for(self).returns, Returns::ReceiverOrAbsent)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn op(
    id: OperationId,
    canonical: &'static str,
    rust_name: &'static str,
    binding: Binding,
    returns: Returns,
    description: &'static str,
) -> OperationInfo {
    OperationInfo {
        id,
        canonical,
        rust_name,
        binding,
        returns,
        description,
    }
}
