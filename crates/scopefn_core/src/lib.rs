//! Provide the shared vocabulary and value normalization behind the `scopefn` operations.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - the canonical registries of scope operations and receiver domains ([`lang`]), and
//! - the [`ValueOf`] trait that normalizes wrapper types to their primitive value ([`value`]).
//!
//! ## Notes
//!
//! - No IO, no global state, no callbacks. The operations themselves live in the `scopefn` crate.

pub mod lang;
pub mod value;

pub use lang::domains::DomainId;
pub use lang::operations::OperationId;
pub use value::{Number, ValueOf};
