//! Scope-function vocabulary registries.
//!
//! Callers work with **stable IDs** ([`OperationId`](operations::OperationId), [`DomainId`](domains::DomainId)) and
//! look up spellings/metadata via registry tables instead of scattering string literals across logs and errors.
//!
//! ## Examples
//! ```rust
//! use scopefn_core::lang::operations::{self, OperationId};
//!
//! assert_eq!(operations::from_str("takeIf"), Some(OperationId::TakeIf));
//! assert_eq!(operations::from_str("take_if"), Some(OperationId::TakeIf));
//! assert_eq!(operations::rust_name(OperationId::Let), "let_");
//! ```

pub mod domains;
pub mod operations;
