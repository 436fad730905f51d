//! Prelude module for common imports.
//!
//! ```ignore
//! use scopefn::prelude::*;
//! ```

// Method-style operations for every value
pub use crate::scope::Scope;
// Tracing taps (feature `tracing`)
#[cfg(feature = "tracing")]
pub use crate::trace::TraceScope;

pub use crate::errors::Rejected;
// Primitive normalization used by the number/boolean domains
pub use scopefn_core::{Number, ValueOf};
