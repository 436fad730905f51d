//! Kotlin-style scope functions for Rust values.
//!
//! Six operations (`let`, `also`, `run`, `apply`, `takeIf`, `takeUnless`) over four receiver domains:
//!
//! - [`scope`]: any value, passed through unchanged. Also available as methods via [`Scope`].
//! - [`number`]: numeric primitives and their wrappers, normalized to the primitive.
//! - [`text`]: anything that is `AsRef<str>`, seen by callbacks as `&str`.
//! - [`boolean`]: `bool` and its wrappers; `take_if`/`take_unless` accept an optional predicate.
//!
//! Operations never mutate the receiver and never catch what a callback raises: panics unwind through them, and
//! callback errors come back unchanged from the `try_*` forms.
//!
//! ## Examples
//!
//! ```rust
//! use scopefn::prelude::*;
//!
//! let port = "8080"
//!     .let_(str::parse::<u16>)
//!     .ok()
//!     .and_then(|p| p.take_if(|p| *p >= 1024));
//! assert_eq!(port, Some(8080));
//! ```

#![deny(clippy::unwrap_used)]

pub mod boolean;
pub mod errors;
pub mod number;
pub mod prelude;
pub mod scope;
pub mod text;

#[cfg(feature = "tracing")]
pub mod trace;

// Re-export commonly used items
pub use errors::Rejected;
pub use scope::Scope;
pub use scopefn_core::{DomainId, Number, OperationId, ValueOf};

#[cfg(feature = "tracing")]
pub use trace::TraceScope;
