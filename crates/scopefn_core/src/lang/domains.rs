//! Receiver domain vocabulary.
//!
//! Every scope operation exists for four receiver domains. The generic `object` domain passes the receiver through
//! unchanged; `number`, `text` and `boolean` first normalize a wrapper to its primitive value.

use core::fmt;

/// Stable identifier for a receiver domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainId {
    Object,
    Number,
    Text,
    Boolean,
}

/// Metadata for a receiver domain.
///
/// ## Notes
/// - `normalizes` is true when the receiver is reduced to a primitive before the callback runs.
/// - `optional_predicate` is true when `takeIf`/`takeUnless` may be called without a predicate, in which case the
///   receiver's own truth value decides. Only `boolean` has this.
#[derive(Debug, Clone, Copy)]
pub struct DomainInfo {
    pub id: DomainId,
    pub canonical: &'static str,
    pub normalizes: bool,
    pub optional_predicate: bool,
}

/// Registry of all receiver domains.
pub const DOMAINS: &[DomainInfo] = &[
    domain(DomainId::Object, "object", false, false),
    domain(DomainId::Number, "number", true, false),
    domain(DomainId::Text, "text", true, false),
    domain(DomainId::Boolean, "boolean", true, true),
];

/// Resolve a spelling to a [`DomainId`].
pub fn from_str(name: &str) -> Option<DomainId> {
    DOMAINS.iter().find(|d| d.canonical == name).map(|d| d.id)
}

/// Return the canonical spelling for a domain.
pub fn as_str(id: DomainId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a domain.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DomainId) -> &'static DomainInfo {
    DOMAINS.iter().find(|d| d.id == id).expect("domain info missing")
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn domain(id: DomainId, canonical: &'static str, normalizes: bool, optional_predicate: bool) -> DomainInfo {
    DomainInfo {
        id,
        canonical,
        normalizes,
        optional_predicate,
    }
}
