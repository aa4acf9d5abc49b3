//! The text-to-annotation inference engine.
//!
//! [`parse_type`] turns one documentation fragment describing an argument,
//! return value, or property into a canonical [`Annotation`]. The engine
//! is a fixed-priority rule pipeline over the normalized text:
//!
//! 1. container shapes: prop-collections, dicts, vectors, counted
//!    arrays, lists, bare tuples/sequences (see `container` for the
//!    exact order)
//! 2. `:class:` cross-references
//! 3. primitive keyword families
//!
//! The first matching rule wins; the order is load-bearing, since it
//! decides what structurally ambiguous text resolves to. Unrecognized
//! text yields `None`, never an error: the input is unvalidated prose and
//! "no annotation" is a defined outcome.
//!
//! The engine is a pure function of its input with no shared state, so it
//! is reentrant; container rules call [`parse_type`] again on element
//! substrings.

mod array;
mod container;
mod normalize;
mod primitive;
mod reference;

use crate::types::Annotation;

/// Parse a free-text type description into a canonical annotation.
///
/// Returns `None` for empty or whitespace-only input and for text no rule
/// recognizes. Never panics, for any input string.
///
/// ```
/// use typesift::parse_type;
///
/// let annotation = parse_type("list of :class:`mathutils.Vector`'s").unwrap();
/// assert_eq!(annotation.to_string(), "Seq[mathutils.Vector]");
/// ```
pub fn parse_type(text: &str) -> Option<Annotation> {
    let normalized = normalize::normalize(text)?;
    container::resolve_container(&normalized)
        .or_else(|| reference::resolve_reference(&normalized))
        .or_else(|| primitive::match_primitive(&normalized))
}
