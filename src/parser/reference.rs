//! Cross-reference resolution.
//!
//! Handles the `:class:` role convention: a backtick-delimited body holding
//! a dotted path, optionally prefixed with a `~` (short name) or `!`
//! (no link) modifier, or the aliased form
//! ``:class:`Display Text <dotted.path>` `` where only the path in angle
//! brackets survives. The match ends at the closing backtick; trailing free
//! text (`.`, `, (read only)`, ` subclass`) is discarded. Non-class roles
//! such as `:ref:` never resolve.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Annotation;

/// Lazy-compiled regex for the aliased form.
static ALIASED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:class:`[^`<]*<([A-Za-z_][A-Za-z0-9_.]*)>`").unwrap());

/// Lazy-compiled regex for the plain form with optional modifier.
static PLAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:class:`[~!]?([A-Za-z_][A-Za-z0-9_.]*)`").unwrap());

/// Extract a dotted reference path from `:class:` markup, or decline.
pub(crate) fn resolve_reference(text: &str) -> Option<Annotation> {
    if let Some(captures) = ALIASED.captures(text) {
        return Some(Annotation::Ref(captures[1].to_string()));
    }
    PLAIN
        .captures(text)
        .map(|captures| Annotation::Ref(captures[1].to_string()))
}
