//! Container shapes: prop-collections, dictionaries, vectors, counted
//! arrays, lists, and bare tuples/sequences.
//!
//! Rules run in a fixed priority order and the first match wins. The order
//! is load-bearing: the vector rule runs before the list rules so
//! `vector [x, y, z]` is not read as a bracketed list, and dimensioned
//! arrays run before the bare `array` rule. When nothing here matches the
//! resolver declines and control falls through to the reference and
//! primitive recognizers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::trailing_noise_only;
use super::{array, parse_type, primitive, reference};
use crate::types::Annotation;

/// The fixed geometry-vector reference type.
const VECTOR_TYPE: &str = "mathutils.Vector";

/// Lazy-compiled regex for the dual-addressable collection keyword.
static PROP_COLLECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^:class:`bpy_prop_collection`\s+of\s+(.+)$").unwrap());

/// Lazy-compiled regex for bracketed and parenthesized dict forms.
static DICT_PARAMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^dict(?:ionary)?\s*[\[(]\s*(.*?)\s*[\])]").unwrap());

static DICT_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^dict(?:ionary)?\b").unwrap());

/// Lazy-compiled regex for geometry vectors: `vector [x, y, z]`,
/// `Vector((x, y, z))`, `3d vector`, `3 vector`. Bracket contents never
/// change the result.
static VECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:\d\s*d?\s+)?vector\b").unwrap());

/// Lazy-compiled regex for a reference followed by `tuple(s)`.
static REF_TUPLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(:class:`[^`]+`)\s+tuples?\b").unwrap());

static LIST_OF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^list of\s+(.+)$").unwrap());

static LIST_PARAMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^list\s*[\[(]\s*(.*?)\s*[\])]").unwrap());

static LIST_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^list\b").unwrap());

/// Lazy-compiled regex for the `(normalized) vector of N <kind>` wrapper
/// inside list elements; the element kind comes from the trailing word,
/// the wrapper and count are ignored.
static WRAPPED_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:normalized\s+)?vector of\s+\d+\s+(\w+)").unwrap());

static TUPLE_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^tuples?\b").unwrap());
static ARRAY_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^array\b").unwrap());
static SEQUENCE_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^sequence\b").unwrap());

/// Resolve a container shape from normalized text, or decline.
pub(crate) fn resolve_container(text: &str) -> Option<Annotation> {
    // A bpy_prop_collection is simultaneously index- and key-addressable.
    if let Some(captures) = PROP_COLLECTION.captures(text) {
        let element = parse_type(&captures[1]).unwrap_or(Annotation::Any);
        return Some(Annotation::Union(vec![
            Annotation::seq(element.clone()),
            Annotation::map(Annotation::Str, element),
        ]));
    }

    if let Some(annotation) = resolve_dict(text) {
        return Some(annotation);
    }

    if VECTOR.is_match(text) {
        return Some(Annotation::reference(VECTOR_TYPE));
    }

    if let Some(annotation) = array::resolve_array(text) {
        return Some(annotation);
    }

    if let Some(captures) = REF_TUPLES.captures(text) {
        if let Some(element) = reference::resolve_reference(&captures[1]) {
            return Some(Annotation::open_tuple(element));
        }
    }

    if let Some(annotation) = resolve_list(text) {
        return Some(annotation);
    }

    if let Some(rest) =
        strip_keyword(&TUPLE_BARE, text).or_else(|| strip_keyword(&ARRAY_BARE, text))
    {
        if trailing_noise_only(rest) {
            return Some(Annotation::open_tuple(Annotation::Any));
        }
    }

    if let Some(rest) = strip_keyword(&SEQUENCE_BARE, text) {
        if trailing_noise_only(rest) {
            return Some(Annotation::seq(Annotation::Any));
        }
    }

    None
}

/// Resolve dictionary forms; a bare `dict` defaults to a string-keyed map
/// of `Any`.
fn resolve_dict(text: &str) -> Option<Annotation> {
    if let Some(captures) = DICT_PARAMS.captures(text) {
        if let Some((key, value)) = split_params(&captures[1]) {
            return Some(Annotation::map(dict_part(key), dict_part(value)));
        }
        return Some(Annotation::map(Annotation::Str, Annotation::Any));
    }

    let rest = strip_keyword(&DICT_BARE, text)?;
    if trailing_noise_only(rest) {
        return Some(Annotation::map(Annotation::Str, Annotation::Any));
    }
    None
}

/// Resolve list forms; elements re-enter the full pipeline.
fn resolve_list(text: &str) -> Option<Annotation> {
    if let Some(captures) = LIST_OF.captures(text) {
        return Some(Annotation::seq(list_element(&captures[1])));
    }

    if let Some(captures) = LIST_PARAMS.captures(text) {
        return Some(Annotation::seq(list_element(&captures[1])));
    }

    let rest = strip_keyword(&LIST_BARE, text)?;
    if trailing_noise_only(rest) {
        return Some(Annotation::seq(Annotation::Any));
    }
    None
}

/// Resolve a list element description.
fn list_element(text: &str) -> Annotation {
    if let Some(captures) = WRAPPED_ELEMENT.captures(text) {
        return primitive::match_primitive(&captures[1]).unwrap_or(Annotation::Any);
    }
    parse_type(text).unwrap_or(Annotation::Any)
}

/// Re-parse one dict parameter; non-class roles and unrecognized text
/// resolve to `Any`.
fn dict_part(text: &str) -> Annotation {
    parse_type(text.trim()).unwrap_or(Annotation::Any)
}

/// Split `K, V` parameters at the top-level comma, ignoring commas inside
/// backtick-delimited markup.
fn split_params(content: &str) -> Option<(&str, &str)> {
    let mut in_markup = false;
    for (index, c) in content.char_indices() {
        match c {
            '`' => in_markup = !in_markup,
            ',' if !in_markup => return Some((&content[..index], &content[index + 1..])),
            _ => {}
        }
    }
    None
}

/// The remainder after a keyword regex match, if the regex matches.
fn strip_keyword<'t>(keyword: &Regex, text: &'t str) -> Option<&'t str> {
    keyword.find(text).map(|found| &text[found.end()..])
}
