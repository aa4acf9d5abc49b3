//! Scalar kind recognition.
//!
//! Ordered keyword families, each anchored to the leading token of the
//! normalized text. Singular, plural, and capitalized forms of a family
//! all map to the same canonical kind.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Annotation;

static STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^str(?:ing)?s?\b").unwrap());
static BOOLEAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^bool(?:ean)?s?\b").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^int(?:eger)?s?\b").unwrap());
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:float|double)s?\b").unwrap());
static TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:type|class)\b").unwrap());
static CALLABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:function|callable)\b").unwrap());

/// Match a scalar kind at the start of a normalized description.
pub(crate) fn match_primitive(text: &str) -> Option<Annotation> {
    if STRING.is_match(text) {
        Some(Annotation::Str)
    } else if BOOLEAN.is_match(text) {
        Some(Annotation::Bool)
    } else if INTEGER.is_match(text) {
        Some(Annotation::Int)
    } else if FLOAT.is_match(text) {
        Some(Annotation::Float)
    } else if TYPE.is_match(text) {
        Some(Annotation::Type)
    } else if CALLABLE.is_match(text) {
        Some(Annotation::Callable)
    } else {
        None
    }
}
