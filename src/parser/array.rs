//! Counted array shapes.
//!
//! Resolves `<elem> array of N item(s)` and
//! `<elem> multi-dimensional array of A * B item(s)` phrasing into tuple
//! shapes. The leading element word goes through the reference and
//! primitive recognizers and defaults to `Any` when absent.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{primitive, reference};
use crate::types::Annotation;

/// Counted arrays up to this many entries are spelled out entry by entry;
/// larger counts collapse to the open-ended `Tuple[T, ...]` form.
const MAX_EXPLICIT_ITEMS: usize = 4;

/// Lazy-compiled regex for two-dimensional counted arrays.
static MULTI_DIM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.*?)\s*multi[-\s]?dimensional array of\s+(\d+)\s*\*\s*(\d+)\s+items?\b")
        .unwrap()
});

/// Lazy-compiled regex for single-dimension counted arrays.
static SINGLE_DIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\s*array of\s+(\d+)\s+items?\b").unwrap());

/// Resolve dimensioned-array phrasing, or decline.
pub(crate) fn resolve_array(text: &str) -> Option<Annotation> {
    if let Some(captures) = MULTI_DIM.captures(text) {
        let element = element_kind(&captures[1]);
        let outer: usize = captures[2].parse().ok()?;
        let inner: usize = captures[3].parse().ok()?;
        if outer == 0 || inner == 0 {
            return None;
        }
        // The inner shape is computed first, then substituted as the outer
        // element; the collapse decisions are independent.
        return Some(tuple_shape(tuple_shape(element, inner), outer));
    }

    if let Some(captures) = SINGLE_DIM.captures(text) {
        let element = element_kind(&captures[1]);
        let count: usize = captures[2].parse().ok()?;
        if count == 0 {
            return None;
        }
        return Some(tuple_shape(element, count));
    }

    None
}

/// Resolve the element word preceding `array of`; defaults to `Any`.
fn element_kind(prefix: &str) -> Annotation {
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        return Annotation::Any;
    }
    reference::resolve_reference(trimmed)
        .or_else(|| primitive::match_primitive(trimmed))
        .unwrap_or(Annotation::Any)
}

/// Render a counted dimension as a tuple shape.
fn tuple_shape(element: Annotation, count: usize) -> Annotation {
    if count <= MAX_EXPLICIT_ITEMS {
        Annotation::Tuple {
            items: vec![element; count],
            open: false,
        }
    } else {
        Annotation::open_tuple(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(text: &str) -> String {
        resolve_array(text).unwrap().to_string()
    }

    #[test]
    fn test_explicit_counts() {
        assert_eq!(rendered("float array of 3 items"), "Tuple[float, float, float]");
        assert_eq!(rendered("int array of 4 items"), "Tuple[int, int, int, int]");
    }

    #[test]
    fn test_counts_above_threshold_collapse() {
        assert_eq!(rendered("float array of 5 items"), "Tuple[float, ...]");
        assert_eq!(rendered("int array of 8 items"), "Tuple[int, ...]");
    }

    #[test]
    fn test_single_item() {
        assert_eq!(rendered("int array of 1 item"), "Tuple[int]");
    }

    #[test]
    fn test_missing_element_defaults_to_any() {
        assert_eq!(rendered("array of 2 items"), "Tuple[Any, Any]");
    }

    #[test]
    fn test_reference_element() {
        assert_eq!(
            rendered(":class:`mathutils.Euler` array of 2 items"),
            "Tuple[mathutils.Euler, mathutils.Euler]"
        );
    }

    #[test]
    fn test_multi_dimensional_both_explicit() {
        assert_eq!(
            rendered("float multi-dimensional array of 3 * 2 items"),
            "Tuple[Tuple[float, float], Tuple[float, float], Tuple[float, float]]"
        );
    }

    #[test]
    fn test_multi_dimensional_inner_collapses() {
        assert_eq!(
            rendered("float multi-dimensional array of 3 * 8 items"),
            "Tuple[Tuple[float, ...], Tuple[float, ...], Tuple[float, ...]]"
        );
    }

    #[test]
    fn test_multi_dimensional_outer_collapses() {
        assert_eq!(
            rendered("float multi-dimensional array of 8 * 3 items"),
            "Tuple[Tuple[float, float, float], ...]"
        );
    }

    #[test]
    fn test_zero_count_declines() {
        assert_eq!(resolve_array("int array of 0 items"), None);
    }

    #[test]
    fn test_no_array_phrasing_declines() {
        assert_eq!(resolve_array("array"), None);
        assert_eq!(resolve_array("list of ints"), None);
    }
}
