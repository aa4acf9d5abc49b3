//! Input normalization.
//!
//! Strips the documentation noise that never affects the inferred kind:
//! numeric ranges, default clauses, caveat parentheticals, a leading
//! `unsigned` qualifier, and trailing sentence punctuation. Empty or
//! whitespace-only input carries no signal and normalizes to `None`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex for range clauses: `in [a, b]`, `in (-inf, inf)`.
static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+in\s+[\[(][^\])]*[\])]").unwrap());

/// Lazy-compiled regex for `from a to b` range clauses.
static FROM_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+from\s+-?[\d.]+\s+to\s+-?[\d.]+").unwrap());

/// Lazy-compiled regex for default clauses; they run to the end of the text.
static DEFAULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i),?\s+default\s.*$").unwrap());

/// Lazy-compiled regex for caveat parentheticals.
static CAVEAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),?\s*\(\s*(?:read\s?only|never\s+none|optional)\s*\)").unwrap()
});

/// Lazy-compiled regex for a leading `unsigned` qualifier, which has no
/// distinct kind in the output type system.
static UNSIGNED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^unsigned\s+").unwrap());

/// Normalize a raw description, returning `None` when no signal remains.
///
/// Reference paths keep their original case; keyword recognizers match
/// case-insensitively downstream.
pub(crate) fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = RANGE.replace_all(trimmed, "");
    let stripped = FROM_TO.replace_all(&stripped, "");
    let stripped = DEFAULT.replace(&stripped, "");
    let stripped = CAVEAT.replace_all(&stripped, "");
    let stripped = UNSIGNED.replace(&stripped, "");

    let result = stripped.trim().trim_end_matches('.').trim_end();
    if result.is_empty() {
        None
    } else {
        Some(result.to_string())
    }
}

/// Whether the remainder after a recognized keyword is trailing noise only.
pub(crate) fn trailing_noise_only(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(',') || rest.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("  "), None);
        assert_eq!(normalize("\n"), None);
    }

    #[test]
    fn test_normalize_caveat_only_input() {
        assert_eq!(normalize("(read only)"), None);
    }

    #[test]
    fn test_normalize_strips_range() {
        assert_eq!(normalize("int in [-32768, 32767]").unwrap(), "int");
        assert_eq!(normalize("float in [-inf, inf]").unwrap(), "float");
        assert_eq!(normalize("int in [0, 10000].").unwrap(), "int");
    }

    #[test]
    fn test_normalize_strips_from_to() {
        assert_eq!(normalize("int from 0 to 5").unwrap(), "int");
    }

    #[test]
    fn test_normalize_strips_default_clause() {
        assert_eq!(
            normalize("String, default \"\", (never None)").unwrap(),
            "String"
        );
        assert_eq!(
            normalize("boolean array of 3 items, default (False, False, False)").unwrap(),
            "boolean array of 3 items"
        );
    }

    #[test]
    fn test_normalize_strips_caveats() {
        assert_eq!(normalize("string (read only)").unwrap(), "string");
        assert_eq!(normalize("boolean (never None)").unwrap(), "boolean");
        assert_eq!(
            normalize("float array of 2 items in [-inf, inf], (optional)").unwrap(),
            "float array of 2 items"
        );
        assert_eq!(normalize("list, (read only)").unwrap(), "list");
    }

    #[test]
    fn test_normalize_strips_unsigned() {
        assert_eq!(normalize("unsigned int").unwrap(), "int");
        assert_eq!(normalize("unsigned integers").unwrap(), "integers");
    }

    #[test]
    fn test_normalize_combined_clauses() {
        assert_eq!(
            normalize("int in [-inf, inf], default 0, (readonly)").unwrap(),
            "int"
        );
    }

    #[test]
    fn test_normalize_keeps_meaningful_parentheses() {
        assert_eq!(
            normalize("list (vector of 3 floats)").unwrap(),
            "list (vector of 3 floats)"
        );
        assert_eq!(
            normalize("dict (string, :class:`~bge.types.SCA_InputEvent`)").unwrap(),
            "dict (string, :class:`~bge.types.SCA_InputEvent`)"
        );
    }

    #[test]
    fn test_normalize_keeps_reference_case() {
        assert_eq!(
            normalize(":class:`~bge.types.KX_GameObject`.").unwrap(),
            ":class:`~bge.types.KX_GameObject`"
        );
    }

    #[test]
    fn test_trailing_noise_only() {
        assert!(trailing_noise_only(""));
        assert!(trailing_noise_only(", len() == 512"));
        assert!(trailing_noise_only("."));
        assert!(!trailing_noise_only("of integers"));
        assert!(!trailing_noise_only("[x, y, z]"));
    }
}
