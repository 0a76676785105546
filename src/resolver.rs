//! Format index resolution.
//!
//! Several built-in indices are near-duplicates of another index and render
//! identically; they are folded onto one canonical index before dispatch. A
//! cell that carries only an index gets its pattern from the built-in table.

use crate::builtin_formats::format_code_from_id;
use crate::locale::Locale;

/// Near-duplicate built-in indices and the index they render as.
pub const INDEX_ALIASES: [(u16, u16); 4] = [(55, 34), (56, 35), (57, 36), (58, 28)];

/// The format a cell carries: its built-in index and pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec<'a> {
    pub index: u16,
    pub pattern: &'a str,
}

impl<'a> FormatSpec<'a> {
    pub fn new(index: u16, pattern: &'a str) -> Self {
        FormatSpec { index, pattern }
    }
}

/// A format after alias correction.
///
/// Both indices travel with the format: date detection checks either one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub original_index: u16,
    pub index: u16,
    pub pattern: String,
}

/// Index a built-in index renders as.
pub fn canonical_index(index: u16) -> u16 {
    INDEX_ALIASES
        .iter()
        .find(|(from, _)| *from == index)
        .map_or(index, |(_, to)| *to)
}

impl ResolvedFormat {
    /// Resolve an index and pattern for a locale.
    ///
    /// Never fails; an empty pattern on a non-built-in index stays empty.
    pub fn resolve(index: u16, pattern: &str, locale: &Locale) -> Self {
        let resolved = canonical_index(index);
        let pattern = if pattern.is_empty() {
            format_code_from_id(resolved, locale.dialect).unwrap_or_default()
        } else {
            pattern
        };

        ResolvedFormat {
            original_index: index,
            index: resolved,
            pattern: pattern.to_string(),
        }
    }

    /// Resolve a [`FormatSpec`].
    pub fn from_spec(spec: &FormatSpec<'_>, locale: &Locale) -> Self {
        Self::resolve(spec.index, spec.pattern, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(canonical_index(55), 34);
        assert_eq!(canonical_index(56), 35);
        assert_eq!(canonical_index(57), 36);
        assert_eq!(canonical_index(58), 28);
        assert_eq!(canonical_index(14), 14);
        assert_eq!(canonical_index(164), 164);
    }

    #[test]
    fn test_keeps_original_index() {
        let resolved = ResolvedFormat::resolve(57, "[$-411]ge.m.d", &Locale::ja_jp());
        assert_eq!(resolved.original_index, 57);
        assert_eq!(resolved.index, 36);
        assert_eq!(resolved.pattern, "[$-411]ge.m.d");
    }

    #[test]
    fn test_fills_empty_pattern_from_dialect() {
        let ja = ResolvedFormat::resolve(14, "", &Locale::ja_jp());
        assert_eq!(ja.pattern, "yyyy/m/d");

        let en = ResolvedFormat::resolve(14, "", &Locale::en_us());
        assert_eq!(en.pattern, "m/d/yy");

        let custom = ResolvedFormat::resolve(200, "", &Locale::en_us());
        assert_eq!(custom.pattern, "");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let locale = Locale::ja_jp();
        let once = ResolvedFormat::resolve(55, "", &locale);
        let twice = ResolvedFormat::resolve(once.index, &once.pattern, &locale);
        assert_eq!((once.index, &once.pattern), (twice.index, &twice.pattern));
    }
}
