//! Legacy format-code corrections.
//!
//! Excel format codes mix format tokens with quoted text, backslash escapes,
//! bracket tags, padding and fill markers. Both the numeric renderer and the
//! date token substitutor first split the first section of a code into
//! [`Piece`]s: code text still to be interpreted, literal text to copy, and
//! elapsed-time tags.

/// Unit of an elapsed-time tag (`[h]`, `[mm]`, `[ss]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedUnit {
    Hours,
    Minutes,
    Seconds,
}

/// A run of a format code after the legacy corrections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Unquoted text that may contain format tokens
    Code(String),
    /// Text shown as-is
    Literal(String),
    /// Elapsed total; `width` is the zero-padded minimum
    Elapsed { unit: ElapsedUnit, width: usize },
}

/// The first `;`-separated section of a format code.
///
/// Separators inside quotes, brackets or after a backslash do not count.
pub fn first_section(code: &str) -> &str {
    let mut in_quote = false;
    let mut in_bracket = false;
    let mut escaped = false;
    for (i, ch) in code.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if !in_quote => escaped = true,
            '"' if !in_bracket => in_quote = !in_quote,
            '[' if !in_quote => in_bracket = true,
            ']' if !in_quote => in_bracket = false,
            ';' if !in_quote && !in_bracket => return &code[..i],
            _ => {}
        }
    }
    code
}

/// Split the first section of a format code into pieces.
///
/// - `"text"` and `\x` become literals
/// - `[$SYM-LCID]` becomes the literal `SYM`
/// - `[h]`, `[m]`, `[s]` (any repetition) become elapsed pieces
/// - other bracket tags (colors, conditions, locales, DBNum) are removed
/// - `_x` becomes a space, `*x` is removed
pub fn split_legacy(code: &str) -> Vec<Piece> {
    let section = first_section(code);
    let mut pieces: Vec<Piece> = Vec::new();
    let mut chars = section.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let text: String = chars.by_ref().take_while(|&c| c != '"').collect();
                push_literal(&mut pieces, &text);
            }
            '\\' => {
                if let Some(next) = chars.next() {
                    push_literal(&mut pieces, next.encode_utf8(&mut [0; 4]));
                }
            }
            '[' => {
                let tag: String = chars.by_ref().take_while(|&c| c != ']').collect();
                if let Some(piece) = bracket_piece(&tag) {
                    match piece {
                        Piece::Literal(text) => push_literal(&mut pieces, &text),
                        other => pieces.push(other),
                    }
                }
            }
            '_' => {
                chars.next();
                push_literal(&mut pieces, " ");
            }
            '*' => {
                chars.next();
            }
            other => match pieces.last_mut() {
                Some(Piece::Code(code)) => code.push(other),
                _ => pieces.push(Piece::Code(other.to_string())),
            },
        }
    }
    pieces
}

fn push_literal(pieces: &mut Vec<Piece>, text: &str) {
    if text.is_empty() {
        return;
    }
    match pieces.last_mut() {
        Some(Piece::Literal(literal)) => literal.push_str(text),
        _ => pieces.push(Piece::Literal(text.to_string())),
    }
}

/// Interpret the contents of a `[...]` tag.
fn bracket_piece(tag: &str) -> Option<Piece> {
    if let Some(currency) = tag.strip_prefix('$') {
        let symbol = currency.split('-').next().unwrap_or_default();
        return Some(Piece::Literal(symbol.to_string()));
    }

    let first = tag.chars().next()?.to_ascii_lowercase();
    if !tag.chars().all(|c| c.to_ascii_lowercase() == first) {
        return None;
    }
    let unit = match first {
        'h' => ElapsedUnit::Hours,
        'm' => ElapsedUnit::Minutes,
        's' => ElapsedUnit::Seconds,
        _ => return None,
    };
    Some(Piece::Elapsed {
        unit,
        width: tag.len(),
    })
}

/// Concatenated code text of the pieces, the part tokens are matched in.
pub fn code_text(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .filter_map(|piece| match piece {
            Piece::Code(code) => Some(code.as_str()),
            _ => None,
        })
        .collect()
}

/// Whether the pieces carry an elapsed-time tag.
pub fn has_elapsed(pieces: &[Piece]) -> bool {
    pieces.iter().any(|p| matches!(p, Piece::Elapsed { .. }))
}

/// Replace every ASCII-case-insensitive occurrence of `needle`.
pub fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    let mut result = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = find_ignore_ascii_case(rest, needle) {
        result.push_str(&rest[..pos]);
        result.push_str(replacement);
        rest = &rest[pos + needle.len()..];
    }
    result.push_str(rest);
    result
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
pub fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len())
        .filter(|&i| haystack.is_char_boundary(i))
        .find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Piece {
        Piece::Code(s.to_string())
    }

    fn lit(s: &str) -> Piece {
        Piece::Literal(s.to_string())
    }

    #[test]
    fn test_first_section() {
        assert_eq!(first_section("#,##0;-#,##0"), "#,##0");
        assert_eq!(first_section("\"a;b\"0;0"), "\"a;b\"0");
        assert_eq!(first_section("0\\;0;x"), "0\\;0");
        assert_eq!(first_section("m/d;@"), "m/d");
        assert_eq!(first_section("0.00"), "0.00");
    }

    #[test]
    fn test_quotes_and_escapes() {
        assert_eq!(
            split_legacy("yyyy\"年\"m\"月\""),
            vec![code("yyyy"), lit("年"), code("m"), lit("月")]
        );
        assert_eq!(
            split_legacy("d\\-mmm\\-yy"),
            vec![code("d"), lit("-"), code("mmm"), lit("-"), code("yy")]
        );
    }

    #[test]
    fn test_bracket_tags() {
        assert_eq!(split_legacy("[$-409]h:mm"), vec![code("h:mm")]);
        assert_eq!(split_legacy("[$€-407]#,##0"), vec![lit("€"), code("#,##0")]);
        assert_eq!(split_legacy("[Red]0.00"), vec![code("0.00")]);
        assert_eq!(split_legacy("[DBNum1]General"), vec![code("General")]);
        assert_eq!(
            split_legacy("[h]:mm:ss"),
            vec![
                Piece::Elapsed {
                    unit: ElapsedUnit::Hours,
                    width: 1
                },
                code(":mm:ss")
            ]
        );
        assert_eq!(
            split_legacy("[mm]"),
            vec![Piece::Elapsed {
                unit: ElapsedUnit::Minutes,
                width: 2
            }]
        );
    }

    #[test]
    fn test_padding_and_fill() {
        assert_eq!(
            split_legacy("_(* #,##0_)"),
            vec![lit(" "), code("#,##0"), lit(" ")]
        );
    }

    #[test]
    fn test_code_text() {
        let pieces = split_legacy("yyyy\"年\"m\"月\"d\"日\"");
        assert_eq!(code_text(&pieces), "yyyymd");
        assert!(!has_elapsed(&pieces));
    }

    #[test]
    fn test_replace_ignore_ascii_case() {
        assert_eq!(
            replace_ignore_ascii_case("GENERAL x general", "General", "0"),
            "0 x 0"
        );
        assert_eq!(replace_ignore_ascii_case("年General", "general", "0"), "年0");
        assert_eq!(find_ignore_ascii_case("AbC", "bc"), Some(1));
        assert_eq!(find_ignore_ascii_case("ab", "abc"), None);
    }
}
