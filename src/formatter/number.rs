//! Number formatting (fixed built-ins, East-Asian numerals, custom patterns)

use crate::cache;
use crate::dialect::{
    code_text, find_ignore_ascii_case, replace_ignore_ascii_case, split_legacy, Piece,
};
use crate::error::FormatError;
use crate::locale::Locale;
use crate::resolver::ResolvedFormat;

/// Decimal pattern for the `General` keyword.
pub const GENERAL_PATTERN: &str = "0.##########";

/// Built-in indices rendered with a fixed decimal pattern.
///
/// Fractions (12, 13) are simplified to one decimal digit.
fn fixed_pattern(index: u16) -> Option<&'static str> {
    match index {
        0 => Some(GENERAL_PATTERN),
        3 => Some("#,##0"),
        4 => Some("#,##0.00"),
        5 | 6 | 37 | 38 | 41 => Some("#,##0;-#,##0"),
        7 | 8 | 39 | 40 | 43 => Some("#,##0.00;-#,##0.00"),
        12 | 13 => Some("0.#"),
        42 => Some("$#,##0;($#,##0)"),
        44 => Some("$#,##0.00;($#,##0.00)"),
        _ => None,
    }
}

const DBNUM1_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const DBNUM2_DIGITS: [char; 10] = ['〇', '壱', '弐', '参', '四', '伍', '六', '七', '八', '九'];
const DBNUM3_DIGITS: [char; 10] = ['０', '１', '２', '３', '４', '５', '６', '７', '８', '９'];

/// Digit glyphs selected by a `[DBNumN]` marker, if the pattern has one.
fn numeral_system(pattern: &str) -> Result<Option<&'static [char; 10]>, FormatError> {
    let Some(pos) = find_ignore_ascii_case(pattern, "DBNum") else {
        return Ok(None);
    };
    match pattern[pos + "DBNum".len()..].chars().next() {
        Some('1') => Ok(Some(&DBNUM1_DIGITS)),
        Some('2') => Ok(Some(&DBNUM2_DIGITS)),
        Some('3') => Ok(Some(&DBNUM3_DIGITS)),
        _ => Err(FormatError::UnsupportedNumeralSystem {
            pattern: pattern.to_string(),
        }),
    }
}

/// The decimal pattern a numeric format is rendered with.
pub fn decimal_pattern_for(format: &ResolvedFormat) -> Result<String, FormatError> {
    if let Some(fixed) = fixed_pattern(format.index) {
        return Ok(fixed.to_string());
    }

    if numeral_system(&format.pattern)?.is_some() {
        let base = if find_ignore_ascii_case(&format.pattern, "General").is_some() {
            "0.#"
        } else {
            "0"
        };
        return Ok(base.to_string());
    }

    Ok(generic_pattern(&format.pattern))
}

/// Lower an Excel custom code to a decimal pattern.
fn generic_pattern(code: &str) -> String {
    let pieces = split_legacy(code);
    if pieces.is_empty() {
        return GENERAL_PATTERN.to_string();
    }
    // Fractions are not rendered; one decimal digit stands in
    if code_text(&pieces).contains('/') {
        return "0.#".to_string();
    }

    let mut pattern = String::new();
    for piece in &pieces {
        match piece {
            Piece::Code(text) => {
                let text = replace_ignore_ascii_case(text, "General", GENERAL_PATTERN);
                for ch in text.chars() {
                    match ch {
                        '?' => pattern.push('#'),
                        '@' => {}
                        '\'' => pattern.push_str("''"),
                        other => pattern.push(other),
                    }
                }
            }
            Piece::Literal(text) => push_quoted(&mut pattern, text),
            Piece::Elapsed { .. } => {}
        }
    }
    pattern
}

/// Append literal text in decimal-pattern quoting.
fn push_quoted(pattern: &mut String, text: &str) {
    // A run cannot open with '' (that reads as one bare apostrophe)
    let rest = text.trim_start_matches('\'');
    for _ in 0..text.len() - rest.len() {
        pattern.push_str("''");
    }
    if !rest.is_empty() {
        pattern.push('\'');
        pattern.push_str(&rest.replace('\'', "''"));
        pattern.push('\'');
    }
}

/// Render a number through the numeric path.
pub fn format_number(
    value: f64,
    format: &ResolvedFormat,
    locale: &Locale,
) -> Result<String, FormatError> {
    let pattern = decimal_pattern_for(format)?;
    let parsed = cache::get_or_parse(&pattern)?;
    let mut result = parsed.apply(value, locale);

    if fixed_pattern(format.index).is_none() {
        if let Some(glyphs) = numeral_system(&format.pattern)? {
            result = result
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if c.is_ascii_digit() => glyphs[d as usize],
                    _ => c,
                })
                .collect();
        }
    }

    Ok(final_pass(&result))
}

/// Clean-up applied to every numeric result.
pub fn final_pass(text: &str) -> String {
    text.trim_end_matches(' ')
        .chars()
        .map(|c| match c {
            '¥' | '￥' => '\\',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(index: u16, pattern: &str) -> ResolvedFormat {
        ResolvedFormat {
            original_index: index,
            index,
            pattern: pattern.to_string(),
        }
    }

    fn fmt(value: f64, index: u16, pattern: &str) -> String {
        format_number(value, &resolved(index, pattern), &Locale::en_us()).unwrap()
    }

    #[test]
    fn test_fixed_indices() {
        assert_eq!(fmt(1234.5, 0, "General"), "1234.5");
        assert_eq!(fmt(1234.4, 3, ""), "1,234");
        assert_eq!(fmt(1234.567, 4, ""), "1,234.57");
        assert_eq!(fmt(-1234.0, 5, ""), "-1,234");
        assert_eq!(fmt(-1234.567, 8, ""), "-1,234.57");
        assert_eq!(fmt(3.14159, 12, "# ?/?"), "3.1");
        assert_eq!(fmt(1234.0, 42, ""), "$1,234");
        assert_eq!(fmt(-1234.5, 44, ""), "($1,234.50)");
    }

    #[test]
    fn test_generic_patterns() {
        assert_eq!(fmt(0.1234, 10, "0.00%"), "12.34%");
        assert_eq!(fmt(12345.678, 11, "0.00E+00"), "1.23E+04");
        assert_eq!(fmt(12345.0, 48, "##0.0E+0"), "12.3E+3");
        assert_eq!(fmt(7.0, 164, "000"), "007");
    }

    #[test]
    fn test_generic_corrections() {
        assert_eq!(
            generic_pattern("\"Total: \"#,##0;[Red]-#,##0"),
            "'Total: '#,##0"
        );
        assert_eq!(generic_pattern("[$€-407]#,##0.00"), "'€'#,##0.00");
        assert_eq!(generic_pattern("0.0?"), "0.0#");
        assert_eq!(generic_pattern("General"), GENERAL_PATTERN);
        assert_eq!(generic_pattern("@"), "");
        assert_eq!(generic_pattern("# ?/?"), "0.#");
        assert_eq!(generic_pattern("0\"'\""), "0''");
        assert_eq!(generic_pattern("0\" it's\""), "0' it''s'");
        assert_eq!(generic_pattern(""), GENERAL_PATTERN);
    }

    #[test]
    fn test_text_pattern_fails() {
        let err = format_number(1.0, &resolved(49, "@"), &Locale::en_us()).unwrap_err();
        assert!(matches!(err, FormatError::Pattern(_)));
    }

    #[test]
    fn test_dbnum() {
        assert_eq!(fmt(123.0, 164, "[DBNum1]General"), "一二三");
        assert_eq!(fmt(12.3, 164, "[DBNum1]General"), "一二.三");
        assert_eq!(fmt(105.0, 164, "[DBNum2]0"), "壱〇伍");
        assert_eq!(fmt(42.0, 164, "[dbnum3]0"), "４２");
    }

    #[test]
    fn test_unsupported_dbnum() {
        let err = format_number(1.0, &resolved(164, "[DBNum4]0"), &Locale::en_us()).unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedNumeralSystem { .. }));
    }

    #[test]
    fn test_final_pass() {
        assert_eq!(final_pass("1,234  "), "1,234");
        assert_eq!(final_pass("¥1,000"), "\\1,000");
        assert_eq!(final_pass("￥5"), "\\5");
        assert_eq!(fmt(1000.0, 164, "\"¥\"#,##0"), "\\1,000");
        assert_eq!(fmt(1234.0, 164, "#,##0 "), "1,234");
    }
}
