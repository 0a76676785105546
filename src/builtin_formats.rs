//! Built-in number format IDs and their corresponding format codes.
//!
//! Excel stores a numeric format ID with every cell; for IDs below 164 the
//! format code itself is implied and depends on the build of Excel that wrote
//! the file. Western builds use the ECMA-376 table, Japanese builds define
//! extra era and kanji date formats at 27-36 and 50-58 and use yen currency.

use crate::locale::FormatDialect;

/// Get the format code string for a built-in format ID.
///
/// # Arguments
/// * `id` - The numeric format ID from the spreadsheet file
/// * `dialect` - Which built-in table to consult
///
/// # Returns
/// * `Some(format_code)` - The format code string if this is a built-in format
/// * `None` - If the ID is not a built-in format in this dialect
///
/// # Examples
/// ```
/// use cellfmt::{format_code_from_id, FormatDialect};
///
/// assert_eq!(format_code_from_id(0, FormatDialect::Western), Some("General"));
/// assert_eq!(format_code_from_id(14, FormatDialect::Western), Some("m/d/yy"));
/// assert_eq!(format_code_from_id(14, FormatDialect::Japanese), Some("yyyy/m/d"));
/// assert_eq!(format_code_from_id(164, FormatDialect::Japanese), None);
/// ```
pub fn format_code_from_id(id: u16, dialect: FormatDialect) -> Option<&'static str> {
    match dialect {
        FormatDialect::Western => western_code(id),
        FormatDialect::Japanese => japanese_code(id).or_else(|| shared_code(id)),
    }
}

/// Check if a format ID is a built-in format in the given dialect.
pub fn is_builtin_format_id(id: u16, dialect: FormatDialect) -> bool {
    format_code_from_id(id, dialect).is_some()
}

/// Codes both tables agree on.
fn shared_code(id: u16) -> Option<&'static str> {
    match id {
        0 => Some("General"),
        1 => Some("0"),
        2 => Some("0.00"),
        3 => Some("#,##0"),
        4 => Some("#,##0.00"),
        9 => Some("0%"),
        10 => Some("0.00%"),
        11 => Some("0.00E+00"),
        12 => Some("# ?/?"),
        13 => Some("# ??/??"),
        15 => Some("d-mmm-yy"),
        16 => Some("d-mmm"),
        17 => Some("mmm-yy"),
        18 => Some("h:mm AM/PM"),
        19 => Some("h:mm:ss AM/PM"),
        20 => Some("h:mm"),
        21 => Some("h:mm:ss"),
        37 => Some("#,##0 ;(#,##0)"),
        38 => Some("#,##0 ;[Red](#,##0)"),
        39 => Some("#,##0.00;(#,##0.00)"),
        40 => Some("#,##0.00;[Red](#,##0.00)"),
        45 => Some("mm:ss"),
        46 => Some("[h]:mm:ss"),
        47 => Some("mmss.0"),
        48 => Some("##0.0E+0"),
        49 => Some("@"),
        _ => None,
    }
}

fn western_code(id: u16) -> Option<&'static str> {
    match id {
        5 => Some("\"$\"#,##0_);\\(\"$\"#,##0\\)"),
        6 => Some("\"$\"#,##0_);[Red]\\(\"$\"#,##0\\)"),
        7 => Some("\"$\"#,##0.00_);\\(\"$\"#,##0.00\\)"),
        8 => Some("\"$\"#,##0.00_);[Red]\\(\"$\"#,##0.00\\)"),
        14 => Some("m/d/yy"), // Excel uses this, not ECMA-376's "mm-dd-yy"
        22 => Some("m/d/yy h:mm"),
        41 => Some("_(* #,##0_);_(* \\(#,##0\\);_(* \"-\"_);_(@_)"),
        42 => Some("_(\"$\"* #,##0_);_(\"$\"* \\(#,##0\\);_(\"$\"* \"-\"_);_(@_)"),
        43 => Some("_(* #,##0.00_);_(* \\(#,##0.00\\);_(* \"-\"??_);_(@_)"),
        44 => Some("_(\"$\"* #,##0.00_);_(\"$\"* \\(#,##0.00\\);_(\"$\"* \"-\"??_);_(@_)"),
        _ => shared_code(id),
    }
}

fn japanese_code(id: u16) -> Option<&'static str> {
    const ERA_SHORT: &str = "[$-411]ge.m.d";
    const ERA_LONG: &str = "[$-411]ggge\"年\"m\"月\"d\"日\"";
    const YEAR_MONTH: &str = "yyyy\"年\"m\"月\"";
    const MONTH_DAY: &str = "m\"月\"d\"日\"";

    match id {
        5 => Some("\"¥\"#,##0;\"¥\"\\-#,##0"),
        6 => Some("\"¥\"#,##0;[Red]\"¥\"\\-#,##0"),
        7 => Some("\"¥\"#,##0.00;\"¥\"\\-#,##0.00"),
        8 => Some("\"¥\"#,##0.00;[Red]\"¥\"\\-#,##0.00"),
        14 => Some("yyyy/m/d"),
        22 => Some("yyyy/m/d h:mm"),
        27 | 36 | 50 | 57 => Some(ERA_SHORT),
        28 | 29 | 51 | 54 | 58 => Some(ERA_LONG),
        30 => Some("m/d/yy"),
        31 => Some("yyyy\"年\"m\"月\"d\"日\""),
        32 => Some("h\"時\"mm\"分\""),
        33 => Some("h\"時\"mm\"分\"ss\"秒\""),
        34 | 52 | 55 => Some(YEAR_MONTH),
        35 | 53 | 56 => Some(MONTH_DAY),
        41 => Some("_ * #,##0_ ;_ * \\-#,##0_ ;_ * \"-\"_ ;_ @_ "),
        42 => Some("_ \"¥\"* #,##0_ ;_ \"¥\"* \\-#,##0_ ;_ \"¥\"* \"-\"_ ;_ @_ "),
        43 => Some("_ * #,##0.00_ ;_ * \\-#,##0.00_ ;_ * \"-\"??_ ;_ @_ "),
        44 => Some("_ \"¥\"* #,##0.00_ ;_ \"¥\"* \\-#,##0.00_ ;_ \"¥\"* \"-\"??_ ;_ @_ "),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: FormatDialect = FormatDialect::Western;
    const J: FormatDialect = FormatDialect::Japanese;

    #[test]
    fn test_general_format() {
        assert_eq!(format_code_from_id(0, W), Some("General"));
        assert_eq!(format_code_from_id(0, J), Some("General"));
    }

    #[test]
    fn test_basic_number_formats() {
        assert_eq!(format_code_from_id(1, W), Some("0"));
        assert_eq!(format_code_from_id(2, J), Some("0.00"));
        assert_eq!(format_code_from_id(3, W), Some("#,##0"));
        assert_eq!(format_code_from_id(4, J), Some("#,##0.00"));
    }

    #[test]
    fn test_date_formats_differ_by_dialect() {
        assert_eq!(format_code_from_id(14, W), Some("m/d/yy"));
        assert_eq!(format_code_from_id(14, J), Some("yyyy/m/d"));
        assert_eq!(format_code_from_id(22, J), Some("yyyy/m/d h:mm"));
    }

    #[test]
    fn test_japanese_era_formats() {
        assert_eq!(format_code_from_id(27, J), Some("[$-411]ge.m.d"));
        assert_eq!(format_code_from_id(28, J), format_code_from_id(58, J));
        assert_eq!(format_code_from_id(34, J), format_code_from_id(55, J));
        assert_eq!(format_code_from_id(35, J), format_code_from_id(56, J));
        assert_eq!(format_code_from_id(36, J), format_code_from_id(57, J));
    }

    #[test]
    fn test_currency_formats() {
        assert!(format_code_from_id(5, J).unwrap().contains('¥'));
        assert!(format_code_from_id(5, W).unwrap().contains('$'));
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(format_code_from_id(18, W), Some("h:mm AM/PM"));
        assert_eq!(format_code_from_id(46, J), Some("[h]:mm:ss"));
    }

    #[test]
    fn test_undefined_ids() {
        assert_eq!(format_code_from_id(23, W), None);
        assert_eq!(format_code_from_id(27, W), None);
        assert_eq!(format_code_from_id(50, W), None);
        assert_eq!(format_code_from_id(23, J), None);
        assert_eq!(format_code_from_id(164, J), None);
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin_format_id(0, W));
        assert!(is_builtin_format_id(27, J));
        assert!(!is_builtin_format_id(27, W));
        assert!(!is_builtin_format_id(164, W));
    }
}
