//! Date and time formatting
//!
//! A numeric cell is routed here when its pattern is one of a few legacy
//! codes with hand-written layouts, when its index is a built-in date index,
//! or when its custom code classifies as a date.

use std::borrow::Cow;

use crate::calendar::{Calendar, DateComponents};
use crate::dialect::split_legacy;
use crate::error::FormatError;
use crate::formatter::{classify, substitute};
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::resolver::ResolvedFormat;

/// Legacy (2003-dialect) codes rendered with a fixed layout.
pub const LEGACY_DATE_PATTERNS: [&str; 8] = [
    "yyyy/m/d\\ h:mm\\ AM/PM",
    "[$-409]yyyy/m/d\\ h:mm\\ AM/PM;@",
    "m/d;@",
    "[$-409]d\\-mmm\\-yy;@",
    "d/m/yyyy;@",
    "yyyy\"年\"m\"月\"d\"日\"\\ h\"時\"mm\"分\";@",
    "[$-409]h:mm:ss\\ AM/PM;@",
    "[$-409]mmm\\-yy;@",
];

/// Whether a built-in index is a date or time format.
pub fn is_date_index(index: u16) -> bool {
    matches!(index, 14..=22 | 27..=36 | 45..=47 | 50..=58)
}

/// How a date value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRoute {
    /// Position in [`LEGACY_DATE_PATTERNS`]
    Legacy(usize),
    /// Fixed layout of a built-in index
    Builtin(u16),
    /// Token substitution over the custom code
    Substitute,
}

/// Decide whether a numeric format renders as a date, and how.
pub fn detect(format: &ResolvedFormat) -> Option<DateRoute> {
    if let Some(position) = LEGACY_DATE_PATTERNS
        .iter()
        .position(|legacy| *legacy == format.pattern)
    {
        return Some(DateRoute::Legacy(position));
    }

    if is_date_index(format.index) {
        return Some(DateRoute::Builtin(format.index));
    }
    if is_date_index(format.original_index) {
        return Some(DateRoute::Builtin(format.original_index));
    }

    let pieces = split_legacy(&format.pattern);
    if classify::is_date_format(&pieces)
        || (legacy_heuristic(&format.pattern) && classify::has_date_letter(&pieces))
    {
        return Some(DateRoute::Substitute);
    }
    None
}

/// Shapes of 2003-dialect date codes.
fn legacy_heuristic(pattern: &str) -> bool {
    pattern.ends_with(";@")
        || pattern.starts_with("[$-")
        || pattern.find("yyyy").is_some_and(|pos| pos >= 3)
}

/// Render a date value along a route.
pub fn format_date(
    value: f64,
    format: &ResolvedFormat,
    route: DateRoute,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    match route {
        DateRoute::Legacy(position) => render_legacy(value, position, opts),
        DateRoute::Builtin(index) => render_builtin(value, index, opts),
        DateRoute::Substitute => {
            let pieces = split_legacy(&format.pattern);
            let calendar = if pieces_use_eras(&format.pattern) {
                Calendar::JapaneseImperial
            } else {
                Calendar::Gregorian
            };
            let opts = tagged_options(&format.pattern, opts);
            let c = DateComponents::from_serial(value, calendar, &opts)?;
            Ok(substitute::substitute(&pieces, &format.pattern, &c))
        }
    }
}

/// Era tokens only appear in codes that spell a `g`.
fn pieces_use_eras(pattern: &str) -> bool {
    crate::dialect::code_text(&split_legacy(pattern))
        .chars()
        .any(|c| c.eq_ignore_ascii_case(&'g'))
}

/// Options with the locale a leading `[$-409]` tag asks for.
///
/// `[$-409]` codes are US English regardless of the workbook locale.
fn tagged_options<'a>(pattern: &str, opts: &'a FormatOptions) -> Cow<'a, FormatOptions> {
    if pattern.starts_with("[$-409]") {
        Cow::Owned(FormatOptions {
            date_system: opts.date_system,
            locale: Locale::en_us(),
        })
    } else {
        Cow::Borrowed(opts)
    }
}

fn render_legacy(value: f64, position: usize, opts: &FormatOptions) -> Result<String, FormatError> {
    let opts = tagged_options(LEGACY_DATE_PATTERNS[position], opts);
    let c = DateComponents::from_serial(value, Calendar::Gregorian, &opts)?;

    Ok(match position {
        0 | 1 => format!(
            "{}/{}/{} {}:{:02} {}",
            c.year, c.month, c.day, c.hour12, c.minute, c.ampm
        ),
        2 => format!("{}/{}", c.month, c.day),
        3 => format!("{}-{}-{:02}", c.day, c.month_short, c.year % 100),
        4 => format!("{}/{}/{}", c.day, c.month, c.year),
        5 => format!(
            "{}年{}月{}日 {}時{:02}分",
            c.year, c.month, c.day, c.hour24, c.minute
        ),
        6 => format!("{}:{:02}:{:02} {}", c.hour12, c.minute, c.second, c.ampm),
        7 => format!("{}-{:02}", c.month_short, c.year % 100),
        _ => format!("{}/{}/{}", c.year, c.month, c.day),
    })
}

/// Fixed layouts of the built-in date indices, as a Japanese build shows them.
fn render_builtin(value: f64, index: u16, opts: &FormatOptions) -> Result<String, FormatError> {
    let calendar = match index {
        27..=29 | 36 | 50 | 51 | 54 | 57 | 58 => Calendar::JapaneseImperial,
        _ => Calendar::Gregorian,
    };
    let c = DateComponents::from_serial(value, calendar, opts)?;
    let am_pm = if c.hour24 >= 12 { "PM" } else { "AM" };

    Ok(match index {
        15 => format!("{}-{}-{:02}", c.day, c.month_short, c.year % 100),
        16 => format!("{}-{}", c.day, c.month_short),
        17 => format!("{}-{:02}", c.month_short, c.year % 100),
        18 => format!("{}:{:02} {}", c.hour12, c.minute, am_pm),
        19 => format!("{}:{:02}:{:02} {}", c.hour12, c.minute, c.second, am_pm),
        20 => format!("{}:{:02}", c.hour24, c.minute),
        21 => format!("{}:{:02}:{:02}", c.hour24, c.minute, c.second),
        22 => format!(
            "{}/{}/{} {}:{:02}",
            c.year, c.month, c.day, c.hour24, c.minute
        ),
        27 | 36 | 50 | 57 => format!("{}{}.{}.{}", c.era_initial, c.era_year, c.month, c.day),
        28 | 29 | 51 | 54 | 58 => format!("{}{}年{}月{}日", c.era, c.era_year, c.month, c.day),
        30 => format!("{}/{}/{:02}", c.month, c.day, c.year % 100),
        31 => format!("{}年{}月{}日", c.year, c.month, c.day),
        32 => format!("{}時{:02}分", c.hour24, c.minute),
        33 => format!("{}時{:02}分{:02}秒", c.hour24, c.minute, c.second),
        34 | 52 | 55 => format!("{}年{}月", c.year, c.month),
        35 | 53 | 56 => format!("{}月{}日", c.month, c.day),
        45 => format!("{:02}:{:02}", c.minute, c.second),
        46 => format!("{}:{:02}:{:02}", c.elapsed_hours, c.minute, c.second),
        47 => {
            // Tenths round half up and may carry into the seconds
            let tenths = (u64::from(c.minute * 60 + c.second) * 1000
                + u64::from(c.millisecond)
                + 50)
                / 100;
            format!(
                "{:02}:{:02}.{}",
                (tenths / 600) % 60,
                (tenths / 10) % 60,
                tenths % 10
            )
        }
        // 14 and anything unlisted
        _ => format!("{}/{}/{}", c.year, c.month, c.day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-05 13:30
    const SERIAL: f64 = 45356.5625;

    fn resolved(index: u16, pattern: &str) -> ResolvedFormat {
        ResolvedFormat {
            original_index: index,
            index,
            pattern: pattern.to_string(),
        }
    }

    fn builtin(index: u16) -> String {
        render_builtin(SERIAL, index, &FormatOptions::with_locale(Locale::ja_jp())).unwrap()
    }

    #[test]
    fn test_date_indices() {
        assert!(is_date_index(14));
        assert!(is_date_index(22));
        assert!(!is_date_index(23));
        assert!(is_date_index(27));
        assert!(!is_date_index(37));
        assert!(is_date_index(46));
        assert!(!is_date_index(48));
        assert!(is_date_index(58));
        assert!(!is_date_index(59));
    }

    #[test]
    fn test_builtin_layouts() {
        assert_eq!(builtin(14), "2024/3/5");
        assert_eq!(builtin(15), "5-Mar-24");
        assert_eq!(builtin(16), "5-Mar");
        assert_eq!(builtin(17), "Mar-24");
        assert_eq!(builtin(18), "1:30 PM");
        assert_eq!(builtin(19), "1:30:00 PM");
        assert_eq!(builtin(20), "13:30");
        assert_eq!(builtin(21), "13:30:00");
        assert_eq!(builtin(22), "2024/3/5 13:30");
        assert_eq!(builtin(30), "3/5/24");
        assert_eq!(builtin(31), "2024年3月5日");
        assert_eq!(builtin(32), "13時30分");
        assert_eq!(builtin(33), "13時30分00秒");
        assert_eq!(builtin(45), "30:00");
        assert_eq!(builtin(46), "1088557:30:00");
        assert_eq!(builtin(47), "30:00.0");
    }

    #[test]
    fn test_builtin_era_layouts() {
        for index in [27, 36, 50, 57] {
            assert_eq!(builtin(index), "R6.3.5", "index {index}");
        }
        for index in [28, 29, 51, 54, 58] {
            assert_eq!(builtin(index), "令和6年3月5日", "index {index}");
        }
        for index in [34, 52, 55] {
            assert_eq!(builtin(index), "2024年3月", "index {index}");
        }
        for index in [35, 53, 56] {
            assert_eq!(builtin(index), "3月5日", "index {index}");
        }
    }

    #[test]
    fn test_detect_order() {
        assert_eq!(
            detect(&resolved(176, "m/d;@")),
            Some(DateRoute::Legacy(2))
        );
        assert_eq!(detect(&resolved(14, "0.00")), Some(DateRoute::Builtin(14)));
        assert_eq!(
            detect(&resolved(176, "yyyy-mm-dd")),
            Some(DateRoute::Substitute)
        );
        assert_eq!(detect(&resolved(176, "0.00")), None);
        assert_eq!(detect(&resolved(176, "General;@")), None);
    }

    #[test]
    fn test_detect_by_original_index() {
        let format = ResolvedFormat {
            original_index: 55,
            index: 34,
            pattern: String::new(),
        };
        assert_eq!(detect(&format), Some(DateRoute::Builtin(34)));
    }

    #[test]
    fn test_legacy_heuristic() {
        assert!(legacy_heuristic("[$-409]mmmm;@"));
        assert!(legacy_heuristic("\"FY\"yyyy"));
        assert!(!legacy_heuristic("yyyy"));
        // Not a date code, but shaped like one; the letter check decides
        let format = resolved(176, "[$-409]\"Q\"0");
        assert_eq!(detect(&format), None);
    }

    #[test]
    fn test_legacy_layouts() {
        let opts = FormatOptions::with_locale(Locale::ja_jp());
        let render = |position| render_legacy(SERIAL, position, &opts).unwrap();
        assert_eq!(render(0), "2024/3/5 1:30 午後");
        assert_eq!(render(1), "2024/3/5 1:30 PM");
        assert_eq!(render(2), "3/5");
        assert_eq!(render(3), "5-Mar-24");
        assert_eq!(render(4), "5/3/2024");
        assert_eq!(render(5), "2024年3月5日 13時30分");
        assert_eq!(render(6), "1:30:00 PM");
        assert_eq!(render(7), "Mar-24");
    }

    #[test]
    fn test_substitute_route_uses_eras() {
        let opts = FormatOptions::with_locale(Locale::ja_jp());
        let format = resolved(176, "[$-411]ggge\"年\"");
        let out = format_date(SERIAL, &format, DateRoute::Substitute, &opts).unwrap();
        assert_eq!(out, "令和6年");
    }

    #[test]
    fn test_substitute_route_honors_us_tag() {
        let opts = FormatOptions::with_locale(Locale::ja_jp());
        let render = |pattern: &str| {
            format_date(SERIAL, &resolved(176, pattern), DateRoute::Substitute, &opts).unwrap()
        };
        assert_eq!(render("[$-409]h:mm:ss AM/PM;@"), "1:30:00 PM");
        assert_eq!(render("[$-409]dddd, mmmm d, yyyy"), "Tuesday, March 5, 2024");
        assert_eq!(render("h:mm:ss AM/PM"), "1:30:00 午後");
    }

    #[test]
    fn test_out_of_range() {
        let opts = FormatOptions::default();
        assert!(render_builtin(-1.0, 14, &opts).is_err());
        assert!(render_builtin(3_000_000.0, 14, &opts).is_err());
    }
}
