//! Japanese imperial era (gengō) lookup
//!
//! Excel's `[$-411]` date formats show an era name and a year counted from the
//! era's first day (`ggge` → 令和6, `ge` → R6). This module holds the era table
//! and maps a Gregorian date onto it.
//!
//! ## Boundaries
//!
//! Each era starts on the day after the previous emperor's reign ended:
//!
//! | Era    | First day  |
//! |--------|------------|
//! | Meiji  | 1868-09-08 |
//! | Taishō | 1912-07-30 |
//! | Shōwa  | 1926-12-25 |
//! | Heisei | 1989-01-08 |
//! | Reiwa  | 2019-05-01 |
//!
//! Dates before Meiji have no imperial era; callers fall back to Gregorian.

/// One imperial era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    /// Full name, e.g. `平成`
    pub name: &'static str,
    /// Single-glyph abbreviation, e.g. `平`
    pub abbrev: &'static str,
    /// Latin initial, e.g. `H`
    pub initial: &'static str,
    /// First day of the era as (year, month, day)
    pub start: (i32, u32, u32),
}

/// Eras in chronological order.
pub const ERAS: [Era; 5] = [
    Era {
        name: "明治",
        abbrev: "明",
        initial: "M",
        start: (1868, 9, 8),
    },
    Era {
        name: "大正",
        abbrev: "大",
        initial: "T",
        start: (1912, 7, 30),
    },
    Era {
        name: "昭和",
        abbrev: "昭",
        initial: "S",
        start: (1926, 12, 25),
    },
    Era {
        name: "平成",
        abbrev: "平",
        initial: "H",
        start: (1989, 1, 8),
    },
    Era {
        name: "令和",
        abbrev: "令",
        initial: "R",
        start: (2019, 5, 1),
    },
];

/// Find the era containing a Gregorian date.
///
/// # Returns
/// The era and the era-relative year (the first year of an era is 1), or
/// `None` if the date precedes Meiji.
pub fn era_for(year: i32, month: u32, day: u32) -> Option<(&'static Era, i32)> {
    ERAS.iter()
        .rev()
        .find(|era| (year, month, day) >= era.start)
        .map(|era| (era, year - era.start.0 + 1))
}
