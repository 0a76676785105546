//! Date token substitution
//!
//! Rewrites the tokens of a custom date code with the values of one
//! [`DateComponents`] snapshot. The code is held as a list of segments; a
//! pass replaces tokens inside raw segments only, so text produced by an
//! earlier pass is never matched again.
//!
//! Pass order is fixed. `mm` is always minutes, even next to a year or day,
//! and a bare `m` is the month.

use crate::calendar::DateComponents;
use crate::dialect::{code_text, find_ignore_ascii_case, ElapsedUnit, Piece};
use crate::locale::{JA_WEEKDAYS_FULL, JA_WEEKDAYS_SHORT};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// Text still open to substitution
    Raw(String),
    /// Finished output
    Done(String),
    /// `AM/PM` or `A/P`, filled in after every other pass
    Marker(MarkerKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MarkerKind {
    AmPm,
    /// `A/P`; `lower` when written `a/p`
    Initial { lower: bool },
}

/// Substitute every token of a date code.
///
/// `pattern` is the full format code; a leading `[$-...]` tag switches hours
/// to the 12-hour clock.
pub fn substitute(pieces: &[Piece], pattern: &str, c: &DateComponents) -> String {
    let code = code_text(pieces);
    let mut segments: Vec<Segment> = pieces
        .iter()
        .map(|piece| match piece {
            Piece::Code(text) => Segment::Raw(text.clone()),
            Piece::Literal(text) => Segment::Done(text.clone()),
            Piece::Elapsed { unit, width } => Segment::Done(elapsed(c, *unit, *width)),
        })
        .collect();

    segments = protect_markers(segments);
    let twelve_hour = pattern.starts_with("[$-")
        || segments.iter().any(|s| matches!(s, Segment::Marker(_)));
    segments = protect_names(segments, &ENGLISH_MONTHS);
    segments = protect_names(segments, &ENGLISH_WEEKDAYS);

    let hour = if twelve_hour { c.hour12 } else { c.hour24 };
    let month_spelled = contains_any(&code, &ENGLISH_MONTHS);
    let weekday_spelled = contains_any(&code, &ENGLISH_WEEKDAYS);
    let weekday_index = (c.weekday - 1) as usize;

    segments = pass(segments, &["yyyy", "yy"], |token| match token {
        "yyyy" => c.year.to_string(),
        _ => format!("{:02}", c.year.rem_euclid(100)),
    });

    segments = pass(
        segments,
        &["gggee", "ggge", "gge", "ggg", "ge", "gg", "ee", "e"],
        |token| match token {
            "gggee" => format!("{}{:02}", c.era, c.era_year),
            "ggge" => format!("{}{}", c.era, c.era_year),
            "gge" => format!("{}{}", c.era_abbrev, c.era_year),
            "ggg" => c.era.to_string(),
            "ge" => format!("{}{}", c.era_initial, c.era_year),
            "gg" => c.era_abbrev.to_string(),
            "ee" => format!("{:02}", c.era_year),
            _ => c.era_year.to_string(),
        },
    );

    segments = pass(segments, &["mmmmm", "mmmm", "mmm"], |token| match token {
        "mmmmm" => c.month_long.chars().take(1).collect(),
        "mmmm" => c.month_long.to_string(),
        _ => c.month_short.to_string(),
    });

    segments = pass(segments, &["mm"], |_| format!("{:02}", c.minute));

    if !month_spelled {
        segments = pass(segments, &["m"], |_| c.month.to_string());
    }

    segments = pass(segments, &["dddd", "ddd"], |token| match token {
        "dddd" => c.weekday_long.to_string(),
        _ => c.weekday_short.to_string(),
    });

    segments = pass(segments, &["dd"], |_| format!("{:02}", c.day));

    if !weekday_spelled {
        segments = pass(segments, &["d"], |_| c.day.to_string());
    }

    segments = pass(segments, &["aaaa", "aaa"], |token| match token {
        "aaaa" => JA_WEEKDAYS_FULL[weekday_index].to_string(),
        _ => JA_WEEKDAYS_SHORT[weekday_index].to_string(),
    });

    segments = pass(segments, &["h:mm", "h:m"], |token| match token {
        "h:mm" => format!("{}:{:02}", hour, c.minute),
        _ => format!("{}:{}", hour, c.minute),
    });

    segments = pass(segments, &["hh", "h"], |token| match token {
        "hh" => format!("{:02}", hour),
        _ => hour.to_string(),
    });

    segments = pass(segments, &["ss"], |_| format!("{:02}", c.second));

    let mut result = String::new();
    for segment in &segments {
        match segment {
            Segment::Raw(text) | Segment::Done(text) => result.push_str(text),
            Segment::Marker(MarkerKind::AmPm) => result.push_str(c.ampm),
            Segment::Marker(MarkerKind::Initial { lower }) => {
                let letter = if c.hour24 >= 12 { 'P' } else { 'A' };
                result.push(if *lower {
                    letter.to_ascii_lowercase()
                } else {
                    letter
                });
            }
        }
    }
    result
}

fn elapsed(c: &DateComponents, unit: ElapsedUnit, width: usize) -> String {
    let total = match unit {
        ElapsedUnit::Hours => c.elapsed_hours,
        ElapsedUnit::Minutes => c.elapsed_minutes,
        ElapsedUnit::Seconds => c.elapsed_seconds,
    };
    format!("{:0>width$}", total, width = width)
}

fn contains_any(code: &str, names: &[&str]) -> bool {
    names
        .iter()
        .any(|name| find_ignore_ascii_case(code, name).is_some())
}

/// Run one substitution pass over the raw segments.
///
/// Tokens are tried in order at every position, so longer tokens must come
/// first. `render` receives the token as listed, not as written.
fn pass<F>(segments: Vec<Segment>, tokens: &[&str], render: F) -> Vec<Segment>
where
    F: Fn(&str) -> String,
{
    split_raw(segments, tokens, |token, _| Segment::Done(render(token)))
}

fn protect_markers(segments: Vec<Segment>) -> Vec<Segment> {
    split_raw(segments, &["AM/PM", "A/P"], |token, written| {
        if token == "AM/PM" {
            Segment::Marker(MarkerKind::AmPm)
        } else {
            Segment::Marker(MarkerKind::Initial {
                lower: written.starts_with('a'),
            })
        }
    })
}

fn protect_names(segments: Vec<Segment>, names: &[&str]) -> Vec<Segment> {
    split_raw(segments, names, |_, written| Segment::Done(written.to_string()))
}

/// Split raw segments at every token occurrence, replacing the token with
/// the segment `make(token, written)` returns.
fn split_raw<F>(segments: Vec<Segment>, tokens: &[&str], make: F) -> Vec<Segment>
where
    F: Fn(&str, &str) -> Segment,
{
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = match segment {
            Segment::Raw(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let bytes = text.as_bytes();
        let mut start = 0;
        let mut i = 0;
        while i < text.len() {
            let matched = if text.is_char_boundary(i) {
                tokens.iter().find(|token| {
                    let t = token.as_bytes();
                    bytes.len() - i >= t.len() && bytes[i..i + t.len()].eq_ignore_ascii_case(t)
                })
            } else {
                None
            };
            match matched {
                Some(token) => {
                    if start < i {
                        out.push(Segment::Raw(text[start..i].to_string()));
                    }
                    out.push(make(token, &text[i..i + token.len()]));
                    i += token.len();
                    start = i;
                }
                None => i += 1,
            }
        }
        if start < text.len() {
            out.push(Segment::Raw(text[start..].to_string()));
        }
    }
    out
}
