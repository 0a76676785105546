//! Date-time components for a serial number.
//!
//! Every date renderer works from one [`DateComponents`] snapshot computed per
//! value, so the per-index assemblies and the token substitutor agree on
//! rounding, calendar and locale names.

use crate::date_serial::{day_number_to_date, day_number_to_weekday, millis_to_time, split_serial};
use crate::era::era_for;
use crate::error::FormatError;
use crate::options::FormatOptions;

/// Calendar used for the era fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calendar {
    /// Era is `AD` and the era year is the Gregorian year
    #[default]
    Gregorian,
    /// Japanese imperial eras; dates before Meiji fall back to Gregorian
    JapaneseImperial,
}

/// Immutable snapshot of the fields a date format can show.
#[derive(Debug, Clone, PartialEq)]
pub struct DateComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour24: u32,
    /// 1-12, with midnight and noon as 12
    pub hour12: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub ampm: &'static str,
    /// Era name (`令和`, or `AD` for Gregorian)
    pub era: &'static str,
    /// Single-glyph era abbreviation (`令`)
    pub era_abbrev: &'static str,
    /// Latin era initial (`R`)
    pub era_initial: &'static str,
    pub era_year: i32,
    /// 1 = Sunday ... 7 = Saturday
    pub weekday: u32,
    pub weekday_short: &'static str,
    pub weekday_long: &'static str,
    pub month_short: &'static str,
    pub month_long: &'static str,
    /// Whole hours since serial 0, for `[h]`
    pub elapsed_hours: i64,
    /// Whole minutes since serial 0, for `[m]`
    pub elapsed_minutes: i64,
    /// Whole seconds since serial 0, for `[s]`
    pub elapsed_seconds: i64,
}

impl DateComponents {
    /// Compute the components of a serial number.
    ///
    /// Returns an error for negative or non-finite serials and for dates past
    /// 9999-12-31.
    pub fn from_serial(
        serial: f64,
        calendar: Calendar,
        opts: &FormatOptions,
    ) -> Result<Self, FormatError> {
        let (days, millis) =
            split_serial(serial).ok_or(FormatError::InvalidSerialNumber { value: serial })?;
        let (year, month, day) = day_number_to_date(days, opts.date_system)
            .ok_or(FormatError::DateOutOfRange { serial })?;
        let (hour24, minute, second, millisecond) = millis_to_time(millis);
        let weekday = day_number_to_weekday(days, opts.date_system);

        let locale = &opts.locale;
        let month_index = (month - 1) as usize;
        let weekday_index = (weekday - 1) as usize;

        let (era, era_abbrev, era_initial, era_year) = match calendar {
            Calendar::JapaneseImperial => match era_for(year, month, day) {
                Some((era, era_year)) => (era.name, era.abbrev, era.initial, era_year),
                None => ("AD", "AD", "A", year),
            },
            Calendar::Gregorian => ("AD", "AD", "A", year),
        };

        let elapsed_seconds = days * 86_400 + i64::from(millis / 1000);

        Ok(DateComponents {
            year,
            month,
            day,
            hour24,
            hour12: to_12_hour(hour24),
            minute,
            second,
            millisecond,
            ampm: if hour24 >= 12 {
                locale.pm_string
            } else {
                locale.am_string
            },
            era,
            era_abbrev,
            era_initial,
            era_year,
            weekday,
            weekday_short: locale.day_names_short[weekday_index],
            weekday_long: locale.day_names_full[weekday_index],
            month_short: locale.month_names_short[month_index],
            month_long: locale.month_names_full[month_index],
            elapsed_hours: elapsed_seconds / 3600,
            elapsed_minutes: elapsed_seconds / 60,
            elapsed_seconds,
        })
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}
