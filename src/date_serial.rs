//! Date serial number conversion utilities
//!
//! Excel stores dates as serial numbers representing days since a base date:
//! - 1900 system: Day 1 = January 1, 1900 (Windows default)
//! - 1904 system: Day 0 = January 1, 1904 (Mac legacy)
//!
//! The 1900 system includes the infamous leap year bug: Excel treats 1900 as a
//! leap year (it wasn't), so day 60 is February 29, 1900 (which didn't exist).
//! Days after 60 are effectively shifted by 1 to compensate. Day 0 is shown
//! here as December 31, 1899, which is what time-only values carry as a date.
//!
//! Time is stored as the fractional part of the serial number:
//! - 0.5 = 12:00:00 (noon)
//! - 0.75 = 18:00:00 (6 PM)

use crate::options::DateSystem;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Last representable year; Excel stops at 9999-12-31.
const MAX_YEAR: i32 = 9999;

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}

/// Split a serial number into whole days and milliseconds into the day.
///
/// The fraction is rounded to the nearest millisecond first, so a value a
/// hair below midnight rolls over to the next day instead of showing 23:59:59.
///
/// Returns `None` for negative, NaN or infinite serials.
pub fn split_serial(serial: f64) -> Option<(i64, u32)> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let total = (serial * MILLIS_PER_DAY as f64).round();
    if total > i64::MAX as f64 {
        return None;
    }
    let total = total as i64;
    Some((
        total.div_euclid(MILLIS_PER_DAY),
        total.rem_euclid(MILLIS_PER_DAY) as u32,
    ))
}

/// Convert an Excel serial number to a date (year, month, day).
///
/// # Arguments
/// * `serial` - The Excel serial number (integer part is the date)
/// * `system` - The date system to use
///
/// # Returns
/// * `Some((year, month, day))` on success
/// * `None` if the serial number is negative, not finite or past 9999-12-31
///
/// # Excel's Leap Year Bug
/// In the 1900 system, day 60 returns (1900, 2, 29) even though February 29, 1900
/// didn't actually exist. This matches Excel's behavior.
pub fn serial_to_date(serial: f64, system: DateSystem) -> Option<(i32, u32, u32)> {
    let (days, _) = split_serial(serial)?;
    day_number_to_date(days, system)
}

/// Convert a whole day number to a date in the given system.
pub(crate) fn day_number_to_date(days: i64, system: DateSystem) -> Option<(i32, u32, u32)> {
    if days < 0 {
        return None;
    }
    let date = match system {
        DateSystem::Date1900 => match days {
            0 => (1899, 12, 31),
            60 => (1900, 2, 29),
            1..=59 => civil_from_days(days_from_civil(1899, 12, 31) + days),
            _ => civil_from_days(days_from_civil(1899, 12, 30) + days),
        },
        DateSystem::Date1904 => civil_from_days(days_from_civil(1904, 1, 1) + days),
    };
    if date.0 > MAX_YEAR {
        return None;
    }
    Some(date)
}

/// Extract the time components (hours, minutes, seconds) from a serial number.
///
/// The time is the fractional part of the serial number, rounded to the
/// nearest second:
/// - 0.0 = 00:00:00
/// - 0.5 = 12:00:00
/// - 0.75 = 18:00:00
pub fn serial_to_time(serial: f64) -> (u32, u32, u32) {
    let fraction = serial.fract().abs();
    let total_seconds = (fraction * 86400.0).round() as u32;

    let hours = (total_seconds / 3600) % 24;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    (hours, minutes, seconds)
}

/// Break milliseconds-of-day into (hour, minute, second, millisecond).
pub(crate) fn millis_to_time(millis: u32) -> (u32, u32, u32, u32) {
    let seconds = millis / 1000;
    (seconds / 3600, (seconds % 3600) / 60, seconds % 60, millis % 1000)
}

/// Convert a date (year, month, day) to an Excel serial number.
///
/// # Arguments
/// * `year` - The year (e.g., 2026)
/// * `month` - The month (1-12)
/// * `day` - The day of month (1-31)
/// * `system` - The date system to use
///
/// # Returns
/// The Excel serial number for the given date
pub fn date_to_serial(year: i32, month: u32, day: u32, system: DateSystem) -> f64 {
    match system {
        DateSystem::Date1900 => {
            // Special case for the phantom Feb 29, 1900
            if year == 1900 && month == 2 && day == 29 {
                return 60.0;
            }
            let days = days_from_civil(year, month, day);
            let serial = days - days_from_civil(1899, 12, 31);
            // Add 1 for the leap year bug (for dates after Feb 28, 1900)
            if serial >= 60 {
                (serial + 1) as f64
            } else {
                serial as f64
            }
        }
        DateSystem::Date1904 => {
            (days_from_civil(year, month, day) - days_from_civil(1904, 1, 1)) as f64
        }
    }
}

/// Get the day of the week from a serial number.
///
/// # Returns
/// Day of week: 1 = Sunday, 2 = Monday, ..., 7 = Saturday
/// (matches Excel's WEEKDAY function with return_type=1, including its claim
/// that January 1, 1900 was a Sunday)
pub fn serial_to_weekday(serial: f64, system: DateSystem) -> u32 {
    let days = split_serial(serial).map_or(0, |(days, _)| days);
    day_number_to_weekday(days, system)
}

pub(crate) fn day_number_to_weekday(days: i64, system: DateSystem) -> u32 {
    let index = match system {
        DateSystem::Date1900 => (days - 1).rem_euclid(7),
        // Day 0 (Jan 1, 1904) was a Friday
        DateSystem::Date1904 => (days + 5).rem_euclid(7),
    };
    index as u32 + 1
}

/// Serial number (1900 system) for a chrono date.
#[cfg(feature = "chrono")]
pub fn naive_date_to_serial(date: chrono::NaiveDate) -> f64 {
    use chrono::Datelike;
    date_to_serial(date.year(), date.month(), date.day(), DateSystem::Date1900)
}

/// Serial number (1900 system) for a chrono date-time.
#[cfg(feature = "chrono")]
pub fn naive_datetime_to_serial(dt: chrono::NaiveDateTime) -> f64 {
    use chrono::Timelike;
    let time = dt.time();
    let millis = u64::from(time.num_seconds_from_midnight()) * 1000
        + u64::from(time.nanosecond() / 1_000_000);
    naive_date_to_serial(dt.date()) + millis as f64 / MILLIS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_roundtrip() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(days_from_civil(2024, 2, 29)), (2024, 2, 29));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn test_serial_to_date_leap_year_bug() {
        assert_eq!(
            serial_to_date(59.0, DateSystem::Date1900),
            Some((1900, 2, 28))
        );
        assert_eq!(
            serial_to_date(60.0, DateSystem::Date1900),
            Some((1900, 2, 29))
        );
        assert_eq!(
            serial_to_date(61.0, DateSystem::Date1900),
            Some((1900, 3, 1))
        );
    }

    #[test]
    fn test_serial_zero_and_negative() {
        assert_eq!(
            serial_to_date(0.5, DateSystem::Date1900),
            Some((1899, 12, 31))
        );
        assert_eq!(serial_to_date(-1.0, DateSystem::Date1900), None);
        assert_eq!(serial_to_date(f64::NAN, DateSystem::Date1900), None);
    }

    #[test]
    fn test_split_serial_rolls_over_midnight() {
        assert_eq!(split_serial(1.999_999_999_9), Some((2, 0)));
        assert_eq!(split_serial(0.5625), Some((0, 48_600_000)));
    }

    #[test]
    fn test_millis_to_time() {
        assert_eq!(millis_to_time(48_600_000), (13, 30, 0, 0));
        assert_eq!(millis_to_time(86_399_999), (23, 59, 59, 999));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(serial_to_weekday(1.0, DateSystem::Date1900), 1);
        // 2024-03-05 was a Tuesday
        assert_eq!(serial_to_weekday(45356.0, DateSystem::Date1900), 3);
        assert_eq!(serial_to_weekday(0.0, DateSystem::Date1904), 6);
    }

    #[test]
    fn test_past_max_year() {
        assert_eq!(
            serial_to_date(2_958_465.0, DateSystem::Date1900),
            Some((9999, 12, 31))
        );
        assert_eq!(serial_to_date(2_958_466.0, DateSystem::Date1900), None);
    }
}
