//! Locale data.

mod builtin;

pub use builtin::{Locale, FormatDialect, JA_WEEKDAYS_FULL, JA_WEEKDAYS_SHORT};
