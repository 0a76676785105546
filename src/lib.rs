//! cellfmt - display strings for spreadsheet cells
//!
//! This crate turns a raw cell (its value, number-format index and format
//! code) into the text a spreadsheet shows, covering the 2003 and 2007+
//! format-code dialects, several locales, and the Gregorian and Japanese
//! imperial calendars.
//!
//! ```
//! use cellfmt::{format, CellValue, Locale};
//!
//! let ja = Locale::ja_jp();
//! assert_eq!(format(&CellValue::Numeric(1234.567), 4, "", &ja), "1,234.57");
//! assert_eq!(format(&CellValue::Numeric(45356.0), 14, "", &ja), "2024/3/5");
//! ```
//!
//! Rendering never fails: a format that cannot be applied yields the plain
//! numeric string.

pub mod builtin_formats;
pub mod calendar;
pub mod date_serial;
pub mod decimal;
pub mod dialect;
pub mod era;
pub mod error;
pub mod format_cache;
pub mod options;
pub mod resolver;
pub mod value;

mod cache;
mod formatter;
mod locale;

pub use builtin_formats::{format_code_from_id, is_builtin_format_id};
pub use calendar::{Calendar, DateComponents};
pub use decimal::DecimalPattern;
pub use error::{AddressError, FormatError, ParseError};
pub use format_cache::{CacheKey, CellAddress, FormatCache, SheetId};
pub use formatter::RenderRequest;
pub use locale::{FormatDialect, Locale};
pub use options::{DateSystem, FormatOptions};
pub use resolver::{FormatSpec, ResolvedFormat};
pub use value::{CachedValue, CellValue};

/// Render a cell for a locale with the 1900 date system.
///
/// # Arguments
/// * `cell` - The cell value
/// * `format_index` - The cell's number-format index
/// * `format_pattern` - The cell's format code; empty to use the built-in
///   code of `format_index`
/// * `locale` - The locale to render for
pub fn format(
    cell: &CellValue<'_>,
    format_index: u16,
    format_pattern: &str,
    locale: &Locale,
) -> String {
    let options = FormatOptions::with_locale(locale.clone());
    format_with_options(cell, &FormatSpec::new(format_index, format_pattern), &options)
}

/// Render a cell with explicit options.
pub fn format_with_options(
    cell: &CellValue<'_>,
    spec: &FormatSpec<'_>,
    options: &FormatOptions,
) -> String {
    RenderRequest::from_spec(*cell, spec, options).render()
}

/// The decimal pattern or date code a numeric cell with this format would be
/// rendered with.
pub fn pattern(format_index: u16, format_pattern: &str, locale: &Locale) -> String {
    let resolved = ResolvedFormat::resolve(format_index, format_pattern, locale);
    formatter::applied_pattern(&resolved)
}
