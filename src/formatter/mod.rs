//! Cell value formatting engine

pub mod classify;
pub mod date;
pub mod number;
pub mod substitute;

use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::resolver::{FormatSpec, ResolvedFormat};
use crate::value::CellValue;

/// One cell to render: its value, its resolved format and the options.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub cell: CellValue<'a>,
    pub format: ResolvedFormat,
    pub options: &'a FormatOptions,
}

impl<'a> RenderRequest<'a> {
    pub fn new(cell: CellValue<'a>, format: ResolvedFormat, options: &'a FormatOptions) -> Self {
        RenderRequest {
            cell,
            format,
            options,
        }
    }

    /// Resolve `spec` for the options' locale and wrap it with the cell.
    pub fn from_spec(
        cell: CellValue<'a>,
        spec: &FormatSpec<'_>,
        options: &'a FormatOptions,
    ) -> Self {
        let format = ResolvedFormat::from_spec(spec, &options.locale);
        Self::new(cell, format, options)
    }

    /// Render the cell. Never fails; see [`format_cell`].
    pub fn render(&self) -> String {
        format_cell(self.cell, &self.format, self.options)
    }
}

/// Render a cell with a resolved format.
///
/// Formula cells render their cached value. Numeric cells go through date
/// detection and then the date or number renderer; any rendering error falls
/// back to the plain numeric string.
pub fn format_cell(cell: CellValue<'_>, format: &ResolvedFormat, opts: &FormatOptions) -> String {
    match cell {
        CellValue::Blank => String::new(),
        CellValue::Boolean(b) => b.to_string(),
        CellValue::Error(text) | CellValue::Text(text) => text.to_string(),
        CellValue::Formula(cached) => format_cell(cached.to_cell(), format, opts),
        CellValue::Numeric(value) => format_numeric(value, format, opts),
    }
}

/// Render a number, falling back to the plain numeric string on error.
pub fn format_numeric(value: f64, format: &ResolvedFormat, opts: &FormatOptions) -> String {
    match try_format_numeric(value, format, opts) {
        Ok(result) => result,
        Err(err) => {
            log::debug!(
                "falling back to plain number for {} with {:?}: {}",
                value,
                format.pattern,
                err
            );
            fallback_format(value)
        }
    }
}

/// Render a number with a resolved format.
///
/// Returns an error if the format cannot be applied to the value.
pub fn try_format_numeric(
    value: f64,
    format: &ResolvedFormat,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    match date::detect(format) {
        Some(route) => {
            log::trace!("pattern {:?} routed as date ({:?})", format.pattern, route);
            date::format_date(value, format, route, opts)
        }
        None => number::format_number(value, format, &opts.locale),
    }
}

/// The decimal pattern or date code a numeric cell would be rendered with.
pub fn applied_pattern(format: &ResolvedFormat) -> String {
    if date::detect(format).is_some() {
        return format.pattern.clone();
    }
    number::decimal_pattern_for(format).unwrap_or_else(|_| format.pattern.clone())
}

/// Fallback formatting for when the format code cannot be applied.
///
/// Up to ten decimal places, trailing zeros trimmed.
pub fn fallback_format(value: f64) -> String {
    let formatted = format!("{:.10}", value);

    if formatted.contains('.') {
        let trimmed = formatted.trim_end_matches('0');
        if trimmed.ends_with('.') {
            trimmed.trim_end_matches('.').to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        formatted
    }
}
