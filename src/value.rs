//! Cell values handed to the formatter.

/// The last computed result stored with a formula cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CachedValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// A spreadsheet cell as seen by the formatter.
///
/// The calling layer decides the variant; the formatter never inspects
/// library-specific cell or rich-text types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// An empty cell
    Blank,
    /// A boolean value
    Boolean(bool),
    /// An error value, carried as its display text (e.g. `#DIV/0!`)
    Error(&'a str),
    /// A formula cell, rendered from its cached result
    Formula(CachedValue<'a>),
    /// A numeric value (including Excel serial dates)
    Numeric(f64),
    /// A text value
    Text(&'a str),
}

impl<'a> CachedValue<'a> {
    /// The cell the cached value renders as.
    pub fn to_cell(self) -> CellValue<'a> {
        match self {
            CachedValue::Number(n) => CellValue::Numeric(n),
            CachedValue::Text(s) => CellValue::Text(s),
        }
    }
}

impl<'a> From<f64> for CellValue<'a> {
    fn from(n: f64) -> Self {
        CellValue::Numeric(n)
    }
}

impl<'a> From<i64> for CellValue<'a> {
    fn from(n: i64) -> Self {
        CellValue::Numeric(n as f64)
    }
}

impl<'a> From<i32> for CellValue<'a> {
    fn from(n: i32) -> Self {
        CellValue::Numeric(f64::from(n))
    }
}

impl<'a> From<&'a str> for CellValue<'a> {
    fn from(s: &'a str) -> Self {
        CellValue::Text(s)
    }
}

impl<'a> From<bool> for CellValue<'a> {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl<'a> From<()> for CellValue<'a> {
    fn from(_: ()) -> Self {
        CellValue::Blank
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDateTime> for CellValue<'a> {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        CellValue::Numeric(crate::date_serial::naive_datetime_to_serial(dt))
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDate> for CellValue<'a> {
    fn from(d: chrono::NaiveDate) -> Self {
        CellValue::Numeric(crate::date_serial::naive_date_to_serial(d))
    }
}

impl<'a> CellValue<'a> {
    /// Returns the numeric payload, looking through formula caches.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Numeric(n) | CellValue::Formula(CachedValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text payload, looking through formula caches.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            CellValue::Text(s) | CellValue::Formula(CachedValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this cell is blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Returns a type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Blank => "blank",
            CellValue::Boolean(_) => "boolean",
            CellValue::Error(_) => "error",
            CellValue::Formula(_) => "formula",
            CellValue::Numeric(_) => "numeric",
            CellValue::Text(_) => "text",
        }
    }
}
