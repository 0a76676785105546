//! Memoized rendering keyed by sheet, cell and locale.
//!
//! A collaborator that renders the same cells repeatedly (a sheet reader
//! mapping rows onto records, say) can route calls through a [`FormatCache`]
//! to render each `(sheet, cell, locale)` once. Entries are never invalidated
//! implicitly; call [`FormatCache::clear`] when the underlying cells change.

use dashmap::DashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::AddressError;
use crate::formatter::RenderRequest;
use crate::options::FormatOptions;
use crate::resolver::FormatSpec;
use crate::value::CellValue;

/// Caller-chosen identity of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub u64);

/// Zero-based cell position, shown in A1 notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub column: u32,
}

impl CellAddress {
    pub fn new(row: u32, column: u32) -> Self {
        CellAddress { row, column }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = u64::from(self.column) + 1;
        while n > 0 {
            let rem = ((n - 1) % 26) as u8;
            letters.push(char::from(b'A' + rem));
            n = (n - 1) / 26;
        }
        for c in letters.iter().rev() {
            write!(f, "{}", c)?;
        }
        write!(f, "{}", u64::from(self.row) + 1)
    }
}

impl FromStr for CellAddress {
    type Err = AddressError;

    /// Parse `B3`, `b3` or `$B$3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || AddressError(s.to_string());

        let rest = s.strip_prefix('$').unwrap_or(s);
        let split = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(err)?;
        let (letters, digits) = rest.split_at(split);
        let digits = digits.strip_prefix('$').unwrap_or(digits);

        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let mut column: u64 = 0;
        for b in letters.bytes() {
            column = column * 26 + u64::from(b.to_ascii_uppercase() - b'A') + 1;
            if column > u64::from(u32::MAX) {
                return Err(err());
            }
        }
        let row: u32 = digits.parse().map_err(|_| err())?;
        if row == 0 {
            return Err(err());
        }

        Ok(CellAddress {
            row: row - 1,
            column: (column - 1) as u32,
        })
    }
}

/// Key of one cached rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub sheet: SheetId,
    pub address: CellAddress,
    /// Locale tag; the same cell renders differently per locale
    pub locale: &'static str,
}

/// Concurrent read-through cache of rendered cell strings.
#[derive(Debug)]
pub struct FormatCache {
    entries: DashMap<CacheKey, String>,
    enabled: AtomicBool,
}

impl Default for FormatCache {
    fn default() -> Self {
        FormatCache {
            entries: DashMap::new(),
            enabled: AtomicBool::new(true),
        }
    }
}

impl FormatCache {
    /// An empty, enabled cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached string for `key`, rendering and storing it on a miss.
    ///
    /// While disabled, always renders and stores nothing.
    pub fn get_or_render<F>(&self, key: CacheKey, render: F) -> String
    where
        F: FnOnce() -> String,
    {
        if !self.is_enabled() {
            return render();
        }
        if let Some(hit) = self.entries.get(&key) {
            log::trace!("format cache hit for {}", key.address);
            return hit.clone();
        }
        log::trace!("format cache miss for {}", key.address);
        self.entries.entry(key).or_insert_with(render).clone()
    }

    /// Render a cell through the cache.
    pub fn format(
        &self,
        sheet: SheetId,
        address: CellAddress,
        cell: &CellValue<'_>,
        spec: &FormatSpec<'_>,
        options: &FormatOptions,
    ) -> String {
        let key = CacheKey {
            sheet,
            address,
            locale: options.locale.id,
        };
        let request = RenderRequest::from_spec(*cell, spec, options);
        self.get_or_render(key, || request.render())
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Turn caching on or off. Existing entries are kept.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
