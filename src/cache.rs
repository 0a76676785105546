//! Parsed decimal pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::decimal::DecimalPattern;
use crate::error::ParseError;

/// Global cache for parsed decimal patterns.
static CACHE: Mutex<Option<LruCache<String, DecimalPattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(255);

/// Get or parse a decimal pattern, using the cache.
///
/// Parse errors are not cached.
pub fn get_or_parse(pattern: &str) -> Result<DecimalPattern, ParseError> {
    let mut cache_guard = match CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        return Ok(parsed.clone());
    }

    let parsed = DecimalPattern::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_parse_matches_direct_parse() {
        let first = get_or_parse("#,##0.00").unwrap();
        let second = get_or_parse("#,##0.00").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, DecimalPattern::parse("#,##0.00").unwrap());
    }

    #[test]
    fn test_errors_pass_through() {
        assert_eq!(get_or_parse(""), Err(ParseError::EmptyPattern));
        assert_eq!(get_or_parse("x"), Err(ParseError::NoDigits));
    }
}
