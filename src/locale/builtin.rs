//! Built-in locale data.

/// Which table of built-in format codes a locale's workbooks use.
///
/// Format indices 27-36 and 50-58 only carry meaning in East-Asian builds of
/// Excel; the Western table leaves them undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatDialect {
    Western,
    Japanese,
}

/// Japanese weekday names, Sunday first. Used by the `aaa`/`aaaa` tokens in
/// every locale.
pub const JA_WEEKDAYS_SHORT: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];
pub const JA_WEEKDAYS_FULL: [&str; 7] = [
    "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
];

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_MONTHS_FULL: [&str; 12] = [
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
const EN_DAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const EN_DAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Locale settings for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    /// BCP 47 tag, also used as the locale component of cache keys.
    pub id: &'static str,
    pub dialect: FormatDialect,
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            id: "en-US",
            dialect: FormatDialect::Western,
            decimal_separator: '.',
            thousands_separator: ',',
            am_string: "AM",
            pm_string: "PM",
            month_names_short: EN_MONTHS_SHORT,
            month_names_full: EN_MONTHS_FULL,
            day_names_short: EN_DAYS_SHORT,
            day_names_full: EN_DAYS_FULL,
        }
    }

    /// Japanese locale.
    ///
    /// Excel for Japan keeps English month abbreviations for `mmm`, so only
    /// the full names and weekdays are localized.
    pub fn ja_jp() -> Self {
        Locale {
            id: "ja-JP",
            dialect: FormatDialect::Japanese,
            decimal_separator: '.',
            thousands_separator: ',',
            am_string: "午前",
            pm_string: "午後",
            month_names_short: EN_MONTHS_SHORT,
            month_names_full: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            day_names_short: JA_WEEKDAYS_SHORT,
            day_names_full: JA_WEEKDAYS_FULL,
        }
    }

    /// German locale (comma decimal separator).
    pub fn de_de() -> Self {
        Locale {
            id: "de-DE",
            dialect: FormatDialect::Western,
            decimal_separator: ',',
            thousands_separator: '.',
            am_string: "AM",
            pm_string: "PM",
            month_names_short: [
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ],
            month_names_full: [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            day_names_short: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
            day_names_full: [
                "Sonntag",
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
            ],
        }
    }

    /// Look up a preset by tag. Matching ignores case and accepts `_` for `-`;
    /// a bare language (`"ja"`) selects its preset region.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or("");
        match (normalized.as_str(), language) {
            ("en-us", _) | ("en", _) => Some(Self::en_us()),
            ("ja-jp", _) | ("ja", _) => Some(Self::ja_jp()),
            ("de-de", _) | ("de", _) => Some(Self::de_de()),
            (_, "ja") => Some(Self::ja_jp()),
            _ => None,
        }
    }
}
