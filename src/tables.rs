//! Static lookup tables shared by the converter and validator
//!
//! All keys are lowercase. Callers normalize input to lowercase before any
//! lookup.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Day names (full and 3-letter) to cron ordinals, 1 = Monday .. 7 = Sunday.
///
/// Scan order is observable: when a text names several days, the earliest
/// entry in this table wins.
pub static DAYS_OF_WEEK: &[(&str, u32)] = &[
    ("monday", 1),
    ("mon", 1),
    ("tuesday", 2),
    ("tue", 2),
    ("wednesday", 3),
    ("wed", 3),
    ("thursday", 4),
    ("thu", 4),
    ("friday", 5),
    ("fri", 5),
    ("saturday", 6),
    ("sat", 6),
    ("sunday", 7),
    ("sun", 7),
];

/// Month names (full and abbreviated) to ordinals 1-12. Same scan-order
/// guarantee as [`DAYS_OF_WEEK`].
pub static MONTHS_OF_YEAR: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Named times of day to 24-hour "HH:MM".
pub static TIME_KEYWORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("midnight", "00:00"),
        ("noon", "12:00"),
        ("evening", "18:00"),
    ])
});

/// Time-unit names to their length in seconds.
///
/// Reserved for unit normalization; the current phrase catalog does not
/// exercise every unit.
pub static TIME_UNITS: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    HashMap::from([
        ("seconds", 1),
        ("minutes", 60),
        ("hours", 3_600),
        ("days", 86_400),
    ])
});

/// Look up a day-of-week ordinal by exact lowercase token.
pub fn weekday_ordinal(token: &str) -> Option<u32> {
    DAYS_OF_WEEK
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, ordinal)| *ordinal)
}

/// Look up a month ordinal by exact lowercase token.
pub fn month_ordinal(token: &str) -> Option<u32> {
    MONTHS_OF_YEAR
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, ordinal)| *ordinal)
}

/// Resolve a named time of day to a cron `(minute, hour)` pair.
pub fn named_time(keyword: &str) -> Option<(String, String)> {
    let hhmm = TIME_KEYWORDS.get(keyword)?;
    let (hour, minute) = hhmm.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    Some((minute.to_string(), hour.to_string()))
}
