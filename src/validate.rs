//! Phrase-shape validation
//!
//! The validator is a guard in front of the converter, not a second grammar:
//! text passes when it matches at least one catalog shape AND the converter
//! accepts it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::natural;

/// Recognized phrase shapes, in catalog order. The converter separately
/// recognizes month and day abbreviations; this catalog lists full month
/// names only.
static SHAPE_CATALOG: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"every\s+(minute|hour|day|week|month|year)",
        r"every\s+\d+\s+(seconds?|minutes?|hours?|days?)",
        r"at\s+\d{1,2}(:\d{2})?\s*(am|pm)?",
        r"on\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
        r"on\s+the\s+\d{1,2}(st|nd|rd|th)?\s+day",
        r"(weekday|weekend)",
        r"(midnight|noon|evening)",
        r"(january|february|march|april|may|june|july|august|september|october|november|december)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Check whether schedule text is recognizable and convertible.
///
/// Purely a predicate: never fails, and repeated calls with identical input
/// always agree. A text that matches a catalog shape but fails conversion is
/// invalid, not a distinct error.
///
/// # Examples
///
/// ```
/// assert!(humancron::is_valid("every Monday at 10 AM"));
/// assert!(!humancron::is_valid("Every"));
/// ```
pub fn is_valid(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();
    if !SHAPE_CATALOG.iter().any(|shape| shape.is_match(trimmed)) {
        return false;
    }
    natural::convert(text).is_ok()
}
