//! Free-text schedule converter
//!
//! Converts human-readable schedule descriptions to standard five-field cron
//! expressions.
//!
//! ## Supported phrasings
//!
//! - "every minute" / "every 5 minutes" / "every 2 hours"
//! - "every day" / "every week" / "every month" / "every year"
//! - "daily at 2:45 PM" / "every Monday at 10 AM" / "every Sat at 9 AM"
//! - "on the 15th at 3 PM" / "every January 1st at noon"
//! - "weekdays at 9 AM" / "weekend at 10 AM"
//! - "every 5 minutes between 9 AM and 5 PM"
//!
//! Recognition is an ordered cascade: the first phrase shape that matches
//! produces the schedule, and unrecognized text fails closed with
//! [`CronError::InvalidExpression`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tables;
use crate::types::{CronError, Result};

static STEP_BETWEEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"every\s+(\d+)\s+minutes\s+between\s+(\d{1,2})\s*(am|pm)?\s+and\s+(\d{1,2})\s*(am|pm)?")
        .unwrap()
});
static COMPOUND_INTERVAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"every\s+(\d+)\s+minutes\s+and\s+every\s+hour").unwrap());
static EVERY_MINUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+minute").unwrap());
static EVERY_HOUR: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+hour").unwrap());
static EVERY_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+day").unwrap());
static EVERY_WEEK: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+week").unwrap());
static EVERY_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+month").unwrap());
static EVERY_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+year").unwrap());
static HOUR_INTERVAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+(\d+)\s+hour").unwrap());
static MINUTE_INTERVAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"every\s+(\d+)\s+minute").unwrap());
static ON_DAY_OF_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"on\s+(?:the\s+)?(\d{1,2})(?:st|nd|rd|th)?(?:\s+day)?").unwrap());
static DAILY: Lazy<Regex> = Lazy::new(|| Regex::new(r"daily|every\s+day").unwrap());
static DAY_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"every\s+(\w+)\s+to\s+(\w+)\s+at\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?").unwrap()
});
static AT_HOUR_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at\s+(\d{1,2}):(\d{2})(?:\s*(am|pm))?").unwrap());
static AT_HOUR: Lazy<Regex> = Lazy::new(|| Regex::new(r"at\s+(\d{1,2})(?:\s*(am|pm))").unwrap());

/// Convert a human-readable schedule description to a cron expression.
///
/// The input is case-folded and trimmed before matching. Fails with
/// [`CronError::InvalidExpression`] naming the original input when no phrase
/// shape matches.
///
/// # Examples
///
/// ```
/// use humancron::convert;
///
/// assert_eq!(convert("every 5 minutes").unwrap(), "*/5 * * * *");
/// assert_eq!(convert("every Monday at 10 AM").unwrap(), "0 10 * * 1");
/// assert_eq!(convert("on the 15th at 3 PM").unwrap(), "0 15 15 * *");
/// ```
pub fn convert(text: &str) -> Result<String> {
    let lowered = text.to_lowercase();
    let t = lowered.trim();
    let invalid = || CronError::InvalidExpression(text.to_string());

    // The two specific interval phrasings must run before the generic ones:
    // a bare "every hour" / "every N minutes" test would always match their
    // text first.
    if let Some(caps) = STEP_BETWEEN.captures(t) {
        let step = &caps[1];
        let start: u32 = caps[2].parse().map_err(|_| invalid())?;
        let end: u32 = caps[4].parse().map_err(|_| invalid())?;
        let start = apply_meridiem(start, caps.get(3).map(|m| m.as_str()));
        let end = apply_meridiem(end, caps.get(5).map(|m| m.as_str()));
        return Ok(format!("*/{step} {start}-{end} * * *"));
    }

    if let Some(caps) = COMPOUND_INTERVAL.captures(t) {
        return Ok(format!("*/{} * * * *\n0 * * * *", &caps[1]));
    }

    if EVERY_MINUTE.is_match(t) {
        return Ok("* * * * *".to_string());
    }
    if EVERY_HOUR.is_match(t) {
        return Ok("0 * * * *".to_string());
    }
    if EVERY_DAY.is_match(t) {
        return Ok("0 0 * * *".to_string());
    }
    if EVERY_WEEK.is_match(t) {
        return Ok("0 0 * * 1".to_string());
    }
    if EVERY_MONTH.is_match(t) {
        return Ok("0 0 1 * *".to_string());
    }
    if EVERY_YEAR.is_match(t) {
        return Ok("0 0 1 1 *".to_string());
    }

    if let Some(caps) = HOUR_INTERVAL.captures(t) {
        return Ok(format!("0 */{} * * *", &caps[1]));
    }
    if let Some(caps) = MINUTE_INTERVAL.captures(t) {
        return Ok(format!("*/{} * * * *", &caps[1]));
    }

    // Every rule below schedules a specific time of day.
    let (minute, hour) = extract_time(t);

    if t.contains("monday") && t.contains("wednesday") && t.contains("and") {
        // Documented ambiguity: only the second day survives.
        return Ok(format!("{minute} {hour} * * 3"));
    }

    if t.contains("first day of the month") {
        return Ok(format!("{minute} {hour} 1 * *"));
    }

    if t.contains("weekday") {
        return Ok(format!("{minute} {hour} * * 1-5"));
    }
    if t.contains("weekend") {
        return Ok(format!("{minute} {hour} * * 0,6"));
    }

    let tokens: Vec<&str> = t.split_whitespace().collect();

    let month = tables::MONTHS_OF_YEAR
        .iter()
        .find(|(name, _)| tokens.iter().any(|token| token == name))
        .map(|(_, ordinal)| *ordinal);
    let month_field = match month {
        Some(ordinal) => ordinal.to_string(),
        None => "*".to_string(),
    };

    // "on [the] N[st/nd/rd/th] [day]" wins over a day number spotted next to
    // a month name; it fires even when no month was detected.
    if let Some(caps) = ON_DAY_OF_MONTH.captures(t) {
        return Ok(format!("{minute} {hour} {} {month_field} *", &caps[1]));
    }

    if month.is_some() {
        if let Some(day) = day_outside_time(t) {
            return Ok(format!("{minute} {hour} {day} {month_field} *"));
        }
        return Ok(format!("{minute} {hour} * {month_field} *"));
    }

    if let Some(day) = tables::DAYS_OF_WEEK
        .iter()
        .find(|(name, _)| tokens.iter().any(|token| token == name))
        .map(|(_, ordinal)| *ordinal)
    {
        return Ok(format!("{minute} {hour} * * {day}"));
    }

    if DAILY.is_match(t) {
        return Ok(format!("{minute} {hour} * * *"));
    }

    // Day-of-week ranges ("every monday to friday at 10 am"). The day-name
    // scan above already resolves any well-formed day pair, so this only
    // fires for inputs it let through.
    if let Some(caps) = DAY_RANGE.captures(t) {
        let start = tables::weekday_ordinal(&caps[1]);
        let end = tables::weekday_ordinal(&caps[2]);
        if let (Some(start), Some(end)) = (start, end) {
            let hour: u32 = caps[3].parse().map_err(|_| invalid())?;
            let hour = apply_meridiem(hour, caps.get(5).map(|m| m.as_str()));
            let minute: u32 = match caps.get(4) {
                Some(m) => m.as_str().parse().map_err(|_| invalid())?,
                None => 0,
            };
            return Ok(format!("{minute} {hour} * * {start}-{end}"));
        }
    }

    Err(invalid())
}

/// Extract a cron `(minute, hour)` pair from schedule text.
///
/// Never fails: text without a recognizable time yields the midnight default
/// `("0", "0")`. The minute of an `"at H:MM"` phrase is kept as its literal
/// two-digit text.
///
/// # Examples
///
/// ```
/// use humancron::extract_time;
///
/// assert_eq!(extract_time("daily at 9:05 AM"), ("05".to_string(), "9".to_string()));
/// assert_eq!(extract_time("every Thursday at noon"), ("0".to_string(), "12".to_string()));
/// ```
pub fn extract_time(text: &str) -> (String, String) {
    let lowered = text.to_lowercase();
    let text = lowered.trim();

    for keyword in ["midnight", "noon"] {
        if text.contains(keyword) {
            if let Some(pair) = tables::named_time(keyword) {
                return pair;
            }
        }
    }

    if text.contains("12:00 am") || text.contains("12 am") {
        return ("0".to_string(), "0".to_string());
    }
    if text.contains("12:00 pm") || text.contains("12 pm") {
        return ("0".to_string(), "12".to_string());
    }

    if let Some(caps) = AT_HOUR_MINUTE.captures(text) {
        if let Ok(hour) = caps[1].parse::<u32>() {
            let hour = apply_meridiem(hour, caps.get(3).map(|m| m.as_str()));
            return (caps[2].to_string(), hour.to_string());
        }
    }

    if let Some(caps) = AT_HOUR.captures(text) {
        if let Ok(hour) = caps[1].parse::<u32>() {
            let hour = apply_meridiem(hour, caps.get(2).map(|m| m.as_str()));
            return ("0".to_string(), hour.to_string());
        }
    }

    ("0".to_string(), "0".to_string())
}

/// Convert a 12-hour clock hour to 24-hour form: 12 am becomes 0, a pm hour
/// below 12 gains 12, everything else passes through unchanged.
fn apply_meridiem(hour: u32, meridiem: Option<&str>) -> u32 {
    match meridiem {
        Some("pm") if hour < 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    }
}

/// Find the first 1-2 digit number that is not the hour or minute of a clock
/// time: candidates trailed (after optional whitespace and an optional
/// ordinal suffix) by "am", "pm", or ":" are rejected. A rejected two-digit
/// candidate is retried as its leading single digit before the scan advances.
fn day_outside_time(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        let mut digits = 1;
        if start + 1 < bytes.len() && bytes[start + 1].is_ascii_digit() {
            digits = 2;
        }
        while digits > 0 {
            let end = start + digits;
            for suffix in ["st", "nd", "rd", "th"] {
                if text[end..].starts_with(suffix) && clears_time(&text[end + suffix.len()..]) {
                    return Some(&text[start..end]);
                }
            }
            if clears_time(&text[end..]) {
                return Some(&text[start..end]);
            }
            digits -= 1;
        }
    }
    None
}

fn clears_time(rest: &str) -> bool {
    let rest = rest.trim_start();
    !(rest.starts_with("am") || rest.starts_with("pm") || rest.starts_with(':'))
}
