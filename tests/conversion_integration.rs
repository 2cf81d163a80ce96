//! End-to-end checks over the public library surface: conversion, phrase
//! validation, and structural parsing of everything the converter emits.

use humancron::{convert, extract_time, is_valid, CronError, CronSchedule};

/// Known phrase-to-schedule pairs covering every converter rule that can
/// fire, including abbreviations and meridiem boundaries.
const KNOWN_CONVERSIONS: &[(&str, &str)] = &[
    ("every minute", "* * * * *"),
    ("every hour", "0 * * * *"),
    ("every day", "0 0 * * *"),
    ("every week", "0 0 * * 1"),
    ("every month", "0 0 1 * *"),
    ("every year", "0 0 1 1 *"),
    ("every 5 minutes", "*/5 * * * *"),
    ("every 2 hours", "0 */2 * * *"),
    ("every 5 minutes between 9 AM and 5 PM", "*/5 9-17 * * *"),
    ("every Monday at 10 AM", "0 10 * * 1"),
    ("every Tuesday at 2 PM", "0 14 * * 2"),
    ("every Wed at 3:30 PM", "30 15 * * 3"),
    ("every Thursday at noon", "0 12 * * 4"),
    ("every Friday at midnight", "0 0 * * 5"),
    ("every Sat at 9 AM", "0 9 * * 6"),
    ("every Sun at 11 PM", "0 23 * * 7"),
    ("daily at 10:30 AM", "30 10 * * *"),
    ("daily at 12:00 AM", "0 0 * * *"),
    ("daily at 12:00 PM", "0 12 * * *"),
    ("on the 1st at 10 AM", "0 10 1 * *"),
    ("on the 15th at 3 PM", "0 15 15 * *"),
    ("on the 31st day at midnight", "0 0 31 * *"),
    ("every January 1st at noon", "0 12 1 1 *"),
    ("every Dec 25 at 8 AM", "0 8 25 12 *"),
    ("every May at 3 PM", "0 15 * 5 *"),
    ("every February at 9 AM", "0 9 * 2 *"),
    ("every first day of the month at 3 AM", "0 3 1 * *"),
    ("weekdays at 9 AM", "0 9 * * 1-5"),
    ("weekend at 10 AM", "0 10 * * 0,6"),
];

#[test]
fn known_conversions_hold() {
    for (text, expected) in KNOWN_CONVERSIONS {
        assert_eq!(
            convert(text).unwrap(),
            *expected,
            "conversion mismatch for {text:?}"
        );
    }
}

#[test]
fn converter_output_is_well_formed() {
    for (text, _) in KNOWN_CONVERSIONS {
        let cron = convert(text).unwrap();
        for line in cron.lines() {
            let schedule = CronSchedule::parse(line)
                .unwrap_or_else(|e| panic!("{text:?} produced malformed {line:?}: {e}"));
            assert_eq!(schedule.to_string(), line);
        }
    }
}

#[test]
fn compound_interval_emits_two_lines() {
    let cron = convert("every 15 minutes and every hour").unwrap();
    let lines: Vec<&str> = cron.lines().collect();
    assert_eq!(lines, ["*/15 * * * *", "0 * * * *"]);
    for line in lines {
        assert!(CronSchedule::parse(line).is_ok());
    }
}

#[test]
fn valid_phrases_convert() {
    for (text, _) in KNOWN_CONVERSIONS {
        if is_valid(text) {
            assert!(convert(text).is_ok(), "valid but unconvertible: {text:?}");
        }
    }
}

#[test]
fn invalid_phrases_fail_closed() {
    for text in ["Every", "some gibberish", "", "next full moon", "every 30 seconds"] {
        assert!(!is_valid(text), "expected invalid: {text:?}");
    }

    let err = convert("Every").unwrap_err();
    match err {
        CronError::InvalidExpression(detail) => assert_eq!(detail, "Every"),
    }
}

#[test]
fn case_and_whitespace_insensitive() {
    for text in [
        "every monday at 10 am",
        "EVERY MONDAY AT 10 AM",
        "Every Monday At 10 Am",
        "  every   Monday   at   10   AM  ",
    ] {
        assert_eq!(convert(text).unwrap(), "0 10 * * 1");
        assert!(is_valid(text));
    }
}

#[test]
fn conversion_is_idempotent() {
    for (text, _) in KNOWN_CONVERSIONS {
        assert_eq!(convert(text).unwrap(), convert(text).unwrap());
        assert_eq!(is_valid(text), is_valid(text));
    }
}

#[test]
fn meridiem_boundaries() {
    assert_eq!(extract_time("at 12 am"), ("0".to_string(), "0".to_string()));
    assert_eq!(extract_time("at 12 pm"), ("0".to_string(), "12".to_string()));
    assert_eq!(extract_time("at 1 pm"), ("0".to_string(), "13".to_string()));
    assert_eq!(extract_time("at 11 pm"), ("0".to_string(), "23".to_string()));
    assert_eq!(extract_time("at 10 am"), ("0".to_string(), "10".to_string()));
}

#[test]
fn dual_day_conjunction_documented_behavior() {
    // Documented, not necessarily desired: "Monday and Wednesday" keeps only
    // Wednesday instead of emitting a day list.
    assert_eq!(
        convert("every Monday and Wednesday at 2:30 PM").unwrap(),
        "30 14 * * 3"
    );
}
