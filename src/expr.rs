//! Typed model of a five-field cron line
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 both Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! Each field is a wildcard, a literal value, a step, an inclusive range, or
//! a value list. Combined forms (a list of ranges, a stepped range) are
//! outside this model; every string the converter emits is representable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{CronError, Result};

/// One field of a cron schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CronField {
    /// `*`
    Any,
    /// A literal value
    Value(u32),
    /// `*/n`, every nth unit
    Step(u32),
    /// `a-b`, inclusive
    Range(u32, u32),
    /// `a,b,...`
    List(Vec<u32>),
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronField::Any => write!(f, "*"),
            CronField::Value(value) => write!(f, "{value}"),
            CronField::Step(step) => write!(f, "*/{step}"),
            CronField::Range(low, high) => write!(f, "{low}-{high}"),
            CronField::List(values) => {
                let joined: Vec<String> = values.iter().map(u32::to_string).collect();
                write!(f, "{}", joined.join(","))
            }
        }
    }
}

/// A parsed five-field cron schedule line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronSchedule {
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
}

impl CronSchedule {
    /// Parse a single cron line into its five fields, validating numeric
    /// syntax and per-field bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use humancron::CronSchedule;
    ///
    /// let schedule = CronSchedule::parse("0 10 * * 1").unwrap();
    /// assert_eq!(schedule.to_string(), "0 10 * * 1");
    ///
    /// assert!(CronSchedule::parse("60 * * * *").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(CronError::InvalidExpression(format!(
                "expected 5 fields, got {}",
                parts.len()
            )));
        }

        Ok(Self {
            minute: parse_field(parts[0], 0, 59, "minute")?,
            hour: parse_field(parts[1], 0, 23, "hour")?,
            day_of_month: parse_field(parts[2], 1, 31, "day of month")?,
            month: parse_field(parts[3], 1, 12, "month")?,
            day_of_week: parse_field(parts[4], 0, 7, "day of week")?,
        })
    }
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

fn parse_field(field: &str, min: u32, max: u32, name: &str) -> Result<CronField> {
    if field == "*" {
        return Ok(CronField::Any);
    }

    if let Some(step) = field.strip_prefix("*/") {
        let step = parse_value(step, name)?;
        if step == 0 {
            return Err(CronError::InvalidExpression(format!(
                "step cannot be 0 in {name}"
            )));
        }
        return Ok(CronField::Step(step));
    }

    if let Some((low, high)) = field.split_once('-') {
        let low = parse_value(low, name)?;
        let high = parse_value(high, name)?;
        check_bounds(low, min, max, name)?;
        check_bounds(high, min, max, name)?;
        if low > high {
            return Err(CronError::InvalidExpression(format!(
                "inverted range {low}-{high} in {name}"
            )));
        }
        return Ok(CronField::Range(low, high));
    }

    if field.contains(',') {
        let values = field
            .split(',')
            .map(|part| {
                let value = parse_value(part, name)?;
                check_bounds(value, min, max, name)?;
                Ok(value)
            })
            .collect::<Result<Vec<u32>>>()?;
        return Ok(CronField::List(values));
    }

    let value = parse_value(field, name)?;
    check_bounds(value, min, max, name)?;
    Ok(CronField::Value(value))
}

fn parse_value(text: &str, name: &str) -> Result<u32> {
    text.parse().map_err(|_| {
        CronError::InvalidExpression(format!("invalid {name} value '{text}'"))
    })
}

fn check_bounds(value: u32, min: u32, max: u32, name: &str) -> Result<()> {
    if value < min || value > max {
        return Err(CronError::InvalidExpression(format!(
            "{name} value {value} out of range ({min}-{max})"
        )));
    }
    Ok(())
}
