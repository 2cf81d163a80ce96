//! humancron - human-readable schedule text to cron expressions
//!
//! Interprets a fixed catalog of English schedule phrasings and renders each
//! as a standard five-field cron string. Unrecognized text fails closed.
//!
//! ## Quick Start
//!
//! ```
//! // Convert a schedule description
//! let cron = humancron::convert("every Monday at 10 AM").unwrap();
//! assert_eq!(cron, "0 10 * * 1");
//!
//! // Guard before converting
//! assert!(humancron::is_valid("every 5 minutes"));
//! assert!(!humancron::is_valid("next full moon"));
//!
//! // Consume converter output structurally
//! let schedule = humancron::CronSchedule::parse(&cron).unwrap();
//! assert_eq!(schedule.to_string(), "0 10 * * 1");
//! ```

pub mod cli;
mod expr;
mod natural;
mod tables;
mod types;
mod validate;

pub use expr::{CronField, CronSchedule};
pub use natural::{convert, extract_time};
pub use tables::{
    month_ordinal, named_time, weekday_ordinal, DAYS_OF_WEEK, MONTHS_OF_YEAR, TIME_KEYWORDS,
    TIME_UNITS,
};
pub use types::{CronError, Result};
pub use validate::is_valid;
