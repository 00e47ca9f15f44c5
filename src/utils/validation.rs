use chrono::NaiveDate;

use crate::error::BotError;

/// Format accepted for birthdays
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

pub fn validate_record_id(value: &str) -> Result<i64, BotError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| BotError::InvalidId(value.to_string()))
}

/// Accepts a real calendar date in `YYYY-MM-DD` form and returns it normalized.
pub fn validate_birthday(value: &str) -> Result<String, BotError> {
    let value = value.trim();
    // chrono accepts single-digit month/day; the month-day lookup needs fixed width
    if value.len() != 10 {
        return Err(BotError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map(|date| date.format(BIRTHDAY_FORMAT).to_string())
        .map_err(|_| BotError::InvalidDate(value.to_string()))
}

/// Fails with the usage hint when fewer than `min` arguments were given.
pub fn require_args(args: &[&str], min: usize, usage: &'static str) -> Result<(), BotError> {
    if args.len() < min {
        Err(BotError::Usage(usage))
    } else {
        Ok(())
    }
}

/// Joins the tail of the argument list with single spaces.
pub fn join_args(args: &[&str]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}
