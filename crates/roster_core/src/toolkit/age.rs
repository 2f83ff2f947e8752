//! Calendar age calculation with string reporting.
//!
//! # Responsibility
//! - Parse strict ISO `YYYY-MM-DD` dates shared by query and toolkit callers.
//! - Compute calendar periods (years, months, days) between two dates.
//!
//! # Invariants
//! - Malformed text and future dates are distinct outcomes.
//! - `calculate_age*` never returns an error; failures become messages.

use chrono::{Datelike, Local, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reported when the input is not a `YYYY-MM-DD` date.
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Use YYYY-MM-DD";
/// Reported when the birth date is after today.
pub const FUTURE_DATE_MESSAGE: &str = "Birth date cannot be in the future";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid iso date regex"));

/// Malformed date text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date `{}`: expected YYYY-MM-DD", self.input)
    }
}

impl Error for DateParseError {}

/// Age calculation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    InvalidFormat(DateParseError),
    InFuture { date: NaiveDate, today: NaiveDate },
}

impl Display for AgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(err) => write!(f, "{err}"),
            Self::InFuture { date, today } => {
                write!(f, "date {date} is after current date {today}")
            }
        }
    }
}

impl Error for AgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            Self::InFuture { .. } => None,
        }
    }
}

impl From<DateParseError> for AgeError {
    fn from(value: DateParseError) -> Self {
        Self::InvalidFormat(value)
    }
}

/// Calendar difference between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPeriod {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Display for CalendarPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years, {} months, and {} days",
            self.years, self.months, self.days
        )
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let parse_error = || DateParseError {
        input: value.to_string(),
    };
    if !ISO_DATE_RE.is_match(value) {
        return Err(parse_error());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| parse_error())
}

/// Computes the calendar period from `date` to `today`.
///
/// Whole months are counted first; an anchor that lands past the end of a
/// short month clamps to its last day. Remaining days are counted exactly.
///
/// # Errors
/// - `InFuture` when `date` is strictly after `today`.
pub fn age_between(date: NaiveDate, today: NaiveDate) -> Result<CalendarPeriod, AgeError> {
    if date > today {
        return Err(AgeError::InFuture { date, today });
    }

    let mut total_months = month_index(today) - month_index(date);
    let mut days = i64::from(today.day()) - i64::from(date.day());
    if total_months > 0 && days < 0 {
        total_months -= 1;
        // `anchor <= today`, so the addition cannot overflow.
        let anchor = date
            .checked_add_months(Months::new(total_months as u32))
            .unwrap_or(today);
        days = (today - anchor).num_days();
    }

    Ok(CalendarPeriod {
        years: (total_months / 12) as u32,
        months: (total_months % 12) as u32,
        days: days as u32,
    })
}

/// Reports the age of `birth_date` relative to today's local date.
pub fn calculate_age(birth_date: &str) -> String {
    calculate_age_on(birth_date, Local::now().date_naive())
}

/// Reports the age of `birth_date` relative to `today`.
pub fn calculate_age_on(birth_date: &str, today: NaiveDate) -> String {
    let result = parse_iso_date(birth_date)
        .map_err(AgeError::from)
        .and_then(|date| age_between(date, today));
    match result {
        Ok(period) => format!("Age is {period}"),
        Err(AgeError::InFuture { .. }) => FUTURE_DATE_MESSAGE.to_string(),
        Err(AgeError::InvalidFormat(_)) => INVALID_DATE_MESSAGE.to_string(),
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
