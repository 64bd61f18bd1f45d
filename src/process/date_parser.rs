use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BirthdayError {
    #[error("time data {0:?} does not match format DD/MM/YYYY")]
    Format(String),
    #[error("{0:?} is not a valid calendar date")]
    OutOfRange(String),
}

/// Parse `"DD/MM/YYYY"` → date. Day and month may be one or two digits,
/// the year must be exactly four.
pub fn parse_birthday(s: &str) -> Result<NaiveDate, BirthdayError> {
    let format_err = || BirthdayError::Format(s.to_string());

    let mut parts = s.split('/');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(m), Some(y), None) => (d, m, y),
        _ => return Err(format_err()),
    };

    if !is_digits(day, 1..=2) || !is_digits(month, 1..=2) || !is_digits(year, 4..=4) {
        return Err(format_err());
    }

    // all-ASCII-digit and bounded length, so these cannot overflow
    let day: u32 = day.parse().map_err(|_| format_err())?;
    let month: u32 = month.parse().map_err(|_| format_err())?;
    let year: i32 = year.parse().map_err(|_| format_err())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| BirthdayError::OutOfRange(s.to_string()))
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
