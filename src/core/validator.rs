use crate::domain::model::{Month, ValidDay};
use std::fmt;

pub const OUT_OF_RANGE_MESSAGE: &str = "Please enter a valid day (1-31).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayError {
    /// No month picked yet. Never shown to the user.
    MonthMissing,
    OutOfRange,
    ExceedsMonth { max: u32 },
}

impl DayError {
    /// Inline error text, `None` for the silent month short-circuit.
    pub fn message(&self) -> Option<String> {
        match self {
            DayError::MonthMissing => None,
            DayError::OutOfRange => Some(OUT_OF_RANGE_MESSAGE.to_string()),
            DayError::ExceedsMonth { max } => Some(format!("This month only has {} days.", max)),
        }
    }
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("no month selected"),
        }
    }
}

impl std::error::Error for DayError {}

pub fn validate(month: Option<Month>, day_text: &str) -> Result<ValidDay, DayError> {
    let month = month.ok_or(DayError::MonthMissing)?;

    let day = match parse_leading_int(day_text) {
        Some(day) if (1..=31).contains(&day) => day as u32,
        _ => return Err(DayError::OutOfRange),
    };

    let max = month.max_day();
    if day > max {
        tracing::trace!(month = month.number(), day, max, "day exceeds month length");
        return Err(DayError::ExceedsMonth { max });
    }

    Ok(ValidDay { month, day })
}

/// Leading-integer parse: skips leading whitespace, takes an optional sign, an optional
/// `0x` prefix switching to base 16, and the digits that follow, ignoring anything after
/// them. Overflow saturates so it stays out of range.
fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut seen = false;
    let mut value: i64 = 0;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    seen.then_some(if negative { -value } else { value })
}
