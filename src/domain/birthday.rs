//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted input and display format.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday parsed from a `DD.MM.YYYY` string.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// assert!(Birthday::parse("1990-03-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday in `DD.MM.YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not parse
    /// as a real calendar date under that pattern.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        // chrono's %Y takes 1-4 digits and an optional sign
        let year_ok = value
            .rsplit_once('.')
            .is_some_and(|(_, year)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
        if !year_ok {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// The birth date itself.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday is celebrated in `year`.
    ///
    /// A Feb 29 birthday is observed on Mar 1 when `year` is not a leap
    /// year. Returns `None` only when `year` is outside chrono's range.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// Days from `today` to the next observed birthday on or after `today`.
    ///
    /// Zero when the birthday is today.
    pub fn days_until(&self, today: NaiveDate) -> Option<u32> {
        let mut next = self.observed_in(today.year())?;
        if next < today {
            next = self.observed_in(today.year() + 1)?;
        }
        u32::try_from((next - today).num_days()).ok()
    }
}

// Serde support - serialize in display format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
