//! Record model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and may repeat. The name is fixed at
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` and leaves the record untouched when `old` is not
    /// present. `new` is only validated once a match exists.
    pub fn replace_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old) else {
            return Ok(false);
        };
        *slot = PhoneNumber::new(new)?;
        Ok(true)
    }

    /// Validate `value` as `DD.MM.YYYY` and overwrite the birthday.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Days from `today` until the next birthday, `None` if none is set.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<u32> {
        self.birthday.as_ref().and_then(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}: Phones: {}, Birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "No birthday"),
        }
    }
}
