//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided date does not match `DD.MM.YYYY`.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone must be 10 digits, got: {}", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY, got: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
