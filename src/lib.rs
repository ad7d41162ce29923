//! Address Book - a command-line contact manager.
//!
//! Stores names, phone numbers and birthdays, persists them between runs,
//! and answers "whose birthday is coming up this week".
//!
//! # Architecture
//!
//! - **domain**: Validated value types (names, phone numbers, birthdays)
//! - **models**: Contact records and the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the whole book
//! - **commands**: Command parsing and one handler per command
//! - **session**: The interactive read-eval-print loop
//! - **clock**: Where "today" comes from

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use session::Session;
