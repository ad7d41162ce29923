//! Data models for the address book.
//!
//! A [`Record`] holds one person's details; an [`AddressBook`] keys records
//! by name and answers the upcoming-birthdays query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::Record;
