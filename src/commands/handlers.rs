//! Command handlers.
//!
//! One function per command. Each returns the message to show the user, or
//! a [`CommandError`] the session formats as `Error: ...`. Lookup misses are
//! ordinary messages, not errors.

use crate::error::CommandResult;
use crate::models::{AddressBook, Record, UPCOMING_WINDOW_DAYS};
use chrono::NaiveDate;

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// Add `phone` to `name`, creating the contact first if needed.
///
/// A new contact is kept even when the phone then fails validation.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name)?);
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(message.to_string())
}

pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    let message = if record.replace_phone(old_phone, new_phone)? {
        "Phone updated."
    } else {
        "Old phone not found."
    };
    Ok(message.to_string())
}

pub fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let Some(record) = book.find(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    if record.phones().is_empty() {
        return Ok("No phones.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book
        .records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    record.set_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("Birthday not set or contact not found.".to_string()),
    }
}

/// List birthdays falling within `window_days` of `today`, in book order.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Ok(no_upcoming_birthdays(window_days));
    }
    Ok(upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.birthday))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Empty-result reply worded after the window actually searched.
fn no_upcoming_birthdays(window_days: u32) -> String {
    match window_days {
        0 => "No birthdays today.".to_string(),
        1 => "No upcoming birthdays in the next day.".to_string(),
        UPCOMING_WINDOW_DAYS => "No upcoming birthdays next week.".to_string(),
        n => format!("No upcoming birthdays in the next {} days.", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_contact_new_then_existing() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&mut book, "Alice", "0501234567").unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&mut book, "Alice", "0670000000").unwrap(),
            "Contact updated."
        );
        assert_eq!(
            show_phone(&book, "Alice").unwrap(),
            "0501234567, 0670000000"
        );
    }

    #[test]
    fn test_add_contact_invalid_phone_still_creates_contact() {
        let mut book = AddressBook::new();
        let err = add_contact(&mut book, "Alice", "123").unwrap_err();
        assert_eq!(err, CommandError::InvalidPhoneFormat("123".to_string()));
        assert!(book.find("Alice").is_some());
        assert_eq!(show_phone(&book, "Alice").unwrap(), "No phones.");
    }

    #[test]
    fn test_change_phone_messages() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "Bob", "1111111111").unwrap();

        assert_eq!(
            change_phone(&mut book, "Nobody", "1111111111", "2222222222").unwrap(),
            CONTACT_NOT_FOUND
        );
        assert_eq!(
            change_phone(&mut book, "Bob", "9999999999", "2222222222").unwrap(),
            "Old phone not found."
        );
        assert_eq!(
            change_phone(&mut book, "Bob", "1111111111", "2222222222").unwrap(),
            "Phone updated."
        );
        assert_eq!(show_phone(&book, "Bob").unwrap(), "2222222222");
    }

    #[test]
    fn test_change_phone_invalid_new() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "Bob", "1111111111").unwrap();
        assert!(matches!(
            change_phone(&mut book, "Bob", "1111111111", "abc"),
            Err(CommandError::InvalidPhoneFormat(_))
        ));
    }

    #[test]
    fn test_show_phone_unknown_contact() {
        let book = AddressBook::new();
        assert_eq!(show_phone(&book, "Ghost").unwrap(), CONTACT_NOT_FOUND);
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book).unwrap(), "Address book is empty.");

        add_contact(&mut book, "Alice", "0501234567").unwrap();
        add_contact(&mut book, "Bob", "1111111111").unwrap();
        add_birthday(&mut book, "Bob", "15.03.1990").unwrap();
        assert_eq!(
            show_all(&book).unwrap(),
            "Alice: Phones: 0501234567, Birthday: No birthday\n\
             Bob: Phones: 1111111111, Birthday: 15.03.1990"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_birthday(&mut book, "Bob", "15.03.1990").unwrap(),
            CONTACT_NOT_FOUND
        );

        add_contact(&mut book, "Bob", "1111111111").unwrap();
        assert_eq!(
            show_birthday(&book, "Bob").unwrap(),
            "Birthday not set or contact not found."
        );
        assert_eq!(
            add_birthday(&mut book, "Bob", "15.03.1990").unwrap(),
            "Birthday added for Bob."
        );
        assert_eq!(show_birthday(&book, "Bob").unwrap(), "15.03.1990");
        assert!(matches!(
            add_birthday(&mut book, "Bob", "1990-03-15"),
            Err(CommandError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_upcoming_birthdays_output() {
        let mut book = AddressBook::new();
        let today = date(2030, 3, 14);
        assert_eq!(
            upcoming_birthdays(&book, today, UPCOMING_WINDOW_DAYS).unwrap(),
            "No upcoming birthdays next week."
        );

        add_contact(&mut book, "Bob", "1111111111").unwrap();
        add_birthday(&mut book, "Bob", "15.03.2030").unwrap();
        add_contact(&mut book, "Carol", "2222222222").unwrap();
        add_birthday(&mut book, "Carol", "14.03.1970").unwrap();
        add_contact(&mut book, "Dan", "3333333333").unwrap();
        add_birthday(&mut book, "Dan", "30.03.1970").unwrap();

        assert_eq!(
            upcoming_birthdays(&book, today, UPCOMING_WINDOW_DAYS).unwrap(),
            "Bob: 15.03.2030\nCarol: 14.03.1970"
        );
    }

    #[test]
    fn test_empty_reply_follows_window() {
        let book = AddressBook::new();
        let today = date(2030, 3, 14);
        let reply = |days| upcoming_birthdays(&book, today, days).unwrap();

        assert_eq!(reply(7), "No upcoming birthdays next week.");
        assert_eq!(reply(30), "No upcoming birthdays in the next 30 days.");
        assert_eq!(reply(1), "No upcoming birthdays in the next day.");
        assert_eq!(reply(0), "No birthdays today.");
    }
}
