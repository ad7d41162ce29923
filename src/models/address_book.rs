//! The address book: records keyed by contact name.

use crate::domain::Birthday;
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Default window for [`AddressBook::upcoming_birthdays`], in days.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// A record whose birthday falls inside the queried window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    pub days_until: u32,
}

/// Records keyed by name, at most one per name.
///
/// Iteration follows the order in which names were first added. Adding a
/// record under a name that is already present replaces that record in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name().as_str()) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index
                    .insert(record.name().as_str().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&slot| &mut self.records[slot])
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with a birthday in the next week, today included.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Records whose next birthday is at most `days` away from `today`.
    ///
    /// Results are in book order, not sorted by date.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let days_until = birthday.days_until(today)?;
                (days_until <= days).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: *birthday,
                    days_until,
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
