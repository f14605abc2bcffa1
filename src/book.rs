//! The address book: an owned, insertion-ordered container of records.

use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default number of days ahead scanned for upcoming birthdays.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// Output date format for congratulation dates.
const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// An upcoming birthday: who to congratulate and on which date.
///
/// The date is already weekend-adjusted (Saturday/Sunday roll forward to
/// the next Monday) and formatted as `YYYY.MM.DD`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Weekend-adjusted greeting date, formatted `YYYY.MM.DD`
    pub congratulation_date: String,
}

/// A collection of records keyed by contact name.
///
/// Keys are unique; `add_record` with an existing name overwrites the
/// record but keeps its original position, so iteration is always in
/// first-insertion order. The whole book is the unit of persistence:
/// it is loaded once at startup and saved once at shutdown (see
/// [`BookStore`](crate::storage::BookStore)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Keys in first-insertion order. Invariant: matches records' key set.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a record by name key. Last write wins; an
    /// overwritten record keeps its original iteration position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Exact lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact lookup by name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry if present; no-op otherwise.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|k| k != name);
        }
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate records in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(move |k| self.records.get(k))
    }

    /// Birthdays due within `[0, window_days]` days of today (local time),
    /// inclusive both ends.
    ///
    /// See [`upcoming_birthdays_from`](Self::upcoming_birthdays_from) for
    /// the full rules; this entry point uses the current local date.
    pub fn upcoming_birthdays(&self, window_days: u64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Birthdays due within `[0, window_days]` days of `today`.
    ///
    /// For every record with a birthday, this year's occurrence is
    /// computed (month/day with the current year); an occurrence that has
    /// already passed rolls forward one year. A birthday exactly on
    /// `today` counts. Occurrences landing on Saturday or Sunday shift
    /// forward to the next Monday. Results follow the book's insertion
    /// order, not chronological order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u64,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = birthday_occurrence(birthday.date(), today.year());
            if occurrence < today {
                occurrence = birthday_occurrence(birthday.date(), today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if days_until < 0 || days_until > window_days as i64 {
                continue;
            }

            let congratulation = if occurrence.weekday().num_days_from_monday() >= 5 {
                next_weekday(occurrence, Weekday::Mon)
            } else {
                occurrence
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation.format(CONGRATULATION_FORMAT).to_string(),
            });
        }

        upcoming
    }
}

/// The birthday's occurrence in `year`. Feb 29 maps to Mar 1 in
/// non-leap years.
fn birthday_occurrence(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}

/// The next occurrence of `weekday` strictly after `date`. A zero or
/// negative offset rolls a full week forward, so the result is never
/// `date` itself.
fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = weekday.num_days_from_monday() as i64
        - date.weekday().num_days_from_monday() as i64;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}

// Serde support - the book is persisted as an ordered sequence of records,
// which keeps the snapshot format flat and preserves insertion order.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.iter() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BookVisitor;

        impl<'de> Visitor<'de> for BookVisitor {
            type Value = AddressBook;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of contact records")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut book = AddressBook::new();
                while let Some(record) = seq.next_element::<Record>()? {
                    book.add_record(record);
                }
                Ok(book)
            }
        }

        deserializer.deserialize_seq(BookVisitor)
    }
}
