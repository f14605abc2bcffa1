//! Integration tests for the birthday-proximity query against a fixed
//! calendar week.

use chrono::NaiveDate;
use contact_assistant::domain::ContactName;
use contact_assistant::{AddressBook, Record};

fn book_with(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        let mut rec = Record::new(ContactName::new(*name).unwrap());
        rec.add_birthday(birthday).unwrap();
        book.add_record(rec);
    }
    book
}

// Monday of the reference week used throughout.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

#[test]
fn test_full_week_sweep() {
    let book = book_with(&[
        ("Today", "10.06.1990"),      // Monday, day 0
        ("Midweek", "12.06.1985"),    // Wednesday
        ("Saturday", "15.06.1990"),   // rolls to Monday the 17th
        ("Sunday", "16.06.1970"),     // rolls to Monday the 17th
        ("WindowEdge", "17.06.2000"), // day 7, included
        ("TooFar", "18.06.1999"),     // day 8, excluded
        ("LongPast", "01.01.1990"),   // next occurrence in January
    ]);

    let upcoming = book.upcoming_birthdays_from(today(), 7);
    let entries: Vec<(&str, &str)> = upcoming
        .iter()
        .map(|u| (u.name.as_str(), u.congratulation_date.as_str()))
        .collect();

    assert_eq!(
        entries,
        vec![
            ("Today", "2024.06.10"),
            ("Midweek", "2024.06.12"),
            ("Saturday", "2024.06.17"),
            ("Sunday", "2024.06.17"),
            ("WindowEdge", "2024.06.17"),
        ]
    );
}

#[test]
fn test_wider_window() {
    let book = book_with(&[("TooFar", "18.06.1999")]);

    assert!(book.upcoming_birthdays_from(today(), 7).is_empty());
    let upcoming = book.upcoming_birthdays_from(today(), 14);
    // 2024-06-18 is a Tuesday, no adjustment
    assert_eq!(upcoming[0].congratulation_date, "2024.06.18");
}

#[test]
fn test_year_boundary_wrap() {
    let book = book_with(&[("NewYear", "01.01.1990")]);

    // 2024-12-27 is a Friday; 2025-01-01 is a Wednesday, 5 days ahead
    let today = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();
    let upcoming = book.upcoming_birthdays_from(today, 7);
    assert_eq!(upcoming[0].congratulation_date, "2025.01.01");
}

#[test]
fn test_birth_year_is_ignored() {
    // Same month/day, wildly different years: both are due together.
    let book = book_with(&[("Old", "12.06.1950"), ("Young", "12.06.2020")]);
    let upcoming = book.upcoming_birthdays_from(today(), 7);
    assert_eq!(upcoming.len(), 2);
    assert!(upcoming
        .iter()
        .all(|u| u.congratulation_date == "2024.06.12"));
}
