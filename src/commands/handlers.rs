//! Command handlers.
//!
//! Each handler returns the reply to print. Fixed replies like
//! `"Error. Contact not found."` are normal return values; only malformed
//! input (bad phone or date, wrong argument count) surfaces as a
//! [`CommandError`], and `execute` converts those into user-facing
//! messages at the dispatch boundary so no command ever terminates the
//! process.

use crate::book::AddressBook;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// Run a parsed command against the book, converting any handler error
/// into its user-facing message. Unknown commands get `"Invalid command."`.
///
/// `hello` and `exit`/`close` are not handled here; they belong to the
/// loop itself.
pub fn execute(command: &str, args: &[String], book: &mut AddressBook, window_days: u64) -> String {
    debug!(command, args = args.len(), "Dispatching command");

    let result = match command {
        "add" => add_contact(args, book),
        "change" => change_contact(args, book),
        "phone" => show_phone(args, book),
        "all" => Ok(show_all(book)),
        "add-birthday" => add_birthday(args, book),
        "show-birthday" => show_birthday(args, book),
        "birthdays" => Ok(birthdays(book, window_days)),
        _ => return "Invalid command.".to_string(),
    };

    result.unwrap_or_else(|e| e.to_string())
}

/// `add <name> <phone>`: create the record on first add, append the
/// phone otherwise. Extra arguments are ignored.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::Args {
            usage: "add <name> <phone>",
        });
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(ContactName::new(name.as_str())?);
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <phone>`: replace the whole phone list of an existing
/// contact with the single given number.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::Args {
            usage: "change <name> <phone>",
        });
    };

    match book.find_mut(name) {
        Some(record) => {
            record.set_phones(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => Ok("Error. Contact not found.".to_string()),
    }
}

/// `phone <name>`: the record's rendering (name plus phone list).
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Args {
            usage: "phone <name>",
        });
    };

    Ok(match book.find(name) {
        Some(record) => record.to_string(),
        None => "Error. Contact not found.".to_string(),
    })
}

/// `all`: newline-joined `name: phones` listing.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Contacts list is empty.".to_string();
    }

    book.iter()
        .map(|record| format!("{}: {}", record.name(), record.phones_joined()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`. Extra arguments are ignored.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::Args {
            usage: "add-birthday <name> <DD.MM.YYYY>",
        });
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Args {
            usage: "show-birthday <name>",
        });
    };

    Ok(match book.find(name) {
        None => "Contact not found.".to_string(),
        Some(record) => match record.birthday() {
            None => "No birthday set for this contact.".to_string(),
            Some(birthday) => {
                format!("Contact name: {} Birthday: {}", record.name(), birthday)
            }
        },
    })
}

/// `birthdays`: congratulation dates due within the window.
pub fn birthdays(book: &AddressBook, window_days: u64) -> String {
    let upcoming = book.upcoming_birthdays(window_days);
    if upcoming.is_empty() {
        return "No birthdays in the upcoming week.".to_string();
    }

    upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n")
}
