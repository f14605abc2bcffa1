//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for birthday input and display.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Parsed strictly from `DD.MM.YYYY` at construction time, so every
/// `Birthday` in the system holds a valid calendar date. No range check
/// beyond that: future-dated birthdays are accepted.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for any other format
    /// or for an impossible calendar date (e.g. `31.02.2000`).
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize in the DD.MM.YYYY wire format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::parse("1990-06-15").is_err()); // ISO format
        assert!(Birthday::parse("15/06/1990").is_err()); // wrong separator
        assert!(Birthday::parse("15.06.90").is_err()); // two-digit year
        assert!(Birthday::parse("31.02.2000").is_err()); // impossible date
        assert!(Birthday::parse("not a date").is_err());
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("29.02.2000").is_ok()); // leap day
    }

    #[test]
    fn test_birthday_future_date_accepted() {
        assert!(Birthday::parse("01.01.2100").is_ok());
    }

    #[test]
    fn test_birthday_display_round_trips_format() {
        let birthday = Birthday::parse("05.01.1987").unwrap();
        assert_eq!(birthday.to_string(), "05.01.1987");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_error_names_value() {
        let err = Birthday::parse("junk").unwrap_err();
        assert!(err.to_string().contains("junk"));
        assert!(err.to_string().contains("DD.MM.YYYY"));
    }
}
