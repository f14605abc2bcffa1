//! Record model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is the record's identity in the [`AddressBook`](crate::book::AddressBook)
/// and never changes. Phones keep insertion order and may contain
/// duplicates unless explicitly removed. Every mutation either succeeds
/// completely or leaves the record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Identity key of the record
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, at most one per record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for the given name.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The record's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The record's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// On failure the record is unchanged and the error names the
    /// offending value. Duplicates are permitted.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value`. No-op if absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace `old` with `new`.
    ///
    /// Validates `new` before touching `old`, so a failure never loses
    /// the old number: if `new` is malformed or `old` is absent, the
    /// phone list afterward equals the list before the call.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        self.phones.remove(pos);
        self.phones.push(replacement);
        Ok(())
    }

    /// Find the first phone exactly equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replace the whole phone list with a single validated number.
    ///
    /// Used by the `change` command. The old list is kept if `raw` fails
    /// validation.
    pub fn set_phones(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Parse and set the birthday, overwriting any prior value.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Semicolon-joined phone list, e.g. `0501234567; 0679876543`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_add_phone_valid() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        assert_eq!(rec.find_phone("0501234567").unwrap().as_str(), "0501234567");
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        let before = rec.phones().to_vec();

        for bad in ["123", "12345678901", "05012345ab", ""] {
            assert!(rec.add_phone(bad).is_err());
            assert_eq!(rec.phones(), before.as_slice());
        }
    }

    #[test]
    fn test_add_phone_duplicates_permitted() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        rec.add_phone("0501234567").unwrap();
        assert_eq!(rec.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_first_occurrence() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        rec.add_phone("0679876543").unwrap();
        rec.add_phone("0501234567").unwrap();

        rec.remove_phone("0501234567");
        let remaining: Vec<_> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(remaining, vec!["0679876543", "0501234567"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        rec.remove_phone("9999999999");
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        rec.edit_phone("0501234567", "0679876543").unwrap();
        assert!(rec.find_phone("0501234567").is_none());
        assert_eq!(rec.find_phone("0679876543").unwrap().as_str(), "0679876543");
    }

    #[test]
    fn test_edit_phone_old_absent() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        let err = rec.edit_phone("1112223344", "0679876543").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("1112223344".to_string()));
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_atomic_on_invalid_new() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        let before = rec.phones().to_vec();

        let err = rec.edit_phone("0501234567", "bad").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert_eq!(rec.phones(), before.as_slice());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut rec = record("Alice");
        rec.add_birthday("15.06.1990").unwrap();
        rec.add_birthday("01.01.1991").unwrap();
        assert_eq!(rec.birthday().unwrap().to_string(), "01.01.1991");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_prior() {
        let mut rec = record("Alice");
        rec.add_birthday("15.06.1990").unwrap();
        assert!(rec.add_birthday("1990-06-15").is_err());
        assert_eq!(rec.birthday().unwrap().to_string(), "15.06.1990");
    }

    #[test]
    fn test_display() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5555555555").unwrap();
        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut rec = record("Alice");
        rec.add_phone("0501234567").unwrap();
        rec.add_birthday("15.06.1990").unwrap();

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
