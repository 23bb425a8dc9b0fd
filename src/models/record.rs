//! Contact record: one person's name, phones and optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation and doubles as the address book key.
/// Phones keep insertion order and may repeat; lookups always act on the
/// first exact match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one was set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    pub(crate) fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `raw` and return it.
    pub fn remove_phone(&mut self, raw: &str) -> ContactResult<PhoneNumber> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| ContactError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`.
    ///
    /// A missing old phone is reported before the new one is validated. If
    /// `new_raw` is invalid the record is left untouched.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> ContactResult<()> {
        let index = self
            .position_of(old_raw)
            .ok_or_else(|| ContactError::OldPhoneNotFound(old_raw.to_string()))?;
        let replacement = PhoneNumber::new(new_raw)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// First phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| **phone == *raw)
    }

    /// Set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`, or `None` when there are none.
    pub fn joined_phones(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        let parts: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        Some(parts.join("; "))
    }

    /// One-line summary used by the `all` command.
    pub fn describe(&self) -> String {
        let phones = self.joined_phones().unwrap_or_else(|| "No phones".to_string());
        let birthday = self.birthday.as_ref().map_or("No birthday", Birthday::as_str);
        format!(
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| *phone == *raw)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn phones_of(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("Alice").unwrap();
        assert_eq!(record.name(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        assert_eq!(ContactRecord::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(phones_of(&record), ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = ContactRecord::new("Alice").unwrap();
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits.");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        let removed = record.remove_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        assert_eq!(phones_of(&record), ["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_missing() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.remove_phone("2222222222").unwrap_err();
        assert_eq!(err, ContactError::PhoneNotFound("2222222222".to_string()));
        assert_eq!(err.to_string(), "Phone not found.");
        assert_eq!(phones_of(&record), ["1111111111"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(phones_of(&record), ["2222222222"]);
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();
        record.edit_phone("2222222222", "4444444444").unwrap();
        assert_eq!(phones_of(&record), ["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("9999999999", "3333333333").unwrap_err();
        assert_eq!(err.to_string(), "Old phone not found.");
        assert_eq!(phones_of(&record), ["1111111111"]);
    }

    #[test]
    fn test_edit_phone_missing_old_wins_over_invalid_new() {
        let mut record = ContactRecord::new("Alice").unwrap();
        let err = record.edit_phone("9999999999", "bad").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_old() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "22-22").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(phones_of(&record), ["1111111111"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(
            record.find_phone("1111111111").map(PhoneNumber::as_str),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.set_birthday("01.01.1990").unwrap();
        record.set_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().map(Birthday::as_str), Some("02.02.1992"));
    }

    #[test]
    fn test_set_birthday_invalid_keeps_previous() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.set_birthday("01.01.1990").unwrap();

        let err = record.set_birthday("1990-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
        assert_eq!(record.birthday().map(Birthday::as_str), Some("01.01.1990"));
    }

    #[test]
    fn test_describe() {
        let mut record = ContactRecord::new("Alice").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: Alice, phones: No phones, birthday: No birthday"
        );

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.set_birthday("15.06.2020").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222, birthday: 15.06.2020"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = ContactRecord::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["1111111111"],"birthday":null}"#
        );
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let json = r#"{"name":"Alice","phones":["123"],"birthday":null}"#;
        assert!(serde_json::from_str::<ContactRecord>(json).is_err());

        let json = r#"{"name":"Alice","phones":[],"birthday":"31.02.2024"}"#;
        assert!(serde_json::from_str::<ContactRecord>(json).is_err());

        let json = r#"{"name":"Alice"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert!(record.phones().is_empty());
    }
}
