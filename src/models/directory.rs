//! The address book: every contact record, keyed by name.

use crate::birthdays::{upcoming_greeting, UpcomingBirthday};
use crate::domain::PhoneNumber;
use crate::error::{ContactError, ContactResult, StorageError, StorageResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What [`ContactDirectory::upsert`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was created
    Created,
    /// The phone was appended to an existing record
    Updated,
}

/// On-disk layout of the address book.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    contacts: &'a [ContactRecord],
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<ContactRecord>,
}

/// All contact records, in insertion order, with unique names.
///
/// The directory owns its records. Callers can read them and mutate a single
/// record's fields, but records only enter through [`upsert`](Self::upsert)
/// or deserialization, which keeps names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory has no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add `phone` to the contact called `name`, creating the contact first
    /// if it does not exist.
    ///
    /// The phone is validated before anything changes, so an invalid phone
    /// never leaves an empty record behind.
    pub fn upsert(&mut self, name: &str, phone: &str) -> ContactResult<UpsertOutcome> {
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.find_mut(name) {
            record.push_phone(phone);
            tracing::debug!(name, "Appended phone to existing contact");
            return Ok(UpsertOutcome::Updated);
        }

        let mut record = ContactRecord::new(name)?;
        record.push_phone(phone);
        self.records.push(record);
        tracing::debug!(name, "Created contact");
        Ok(UpsertOutcome::Created)
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Look up a contact by exact name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Like [`find`](Self::find) but a missing contact is an error.
    pub fn get(&self, name: &str) -> ContactResult<&ContactRecord> {
        self.find(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    /// Like [`find_mut`](Self::find_mut) but a missing contact is an error.
    pub fn get_mut(&mut self, name: &str) -> ContactResult<&mut ContactRecord> {
        self.find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    /// Delete a contact and return its record.
    pub fn remove(&mut self, name: &str) -> ContactResult<ContactRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.name() == name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        tracing::debug!(name, "Removed contact");
        Ok(self.records.remove(index))
    }

    /// Every record in insertion order.
    pub fn all(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Contacts whose next birthday is at most `window_days` after `today`.
    ///
    /// Results follow insertion order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let greeting_date = upcoming_greeting(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    greeting_date,
                })
            })
            .collect()
    }

    /// Serialize to the persisted JSON form.
    pub fn to_bytes(&self) -> StorageResult<Vec<u8>> {
        let snapshot = SnapshotRef {
            contacts: &self.records,
        };
        Ok(serde_json::to_vec_pretty(&snapshot)?)
    }

    /// Rebuild a directory from persisted bytes. `None` means nothing was
    /// saved yet and yields an empty directory.
    ///
    /// Every field is validated again and duplicate names are rejected.
    pub fn from_bytes(bytes: Option<&[u8]>) -> StorageResult<Self> {
        let Some(bytes) = bytes else {
            return Ok(Self::new());
        };

        let snapshot: Snapshot = serde_json::from_slice(bytes)?;

        if let Some(name) = first_duplicate(&snapshot.contacts) {
            return Err(StorageError::DuplicateContact(name.to_string()));
        }

        Ok(Self {
            records: snapshot.contacts,
        })
    }
}

fn first_duplicate(records: &[ContactRecord]) -> Option<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(ContactRecord::name)
        .find(|name| !seen.insert(*name))
}
