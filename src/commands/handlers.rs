//! Command handlers.
//!
//! Each handler performs one operation on the address book and returns the
//! line(s) to print. Failures come back as [`ContactError`] and the session
//! prints their message.

use crate::domain::PhoneNumber;
use crate::error::ContactResult;
use crate::models::{ContactDirectory, UpsertOutcome};
use chrono::NaiveDate;

/// `add`: create the contact or append a phone to it.
pub fn add_contact(book: &mut ContactDirectory, name: &str, phone: &str) -> ContactResult<String> {
    let message = match book.upsert(name, phone)? {
        UpsertOutcome::Created => "Contact added.",
        UpsertOutcome::Updated => "Contact updated.",
    };
    Ok(message.to_string())
}

/// `change`: replace one of a contact's phones.
pub fn change_contact(
    book: &mut ContactDirectory,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> ContactResult<String> {
    book.get_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone changed.".to_string())
}

/// `phone`: list a contact's phones.
pub fn show_phone(book: &ContactDirectory, name: &str) -> ContactResult<String> {
    let record = book.get(name)?;
    Ok(record
        .joined_phones()
        .unwrap_or_else(|| "No phones for this contact.".to_string()))
}

/// `all`: one summary line per contact.
pub fn show_all(book: &ContactDirectory) -> ContactResult<String> {
    if book.is_empty() {
        return Ok("AddressBook is empty.".to_string());
    }
    let lines: Vec<String> = book.all().iter().map(|record| record.describe()).collect();
    Ok(lines.join("\n"))
}

/// `add-birthday`: set or replace a contact's birthday.
pub fn add_birthday(
    book: &mut ContactDirectory,
    name: &str,
    birthday: &str,
) -> ContactResult<String> {
    book.get_mut(name)?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday`: the birthday exactly as entered.
pub fn show_birthday(book: &ContactDirectory, name: &str) -> ContactResult<String> {
    let record = book.get(name)?;
    Ok(record
        .birthday()
        .map(|birthday| birthday.as_str().to_string())
        .unwrap_or_else(|| "Birthday is not set.".to_string()))
}

/// `birthdays`: greeting dates for birthdays in the coming `window_days`.
pub fn birthdays(
    book: &ContactDirectory,
    today: NaiveDate,
    window_days: u32,
) -> ContactResult<String> {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", window_days));
    }
    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

/// `delete`: remove a contact entirely.
pub fn delete_contact(book: &mut ContactDirectory, name: &str) -> ContactResult<String> {
    book.remove(name)?;
    Ok("Contact deleted.".to_string())
}

/// `remove-phone`: drop one phone from a contact.
pub fn remove_phone(book: &mut ContactDirectory, name: &str, phone: &str) -> ContactResult<String> {
    let removed: PhoneNumber = book.get_mut(name)?.remove_phone(phone)?;
    tracing::debug!(name, phone = %removed, "Removed phone");
    Ok("Phone removed.".to_string())
}
