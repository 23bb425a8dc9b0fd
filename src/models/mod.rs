//! Data models for the address book.
//!
//! This module contains the contact record and the directory that owns all
//! records and answers the upcoming-birthdays query.

pub mod directory;
pub mod record;

pub use directory::{ContactDirectory, UpsertOutcome};
pub use record::ContactRecord;
