//! Contact Assistant - an interactive command-line address book.
//!
//! This library stores contacts with their phone numbers and birthdays,
//! persists them between sessions, and reports whose birthday falls within
//! the coming days, moving weekend greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the directory that owns them
//! - **birthdays**: Birthday window and weekend-shift rules
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence of the directory between sessions
//! - **commands**: Parsing and handling of interactive commands
//! - **session**: The read-eval-print loop

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult, ErrorKind, StorageError};
pub use models::{ContactDirectory, ContactRecord, UpsertOutcome};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use session::{Assistant, Reply};
