//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Broad category of a [`ContactError`], used by the command dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed phone, birthday or name.
    Validation,
    /// The referenced contact or phone does not exist.
    NotFound,
    /// The command was given too few arguments.
    Argument,
}

/// Recoverable errors raised by address book operations.
///
/// None of these end the interactive session; the dispatcher prints the
/// message and reads the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given name
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// The contact has no such phone
    #[error("Phone not found.")]
    PhoneNotFound(String),

    /// The phone to replace is not on the contact
    #[error("Old phone not found.")]
    OldPhoneNotFound(String),

    /// Too few positional arguments for a command
    #[error("Not enough arguments.")]
    NotEnoughArguments,
}

impl ContactError {
    /// Which part of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) | Self::OldPhoneNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::NotEnoughArguments => ErrorKind::Argument,
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a valid address book
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file lists the same name twice
    #[error("Duplicate contact in saved data: {0}")]
    DuplicateContact(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
