//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The offending input is kept for logging, but the user-facing message is
/// fixed per rule so the interactive session prints a stable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// The provided birthday window is not a day count from 0 to 366.
    InvalidWindow(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must contain exactly 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::InvalidWindow(_) => write!(f, "Days must be a number between 0 and 366."),
        }
    }
}

impl std::error::Error for ValidationError {}
