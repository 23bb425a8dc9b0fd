//! Command-line parsing for the interactive session.

use crate::birthdays::MAX_WINDOW_DAYS;
use crate::domain::ValidationError;
use crate::error::{ContactError, ContactResult};

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <old_phone> <new_phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays [days]`
    Birthdays { days: Option<u32> },
    /// `delete <name>`
    Delete { name: String },
    /// `remove-phone <name> <phone>`
    RemovePhone { name: String, phone: String },
    /// `close` or `exit`
    Exit,
    /// Anything else, including an empty line
    Unknown(String),
}

/// Split a line into a lowercased command word and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    (command, parts.collect())
}

/// Positional argument `index`, or `NotEnoughArguments`.
fn arg(args: &[&str], index: usize) -> ContactResult<String> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or(ContactError::NotEnoughArguments)
}

fn parse_days(raw: &str) -> ContactResult<u32> {
    match raw.parse::<u32>() {
        Ok(days) if days <= MAX_WINDOW_DAYS => Ok(days),
        _ => Err(ValidationError::InvalidWindow(raw.to_string()).into()),
    }
}

impl Command {
    /// Parse a full input line. Extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// `NotEnoughArguments` when a known command is missing arguments, or a
    /// validation error for a malformed `birthdays` window.
    pub fn parse(line: &str) -> ContactResult<Self> {
        let (command, args) = parse_input(line);

        let parsed = match command.as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add {
                name: arg(&args, 0)?,
                phone: arg(&args, 1)?,
            },
            "change" => Self::Change {
                name: arg(&args, 0)?,
                old_phone: arg(&args, 1)?,
                new_phone: arg(&args, 2)?,
            },
            "phone" => Self::Phone {
                name: arg(&args, 0)?,
            },
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday {
                name: arg(&args, 0)?,
                birthday: arg(&args, 1)?,
            },
            "show-birthday" => Self::ShowBirthday {
                name: arg(&args, 0)?,
            },
            "birthdays" => Self::Birthdays {
                days: args.first().copied().map(parse_days).transpose()?,
            },
            "delete" => Self::Delete {
                name: arg(&args, 0)?,
            },
            "remove-phone" => Self::RemovePhone {
                name: arg(&args, 0)?,
                phone: arg(&args, 1)?,
            },
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown(command),
        };

        Ok(parsed)
    }
}
