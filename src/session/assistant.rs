//! The assistant bot: command dispatch over an owned address book.

use crate::commands::{handlers, Command};
use crate::config::Config;
use crate::error::StorageResult;
use crate::models::ContactDirectory;
use crate::repositories::DirectoryRepository;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

/// Source of "today" for the `birthdays` command.
pub type Clock = fn() -> NaiveDate;

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command.
    Continue(String),
    /// The user asked to leave.
    Exit,
}

/// Interactive contact assistant.
pub struct Assistant<R> {
    book: ContactDirectory,
    repository: R,
    window_days: u32,
    clock: Clock,
    // false after a failed load, so the unreadable file is not overwritten
    persist: bool,
    startup_notice: Option<String>,
}

impl<R: DirectoryRepository> Assistant<R> {
    /// Create an assistant over an already loaded book.
    pub fn new(book: ContactDirectory, repository: R, window_days: u32) -> Self {
        Self {
            book,
            repository,
            window_days,
            clock: local_today,
            persist: true,
            startup_notice: None,
        }
    }

    /// Load the book from `repository` and create an assistant over it.
    ///
    /// A book that cannot be read is reported to the user at startup. The
    /// session then starts empty and does not save on exit.
    pub fn open(repository: R, config: &Config) -> Self {
        match repository.load() {
            Ok(book) => Self::new(book, repository, config.birthday_window_days),
            Err(e) => {
                tracing::error!("Failed to load address book: {}", e);
                let mut assistant =
                    Self::new(ContactDirectory::new(), repository, config.birthday_window_days);
                assistant.persist = false;
                assistant.startup_notice = Some(format!(
                    "Could not load address book: {}. Changes in this session will not be saved.",
                    e
                ));
                assistant
            }
        }
    }

    /// Replace the clock, typically with a fixed date in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The address book as it currently stands.
    pub fn book(&self) -> &ContactDirectory {
        &self.book
    }

    /// Whether the book will be written back on exit.
    pub fn persists(&self) -> bool {
        self.persist
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.dispatch(command),
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), "Rejected input: {}", e);
                Reply::Continue(e.to_string())
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Reply {
        let book = &mut self.book;
        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => handlers::add_contact(book, &name, &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => handlers::change_contact(book, &name, &old_phone, &new_phone),
            Command::Phone { name } => handlers::show_phone(book, &name),
            Command::All => handlers::show_all(book),
            Command::AddBirthday { name, birthday } => {
                handlers::add_birthday(book, &name, &birthday)
            }
            Command::ShowBirthday { name } => handlers::show_birthday(book, &name),
            Command::Birthdays { days } => {
                let today = (self.clock)();
                handlers::birthdays(book, today, days.unwrap_or(self.window_days))
            }
            Command::Delete { name } => handlers::delete_contact(book, &name),
            Command::RemovePhone { name, phone } => handlers::remove_phone(book, &name, &phone),
            Command::Exit => return Reply::Exit,
            Command::Unknown(word) => {
                tracing::debug!(command = %word, "Unknown command");
                Ok("Invalid command.".to_string())
            }
        };

        match result {
            Ok(message) => Reply::Continue(message),
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), "Command failed: {}", e);
                Reply::Continue(e.to_string())
            }
        }
    }

    /// Write the book through the repository, unless persistence was
    /// disabled by a failed load.
    pub fn save(&self) -> StorageResult<()> {
        if !self.persist {
            tracing::warn!("Skipping save, address book was not loaded");
            return Ok(());
        }
        self.repository.save(&self.book)
    }

    /// Run the prompt loop until `exit`/`close` or end of input, then save.
    ///
    /// Save failures are reported on `output`; only I/O errors on `input`
    /// or `output` themselves are returned. The book is saved even when the
    /// loop stops on such an error.
    pub fn run<I, O>(&mut self, mut input: I, mut output: O) -> Result<()>
    where
        I: BufRead,
        O: Write,
    {
        let session = self.prompt_loop(&mut input, &mut output);

        let saved = self.save();
        if let Err(e) = &saved {
            tracing::error!("Failed to save address book: {}", e);
        }
        session?;

        if let Err(e) = saved {
            writeln!(output, "Could not save address book: {}", e)?;
        }
        writeln!(output, "Good bye!")?;
        Ok(())
    }

    fn prompt_loop<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<()>
    where
        I: BufRead,
        O: Write,
    {
        writeln!(output, "Welcome to the assistant bot!")?;
        if let Some(notice) = &self.startup_notice {
            writeln!(output, "{}", notice)?;
        }

        let mut buf = Vec::new();
        loop {
            write!(output, "Enter a command: ")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // end of input
                writeln!(output)?;
                return Ok(());
            }

            // invalid UTF-8 becomes U+FFFD and fails validation like any typo
            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                Reply::Continue(message) => writeln!(output, "{}", message)?,
                Reply::Exit => return Ok(()),
            }
        }
    }
}
