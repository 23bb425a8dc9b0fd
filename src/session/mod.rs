//! Interactive read-eval-print session.
//!
//! The [`Assistant`] owns the address book for the lifetime of the session,
//! dispatches one command per input line and saves the book on exit.

pub mod assistant;

pub use assistant::{local_today, Assistant, Clock, Reply};

use anyhow::Result;
use std::io;

/// Run an assistant against the process's stdin and stdout.
///
/// Returns once the user exits or stdin is closed.
pub fn run_stdio<R>(assistant: &mut Assistant<R>) -> Result<()>
where
    R: crate::repositories::DirectoryRepository,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    assistant.run(stdin.lock(), stdout.lock())
}
