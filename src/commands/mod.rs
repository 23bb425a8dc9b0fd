//! Interactive commands.
//!
//! `parser` turns an input line into a [`Command`]; `handlers` runs one
//! command against the address book and produces the text to show.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};
