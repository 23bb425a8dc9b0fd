//! Test fixtures shared by the integration tests.

use chrono::NaiveDate;
use contact_assistant::ContactDirectory;

/// Build a date from literal parts.
#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid date literal")
}

/// Monday 10 June 2024, the reference "today" for birthday tests.
#[allow(dead_code)]
pub fn reference_monday() -> NaiveDate {
    ymd(2024, 6, 10)
}

/// A small book with every shape of record: several phones, a birthday,
/// no phones at all.
#[allow(dead_code)]
pub fn sample_book() -> ContactDirectory {
    let mut book = ContactDirectory::new();

    book.upsert("Alice", "1234567890").unwrap();
    book.upsert("Alice", "0987654321").unwrap();

    book.upsert("Bob", "5555555555").unwrap();
    book.get_mut("Bob").unwrap().set_birthday("15.06.2020").unwrap();

    book.upsert("Carol", "1111111111").unwrap();
    book.get_mut("Carol").unwrap().remove_phone("1111111111").unwrap();
    book.get_mut("Carol").unwrap().set_birthday("29.02.1996").unwrap();

    book
}
