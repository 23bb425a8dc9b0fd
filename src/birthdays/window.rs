//! Birthday window and weekend-shift rules.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Window used by the `birthdays` command when none is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Largest accepted window, one leap year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to send the greeting, already moved off a weekend
    pub greeting_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Greeting date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.greeting_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// The birthday's day and month placed in `year`.
///
/// 29 February falls on 1 March in non-leap years. Returns `None` only when
/// `year` is outside chrono's supported range.
pub fn anniversary_in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    let (month, day) = (birthday.month(), birthday.day());
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// First occurrence of the birthday on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(birthday, today.year())?;
    if this_year < today {
        anniversary_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn greeting_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Greeting date for `birthday` if it recurs within `window_days` of `today`,
/// both ends inclusive.
pub fn upcoming_greeting(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let delta = (occurrence - today).num_days();
    if (0..=i64::from(window_days)).contains(&delta) {
        Some(greeting_date(occurrence))
    } else {
        None
    }
}
