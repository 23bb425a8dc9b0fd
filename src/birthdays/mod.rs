//! Upcoming-birthday computation.
//!
//! Given a reference day and a window length, this module decides whether a
//! birthday recurs inside the window and on which business day the greeting
//! should be sent.

pub mod window;

pub use window::{
    anniversary_in_year, greeting_date, next_occurrence, upcoming_greeting, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
