//! Gregorian and jalaali date arithmetic for calendar widgets.
//!
//! A [`CalendarDate`] is a UTC instant read through one [`CalendarSystem`].
//! The [`calendar`] module dispatches month pages, weekday labels and day
//! ranges to the system's [`CalendarAdapter`], and [`parsing`] turns loosely
//! typed inputs into handles and back into [`DayRecord`]s.

pub mod adapters;
pub mod application;
pub mod calendar;
pub mod domain;
pub mod parsing;

#[cfg(test)]
pub mod test_utils;

pub use adapters::CalendarAdapter;
pub use calendar::{DateBounds, DayState};
pub use domain::*;
pub use parsing::{day_records, parse_date, to_day_record, try_parse_date};
