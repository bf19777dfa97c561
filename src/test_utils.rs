//! Shared builders for unit tests.

use crate::domain::{CalendarDate, CalendarSystem};

pub fn gregorian(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(CalendarSystem::Gregorian, year, month, day)
        .expect("valid Gregorian test date")
}

pub fn jalaali(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(CalendarSystem::Jalaali, year, month, day)
        .expect("valid jalaali test date")
}

pub fn date(system: CalendarSystem, year: i32, month: u32, day: u32) -> CalendarDate {
    match system {
        CalendarSystem::Gregorian => gregorian(year, month, day),
        CalendarSystem::Jalaali => jalaali(year, month, day),
    }
}
