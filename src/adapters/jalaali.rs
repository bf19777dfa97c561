use crate::adapters::CalendarAdapter;
use crate::domain::{CalendarSystem, YearType, jalaali};
use chrono::{Datelike, NaiveDate};

/// The jalaali (solar hijri) calendar, weeks numbered from Saturday.
#[derive(Debug, Clone, Copy, Default)]
pub struct JalaaliAdapter;

impl CalendarAdapter for JalaaliAdapter {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Jalaali
    }

    fn weekday_origin(&self) -> u32 {
        // Saturday
        6
    }

    fn is_leap_year(&self, year: i32) -> bool {
        YearType::from_jalaali(year).is_leap()
    }

    fn month_length(&self, year: i32, month: u32) -> u32 {
        if (1..=12).contains(&month) {
            jalaali::month_length(year, month)
        } else {
            0
        }
    }
}

impl JalaaliAdapter {
    /// The Gregorian reading of a jalaali day, as `(year, month, day)`.
    pub fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Option<(i32, u32, u32)> {
        let date: NaiveDate = jalaali::to_gregorian(year, month, day)?;
        Some((date.year(), date.month(), date.day()))
    }
}
