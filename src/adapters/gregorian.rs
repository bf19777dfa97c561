use crate::adapters::CalendarAdapter;
use crate::domain::{CalendarSystem, YearType, gregorian_month_length};
use chrono::NaiveDate;

/// The proleptic Gregorian calendar, weeks numbered from Sunday.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianAdapter;

impl CalendarAdapter for GregorianAdapter {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Gregorian
    }

    fn weekday_origin(&self) -> u32 {
        0
    }

    fn is_leap_year(&self, year: i32) -> bool {
        YearType::from_gregorian(year).is_leap()
    }

    fn month_length(&self, year: i32, month: u32) -> u32 {
        gregorian_month_length(year, month)
    }
}

impl GregorianAdapter {
    /// The jalaali reading of a Gregorian day, as `(year, month, day)`.
    pub fn to_jalaali(&self, year: i32, month: u32, day: u32) -> Option<(i32, u32, u32)> {
        crate::domain::jalaali::from_gregorian(NaiveDate::from_ymd_opt(year, month, day)?)
    }
}
