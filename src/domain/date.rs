//! The canonical date handle.

use crate::domain::jalaali;
use crate::domain::system::CalendarSystem;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use std::fmt;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// An instant in UTC, read through the fields of one calendar system.
///
/// Handles built from calendar days sit at UTC midnight; only handles built
/// from an explicit epoch timestamp keep a time of day. Gregorian handles
/// cover chrono's whole range. Jalaali handles exist only for the years
/// covered by [`jalaali::jal_cal`] (roughly 560 through 3798 CE), so reading
/// a Gregorian handle in jalaali fields can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    instant: DateTime<Utc>,
    system: CalendarSystem,
    jalaali: Option<(i32, u32, u32)>,
}

impl CalendarDate {
    /// Wraps an instant. Returns `None` when the day has no reading in `system`.
    pub fn from_instant(system: CalendarSystem, instant: DateTime<Utc>) -> Option<Self> {
        let jalaali = jalaali::from_gregorian(instant.date_naive());
        if system == CalendarSystem::Jalaali && jalaali.is_none() {
            return None;
        }
        Some(Self {
            instant,
            system,
            jalaali,
        })
    }

    pub fn from_timestamp_millis(system: CalendarSystem, millis: i64) -> Option<Self> {
        Self::from_instant(system, DateTime::from_timestamp_millis(millis)?)
    }

    /// The UTC midnight that starts the given Gregorian day.
    pub fn from_naive_date(system: CalendarSystem, date: NaiveDate) -> Option<Self> {
        Self::from_instant(system, date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Builds a UTC-midnight handle from fields of `system` (1-based month).
    ///
    /// ```
    /// use jcalendars::{CalendarDate, CalendarSystem};
    ///
    /// let date = CalendarDate::from_ymd(CalendarSystem::Jalaali, 1395, 9, 2).unwrap();
    /// assert_eq!("2016-11-22", date.in_system(CalendarSystem::Gregorian).unwrap().format());
    /// ```
    pub fn from_ymd(system: CalendarSystem, year: i32, month: u32, day: u32) -> Option<Self> {
        let date = match system {
            CalendarSystem::Gregorian => NaiveDate::from_ymd_opt(year, month, day)?,
            CalendarSystem::Jalaali => jalaali::to_gregorian(year, month, day)?,
        };
        Self::from_naive_date(system, date)
    }

    /// Parses the canonical `YYYY-MM-DD` form of `system` as UTC midnight.
    pub fn parse_canonical(system: CalendarSystem, text: &str) -> Option<Self> {
        let mut parts = text.trim().splitn(3, '-');
        let year = parts.next()?.parse::<i32>().ok()?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;
        Self::from_ymd(system, year, month, day)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// Always zero: handles live in UTC.
    pub fn utc_offset_seconds(&self) -> i32 {
        0
    }

    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    /// The same instant read through another calendar system, if that system
    /// covers it.
    pub fn in_system(self, system: CalendarSystem) -> Option<Self> {
        if system == CalendarSystem::Jalaali && self.jalaali.is_none() {
            return None;
        }
        Some(Self { system, ..self })
    }

    /// The Gregorian calendar day of the instant, in UTC.
    pub fn naive_date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// `(year, month, day)` in this handle's system, month 1-based.
    pub fn fields(&self) -> (i32, u32, u32) {
        match self.system {
            CalendarSystem::Gregorian => self.gregorian_fields(),
            // Jalaali handles are only built with jalaali fields.
            CalendarSystem::Jalaali => self.jalaali.unwrap_or_else(|| self.gregorian_fields()),
        }
    }

    pub fn gregorian_fields(&self) -> (i32, u32, u32) {
        let date = self.naive_date();
        (date.year(), date.month(), date.day())
    }

    pub fn year(&self) -> i32 {
        self.fields().0
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.fields().1
    }

    /// 0-based month, the internal convention for both systems.
    pub fn month0(&self) -> u32 {
        self.fields().1 - 1
    }

    pub fn day(&self) -> u32 {
        self.fields().2
    }

    /// Gregorian weekday with Sunday as `0`.
    pub fn gregorian_weekday(&self) -> u32 {
        self.naive_date().weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let (year, month, _) = self.fields();
        match self.system {
            CalendarSystem::Gregorian => gregorian_month_length(year, month),
            CalendarSystem::Jalaali => jalaali::month_length(year, month),
        }
    }

    /// Shifts by whole days, keeping the time of day.
    pub fn add_days(self, days: i64) -> Option<Self> {
        let instant = self.instant.checked_add_signed(Duration::try_days(days)?)?;
        Self::from_instant(self.system, instant)
    }

    /// Drops any time of day.
    pub fn start_of_day(self) -> Self {
        Self {
            instant: self.naive_date().and_time(NaiveTime::MIN).and_utc(),
            ..self
        }
    }

    pub fn is_midnight(&self) -> bool {
        self.timestamp_millis().rem_euclid(MILLIS_PER_DAY) == 0
    }

    /// Whole days from `other` to `self`, truncated toward zero.
    pub fn diff_days(&self, other: &CalendarDate) -> i64 {
        (self.instant - other.instant).num_days()
    }

    /// The canonical `YYYY-MM-DD` string in this handle's system.
    pub fn format(&self) -> String {
        let (year, month, day) = self.fields();
        format!("{:04}-{:02}-{:02}", year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.format(), self.system)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in the Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }

    /// Determines if `year` is a leap year in the jalaali calendar.
    pub fn from_jalaali(year: i32) -> Self {
        if jalaali::is_leap_year(year) {
            Self::Leap
        } else {
            Self::Common
        }
    }

    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Days in the 1-based Gregorian `month`, `0` for an invalid month.
pub fn gregorian_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if YearType::from_gregorian(year).is_leap() => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CalendarSystem::*;

    #[test]
    fn test_from_timestamp_keeps_instant() {
        let date = CalendarDate::from_timestamp_millis(Gregorian, 1479832134398).unwrap();
        assert_eq!(1479832134398, date.timestamp_millis());
        assert_eq!(0, date.utc_offset_seconds());
        assert!(!date.is_midnight());
        assert!(date.start_of_day().is_midnight());
        assert_eq!(1479772800000, date.start_of_day().timestamp_millis());
    }

    #[test]
    fn test_fields_per_system() {
        let date = CalendarDate::from_ymd(Gregorian, 2016, 11, 22).unwrap();
        assert_eq!((2016, 11, 22), date.fields());
        assert_eq!(10, date.month0());

        let jalaali = date.in_system(Jalaali).unwrap();
        assert_eq!((1395, 9, 2), jalaali.fields());
        assert_eq!(8, jalaali.month0());
        assert_eq!("1395-09-02", jalaali.format());
        assert_eq!(date.timestamp_millis(), jalaali.timestamp_millis());
    }

    #[test]
    fn test_days_in_month() {
        let feb = CalendarDate::from_ymd(Gregorian, 2024, 2, 10).unwrap();
        assert_eq!(29, feb.days_in_month());
        let dec = CalendarDate::from_ymd(Gregorian, 2023, 12, 31).unwrap();
        assert_eq!(31, dec.days_in_month());
        let esfand = CalendarDate::from_ymd(Jalaali, 1402, 12, 1).unwrap();
        assert_eq!(29, esfand.days_in_month());
    }

    #[test]
    fn test_parse_canonical() {
        let date = CalendarDate::parse_canonical(Jalaali, "1400-01-01").unwrap();
        assert_eq!("2021-03-21", date.in_system(Gregorian).unwrap().format());
        assert!(CalendarDate::parse_canonical(Gregorian, "2021-02-30").is_none());
        assert!(CalendarDate::parse_canonical(Gregorian, "not a date").is_none());
    }

    #[test]
    fn test_diff_days_truncates() {
        let a = CalendarDate::from_ymd(Gregorian, 2020, 1, 1).unwrap();
        let b = CalendarDate::from_timestamp_millis(Gregorian, a.timestamp_millis() + 86_399_999)
            .unwrap();
        assert_eq!(0, b.diff_days(&a));
        assert_eq!(1, a.add_days(1).unwrap().diff_days(&a));
        assert_eq!(-1, a.add_days(-1).unwrap().diff_days(&a));
    }

    #[test]
    fn test_year_type() {
        assert!(YearType::from_gregorian(2000).is_leap());
        assert!(!YearType::from_gregorian(1900).is_leap());
        assert!(YearType::from_jalaali(1403).is_leap());
        assert_eq!(YearType::Common, YearType::from_jalaali(1402));
    }

    #[test]
    fn test_gregorian_outside_jalaali_years() {
        let early = CalendarDate::from_ymd(Gregorian, 500, 6, 15).unwrap();
        assert_eq!("0500-06-15", early.format());
        assert_eq!(-46374422400000, early.timestamp_millis());
        assert_eq!("0500-06-16", early.add_days(1).unwrap().format());
        assert_eq!(30, early.days_in_month());
        assert!(early.in_system(Jalaali).is_none());

        let late = CalendarDate::from_ymd(Gregorian, 4000, 1, 1).unwrap();
        assert_eq!("4000-01-01", late.format());
        assert!(late.in_system(Jalaali).is_none());
    }

    #[test]
    fn test_jalaali_outside_break_table() {
        assert!(CalendarDate::from_ymd(Jalaali, 3178, 1, 1).is_none());
        assert!(CalendarDate::from_ymd(Jalaali, -62, 1, 1).is_none());
        let instant = CalendarDate::from_ymd(Gregorian, 500, 6, 15).unwrap().instant();
        assert!(CalendarDate::from_instant(Jalaali, instant).is_none());
    }
}
