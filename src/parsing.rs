//! Normalizing date inputs into [`CalendarDate`] handles and back into
//! [`DayRecord`]s.

use crate::domain::{CalendarDate, CalendarSystem, DateInput, DayRecord, RawValue};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, NaiveDateTime};
use log::{debug, warn};

/// Resolves any accepted input shape into a handle of `system`.
///
/// Absent input yields `None`. Inputs that cannot be read, such as fields that
/// do not name a real day or text in no known format, are logged as warnings
/// and also yield `None`. Nothing here panics.
///
/// ```
/// use jcalendars::{CalendarSystem, DateInput, parse_date};
///
/// let date = parse_date(CalendarSystem::Gregorian, Some(DateInput::from("2012-03-16"))).unwrap();
/// assert_eq!("2012-03-16", date.format());
/// assert_eq!(None, parse_date(CalendarSystem::Jalaali, None));
/// ```
pub fn parse_date(system: CalendarSystem, input: Option<DateInput>) -> Option<CalendarDate> {
    match try_parse_date(system, input?) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!("{:#}", err);
            None
        }
    }
}

/// Like [`parse_date`], but explains why an input was not accepted.
pub fn try_parse_date(system: CalendarSystem, input: DateInput) -> Result<CalendarDate> {
    let description = format!("{:?}", input);
    resolve(system, input)
        .with_context(|| format!("Could not interpret {} as a {} date", description, system))
}

/// The record of `date` read in `system`, or `None` when `system` has no
/// reading of that day.
///
/// The timestamp is recomputed from the date string so it always names UTC
/// midnight, even when the handle carries a time of day.
pub fn to_day_record(system: CalendarSystem, date: &CalendarDate) -> Option<DayRecord> {
    let date = date.in_system(system)?;
    let date_string = date.format();
    let timestamp = match CalendarDate::parse_canonical(system, &date_string) {
        Some(midnight) => midnight.timestamp_millis(),
        None => date.start_of_day().timestamp_millis(),
    };
    let (year, _, day) = date.fields();

    Some(DayRecord {
        year,
        month: date.month0() + 1,
        day,
        timestamp,
        date_string,
    })
}

/// The Gregorian record of `date` together with its record in `system`.
pub fn day_records(system: CalendarSystem, date: &CalendarDate) -> Option<(DayRecord, DayRecord)> {
    Some((
        to_day_record(CalendarSystem::Gregorian, date)?,
        to_day_record(system, date)?,
    ))
}

fn resolve(system: CalendarSystem, input: DateInput) -> Result<CalendarDate> {
    match input {
        DateInput::Timestamp { timestamp } => from_millis(system, timestamp),
        DateInput::Handle(value) => {
            // Day as seen in the value's own offset, at UTC midnight.
            let day = value.date_naive();
            CalendarDate::from_naive_date(system, day)
                .with_context(|| format!("{} has no {} reading", day, system))
        }
        DateInput::Native(value) => {
            let date_string = format!("{:04}-{:02}-{:02}", value.year(), value.month(), value.day());
            CalendarDate::parse_canonical(CalendarSystem::Gregorian, &date_string)
                .and_then(|date| date.in_system(system))
                .with_context(|| format!("{} has no {} reading", date_string, system))
        }
        DateInput::Fields(fields) => {
            fields.validate(system)?;
            let date_string = fields.to_date_string();
            CalendarDate::parse_canonical(system, &date_string)
                .with_context(|| format!("{} is outside the supported range", date_string))
        }
        DateInput::Raw(RawValue::Millis(millis)) => from_millis(system, millis),
        DateInput::Raw(RawValue::Text(text)) => parse_text(system, &text),
    }
}

fn from_millis(system: CalendarSystem, millis: i64) -> Result<CalendarDate> {
    CalendarDate::from_timestamp_millis(system, millis)
        .with_context(|| format!("Timestamp {} is outside the {} range", millis, system))
}

fn parse_text(system: CalendarSystem, text: &str) -> Result<CalendarDate> {
    let text = text.trim();
    if let Some(date) = CalendarDate::parse_canonical(system, text) {
        return Ok(date);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        debug!("Parsed '{}' as RFC 3339", text);
        return CalendarDate::from_instant(system, value.to_utc())
            .with_context(|| format!("'{}' has no {} reading", text, system));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, pattern) {
            return CalendarDate::from_instant(system, value.and_utc())
                .with_context(|| format!("'{}' has no {} reading", text, system));
        }
    }
    bail!("'{}' is not a recognised date", text)
}
