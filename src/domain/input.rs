//! The shapes a date may take on its way into the engine.

use crate::domain::date::CalendarDate;
use crate::domain::jalaali;
use crate::domain::record::DayRecord;
use crate::domain::system::CalendarSystem;
use anyhow::{Result, bail};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Every input shape `parse_date` accepts, in the order it resolves them.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An envelope carrying epoch milliseconds, such as a [`DayRecord`].
    Timestamp { timestamp: i64 },
    /// A date-time of the underlying time library, in its own offset.
    Handle(DateTime<FixedOffset>),
    /// A wall-clock local date-time.
    Native(NaiveDateTime),
    /// Year, month and day in the target calendar system.
    Fields(DateFields),
    Raw(RawValue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Millis(i64),
    Text(String),
}

/// Structured date fields, month 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateFields {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Checks the fields describe a real day of `system`.
    pub fn validate(&self, system: CalendarSystem) -> Result<()> {
        let Self { year, month, day } = *self;
        if !(1..=12).contains(&month) {
            bail!("Month {} is out of range 1-12", month);
        }
        let valid = match system {
            CalendarSystem::Gregorian => NaiveDate::from_ymd_opt(year, month, day).is_some(),
            CalendarSystem::Jalaali => jalaali::is_valid(year, month, day),
        };
        if !valid {
            bail!("{:04}-{:02}-{:02} is not a valid {} date", year, month, day, system);
        }
        Ok(())
    }

    /// The canonical, zero-padded date string.
    pub fn to_date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl DateInput {
    /// Interprets a command-line argument: signed digit strings are epoch
    /// milliseconds, everything else is text.
    pub fn from_cli_arg(arg: &str) -> Self {
        let trimmed = arg.trim();
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(millis) = trimmed.parse::<i64>() {
                return DateInput::Raw(RawValue::Millis(millis));
            }
        }
        DateInput::Raw(RawValue::Text(trimmed.to_string()))
    }
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        DateInput::Handle(date.instant().fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateInput::Handle(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Handle(value.fixed_offset())
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(value: DateTime<Local>) -> Self {
        DateInput::Native(value.naive_local())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Native(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Native(value.and_time(NaiveTime::MIN))
    }
}

impl From<DateFields> for DateInput {
    fn from(value: DateFields) -> Self {
        DateInput::Fields(value)
    }
}

impl From<&DayRecord> for DateInput {
    fn from(record: &DayRecord) -> Self {
        DateInput::Timestamp {
            timestamp: record.timestamp,
        }
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Raw(RawValue::Millis(millis))
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Raw(RawValue::Text(text.to_string()))
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Raw(RawValue::Text(text))
    }
}
