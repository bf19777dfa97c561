use crate::domain::date::CalendarDate;

/// An inclusive span of days, read in the system of its `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    pub fn day(date: CalendarDate) -> Self {
        let date = date.start_of_day();
        Self {
            start: date,
            end: date,
        }
    }

    /// Day 1 through the last day of the month containing `date`, in its system.
    pub fn month(date: CalendarDate) -> Option<Self> {
        let (year, month, _) = date.fields();
        let system = date.system();
        let start = CalendarDate::from_ymd(system, year, month, 1)?;
        let end = CalendarDate::from_ymd(system, year, month, date.days_in_month())?;
        Some(Self { start, end })
    }

    /// Day-granular membership: both ends count.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start.diff_days(&date) < 1 && date.diff_days(&self.end) < 1
    }

    pub fn days(&self) -> DaysBetween {
        DaysBetween::new(self.start, self.end)
    }
}

/// Every day from `start` to `end` inclusive, stepping one day at a time.
///
/// Each step keeps the time of day of `start`; the iteration stops at the last
/// step not later than `end`, or earlier if a step leaves the range the
/// calendar system can read.
#[derive(Debug, Clone)]
pub struct DaysBetween {
    next: Option<CalendarDate>,
    end_millis: i64,
}

impl DaysBetween {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            next: Some(start),
            end_millis: end.timestamp_millis(),
        }
    }

    pub fn empty() -> Self {
        Self {
            next: None,
            end_millis: i64::MIN,
        }
    }
}

impl Iterator for DaysBetween {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current.timestamp_millis() > self.end_millis {
            return None;
        }
        self.next = current.add_days(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(next) if next.timestamp_millis() <= self.end_millis => {
                let remaining = (self.end_millis - next.timestamp_millis()) / 86_400_000 + 1;
                let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
                (1, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}
