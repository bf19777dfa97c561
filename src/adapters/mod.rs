//! Per-calendar-system date operations.
//!
//! Both systems share one set of algorithms; an adapter only has to say which
//! system it reads fields in, how long its months are, and which Gregorian
//! weekday is its day `0`.

pub mod gregorian;
pub mod jalaali;

pub use gregorian::*;
pub use jalaali::*;

use crate::domain::{CalendarDate, CalendarSystem, DateRange, DaysBetween, WeekdayLabels};
use log::{debug, warn};

pub trait CalendarAdapter: Send + Sync {
    fn system(&self) -> CalendarSystem;

    /// Sunday-based index of the weekday this system numbers `0`.
    fn weekday_origin(&self) -> u32;

    fn is_leap_year(&self, year: i32) -> bool;

    /// Days in the 1-based `month` of `year`.
    fn month_length(&self, year: i32, month: u32) -> u32;

    /// UTC midnight of a day given in this system's fields.
    fn date(&self, year: i32, month: u32, day: u32) -> Option<CalendarDate> {
        CalendarDate::from_ymd(self.system(), year, month, day)
    }

    /// Reads `date` through this system, `None` when the system cannot.
    fn adopt(&self, date: CalendarDate) -> Option<CalendarDate> {
        date.in_system(self.system())
    }

    /// Weekday of `date` in this system's numbering.
    fn weekday_index(&self, date: &CalendarDate) -> u32 {
        (date.gregorian_weekday() + 7 - self.weekday_origin()) % 7
    }

    /// Handles tagged with another system never share a month with anything.
    fn same_month(&self, a: &CalendarDate, b: &CalendarDate) -> bool {
        if a.system() != self.system() || b.system() != self.system() {
            debug!(
                "same_month on {} adapter got {} and {} handles",
                self.system(),
                a.system(),
                b.system()
            );
            return false;
        }
        a.year() == b.year() && a.month0() == b.month0()
    }

    /// Day identity, compared through Gregorian fields.
    fn same_date(&self, a: &CalendarDate, b: &CalendarDate) -> bool {
        a.gregorian_fields() == b.gregorian_fields()
    }

    fn is_gte(&self, a: &CalendarDate, b: &CalendarDate) -> bool {
        b.diff_days(a) < 1
    }

    fn is_lte(&self, a: &CalendarDate, b: &CalendarDate) -> bool {
        a.diff_days(b) < 1
    }

    fn days_between(&self, a: &CalendarDate, b: &CalendarDate) -> DaysBetween {
        match (self.adopt(*a), self.adopt(*b)) {
            (Some(a), Some(b)) => DaysBetween::new(a, b),
            _ => {
                debug!("{} or {} has no {} reading", a, b, self.system());
                DaysBetween::empty()
            }
        }
    }

    /// `0` when `any_day` has no reading in this system.
    fn days_in_month(&self, any_day: &CalendarDate) -> u32 {
        self.adopt(*any_day)
            .map_or(0, |day| self.month_length(day.year(), day.month()))
    }

    fn month_days(&self, any_day: &CalendarDate) -> DaysBetween {
        match self.adopt(*any_day).and_then(DateRange::month) {
            Some(range) => range.days(),
            None => DaysBetween::empty(),
        }
    }

    /// Short labels rotated so index 0 is this system's day `first_day_of_week`.
    fn weekday_names(&self, labels: &WeekdayLabels, first_day_of_week: u32) -> [String; 7] {
        let start = self.weekday_origin() + first_day_of_week % 7;
        std::array::from_fn(|i| labels.label(start + i as u32).to_string())
    }

    /// The month containing `any_day`, padded with neighbouring days to whole
    /// weeks starting on `first_day_of_week`.
    ///
    /// Empty when the padding would leave the system's supported years, so a
    /// page is always a whole number of weeks.
    fn month_page(&self, any_day: &CalendarDate, first_day_of_week: u32) -> Vec<CalendarDate> {
        let days: Vec<CalendarDate> = self.month_days(any_day).collect();
        let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
            return Vec::new();
        };

        let fdow = match (7 + first_day_of_week % 7) % 7 {
            0 => 7,
            n => n,
        };
        let ldow = (fdow + 6) % 7;

        let back = ((self.weekday_index(&first) + 7 - fdow) % 7) as i64;
        let Some(from) = first.add_days(-back) else {
            warn!("Cannot pad {} backwards by {} days", first, back);
            return Vec::new();
        };

        let forward = ((ldow + 7 - self.weekday_index(&last)) % 7) as i64;
        let Some(to) = last.add_days(forward) else {
            warn!("Cannot pad {} forwards by {} days", last, forward);
            return Vec::new();
        };

        let mut page = Vec::with_capacity(42);
        if self.is_lte(&from, &first) {
            page.extend(self.days_between(&from, &first));
        }
        page.extend_from_slice(&days[1..days.len() - 1]);
        if self.is_gte(&to, &last) {
            page.extend(self.days_between(&last, &to));
        }
        page
    }
}

impl CalendarSystem {
    pub fn adapter(&self) -> &'static dyn CalendarAdapter {
        match self {
            CalendarSystem::Gregorian => &GregorianAdapter,
            CalendarSystem::Jalaali => &JalaaliAdapter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Locale;
    use crate::domain::jalaali::{MAX_YEAR, MIN_YEAR};
    use crate::test_utils::{gregorian, jalaali};

    fn formatted(days: &[CalendarDate]) -> Vec<String> {
        days.iter().map(|d| d.format()).collect()
    }

    #[test]
    fn test_month_page_is_whole_weeks_for_every_month() {
        for system in CalendarSystem::ALL {
            let adapter = system.adapter();
            let years = match system {
                CalendarSystem::Gregorian => 2015..=2025,
                CalendarSystem::Jalaali => 1394..=1404,
            };
            for year in years {
                for month in 1..=12 {
                    let anchor = adapter.date(year, month, 10).unwrap();
                    for fdow in 0..7 {
                        let page = adapter.month_page(&anchor, fdow);
                        let label = format!("{system} {year}-{month:02} fdow={fdow}");

                        assert_eq!(0, page.len() % 7, "{label}");
                        assert_eq!(fdow % 7, adapter.weekday_index(&page[0]) % 7, "{label}");
                        assert_eq!(
                            (fdow + 6) % 7,
                            adapter.weekday_index(page.last().unwrap()),
                            "{label}"
                        );
                        for pair in page.windows(2) {
                            assert_eq!(1, pair[1].diff_days(&pair[0]), "{label}");
                        }
                        let in_month = page
                            .iter()
                            .filter(|d| adapter.same_month(d, &anchor))
                            .count() as u32;
                        assert_eq!(adapter.days_in_month(&anchor), in_month, "{label}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_month_page_at_edge_of_jalaali_years() {
        let adapter = CalendarSystem::Jalaali.adapter();
        let cases = [(MIN_YEAR, 1), (MAX_YEAR, 12)];
        for (year, month) in cases {
            let anchor = adapter.date(year, month, 1).unwrap();
            let mut padded_pages = 0;
            for fdow in 0..7 {
                let page = adapter.month_page(&anchor, fdow);
                let label = format!("{year}-{month:02} fdow={fdow}");
                assert_eq!(0, page.len() % 7, "{label}");
                if let Some(first) = page.first() {
                    assert_eq!(fdow, adapter.weekday_index(first), "{label}");
                    padded_pages += 1;
                }
            }
            // Only the week start that needs no padding past the edge fits.
            assert_eq!(1, padded_pages, "{year}-{month:02}");
        }
    }

    #[test]
    fn test_gregorian_page_before_jalaali_years() {
        let adapter = CalendarSystem::Gregorian.adapter();
        let page = adapter.month_page(&gregorian(500, 6, 15), 0);
        assert_eq!(0, page.len() % 7);
        assert_eq!(30, page.iter().filter(|d| d.month() == 6).count());
        assert_eq!(0, adapter.weekday_index(&page[0]));
    }

    #[test]
    fn test_foreign_handle_without_jalaali_reading() {
        let jal = CalendarSystem::Jalaali.adapter();
        let early = gregorian(500, 6, 15);
        assert!(jal.adopt(early).is_none());
        assert_eq!(0, jal.days_in_month(&early));
        assert_eq!(0, jal.month_days(&early).count());
        assert!(jal.month_page(&early, 0).is_empty());
        assert_eq!(0, jal.days_between(&early, &jalaali(1400, 1, 1)).count());
    }

    #[test]
    fn test_gregorian_page_november_2016() {
        let adapter = CalendarSystem::Gregorian.adapter();
        let page = adapter.month_page(&gregorian(2016, 11, 22), 0);
        assert_eq!(35, page.len());
        assert_eq!("2016-10-30", page[0].format());
        assert_eq!("2016-11-01", page[2].format());
        assert_eq!("2016-12-03", page[34].format());

        let monday_first = adapter.month_page(&gregorian(2016, 11, 22), 1);
        assert_eq!("2016-10-31", monday_first[0].format());
        assert_eq!("2016-12-04", monday_first[34].format());
    }

    #[test]
    fn test_page_without_padding() {
        // February 2015 starts on a Sunday and ends on a Saturday.
        let page = CalendarSystem::Gregorian
            .adapter()
            .month_page(&gregorian(2015, 2, 14), 0);
        assert_eq!(28, page.len());
        assert_eq!("2015-02-01", page[0].format());
        assert_eq!("2015-02-28", page[27].format());
    }

    #[test]
    fn test_jalaali_page_azar_1395() {
        let adapter = CalendarSystem::Jalaali.adapter();
        let page = adapter.month_page(&jalaali(1395, 9, 15), 0);
        assert_eq!(35, page.len());
        assert_eq!(
            vec!["1395-08-29", "1395-08-30", "1395-09-01"],
            formatted(&page[..3])
        );
        assert_eq!("1395-10-03", page[34].format());
        assert_eq!("2016-11-19", page[0].in_system(CalendarSystem::Gregorian).unwrap().format());
    }

    #[test]
    fn test_month_days() {
        let days: Vec<CalendarDate> = CalendarSystem::Jalaali
            .adapter()
            .month_days(&jalaali(1403, 12, 5))
            .collect();
        assert_eq!(30, days.len());
        assert_eq!("1403-12-01", days[0].format());
        assert_eq!("1403-12-30", days[29].format());
        assert!(days.iter().all(|d| d.is_midnight()));

        let february: Vec<CalendarDate> = CalendarSystem::Gregorian
            .adapter()
            .month_days(&gregorian(2024, 2, 29))
            .collect();
        assert_eq!(29, february.len());
    }

    #[test]
    fn test_month_days_reads_foreign_handle_in_own_system() {
        let days: Vec<CalendarDate> = CalendarSystem::Jalaali
            .adapter()
            .month_days(&gregorian(2016, 11, 22))
            .collect();
        assert_eq!("1395-09-01", days[0].format());
        assert_eq!(CalendarSystem::Jalaali, days[0].system());
    }

    #[test]
    fn test_same_month() {
        let greg = CalendarSystem::Gregorian.adapter();
        assert!(greg.same_month(&gregorian(2016, 11, 1), &gregorian(2016, 11, 30)));
        assert!(!greg.same_month(&gregorian(2016, 11, 30), &gregorian(2016, 12, 1)));
        assert!(!greg.same_month(&gregorian(2015, 11, 1), &gregorian(2016, 11, 1)));

        let jal = CalendarSystem::Jalaali.adapter();
        // 2016-11-20 is 30 Aban, 2016-11-21 is 1 Azar.
        let aban = gregorian(2016, 11, 20).in_system(CalendarSystem::Jalaali).unwrap();
        let azar = gregorian(2016, 11, 21).in_system(CalendarSystem::Jalaali).unwrap();
        assert!(!jal.same_month(&aban, &azar));
        assert!(jal.same_month(&azar, &jalaali(1395, 9, 30)));
    }

    #[test]
    fn test_same_month_rejects_foreign_handles() {
        let jal = CalendarSystem::Jalaali.adapter();
        assert!(!jal.same_month(&gregorian(2016, 11, 22), &jalaali(1395, 9, 2)));
    }

    #[test]
    fn test_ordering_is_day_granular() {
        let adapter = CalendarSystem::Gregorian.adapter();
        let a = gregorian(2020, 5, 5);
        let b = gregorian(2020, 5, 6);
        assert!(adapter.is_gte(&a, &a));
        assert!(adapter.is_lte(&a, &a));
        assert!(adapter.is_gte(&b, &a));
        assert!(!adapter.is_gte(&a, &b));
        assert!(adapter.is_lte(&a, &b));
        assert!(!adapter.is_lte(&b, &a));

        let an_hour_later = a.timestamp_millis() + 3_600_000;
        let later_same_day =
            CalendarDate::from_timestamp_millis(CalendarSystem::Gregorian, an_hour_later).unwrap();
        assert!(adapter.is_gte(&a, &later_same_day));
        assert!(adapter.is_lte(&later_same_day, &a));
    }

    #[test]
    fn test_days_between_length() {
        let adapter = CalendarSystem::Jalaali.adapter();
        let days: Vec<CalendarDate> = adapter
            .days_between(&jalaali(1399, 12, 28), &jalaali(1400, 1, 2))
            .collect();
        assert_eq!(
            vec!["1399-12-28", "1399-12-29", "1399-12-30", "1400-01-01", "1400-01-02"],
            formatted(&days)
        );
    }

    #[test]
    fn test_weekday_names_rotation() {
        let labels = Locale::English.weekday_labels();
        let greg = CalendarSystem::Gregorian.adapter();
        assert_eq!(
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            greg.weekday_names(&labels, 0)
        );
        assert_eq!("Mon", greg.weekday_names(&labels, 1)[0]);
        assert_eq!("Sat", greg.weekday_names(&labels, 6)[0]);

        let jal = CalendarSystem::Jalaali.adapter();
        assert_eq!(
            ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"],
            jal.weekday_names(&labels, 0)
        );
        assert_eq!("Sun", jal.weekday_names(&labels, 1)[0]);
    }

    #[test]
    fn test_weekday_names_match_weekday_index() {
        let labels = Locale::English.weekday_labels();
        for system in CalendarSystem::ALL {
            let adapter = system.adapter();
            // 2016-11-19 through 2016-11-25 cover every weekday once.
            for offset in 0..7 {
                let day = adapter.adopt(gregorian(2016, 11, 19 + offset)).unwrap();
                let index = adapter.weekday_index(&day);
                let expected = labels.label(day.gregorian_weekday());
                assert_eq!(expected, adapter.weekday_names(&labels, index)[0]);
            }
        }
    }
}
