use std::fmt;
use std::iter::successors;
use time::{
    format_description::FormatItem, macros::format_description, Date, Month, Month::*, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub(crate) const DAYS_IN_WEEK: usize = 7;

// A month grid reaches up to six days before the first of the month and up to
// 41 days after it, so the years at either end of `time::Date`'s range are
// kept out of reach.
const MIN_YEAR: i32 = -9998;
const MAX_YEAR: i32 = 9998;

pub(crate) trait WeekdayExt {
    /// Number of days from `week_start` forwards to `self`, in `0..7`
    fn days_since(&self, week_start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn days_since(&self, week_start: Weekday) -> u8 {
        (self.number_days_from_monday() + 7 - week_start.number_days_from_monday()) % 7
    }
}

/// A month of a specific year, i.e., the unit of calendar navigation
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: Month) -> YearMonth {
        YearMonth {
            year: year.clamp(MIN_YEAR, MAX_YEAR),
            month,
        }
    }

    pub(crate) fn of(date: Date) -> YearMonth {
        YearMonth::new(date.year(), date.month())
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn first_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.month, 1)
            .expect("year should be clamped to the representable range")
    }

    pub(crate) fn last_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.month, self.month.length(self.year))
            .expect("year should be clamped to the representable range")
    }

    /// The day of this month nearest to `date`
    pub(crate) fn clamp(&self, date: Date) -> Date {
        date.clamp(self.first_day(), self.last_day())
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month.  Saturates at the last representable month.
    pub(crate) fn next(self) -> YearMonth {
        match self.month {
            December if self.year >= MAX_YEAR => self,
            December => YearMonth::new(self.year + 1, January),
            m => YearMonth::new(self.year, m.next()),
        }
    }

    /// The preceding month.  Saturates at the first representable month.
    pub(crate) fn previous(self) -> YearMonth {
        match self.month {
            January if self.year <= MIN_YEAR => self,
            January => YearMonth::new(self.year - 1, December),
            m => YearMonth::new(self.year, m.previous()),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Displays a date in its canonical `YYYY-MM-DD` form
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ymd(pub(crate) Date);

impl fmt::Display for Ymd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(&YMD_FMT).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

pub(crate) fn parse_ymd(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), &YMD_FMT)
}

pub(crate) fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

pub(crate) fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}

/// Every date from `start` through `end`, inclusive.  Empty if `end` precedes
/// `start`.
pub(crate) fn iter_days_between(start: Date, end: Date) -> impl Iterator<Item = Date> {
    successors(Some(start), |&d| d.next_day()).take_while(move |&d| d <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday::*;

    #[test]
    fn test_days_since() {
        assert_eq!(Sunday.days_since(Sunday), 0);
        assert_eq!(Saturday.days_since(Sunday), 6);
        assert_eq!(Sunday.days_since(Monday), 6);
        assert_eq!(Wednesday.days_since(Monday), 2);
        assert_eq!(Monday.days_since(Saturday), 2);
    }

    #[test]
    fn test_next_across_year() {
        let ym = YearMonth::new(2024, December);
        assert_eq!(ym.next(), YearMonth::new(2025, January));
        assert_eq!(ym.next().previous(), ym);
    }

    #[test]
    fn test_previous_across_year() {
        assert_eq!(
            YearMonth::new(2024, January).previous(),
            YearMonth::new(2023, December)
        );
    }

    #[test]
    fn test_navigation_saturates() {
        let last = YearMonth::new(MAX_YEAR, December);
        assert_eq!(last.next(), last);
        let first = YearMonth::new(MIN_YEAR, January);
        assert_eq!(first.previous(), first);
        assert_eq!(YearMonth::new(i32::MAX, March).year(), MAX_YEAR);
    }

    #[test]
    fn test_contains() {
        let ym = YearMonth::new(2024, February);
        assert!(ym.contains(date!(2024 - 02 - 29)));
        assert!(!ym.contains(date!(2024 - 03 - 01)));
        assert!(!ym.contains(date!(2023 - 02 - 01)));
        assert_eq!(ym.first_day(), date!(2024 - 02 - 01));
    }

    #[test]
    fn test_last_day() {
        assert_eq!(YearMonth::new(2024, February).last_day(), date!(2024 - 02 - 29));
        assert_eq!(YearMonth::new(2023, February).last_day(), date!(2023 - 02 - 28));
        assert_eq!(YearMonth::new(2024, April).last_day(), date!(2024 - 04 - 30));
    }

    #[test]
    fn test_clamp_beyond_navigable_years() {
        let ym = YearMonth::of(date!(9999 - 12 - 31));
        assert_eq!(ym, YearMonth::new(MAX_YEAR, December));
        assert_eq!(ym.clamp(date!(9999 - 12 - 31)), date!(9998 - 12 - 31));
        let earliest = Date::from_calendar_date(-9999, January, 1).unwrap();
        let ym = YearMonth::of(earliest);
        assert_eq!(ym.clamp(earliest), YearMonth::new(MIN_YEAR, January).first_day());
        let ym = YearMonth::new(2024, March);
        assert_eq!(ym.clamp(date!(2024 - 03 - 17)), date!(2024 - 03 - 17));
    }

    #[test]
    fn test_display() {
        assert_eq!(YearMonth::new(2024, March).to_string(), "March 2024");
        assert_eq!(Ymd(date!(2024 - 01 - 05)).to_string(), "2024-01-05");
    }

    #[test]
    fn test_parse_ymd() {
        assert_eq!(parse_ymd("2024-03-10").unwrap(), date!(2024 - 03 - 10));
        assert!(parse_ymd("2024-02-30").is_err());
        assert!(parse_ymd("10/03/2024").is_err());
        assert!(parse_ymd("").is_err());
    }

    #[test]
    fn test_iter_days_between() {
        let days = iter_days_between(date!(2024 - 02 - 27), date!(2024 - 03 - 01))
            .collect::<Vec<_>>();
        assert_eq!(
            days,
            [
                date!(2024 - 02 - 27),
                date!(2024 - 02 - 28),
                date!(2024 - 02 - 29),
                date!(2024 - 03 - 01),
            ]
        );
        assert_eq!(
            iter_days_between(date!(2024 - 03 - 01), date!(2024 - 02 - 27)).count(),
            0
        );
    }
}
