use super::util::{iter_days_after, iter_days_between};
use std::collections::BTreeSet;
use time::{Date, Weekday};

/// Decides which dates a picker lets the user select.
///
/// Implementations must be pure: the grid asks about every visible cell on
/// each redraw, and range validation asks about every day of a candidate
/// range.
pub(crate) trait Availability {
    fn is_available(&self, date: Date) -> bool;

    /// The earliest selectable date, if the implementation can tell.  Used to
    /// seed a selection when the requested initial date is unusable.
    fn earliest(&self) -> Option<Date> {
        None
    }
}

impl<F: Fn(Date) -> bool> Availability for F {
    fn is_available(&self, date: Date) -> bool {
        self(date)
    }
}

/// An explicit collection of selectable dates
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct AvailableDates(BTreeSet<Date>);

impl AvailableDates {
    /// `today` and the `days` days following it
    pub(crate) fn next_days(today: Date, days: usize) -> AvailableDates {
        Self::window(today, days).collect()
    }

    /// Mondays through Fridays among `today` and the `days` days following it
    pub(crate) fn weekdays_within(today: Date, days: usize) -> AvailableDates {
        Self::window(today, days)
            .filter(|d| !is_weekend(d.weekday()))
            .collect()
    }

    /// Saturdays and Sundays among `today` and the `days` days following it
    pub(crate) fn weekends_within(today: Date, days: usize) -> AvailableDates {
        Self::window(today, days)
            .filter(|d| is_weekend(d.weekday()))
            .collect()
    }

    fn window(today: Date, days: usize) -> impl Iterator<Item = Date> {
        std::iter::once(today).chain(iter_days_after(today).take(days))
    }
}

impl FromIterator<Date> for AvailableDates {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> AvailableDates {
        AvailableDates(iter.into_iter().collect())
    }
}

impl Availability for AvailableDates {
    fn is_available(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    fn earliest(&self) -> Option<Date> {
        self.0.first().copied()
    }
}

fn is_weekend(wd: Weekday) -> bool {
    matches!(wd, Weekday::Saturday | Weekday::Sunday)
}

/// Returns the first date in `start..=end` that `avail` rejects, or `None` if
/// the whole span is selectable.
///
/// Runs in time proportional to the number of days in the span.
pub(crate) fn first_unavailable<A: Availability + ?Sized>(
    avail: &A,
    start: Date,
    end: Date,
) -> Option<Date> {
    iter_days_between(start, end).find(|&d| !avail.is_available(d))
}

pub(crate) fn is_range_available<A: Availability + ?Sized>(
    avail: &A,
    start: Date,
    end: Date,
) -> bool {
    first_unavailable(avail, start, end).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn any_day(_: Date) -> bool {
        true
    }

    #[test]
    fn test_next_days() {
        let avail = AvailableDates::next_days(date!(2024 - 01 - 01), 60);
        assert_eq!(avail.0.len(), 61);
        assert_eq!(avail.earliest(), Some(date!(2024 - 01 - 01)));
        assert!(avail.is_available(date!(2024 - 03 - 01)));
        assert!(!avail.is_available(date!(2024 - 03 - 02)));
        assert!(!avail.is_available(date!(2023 - 12 - 31)));
    }

    #[test]
    fn test_weekdays_within() {
        // 2024-03-06 is a Wednesday
        let avail = AvailableDates::weekdays_within(date!(2024 - 03 - 06), 6);
        assert_eq!(avail.0.len(), 5);
        assert!(avail.is_available(date!(2024 - 03 - 08)));
        assert!(!avail.is_available(date!(2024 - 03 - 09)));
        assert!(!avail.is_available(date!(2024 - 03 - 10)));
        assert!(avail.is_available(date!(2024 - 03 - 11)));
    }

    #[test]
    fn test_weekends_within() {
        let avail = AvailableDates::weekends_within(date!(2024 - 03 - 06), 6);
        assert_eq!(avail.0.len(), 2);
        assert_eq!(avail.earliest(), Some(date!(2024 - 03 - 09)));
    }

    #[test]
    fn test_empty() {
        let avail = AvailableDates::default();
        assert!(avail.0.is_empty());
        assert_eq!(avail.earliest(), None);
        assert!(!avail.is_available(date!(2024 - 03 - 06)));
    }

    #[test]
    fn test_closure_predicate() {
        let odd_days = |d: Date| d.day() % 2 == 1;
        assert!(odd_days.is_available(date!(2024 - 03 - 01)));
        assert!(!odd_days.is_available(date!(2024 - 03 - 02)));
        assert_eq!(odd_days.earliest(), None);
    }

    #[test]
    fn test_range_available() {
        let avail = AvailableDates::weekdays_within(date!(2024 - 03 - 04), 13);
        assert!(is_range_available(
            &avail,
            date!(2024 - 03 - 04),
            date!(2024 - 03 - 08)
        ));
        assert_eq!(
            first_unavailable(&avail, date!(2024 - 03 - 08), date!(2024 - 03 - 11)),
            Some(date!(2024 - 03 - 09))
        );
        assert!(is_range_available(
            &any_day,
            date!(2024 - 03 - 10),
            date!(2024 - 03 - 15)
        ));
    }

    #[test]
    fn test_single_day_range() {
        assert!(is_range_available(
            &any_day,
            date!(2024 - 03 - 10),
            date!(2024 - 03 - 10)
        ));
    }
}
