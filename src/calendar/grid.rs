use super::util::{iter_days_before, WeekdayExt, YearMonth, DAYS_IN_WEEK};
use std::iter::successors;
use time::{Date, Weekday};

/// Number of rows in every month grid
pub(crate) const WEEKS_IN_GRID: usize = 6;

/// Number of cells in every month grid
pub(crate) const GRID_CELLS: usize = WEEKS_IN_GRID * DAYS_IN_WEEK;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarCell {
    pub(crate) date: Date,
    pub(crate) in_current_month: bool,
}

/// The six weeks shown for a month, padded with days from the adjacent months
#[derive(Clone, Debug, Eq, PartialEq)]
// Invariant: `cells` holds exactly `GRID_CELLS` consecutive dates, the first
// of which falls on `week_start`
pub(crate) struct MonthGrid {
    week_start: Weekday,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub(crate) fn build(month: YearMonth, week_start: Weekday) -> MonthGrid {
        let first = month.first_day();
        let lead = usize::from(first.weekday().days_since(week_start));
        let origin = iter_days_before(first).take(lead).last().unwrap_or(first);
        let cells = successors(Some(origin), |&d| d.next_day())
            .take(GRID_CELLS)
            .map(|date| CalendarCell {
                date,
                in_current_month: month.contains(date),
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(cells.len(), GRID_CELLS, "grid should never run off the calendar");
        MonthGrid {
            week_start,
            cells,
        }
    }

    pub(crate) fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub(crate) fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    /// The days of the week in column order
    pub(crate) fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        successors(Some(self.week_start), |wd| Some(wd.next())).take(DAYS_IN_WEEK)
    }
}
