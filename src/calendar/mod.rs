mod availability;
mod grid;
mod selection;
mod util;
mod widget;
pub(crate) use self::availability::{Availability, AvailableDates};
pub(crate) use self::grid::{CalendarCell, MonthGrid};
pub(crate) use self::selection::{SavedSelection, Selection, SelectionMode, TapOutcome};
pub(crate) use self::util::{parse_ymd, YearMonth, Ymd};
pub(crate) use self::widget::{DayFlags, MonthView, GRID_HEIGHT, GRID_WIDTH};
