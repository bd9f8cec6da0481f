use super::grid::{CalendarCell, MonthGrid, WEEKS_IN_GRID};
use super::util::DAYS_IN_WEEK;
use crate::locale::Locale;
use crate::theme::calendar::{
    AVAILABLE_STYLE, IN_RANGE_STYLE, OUT_OF_MONTH_STYLE, SELECTED_STYLE, TODAY_MODIFIER,
    UNAVAILABLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Widget},
};

/// Number of columns per day of week
const DAY_WIDTH: u16 = 5;

/// Number of lines taken up by the weekday header and its rule
const HEADER_LINES: u16 = 2;

/// Columns between the left edge of a day's slot and its text
const DAY_INDENT: u16 = 1;

// DAYS_IN_WEEK and WEEKS_IN_GRID are single digits
#[allow(clippy::cast_possible_truncation)]
pub(crate) const GRID_WIDTH: u16 = DAY_WIDTH * DAYS_IN_WEEK as u16;

#[allow(clippy::cast_possible_truncation)]
pub(crate) const GRID_HEIGHT: u16 = HEADER_LINES + WEEKS_IN_GRID as u16;

const ACS_HLINE: char = '─';

/// How a single day should be drawn
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct DayFlags {
    pub(crate) in_current_month: bool,
    pub(crate) available: bool,
    /// The single selected date or either endpoint of a range
    pub(crate) selected: bool,
    /// Strictly between the endpoints of a completed range
    pub(crate) in_range: bool,
    pub(crate) cursor: bool,
    pub(crate) today: bool,
}

impl DayFlags {
    fn style(&self) -> Style {
        let style = if self.selected {
            SELECTED_STYLE
        } else if self.in_range {
            IN_RANGE_STYLE
        } else if self.available && self.in_current_month {
            AVAILABLE_STYLE
        } else if self.available {
            OUT_OF_MONTH_STYLE
        } else {
            UNAVAILABLE_STYLE
        };
        if self.today {
            style.add_modifier(TODAY_MODIFIER)
        } else {
            style
        }
    }

    fn show(&self, day: u8) -> String {
        if self.cursor {
            format!("[{day:2}]")
        } else {
            format!(" {day:2} ")
        }
    }
}

/// Draws a weekday header followed by the six weeks of a `MonthGrid`
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a> {
    grid: &'a MonthGrid,
    locale: Locale,
    flags: Vec<DayFlags>,
}

impl<'a> MonthView<'a> {
    pub(crate) fn new<F>(grid: &'a MonthGrid, locale: Locale, flags_for: F) -> Self
    where
        F: Fn(CalendarCell) -> DayFlags,
    {
        let flags = grid.cells().iter().map(|&cell| flags_for(cell)).collect();
        MonthView {
            grid,
            locale,
            flags,
        }
    }
}

impl Widget for MonthView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = BufferCanvas::new(area, buf);
        for (col, wd) in std::iter::zip(0u16.., self.grid.weekdays()) {
            canvas.mvprint(
                0,
                col * DAY_WIDTH + DAY_INDENT,
                self.locale.weekday_abbrev(wd),
                WEEKDAY_STYLE,
            );
        }
        canvas.hline(1, 0, ACS_HLINE, GRID_WIDTH);
        for (row, (week, flags)) in std::iter::zip(
            0u16..,
            std::iter::zip(self.grid.weeks(), self.flags.chunks(DAYS_IN_WEEK)),
        ) {
            for (col, (cell, fl)) in std::iter::zip(0u16.., std::iter::zip(week, flags)) {
                canvas.mvprint(
                    row + HEADER_LINES,
                    col * DAY_WIDTH + DAY_INDENT,
                    fl.show(cell.date.day()),
                    fl.style(),
                );
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Keep the Paragraph's Rect inside the area so that overlong text
            // is truncated rather than written out of bounds
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), Style::new());
    }
}
