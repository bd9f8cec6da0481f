use crate::calendar::{
    Availability, CalendarCell, DayFlags, MonthGrid, MonthView, SavedSelection, Selection,
    SelectionMode, TapOutcome, YearMonth, GRID_HEIGHT, GRID_WIDTH,
};
use crate::locale::Locale;
use crate::theme::{
    calendar::MONTH_STYLE,
    picker::{SAVE_DISABLED_STYLE, SAVE_READY_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use std::marker::PhantomData;
use time::{Date, Duration, Weekday};

const SHEET_WIDTH: u16 = GRID_WIDTH + 4;

/*
 * ┌──────────────────────────────── [x] ┐
 * │ <            March 2024           > │
 * │                                     │
 * │  Sun  Mon  Tue  Wed  Thu  Fri  Sat  │
 * │ ─────────────────────────────────── │
 * │   25   26   27   28   29    1    2  │
 * │  ...                                │
 * │                                     │
 * │           [ Select Date ]           │
 * └─────────────────────────────────────┘
 */
const SHEET_HEIGHT: u16 = GRID_HEIGHT + 6;

/// How a picker is set up when it opens
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PickerConfig {
    pub(crate) mode: SelectionMode,
    pub(crate) save_label: String,
    pub(crate) locale: Locale,
    /// Selection to restore: `YYYY-MM-DD` in single-date mode, or a saved
    /// range (`YYYY-MM-DD,YYYY-MM-DD` or just a start) in range mode
    pub(crate) initial_date: Option<String>,
    pub(crate) week_start: Weekday,
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            mode: SelectionMode::Single,
            save_label: String::from("Save"),
            locale: Locale::English,
            initial_date: None,
            week_start: Weekday::Sunday,
        }
    }
}

/// The state of one open picker session
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker<A> {
    availability: A,
    selection: Selection,
    month: YearMonth,
    cursor: Date,
    today: Date,
    week_start: Weekday,
    locale: Locale,
    save_label: String,
}

impl<A: Availability> DatePicker<A> {
    pub(crate) fn open(config: PickerConfig, availability: A, today: Date) -> DatePicker<A> {
        let selection = match config.mode {
            SelectionMode::Single => {
                Selection::single_from_initial(config.initial_date.as_deref(), &availability)
            }
            SelectionMode::Range => {
                Selection::range_from_initial(config.initial_date.as_deref(), &availability)
            }
        };
        let focus = selection.anchor().unwrap_or(today);
        let month = YearMonth::of(focus);
        let cursor = month.clamp(focus);
        tracing::debug!(mode = ?config.mode, %cursor, "Opening date picker");
        DatePicker {
            availability,
            selection,
            month,
            cursor,
            today,
            week_start: config.week_start,
            locale: config.locale,
            save_label: config.save_label,
        }
    }

    pub(crate) fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.month, self.week_start)
    }

    pub(crate) fn next_month(&mut self) {
        self.show_month(self.month.next());
    }

    pub(crate) fn previous_month(&mut self) {
        self.show_month(self.month.previous());
    }

    // Navigation never touches the selection.  The cursor keeps its day of
    // the month, clamped to the length of the new month.
    fn show_month(&mut self, month: YearMonth) {
        self.month = month;
        let day = self.cursor.day().min(month.month().length(month.year()));
        self.cursor = Date::from_calendar_date(month.year(), month.month(), day)
            .unwrap_or_else(|_| month.first_day());
        tracing::debug!(%month, "Changed displayed month");
    }

    /// Move the cursor by `days`, bringing its month into view
    pub(crate) fn move_cursor(&mut self, days: i64) {
        let Some(date) = self.cursor.checked_add(Duration::days(days)) else {
            return;
        };
        let month = YearMonth::of(date);
        if month.contains(date) {
            self.cursor = date;
            self.month = month;
        }
    }

    // The cursor always stays on the displayed month, even when today lies
    // beyond the navigable years
    pub(crate) fn cursor_to_today(&mut self) {
        self.month = YearMonth::of(self.today);
        self.cursor = self.month.clamp(self.today);
    }

    pub(crate) fn tap(&mut self, day: Date) -> TapOutcome {
        let outcome = self.selection.on_day_tapped(day, &self.availability);
        match outcome {
            TapOutcome::Ignored => tracing::debug!(%day, "Ignoring tap on unavailable day"),
            TapOutcome::Selected(date) => tracing::debug!(%date, "Selected date"),
            TapOutcome::RangeStarted(start) => tracing::debug!(%start, "Started range"),
            TapOutcome::RangeCompleted { start, end } => {
                tracing::debug!(%start, %end, "Completed range");
            }
            TapOutcome::RangeRestarted { start, blocked } => {
                tracing::debug!(%start, %blocked, "Range crosses an unavailable day; restarting");
            }
        }
        outcome
    }

    pub(crate) fn save(&self) -> Option<SavedSelection> {
        self.selection.save()
    }

    pub(crate) fn flags(&self, cell: CalendarCell) -> DayFlags {
        let date = cell.date;
        DayFlags {
            in_current_month: cell.in_current_month,
            available: self.availability.is_available(date),
            selected: self.selection.is_selected(date),
            in_range: self.selection.is_in_range(date),
            cursor: date == self.cursor,
            today: date == self.today,
        }
    }

    pub(crate) fn handle_input(&mut self, input: PickerInput) -> PickerOutput {
        match input {
            PickerInput::Left => self.move_cursor(-1),
            PickerInput::Right => self.move_cursor(1),
            PickerInput::Up => self.move_cursor(-7),
            PickerInput::Down => self.move_cursor(7),
            PickerInput::PreviousMonth => self.previous_month(),
            PickerInput::NextMonth => self.next_month(),
            PickerInput::Today => self.cursor_to_today(),
            PickerInput::Tap => {
                if self.tap(self.cursor) == TapOutcome::Ignored {
                    return PickerOutput::Invalid;
                }
            }
            PickerInput::Save => {
                return match self.save() {
                    Some(saved) => {
                        tracing::info!(%saved, "Saving selection");
                        PickerOutput::Save(saved)
                    }
                    None => PickerOutput::Invalid,
                };
            }
            PickerInput::Close => {
                tracing::info!("Dismissing date picker");
                return PickerOutput::Dismiss;
            }
        }
        PickerOutput::Ok
    }

    fn save_line(&self) -> Line<'static> {
        let style = if self.selection.is_empty() {
            SAVE_DISABLED_STYLE
        } else {
            SAVE_READY_STYLE
        };
        Line::from(Span::styled(format!("[ {} ]", self.save_label), style)).centered()
    }

    fn month_line(&self) -> Line<'static> {
        Line::styled(self.locale.month_title(self.month), MONTH_STYLE).centered()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerInput {
    Left,
    Right,
    Up,
    Down,
    PreviousMonth,
    NextMonth,
    Today,
    Tap,
    Save,
    Close,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerOutput {
    Ok,
    Invalid,
    Save(SavedSelection),
    Dismiss,
}

/// Draws a `DatePicker` as a sheet rising from the bottom of the screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PickerSheet<A> {
    _data: PhantomData<A>,
}

impl<A> PickerSheet<A> {
    pub(crate) fn new() -> PickerSheet<A> {
        PickerSheet { _data: PhantomData }
    }
}

impl<A: Availability> StatefulWidget for PickerSheet<A> {
    type State = DatePicker<A>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [sheet_area] = Layout::horizontal([SHEET_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [sheet_area] = Layout::vertical([SHEET_HEIGHT])
            .flex(Flex::End)
            .areas(sheet_area);
        Clear.render(sheet_area, buf);
        let block = Block::bordered()
            .title(Line::from(" [x] ").alignment(Alignment::Right))
            .style(BASE_STYLE);
        let inner = block.inner(sheet_area);
        block.render(sheet_area, buf);
        let [nav_area, _, grid_area, _, save_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(GRID_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [prev_area, title_area, next_area] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(nav_area);
        Line::raw(" <").render(prev_area, buf);
        state.month_line().render(title_area, buf);
        Line::raw("> ").render(next_area, buf);
        let [grid_area] = Layout::horizontal([GRID_WIDTH])
            .flex(Flex::Center)
            .areas(grid_area);
        let grid = state.grid();
        MonthView::new(&grid, state.locale, |cell| state.flags(cell)).render(grid_area, buf);
        state.save_line().render(save_area, buf);
    }
}
