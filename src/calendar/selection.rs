use super::availability::{first_unavailable, is_range_available, Availability};
use super::util::{parse_ymd, Ymd};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::Date;

/// Whether a picker selects one date or a span of dates
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// The dates currently chosen in a picker.
///
/// For `Range`, `end` is only ever set alongside `start`, is strictly after
/// it, and every date from `start` through `end` was available when the range
/// was completed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Selection {
    Single {
        selected: Option<Date>,
    },
    Range {
        start: Option<Date>,
        end: Option<Date>,
    },
}

/// What a tap on a day did to the selection
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum TapOutcome {
    /// The day is not available; nothing changed
    Ignored,
    Selected(Date),
    RangeStarted(Date),
    RangeCompleted {
        start: Date,
        end: Date,
    },
    /// The span from the old start to the tapped day contains `blocked`, an
    /// unavailable date, so the tapped day became the new start instead
    RangeRestarted {
        start: Date,
        blocked: Date,
    },
}

impl Selection {
    pub(crate) fn empty(mode: SelectionMode) -> Selection {
        match mode {
            SelectionMode::Single => Selection::Single { selected: None },
            SelectionMode::Range => Selection::Range {
                start: None,
                end: None,
            },
        }
    }

    /// Create a single-date selection from an optional `YYYY-MM-DD` string.
    ///
    /// No string means nothing is selected.  A string that does not parse
    /// falls back to the earliest available date, if `avail` knows one.
    pub(crate) fn single_from_initial<A: Availability + ?Sized>(
        initial: Option<&str>,
        avail: &A,
    ) -> Selection {
        let selected = initial.and_then(|s| match parse_ymd(s) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::warn!(
                    initial = s,
                    error = %e,
                    "Unparseable initial date; using earliest available date"
                );
                avail.earliest()
            }
        });
        Selection::Single { selected }
    }

    /// Create a range selection from an optional saved-range string.
    ///
    /// A completed range is restored only if all of it is available, and a
    /// lone start only if that date is available; anything else leaves the
    /// range empty.
    pub(crate) fn range_from_initial<A: Availability + ?Sized>(
        initial: Option<&str>,
        avail: &A,
    ) -> Selection {
        let empty = Selection::empty(SelectionMode::Range);
        let Some(s) = initial else {
            return empty;
        };
        match s.parse::<SavedSelection>() {
            Ok(SavedSelection::Range {
                start,
                end: Some(end),
            }) if is_range_available(avail, start, end) => Selection::Range {
                start: Some(start),
                end: Some(end),
            },
            Ok(SavedSelection::Single(start) | SavedSelection::Range { start, end: None })
                if avail.is_available(start) =>
            {
                Selection::Range {
                    start: Some(start),
                    end: None,
                }
            }
            Ok(_) => {
                tracing::warn!(initial = s, "Initial range is not available; starting empty");
                empty
            }
            Err(e) => {
                tracing::warn!(
                    initial = s,
                    error = %e,
                    "Unparseable initial range; starting empty"
                );
                empty
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(
            self,
            Selection::Single { selected: None } | Selection::Range { start: None, .. }
        )
    }

    /// The earliest selected date, if any
    pub(crate) fn anchor(&self) -> Option<Date> {
        match *self {
            Selection::Single { selected } => selected,
            Selection::Range { start, .. } => start,
        }
    }

    /// Apply a tap on `day`, subject to `avail`
    pub(crate) fn on_day_tapped<A: Availability + ?Sized>(
        &mut self,
        day: Date,
        avail: &A,
    ) -> TapOutcome {
        if !avail.is_available(day) {
            return TapOutcome::Ignored;
        }
        match self {
            Selection::Single { selected } => {
                *selected = Some(day);
                TapOutcome::Selected(day)
            }
            Selection::Range { start, end } => match (*start, *end) {
                (Some(s), None) if day > s => {
                    if let Some(blocked) = first_unavailable(avail, s, day) {
                        *start = Some(day);
                        TapOutcome::RangeRestarted {
                            start: day,
                            blocked,
                        }
                    } else {
                        *end = Some(day);
                        TapOutcome::RangeCompleted { start: s, end: day }
                    }
                }
                _ => {
                    *start = Some(day);
                    *end = None;
                    TapOutcome::RangeStarted(day)
                }
            },
        }
    }

    /// Returns `true` if `date` is the selected date or one of the range's
    /// endpoints
    pub(crate) fn is_selected(&self, date: Date) -> bool {
        match *self {
            Selection::Single { selected } => selected == Some(date),
            Selection::Range { start, end } => start == Some(date) || end == Some(date),
        }
    }

    /// Returns `true` if `date` lies strictly between the endpoints of a
    /// completed range
    pub(crate) fn is_in_range(&self, date: Date) -> bool {
        matches!(
            *self,
            Selection::Range { start: Some(s), end: Some(e) } if s < date && date < e
        )
    }

    /// The result to hand back on save, or `None` if there is nothing to save
    pub(crate) fn save(&self) -> Option<SavedSelection> {
        match *self {
            Selection::Single { selected } => selected.map(SavedSelection::Single),
            Selection::Range { start, end } => {
                start.map(|start| SavedSelection::Range { start, end })
            }
        }
    }
}

/// A saved selection.
///
/// Displays as `YYYY-MM-DD` for a single date and as `YYYY-MM-DD,YYYY-MM-DD`
/// for a completed range; a range with only a start displays as just the
/// start.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum SavedSelection {
    Single(Date),
    Range { start: Date, end: Option<Date> },
}

impl fmt::Display for SavedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SavedSelection::Single(date) | SavedSelection::Range { start: date, end: None } => {
                write!(f, "{}", Ymd(date))
            }
            SavedSelection::Range {
                start,
                end: Some(end),
            } => write!(f, "{},{}", Ymd(start), Ymd(end)),
        }
    }
}

impl FromStr for SavedSelection {
    type Err = ParseSelectionError;

    /// Parses the comma-joined form.  A lone date parses as `Single`, since
    /// the string carries no record of which kind of picker produced it.
    fn from_str(s: &str) -> Result<SavedSelection, ParseSelectionError> {
        match s.split_once(',') {
            None => Ok(SavedSelection::Single(parse_date(s)?)),
            Some((start, end)) => {
                let start = parse_date(start)?;
                let end = parse_date(end)?;
                if end <= start {
                    return Err(ParseSelectionError::Backwards);
                }
                Ok(SavedSelection::Range {
                    start,
                    end: Some(end),
                })
            }
        }
    }
}

fn parse_date(s: &str) -> Result<Date, ParseSelectionError> {
    parse_ymd(s).map_err(|source| ParseSelectionError::Date {
        value: s.to_owned(),
        source,
    })
}

#[derive(Debug, Error)]
pub(crate) enum ParseSelectionError {
    #[error("invalid date {value:?}")]
    Date {
        value: String,
        source: time::error::Parse,
    },
    #[error("range end does not come after range start")]
    Backwards,
}
