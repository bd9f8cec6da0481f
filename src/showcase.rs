use crate::calendar::{AvailableDates, SavedSelection, SelectionMode, Ymd};
use crate::locale::Locale;
use crate::picker::{DatePicker, PickerConfig};
use crate::theme::{
    showcase::{FOCUSED_BORDER_STYLE, RESULT_STYLE},
    BASE_STYLE, DESCRIPTION_STYLE, TITLE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use time::{Date, Weekday};

const HEADING: &str = "Custom Date Picker Examples";

/// Lines per example card, borders included
const CARD_HEIGHT: u16 = 6;

/// How a saved selection is described on an example's card
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Labeling {
    Date,
    /// Completed ranges read "<prefix> A to B"; a lone start reads "Start: A"
    Range { prefix: &'static str },
}

impl Labeling {
    fn describe(self, saved: SavedSelection) -> String {
        match (self, saved) {
            (
                Labeling::Range { prefix },
                SavedSelection::Range {
                    start,
                    end: Some(end),
                },
            ) => format!("{prefix} {} to {}", Ymd(start), Ymd(end)),
            (Labeling::Range { .. }, SavedSelection::Range { start, end: None }) => {
                format!("Start: {}", Ymd(start))
            }
            (_, saved) => saved.to_string(),
        }
    }
}

/// One configuration of the date picker, as shown on the demo screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Example {
    title: &'static str,
    description: &'static str,
    note: Option<&'static str>,
    result_caption: &'static str,
    button: &'static str,
    labeling: Labeling,
    /// Reopen the picker with the last result preselected
    reseed: bool,
    availability: AvailableDates,
    config: PickerConfig,
    result: String,
}

impl Example {
    pub(crate) fn title(&self) -> &'static str {
        self.title
    }

    pub(crate) fn result(&self) -> &str {
        &self.result
    }

    fn open(&self, today: Date) -> DatePicker<AvailableDates> {
        let mut config = self.config.clone();
        if self.reseed {
            config.initial_date = Some(self.result.clone());
        }
        DatePicker::open(config, self.availability.clone(), today)
    }

    fn record(&mut self, saved: SavedSelection) {
        self.result = self.labeling.describe(saved);
    }

    fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), TITLE_STYLE))
            .border_style(if focused {
                FOCUSED_BORDER_STYLE
            } else {
                BASE_STYLE
            })
            .style(BASE_STYLE);
        let lines = vec![
            Line::styled(self.description, DESCRIPTION_STYLE),
            Line::styled(self.note.unwrap_or_default(), DESCRIPTION_STYLE),
            Line::from_iter([
                Span::styled(format!("{}: ", self.result_caption), BASE_STYLE),
                Span::styled(self.result.clone(), RESULT_STYLE),
            ]),
            Line::raw(if focused {
                format!("[ {} ]  (Enter)", self.button)
            } else {
                format!("[ {} ]", self.button)
            }),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// The demo screen: a column of example cards, one of which has focus
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Showcase {
    today: Date,
    examples: Vec<Example>,
    focused: usize,
}

impl Showcase {
    pub(crate) fn new(today: Date, week_start: Weekday) -> Showcase {
        let next_60_days = AvailableDates::next_days(today, 60);
        let config = |mode, save_label: &str| PickerConfig {
            mode,
            save_label: save_label.to_owned(),
            week_start,
            ..PickerConfig::default()
        };
        let examples = vec![
            Example {
                title: "1. Basic Single Date Selection",
                description: "Simple single date picker with all dates available",
                note: None,
                result_caption: "Selected",
                button: "Select Date",
                labeling: Labeling::Date,
                reseed: false,
                availability: next_60_days.clone(),
                config: config(SelectionMode::Single, "Select Date"),
                result: String::from("No date selected"),
            },
            Example {
                title: "2. Date Range Selection",
                description: "Select start and end dates for a range",
                note: None,
                result_caption: "Selected Range",
                button: "Select Date Range",
                labeling: Labeling::Range { prefix: "From" },
                reseed: false,
                availability: next_60_days.clone(),
                config: config(SelectionMode::Range, "Select Range"),
                result: String::from("No range selected"),
            },
            Example {
                title: "3. Limited Available Dates",
                description: "Only specific dates are available for selection",
                note: Some("Available: Only weekdays in the next 30 days"),
                result_caption: "Selected",
                button: "Select Weekday",
                labeling: Labeling::Date,
                reseed: false,
                availability: AvailableDates::weekdays_within(today, 30),
                config: config(SelectionMode::Single, "Select Weekday"),
                result: String::from("No date selected"),
            },
            Example {
                title: "4. Pre-selected Date",
                description: "Date picker opens with a pre-selected date",
                note: None,
                result_caption: "Selected",
                button: "Change Date",
                labeling: Labeling::Date,
                reseed: true,
                availability: next_60_days.clone(),
                config: config(SelectionMode::Single, "Update Date"),
                result: Ymd(today).to_string(),
            },
            Example {
                title: "5. Custom Locale (Arabic)",
                description: "Date picker with Arabic locale",
                note: None,
                result_caption: "Selected",
                button: "Select Date (Arabic)",
                labeling: Labeling::Date,
                reseed: false,
                availability: next_60_days,
                config: PickerConfig {
                    locale: Locale::Arabic,
                    ..config(SelectionMode::Single, "حفظ التاريخ")
                },
                result: String::from("No date selected"),
            },
            Example {
                title: "6. Weekends Only Range",
                description: "Only weekends are available for range selection",
                note: None,
                result_caption: "Selected",
                button: "Select Weekend Range",
                labeling: Labeling::Range { prefix: "Weekend:" },
                reseed: false,
                availability: AvailableDates::weekends_within(today, 60),
                config: config(SelectionMode::Range, "Select Weekends"),
                result: String::from("No weekend selected"),
            },
        ];
        Showcase {
            today,
            examples,
            focused: 0,
        }
    }

    pub(crate) fn focused(&self) -> &Example {
        &self.examples[self.focused]
    }

    // Returns `false` if already at the last example
    pub(crate) fn focus_next(&mut self) -> bool {
        if self.focused + 1 < self.examples.len() {
            self.focused += 1;
            true
        } else {
            false
        }
    }

    // Returns `false` if already at the first example
    pub(crate) fn focus_previous(&mut self) -> bool {
        if let Some(i) = self.focused.checked_sub(1) {
            self.focused = i;
            true
        } else {
            false
        }
    }

    pub(crate) fn open_focused(&self) -> DatePicker<AvailableDates> {
        tracing::info!(example = self.focused().title(), "Opening picker");
        self.focused().open(self.today)
    }

    pub(crate) fn record(&mut self, saved: SavedSelection) {
        let example = &mut self.examples[self.focused];
        example.record(saved);
        tracing::info!(
            example = example.title(),
            result = example.result(),
            "Recorded selection"
        );
    }

    /// Index of the first card to draw when `cards` cards fit on screen
    fn scroll_offset(&self, cards: usize) -> usize {
        (self.focused + 1).saturating_sub(cards.max(1))
    }
}

impl Widget for &Showcase {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [heading_area, _, cards_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        Line::styled(HEADING, TITLE_STYLE)
            .centered()
            .render(heading_area, buf);
        let fit = usize::from(cards_area.height / CARD_HEIGHT);
        let first = self.scroll_offset(fit);
        let mut y = cards_area.y;
        for (i, example) in self.examples.iter().enumerate().skip(first) {
            if y + CARD_HEIGHT > cards_area.bottom() {
                break;
            }
            let card = Rect {
                x: cards_area.x,
                y,
                width: cards_area.width,
                height: CARD_HEIGHT,
            };
            example.render(card, buf, i == self.focused);
            y += CARD_HEIGHT;
        }
    }
}
