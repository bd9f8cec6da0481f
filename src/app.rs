use crate::calendar::AvailableDates;
use crate::help::Help;
use crate::picker::{DatePicker, PickerInput, PickerOutput, PickerSheet};
use crate::showcase::Showcase;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    showcase: Showcase,
    state: AppState,
}

impl App {
    pub(crate) fn new(showcase: Showcase) -> App {
        App {
            showcase,
            state: AppState::Browsing,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Browsing => match key {
                KeyCode::Char('j') | KeyCode::Down => self.showcase.focus_next(),
                KeyCode::Char('k') | KeyCode::Up => self.showcase.focus_previous(),
                KeyCode::Enter => {
                    self.state = AppState::Picking(self.showcase.open_focused());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Browsing;
                true
            }
            AppState::Picking(picker) => {
                let Some(input) = picker_input(key) else {
                    return false;
                };
                match picker.handle_input(input) {
                    PickerOutput::Ok => true,
                    PickerOutput::Invalid => false,
                    PickerOutput::Save(saved) => {
                        self.showcase.record(saved);
                        self.state = AppState::Browsing;
                        true
                    }
                    PickerOutput::Dismiss => {
                        self.state = AppState::Browsing;
                        true
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

fn picker_input(key: KeyCode) -> Option<PickerInput> {
    match key {
        KeyCode::Char('h') | KeyCode::Left => Some(PickerInput::Left),
        KeyCode::Char('l') | KeyCode::Right => Some(PickerInput::Right),
        KeyCode::Char('k') | KeyCode::Up => Some(PickerInput::Up),
        KeyCode::Char('j') | KeyCode::Down => Some(PickerInput::Down),
        KeyCode::Char('<') | KeyCode::PageUp => Some(PickerInput::PreviousMonth),
        KeyCode::Char('>') | KeyCode::PageDown => Some(PickerInput::NextMonth),
        KeyCode::Char('t') | KeyCode::Home => Some(PickerInput::Today),
        KeyCode::Char(' ') | KeyCode::Enter => Some(PickerInput::Tap),
        KeyCode::Char('s') => Some(PickerInput::Save),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerInput::Close),
        _ => None,
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        self.showcase.render(area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Picking(ref mut picker) = self.state {
            PickerSheet::new().render(area, buf, picker);
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Browsing,
    Helping,
    Picking(DatePicker<AvailableDates>),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    fn app() -> App {
        App::new(Showcase::new(date!(2024 - 03 - 06), Weekday::Sunday))
    }

    fn screen(app: &mut App) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_range_selection_flow() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('j')));
        assert!(app.handle_key(KeyCode::Enter));
        assert!(matches!(app.state, AppState::Picking(_)));
        // Today: 2024-03-06
        assert!(app.handle_key(KeyCode::Char(' ')));
        for _ in 0..4 {
            assert!(app.handle_key(KeyCode::Right));
        }
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Char('s')));
        assert_eq!(app.state, AppState::Browsing);
        assert_eq!(
            app.showcase.focused().result(),
            "From 2024-03-06 to 2024-03-10"
        );
    }

    #[test]
    fn test_save_without_selection_beeps() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Enter));
        assert!(!app.handle_key(KeyCode::Char('s')));
        assert!(matches!(app.state, AppState::Picking(_)));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Browsing);
        assert_eq!(app.showcase.focused().result(), "No date selected");
    }

    #[test]
    fn test_tap_unavailable_beeps() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Left));
        assert!(!app.handle_key(KeyCode::Enter));
    }

    #[test]
    fn test_weekend_range_across_weekdays_restarts() {
        let mut app = app();
        for _ in 0..5 {
            app.handle_key(KeyCode::Char('j'));
        }
        assert_eq!(app.showcase.focused().title(), "6. Weekends Only Range");
        app.handle_key(KeyCode::Enter);
        // 2024-03-09 and 2024-03-17 are a Saturday and a Sunday a week apart
        for _ in 0..3 {
            app.handle_key(KeyCode::Right);
        }
        assert!(app.handle_key(KeyCode::Enter));
        for _ in 0..8 {
            app.handle_key(KeyCode::Right);
        }
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Char('s')));
        assert_eq!(app.showcase.focused().result(), "Start: 2024-03-17");
    }

    #[test]
    fn test_help() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert!(screen(&mut app).iter().any(|ln| ln.contains("Commands")));
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Browsing);
    }

    #[test]
    fn test_render_picker_over_showcase() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        let lines = screen(&mut app);
        assert!(lines[0].contains("Custom Date Picker Examples"));
        assert!(lines.iter().any(|ln| ln.contains("March 2024")));
        assert!(lines.iter().any(|ln| ln.contains("[ 6]")));
        assert!(lines[23].contains('┘'));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
