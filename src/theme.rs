use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const DESCRIPTION_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) mod calendar {
    use super::*;

    pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const AVAILABLE_STYLE: Style = BASE_STYLE;

    pub(crate) const OUT_OF_MONTH_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const UNAVAILABLE_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const SELECTED_STYLE: Style = Style::new()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    pub(crate) const IN_RANGE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Indexed(24));

    pub(crate) const TODAY_MODIFIER: Modifier = Modifier::UNDERLINED;
}

pub(crate) mod picker {
    use super::*;

    pub(crate) const SAVE_READY_STYLE: Style = Style::new()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    pub(crate) const SAVE_DISABLED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

pub(crate) mod showcase {
    use super::*;

    pub(crate) const FOCUSED_BORDER_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

    pub(crate) const RESULT_STYLE: Style = BASE_STYLE.fg(Color::LightYellow);
}
