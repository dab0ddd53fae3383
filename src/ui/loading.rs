use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::app::theme::Palette;

/// Renders the loading spinner centred in `area`.
pub fn render_loading(frame: &mut Frame, area: Rect, state: &mut ThrobberState, palette: &Palette) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(row);

    let throbber = Throbber::default()
        .label("Loading...")
        .style(palette.muted())
        .throbber_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX);

    frame.render_stateful_widget(throbber, cell, state);
}
