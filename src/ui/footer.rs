use crate::app::{App, Page};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if app.searching {
        "(Enter) to search, (Esc) to cancel"
    } else if app.is_loading() {
        "Loading... (b) back, (q) quit"
    } else {
        match app.page {
            Page::MissingApiKey => "(t) theme, (q) quit",
            Page::Search { .. } => {
                "(←↑↓→) select, (Enter) open, (n/p) next/previous page, (/) search, (b) back, (q) quit"
            }
            Page::Movie { .. } => {
                "(←→) similar, (Enter) open, (o) trailer, (b) back, (r) retry, (q) quit"
            }
            _ => "(←↑↓→/hjkl) select, (Enter) open, (1-3) pages, (/) search, (t) theme, (r) retry, (q) quit",
        }
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted());
    let inner = bottom_block.inner(area);
    frame.render_widget(bottom_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(22)])
        .split(inner);

    let instructions = Paragraph::new(Line::from(get_instruction_text(app)));
    frame.render_widget(instructions, chunks[0]);

    let credit = Paragraph::new(Span::styled("Powered by TMDb API", palette.muted()));
    frame.render_widget(credit, chunks[1]);
}
