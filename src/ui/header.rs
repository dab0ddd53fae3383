use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;

const NAV_ITEMS: [&str; 3] = ["Home", "Popular", "Top Rated"];

/// Renders the header: brand, nav tabs, search bar and theme indicator.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title(Span::styled(format!(" {} ", app.route), palette.muted()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Brand
            Constraint::Length(34), // Nav
            Constraint::Min(20),    // Search
            Constraint::Length(10), // Theme
        ])
        .split(inner);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled("🎬 ", Style::default().fg(palette.accent)),
        Span::styled("MovieMuse", Style::default().add_modifier(Modifier::BOLD)),
    ]));
    frame.render_widget(brand, chunks[0]);

    let tabs = Tabs::new(NAV_ITEMS.iter().enumerate().map(|(i, label)| format!("{} {label}", i + 1)))
        .select(app.route.tab())
        .style(palette.muted())
        .highlight_style(palette.heading())
        .divider("|");
    frame.render_widget(tabs, chunks[1]);

    let search = if app.searching {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(palette.accent)),
            Span::raw(app.search_term.clone()),
            Span::styled("█", Style::default().fg(palette.accent)),
        ])
    } else {
        Line::from(Span::styled("/ Search for movies...", palette.muted()))
    };
    frame.render_widget(Paragraph::new(search), chunks[2]);

    let theme = Paragraph::new(Span::styled(
        format!("(t) {}", app.theme.mode().label()),
        palette.muted(),
    ));
    frame.render_widget(theme, chunks[3]);
}
