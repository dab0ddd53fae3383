use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

use crate::app::theme::Palette;
use crate::config::API_KEY_ENV;

/// Centered message panel shared by the failure and empty states.
fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    title_style: Style,
    palette: &Palette,
) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(title.to_string(), title_style)),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), palette.muted())),
        Line::from(""),
        Line::from(Span::styled(
            "Press (H) to go back to Home",
            Style::default().fg(palette.text),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(palette.muted()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Renders the generic failure panel.
pub fn render_error(frame: &mut Frame, area: Rect, title: &str, message: &str, palette: &Palette) {
    let title_style = Style::default()
        .fg(palette.error)
        .add_modifier(Modifier::BOLD);
    render_panel(frame, area, title, message, title_style, palette);
}

/// Renders the "nothing matched" panel.
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str, palette: &Palette) {
    let title_style = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);
    render_panel(frame, area, title, message, title_style, palette);
}

/// Renders missing API key error with big text
pub fn render_missing_api_key(frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Big text
            Constraint::Min(5),    // Instructions
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(palette.error).add_modifier(Modifier::BOLD))
        .lines(vec!["API KEY".into(), "REQUIRED!".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let instructions = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Please set your TMDb API key to browse movies",
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1. Get a free key at: https://www.themoviedb.org/settings/api",
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            format!("2. Set environment variable: export {API_KEY_ENV}=your_key_here"),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            "   or put it in tmdb.api_key in config.toml",
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            "3. Restart the application",
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled("Press (q) to quit", palette.muted())),
    ];

    let instructions_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL).border_style(palette.muted()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(instructions_paragraph, chunks[1]);
}
