use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::format::{format_rating, truncate, year_label};
use crate::app::models::MovieSummary;
use crate::app::theme::Palette;

pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 4;

/// How many cards fit side by side in `width`.
pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Colour for a 0-10 vote average.
pub fn rating_color(score: f32) -> Color {
    if score >= 7.0 {
        Color::Green
    } else if score >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Renders a single movie card: title, release year and rating.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    movie: &MovieSummary,
    selected: bool,
    palette: &Palette,
) {
    let border_style = if selected {
        Style::default().fg(palette.accent)
    } else {
        palette.muted()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(if selected { palette.selected() } else { palette.base() });

    let width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate(&movie.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(year_label(&movie.release_date), palette.muted()),
            Span::raw("  "),
            Span::styled("★ ", Style::default().fg(palette.rating)),
            Span::styled(
                format_rating(movie.vote_average),
                Style::default().fg(rating_color(movie.vote_average)),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Lays cards out left to right, scrolling so `selected` stays visible.
/// Returns the column count used.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[MovieSummary],
    selected: Option<usize>,
    palette: &Palette,
) -> usize {
    let columns = columns_for(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = selected
        .map(|s| (s / columns).saturating_sub(visible_rows - 1))
        .unwrap_or(0);

    for (i, movie) in cards
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
    {
        let row = (i / columns - first_row) as u16;
        let col = (i % columns) as u16;
        let card = Rect {
            x: area.x + col * CARD_WIDTH,
            y: area.y + row * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT,
        };
        if card.bottom() > area.bottom() {
            break;
        }
        render_card(frame, card, movie, selected == Some(i), palette);
    }

    columns
}

/// A titled block holding a card grid.
pub fn render_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    cards: &[MovieSummary],
    selected: Option<usize>,
    palette: &Palette,
) -> usize {
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), palette.heading()))
        .borders(Borders::TOP)
        .border_style(palette.muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_grid(frame, inner, cards, selected, palette)
}
