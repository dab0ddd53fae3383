use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use throbber_widgets_tui::ThrobberState;
use tui_big_text::{BigText, PixelSize};

use crate::app::home_section;
use crate::app::models::MoviePage;
use crate::app::query::{Query, ViewState, combined};
use crate::app::theme::Palette;

use super::loading::render_loading;
use super::movie_grid::render_section;
use super::status::render_error;

/// Renders the home screen: hero, then trending and popular sections.
///
/// Sections only appear once both fetches have resolved.
pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    trending: &Query<MoviePage>,
    popular: &Query<MoviePage>,
    selected: usize,
    throbber: &mut ThrobberState,
    palette: &Palette,
) -> Option<usize> {
    let (trending, popular) = match combined(trending.state(), popular.state()) {
        ViewState::Loading => {
            render_loading(frame, area, throbber, palette);
            return None;
        }
        ViewState::Error(_) => {
            render_error(
                frame,
                area,
                "Oops! Something went wrong",
                "We couldn't load the movies. Please try again later.",
                palette,
            );
            return None;
        }
        ViewState::Success(pages) => pages,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),         // Hero title
            Constraint::Length(2),         // Hero text
            Constraint::Percentage(50),    // Trending
            Constraint::Percentage(50),    // Popular
        ])
        .split(area);

    let hero = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .lines(vec!["MovieMuse".into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(hero, chunks[0]);

    let welcome = Paragraph::new(vec![
        Line::from("Welcome to MovieMuse"),
        Line::styled(
            "Discover the latest trending movies and find information about your favorite films.",
            palette.muted(),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(welcome, chunks[1]);

    let trending = home_section(trending);
    let popular = home_section(popular);
    let (trending_sel, popular_sel) = if selected < trending.len() {
        (Some(selected), None)
    } else {
        (None, Some(selected - trending.len()))
    };

    let columns = render_section(
        frame,
        chunks[2],
        "Trending Movies",
        trending,
        trending_sel,
        palette,
    );
    render_section(
        frame,
        chunks[3],
        "Popular Movies",
        popular,
        popular_sel,
        palette,
    );

    Some(columns)
}
