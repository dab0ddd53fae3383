use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use throbber_widgets_tui::ThrobberState;

use crate::app::models::MoviePage;
use crate::app::query::{Query, ViewState};
use crate::app::theme::Palette;

use super::loading::render_loading;
use super::movie_grid::render_grid;
use super::status::render_error;

/// Fixed copy for a single-list screen.
pub struct ListingText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub failure: &'static str,
}

pub const POPULAR: ListingText = ListingText {
    title: "Popular Movies",
    subtitle: "Discover the most popular movies right now",
    failure: "We couldn't load the popular movies. Please try again later.",
};

pub const TOP_RATED: ListingText = ListingText {
    title: "Top Rated Movies",
    subtitle: "Explore the highest rated movies of all time",
    failure: "We couldn't load the top rated movies. Please try again later.",
};

/// Renders a heading and one card per result.
pub fn render_listing(
    frame: &mut Frame,
    area: Rect,
    text: &ListingText,
    query: &Query<MoviePage>,
    selected: usize,
    throbber: &mut ThrobberState,
    palette: &Palette,
) -> Option<usize> {
    let page = match query.state() {
        ViewState::Loading => {
            render_loading(frame, area, throbber, palette);
            return None;
        }
        ViewState::Error(_) => {
            render_error(frame, area, "Oops! Something went wrong", text.failure, palette);
            return None;
        }
        ViewState::Success(page) => page,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(text.title, palette.heading())),
        Line::from(Span::styled(text.subtitle, palette.muted())),
    ]);
    frame.render_widget(heading, chunks[0]);

    Some(render_grid(
        frame,
        chunks[1],
        &page.results,
        Some(selected),
        palette,
    ))
}
