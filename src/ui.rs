mod footer;
mod header;
mod home;
mod listing;
mod loading;
mod movie_detail;
mod movie_grid;
mod search;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::app::{App, Page};

use footer::render_footer;
use header::render_header;
use home::render_home;
use listing::render_listing;
use movie_detail::render_movie_detail;
use search::render_search;
use status::render_missing_api_key;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let App {
        config,
        page,
        selected,
        throbber,
        poster,
        ..
    } = app;
    let body = chunks[1];
    let columns = match page {
        Page::Home { trending, popular } => {
            render_home(frame, body, trending, popular, *selected, throbber, &palette)
        }
        Page::Popular(query) => render_listing(
            frame,
            body,
            &listing::POPULAR,
            query,
            *selected,
            throbber,
            &palette,
        ),
        Page::TopRated(query) => render_listing(
            frame,
            body,
            &listing::TOP_RATED,
            query,
            *selected,
            throbber,
            &palette,
        ),
        Page::Search {
            query,
            page,
            results,
        } => render_search(
            frame, body, query, *page, results, *selected, throbber, &palette,
        ),
        Page::Movie { detail, .. } => render_movie_detail(
            frame, body, detail, config, poster, *selected, throbber, &palette,
        ),
        Page::MissingApiKey => {
            render_missing_api_key(frame, body, &palette);
            None
        }
    };
    if let Some(columns) = columns {
        app.grid_columns = columns;
    }

    render_footer(frame, app, chunks[2]);
}
