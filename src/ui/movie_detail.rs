use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};
use throbber_widgets_tui::ThrobberState;

use crate::app::format::{
    format_long_date, format_money, format_rating, format_runtime, release_year,
};
use crate::app::models::MovieDetail;
use crate::app::poster::PosterSlot;
use crate::app::query::{Query, ViewState};
use crate::app::theme::Palette;
use crate::config::Config;

use super::loading::render_loading;
use super::movie_grid::{CARD_HEIGHT, rating_color, render_section};
use super::status::render_error;

const POSTER_WIDTH: u16 = 30;

/// Renders the movie detail screen
#[allow(clippy::too_many_arguments)]
pub fn render_movie_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &Query<MovieDetail>,
    config: &Config,
    poster: &mut PosterSlot,
    selected: usize,
    throbber: &mut ThrobberState,
    palette: &Palette,
) -> Option<usize> {
    let movie = match detail.state() {
        ViewState::Loading => {
            render_loading(frame, area, throbber, palette);
            return None;
        }
        ViewState::Error(_) => {
            render_error(
                frame,
                area,
                "Movie Not Found",
                "We couldn't find the movie you're looking for.",
                palette,
            );
            return None;
        }
        ViewState::Success(movie) => movie,
    };

    let similar = movie.similar_movies();
    let similar_height = if similar.is_empty() {
        0
    } else {
        CARD_HEIGHT + 1
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),               // Detail
            Constraint::Length(similar_height), // Similar movies
        ])
        .split(area);

    let poster_width = if config.ui.posters { POSTER_WIDTH } else { 0 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(poster_width), Constraint::Min(20)])
        .split(rows[0]);

    if config.ui.posters {
        render_poster_section(frame, columns[0], poster, palette);
    }

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title info
            Constraint::Min(5),    // Content
        ])
        .split(columns[1]);

    render_title_section(frame, info[0], movie, palette);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(info[1]);

    render_content_section(frame, content[0], movie, config, palette);
    render_facts_section(frame, content[1], movie, palette);

    if similar.is_empty() {
        return None;
    }
    Some(render_section(
        frame,
        rows[1],
        "Similar Movies",
        similar,
        Some(selected),
        palette,
    ))
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, poster: &mut PosterSlot, palette: &Palette) {
    let poster_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title("Poster");

    if poster.is_loading() {
        let loading_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Downloading poster...",
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
        ];

        let loading_paragraph = Paragraph::new(loading_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(loading_paragraph, area);
    } else if let Some(protocol) = &mut poster.protocol {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
    } else {
        let placeholder_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("No poster available", palette.muted())),
        ];

        let placeholder_paragraph = Paragraph::new(placeholder_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(placeholder_paragraph, area);
    }
}

/// Renders title, tagline and the rating / year / runtime / genre line
fn render_title_section(frame: &mut Frame, area: Rect, movie: &MovieDetail, palette: &Palette) {
    let mut title_line = vec![Span::styled(movie.title.clone(), palette.heading())];
    if let Some(year) = release_year(&movie.release_date) {
        title_line.push(Span::raw(" "));
        title_line.push(Span::styled(format!("({year})"), palette.muted()));
    }

    let mut lines = vec![Line::from(title_line)];

    if let Some(tagline) = movie.tagline() {
        lines.push(Line::from(Span::styled(
            tagline.to_string(),
            palette.muted().add_modifier(Modifier::ITALIC),
        )));
    }

    let mut facts = vec![
        Span::styled("★ ", Style::default().fg(palette.rating)),
        Span::styled(
            format_rating(movie.vote_average),
            Style::default()
                .fg(rating_color(movie.vote_average))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(runtime) = format_runtime(movie.runtime) {
        facts.push(Span::raw(" | "));
        facts.push(Span::raw(runtime));
    }
    for genre in &movie.genres {
        facts.push(Span::raw("  "));
        facts.push(Span::styled(
            format!("[{}]", genre.name),
            Style::default().fg(palette.accent),
        ));
    }
    lines.push(Line::from(facts));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders overview, top cast and trailer
fn render_content_section(
    frame: &mut Frame,
    area: Rect,
    movie: &MovieDetail,
    config: &Config,
    palette: &Palette,
) {
    let mut content = vec![];

    // Overview
    content.push(Line::from(Span::styled("Overview:", palette.heading())));
    let overview = if movie.overview.trim().is_empty() {
        "No overview available."
    } else {
        movie.overview.as_str()
    };
    content.push(Line::from(overview.to_string()));
    content.push(Line::from(""));

    // Cast
    let cast = movie.top_cast();
    if !cast.is_empty() {
        content.push(Line::from(Span::styled("Cast:", palette.heading())));
        for person in cast {
            let mut line = vec![Span::styled(
                format!("  {}", person.name),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if !person.character.is_empty() {
                line.push(Span::styled(format!(" as {}", person.character), palette.muted()));
            }
            content.push(Line::from(line));
        }
        content.push(Line::from(""));
    }

    // Trailer
    if let Some(trailer) = movie.trailer(&config.ui.video_site) {
        content.push(Line::from(Span::styled("Trailer:", palette.heading())));
        content.push(Line::from(vec![
            Span::raw(format!("  {}{}", config.ui.trailer_base_url, trailer.key)),
            Span::styled("  (o) to open", palette.muted()),
        ]));
    }

    let content_paragraph = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(content_paragraph, area);
}

/// Renders the side panel with release date, director, status and money
fn render_facts_section(frame: &mut Frame, area: Rect, movie: &MovieDetail, palette: &Palette) {
    let mut facts = vec![];
    let mut push = |label: &str, value: String| {
        facts.push(Line::from(Span::styled(label.to_string(), palette.muted())));
        facts.push(Line::from(value));
        facts.push(Line::from(""));
    };

    if let Some(date) = format_long_date(&movie.release_date) {
        push("Release Date", date);
    }
    if let Some(director) = movie.director() {
        push("Director", director.name.clone());
    }
    if !movie.status.is_empty() {
        push("Status", movie.status.clone());
    }
    if movie.budget > 0 {
        push("Budget", format_money(movie.budget));
    }
    if movie.revenue > 0 {
        push("Revenue", format_money(movie.revenue));
    }

    let block = Block::default()
        .title(Span::styled(" Movie Details ", palette.heading()))
        .borders(Borders::ALL)
        .border_style(palette.muted());

    frame.render_widget(Paragraph::new(facts).block(block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::tests::detail;
    use crate::app::theme::ThemeMode;
    use crate::ui::tests::buffer_text;

    fn draw(state: ViewState<MovieDetail>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        let mut throbber = ThrobberState::default();
        let mut poster = PosterSlot::new(None);
        let config = Config::default();
        let query = Query::settled(state);
        terminal
            .draw(|f| {
                render_movie_detail(
                    f,
                    f.area(),
                    &query,
                    &config,
                    &mut poster,
                    0,
                    &mut throbber,
                    &ThemeMode::Dark.palette(),
                );
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn shows_derived_fields() {
        let mut movie = detail(129);
        movie.release_date = "2001-07-20".into();
        movie.budget = 19_000_000;
        movie.tagline = Some("The tunnel led Chihiro to a mysterious town.".into());

        let text = draw(ViewState::Success(movie));
        assert!(text.contains("Spirited Away"));
        assert!(text.contains("(2001)"));
        assert!(text.contains("2h 5m"));
        assert!(text.contains("July 20, 2001"));
        assert!(text.contains("Director"));
        assert!(text.contains("Hayao Miyazaki"));
        assert!(text.contains("$19,000,000"));
        assert!(!text.contains("Revenue"));
        assert!(text.contains("mysterious town"));
        assert!(text.contains("https://www.youtube.com/watch?v=ByXuk9QqQkk"));
        assert!(text.contains("Similar Movies"));
        assert!(text.contains("No poster available"));
        assert!(text.contains("No overview available."));
    }

    #[test]
    fn missing_trailer_and_runtime_are_omitted() {
        let mut movie = detail(129);
        movie.runtime = 0;
        movie.videos.results.clear();
        movie.credits.crew.clear();
        movie.similar.results.clear();

        let text = draw(ViewState::Success(movie));
        assert!(!text.contains("Trailer:"));
        assert!(!text.contains("0h"));
        assert!(!text.contains("Director"));
        assert!(!text.contains("Similar Movies"));
    }

    #[test]
    fn failure_shows_not_found_panel() {
        let text = draw(ViewState::Error("Something went wrong".into()));
        assert!(text.contains("Movie Not Found"));
    }
}
