use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use throbber_widgets_tui::ThrobberState;

use crate::app::models::MoviePage;
use crate::app::query::{Query, ViewState};
use crate::app::theme::Palette;

use super::loading::render_loading;
use super::movie_grid::render_grid;
use super::status::{render_empty, render_error};

/// Pager labels: "Previous" only past page one, "Next" only before the last
/// page, nothing at all for a single page.
pub fn pagination(page: u32, total_pages: u32) -> Vec<String> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let mut labels = Vec::new();
    if page > 1 {
        labels.push("(p) Previous".to_string());
    }
    labels.push(format!("Page {page} of {total_pages}"));
    if page < total_pages {
        labels.push("(n) Next".to_string());
    }
    labels
}

/// Renders search results with pagination.
#[allow(clippy::too_many_arguments)]
pub fn render_search(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    page: u32,
    results: &Query<MoviePage>,
    selected: usize,
    throbber: &mut ThrobberState,
    palette: &Palette,
) -> Option<usize> {
    let data = match results.state() {
        ViewState::Loading => {
            render_loading(frame, area, throbber, palette);
            return None;
        }
        ViewState::Error(_) => {
            render_error(
                frame,
                area,
                "Search Error",
                "We couldn't load search results. Please try again later.",
                palette,
            );
            return None;
        }
        ViewState::Success(data) if data.is_empty() => {
            render_empty(
                frame,
                area,
                "No results found",
                &format!("We couldn't find any movies matching \"{query}\""),
                palette,
            );
            return None;
        }
        ViewState::Success(data) => data,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(1),    // Results
            Constraint::Length(1), // Pagination
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Search Results", palette.heading())),
        Line::from(Span::styled(
            format!("Found {} results for \"{query}\"", data.total_results),
            palette.muted(),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    let columns = render_grid(frame, chunks[1], &data.results, Some(selected), palette);

    let pager = pagination(page, data.total_pages).join("   ");
    frame.render_widget(
        Paragraph::new(Span::styled(pager, palette.muted())).alignment(Alignment::Center),
        chunks[2],
    );

    Some(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::tests::movie_page;
    use crate::app::theme::ThemeMode;
    use crate::ui::tests::buffer_text;

    fn draw(query: &str, page: u32, results: Query<MoviePage>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut throbber = ThrobberState::default();
        terminal
            .draw(|f| {
                render_search(
                    f,
                    f.area(),
                    query,
                    page,
                    &results,
                    0,
                    &mut throbber,
                    &ThemeMode::Dark.palette(),
                );
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn zero_results_show_the_query() {
        let text = draw(
            "qwertyuiop",
            1,
            Query::settled(ViewState::Success(MoviePage::default())),
        );
        assert!(text.contains("No results found"));
        assert!(text.contains("\"qwertyuiop\""));
        assert!(!text.contains("Search Error"));
    }

    #[test]
    fn failure_shows_error_not_empty_panel() {
        let text = draw(
            "alien",
            1,
            Query::settled(ViewState::Error("Something went wrong".into())),
        );
        assert!(text.contains("Search Error"));
        assert!(!text.contains("No results found"));
    }

    #[test]
    fn results_show_count_and_cards() {
        let mut results = movie_page(4, 3);
        results.total_results = 57;
        let text = draw("alien", 2, Query::settled(ViewState::Success(results)));
        assert!(text.contains("Found 57 results for \"alien\""));
        assert!(text.contains("Movie 4"));
        assert!(text.contains("(p) Previous"));
        assert!(text.contains("Page 2 of 3"));
        assert!(text.contains("(n) Next"));
    }

    #[test]
    fn previous_hidden_on_first_page() {
        assert_eq!(pagination(1, 3), vec!["Page 1 of 3", "(n) Next"]);
    }

    #[test]
    fn next_hidden_on_last_page() {
        assert_eq!(pagination(3, 3), vec!["(p) Previous", "Page 3 of 3"]);
    }

    #[test]
    fn single_page_has_no_pager() {
        assert!(pagination(1, 1).is_empty());
        assert!(pagination(1, 0).is_empty());
    }
}
