pub mod format;
pub mod models;
pub mod poster;
pub mod query;
pub mod route;
pub mod theme;
pub mod tmdb;

use std::sync::Arc;

use ratatui::crossterm::event::KeyCode;
use throbber_widgets_tui::ThrobberState;

use crate::app::models::{MovieDetail, MoviePage, MovieSummary, Video};
use crate::app::poster::{POSTER_SIZE, PosterSlot};
use crate::app::query::{Query, ViewState, combined};
use crate::app::route::Route;
use crate::app::theme::ThemeStore;
use crate::app::tmdb::{Catalog, image_url};
use crate::config::Config;

/// Cards per section on the home screen.
pub const HOME_SECTION_LIMIT: usize = 12;

/// Per-route screen state with the fetches it owns.
pub enum Page {
    Home {
        trending: Query<MoviePage>,
        popular: Query<MoviePage>,
    },
    Popular(Query<MoviePage>),
    TopRated(Query<MoviePage>),
    Search {
        query: String,
        page: u32,
        results: Query<MoviePage>,
    },
    Movie {
        id: u64,
        detail: Query<MovieDetail>,
    },
    MissingApiKey,
}

pub struct App {
    pub config: Config,
    catalog: Option<Arc<dyn Catalog>>,
    pub route: Route,
    history: Vec<Route>,
    pub page: Page,
    pub selected: usize,
    /// Columns of the last drawn grid; up/down moves by this much.
    pub grid_columns: usize,
    pub searching: bool,
    pub search_term: String,
    pub theme: ThemeStore,
    pub throbber: ThrobberState,
    pub poster: PosterSlot,
    pub exit: bool,
}

impl App {
    pub fn new(
        config: Config,
        catalog: Option<Arc<dyn Catalog>>,
        theme: ThemeStore,
        poster: PosterSlot,
        start: Route,
    ) -> Self {
        let mut app = Self {
            config,
            catalog,
            route: start.clone(),
            history: Vec::new(),
            page: Page::MissingApiKey,
            selected: 0,
            grid_columns: 1,
            searching: false,
            search_term: String::new(),
            theme,
            throbber: ThrobberState::default(),
            poster,
            exit: false,
        };
        app.open(start);
        app
    }

    /// Go to `route`, remembering where we came from.
    pub fn navigate(&mut self, route: Route) {
        if route != self.route {
            self.history.push(self.route.clone());
        }
        self.open(route);
    }

    pub fn back(&mut self) {
        if let Some(route) = self.history.pop() {
            self.open(route);
        }
    }

    /// Re-run the current route's fetches.
    pub fn reload(&mut self) {
        self.open(self.route.clone());
    }

    fn open(&mut self, route: Route) {
        tracing::info!(route = %route, "navigate");
        self.selected = 0;
        self.poster.clear();
        self.page = self.build_page(&route);
        self.route = route;
    }

    fn build_page(&self, route: &Route) -> Page {
        let Some(catalog) = &self.catalog else {
            return Page::MissingApiKey;
        };

        match route {
            Route::Home => {
                let c = Arc::clone(catalog);
                let trending = Query::spawn(move || c.trending(1));
                let c = Arc::clone(catalog);
                let popular = Query::spawn(move || c.popular(1));
                Page::Home { trending, popular }
            }
            Route::Popular => {
                let c = Arc::clone(catalog);
                Page::Popular(Query::spawn(move || c.popular(1)))
            }
            Route::TopRated => {
                let c = Arc::clone(catalog);
                Page::TopRated(Query::spawn(move || c.top_rated(1)))
            }
            Route::Search { query, page } => {
                let results = if query.trim().is_empty() {
                    Query::settled(ViewState::Success(MoviePage::default()))
                } else {
                    let c = Arc::clone(catalog);
                    let (q, p) = (query.clone(), *page);
                    Query::spawn(move || c.search(&q, p))
                };
                Page::Search {
                    query: query.clone(),
                    page: *page,
                    results,
                }
            }
            Route::Movie(id) => {
                let c = Arc::clone(catalog);
                let id = *id;
                Page::Movie {
                    id,
                    detail: Query::spawn(move || c.details(id)),
                }
            }
        }
    }

    /// Called once per event-loop pass.
    pub fn tick(&mut self) {
        let mut detail_arrived = false;
        match &mut self.page {
            Page::Home { trending, popular } => {
                trending.poll();
                popular.poll();
            }
            Page::Popular(q) | Page::TopRated(q) => {
                q.poll();
            }
            Page::Search { results, .. } => {
                results.poll();
            }
            Page::Movie { detail, .. } => {
                detail_arrived = detail.poll() && detail.state().data().is_some();
            }
            Page::MissingApiKey => {}
        }

        if detail_arrived && self.config.ui.posters {
            if let Some(movie) = self.movie() {
                let url = image_url(
                    &self.config.tmdb.image_base_url,
                    movie.poster_path.as_deref(),
                    POSTER_SIZE,
                );
                let timeout = self.config.timeout();
                self.poster.load(url, timeout);
            }
        }

        self.poster.poll();
        self.throbber.calc_next();
    }

    pub fn is_loading(&self) -> bool {
        match &self.page {
            Page::Home { trending, popular } => {
                combined(trending.state(), popular.state()).is_loading()
            }
            Page::Popular(q) | Page::TopRated(q) => q.state().is_loading(),
            Page::Search { results, .. } => results.state().is_loading(),
            Page::Movie { detail, .. } => detail.state().is_loading(),
            Page::MissingApiKey => false,
        }
    }

    pub fn movie(&self) -> Option<&MovieDetail> {
        match &self.page {
            Page::Movie { detail, .. } => detail.state().data(),
            _ => None,
        }
    }

    pub fn trailer(&self) -> Option<&Video> {
        self.movie()?.trailer(&self.config.ui.video_site)
    }

    pub fn trailer_url(&self, video: &Video) -> String {
        format!("{}{}", self.config.ui.trailer_base_url, video.key)
    }

    /// Cards the selection moves over, in screen order.
    pub fn cards(&self) -> Vec<&MovieSummary> {
        match &self.page {
            Page::Home { trending, popular } => {
                match combined(trending.state(), popular.state()) {
                    ViewState::Success((trending, popular)) => home_section(trending)
                        .iter()
                        .chain(home_section(popular))
                        .collect(),
                    _ => Vec::new(),
                }
            }
            Page::Popular(q) | Page::TopRated(q) => q
                .state()
                .data()
                .map(|p| p.results.iter().collect())
                .unwrap_or_default(),
            Page::Search { results, .. } => results
                .state()
                .data()
                .map(|p| p.results.iter().collect())
                .unwrap_or_default(),
            Page::Movie { .. } => self
                .movie()
                .map(|m| m.similar_movies().iter().collect())
                .unwrap_or_default(),
            Page::MissingApiKey => Vec::new(),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.cards().len();
        if count == 0 {
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, count as isize - 1) as usize;
    }

    fn open_selected(&mut self) {
        let id = self.cards().get(self.selected).map(|m| m.id);
        if let Some(id) = id {
            self.navigate(Route::Movie(id));
        }
    }

    fn total_pages(&self) -> u32 {
        match &self.page {
            Page::Search { results, .. } => {
                results.state().data().map(|p| p.total_pages).unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn next_page(&mut self) {
        if let Some(route) = self.route.next_page(self.total_pages()) {
            self.navigate(route);
        }
    }

    pub fn previous_page(&mut self) {
        if self.total_pages() == 0 {
            return;
        }
        if let Some(route) = self.route.previous_page() {
            self.navigate(route);
        }
    }

    pub fn submit_search(&mut self) {
        let term = self.search_term.trim().to_string();
        self.searching = false;
        if term.is_empty() {
            return;
        }
        self.search_term.clear();
        self.navigate(Route::search(term));
    }

    fn open_trailer(&self) {
        let Some(video) = self.trailer() else {
            return;
        };
        let url = self.trailer_url(video);
        if let Err(e) = open::that(&url) {
            tracing::warn!(%url, "failed to open trailer: {e}");
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if self.searching {
            match code {
                KeyCode::Char(c) => self.search_term.push(c),
                KeyCode::Backspace => {
                    self.search_term.pop();
                }
                KeyCode::Enter => self.submit_search(),
                KeyCode::Esc => {
                    self.searching = false;
                    self.search_term.clear();
                }
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('t') => self.theme.toggle(),
            KeyCode::Char('/') => {
                if !matches!(self.page, Page::MissingApiKey) {
                    self.searching = true;
                }
            }
            KeyCode::Char('1') => self.navigate(Route::Home),
            KeyCode::Char('2') => self.navigate(Route::Popular),
            KeyCode::Char('3') => self.navigate(Route::TopRated),
            KeyCode::Char('H') => self.navigate(Route::Home),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('b') | KeyCode::Esc => self.back(),
            KeyCode::Char('n') => self.next_page(),
            KeyCode::Char('p') => self.previous_page(),
            KeyCode::Char('o') => self.open_trailer(),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(self.grid_columns.max(1) as isize)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-(self.grid_columns.max(1) as isize))
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }
}

/// The slice of a list shown as one home-screen section.
pub fn home_section(page: &MoviePage) -> &[MovieSummary] {
    &page.results[..page.results.len().min(HOME_SECTION_LIMIT)]
}
