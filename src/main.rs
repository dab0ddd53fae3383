mod app;
use app::App;

mod config;
mod error;
mod logging;
mod ui;

use std::error::Error;
use std::io::{self, Stderr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event::{self, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;

use crate::app::poster::PosterSlot;
use crate::app::route::Route;
use crate::app::theme::{ThemeMode, ThemeStore};
use crate::app::tmdb::{Catalog, TmdbClient};
use crate::config::Config;

/// Browse popular, trending and top rated movies from TMDb.
#[derive(Debug, Parser)]
#[command(name = "moviemuse", version)]
struct Cli {
    /// Screen to open: /, /popular, /top-rated, "/search?q=alien" or /movie/603
    #[arg(default_value = "/")]
    route: String,

    /// Config file to use instead of the one in the user config dir
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let start = Route::parse(&cli.route)?;
    let config = Config::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&Config::data_dir(), &config.log.level)?;

    let catalog: Option<Arc<dyn Catalog>> = match config.api_key() {
        Some(key) => Some(Arc::new(TmdbClient::new(
            key,
            &config.tmdb.base_url,
            config.timeout(),
        )?)),
        None => {
            tracing::warn!("no TMDb API key configured");
            None
        }
    };
    let theme = ThemeStore::load(ThemeStore::default_path(), ThemeMode::system);

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let picker = if config.ui.posters {
        match Picker::from_query_stdio() {
            Ok(picker) => Some(picker),
            Err(e) => {
                tracing::warn!("terminal image support unavailable: {e}");
                None
            }
        }
    } else {
        None
    };

    // create app and run it
    let mut app = App::new(config, catalog, theme, PosterSlot::new(picker), start);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("event loop failed: {e}");
    }
    Ok(result?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::ui(f, app))?;

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                app.on_key(key.code);
            }
        }

        if app.exit {
            return Ok(());
        }
    }
}
