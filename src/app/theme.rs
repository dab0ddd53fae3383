//! Dark/light palette with the preference persisted across sessions.
//!
//! The preference lives in a small JSON file under the data dir
//! (`~/.local/share/moviemuse/prefs.json` or the platform equivalent).

use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::config::APP_DIR;

const FILE_NAME: &str = "prefs.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Ask the OS which appearance it prefers. Anything but light means dark.
    pub fn system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                background: Color::Rgb(17, 19, 24),
                text: Color::Rgb(230, 232, 236),
                muted: Color::Rgb(140, 146, 158),
                accent: Color::Rgb(229, 57, 53),
                highlight: Color::Rgb(44, 48, 58),
                rating: Color::Rgb(250, 204, 21),
                error: Color::Rgb(239, 83, 80),
            },
            ThemeMode::Light => Palette {
                background: Color::Rgb(250, 250, 252),
                text: Color::Rgb(24, 26, 32),
                muted: Color::Rgb(96, 102, 114),
                accent: Color::Rgb(198, 40, 40),
                highlight: Color::Rgb(226, 230, 238),
                rating: Color::Rgb(180, 130, 0),
                error: Color::Rgb(183, 28, 28),
            },
        }
    }
}

/// Colours every screen draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub rating: Color,
    pub error: Color,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    theme: ThemeMode,
}

/// Current theme, written back to disk on every change.
#[derive(Debug)]
pub struct ThemeStore {
    mode: ThemeMode,
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// Stored preference if any, otherwise whatever `system` reports.
    pub fn load(path: Option<PathBuf>, system: impl FnOnce() -> ThemeMode) -> Self {
        let stored = path.as_deref().and_then(read_preference);
        let mode = stored.unwrap_or_else(system);
        tracing::debug!(theme = mode.label(), stored = stored.is_some(), "theme loaded");
        Self { mode, path }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        self.mode.palette()
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.save();
    }

    /// Errors are logged but not propagated.
    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&Preferences { theme: self.mode }) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save theme preference: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize theme preference: {e}"),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join(FILE_NAME))
    }
}

fn read_preference(path: &Path) -> Option<ThemeMode> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str::<Preferences>(&content)
        .map(|p| p.theme)
        .ok()
}
