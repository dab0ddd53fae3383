use std::time::Duration;

use image::DynamicImage;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};

use crate::app::query::{Query, ViewState};
use crate::app::tmdb::PLACEHOLDER_IMAGE;
use crate::error::{Error, Result};

/// Poster size requested for the detail screen.
pub const POSTER_SIZE: &str = "w342";

/// Downloads and decodes a poster image.
pub fn download_poster(url: &str, timeout: Duration) -> Result<DynamicImage> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(Error::Status {
            endpoint: "poster",
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes()?;
    Ok(image::load_from_memory(&bytes)?)
}

/// Poster for the movie on screen.
///
/// Without a picker (terminal can't draw images, or posters are disabled)
/// the slot stays empty and the placeholder panel is drawn instead.
pub struct PosterSlot {
    picker: Option<Picker>,
    download: Option<Query<DynamicImage>>,
    pub protocol: Option<StatefulProtocol>,
}

impl PosterSlot {
    pub fn new(picker: Option<Picker>) -> Self {
        Self {
            picker,
            download: None,
            protocol: None,
        }
    }

    pub fn clear(&mut self) {
        self.download = None;
        self.protocol = None;
    }

    /// Starts fetching `url` unless it is the placeholder or images are off.
    pub fn load(&mut self, url: String, timeout: Duration) {
        self.clear();
        if self.picker.is_none() || url == PLACEHOLDER_IMAGE {
            return;
        }
        tracing::debug!(%url, "downloading poster");
        self.download = Some(Query::spawn(move || download_poster(&url, timeout)));
    }

    pub fn is_loading(&self) -> bool {
        self.download
            .as_ref()
            .is_some_and(|d| d.state().is_loading())
    }

    pub fn poll(&mut self) {
        let Some(download) = &mut self.download else {
            return;
        };
        if !download.poll() {
            return;
        }
        if let (ViewState::Success(image), Some(picker)) = (download.state(), &self.picker) {
            self.protocol = Some(picker.new_resize_protocol(image.clone()));
        }
        self.download = None;
    }
}
