use thiserror::Error;

/// Message shown on every failure panel. Details go to the log.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} request failed with status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("could not parse {endpoint} response: {message}")]
    Parse {
        endpoint: &'static str,
        message: String,
    },

    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown route: {0}")]
    Route(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
