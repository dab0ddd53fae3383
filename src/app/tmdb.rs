//! Read-only client for The Movie Database v3 API.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::app::models::{MovieDetail, MoviePage};
use crate::error::{Error, Result};

/// Substituted whenever a record carries no image path.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Catalog endpoints the screens fetch from.
///
/// Implemented by [`TmdbClient`]; tests swap in canned data.
pub trait Catalog: Send + Sync {
    fn popular(&self, page: u32) -> Result<MoviePage>;
    fn trending(&self, page: u32) -> Result<MoviePage>;
    fn top_rated(&self, page: u32) -> Result<MoviePage>;
    fn search(&self, query: &str, page: u32) -> Result<MoviePage>;
    fn details(&self, id: u64) -> Result<MovieDetail>;
}

/// Builds a full image URL from a TMDb path and size token such as `w500`.
pub fn image_url(base: &str, path: Option<&str>, size: &str) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}{}", base.trim_end_matches('/'), size, path),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self::with_http(http, api_key, base_url))
    }

    pub fn with_http(http: reqwest::blocking::Client, api_key: &str, base_url: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL; the API key always goes first.
    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key)
        );
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: &str) -> Result<T> {
        let result = self.fetch(endpoint, url);
        if let Err(e) = &result {
            tracing::error!(endpoint, error = %e, "TMDb request failed");
        }
        result
    }

    fn fetch<T: DeserializeOwned>(&self, endpoint: &'static str, url: &str) -> Result<T> {
        tracing::debug!(endpoint, "TMDb request");

        let response = self.http.get(url).send()?;
        if !response.status().is_success() {
            return Err(Error::Status {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| Error::Parse {
            endpoint,
            message: e.to_string(),
        })
    }

    fn list(&self, endpoint: &'static str, path: &str, page: u32) -> Result<MoviePage> {
        let url = self.endpoint(path, &[("page", page.max(1).to_string())]);
        self.get_json(endpoint, &url)
    }
}

impl Catalog for TmdbClient {
    fn popular(&self, page: u32) -> Result<MoviePage> {
        self.list("popular", "/movie/popular", page)
    }

    fn trending(&self, page: u32) -> Result<MoviePage> {
        self.list("trending", "/trending/movie/day", page)
    }

    fn top_rated(&self, page: u32) -> Result<MoviePage> {
        self.list("top_rated", "/movie/top_rated", page)
    }

    fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        let url = self.endpoint(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("page", page.max(1).to_string()),
            ],
        );
        self.get_json("search", &url)
    }

    fn details(&self, id: u64) -> Result<MovieDetail> {
        let url = self.endpoint(
            &format!("/movie/{id}"),
            &[("append_to_response", "credits,videos,similar".to_string())],
        );
        self.get_json("details", &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serves one canned response and reports the request line it saw.
    fn one_shot_server(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            let line = request.lines().next().unwrap_or_default().to_string();
            let _ = sender.send(line);
            stream.write_all(response.as_bytes()).unwrap();
        });

        (format!("http://{addr}"), receiver)
    }

    fn client(base_url: &str) -> TmdbClient {
        let http = reqwest::blocking::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        TmdbClient::with_http(http, "test-key", base_url)
    }

    #[test]
    fn image_url_uses_placeholder_without_path() {
        assert_eq!(image_url("https://image.tmdb.org/t/p", None, "w500"), PLACEHOLDER_IMAGE);
        assert_eq!(image_url("https://image.tmdb.org/t/p", None, "original"), PLACEHOLDER_IMAGE);
        assert_eq!(image_url("https://image.tmdb.org/t/p", Some(""), "w185"), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn image_url_joins_base_size_and_path() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p", Some("/abc.jpg"), "w500"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/", Some("/abc.jpg"), "w342"),
            "https://image.tmdb.org/t/p/w342/abc.jpg"
        );
    }

    #[test]
    fn search_encodes_query() {
        let url = client("https://api.themoviedb.org/3/").endpoint(
            "/search/movie",
            &[("query", "Amélie & co".into()), ("page", "2".into())],
        );
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=test-key&query=Am%C3%A9lie%20%26%20co&page=2"
        );
    }

    #[test]
    fn popular_requests_page_and_parses_body() {
        let body = r#"{"page":2,"results":[{"id":550,"title":"Fight Club"}],"total_pages":9,"total_results":170}"#;
        let (base, requests) = one_shot_server("200 OK", body);

        let page = client(&base).popular(2).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.results[0].title, "Fight Club");

        let line = requests.recv().unwrap();
        assert_eq!(line, "GET /movie/popular?api_key=test-key&page=2 HTTP/1.1");
    }

    #[test]
    fn details_appends_credits_videos_and_similar() {
        let (base, requests) = one_shot_server("200 OK", r#"{"id":550,"title":"Fight Club"}"#);

        let movie = client(&base).details(550).unwrap();
        assert_eq!(movie.id, 550);

        let line = requests.recv().unwrap();
        assert_eq!(
            line,
            "GET /movie/550?api_key=test-key&append_to_response=credits%2Cvideos%2Csimilar HTTP/1.1"
        );
    }

    #[test]
    fn non_success_status_is_an_error() {
        let (base, _requests) = one_shot_server("500 Internal Server Error", "");

        let err = client(&base).trending(1).unwrap_err();
        assert!(matches!(
            err,
            Error::Status {
                endpoint: "trending",
                status: 500
            }
        ));
    }

    #[test]
    fn unexpected_body_is_a_parse_error() {
        let (base, _requests) = one_shot_server("200 OK", r#"{"results": "nope"}"#);

        let err = client(&base).top_rated(1).unwrap_err();
        assert!(matches!(err, Error::Parse { endpoint: "top_rated", .. }));
    }
}
