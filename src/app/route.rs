use std::fmt;

use crate::error::Error;

/// A screen address, printed and parsed as a URL-style path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Popular,
    TopRated,
    Search { query: String, page: u32 },
    Movie(u64),
}

impl Route {
    pub fn search(query: impl Into<String>) -> Self {
        Route::Search {
            query: query.into(),
            page: 1,
        }
    }

    /// Parses `/`, `/popular`, `/top-rated`, `/search?q=&page=` and `/movie/:id`.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let input = input.trim();
        let (path, query_string) = match input.split_once('?') {
            Some((path, qs)) => (path, Some(qs)),
            None => (input, None),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match path {
            "/" => Ok(Route::Home),
            "/popular" => Ok(Route::Popular),
            "/top-rated" => Ok(Route::TopRated),
            "/search" => {
                let mut query = String::new();
                let mut page = 1;
                for pair in query_string.unwrap_or_default().split('&') {
                    match pair.split_once('=') {
                        Some(("q", value)) => query = decode(value),
                        Some(("page", value)) => {
                            page = value.parse::<u32>().unwrap_or(1).max(1);
                        }
                        _ => {}
                    }
                }
                Ok(Route::Search { query, page })
            }
            _ => path
                .strip_prefix("/movie/")
                .and_then(|id| id.parse::<u64>().ok())
                .filter(|id| *id > 0)
                .map(Route::Movie)
                .ok_or_else(|| Error::Route(input.to_string())),
        }
    }

    /// Nav tab index for the header, if the route has one.
    pub fn tab(&self) -> Option<usize> {
        match self {
            Route::Home => Some(0),
            Route::Popular => Some(1),
            Route::TopRated => Some(2),
            _ => None,
        }
    }

    /// Search route one page back; `None` on the first page.
    pub fn previous_page(&self) -> Option<Route> {
        match self {
            Route::Search { query, page } if *page > 1 => Some(Route::Search {
                query: query.clone(),
                page: page - 1,
            }),
            _ => None,
        }
    }

    /// Search route one page on; `None` once `total_pages` is reached.
    pub fn next_page(&self, total_pages: u32) -> Option<Route> {
        match self {
            Route::Search { query, page } if *page < total_pages => Some(Route::Search {
                query: query.clone(),
                page: page + 1,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Popular => write!(f, "/popular"),
            Route::TopRated => write!(f, "/top-rated"),
            Route::Search { query, page } => {
                write!(f, "/search?q={}&page={}", urlencoding::encode(query), page)
            }
            Route::Movie(id) => write!(f, "/movie/{id}"),
        }
    }
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    match urlencoding::decode(&value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/popular").unwrap(), Route::Popular);
        assert_eq!(Route::parse("/top-rated/").unwrap(), Route::TopRated);
        assert_eq!(Route::parse("/movie/603").unwrap(), Route::Movie(603));
        assert_eq!(
            Route::parse("/search?q=the%20matrix&page=3").unwrap(),
            Route::Search {
                query: "the matrix".into(),
                page: 3
            }
        );
    }

    #[test]
    fn search_page_defaults_to_one() {
        assert_eq!(Route::parse("/search?q=alien").unwrap(), Route::search("alien"));
        assert_eq!(Route::parse("/search?page=0&q=alien").unwrap(), Route::search("alien"));
        assert_eq!(Route::parse("/search?q=alien&page=x").unwrap(), Route::search("alien"));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(matches!(Route::parse("/tv/1399"), Err(Error::Route(_))));
        assert!(Route::parse("/movie/abc").is_err());
        assert!(Route::parse("/movie/0").is_err());
    }

    #[test]
    fn display_encodes_query() {
        let route = Route::Search {
            query: "amélie & co".into(),
            page: 2,
        };
        let path = route.to_string();
        assert_eq!(path, "/search?q=am%C3%A9lie%20%26%20co&page=2");
        assert_eq!(Route::parse(&path).unwrap(), route);
    }

    #[test]
    fn previous_hidden_on_first_page() {
        assert_eq!(Route::search("heat").previous_page(), None);
    }

    #[test]
    fn next_hidden_on_last_page() {
        let route = Route::Search {
            query: "heat".into(),
            page: 4,
        };
        assert_eq!(route.next_page(4), None);
        assert_eq!(route.next_page(5).unwrap().to_string(), "/search?q=heat&page=5");
    }

    #[test]
    fn paging_keeps_the_query() {
        let route = Route::Search {
            query: "blade runner".into(),
            page: 2,
        };
        assert_eq!(
            route.previous_page(),
            Some(Route::Search {
                query: "blade runner".into(),
                page: 1
            })
        );
        assert_eq!(
            route.next_page(3),
            Some(Route::Search {
                query: "blade runner".into(),
                page: 3
            })
        );
    }

    #[test]
    fn only_search_routes_page() {
        assert_eq!(Route::Popular.next_page(10), None);
        assert_eq!(Route::Movie(1).previous_page(), None);
    }
}
