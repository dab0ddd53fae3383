use serde::{Deserialize, Deserializer, Serialize};

/// Number of cast entries shown on the detail screen.
pub const TOP_CAST_LIMIT: usize = 6;
/// Number of similar movies shown on the detail screen.
pub const SIMILAR_LIMIT: usize = 6;

/// Minimal per-movie record used by list and grid views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// One page of a multi-page result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            page: first_page(),
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub type MoviePage = PagedResult<MovieSummary>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Expanded record returned by the details endpoint with credits, videos and
/// similar movies appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub runtime: u32,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub videos: Videos,
    #[serde(default)]
    pub similar: MoviePage,
}

impl MovieDetail {
    /// First crew entry credited as director.
    pub fn director(&self) -> Option<&CrewMember> {
        self.credits.crew.iter().find(|c| c.job == "Director")
    }

    /// First trailer hosted on `site`.
    pub fn trailer(&self, site: &str) -> Option<&Video> {
        self.videos
            .results
            .iter()
            .find(|v| v.kind == "Trailer" && v.site == site)
    }

    pub fn top_cast(&self) -> &[CastMember] {
        let cast = &self.credits.cast;
        &cast[..cast.len().min(TOP_CAST_LIMIT)]
    }

    pub fn similar_movies(&self) -> &[MovieSummary] {
        let similar = &self.similar.results;
        &similar[..similar.len().min(SIMILAR_LIMIT)]
    }

    /// Tagline with blank values treated as absent.
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref().filter(|t| !t.trim().is_empty())
    }
}

fn first_page() -> u32 {
    1
}

/// TMDb sends `null` for some fields the UI treats as plain values.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
