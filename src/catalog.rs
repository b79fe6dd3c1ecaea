//! Read-only catalog of series and movies.
//!
//! Item ids are array positions, assigned when the catalog is built. Nothing
//! persisted ever stores an item itself, only its `(ContentType, id)` pair.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::BrowseError;
use crate::state::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Series,
    Movie,
}

impl ContentType {
    pub fn all() -> &'static [ContentType] {
        &[ContentType::Series, ContentType::Movie]
    }

    /// Stored form, used in `lastDetailType` and watch-later ids
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Series => "series",
            ContentType::Movie => "movie",
        }
    }

    /// Heading used for the catalog section
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Series => "Series",
            ContentType::Movie => "Movies",
        }
    }

    /// The catalog section that lists this kind of content
    pub fn section(&self) -> Section {
        match self {
            ContentType::Series => Section::Series,
            ContentType::Movie => Section::Movies,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "series" => Ok(ContentType::Series),
            "movie" | "movies" => Ok(ContentType::Movie),
            other => Err(BrowseError::UnknownContentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub link: String,
}

/// What can be played for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Media {
    Episodes(Vec<Episode>),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub id: usize,
    pub title: String,
    pub image: String,
    pub description: String,
    pub genres: Vec<String>,
    pub media: Media,
}

impl ContentItem {
    pub fn content_type(&self) -> ContentType {
        match self.media {
            Media::Episodes(_) => ContentType::Series,
            Media::Link(_) => ContentType::Movie,
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    Announcement,
    Update,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub image: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: NewsKind,
}

/// A home-page pointer into the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedRef {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub id: usize,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    #[serde(default)]
    pub news_feed: Vec<NewsItem>,
    #[serde(default)]
    pub featured_content: Vec<FeaturedRef>,
}

#[derive(Debug, Deserialize)]
struct SeriesRecord {
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    episodes: Vec<Episode>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    genres: Vec<String>,
    link: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    series: Vec<SeriesRecord>,
    #[serde(default)]
    movies: Vec<MovieRecord>,
    #[serde(default)]
    home: HomeFeed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    series: Vec<ContentItem>,
    movies: Vec<ContentItem>,
    home: HomeFeed,
}

impl Catalog {
    /// Builds a catalog, renumbering every item by its position.
    pub fn new(series: Vec<ContentItem>, movies: Vec<ContentItem>, home: HomeFeed) -> Self {
        let renumber = |items: Vec<ContentItem>| -> Vec<ContentItem> {
            items
                .into_iter()
                .enumerate()
                .map(|(id, item)| ContentItem { id, ..item })
                .collect()
        };
        Self {
            series: renumber(series),
            movies: renumber(movies),
            home,
        }
    }

    /// Parses `{ "series": [...], "movies": [...], "home": {...} }`.
    pub fn from_json(json: &str) -> Result<Self, BrowseError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let series = file
            .series
            .into_iter()
            .map(|r| ContentItem {
                id: 0,
                title: r.title,
                image: r.image,
                description: r.description,
                genres: r.genres,
                media: Media::Episodes(r.episodes),
            })
            .collect();
        let movies = file
            .movies
            .into_iter()
            .map(|r| ContentItem {
                id: 0,
                title: r.title,
                image: r.image,
                description: r.description,
                genres: r.genres,
                media: Media::Link(r.link),
            })
            .collect();
        Ok(Self::new(series, movies, file.home))
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn items(&self, content_type: ContentType) -> &[ContentItem] {
        match content_type {
            ContentType::Series => &self.series,
            ContentType::Movie => &self.movies,
        }
    }

    pub fn get(&self, content_type: ContentType, id: usize) -> Option<&ContentItem> {
        self.items(content_type).get(id)
    }

    pub fn home(&self) -> &HomeFeed {
        &self.home
    }
}

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog::new(builtin_series(), builtin_movies(), builtin_home()))
});

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn drive(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/preview", file_id)
}

fn series_item(
    title: &str,
    image: &str,
    description: &str,
    genres: &[&str],
    episodes: &[&str],
) -> ContentItem {
    let episodes = episodes
        .iter()
        .enumerate()
        .map(|(i, file_id)| Episode {
            title: format!("Episode {}", i + 1),
            link: drive(file_id),
        })
        .collect();
    ContentItem {
        id: 0,
        title: title.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        genres: strings(genres),
        media: Media::Episodes(episodes),
    }
}

fn movie_item(title: &str, image: &str, description: &str, genres: &[&str], file_id: &str) -> ContentItem {
    ContentItem {
        id: 0,
        title: title.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        genres: strings(genres),
        media: Media::Link(drive(file_id)),
    }
}

fn builtin_series() -> Vec<ContentItem> {
    vec![
        series_item(
            "Bleach:TYBW P2",
            "Images/cour2.jpeg",
            "A battle for the soul of the universe continues.",
            &["Action", "Fantasy", "Anime"],
            &[
                "10D0xtKf_CPz5ODJAiX2A5wfyCg57NcIg",
                "1-K6_2qaz1ZCz7u54FSnNX-hPq3qbqmZf",
                "1-TQNzstys6szmuu-5iPmnxmZ6-oznFc2",
            ],
        ),
        series_item(
            "Konosuba (s1)",
            "Images/Cover4.jpg",
            "An intergalactic adventure across unknown planets.",
            &["Comedy", "Fantasy", "Isekai", "Anime"],
            &[
                "110UyhRjYnSOomo3-9Wh30BZonjVHr7Nu",
                "1128cXGsLQ_wUcjls8hcZbfy-YbeRwChc",
                "110VFc93Wq49TvnsWq9AclCCsyt5scLSC",
                "119B_PFF3wtTyQMu3pu4-rBpN1rrfI7dR",
                "116FV6qv7Hjdpkj4v7deuoactP-ee-T9A",
                "11A96GHkRYHQ1uwRwa4eMiVBxbqM5YcmA",
                "11TiSpcFJr2N8r7GPyIGgmgy2tHfnQTtL",
                "11tAEoUZsUeQa4ja3-Nnt76nOKR2_w5wa",
                "11V8IleXjjcnlUAparkf44XBFEUwxK8Ou",
                "11uRZmLQxY52jeIsQKiw6vf2d1jTiCBlr",
            ],
        ),
    ]
}

fn builtin_movies() -> Vec<ContentItem> {
    vec![
        movie_item(
            "Your Name(sub)",
            "Images/Cover3.jpeg",
            "A beautiful romantic fantasy that transcends time and space.",
            &["Animation", "Romance", "Fantasy", "Drama"],
            "10e007gPw7-zykD4XnHU_v_HV3mS7Y72Y",
        ),
        movie_item(
            "The Life List",
            "Images/Cover1.jpeg",
            "After her mother's passing Alex is forced to complete a list she compiled when she was 13 \
             only so she could have some of her mother's inheritance, but on her Journey she finds \
             secrets about herself.",
            &["Drama", "Family", "Adventure"],
            "12tRqoJ9sXycE7RODnlxu11HVR7wcZbtL",
        ),
        movie_item(
            "Power Rangers",
            "Images/Cover2.jpeg",
            "Five ordinary teens must become something extraordinary when they learn that their small \
             town of Angel Grove, and the world, is about to be annihilated by an alien threat. Chosen \
             by destiny, our heroes quickly discover they are the only ones who can save the planet.",
            &["Action", "Sci-Fi", "Adventure"],
            "17looZTle9cX9De1f6gN5QUcBhopDoKvx",
        ),
    ]
}

fn builtin_home() -> HomeFeed {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    HomeFeed {
        news_feed: vec![
            NewsItem {
                id: 1,
                title: "New Movie Release: The Last Stand".to_string(),
                content: "Check out the latest action-packed movie now available in our Movies section!"
                    .to_string(),
                image: "https://via.placeholder.com/600x400/2b3c57/ffffff?text=New+Release".to_string(),
                date: date(2023, 11, 15),
                kind: NewsKind::Announcement,
            },
            NewsItem {
                id: 2,
                title: "Season 3 of Shadow Hunters Now Available".to_string(),
                content: "All episodes of the popular series are now streaming in our Series section."
                    .to_string(),
                image: "https://via.placeholder.com/600x400/4a6fa5/ffffff?text=New+Season".to_string(),
                date: date(2023, 11, 10),
                kind: NewsKind::Update,
            },
            NewsItem {
                id: 3,
                title: "Weekly Movie Recommendation".to_string(),
                content: "This week we recommend 'The Dark Knight', a masterpiece of superhero cinema."
                    .to_string(),
                image: "https://via.placeholder.com/600x400/5a9bd8/ffffff?text=Recommendation"
                    .to_string(),
                date: date(2023, 11, 5),
                kind: NewsKind::Recommendation,
            },
        ],
        featured_content: vec![
            FeaturedRef {
                content_type: ContentType::Movie,
                id: 0,
                title: "Featured Movie of the Week".to_string(),
            },
            FeaturedRef {
                content_type: ContentType::Series,
                id: 0,
                title: "Featured Series of the Month".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_follow_position() {
        let catalog = Catalog::builtin();
        for ct in ContentType::all() {
            for (i, item) in catalog.items(*ct).iter().enumerate() {
                assert_eq!(item.id, i);
                assert_eq!(item.content_type(), *ct);
            }
        }
        assert_eq!(catalog.items(ContentType::Series).len(), 2);
        assert_eq!(catalog.items(ContentType::Movie).len(), 3);
    }

    #[test]
    fn from_json_assigns_ids_and_defaults_genres() {
        let json = r#"{
            "series": [{"title": "A", "episodes": [{"title": "E1", "link": "l1"}]}],
            "movies": [
                {"title": "M0", "link": "m0", "genres": ["Drama"]},
                {"title": "M1", "link": "m1"}
            ],
            "home": {"featuredContent": [{"type": "movie", "id": 1, "title": "Pick"}]}
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let m1 = catalog.get(ContentType::Movie, 1).unwrap();
        assert_eq!(m1.id, 1);
        assert!(m1.genres.is_empty());
        assert_eq!(m1.media, Media::Link("m1".to_string()));
        assert_eq!(catalog.home().featured_content[0].content_type, ContentType::Movie);
        assert!(catalog.get(ContentType::Series, 1).is_none());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(BrowseError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn content_type_parses_both_spellings() {
        assert_eq!("movie".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert_eq!("movies".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert!("music".parse::<ContentType>().is_err());
    }
}
