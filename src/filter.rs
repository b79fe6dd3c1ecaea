//! Genre and title filtering over a catalog.

use std::sync::Arc;

use once_cell::unsync::OnceCell;

use crate::catalog::{Catalog, ContentItem, ContentType};

/// Sentinel genre that selects the whole catalog
pub const ALL_GENRES: &str = "All";

pub struct FilterEngine {
    catalog: Arc<Catalog>,
    series_genres: OnceCell<Vec<String>>,
    movie_genres: OnceCell<Vec<String>>,
}

impl FilterEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            series_genres: OnceCell::new(),
            movie_genres: OnceCell::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// "All" followed by every genre of `content_type`, deduplicated and sorted.
    pub fn unique_genres(&self, content_type: ContentType) -> &[String] {
        let cell = match content_type {
            ContentType::Series => &self.series_genres,
            ContentType::Movie => &self.movie_genres,
        };
        cell.get_or_init(|| collect_genres(self.catalog.items(content_type)))
    }

    /// Whole catalog for "All", otherwise items tagged with `genre`, in catalog order.
    pub fn apply_filter(&self, content_type: ContentType, genre: &str) -> Vec<&ContentItem> {
        let items = self.catalog.items(content_type);
        if genre == ALL_GENRES {
            return items.iter().collect();
        }
        items.iter().filter(|item| item.has_genre(genre)).collect()
    }

    /// Case-insensitive substring match on titles. An empty query matches everything.
    pub fn apply_search(&self, content_type: ContentType, query: &str) -> Vec<&ContentItem> {
        let needle = query.trim().to_lowercase();
        self.catalog
            .items(content_type)
            .iter()
            .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Genre to apply for a requested value, falling back to "All" when it is unknown.
    pub fn resolve_genre<'a>(&'a self, content_type: ContentType, requested: Option<&str>) -> &'a str {
        let genres = self.unique_genres(content_type);
        match requested {
            Some(wanted) => match genres.iter().find(|g| g.as_str() == wanted) {
                Some(found) => found.as_str(),
                None => {
                    tracing::debug!(
                        "Genre '{}' not in {} catalog, showing all",
                        wanted,
                        content_type
                    );
                    ALL_GENRES
                }
            },
            None => ALL_GENRES,
        }
    }
}

fn collect_genres(items: &[ContentItem]) -> Vec<String> {
    let mut genres: Vec<String> = items
        .iter()
        .flat_map(|item| item.genres.iter().cloned())
        .filter(|g| g != ALL_GENRES)
        .collect();
    genres.sort();
    genres.dedup();
    genres.insert(0, ALL_GENRES.to_string());
    genres
}
