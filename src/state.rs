use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ContentType;
use crate::errors::{BrowseError, StorageError};
use crate::filter::ALL_GENRES;
use crate::storage::KeyValueStore;
use crate::watch_later::WatchLater;

/// Persisted key names
pub mod keys {
    pub const LAST_ACTIVE_SECTION: &str = "lastActiveSection";
    pub const LAST_DETAIL_TYPE: &str = "lastDetailType";
    pub const LAST_DETAIL_INDEX: &str = "lastDetailIndex";
    pub const ACTIVE_GENRE: &str = "activeGenre";
    pub const ORIGIN_SECTION: &str = "originSection";
    pub const SCROLL_POSITION: &str = "scrollPosition";
    pub const WATCH_LATER: &str = "watchLater";

    pub const ALL: &[&str] = &[
        LAST_ACTIVE_SECTION,
        LAST_DETAIL_TYPE,
        LAST_DETAIL_INDEX,
        ACTIVE_GENRE,
        ORIGIN_SECTION,
        SCROLL_POSITION,
        WATCH_LATER,
    ];
}

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    #[default]
    Home,
    Series,
    Movies,
    WatchLater,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Series,
            Section::Movies,
            Section::WatchLater,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Series => "series",
            Section::Movies => "movies",
            Section::WatchLater => "watchLater",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Series => "Series",
            Section::Movies => "Movies",
            Section::WatchLater => "Watch Later",
        }
    }

    /// Catalog listed by this section, if any
    pub fn content_type(&self) -> Option<ContentType> {
        match self {
            Section::Series => Some(ContentType::Series),
            Section::Movies => Some(ContentType::Movie),
            Section::Home | Section::WatchLater => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .iter()
            .find(|section| section.as_str() == s)
            .copied()
            .ok_or_else(|| BrowseError::UnknownSection(s.to_string()))
    }
}

/// Identifies the item an open detail view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRef {
    pub content_type: ContentType,
    pub id: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Section currently shown
    pub active_section: Section,
    /// Open detail view, if any
    pub detail: Option<DetailRef>,
    /// Genre filter for list views; `None` means "All"
    pub active_genre: Option<String>,
    /// Where "back" leads from the open detail view
    pub origin_section: Option<Section>,
    /// Last saved vertical offset, shared by every section
    pub scroll_offset: u32,
}

impl NavigationState {
    pub fn genre_or_all(&self) -> &str {
        self.active_genre.as_deref().unwrap_or(ALL_GENRES)
    }
}

/// Owns the backend and the current `NavigationState`.
///
/// All navigation reads and writes go through here; callers mutate the
/// state with [`StateStore::update`], which persists the result.
pub struct StateStore<S: KeyValueStore> {
    backend: S,
    current: NavigationState,
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(backend: S) -> Self {
        let current = read_navigation(&backend).unwrap_or_default();
        Self { backend, current }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.current
    }

    /// State as last written, or `None` on a first run
    pub fn persisted(&self) -> Option<NavigationState> {
        read_navigation(&self.backend)
    }

    /// Applies `mutate` and writes every navigation key.
    pub fn update<F>(&mut self, mutate: F) -> &NavigationState
    where
        F: FnOnce(&mut NavigationState),
    {
        mutate(&mut self.current);
        if let Err(e) = self.write_navigation() {
            tracing::warn!("Failed to persist navigation state: {}", e);
        }
        &self.current
    }

    pub fn save_scroll(&mut self, offset: u32) {
        self.current.scroll_offset = offset;
        if let Err(e) = self
            .backend
            .set(keys::SCROLL_POSITION, &offset.to_string())
        {
            tracing::warn!("Failed to persist scroll position: {}", e);
        }
    }

    pub fn load_scroll(&self) -> u32 {
        read_scroll(&self.backend)
    }

    pub fn load_watch_later(&self) -> WatchLater {
        let Some(json) = self.backend.get(keys::WATCH_LATER) else {
            return WatchLater::default();
        };
        match WatchLater::from_json(&json) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Ignoring unreadable watch-later list: {}", e);
                WatchLater::default()
            }
        }
    }

    pub fn save_watch_later(&mut self, list: &WatchLater) {
        let result = list
            .to_json()
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set(keys::WATCH_LATER, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to persist watch-later list: {}", e);
        }
    }

    /// Removes every persisted key and resets to the first-run state
    pub fn clear(&mut self) -> Result<(), StorageError> {
        for key in keys::ALL {
            self.backend.remove(key)?;
        }
        self.current = NavigationState::default();
        Ok(())
    }

    fn write_navigation(&mut self) -> Result<(), StorageError> {
        let nav = &self.current;
        self.backend
            .set(keys::LAST_ACTIVE_SECTION, nav.active_section.as_str())?;

        match nav.detail {
            Some(detail) => {
                self.backend
                    .set(keys::LAST_DETAIL_TYPE, detail.content_type.as_str())?;
                self.backend
                    .set(keys::LAST_DETAIL_INDEX, &detail.id.to_string())?;
            }
            None => {
                self.backend.remove(keys::LAST_DETAIL_TYPE)?;
                self.backend.remove(keys::LAST_DETAIL_INDEX)?;
            }
        }

        match &nav.active_genre {
            Some(genre) => self.backend.set(keys::ACTIVE_GENRE, genre)?,
            None => self.backend.remove(keys::ACTIVE_GENRE)?,
        }

        match nav.origin_section {
            Some(origin) => self.backend.set(keys::ORIGIN_SECTION, origin.as_str())?,
            None => self.backend.remove(keys::ORIGIN_SECTION)?,
        }
        Ok(())
    }
}

fn read_navigation<S: KeyValueStore>(backend: &S) -> Option<NavigationState> {
    let raw_section = backend.get(keys::LAST_ACTIVE_SECTION)?;
    let active_section = match raw_section.parse::<Section>() {
        Ok(section) => section,
        Err(e) => {
            tracing::warn!("Ignoring persisted navigation: {}", e);
            return None;
        }
    };

    let detail_type = backend
        .get(keys::LAST_DETAIL_TYPE)
        .and_then(|t| t.parse::<ContentType>().ok());
    let detail_index = backend
        .get(keys::LAST_DETAIL_INDEX)
        .and_then(|i| i.trim().parse::<usize>().ok());
    let detail = match (detail_type, detail_index) {
        (Some(content_type), Some(id)) => Some(DetailRef { content_type, id }),
        _ => None,
    };

    let active_genre = backend
        .get(keys::ACTIVE_GENRE)
        .filter(|g| !g.is_empty() && g != ALL_GENRES);

    let origin_section = backend
        .get(keys::ORIGIN_SECTION)
        .and_then(|s| s.parse::<Section>().ok());

    Some(NavigationState {
        active_section,
        detail,
        active_genre,
        origin_section,
        scroll_offset: read_scroll(backend),
    })
}

fn read_scroll<S: KeyValueStore>(backend: &S) -> u32 {
    backend
        .get(keys::SCROLL_POSITION)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|offset| offset.is_finite() && *offset > 0.0)
        .map(|offset| offset as u32)
        .unwrap_or(0)
}
