//! Render model shared by every front end.
//!
//! The controller only speaks in [`RenderCommand`]s. A front end either
//! executes them directly or lets [`Screen`] fold them into a snapshot it can
//! draw or serialize.

use serde::Serialize;

use crate::catalog::{ContentType, NewsKind};
use crate::state::Section;

/// Chrome the controller can show or hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    Nav,
    SearchBox(ContentType),
    GenreBar(ContentType),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCard {
    pub content_type: ContentType,
    pub id: usize,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreButton {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayAction {
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub content_type: ContentType,
    pub id: usize,
    pub title: String,
    pub image: String,
    pub description: String,
    pub genres: Vec<String>,
    /// One per episode for series, a single entry for movies
    pub actions: Vec<PlayAction>,
    /// Already in the watch-later list
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchLaterCard {
    pub content_type: ContentType,
    pub id: usize,
    pub title: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsCard {
    pub title: String,
    pub content: String,
    pub image: String,
    pub date: String,
    pub kind: NewsKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCard {
    pub heading: String,
    pub content_type: ContentType,
    pub id: usize,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub news: Vec<NewsCard>,
    pub featured: Vec<FeaturedCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum RenderCommand {
    /// Make `section` the only visible section
    ShowSection { section: Section },
    SetVisible { control: Control, visible: bool },
    RenderList {
        content_type: ContentType,
        cards: Vec<ListCard>,
    },
    ClearList { content_type: ContentType },
    RenderGenreBar {
        content_type: ContentType,
        buttons: Vec<GenreButton>,
    },
    SetSearchText {
        content_type: ContentType,
        text: String,
    },
    RenderDetail { detail: DetailView },
    HideDetail { content_type: ContentType },
    RenderWatchLater { cards: Vec<WatchLaterCard> },
    RenderHome { home: HomeView },
    Notify { notice: Notice },
    ScrollTo { offset: u32 },
    ShowPlayer { link: String },
    HidePlayer,
}

pub trait Renderer {
    fn apply(&mut self, command: RenderCommand);

    /// Current vertical offset of the viewport
    fn scroll_offset(&self) -> u32;
}

/// A value per content type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerType<T> {
    pub series: T,
    pub movie: T,
}

impl<T> PerType<T> {
    pub fn get(&self, content_type: ContentType) -> &T {
        match content_type {
            ContentType::Series => &self.series,
            ContentType::Movie => &self.movie,
        }
    }

    pub fn get_mut(&mut self, content_type: ContentType) -> &mut T {
        match content_type {
            ContentType::Series => &mut self.series,
            ContentType::Movie => &mut self.movie,
        }
    }
}

const MAX_NOTICES: usize = 5;

/// Retained snapshot of everything the controller asked to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub section: Section,
    pub nav_visible: bool,
    pub search_visible: PerType<bool>,
    pub genre_bar_visible: PerType<bool>,
    pub search_text: PerType<String>,
    pub genre_bars: PerType<Vec<GenreButton>>,
    pub lists: PerType<Vec<ListCard>>,
    pub detail: Option<DetailView>,
    pub watch_later: Vec<WatchLaterCard>,
    pub home: HomeView,
    /// Most recent last
    pub notices: Vec<Notice>,
    pub player: Option<String>,
    pub scroll: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            section: Section::Home,
            nav_visible: true,
            search_visible: PerType::default(),
            genre_bar_visible: PerType::default(),
            search_text: PerType::default(),
            genre_bars: PerType::default(),
            lists: PerType::default(),
            detail: None,
            watch_later: Vec::new(),
            home: HomeView::default(),
            notices: Vec::new(),
            player: None,
            scroll: 0,
        }
    }
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted genre button, if any
    pub fn active_genre(&self, content_type: ContentType) -> Option<&str> {
        self.genre_bars
            .get(content_type)
            .iter()
            .find(|b| b.active)
            .map(|b| b.label.as_str())
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }

    /// Number of selectable rows in the visible section
    pub fn row_count(&self) -> usize {
        if let Some(detail) = &self.detail {
            return detail.actions.len();
        }
        match self.section {
            Section::Home => self.home.featured.len(),
            Section::Series => self.lists.series.len(),
            Section::Movies => self.lists.movie.len(),
            Section::WatchLater => self.watch_later.len(),
        }
    }
}

impl Renderer for Screen {
    fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::ShowSection { section } => self.section = section,
            RenderCommand::SetVisible { control, visible } => match control {
                Control::Nav => self.nav_visible = visible,
                Control::SearchBox(ct) => *self.search_visible.get_mut(ct) = visible,
                Control::GenreBar(ct) => *self.genre_bar_visible.get_mut(ct) = visible,
            },
            RenderCommand::RenderList {
                content_type,
                cards,
            } => *self.lists.get_mut(content_type) = cards,
            RenderCommand::ClearList { content_type } => self.lists.get_mut(content_type).clear(),
            RenderCommand::RenderGenreBar {
                content_type,
                buttons,
            } => *self.genre_bars.get_mut(content_type) = buttons,
            RenderCommand::SetSearchText { content_type, text } => {
                *self.search_text.get_mut(content_type) = text
            }
            RenderCommand::RenderDetail { detail } => self.detail = Some(detail),
            RenderCommand::HideDetail { content_type } => {
                if self
                    .detail
                    .as_ref()
                    .is_some_and(|d| d.content_type == content_type)
                {
                    self.detail = None;
                }
            }
            RenderCommand::RenderWatchLater { cards } => self.watch_later = cards,
            RenderCommand::RenderHome { home } => self.home = home,
            RenderCommand::Notify { notice } => {
                self.notices.push(notice);
                if self.notices.len() > MAX_NOTICES {
                    self.notices.remove(0);
                }
            }
            RenderCommand::ScrollTo { offset } => self.scroll = offset,
            RenderCommand::ShowPlayer { link } => self.player = Some(link),
            RenderCommand::HidePlayer => self.player = None,
        }
    }

    fn scroll_offset(&self) -> u32 {
        self.scroll
    }
}

/// Keeps every command in order; handy for asserting what was issued when
#[derive(Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<RenderCommand>,
    scroll: u32,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&RenderCommand) -> bool,
    {
        self.commands.iter().position(predicate)
    }
}

impl Renderer for CommandLog {
    fn apply(&mut self, command: RenderCommand) {
        if let RenderCommand::ScrollTo { offset } = command {
            self.scroll = offset;
        }
        self.commands.push(command);
    }

    fn scroll_offset(&self) -> u32 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_detail_only_hides_matching_type() {
        let mut screen = Screen::new();
        screen.apply(RenderCommand::RenderDetail {
            detail: DetailView {
                content_type: ContentType::Movie,
                id: 0,
                title: "Your Name(sub)".to_string(),
                image: String::new(),
                description: String::new(),
                genres: Vec::new(),
                actions: Vec::new(),
                saved: false,
            },
        });
        screen.apply(RenderCommand::HideDetail {
            content_type: ContentType::Series,
        });
        assert!(screen.detail.is_some());
        screen.apply(RenderCommand::HideDetail {
            content_type: ContentType::Movie,
        });
        assert!(screen.detail.is_none());
    }

    #[test]
    fn notices_are_bounded() {
        let mut screen = Screen::new();
        for i in 0..8 {
            screen.apply(RenderCommand::Notify {
                notice: Notice::info(format!("n{}", i)),
            });
        }
        assert_eq!(screen.notices.len(), MAX_NOTICES);
        assert_eq!(screen.latest_notice().unwrap().message, "n7");
    }

    #[test]
    fn commands_serialize_with_tag() {
        let json = serde_json::to_string(&RenderCommand::ScrollTo { offset: 12 }).unwrap();
        assert_eq!(json, r#"{"command":"scrollTo","offset":12}"#);
    }
}
