//! View/state controller.
//!
//! Decides which section is visible, which filter applies and how to get
//! back to exactly that view after a reload. Every mutating operation
//! persists the navigation state and then saves the scroll position.

use std::sync::Arc;

use crate::catalog::{Catalog, ContentItem, ContentType, Media};
use crate::errors::{BrowseError, StorageError};
use crate::filter::{FilterEngine, ALL_GENRES};
use crate::render::{
    Control, DetailView, FeaturedCard, GenreButton, HomeView, ListCard, NewsCard, Notice,
    PlayAction, RenderCommand, Renderer, WatchLaterCard,
};
use crate::scroll::ScrollDebouncer;
use crate::state::{DetailRef, NavigationState, Section, StateStore};
use crate::storage::KeyValueStore;
use crate::watch_later::{AddOutcome, WatchLater, WatchLaterEntry};

pub struct Controller<S: KeyValueStore, R: Renderer> {
    filters: FilterEngine,
    store: StateStore<S>,
    renderer: R,
    watch_later: WatchLater,
    scroll: ScrollDebouncer,
}

impl<S: KeyValueStore, R: Renderer> Controller<S, R> {
    pub fn new(catalog: Arc<Catalog>, backend: S, renderer: R) -> Self {
        let store = StateStore::new(backend);
        let watch_later = store.load_watch_later();
        Self {
            filters: FilterEngine::new(catalog),
            store,
            renderer,
            watch_later,
            scroll: ScrollDebouncer::default(),
        }
    }

    pub fn with_scroll_debounce(mut self, delay_ms: u64) -> Self {
        self.scroll = ScrollDebouncer::new(delay_ms);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.filters.catalog()
    }

    pub fn filters(&self) -> &FilterEngine {
        &self.filters
    }

    pub fn navigation(&self) -> &NavigationState {
        self.store.navigation()
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn watch_later(&self) -> &[WatchLaterEntry] {
        self.watch_later.list()
    }

    pub fn scroll_pending(&self) -> bool {
        self.scroll.is_pending()
    }

    /// Milliseconds until a pending scroll save is due
    pub fn scroll_due_in(&self, now_ms: u64) -> Option<u64> {
        self.scroll.remaining(now_ms)
    }

    /// Rebuilds the last persisted view. Run once at start.
    pub fn resume(&mut self) {
        let saved_scroll = self.store.load_scroll();

        match self.store.persisted() {
            None => {
                tracing::info!("No saved navigation, starting at home");
                self.activate(Section::Home);
            }
            Some(nav) => match nav.detail {
                Some(DetailRef { content_type, id }) => {
                    tracing::info!("Resuming {} {} detail", content_type, id);
                    // Chrome goes first so no list UI shows before the detail.
                    self.hide_chrome();
                    self.open_detail(content_type, id, nav.origin_section);
                }
                None => {
                    tracing::info!("Resuming {} section", nav.active_section);
                    self.activate(nav.active_section);
                }
            },
        }

        self.emit(RenderCommand::ScrollTo {
            offset: saved_scroll,
        });
        self.save_scroll();
    }

    /// Shows exactly one section and closes any open detail view.
    pub fn activate(&mut self, section: Section) {
        tracing::debug!("Activating {}", section);
        self.emit(RenderCommand::ShowSection { section });
        for ct in ContentType::all() {
            self.emit(RenderCommand::HideDetail { content_type: *ct });
        }

        self.store.update(|nav| {
            nav.active_section = section;
            nav.detail = None;
            nav.origin_section = None;
        });
        self.show_chrome(section);

        match section {
            Section::Series | Section::Movies => {
                if let Some(ct) = section.content_type() {
                    self.emit(RenderCommand::SetSearchText {
                        content_type: ct,
                        text: String::new(),
                    });
                    let requested = self.store.navigation().active_genre.clone();
                    let genre = self
                        .filters
                        .resolve_genre(ct, requested.as_deref())
                        .to_string();
                    self.render_genre_bar(ct, Some(&genre));
                    self.render_filtered(ct, &genre);
                }
            }
            Section::WatchLater => self.render_watch_later(),
            Section::Home => self.render_home(),
        }

        self.emit(RenderCommand::ScrollTo { offset: 0 });
        self.save_scroll();
    }

    /// Applies a genre filter to a list section and clears its search box.
    pub fn select_genre(&mut self, content_type: ContentType, genre: &str) {
        self.ensure_list(content_type);
        let genre = self
            .filters
            .resolve_genre(content_type, Some(genre))
            .to_string();

        self.emit(RenderCommand::SetSearchText {
            content_type,
            text: String::new(),
        });
        self.render_genre_bar(content_type, Some(&genre));
        self.render_filtered(content_type, &genre);

        self.store.update(|nav| {
            nav.active_genre = (genre != ALL_GENRES).then(|| genre.clone());
        });
        self.save_scroll();
    }

    /// Title search. Resets the genre filter; the two never combine.
    pub fn search(&mut self, content_type: ContentType, query: &str) {
        self.ensure_list(content_type);
        let cards = list_cards(&self.filters.apply_search(content_type, query));

        self.emit(RenderCommand::SetSearchText {
            content_type,
            text: query.to_string(),
        });
        let highlight = query.trim().is_empty().then_some(ALL_GENRES);
        self.render_genre_bar(content_type, highlight);
        self.emit(RenderCommand::RenderList {
            content_type,
            cards,
        });

        self.store.update(|nav| nav.active_genre = None);
        self.save_scroll();
    }

    /// Opens the detail view of one item.
    ///
    /// Returns `false` when the item does not exist; the user is notified and
    /// the view falls back to `origin` or the item's own section.
    pub fn open_detail(&mut self, content_type: ContentType, id: usize, origin: Option<Section>) -> bool {
        let catalog = Arc::clone(self.filters.catalog());
        let Some(item) = catalog.get(content_type, id) else {
            let err = BrowseError::StaleReference { content_type, id };
            tracing::warn!("{}", err);
            self.notify(Notice::error(err.user_message()));
            self.activate(origin.unwrap_or_else(|| content_type.section()));
            return false;
        };

        let section = content_type.section();
        self.emit(RenderCommand::ShowSection { section });
        for ct in ContentType::all() {
            if *ct != content_type {
                self.emit(RenderCommand::HideDetail { content_type: *ct });
            }
        }
        self.emit(RenderCommand::ClearList { content_type });
        self.hide_chrome();
        let detail = detail_view(item, self.watch_later.contains(content_type, id));
        self.emit(RenderCommand::RenderDetail { detail });

        self.store.update(|nav| {
            nav.active_section = section;
            nav.detail = Some(DetailRef { content_type, id });
            nav.origin_section = origin;
        });

        self.emit(RenderCommand::ScrollTo { offset: 0 });
        self.save_scroll();
        true
    }

    /// "Back" from a detail view, honouring where it was opened from.
    pub fn close_detail(&mut self, content_type: ContentType) {
        let target = match self.store.navigation().origin_section {
            Some(origin @ (Section::WatchLater | Section::Home)) => origin,
            _ => content_type.section(),
        };
        self.activate(target);
    }

    /// Closes the open detail view if there is one, otherwise returns home.
    pub fn go_back(&mut self) {
        let nav = self.store.navigation();
        let (detail, section) = (nav.detail, nav.active_section);
        match detail {
            Some(detail) => self.close_detail(detail.content_type),
            None if section != Section::Home => self.activate(Section::Home),
            None => {}
        }
    }

    pub fn add_to_watch_later(&mut self, content_type: ContentType, id: usize) -> Option<AddOutcome> {
        let catalog = Arc::clone(self.filters.catalog());
        let Some(item) = catalog.get(content_type, id) else {
            let err = BrowseError::StaleReference { content_type, id };
            tracing::warn!("{}", err);
            self.notify(Notice::error(err.user_message()));
            return None;
        };

        let outcome = self.watch_later.add(item);
        match outcome {
            AddOutcome::AlreadyPresent => {
                self.notify(Notice::info(format!("'{}' is already in Watch Later", item.title)));
            }
            AddOutcome::Added => {
                self.store.save_watch_later(&self.watch_later);
                self.notify(Notice::info(format!("Added '{}' to Watch Later", item.title)));
                self.refresh_after_watch_later_change(content_type, id);
            }
        }
        self.save_scroll();
        Some(outcome)
    }

    /// Returns whether anything was removed; unknown entries are ignored.
    pub fn remove_from_watch_later(&mut self, content_type: ContentType, id: usize) -> bool {
        let removed = self.watch_later.remove(content_type, id);
        if removed {
            self.store.save_watch_later(&self.watch_later);
            self.refresh_after_watch_later_change(content_type, id);
        }
        self.save_scroll();
        removed
    }

    pub fn play(&mut self, link: &str) {
        tracing::debug!("Playing {}", link);
        self.emit(RenderCommand::ShowPlayer {
            link: link.to_string(),
        });
    }

    /// Hides the player and returns to the last saved scroll position.
    pub fn close_player(&mut self) {
        self.emit(RenderCommand::HidePlayer);
        let offset = self.store.load_scroll();
        self.emit(RenderCommand::ScrollTo { offset });
    }

    /// The viewport moved; the save happens once scrolling settles.
    pub fn on_scroll(&mut self, offset: u32, now_ms: u64) {
        self.emit(RenderCommand::ScrollTo { offset });
        self.scroll.schedule(now_ms);
    }

    /// Saves the scroll position if the debounce period has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.scroll.fire_if_due(now_ms) {
            self.save_scroll();
            return true;
        }
        false
    }

    /// Page is going away: save now regardless of any pending debounce.
    pub fn unload(&mut self) {
        self.scroll.cancel();
        self.save_scroll();
    }

    /// Forgets everything persisted and starts over at home.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.watch_later = WatchLater::default();
        self.activate(Section::Home);
        Ok(())
    }

    fn emit(&mut self, command: RenderCommand) {
        self.renderer.apply(command);
    }

    fn notify(&mut self, notice: Notice) {
        self.emit(RenderCommand::Notify { notice });
    }

    fn save_scroll(&mut self) {
        let offset = self.renderer.scroll_offset();
        self.store.save_scroll(offset);
    }

    fn ensure_list(&mut self, content_type: ContentType) {
        let nav = self.store.navigation();
        if nav.detail.is_some() || nav.active_section != content_type.section() {
            self.activate(content_type.section());
        }
    }

    fn show_chrome(&mut self, section: Section) {
        self.emit(RenderCommand::SetVisible {
            control: Control::Nav,
            visible: true,
        });
        for ct in ContentType::all() {
            let visible = section.content_type() == Some(*ct);
            self.emit(RenderCommand::SetVisible {
                control: Control::SearchBox(*ct),
                visible,
            });
            self.emit(RenderCommand::SetVisible {
                control: Control::GenreBar(*ct),
                visible,
            });
        }
    }

    fn hide_chrome(&mut self) {
        self.emit(RenderCommand::SetVisible {
            control: Control::Nav,
            visible: false,
        });
        for ct in ContentType::all() {
            self.emit(RenderCommand::SetVisible {
                control: Control::SearchBox(*ct),
                visible: false,
            });
            self.emit(RenderCommand::SetVisible {
                control: Control::GenreBar(*ct),
                visible: false,
            });
        }
    }

    fn render_genre_bar(&mut self, content_type: ContentType, active: Option<&str>) {
        let buttons = self
            .filters
            .unique_genres(content_type)
            .iter()
            .map(|genre| GenreButton {
                label: genre.clone(),
                active: Some(genre.as_str()) == active,
            })
            .collect();
        self.emit(RenderCommand::RenderGenreBar {
            content_type,
            buttons,
        });
    }

    fn render_filtered(&mut self, content_type: ContentType, genre: &str) {
        let cards = list_cards(&self.filters.apply_filter(content_type, genre));
        self.emit(RenderCommand::RenderList {
            content_type,
            cards,
        });
    }

    fn render_watch_later(&mut self) {
        let cards = self
            .watch_later
            .list()
            .iter()
            .map(|entry| WatchLaterCard {
                content_type: entry.content_type,
                id: entry.id,
                title: entry.title.clone(),
                image: entry.image.clone(),
                description: entry.description.clone(),
            })
            .collect();
        self.emit(RenderCommand::RenderWatchLater { cards });
    }

    fn render_home(&mut self) {
        let home = home_view(self.filters.catalog());
        self.emit(RenderCommand::RenderHome { home });
    }

    fn refresh_after_watch_later_change(&mut self, content_type: ContentType, id: usize) {
        let nav = self.store.navigation().clone();
        match nav.detail {
            Some(detail) if detail.content_type == content_type && detail.id == id => {
                let catalog = Arc::clone(self.filters.catalog());
                if let Some(item) = catalog.get(content_type, id) {
                    let detail = detail_view(item, self.watch_later.contains(content_type, id));
                    self.emit(RenderCommand::RenderDetail { detail });
                }
            }
            None if nav.active_section == Section::WatchLater => self.render_watch_later(),
            _ => {}
        }
    }
}

fn list_cards(items: &[&ContentItem]) -> Vec<ListCard> {
    items
        .iter()
        .map(|item| ListCard {
            content_type: item.content_type(),
            id: item.id,
            title: item.title.clone(),
            image: item.image.clone(),
        })
        .collect()
}

fn detail_view(item: &ContentItem, saved: bool) -> DetailView {
    let actions = match &item.media {
        Media::Episodes(episodes) => episodes
            .iter()
            .map(|ep| PlayAction {
                label: ep.title.clone(),
                link: ep.link.clone(),
            })
            .collect(),
        Media::Link(link) => vec![PlayAction {
            label: "Watch Now".to_string(),
            link: link.clone(),
        }],
    };
    DetailView {
        content_type: item.content_type(),
        id: item.id,
        title: item.title.clone(),
        image: item.image.clone(),
        description: item.description.clone(),
        genres: item.genres.clone(),
        actions,
        saved,
    }
}

fn home_view(catalog: &Catalog) -> HomeView {
    let feed = catalog.home();
    let news = feed
        .news_feed
        .iter()
        .map(|n| NewsCard {
            title: n.title.clone(),
            content: n.content.clone(),
            image: n.image.clone(),
            date: n.date.format("%B %-d, %Y").to_string(),
            kind: n.kind,
        })
        .collect();
    let featured = feed
        .featured_content
        .iter()
        .filter_map(|f| match catalog.get(f.content_type, f.id) {
            Some(item) => Some(FeaturedCard {
                heading: f.title.clone(),
                content_type: f.content_type,
                id: f.id,
                title: item.title.clone(),
                image: item.image.clone(),
            }),
            None => {
                tracing::warn!("Skipping featured {} {}: not in catalog", f.content_type, f.id);
                None
            }
        })
        .collect();
    HomeView { news, featured }
}
