use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tui_input::Input;

use crate::catalog::ContentType;
use crate::controller::Controller;
use crate::player::Player;
use crate::render::{Renderer, Screen};
use crate::state::Section;
use crate::storage::KeyValueStore;

pub type Store = Box<dyn KeyValueStore>;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Terminal front end state around the controller.
///
/// The selected row doubles as the scroll offset: moving the selection is
/// what the controller sees as a scroll event.
pub struct App {
    pub controller: Controller<Store, Screen>,
    pub player: Player,
    pub input_mode: InputMode,
    pub search_input: Input,
    pub list_state: ListState,
    pub show_help: bool,
    pub player_error: Option<String>,
    pub should_quit: bool,
    /// Rows of the visible list, for mouse hit-testing
    pub area_rows: Rect,
    started: Instant,
}

impl App {
    pub fn new(controller: Controller<Store, Screen>) -> App {
        App {
            controller,
            player: Player::new(),
            input_mode: InputMode::Normal,
            search_input: Input::default(),
            list_state: ListState::default(),
            show_help: false,
            player_error: None,
            should_quit: false,
            area_rows: Rect::default(),
            started: Instant::now(),
        }
    }

    pub fn screen(&self) -> &Screen {
        self.controller.renderer()
    }

    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn resume(&mut self) {
        self.controller.resume();
        self.sync_selection();
    }

    /// Flushes a settled scroll save
    pub fn tick(&mut self) {
        let now = self.now_ms();
        self.controller.tick(now);
    }

    pub fn quit(&mut self) {
        self.controller.unload();
        self.should_quit = true;
    }

    /// Content type of the visible list or detail view
    pub fn current_content_type(&self) -> Option<ContentType> {
        let screen = self.screen();
        match &screen.detail {
            Some(detail) => Some(detail.content_type),
            None => screen.section.content_type(),
        }
    }

    pub fn activate(&mut self, section: Section) {
        self.stop_editing();
        self.controller.activate(section);
        self.sync_selection();
    }

    pub fn next_row(&mut self) {
        self.move_selection(true);
    }

    pub fn previous_row(&mut self) {
        self.move_selection(false);
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.screen().row_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if forward {
                    (i + 1) % len
                } else if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        let now = self.now_ms();
        self.controller.on_scroll(i as u32, now);
    }

    /// Selects a visible row (relative to the list's first shown row).
    pub fn select_row(&mut self, visible_row: usize) {
        let index = self.list_state.offset() + visible_row;
        if index >= self.screen().row_count() {
            return;
        }
        self.list_state.select(Some(index));
        let now = self.now_ms();
        self.controller.on_scroll(index as u32, now);
    }

    /// Puts the selection where the controller last scrolled to.
    pub fn sync_selection(&mut self) {
        let len = self.screen().row_count();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let offset = (self.controller.renderer().scroll_offset() as usize).min(len - 1);
        self.list_state.select(Some(offset));
    }

    /// Steps through the genre bar of the visible list.
    pub fn cycle_genre(&mut self, forward: bool) {
        let Some(ct) = self.screen().section.content_type() else {
            return;
        };
        if self.screen().detail.is_some() {
            return;
        }
        let genres = self.controller.filters().unique_genres(ct).to_vec();
        if genres.is_empty() {
            return;
        }
        let current = self
            .screen()
            .active_genre(ct)
            .and_then(|active| genres.iter().position(|g| g == active))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % genres.len()
        } else if current == 0 {
            genres.len() - 1
        } else {
            current - 1
        };
        self.search_input.reset();
        self.controller.select_genre(ct, &genres[next]);
        self.sync_selection();
    }

    pub fn start_search(&mut self) {
        if let Some(ct) = self.screen().section.content_type() {
            if self.screen().detail.is_none() {
                self.search_input = Input::new(self.screen().search_text.get(ct).clone());
                self.input_mode = InputMode::Editing;
            }
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Re-runs the search with the current input, as typed.
    pub fn apply_search(&mut self) {
        if let Some(ct) = self.screen().section.content_type() {
            let query = self.search_input.value().to_string();
            self.controller.search(ct, &query);
            self.sync_selection();
        }
    }

    /// Enter: open the selected card, or play the selected episode.
    pub fn activate_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let screen = self.screen();

        if let Some(detail) = &screen.detail {
            if let Some(action) = detail.actions.get(index) {
                let link = action.link.clone();
                self.play(&link);
            }
            return;
        }

        let target = match screen.section {
            Section::Series => screen.lists.series.get(index).map(|c| (c.content_type, c.id, None)),
            Section::Movies => screen.lists.movie.get(index).map(|c| (c.content_type, c.id, None)),
            Section::WatchLater => screen
                .watch_later
                .get(index)
                .map(|c| (c.content_type, c.id, Some(Section::WatchLater))),
            Section::Home => screen
                .home
                .featured
                .get(index)
                .map(|c| (c.content_type, c.id, Some(Section::Home))),
        };

        if let Some((ct, id, origin)) = target {
            self.controller.open_detail(ct, id, origin);
            self.sync_selection();
        }
    }

    pub fn play(&mut self, link: &str) {
        self.controller.play(link);
        if let Err(e) = self.player.play(link) {
            tracing::warn!("{}", e);
            self.player_error = Some(e.to_string());
        }
    }

    pub fn close_player(&mut self) {
        self.player.stop();
        self.player_error = None;
        self.controller.close_player();
        self.sync_selection();
    }

    /// Esc/Backspace: closes overlays first, then navigates back.
    pub fn back(&mut self) {
        if self.screen().player.is_some() {
            self.close_player();
            return;
        }
        if !self.screen().notices.is_empty() {
            self.controller.renderer_mut().dismiss_notices();
            return;
        }
        self.controller.go_back();
        self.sync_selection();
    }

    /// The item under the cursor, or the open detail item
    fn selected_item(&self) -> Option<(ContentType, usize)> {
        let screen = self.screen();
        if let Some(detail) = &screen.detail {
            return Some((detail.content_type, detail.id));
        }
        let index = self.list_state.selected()?;
        match screen.section {
            Section::Series => screen.lists.series.get(index).map(|c| (c.content_type, c.id)),
            Section::Movies => screen.lists.movie.get(index).map(|c| (c.content_type, c.id)),
            Section::WatchLater => screen.watch_later.get(index).map(|c| (c.content_type, c.id)),
            Section::Home => screen.home.featured.get(index).map(|c| (c.content_type, c.id)),
        }
    }

    pub fn add_selected_to_watch_later(&mut self) {
        if let Some((ct, id)) = self.selected_item() {
            self.controller.add_to_watch_later(ct, id);
        }
    }

    pub fn remove_selected_from_watch_later(&mut self) {
        if let Some((ct, id)) = self.selected_item() {
            self.controller.remove_from_watch_later(ct, id);
            self.sync_selection();
        }
    }
}
