use wasm_bindgen::prelude::*;

use crate::catalog::ContentType;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::errors::BrowseError;
use crate::player::Player;
use crate::render::Screen;
use crate::state::Section;
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore};

type Store = Box<dyn KeyValueStore>;

fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() as u64)
        .unwrap_or(0)
}

fn to_js(e: BrowseError) -> JsValue {
    JsValue::from_str(&e.user_message())
}

/// Page-facing handle. The page script calls these on user events and
/// redraws from `screen_json()` afterwards.
#[wasm_bindgen]
pub struct WasmClient {
    controller: Controller<Store, Screen>,
    player: Player,
}

#[wasm_bindgen]
impl WasmClient {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        let config = AppConfig::load().unwrap_or_default();
        let store: Store = match LocalStorage::new() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                web_sys::console::warn_1(&format!("{}; state will not persist", e).into());
                Box::new(MemoryStore::new())
            }
        };
        let catalog = config.load_catalog().unwrap_or_else(|_| crate::catalog::Catalog::builtin());

        Self {
            controller: Controller::new(catalog, store, Screen::new())
                .with_scroll_debounce(config.scroll_debounce_ms),
            player: Player::new(),
        }
    }

    /// Restores the view from the last session. Call once after load.
    pub fn resume(&mut self) {
        self.controller.resume();
    }

    pub fn activate(&mut self, section: &str) -> Result<(), JsValue> {
        let section: Section = section.parse().map_err(to_js)?;
        self.controller.activate(section);
        Ok(())
    }

    pub fn select_genre(&mut self, content_type: &str, genre: &str) -> Result<(), JsValue> {
        let ct: ContentType = content_type.parse().map_err(to_js)?;
        self.controller.select_genre(ct, genre);
        Ok(())
    }

    pub fn search(&mut self, content_type: &str, query: &str) -> Result<(), JsValue> {
        let ct: ContentType = content_type.parse().map_err(to_js)?;
        self.controller.search(ct, query);
        Ok(())
    }

    pub fn open_detail(&mut self, content_type: &str, id: usize, origin: Option<String>) -> Result<bool, JsValue> {
        let ct: ContentType = content_type.parse().map_err(to_js)?;
        let origin = match origin {
            Some(origin) => Some(origin.parse::<Section>().map_err(to_js)?),
            None => None,
        };
        Ok(self.controller.open_detail(ct, id, origin))
    }

    pub fn close_detail(&mut self, content_type: &str) -> Result<(), JsValue> {
        let ct: ContentType = content_type.parse().map_err(to_js)?;
        self.controller.close_detail(ct);
        Ok(())
    }

    pub fn go_back(&mut self) {
        self.controller.go_back();
    }

    /// True when the item was newly added
    pub fn add_to_watch_later(&mut self, content_type: &str, id: usize) -> Result<bool, JsValue> {
        let ct: ContentType = content_type.parse().map_err(to_js)?;
        Ok(matches!(
            self.controller.add_to_watch_later(ct, id),
            Some(crate::watch_later::AddOutcome::Added)
        ))
    }

    pub fn remove_from_watch_later(&mut self, content_type: &str, id: usize) -> Result<bool, JsValue> {
        let ct: ContentType = content_type.parse().map_err(to_js)?;
        Ok(self.controller.remove_from_watch_later(ct, id))
    }

    pub fn play(&mut self, link: &str) {
        self.controller.play(link);
        if let Err(e) = self.player.play(link) {
            web_sys::console::warn_1(&e.to_string().into());
        }
    }

    pub fn close_player(&mut self) {
        self.player.stop();
        self.controller.close_player();
    }

    /// Forward from the page's scroll listener.
    pub fn on_scroll(&mut self, offset: u32) {
        self.controller.on_scroll(offset, now_ms());
    }

    /// Call from a timer; saves the scroll offset once scrolling settles.
    pub fn tick(&mut self) -> bool {
        self.controller.tick(now_ms())
    }

    /// Call from `beforeunload`.
    pub fn unload(&mut self) {
        self.controller.unload();
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.controller
            .reset()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn screen_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.controller.renderer()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmClient {
    fn default() -> Self {
        Self::new()
    }
}
