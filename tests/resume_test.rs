use catalog_browser_lib::catalog::{Catalog, ContentType};
use catalog_browser_lib::controller::Controller;
use catalog_browser_lib::render::{CommandLog, Control, RenderCommand, Renderer, Screen};
use catalog_browser_lib::state::{keys, Section};
use catalog_browser_lib::storage::{KeyValueStore, MemoryStore};

fn resumed(entries: &[(&str, &str)]) -> Controller<MemoryStore, Screen> {
    let store = MemoryStore::with_entries(entries.iter().copied());
    let mut controller = Controller::new(Catalog::builtin(), store, Screen::new());
    controller.resume();
    controller
}

#[test]
fn test_first_run_lands_home() {
    let controller = resumed(&[]);
    let screen = controller.renderer();
    assert_eq!(screen.section, Section::Home);
    assert!(screen.nav_visible);
    assert!(!screen.search_visible.series && !screen.search_visible.movie);
    assert_eq!(screen.home.news.len(), 3);
    assert_eq!(
        controller.store().backend().get(keys::LAST_ACTIVE_SECTION).as_deref(),
        Some("home")
    );
}

#[test]
fn test_resume_movies_filtered_to_action() {
    let controller = resumed(&[
        (keys::LAST_ACTIVE_SECTION, "movies"),
        (keys::ACTIVE_GENRE, "Action"),
    ]);
    let screen = controller.renderer();
    assert_eq!(screen.section, Section::Movies);
    assert!(screen.nav_visible);
    assert!(screen.search_visible.movie);
    assert!(screen.genre_bar_visible.movie);
    assert_eq!(screen.active_genre(ContentType::Movie), Some("Action"));
    let titles: Vec<&str> = screen.lists.movie.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Power Rangers"]);
}

#[test]
fn test_resume_detail_with_origin() {
    let mut controller = resumed(&[
        (keys::LAST_ACTIVE_SECTION, "series"),
        (keys::LAST_DETAIL_TYPE, "series"),
        (keys::LAST_DETAIL_INDEX, "1"),
        (keys::ORIGIN_SECTION, "watchLater"),
    ]);
    {
        let screen = controller.renderer();
        assert_eq!(screen.detail.as_ref().map(|d| d.title.as_str()), Some("Konosuba (s1)"));
        assert!(!screen.nav_visible);
    }
    controller.go_back();
    assert_eq!(controller.renderer().section, Section::WatchLater);
}

#[test]
fn test_detail_without_index_resumes_section() {
    let controller = resumed(&[
        (keys::LAST_ACTIVE_SECTION, "series"),
        (keys::LAST_DETAIL_TYPE, "series"),
    ]);
    let screen = controller.renderer();
    assert_eq!(screen.section, Section::Series);
    assert!(screen.detail.is_none());
    assert_eq!(screen.lists.series.len(), 2);
}

#[test]
fn test_unknown_section_is_first_run() {
    let controller = resumed(&[(keys::LAST_ACTIVE_SECTION, "music")]);
    assert_eq!(controller.renderer().section, Section::Home);
}

#[test]
fn test_resume_restores_scroll_last() {
    let controller = resumed(&[
        (keys::LAST_ACTIVE_SECTION, "movies"),
        (keys::SCROLL_POSITION, "120"),
    ]);
    assert_eq!(controller.renderer().scroll_offset(), 120);
    assert_eq!(
        controller.store().backend().get(keys::SCROLL_POSITION).as_deref(),
        Some("120")
    );
}

#[test]
fn test_garbage_scroll_is_zero() {
    let controller = resumed(&[
        (keys::LAST_ACTIVE_SECTION, "movies"),
        (keys::SCROLL_POSITION, "lots"),
    ]);
    assert_eq!(controller.renderer().scroll_offset(), 0);
}

#[test]
fn test_chrome_hidden_before_detail_renders() {
    let store = MemoryStore::with_entries([
        (keys::LAST_ACTIVE_SECTION, "movies"),
        (keys::LAST_DETAIL_TYPE, "movie"),
        (keys::LAST_DETAIL_INDEX, "0"),
        (keys::SCROLL_POSITION, "40"),
    ]);
    let mut controller = Controller::new(Catalog::builtin(), store, CommandLog::new());
    controller.resume();
    let log = controller.renderer();

    let nav_hidden = log
        .position(|c| {
            matches!(
                c,
                RenderCommand::SetVisible {
                    control: Control::Nav,
                    visible: false
                }
            )
        })
        .unwrap();
    let detail = log
        .position(|c| matches!(c, RenderCommand::RenderDetail { .. }))
        .unwrap();
    assert!(nav_hidden < detail);

    // no list for the movie section is drawn on the way to the detail
    assert!(log
        .position(|c| matches!(c, RenderCommand::RenderList { .. }))
        .is_none());

    // the saved offset is the last thing applied
    assert_eq!(
        log.commands.last(),
        Some(&RenderCommand::ScrollTo { offset: 40 })
    );
}

#[test]
fn test_scroll_save_is_debounced() {
    let mut controller = resumed(&[(keys::LAST_ACTIVE_SECTION, "movies")]);
    controller.on_scroll(10, 1_000);
    controller.on_scroll(20, 1_100);
    controller.on_scroll(30, 1_150);

    assert!(!controller.tick(1_300));
    assert_eq!(controller.store().load_scroll(), 0);

    assert!(controller.tick(1_350));
    assert_eq!(controller.store().load_scroll(), 30);
    assert!(!controller.scroll_pending());
}

#[test]
fn test_unload_saves_immediately() {
    let mut controller = resumed(&[(keys::LAST_ACTIVE_SECTION, "series")]);
    controller.on_scroll(75, 0);
    controller.unload();
    assert_eq!(controller.store().load_scroll(), 75);
    assert!(!controller.scroll_pending());
    assert!(!controller.tick(10_000));
}

#[test]
fn test_player_close_restores_saved_scroll() {
    let mut controller = resumed(&[(keys::LAST_ACTIVE_SECTION, "movies")]);
    controller.on_scroll(2, 0);
    controller.unload();
    controller.play("https://example.com/v");
    assert_eq!(controller.renderer().player.as_deref(), Some("https://example.com/v"));
    controller.on_scroll(0, 10);
    controller.close_player();
    assert_eq!(controller.renderer().player, None);
    assert_eq!(controller.renderer().scroll_offset(), 2);
}

#[test]
fn test_reset_forgets_everything() {
    let mut controller = resumed(&[(keys::LAST_ACTIVE_SECTION, "movies")]);
    controller.add_to_watch_later(ContentType::Movie, 0);
    controller.reset().unwrap();
    assert!(controller.watch_later().is_empty());
    assert_eq!(controller.renderer().section, Section::Home);
    assert_eq!(controller.store().backend().get(keys::WATCH_LATER), None);
}
