use catalog_browser_lib::catalog::{Catalog, ContentType};
use catalog_browser_lib::controller::Controller;
use catalog_browser_lib::render::{NoticeLevel, Screen};
use catalog_browser_lib::state::{keys, Section};
use catalog_browser_lib::storage::{KeyValueStore, MemoryStore};
use catalog_browser_lib::watch_later::{AddOutcome, WatchLaterEntry};

fn started() -> Controller<MemoryStore, Screen> {
    let mut controller = Controller::new(Catalog::builtin(), MemoryStore::new(), Screen::new());
    controller.resume();
    controller
}

#[test]
fn test_double_add_keeps_length() {
    let mut controller = started();
    assert_eq!(controller.add_to_watch_later(ContentType::Series, 0), Some(AddOutcome::Added));
    assert_eq!(
        controller.add_to_watch_later(ContentType::Series, 0),
        Some(AddOutcome::AlreadyPresent)
    );
    assert_eq!(controller.watch_later().len(), 1);

    let notice = controller.renderer().latest_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.message.contains("already"));
}

#[test]
fn test_same_id_different_type_are_distinct() {
    let mut controller = started();
    controller.add_to_watch_later(ContentType::Series, 0);
    controller.add_to_watch_later(ContentType::Movie, 0);
    let ids: Vec<&str> = controller
        .watch_later()
        .iter()
        .map(|e| e.unique_id.as_str())
        .collect();
    assert_eq!(ids, vec!["series-0", "movie-0"]);
}

#[test]
fn test_remove_non_member_is_noop() {
    let mut controller = started();
    controller.add_to_watch_later(ContentType::Movie, 1);
    assert!(!controller.remove_from_watch_later(ContentType::Movie, 2));
    assert_eq!(controller.watch_later().len(), 1);
}

#[test]
fn test_stale_add_reports_error() {
    let mut controller = started();
    assert_eq!(controller.add_to_watch_later(ContentType::Movie, 42), None);
    assert!(controller.watch_later().is_empty());
    assert_eq!(
        controller.renderer().latest_notice().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
}

#[test]
fn test_persisted_as_camel_case_json() {
    let mut controller = started();
    controller.add_to_watch_later(ContentType::Movie, 2);
    let raw = controller.store().backend().get(keys::WATCH_LATER).unwrap();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value[0];
    assert_eq!(entry["uniqueId"], "movie-2");
    assert_eq!(entry["contentType"], "movie");
    assert_eq!(entry["id"], 2);
    assert_eq!(entry["title"], "Power Rangers");

    let entries: Vec<WatchLaterEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries[0].genres, vec!["Action", "Sci-Fi", "Adventure"]);
}

#[test]
fn test_list_survives_restart_in_order() {
    let mut first = started();
    first.add_to_watch_later(ContentType::Movie, 2);
    first.add_to_watch_later(ContentType::Series, 1);
    let backend = first.store().backend().clone();

    let mut second = Controller::new(Catalog::builtin(), backend, Screen::new());
    second.resume();
    second.activate(Section::WatchLater);
    let titles: Vec<&str> = second
        .renderer()
        .watch_later
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Power Rangers", "Konosuba (s1)"]);
}

#[test]
fn test_remove_rerenders_active_list() {
    let mut controller = started();
    controller.add_to_watch_later(ContentType::Movie, 0);
    controller.add_to_watch_later(ContentType::Movie, 1);
    controller.activate(Section::WatchLater);
    assert_eq!(controller.renderer().watch_later.len(), 2);

    assert!(controller.remove_from_watch_later(ContentType::Movie, 0));
    let screen = controller.renderer();
    assert_eq!(screen.watch_later.len(), 1);
    assert_eq!(screen.watch_later[0].id, 1);
    assert!(!screen.search_visible.movie);
    assert!(!screen.genre_bar_visible.movie);
}

#[test]
fn test_corrupt_list_starts_empty() {
    let store = MemoryStore::with_entries([(keys::WATCH_LATER, "[{oops")]);
    let mut controller = Controller::new(Catalog::builtin(), store, Screen::new());
    controller.resume();
    assert!(controller.watch_later().is_empty());
    controller.add_to_watch_later(ContentType::Series, 0);
    assert_eq!(controller.watch_later().len(), 1);
}
