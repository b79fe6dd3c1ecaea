use std::sync::Arc;

use catalog_browser_lib::catalog::{Catalog, ContentType};
use catalog_browser_lib::controller::Controller;
use catalog_browser_lib::filter::FilterEngine;
use catalog_browser_lib::render::{NoticeLevel, Screen};
use catalog_browser_lib::state::{keys, Section};
use catalog_browser_lib::storage::{KeyValueStore, MemoryStore};
use proptest::prelude::*;

// ─── Helpers ───────────────────────────────────────────────────────────────────

fn two_series() -> Arc<Catalog> {
    let json = r#"{
        "series": [
            {"title": "Bleach:TYBW P2", "genres": ["Action", "Anime"],
             "episodes": [{"title": "Episode 1", "link": "b1"}, {"title": "Episode 2", "link": "b2"}]},
            {"title": "Konosuba (s1)", "genres": ["Comedy", "Anime"],
             "episodes": [{"title": "Episode 1", "link": "k1"}]}
        ],
        "movies": [
            {"title": "Your Name(sub)", "genres": ["Romance", "Drama"], "link": "m0"}
        ]
    }"#;
    Arc::new(Catalog::from_json(json).unwrap())
}

fn started(catalog: Arc<Catalog>) -> Controller<MemoryStore, Screen> {
    let mut controller = Controller::new(catalog, MemoryStore::new(), Screen::new());
    controller.resume();
    controller
}

fn titles(screen: &Screen, ct: ContentType) -> Vec<String> {
    screen.lists.get(ct).iter().map(|c| c.title.clone()).collect()
}

// ─── Filter engine ─────────────────────────────────────────────────────────────

#[test]
fn test_two_series_scenario() {
    let filters = FilterEngine::new(two_series());
    assert_eq!(
        filters.unique_genres(ContentType::Series).to_vec(),
        vec!["All", "Action", "Anime", "Comedy"]
    );

    let anime: Vec<usize> = filters
        .apply_filter(ContentType::Series, "Anime")
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(anime, vec![0, 1]);

    let comedy: Vec<usize> = filters
        .apply_filter(ContentType::Series, "Comedy")
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(comedy, vec![1]);
}

#[test]
fn test_all_returns_full_catalog_in_order() {
    let catalog = Catalog::builtin();
    let filters = FilterEngine::new(Arc::clone(&catalog));
    for ct in ContentType::all() {
        let all: Vec<&str> = filters
            .apply_filter(*ct, "All")
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        let expected: Vec<&str> = catalog.items(*ct).iter().map(|i| i.title.as_str()).collect();
        assert_eq!(all, expected);
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let mut controller = started(Catalog::builtin());
    controller.search(ContentType::Movie, "name");
    let screen = controller.renderer();
    assert_eq!(screen.section, Section::Movies);
    assert_eq!(titles(screen, ContentType::Movie), vec!["Your Name(sub)"]);
    assert_eq!(screen.active_genre(ContentType::Movie), None);
}

// ─── Detail round trips ────────────────────────────────────────────────────────

#[test]
fn test_open_close_restores_section_and_genre() {
    let mut controller = started(two_series());
    controller.activate(Section::Series);
    controller.select_genre(ContentType::Series, "Comedy");

    assert!(controller.open_detail(ContentType::Series, 1, None));
    {
        let screen = controller.renderer();
        assert!(!screen.nav_visible);
        assert!(!screen.search_visible.series);
        assert!(!screen.genre_bar_visible.series);
        assert!(screen.lists.series.is_empty());
        assert_eq!(screen.detail.as_ref().map(|d| d.actions.len()), Some(1));
    }

    controller.close_detail(ContentType::Series);
    let screen = controller.renderer();
    assert_eq!(screen.section, Section::Series);
    assert!(screen.detail.is_none());
    assert!(screen.nav_visible);
    assert_eq!(screen.active_genre(ContentType::Series), Some("Comedy"));
    assert_eq!(titles(screen, ContentType::Series), vec!["Konosuba (s1)"]);
}

#[test]
fn test_detail_from_watch_later_returns_there() {
    let mut controller = started(two_series());
    controller.add_to_watch_later(ContentType::Series, 0);
    controller.activate(Section::WatchLater);

    controller.open_detail(ContentType::Series, 0, Some(Section::WatchLater));
    assert_eq!(
        controller.store().backend().get(keys::ORIGIN_SECTION).as_deref(),
        Some("watchLater")
    );

    controller.close_detail(ContentType::Series);
    let screen = controller.renderer();
    assert_eq!(screen.section, Section::WatchLater);
    assert!(!screen.search_visible.series);
    assert!(!screen.genre_bar_visible.series);
    assert_eq!(screen.watch_later.len(), 1);
    assert_eq!(controller.store().backend().get(keys::ORIGIN_SECTION), None);
}

#[test]
fn test_detail_from_home_returns_home() {
    let mut controller = started(Catalog::builtin());
    let featured = controller.renderer().home.featured[0].clone();
    controller.open_detail(featured.content_type, featured.id, Some(Section::Home));
    controller.go_back();
    assert_eq!(controller.renderer().section, Section::Home);
    assert!(controller.renderer().detail.is_none());
}

#[test]
fn test_stale_detail_falls_back_with_notice() {
    let mut controller = started(two_series());
    assert!(!controller.open_detail(ContentType::Series, 9, None));

    let screen = controller.renderer();
    assert_eq!(screen.section, Section::Series);
    assert!(screen.detail.is_none());
    assert_eq!(screen.latest_notice().map(|n| n.level), Some(NoticeLevel::Error));
    assert_eq!(titles(screen, ContentType::Series).len(), 2);
    assert_eq!(controller.store().backend().get(keys::LAST_DETAIL_INDEX), None);
}

#[test]
fn test_stale_detail_prefers_origin() {
    let mut controller = started(two_series());
    controller.open_detail(ContentType::Movie, 5, Some(Section::WatchLater));
    assert_eq!(controller.renderer().section, Section::WatchLater);
}

#[test]
fn test_activate_keeps_genre_across_sections() {
    let mut controller = started(Catalog::builtin());
    controller.select_genre(ContentType::Movie, "Adventure");
    controller.activate(Section::Home);
    assert_eq!(
        controller.store().backend().get(keys::ACTIVE_GENRE).as_deref(),
        Some("Adventure")
    );
    controller.activate(Section::Movies);
    assert_eq!(
        titles(controller.renderer(), ContentType::Movie),
        vec!["The Life List", "Power Rangers"]
    );
}

#[test]
fn test_unknown_genre_renders_all_without_rewriting_storage() {
    let store = MemoryStore::with_entries([
        (keys::LAST_ACTIVE_SECTION, "series"),
        (keys::ACTIVE_GENRE, "Western"),
    ]);
    let mut controller = Controller::new(two_series(), store, Screen::new());
    controller.resume();

    let screen = controller.renderer();
    assert_eq!(screen.active_genre(ContentType::Series), Some("All"));
    assert_eq!(titles(screen, ContentType::Series).len(), 2);
    assert_eq!(
        controller.store().backend().get(keys::ACTIVE_GENRE).as_deref(),
        Some("Western")
    );
}

#[test]
fn test_go_back_from_list_goes_home() {
    let mut controller = started(Catalog::builtin());
    controller.activate(Section::Series);
    controller.go_back();
    assert_eq!(controller.renderer().section, Section::Home);
    assert!(!controller.renderer().search_visible.series);
    // and stays there
    controller.go_back();
    assert_eq!(controller.renderer().section, Section::Home);
}

// ─── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn open_then_close_is_identity(genre_idx in 0usize..8, id in 0usize..3) {
        let mut controller = started(Catalog::builtin());
        let genres = controller.filters().unique_genres(ContentType::Movie).to_vec();
        let genre = genres[genre_idx % genres.len()].clone();
        controller.select_genre(ContentType::Movie, &genre);
        let before = controller.renderer().lists.movie.clone();

        controller.open_detail(ContentType::Movie, id, None);
        controller.close_detail(ContentType::Movie);

        let screen = controller.renderer();
        prop_assert_eq!(screen.section, Section::Movies);
        prop_assert_eq!(screen.active_genre(ContentType::Movie), Some(genre.as_str()));
        prop_assert_eq!(&screen.lists.movie, &before);
    }

    #[test]
    fn filter_is_idempotent(genre_idx in 0usize..8) {
        let filters = FilterEngine::new(Catalog::builtin());
        let genres = filters.unique_genres(ContentType::Movie).to_vec();
        let genre = &genres[genre_idx % genres.len()];
        let once: Vec<usize> = filters.apply_filter(ContentType::Movie, genre).iter().map(|i| i.id).collect();
        let again: Vec<usize> = filters.apply_filter(ContentType::Movie, genre).iter().map(|i| i.id).collect();
        prop_assert_eq!(&once, &again);
        for id in once {
            let item = filters.catalog().get(ContentType::Movie, id).unwrap();
            prop_assert!(genre == "All" || item.has_genre(genre));
        }
    }
}
