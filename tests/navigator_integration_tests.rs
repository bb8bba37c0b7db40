use landmarks::core::deep_link::resolve;
use landmarks::core::restoration::{self, STATE_KEY};
use landmarks::core::{
    Catalog, Category, Destination, FileStateStore, LandmarkId, MemoryStateStore, NavigatorState,
    Navigator, StateStore, Tab,
};
use std::fs;

// ============================================================================
// Helper Functions
// ============================================================================

fn id_of(name: &str) -> LandmarkId {
    Catalog::sample()
        .iter()
        .find(|l| l.name == name)
        .map(|l| l.id)
        .unwrap_or_else(|| panic!("no sample landmark named {name}"))
}

fn file_navigator(dir: &std::path::Path) -> Navigator {
    Navigator::new(Catalog::sample(), Box::new(FileStateStore::new(dir)))
}

/// Puts screens on all three stacks and leaves Favorites selected.
fn populate(nav: &mut Navigator) {
    let tahoe = id_of("Lake Tahoe");
    nav.navigate(vec![
        Destination::category(Category::Lakes),
        Destination::detail(tahoe),
        Destination::visit_confirmation(tahoe),
    ])
    .unwrap();
    nav.navigate(vec![
        Destination::url_result("landmarks://category/lakes"),
        Destination::url_result("landmarks://landmark/lake-tahoe"),
    ])
    .unwrap();
    nav.navigate_to(Destination::favorite_detail(id_of("Mount Rainier")))
        .unwrap();
}

// ============================================================================
// Resolver
// ============================================================================

#[test]
fn test_resolver_examples() {
    let catalog = Catalog::sample();
    assert_eq!(
        resolve("landmarks://landmark/golden-gate-bridge", &catalog),
        Some(vec![Destination::detail(id_of("Golden Gate Bridge"))])
    );
    assert_eq!(
        resolve("landmarks://category/lakes", &catalog),
        Some(vec![Destination::category(Category::Lakes)])
    );
    assert_eq!(resolve("landmarks://bogus/xyz", &catalog), None);
}

#[test]
fn test_resolver_is_case_insensitive_and_ignores_scheme() {
    let catalog = Catalog::sample();
    assert_eq!(
        resolve("other://landmark/Golden-Gate-Bridge?ref=mail", &catalog),
        resolve("landmarks://landmark/golden-gate-bridge", &catalog)
    );
    assert_eq!(
        resolve("landmarks://category/MOUNTAINS/", &catalog),
        Some(vec![Destination::category(Category::Mountains)])
    );
}

#[test]
fn test_resolver_failures() {
    let catalog = Catalog::sample();
    for url in [
        "",
        "landmarks://",
        "landmarks://landmark",
        "landmarks://landmark/atlantis",
        "landmarks://category/deserts",
    ] {
        assert_eq!(resolve(url, &catalog), None, "{url:?}");
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_tabs_keep_independent_history() {
    let mut nav = Navigator::new(Catalog::sample(), Box::new(MemoryStateStore::new()));
    populate(&mut nav);

    assert_eq!(nav.selected_tab(), Tab::Favorites);
    assert_eq!(nav.stack(Tab::Landmarks).len(), 3);
    assert_eq!(nav.stack(Tab::DeepLinks).len(), 2);

    nav.select_tab(Tab::Landmarks);
    nav.pop();
    assert_eq!(
        nav.current_stack().top(),
        Some(&Destination::detail(id_of("Lake Tahoe")))
    );
    assert_eq!(nav.stack(Tab::Favorites).len(), 1);
}

#[test]
fn test_deep_link_replaces_history_on_its_tab() {
    let mut nav = Navigator::new(Catalog::sample(), Box::new(MemoryStateStore::new()));
    populate(&mut nav);

    assert!(nav.handle_deep_link("landmarks://landmark/brooklyn-bridge"));
    assert_eq!(nav.selected_tab(), Tab::Landmarks);
    assert_eq!(
        nav.current_stack().as_slice(),
        &[Destination::detail(id_of("Brooklyn Bridge"))]
    );

    let before = nav.capture();
    assert!(!nav.handle_deep_link("landmarks://landmark/atlantis"));
    assert_eq!(nav.capture(), before);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_state_survives_relaunch() {
    let dir = tempfile::tempdir().unwrap();

    let mut nav = file_navigator(dir.path());
    populate(&mut nav);
    let saved = nav.capture();
    assert!(nav.save_state());
    assert!(dir.path().join(format!("{STATE_KEY}.json")).exists());
    drop(nav);

    let mut relaunched = file_navigator(dir.path());
    assert_eq!(relaunched.capture(), NavigatorState::new());
    assert!(relaunched.load_state());
    assert_eq!(relaunched.capture(), saved);
}

#[test]
fn test_save_then_load_after_mutation_restores_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let mut nav = file_navigator(dir.path());
    populate(&mut nav);
    let saved = nav.capture();
    nav.save_state();

    nav.navigate_to(Destination::edit(id_of("Crater Lake"))).unwrap();
    nav.restore(NavigatorState::new());
    assert!(nav.load_state());
    assert_eq!(nav.capture(), saved);
}

#[test]
fn test_save_overwrites_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut nav = file_navigator(dir.path());
    populate(&mut nav);
    nav.save_state();

    nav.pop_to_root();
    let latest = nav.capture();
    nav.save_state();

    let mut relaunched = file_navigator(dir.path());
    relaunched.load_state();
    assert_eq!(relaunched.capture(), latest);
}

#[test]
fn test_clear_then_load_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut nav = file_navigator(dir.path());
    populate(&mut nav);
    nav.save_state();
    nav.clear_saved_state();

    let before = nav.capture();
    assert!(!nav.load_state());
    assert_eq!(nav.capture(), before);
}

#[test]
fn test_corrupt_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(format!("{STATE_KEY}.json")), "{\"selected_tab\": 7}").unwrap();

    let mut nav = file_navigator(dir.path());
    nav.navigate_to(Destination::url_result("x://y")).unwrap();
    let before = nav.capture();
    assert!(!nav.load_state());
    assert_eq!(nav.capture(), before);
}

#[test]
fn test_record_is_plain_json() {
    let store = MemoryStateStore::new();
    let mut nav = Navigator::new(Catalog::sample(), Box::new(store.clone()));
    nav.navigate_to(Destination::category(Category::Bridges)).unwrap();
    nav.save_state();

    let bytes = store.read(STATE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["selected_tab"], "landmarks");
    assert_eq!(json["landmarks_path"][0]["landmarks"]["category"], "bridges");
    assert!(json["saved_at"].is_string());

    let state = restoration::decode(&bytes).unwrap();
    assert_eq!(state, nav.capture());
}
