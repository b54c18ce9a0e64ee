mod common;

use common::{create_game, create_install, registry, setup_test_env, FakeRemote};
use emu_keeper_lib::core::dispatch::{dispatch, page_snapshot, refresh_page, set_filter};
use emu_keeper_lib::models::action::Action;
use emu_keeper_lib::models::page::PagePhase;

const ZELDA: &str = "01007ef00011e000";
const MARIO: &str = "0100000000010000";

#[test]
fn test_page_starts_uninitialized_and_becomes_ready() {
    let (_tmp, root, system) = setup_test_env();
    let install = create_install(&root, "ryu", Some("Ryujinx"), false);
    create_game(&system, ZELDA, Some("Zelda"), 1);
    create_game(&system, MARIO, Some("Mario"), 0);
    let remote = FakeRemote::default()
        .with_counts(&[(ZELDA, 4)])
        .complete();
    let registry = registry(remote, &system);

    assert_eq!(page_snapshot(&registry).phase, PagePhase::Uninitialized);
    dispatch(&registry, Action::AddInstallation { path: install }).unwrap();

    let snapshot = refresh_page(&registry);

    assert_eq!(snapshot.phase, PagePhase::Ready);
    assert!(!snapshot.needs_refresh);
    assert_eq!(snapshot.installations.len(), 1);
    let names: Vec<&str> = snapshot.installations[0]
        .games
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(names, vec!["Mario", "Zelda"]);
    assert!(snapshot.metadata.is_some());
}

#[test]
fn test_unreachable_service_keeps_page_loading() {
    let (_tmp, root, system) = setup_test_env();
    let install = create_install(&root, "ryu", Some("Ryujinx"), false);
    let registry = registry(FakeRemote::default().with_counts(&[(ZELDA, 1)]), &system);
    dispatch(&registry, Action::AddInstallation { path: install }).unwrap();

    let snapshot = refresh_page(&registry);

    assert_eq!(snapshot.phase, PagePhase::Loading);
    assert!(snapshot.metadata.is_none());
}

#[test]
fn test_empty_shader_counts_keep_page_loading() {
    let (_tmp, _root, system) = setup_test_env();
    let registry = registry(FakeRemote::default().complete(), &system);

    assert_eq!(refresh_page(&registry).phase, PagePhase::Loading);
}

#[test]
fn test_mutating_action_marks_page_stale() {
    let (_tmp, root, system) = setup_test_env();
    let install = create_install(&root, "ryu", Some("Ryujinx"), false);
    let remote = FakeRemote::default().with_counts(&[(ZELDA, 1)]).complete();
    let registry = registry(remote, &system);
    assert_eq!(refresh_page(&registry).phase, PagePhase::Ready);

    dispatch(&registry, Action::AddInstallation { path: install }).unwrap();

    let snapshot = page_snapshot(&registry);
    assert_eq!(snapshot.phase, PagePhase::Loading);
    assert!(snapshot.needs_refresh);

    let snapshot = refresh_page(&registry);
    assert_eq!(snapshot.phase, PagePhase::Ready);
    let stored = registry.store.lock().list()[0].path.clone();
    assert_eq!(snapshot.installations[0].config.path, stored);
}

#[test]
fn test_removed_installation_disappears_after_refresh() {
    let (_tmp, root, system) = setup_test_env();
    let install = create_install(&root, "ryu", Some("Ryujinx"), false);
    let remote = FakeRemote::default().with_counts(&[(ZELDA, 1)]).complete();
    let registry = registry(remote, &system);
    dispatch(&registry, Action::AddInstallation { path: install }).unwrap();
    let path = registry.store.lock().list()[0].path.clone();
    assert_eq!(refresh_page(&registry).installations.len(), 1);

    dispatch(&registry, Action::RemoveInstallation { path }).unwrap();

    assert!(refresh_page(&registry).installations.is_empty());
}

#[test]
fn test_filter_narrows_rows_without_refetching() {
    let (_tmp, root, system) = setup_test_env();
    let install = create_install(&root, "ryu", Some("Ryujinx"), false);
    create_game(&system, ZELDA, Some("Zelda"), 0);
    create_game(&system, MARIO, Some("Mario"), 0);
    let remote = FakeRemote::default().with_counts(&[(ZELDA, 1)]).complete();
    let registry = registry(remote, &system);
    dispatch(&registry, Action::AddInstallation { path: install }).unwrap();
    let path = registry.store.lock().list()[0].path.clone();
    refresh_page(&registry);

    let snapshot = set_filter(&registry, &path, "zel");

    assert_eq!(snapshot.phase, PagePhase::Ready);
    let view = &snapshot.installations[0];
    assert_eq!(view.filter, "zel");
    assert_eq!(view.games.len(), 1);
    assert_eq!(view.games[0].title_id, ZELDA);

    let cleared = set_filter(&registry, &path, "");
    assert_eq!(cleared.installations[0].games.len(), 2);
}

#[test]
fn test_dismissed_alert_shows_in_snapshot() {
    let (_tmp, _root, system) = setup_test_env();
    let registry = registry(FakeRemote::default(), &system);
    assert!(!page_snapshot(&registry).alert_dismissed);

    let outcome = dispatch(&registry, Action::DismissAlert).unwrap();

    assert!(!outcome.needs_refresh);
    assert!(page_snapshot(&registry).alert_dismissed);
}

#[test]
fn test_rows_render_while_the_page_is_locked() {
    let (_tmp, root, system) = setup_test_env();
    let install = create_install(&root, "ryu", Some("Ryujinx"), false);
    create_game(&system, ZELDA, Some("Zelda"), 2);
    let remote = FakeRemote::default().with_counts(&[(ZELDA, 5)]).complete();
    let registry = registry(remote, &system);
    dispatch(&registry, Action::AddInstallation { path: install }).unwrap();
    refresh_page(&registry);

    let capture = registry.page.lock().capture();
    let _busy = registry.page.lock();
    let snapshot = capture.render(false);

    let zelda = &snapshot.installations[0].games[0];
    assert_eq!((zelda.local_shader_count, zelda.remote_shader_count), (2, 5));
    assert!(zelda.can_download_shaders);
}
