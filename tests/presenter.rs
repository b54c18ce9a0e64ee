mod common;

use common::{create_game, setup_test_env};
use emu_keeper_lib::core::games::{GameSource, InstallationGames, StaticGames};
use emu_keeper_lib::core::presenter::present;
use emu_keeper_lib::models::game::SENTINEL_TITLE_ID;
use emu_keeper_lib::models::paths::DataPaths;
use emu_keeper_lib::models::remote::ShaderCounts;

const ZELDA: &str = "01007ef00011e000";
const MARIO: &str = "0100000000010000";
const KART: &str = "0100152000022000";
const OKAMI: &str = "0100c3d00923a000";
const ASTRAL: &str = "01002b30028f6000";
const ECLAIR: &str = "0100abcdef123000";

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn counts(list: &[(&str, u32)]) -> ShaderCounts {
    list.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn library() -> StaticGames {
    StaticGames::default()
        .with(ZELDA, "Zelda", 0)
        .with(MARIO, "Mario", 0)
}

#[test]
fn test_sentinel_title_is_never_listed() {
    let source = library().with(SENTINEL_TITLE_ID, "Placeholder", 4);
    let remote = counts(&[(SENTINEL_TITLE_ID, 10)]);

    for filter in [None, Some(""), Some("place"), Some("0000")] {
        let rows = present(&ids(&[SENTINEL_TITLE_ID, ZELDA]), &source, &remote, filter);
        assert!(rows.iter().all(|r| r.title_id != SENTINEL_TITLE_ID));
    }
}

#[test]
fn test_rows_sort_by_name_without_filter() {
    let rows = present(&ids(&[ZELDA, MARIO]), &library(), &counts(&[]), None);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Mario", "Zelda"]);
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let rows = present(&ids(&[ZELDA, MARIO]), &library(), &counts(&[]), Some("mar"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Mario");

    let rows = present(&ids(&[ZELDA, MARIO]), &library(), &counts(&[]), Some("ELD"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Zelda");

    let rows = present(&ids(&[ZELDA, MARIO]), &library(), &counts(&[]), Some(""));
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_filter_keeps_surrounding_spaces() {
    let source = library().with(KART, "Mario Kart", 0);

    let rows = present(&ids(&[ZELDA, MARIO, KART]), &source, &counts(&[]), Some("mario "));

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Mario Kart"]);
}

#[test]
fn test_accented_names_sort_with_their_base_letter() {
    let source = StaticGames::default()
        .with(ZELDA, "Zelda", 0)
        .with(OKAMI, "Ōkami HD", 0)
        .with(ASTRAL, "Astral Chain", 0)
        .with(ECLAIR, "Éclair", 0);

    let rows = present(&ids(&[ZELDA, OKAMI, ASTRAL, ECLAIR]), &source, &counts(&[]), None);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Astral Chain", "Éclair", "Ōkami HD", "Zelda"]);
}

#[test]
fn test_download_enabled_only_when_remote_has_more() {
    let source = StaticGames::default()
        .with(ZELDA, "Zelda", 2)
        .with(MARIO, "Mario", 3);
    let remote = counts(&[(ZELDA, 5), (MARIO, 3)]);

    let rows = present(&ids(&[ZELDA, MARIO]), &source, &remote, None);

    let mario = rows.iter().find(|r| r.title_id == MARIO).unwrap();
    let zelda = rows.iter().find(|r| r.title_id == ZELDA).unwrap();
    assert!(!mario.can_download_shaders);
    assert!(zelda.can_download_shaders);
    assert_eq!((zelda.local_shader_count, zelda.remote_shader_count), (2, 5));
}

#[test]
fn test_missing_remote_count_defaults_to_zero() {
    let source = StaticGames::default().with(ZELDA, "Zelda", 0);

    let rows = present(&ids(&[ZELDA]), &source, &counts(&[]), None);

    assert_eq!(rows[0].remote_shader_count, 0);
    assert!(!rows[0].can_download_shaders);
}

#[test]
fn test_share_shaders_is_always_disabled() {
    let source = StaticGames::default()
        .with(ZELDA, "Zelda", 5000)
        .with(MARIO, "Mario", 0);
    let remote = counts(&[(ZELDA, 1), (MARIO, 9000)]);

    let rows = present(&ids(&[ZELDA, MARIO]), &source, &remote, None);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| !r.can_share_shaders));
}

#[test]
fn test_disk_source_reads_titles_and_shader_archives() {
    let (_tmp, _root, system) = setup_test_env();
    create_game(&system, ZELDA, Some("The Legend of Zelda"), 3);
    create_game(&system, MARIO, None, 0);

    let source = InstallationGames::new(DataPaths::new(&system));

    assert_eq!(source.display_name(ZELDA), "The Legend of Zelda");
    assert_eq!(source.display_name(MARIO), MARIO.to_uppercase());
    assert_eq!(source.local_shader_count(ZELDA), 3);
    assert_eq!(source.local_shader_count(MARIO), 0);

    let rows = present(&ids(&[ZELDA, MARIO]), &source, &counts(&[(ZELDA, 7)]), None);
    assert_eq!(rows[0].display_id, MARIO.to_uppercase());
    assert!(rows[1].can_download_shaders);
}

#[test]
fn test_corrupt_shader_archive_counts_as_empty() {
    let (_tmp, _root, system) = setup_test_env();
    create_game(&system, ZELDA, Some("Zelda"), 0);
    let archive = DataPaths::new(&system).game(ZELDA).shader_archive;
    std::fs::create_dir_all(archive.parent().unwrap()).unwrap();
    std::fs::write(&archive, "not a zip").unwrap();

    let source = InstallationGames::new(DataPaths::new(&system));
    assert_eq!(source.local_shader_count(ZELDA), 0);
}
