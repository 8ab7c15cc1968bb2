use logos_core::config::Config;
use logos_core::SemanticEngine;
use std::fs;

fn setup(dir: &std::path::Path) -> Config {
    fs::write(
        dir.join("kjv.json"),
        r#"{
            "John 3:16": "For God so loved the world, that he gave his only begotten Son",
            "Ephesians 2:8": "For by grace are ye saved through faith",
            "Acts 4:12": "Neither is there salvation in any other."
        }"#,
    )
    .unwrap();
    fs::write(dir.join("strongs.json"), "{}").unwrap();
    Config {
        data_dir: dir.to_path_buf(),
        cache_file: Some("cache/index.bin".into()),
        ..Config::default()
    }
}

#[test]
fn cached_index_matches_fresh_build() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path());

    let first = SemanticEngine::open(&config).unwrap();
    assert!(dir.path().join("cache/index.bin").is_file());

    let second = SemanticEngine::open(&config).unwrap();
    assert_eq!(first.index(), second.index());
    assert_eq!(
        first.search_meaning("salvation by grace", 5),
        second.search_meaning("salvation by grace", 5)
    );
}

#[test]
fn corpus_edit_invalidates_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path());
    SemanticEngine::open(&config).unwrap();

    fs::write(
        dir.path().join("kjv.json"),
        r#"{"Acts 4:12": "Neither is there salvation in any other."}"#,
    )
    .unwrap();
    let engine = SemanticEngine::open(&config).unwrap();
    assert_eq!(engine.index().total_verses(), 1);
}

#[test]
fn corrupt_cache_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path());
    fs::create_dir_all(dir.path().join("cache")).unwrap();
    fs::write(dir.path().join("cache/index.bin"), b"\x00garbage").unwrap();

    let engine = SemanticEngine::open(&config).unwrap();
    assert_eq!(engine.index().total_verses(), 3);
    assert_eq!(engine.search_concept("salvation", 5).len(), 2);
}
