use std::{fs, sync::Arc};

use cinema_eats_core::favorites::{
    FAVORITES_STORAGE_KEY, FavoritesStorage, FavoritesStore, FileStorage,
};

#[test]
fn favorites_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut session =
        FavoritesStore::load(Arc::new(FileStorage::new(dir.path())));
    assert!(session.toggle("chef-pasta-aglio").persisted);
    session.toggle("tampopo-ramen");
    session.toggle("x");
    drop(session);

    let restarted =
        FavoritesStore::load(Arc::new(FileStorage::new(dir.path())));
    let ids: Vec<&str> = restarted.ids().iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["chef-pasta-aglio", "tampopo-ramen", "x"]);
}

#[test]
fn document_is_a_plain_json_list_under_the_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let mut store = FavoritesStore::load(Arc::new(storage.clone()));
    store.toggle("burnt-fine-dining");

    let path = dir.path().join(format!("{FAVORITES_STORAGE_KEY}.json"));
    assert_eq!(fs::read_to_string(path).unwrap(), r#"["burnt-fine-dining"]"#);
    assert!(storage.read(FAVORITES_STORAGE_KEY).unwrap().is_some());
}

#[test]
fn corrupt_file_starts_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.write(FAVORITES_STORAGE_KEY, "[1, 2").unwrap();

    let mut store = FavoritesStore::load(Arc::new(storage.clone()));
    assert!(store.is_empty());

    store.toggle("ratatouille-final-dish");
    assert_eq!(
        storage.read(FAVORITES_STORAGE_KEY).unwrap().as_deref(),
        Some(r#"["ratatouille-final-dish"]"#)
    );
}

#[test]
fn unwritable_root_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let storage = FileStorage::new(blocker.join("nested"));
    let mut store = FavoritesStore::load(Arc::new(storage));
    let outcome = store.toggle("chef-pasta-aglio");
    assert!(outcome.added);
    assert!(!outcome.persisted);
    assert!(store.is_favorite("chef-pasta-aglio"));
}
