use super::*;

#[test]
fn memory_storage_round_trips_and_clears() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.load(), None);
    storage.save("abc");
    assert_eq!(storage.load().as_deref(), Some("abc"));
    storage.clear();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_clones_share_the_slot() {
    let storage = MemoryStorage::with_token("abc");
    let observer = storage.clone();
    storage.clear();
    assert_eq!(observer.load(), None);
}

#[test]
fn browser_storage_is_inert_off_browser() {
    let storage = BrowserStorage;
    storage.save("abc");
    assert_eq!(storage.load(), None);
    storage.clear();
}
