use super::*;

fn scratch_store() -> TokenStore {
    let path = std::env::temp_dir().join(format!("adpilot-token-{}", uuid::Uuid::new_v4()));
    TokenStore::new(path)
}

#[test]
fn missing_file_means_logged_out() {
    let store = scratch_store();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn save_then_load_trims() {
    let store = scratch_store();
    store.save("  abc.def.ghi ").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("abc.def.ghi"));
    store.clear().unwrap();
}

#[test]
fn blank_file_means_logged_out() {
    let store = scratch_store();
    std::fs::write(store.path(), "\n  \n").unwrap();
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}

#[test]
fn clear_is_idempotent() {
    let store = scratch_store();
    store.save("tok").unwrap();
    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn load_or_else_persists_fresh_value_once() {
    let store = scratch_store();
    let (first, created) = store.load_or_else(|| "chat-1".to_owned()).unwrap();
    assert_eq!(first, "chat-1");
    assert!(created);

    let (second, created) = store
        .load_or_else(|| panic!("stored id should be reused"))
        .unwrap();
    assert_eq!(second, "chat-1");
    assert!(!created);
    store.clear().unwrap();
}
