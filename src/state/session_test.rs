use super::*;
use crate::util::storage::MemoryStorage;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

fn valid_token() -> String {
    token_with(&serde_json::json!({ "username": "alice", "user_id": 7, "exp": 2_000 }))
}

fn fixed_clock() -> u64 {
    1_000
}

fn store(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    SessionStore::new(storage.clone()).with_clock(fixed_clock)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_store_is_unresolved() {
    let session = store(&MemoryStorage::new());
    assert!(!session.is_initialized());
    assert_eq!(session.identity(), None);
    assert_eq!(session.token(), None);
}

#[test]
fn initialize_without_stored_token_resolves_logged_out() {
    let storage = MemoryStorage::new();
    let mut session = store(&storage);
    assert!(!session.initialize());
    assert!(session.is_initialized());
    assert_eq!(session.identity(), None);
}

#[test]
fn initialize_restores_valid_token() {
    let token = valid_token();
    let storage = MemoryStorage::with_token(&token);
    let mut session = store(&storage);
    assert!(session.initialize());
    assert_eq!(session.token(), Some(token.as_str()));
    let identity = session.identity().expect("identity");
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.user_id, 7);
}

#[test]
fn initialize_clears_malformed_tokens() {
    let malformed: [&str; 6] = [
        "",
        "garbage",
        "a.b",
        "a.%%%.c",
        &token_with(&serde_json::json!({ "sub": "nobody" })),
        &token_with(&serde_json::json!({ "username": "alice", "user_id": 7, "exp": 10 })),
    ];
    for token in malformed {
        let storage = MemoryStorage::with_token(token);
        let mut session = store(&storage);
        assert!(!session.initialize(), "token {token:?} should not restore");
        assert!(session.is_initialized());
        assert_eq!(session.identity(), None);
        assert_eq!(session.token(), None);
        assert_eq!(storage.load(), None, "token {token:?} should be cleared");
    }
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_installs_and_persists_token() {
    let storage = MemoryStorage::new();
    let mut session = store(&storage);
    let token = valid_token();
    let identity = session.login(&token).expect("login").clone();
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.user_id, 7);
    assert_eq!(storage.load(), Some(token.clone()));
    assert_eq!(session.token(), Some(token.as_str()));
    assert!(session.is_initialized());
}

#[test]
fn login_with_bad_token_keeps_previous_session() {
    let storage = MemoryStorage::new();
    let mut session = store(&storage);
    let token = valid_token();
    session.login(&token).expect("login");

    assert!(session.login("not-a-token").is_err());
    assert_eq!(session.token(), Some(token.as_str()));
    assert_eq!(storage.load(), Some(token));
}

#[test]
fn login_with_bad_token_installs_nothing() {
    let storage = MemoryStorage::new();
    let mut session = store(&storage);
    assert!(session.login("x.y.z").is_err());
    assert_eq!(session.identity(), None);
    assert_eq!(storage.load(), None);
}

#[test]
fn logout_clears_everything_unconditionally() {
    let storage = MemoryStorage::new();
    let mut session = store(&storage);
    session.login(&valid_token()).expect("login");
    session.logout();
    assert_eq!(session.identity(), None);
    assert_eq!(session.token(), None);
    assert_eq!(storage.load(), None);
    assert!(session.is_initialized());

    session.logout();
    assert_eq!(session.identity(), None);
}

// =============================================================
// organization scoping
// =============================================================

#[test]
fn organization_id_prefers_token_claim() {
    let storage = MemoryStorage::new();
    let mut session = store(&storage);
    assert_eq!(session.organization_id(1), 1);

    session.login(&valid_token()).expect("login");
    assert_eq!(session.organization_id(1), 1);

    let scoped = token_with(&serde_json::json!({ "username": "bob", "user_id": 8, "organization_id": 4 }));
    session.login(&scoped).expect("login");
    assert_eq!(session.organization_id(1), 4);
}
