//! Session behaviour shared by every store implementation

#![allow(clippy::unwrap_used, missing_docs)]

use bim_admin_core::{
    FileSessionStore, MemorySessionStore, Session, SessionStore,
    session::{REFRESH_KEY, TOKEN_KEY, USER_KEY},
};
use bim_admin_types::SessionUser;
use rstest::rstest;
use std::sync::Arc;

fn moderator() -> SessionUser {
    SessionUser {
        id: 9,
        username: "mod".into(),
        email: "mod@bim.org".into(),
        first_name: "Mo".into(),
        last_name: "Derator".into(),
        is_staff: true,
        is_superuser: false,
    }
}

fn file_store(dir: &tempfile::TempDir) -> Arc<dyn SessionStore> {
    Arc::new(FileSessionStore::open(dir.path().join("session.json")).unwrap())
}

#[rstest]
#[case::memory(false)]
#[case::file(true)]
fn test_login_then_logout_leaves_nothing(#[case] on_disk: bool) {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn SessionStore> = if on_disk {
        file_store(&dir)
    } else {
        Arc::new(MemorySessionStore::new())
    };
    let session = Session::new(Arc::clone(&store));

    session
        .store_login("access", Some("refresh"), &moderator())
        .unwrap();
    assert!(session.is_authenticated());
    assert!(!session.is_superuser());
    assert_eq!(session.user().unwrap().username, "mod");

    session.clear().unwrap();
    for key in [TOKEN_KEY, REFRESH_KEY, USER_KEY] {
        assert!(store.get(key).is_none(), "{key} survived logout");
    }
}

#[rstest]
fn test_login_without_refresh_drops_stale_refresh() {
    let session = Session::in_memory();
    session.store().set(REFRESH_KEY, "old").unwrap();

    session.store_login("access", None, &moderator()).unwrap();
    assert!(session.refresh_token().is_none());
}

#[rstest]
fn test_set_tokens_keeps_refresh_when_not_rotated() {
    let session = Session::in_memory();
    session
        .store_login("a1", Some("r1"), &moderator())
        .unwrap();
    session.set_tokens("a2", None).unwrap();

    assert_eq!(session.token().as_deref(), Some("a2"));
    assert_eq!(session.refresh_token().as_deref(), Some("r1"));
}
