use contracts::system::auth::Session;
use web_sys::window;

/// localStorage key of the mirrored bearer token.
pub const TOKEN_KEY: &str = "token";
/// sessionStorage key of the serialized session.
const SESSION_KEY: &str = "pos_session";

/// Durable home of the bearer token outside the session object.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Token store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        get_local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("auth: could not persist token to localStorage");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Persisted copies of the session that a rejected token invalidates.
pub trait StoredSession {
    fn discard(&self);
}

/// The sessionStorage session together with the localStorage token.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl StoredSession for BrowserSession {
    fn discard(&self) {
        clear_session();
        LocalTokenStore.clear();
    }
}

/// Mirror the session token into `store` unless it already holds it.
///
/// Returns `true` when a write happened.
pub fn sync_token(store: &dyn TokenStore, session: Option<&Session>) -> bool {
    let Some(session) = session else {
        return false;
    };
    if store.get().as_deref() == Some(session.access_token.as_str()) {
        return false;
    }
    store.set(&session.access_token);
    log::debug!("auth: token mirrored to durable storage");
    true
}

/// Save the session so a page reload can restore it
pub fn save_session(session: &Session) {
    let Some(storage) = get_session_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => log::error!("auth: failed to serialize session: {}", e),
    }
}

/// Restore the session saved by `save_session`
pub fn load_session() -> Option<Session> {
    let json = get_session_storage()?.get_item(SESSION_KEY).ok()??;
    decode_session(&json)
}

pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

fn decode_session(json: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(json) {
        Ok(session) if !session.access_token.is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            log::warn!("auth: discarding unreadable stored session: {}", e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    pub(crate) struct MemoryTokenStore {
        pub value: RefCell<Option<String>>,
        pub writes: Cell<usize>,
    }

    impl TokenStore for MemoryTokenStore {
        fn get(&self) -> Option<String> {
            self.value.borrow().clone()
        }
        fn set(&self, token: &str) {
            self.writes.set(self.writes.get() + 1);
            *self.value.borrow_mut() = Some(token.to_string());
        }
        fn clear(&self) {
            *self.value.borrow_mut() = None;
        }
    }

    pub(crate) fn session_with(token: &str, roles: &[&str]) -> Session {
        Session {
            user: UserInfo {
                id: serde_json::json!(1),
                name: "Dewi".to_string(),
                email: Some("dewi@pos.test".to_string()),
                roles: roles.iter().map(|r| r.to_string()).collect(),
                permissions: vec![],
            },
            access_token: token.to_string(),
        }
    }

    #[test]
    fn test_sync_token_is_idempotent() {
        let store = MemoryTokenStore::default();
        let session = session_with("abc", &["admin"]);
        assert!(sync_token(&store, Some(&session)));
        assert!(!sync_token(&store, Some(&session)));
        assert_eq!(store.writes.get(), 1);
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_sync_token_overwrites_changed_token() {
        let store = MemoryTokenStore::default();
        store.set("old");
        assert!(sync_token(&store, Some(&session_with("new", &[]))));
        assert_eq!(store.get().as_deref(), Some("new"));
        assert_eq!(store.writes.get(), 2);
    }

    #[test]
    fn test_sync_without_session_does_nothing() {
        let store = MemoryTokenStore::default();
        store.set("kept");
        assert!(!sync_token(&store, None));
        assert_eq!(store.get().as_deref(), Some("kept"));
    }

    #[test]
    fn test_decode_session() {
        let json = serde_json::to_string(&session_with("t1", &["cashier"])).unwrap();
        assert_eq!(decode_session(&json).map(|s| s.access_token), Some("t1".to_string()));
        assert!(decode_session("{not json").is_none());
        let empty = serde_json::to_string(&session_with("", &[])).unwrap();
        assert!(decode_session(&empty).is_none());
    }
}
