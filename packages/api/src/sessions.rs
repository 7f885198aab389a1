//! # Session persistence
//!
//! The session is a bare `{ email, userId }` pair under the `"session"`
//! storage key. [`LocalSessions`] keeps it in browser `localStorage` so a
//! reload stays signed in; [`MemorySessions`] serves tests and native builds.
//!
//! Corrupt stored JSON is treated as "no session": it is discarded and the
//! key cleared, never surfaced as an error.

use store::Session;

/// Where the client-side session lives.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Parse a persisted session, tolerating garbage.
pub fn parse_session(json: &str) -> Option<Session> {
    serde_json::from_str(json).ok()
}

/// In-memory session holder for tests and non-browser platforms.
#[derive(Clone, Debug, Default)]
pub struct MemorySessions {
    session: std::sync::Arc<std::sync::Mutex<Option<Session>>>,
}

impl MemorySessions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessions {
    fn load(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

/// Browser `localStorage` session store.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct LocalSessions;

#[cfg(target_arch = "wasm32")]
impl LocalSessions {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalSessions {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let raw = storage.get_item(Session::storage_key()).ok()??;
        match parse_session(&raw) {
            Some(session) => Some(session),
            None => {
                // Corrupt entry; drop it so the next load is clean.
                let _ = storage.remove_item(Session::storage_key());
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Ok(json) = serde_json::to_string(session) {
            if storage.set_item(Session::storage_key(), &json).is_err() {
                tracing::warn!("failed to persist session to localStorage");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(Session::storage_key());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_valid() {
        let session = parse_session(r#"{"email":"a@b.com","userId":"u_1"}"#).unwrap();
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.user_id, "u_1");
    }

    #[test]
    fn test_parse_session_corrupt_returns_none() {
        assert!(parse_session("").is_none());
        assert!(parse_session("{").is_none());
        assert!(parse_session(r#"{"email":"a@b.com"}"#).is_none());
    }

    #[test]
    fn test_memory_sessions_save_load_clear() {
        let sessions = MemorySessions::new();
        assert!(sessions.load().is_none());

        let session = Session {
            email: "a@b.com".to_string(),
            user_id: "u_1".to_string(),
        };
        sessions.save(&session);
        assert_eq!(sessions.load(), Some(session));

        sessions.clear();
        assert!(sessions.load().is_none());
    }
}
