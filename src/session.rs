//! Session Context
//!
//! The logged-in user as an explicit value. Created on login, restored from
//! `localStorage` at start-up, torn down on logout. Role checks here only
//! decide what the UI shows; the backend enforces access.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config;
use crate::error::ApiError;
use crate::models::LoginResponse;

const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "usuario_id";
const KEY_USERNAME: &str = "nombre_usuario";
const KEY_ROLE_ID: &str = "rol_id";

const ADMIN_ROLE: &str = "1";

/// String key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; a no-op when storage is unavailable
pub struct BrowserStorage(Option<web_sys::Storage>);

impl BrowserStorage {
    pub fn local() -> Self {
        Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not write '{}' to localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.0 {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: u32,
    pub username: String,
    pub role_id: String,
}

impl Session {
    pub fn from_login(response: LoginResponse) -> Result<Self, ApiError> {
        let user_id = response
            .usuario_id
            .parse()
            .map_err(|_| ApiError::Decode(format!("usuario_id '{}' is not numeric", response.usuario_id)))?;
        Ok(Self {
            token: response.token,
            user_id,
            username: response.nombre_usuario,
            role_id: response.rol_id,
        })
    }

    /// Rebuild from storage. Needs a token and a numeric user id.
    pub fn restore(store: &dyn KeyValueStore) -> Option<Self> {
        let token = store.get(KEY_TOKEN).filter(|t| !t.is_empty())?;
        let user_id = store.get(KEY_USER_ID)?.parse().ok()?;
        Some(Self {
            token,
            user_id,
            username: store.get(KEY_USERNAME).unwrap_or_default(),
            role_id: store.get(KEY_ROLE_ID).unwrap_or_default(),
        })
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        store.set(KEY_TOKEN, &self.token);
        store.set(KEY_USER_ID, &self.user_id.to_string());
        store.set(KEY_USERNAME, &self.username);
        store.set(KEY_ROLE_ID, &self.role_id);
    }

    pub fn clear(store: &dyn KeyValueStore) {
        for key in [KEY_TOKEN, KEY_USER_ID, KEY_USERNAME, KEY_ROLE_ID] {
            store.remove(key);
        }
    }

    /// After a profile update
    pub fn rename(&mut self, username: &str, store: &dyn KeyValueStore) {
        self.username = username.to_string();
        store.set(KEY_USERNAME, username);
    }

    pub fn is_admin(&self) -> bool {
        self.role_id == ADMIN_ROLE
    }
}

/// Tear down `session` when the backend rejected its token.
///
/// Returns whether a session was actually ended.
pub fn expire(session: &mut Option<Session>, error: &ApiError, store: &dyn KeyValueStore) -> bool {
    if session.is_none() || !error.is_unauthorized() {
        return false;
    }
    *session = None;
    Session::clear(store);
    true
}

/// Author fields stamped on new posts and comments
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: u32,
    pub name: String,
}

impl Author {
    pub fn of(session: Option<&Session>) -> Self {
        match session {
            Some(s) if !s.username.is_empty() => Self {
                id: s.user_id,
                name: s.username.clone(),
            },
            Some(s) => Self {
                id: s.user_id,
                name: config::ANONYMOUS_NAME.to_string(),
            },
            None => Self {
                id: config::ANONYMOUS_ID,
                name: config::ANONYMOUS_NAME.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    /// No session: send to login
    LoginRequired,
    /// Logged in without the admin role
    Denied,
    Granted,
}

pub fn admin_access(session: Option<&Session>) -> AdminAccess {
    match session {
        None => AdminAccess::LoginRequired,
        Some(s) if s.is_admin() => AdminAccess::Granted,
        Some(_) => AdminAccess::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_response(role: &str) -> LoginResponse {
        LoginResponse {
            token: "tok".to_string(),
            usuario_id: "42".to_string(),
            nombre_usuario: "vega".to_string(),
            rol_id: role.to_string(),
        }
    }

    #[test]
    fn test_login_persist_restore_roundtrip() {
        let store = MemoryStorage::default();
        let session = Session::from_login(login_response("2")).unwrap();
        session.persist(&store);

        assert_eq!(store.get("usuario_id").as_deref(), Some("42"));
        assert_eq!(Session::restore(&store), Some(session));
    }

    #[test]
    fn test_restore_requires_token_and_id() {
        let store = MemoryStorage::default();
        assert_eq!(Session::restore(&store), None);

        store.set("usuario_id", "5");
        assert_eq!(Session::restore(&store), None);

        store.set("token", "tok");
        store.set("usuario_id", "cinco");
        assert_eq!(Session::restore(&store), None);
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let store = MemoryStorage::default();
        Session::from_login(login_response("1")).unwrap().persist(&store);
        Session::clear(&store);
        for key in ["token", "usuario_id", "nombre_usuario", "rol_id"] {
            assert!(store.get(key).is_none());
        }
    }

    #[test]
    fn test_non_numeric_login_id_rejected() {
        let mut res = login_response("1");
        res.usuario_id = "abc".to_string();
        assert!(Session::from_login(res).is_err());
    }

    #[test]
    fn test_rename_updates_storage() {
        let store = MemoryStorage::default();
        let mut session = Session::from_login(login_response("2")).unwrap();
        session.persist(&store);
        session.rename("vega2", &store);
        assert_eq!(session.username, "vega2");
        assert_eq!(store.get("nombre_usuario").as_deref(), Some("vega2"));
    }

    #[test]
    fn test_admin_access() {
        let admin = Session::from_login(login_response("1")).unwrap();
        let member = Session::from_login(login_response("2")).unwrap();
        assert_eq!(admin_access(None), AdminAccess::LoginRequired);
        assert_eq!(admin_access(Some(&member)), AdminAccess::Denied);
        assert_eq!(admin_access(Some(&admin)), AdminAccess::Granted);
    }

    #[test]
    fn test_author_defaults_to_anonymous() {
        assert_eq!(Author::of(None), Author { id: 0, name: "Anonimo".to_string() });
        let session = Session::from_login(login_response("2")).unwrap();
        assert_eq!(Author::of(Some(&session)), Author { id: 42, name: "vega".to_string() });
    }

    #[test]
    fn test_401_ends_session_and_clears_storage() {
        let store = MemoryStorage::default();
        let mut session = Some(Session::from_login(login_response("2")).unwrap());
        session.as_ref().unwrap().persist(&store);

        let rejected = ApiError::Status { status: 401, message: None };
        assert!(expire(&mut session, &rejected, &store));
        assert!(session.is_none());
        assert!(store.get("token").is_none());
        assert_eq!(Session::restore(&store), None);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let store = MemoryStorage::default();
        let mut session = Some(Session::from_login(login_response("2")).unwrap());
        session.as_ref().unwrap().persist(&store);

        for err in [
            ApiError::Status { status: 403, message: None },
            ApiError::Status { status: 500, message: None },
            ApiError::Decode("x".into()),
        ] {
            assert!(!expire(&mut session, &err, &store));
        }
        assert!(session.is_some());
        assert_eq!(store.get("token").as_deref(), Some("tok"));

        let mut none = None;
        let rejected = ApiError::Status { status: 401, message: None };
        assert!(!expire(&mut none, &rejected, &store));
    }

    #[tokio::test]
    async fn test_login_through_api_is_not_admin() {
        use crate::api::AuthApi;
        use crate::testing::FakeApi;

        let store = MemoryStorage::default();
        let response = FakeApi::new().login("vega", "secreto").await.unwrap();
        let session = Session::from_login(response).unwrap();
        session.persist(&store);

        assert_eq!(session.user_id, 42);
        assert!(!session.is_admin());
        assert_eq!(store.get("token").as_deref(), Some("fake-token"));
    }
}
