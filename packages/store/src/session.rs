//! # Session value and its persistence
//!
//! [`Session`] is the in-memory record of who is logged in: the user, the bearer
//! token and a `ready` flag. It starts with `ready = false`; the flag flips to
//! `true` exactly once, after [`SessionStore::restore`] has read persistent storage,
//! so consumers can tell "no session" apart from "still loading".
//!
//! [`SessionStore`] owns the persistent side. It keeps two scoped entries in any
//! [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | `<scope>.user` | the user serialized as JSON |
//! | `<scope>.token` | the raw token string |
//!
//! Both are written at login ([`save`](SessionStore::save)), read once at startup
//! ([`restore`](SessionStore::restore)) and removed at logout
//! ([`clear`](SessionStore::clear)).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Scope used when none is configured.
pub const DEFAULT_SCOPE: &str = "talent";

/// Authenticated identity, token and load state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<U> {
    pub user: Option<U>,
    pub token: Option<String>,
    pub ready: bool,
}

impl<U> Default for Session<U> {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            ready: false,
        }
    }
}

impl<U> Session<U> {
    pub fn set_user(&mut self, user: U) {
        self.user = Some(user);
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Mark the session as loaded. Readiness never goes back to `false`.
    pub fn set_ready(&mut self, ready: bool) {
        if self.ready && !ready {
            tracing::warn!("ignoring attempt to mark a restored session as not ready");
            return;
        }
        self.ready = ready;
    }

    /// Drop user and token (logout). Readiness is kept.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// The bearer token, but only once the session is ready and the token is non-empty.
    ///
    /// Before readiness the stored value is indeterminate and callers must defer.
    pub fn token(&self) -> Option<&str> {
        if !self.ready {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Persists a [`Session`] into a [`KeyValueStore`] under a scope prefix.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    scope: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_scope(storage, DEFAULT_SCOPE)
    }

    pub fn with_scope(storage: S, scope: &str) -> Self {
        Self {
            storage,
            scope: scope.to_string(),
        }
    }

    pub fn user_key(&self) -> String {
        format!("{}.user", self.scope)
    }

    pub fn token_key(&self) -> String {
        format!("{}.token", self.scope)
    }

    /// One-time read of the persisted session.
    ///
    /// The returned session is always ready. A stored user that does not parse is
    /// treated as "no session": both entries are dropped so the next start is clean.
    pub async fn restore<U: DeserializeOwned>(&self) -> Session<U> {
        let mut session = Session::default();

        match self.load_user().await {
            Ok(user) => {
                session.user = user;
                session.token = self.storage.get(&self.token_key()).await;
            }
            Err(e) => {
                tracing::warn!("discarding persisted session: {e}");
                if let Err(e) = self.clear().await {
                    tracing::warn!("failed to remove malformed session: {e}");
                }
            }
        }

        session.set_ready(true);
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "session restored"
        );
        session
    }

    /// Persist a successful login.
    pub async fn save<U: Serialize>(&self, user: &U, token: &str) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(user).map_err(StoreError::Serialize)?;
        self.storage.set(&self.user_key(), &serialized).await?;
        self.storage.set(&self.token_key(), token).await?;
        Ok(())
    }

    /// Remove both persisted entries (logout).
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(&self.user_key()).await?;
        self.storage.remove(&self.token_key()).await?;
        Ok(())
    }

    async fn load_user<U: DeserializeOwned>(&self) -> Result<Option<U>, StoreError> {
        let key = self.user_key();
        let Some(raw) = self.storage.get(&key).await else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Parse { key, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Person {
        id: String,
        full_name: String,
        employee_number: u64,
    }

    fn person() -> Person {
        Person {
            id: "u-1".to_string(),
            full_name: "Ana Garcia".to_string(),
            employee_number: 42,
        }
    }

    #[test]
    fn test_token_is_withheld_until_ready() {
        let mut session: Session<Person> = Session::default();
        session.set_token("T");
        assert!(!session.ready);
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());

        session.set_ready(true);
        assert_eq!(session.token(), Some("T"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let mut session: Session<Person> = Session::default();
        session.set_ready(true);
        session.set_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_ready_never_reverts() {
        let mut session: Session<Person> = Session::default();
        session.set_ready(true);
        session.set_ready(false);
        assert!(session.ready);
    }

    #[test]
    fn test_clear_keeps_readiness() {
        let mut session = Session::default();
        session.set_ready(true);
        session.set_user(person());
        session.set_token("T");

        session.clear();
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(session.ready);
    }

    #[tokio::test]
    async fn test_restore_empty_storage_is_ready_without_session() {
        let store = SessionStore::new(MemoryStore::new());
        let session: Session<Person> = store.restore().await;

        assert!(session.ready);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[tokio::test]
    async fn test_login_survives_reload() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        store.save(&person(), "T").await.unwrap();

        // A fresh store over the same storage simulates a page reload.
        let reloaded = SessionStore::new(storage);
        let session: Session<Person> = reloaded.restore().await;

        assert!(session.ready);
        assert_eq!(session.token(), Some("T"));
        assert_eq!(session.user, Some(person()));
    }

    #[tokio::test]
    async fn test_malformed_user_falls_back_to_no_session() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        storage.set(&store.user_key(), "{not json").await.unwrap();
        storage.set(&store.token_key(), "T").await.unwrap();

        let session: Session<Person> = store.restore().await;
        assert!(session.ready);
        assert!(session.user.is_none());
        assert!(!session.is_authenticated());

        // Both entries were dropped
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_entries() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        store.save(&person(), "T").await.unwrap();
        assert_eq!(storage.len(), 2);

        store.clear().await.unwrap();
        assert!(storage.is_empty());

        let session: Session<Person> = store.restore().await;
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_scopes_are_isolated() {
        let storage = MemoryStore::new();
        let a = SessionStore::with_scope(storage.clone(), "a");
        let b = SessionStore::with_scope(storage.clone(), "b");
        a.save(&person(), "TA").await.unwrap();

        assert_eq!(a.token_key(), "a.token");
        let session: Session<Person> = b.restore().await;
        assert!(session.token.is_none());
    }
}
