//! In-process registry of isolated sessions for multi-session hosts.
//!
//! # Invariants
//! - Each session lives behind its own lock; no state is shared between sessions.
//! - The registry lock is held only for lookup, insert and remove.
//! - A closed key is never handed out again.

use crate::session::Session;
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Opaque host-facing handle for one session.
pub type SessionKey = Uuid;

pub type RegistryResult<T> = Result<T, SessionRegistryError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRegistryError {
    InvalidSessionKey(String),
    SessionNotFound(SessionKey),
}

impl Display for SessionRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSessionKey(value) => write!(f, "invalid session key: `{value}`"),
            Self::SessionNotFound(key) => write!(f, "session not found: {key}"),
        }
    }
}

impl Error for SessionRegistryError {}

/// Parses a session key received from a host.
pub fn parse_session_key(value: &str) -> RegistryResult<SessionKey> {
    let trimmed = value.trim();
    Uuid::parse_str(trimmed)
        .map_err(|_| SessionRegistryError::InvalidSessionKey(trimmed.to_string()))
}

/// Session map keyed by random UUIDs.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionKey, Arc<Mutex<Session>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session and returns its key.
    pub fn open(&self) -> SessionKey {
        self.insert(Session::new())
    }

    /// Registers an already constructed session.
    pub fn insert(&self, session: Session) -> SessionKey {
        let key = Uuid::new_v4();
        self.lock_map().insert(key, Arc::new(Mutex::new(session)));
        info!("event=session_open module=registry status=ok key={key}");
        key
    }

    /// Runs `f` with exclusive access to one session.
    ///
    /// # Errors
    /// - `SessionNotFound` when `key` is unknown or already closed.
    pub fn with_session<T>(
        &self,
        key: SessionKey,
        f: impl FnOnce(&mut Session) -> T,
    ) -> RegistryResult<T> {
        let session = self
            .lock_map()
            .get(&key)
            .cloned()
            .ok_or(SessionRegistryError::SessionNotFound(key))?;
        // A panic mid-submission cannot leave a half-appended record behind.
        let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut guard))
    }

    /// Ends a session and drops its store. Returns `false` for unknown keys.
    pub fn close(&self, key: SessionKey) -> bool {
        let removed = self.lock_map().remove(&key).is_some();
        if removed {
            info!("event=session_close module=registry status=ok key={key}");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_map().is_empty()
    }

    fn lock_map(&self) -> MutexGuard<'_, HashMap<SessionKey, Arc<Mutex<Session>>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_session_key, SessionRegistry, SessionRegistryError};

    #[test]
    fn open_then_close_removes_session() {
        let registry = SessionRegistry::new();
        let key = registry.open();
        assert_eq!(registry.len(), 1);

        assert!(registry.close(key));
        assert!(!registry.close(key));
        assert!(registry.is_empty());
        assert_eq!(
            registry.with_session(key, |session| session.count()),
            Err(SessionRegistryError::SessionNotFound(key))
        );
    }

    #[test]
    fn parse_session_key_rejects_garbage() {
        assert_eq!(
            parse_session_key(" nope "),
            Err(SessionRegistryError::InvalidSessionKey("nope".to_string()))
        );
        let registry = SessionRegistry::new();
        let key = registry.open();
        assert_eq!(parse_session_key(&key.to_string()), Ok(key));
    }
}
