//! # Session Storage
//!
//! The authenticated session (bearer token + cached user record) lives behind the
//! [`SessionStore`] trait and is injected into [`ApiClient`](crate::services::api::ApiClient).
//!
//! ## Storage Layout
//!
//! Both stores keep the browser key-value layout: the opaque token under
//! [`TOKEN_KEY`] and the serialized user record under [`USER_KEY`]. A token without
//! a readable user is not a session.
//!
//! ```text
//! .blog-session.json
//! {
//!   "token": "eyJhbGciOi...",
//!   "user": "{\"id\":1,\"name\":\"ada\",\"email\":\"ada@example.com\"}"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use shared::User;
use thiserror::Error;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Authenticated identity held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt session data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Read-many/write-rare storage for the single active session.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Result<Option<Session>, SessionStoreError>;

    fn set(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove the session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// In-process store. Sessions do not survive the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.session.read().clone())
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.session.write() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.session.write() = None;
        Ok(())
    }
}

/// JSON key-value file store.
///
/// Keys other than `token` and `user` are preserved on write, so the file can be
/// shared with other client-side settings.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SessionStoreError {
        SessionStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, SessionStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
        if items.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(self.io_error(e)),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Readers never observe a partially written file
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);

        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&tmp, raw).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<Session>, SessionStoreError> {
        let items = self.read_items()?;

        let Some(token) = items.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let user = match items.get(USER_KEY).map(|raw| serde_json::from_str::<User>(raw)) {
            Some(Ok(user)) => user,
            Some(Err(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Stored user record is unreadable, ignoring session");
                return Ok(None);
            }
            None => {
                tracing::warn!(path = %self.path.display(), "Token stored without user record, ignoring session");
                return Ok(None);
            }
        };

        Ok(Some(Session {
            token: token.clone(),
            user,
        }))
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        let _guard = self.write_lock.lock();

        let mut items = match self.read_items() {
            Ok(items) => items,
            Err(SessionStoreError::Corrupt(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt session file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(TOKEN_KEY.to_string(), session.token.clone());
        items.insert(USER_KEY.to_string(), serde_json::to_string(&session.user)?);

        self.write_items(&items)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let _guard = self.write_lock.lock();

        let mut items = match self.read_items() {
            Ok(items) => items,
            Err(SessionStoreError::Corrupt(_)) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        items.remove(TOKEN_KEY);
        items.remove(USER_KEY);

        self.write_items(&items)
    }
}
