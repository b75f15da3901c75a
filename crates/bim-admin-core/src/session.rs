//! Credential storage
//!
//! The console keeps three entries between runs: the access token, the
//! refresh token and the signed-in user's descriptor. [`SessionStore`] is the
//! key-value seam; [`Session`] is the typed view the rest of the console uses.

use bim_admin_types::SessionUser;
use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Access token key
pub const TOKEN_KEY: &str = "adminToken";
/// Refresh token key
pub const REFRESH_KEY: &str = "refreshToken";
/// Session descriptor key
pub const USER_KEY: &str = "userInfo";

/// Key-value storage for credentials
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store, used by tests and one-shot commands
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// JSON file store; every change is written through
///
/// The file is replaced atomically and readable by its owner only.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`
    ///
    /// A missing, empty or unparsable file yields an empty store; the next
    /// write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).unwrap_or_else(|e| {
                    warn!(path = %path.display(), error = %e, "Discarding unreadable session file");
                    BTreeMap::new()
                })
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "Opened session store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let raw = serde_json::to_vec_pretty(entries)?;
        let mut file = NamedTempFile::new_in(dir)?;
        owner_only(file.as_file())?;
        file.write_all(&raw)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| {
            Error::session(format!("cannot write {}: {}", self.path.display(), e.error))
        })?;
        Ok(())
    }
}

#[cfg(unix)]
fn owner_only(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn owner_only(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Typed access to the stored credentials
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Wrap a store
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Current access token
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Current refresh token
    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_KEY).filter(|t| !t.is_empty())
    }

    /// Stored session descriptor; an unreadable descriptor counts as absent
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Ignoring malformed session descriptor");
                None
            }
        }
    }

    /// Whether the signed-in user is a superadmin
    pub fn is_superuser(&self) -> bool {
        self.user().is_some_and(|u| u.is_superuser)
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store everything a successful login returns
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a write.
    pub fn store_login(
        &self,
        access: &str,
        refresh: Option<&str>,
        user: &SessionUser,
    ) -> Result<()> {
        self.store.set(TOKEN_KEY, access)?;
        match refresh {
            Some(refresh) => self.store.set(REFRESH_KEY, refresh)?,
            None => self.store.remove(REFRESH_KEY)?,
        }
        self.store.set(USER_KEY, &serde_json::to_string(user)?)
    }

    /// Replace the access token after a refresh
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a write.
    pub fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<()> {
        self.store.set(TOKEN_KEY, access)?;
        if let Some(refresh) = refresh {
            self.store.set(REFRESH_KEY, refresh)?;
        }
        Ok(())
    }

    /// Forget the token, refresh token and descriptor
    ///
    /// # Errors
    ///
    /// Returns the first error; the remaining keys are still removed.
    pub fn clear(&self) -> Result<()> {
        let mut first = None;
        for key in [TOKEN_KEY, REFRESH_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Failed to remove session entry");
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }
}
