//! Keyed blob storage for analytics and session identity
//!
//! The kiosk persists everything as opaque text blobs under fixed keys.
//! `FileStore` maps each key to a file in a root directory; `MemStore` is an
//! in-memory backend for tests, with an optional simulated write failure.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::storage as keys;

/// A keyed text-blob store. Values are opaque to the backend.
pub trait Storage {
    /// Read the blob stored under `key`, or `None` if the key has never been written
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Write (or overwrite) the blob under `key`
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Root directory for persistent analytics data
/// Priority: explicit flag > JCTT_DATA_DIR env var > platform data dir
pub fn data_root(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_owned();
    }
    if let Ok(dir) = env::var(keys::DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(keys::APP_DIR)
}

/// Root directory for login-session-scoped data
/// XDG_RUNTIME_DIR is cleared at logout, which is exactly the lifetime the
/// session identifier needs. Falls back to the cache dir where it isn't set.
pub fn session_root() -> PathBuf {
    if let Ok(dir) = env::var("XDG_RUNTIME_DIR") {
        return PathBuf::from(dir).join(keys::APP_DIR);
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(keys::APP_DIR)
}

/// File-backed store: one file per key inside a root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(key = %key, path = %path.display(), "No stored value for key");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)
    }
}

/// In-memory store for tests. Cloned handles share contents, so a test can
/// hand one clone to a recorder and inspect another afterwards.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemStore {
    cells: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising persistence error paths
    pub fn failing() -> Self {
        Self {
            cells: std::rc::Rc::default(),
            fail_writes: true,
        }
    }
}

#[cfg(test)]
impl Storage for MemStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("simulated write failure"));
        }
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
