//! Persisted location fragment
//!
//! The location is the durable text form of the active path. It is read
//! once at startup and again whenever it changes outside the application
//! (back/forward), and overwritten after every committed transition.

use crate::error::{LocationError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::fs;
use tracing::debug;

/// Default number of session history entries kept
const MAX_HISTORY_SIZE: usize = 50;

/// Storage for the location fragment
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Current fragment, or `None` if nothing was ever persisted
    async fn read(&self) -> Result<Option<String>>;

    /// Overwrite the fragment
    async fn write(&self, path: &str) -> Result<()>;

    /// Rewrite the current fragment in place
    ///
    /// Called when the stored fragment was normalized to a different path.
    /// Stores without history treat this as a plain write.
    async fn replace(&self, path: &str) -> Result<()> {
        self.write(path).await
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process location, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryLocation {
    fragment: Mutex<Option<String>>,
}

impl MemoryLocation {
    /// Create an empty location
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location holding `path`
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            fragment: Mutex::new(Some(path.into())),
        }
    }

    /// Replace the fragment from outside the application
    pub fn set(&self, path: impl Into<String>) {
        *lock(&self.fragment) = Some(path.into());
    }

    pub fn get(&self) -> Option<String> {
        lock(&self.fragment).clone()
    }
}

#[async_trait]
impl LocationStore for MemoryLocation {
    async fn read(&self) -> Result<Option<String>> {
        Ok(self.get())
    }

    async fn write(&self, path: &str) -> Result<()> {
        self.set(path);
        Ok(())
    }
}

/// Location persisted as a one-line text file
#[derive(Debug, Clone)]
pub struct FileLocation {
    path: PathBuf,
}

impl FileLocation {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LocationStore for FileLocation {
    async fn read(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Location file {} does not exist", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(LocationError::Read {
                    path: self.path.display().to_string(),
                    source,
                }
                .into())
            }
        };

        let fragment = content.trim();
        if fragment.is_empty() {
            Ok(None)
        } else {
            Ok(Some(fragment.to_string()))
        }
    }

    async fn write(&self, path: &str) -> Result<()> {
        let write_error = |source| LocationError::Write {
            path: self.path.display().to_string(),
            source,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        fs::write(&self.path, path).await.map_err(write_error)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct HistoryEntries {
    /// Oldest first
    entries: Vec<String>,
    /// Index of the current entry
    cursor: usize,
}

/// Back/forward stack layered over a backing location
///
/// Writes push a new entry (dropping any forward entries) unless they
/// repeat the current entry; replaces overwrite the current entry and
/// keep forward history. [`SessionHistory::back`] and
/// [`SessionHistory::forward`] move the cursor and persist the entry they
/// land on; callers then report an external location change.
pub struct SessionHistory {
    backing: Arc<dyn LocationStore>,
    history: Mutex<HistoryEntries>,
    max_entries: usize,
}

impl SessionHistory {
    /// Create a session history over a backing store
    pub fn new(backing: Arc<dyn LocationStore>) -> Self {
        Self {
            backing,
            history: Mutex::new(HistoryEntries::default()),
            max_entries: MAX_HISTORY_SIZE,
        }
    }

    /// Set maximum history size
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        lock(&self.history).cursor > 0
    }

    /// Check if we can go forward
    pub fn can_go_forward(&self) -> bool {
        let history = lock(&self.history);
        history.cursor + 1 < history.entries.len()
    }

    /// Entries, oldest first
    pub fn entries(&self) -> Vec<String> {
        lock(&self.history).entries.clone()
    }

    /// Move to the previous entry; returns false at the start of history
    pub async fn back(&self) -> Result<bool> {
        let target = {
            let mut history = lock(&self.history);
            if history.cursor == 0 {
                return Ok(false);
            }
            history.cursor -= 1;
            history.entries[history.cursor].clone()
        };
        self.backing.write(&target).await?;
        Ok(true)
    }

    /// Move to the next entry; returns false at the end of history
    pub async fn forward(&self) -> Result<bool> {
        let target = {
            let mut history = lock(&self.history);
            if history.cursor + 1 >= history.entries.len() {
                return Ok(false);
            }
            history.cursor += 1;
            history.entries[history.cursor].clone()
        };
        self.backing.write(&target).await?;
        Ok(true)
    }
}

#[async_trait]
impl LocationStore for SessionHistory {
    async fn read(&self) -> Result<Option<String>> {
        {
            let history = lock(&self.history);
            if let Some(current) = history.entries.get(history.cursor) {
                return Ok(Some(current.clone()));
            }
        }

        let persisted = self.backing.read().await?;
        if let Some(path) = &persisted {
            let mut history = lock(&self.history);
            if history.entries.is_empty() {
                history.entries.push(path.clone());
                history.cursor = 0;
            }
        }
        Ok(persisted)
    }

    async fn write(&self, path: &str) -> Result<()> {
        {
            let mut history = lock(&self.history);
            if history.entries.get(history.cursor).map(String::as_str) != Some(path) {
                let keep = if history.entries.is_empty() {
                    0
                } else {
                    history.cursor + 1
                };
                history.entries.truncate(keep);
                history.entries.push(path.to_string());

                // Trim history if it exceeds max size
                let overflow = history.entries.len().saturating_sub(self.max_entries);
                history.entries.drain(..overflow);
                history.cursor = history.entries.len() - 1;
            }
        }
        self.backing.write(path).await
    }

    async fn replace(&self, path: &str) -> Result<()> {
        {
            let mut history = lock(&self.history);
            let cursor = history.cursor;
            match history.entries.get_mut(cursor) {
                Some(current) => *current = path.to_string(),
                None => history.entries.push(path.to_string()),
            }
        }
        self.backing.write(path).await
    }
}
