//! Storage for app's and user's preferences.
//!
//! One JSON namespace file on disk holds a single watched key, the selected
//! theme. The store exposes a synchronous accessor pair plus a conflated,
//! shared change stream: every committed write is re-published to a process
//! wide `watch` channel, so any number of subscribers observe the latest
//! value without ever seeing a backlog.
//!
//! The backing file is opened lazily on the first access, which may block on
//! I/O. Callers are expected to stay off the interactive thread for all
//! three operations; the settings layer does this with `spawn_blocking`.

use color_eyre::eyre::{eyre, Result};
use log::debug;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Name of the preference namespace file.
pub const PREFS_FILE: &str = "preferences.json";

/// Key under which the selected theme storage key is persisted.
pub const KEY_THEME: &str = "selected_theme";

/// Process-wide store for a single watched preference value.
///
/// Intended to be created once, wrapped in an [`Arc`] and shared for the
/// process lifetime; there is no explicit teardown.
pub struct PreferencesStorage {
    path: PathBuf,
    inner: Mutex<Option<Arc<Inner>>>,
}

struct Inner {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
    theme_tx: watch::Sender<Option<String>>,
}

impl PreferencesStorage {
    /// Store backed by the default per-user config location.
    ///
    /// Only computes the path; no file is touched until the first access.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(default_prefs_path()?))
    }

    /// Store backed by the given namespace file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            inner: Mutex::new(None),
        }
    }

    /// Currently persisted theme storage key, or `None` if never set.
    ///
    /// May block on I/O on the first access.
    pub fn selected_theme(&self) -> Result<Option<String>> {
        let inner = self.inner()?;
        let values = inner.lock_values();
        Ok(theme_value(&values))
    }

    /// Persist the given theme storage key, or clear it with `None`.
    ///
    /// The value is written through to disk before being re-published on the
    /// change stream, so subscribers observe writes in commit order.
    pub fn set_selected_theme(&self, value: Option<String>) -> Result<()> {
        let inner = self.inner()?;
        let mut values = inner.lock_values();
        debug!("Changing value of {} to {:?}", KEY_THEME, value);
        match &value {
            Some(key) => {
                values.insert(KEY_THEME.to_owned(), Value::String(key.clone()));
            }
            None => {
                values.remove(KEY_THEME);
            }
        }
        save_namespace(&inner.path, &values)?;
        // Publishing while the values lock is held keeps emission order
        // equal to commit order. Duplicate emissions are fine.
        inner.theme_tx.send_replace(value);
        Ok(())
    }

    /// Subscribe to the shared change stream for the selected theme.
    ///
    /// The receiver holds the current value immediately and is notified of
    /// every subsequent committed write. A single upstream sender lives for
    /// the store's lifetime and fans out to all receivers; a slow subscriber
    /// only ever sees the latest value.
    pub fn observe_selected_theme(&self) -> Result<watch::Receiver<Option<String>>> {
        Ok(self.inner()?.theme_tx.subscribe())
    }

    /// Open the backing namespace on first use.
    ///
    /// An open failure is returned as-is on every access; local file storage
    /// is not retried.
    fn inner(&self) -> Result<Arc<Inner>> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(inner) = guard.as_ref() {
            return Ok(Arc::clone(inner));
        }
        let inner = Arc::new(Inner::open(&self.path)?);
        *guard = Some(Arc::clone(&inner));
        Ok(inner)
    }
}

impl Inner {
    fn open(path: &Path) -> Result<Inner> {
        debug!("Opening preferences namespace at {}", path.display());
        let values = if path.exists() {
            load_namespace(path)?
        } else {
            Map::new()
        };
        // The channel is seeded with the persisted value so that the first
        // subscriber already observes it without waiting for a write.
        let (theme_tx, _) = watch::channel(theme_value(&values));
        Ok(Inner {
            path: path.to_path_buf(),
            values: Mutex::new(values),
            theme_tx,
        })
    }

    fn lock_values(&self) -> std::sync::MutexGuard<'_, Map<String, Value>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn theme_value(values: &Map<String, Value>) -> Option<String> {
    values
        .get(KEY_THEME)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Default location of the preference namespace file.
fn default_prefs_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .ok_or_else(|| eyre!("Could not determine config directory"))?;
    Ok(config_dir.join("theme-prefs").join(PREFS_FILE))
}

fn load_namespace(path: &Path) -> Result<Map<String, Value>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let values: Map<String, Value> = serde_json::from_reader(reader)
        .map_err(|e| eyre!("Failed to parse preferences file: {}", e))?;
    Ok(values)
}

fn save_namespace(path: &Path, values: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    set_secure_permissions(path)?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, values)?;
    writer.flush()?;

    Ok(())
}

/// Set restrictive file permissions (user read/write only)
#[cfg(unix)]
fn set_secure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = fs::metadata(path)?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(0o600);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

/// Set restrictive file permissions on Windows (best effort)
#[cfg(windows)]
fn set_secure_permissions(_path: &Path) -> Result<()> {
    // Files in user directories are secure by default on Windows.
    Ok(())
}
