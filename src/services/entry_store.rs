use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{debug, info, warn, error};
use crate::errors::WikiError;
use crate::utils::{is_storable_title, ENTRY_FILE_SUFFIX};

const ENTRY_EXTENSION: &str = "md";

/// Persistence abstraction mapping entry titles to their markup
pub trait EntryStore: Send + Sync {
    /// All stored titles, sorted
    fn list_entries(&self) -> Result<Vec<String>, WikiError>;

    /// Content of the entry with exactly this title, if any
    fn get_entry(&self, title: &str) -> Result<Option<String>, WikiError>;

    /// Write or overwrite the entry with exactly this title
    fn save_entry(&self, title: &str, content: &str) -> Result<(), WikiError>;
}

/// Store keeping one `<title>.md` file per entry in a flat directory
#[derive(Clone)]
pub struct FileEntryStore {
    base_dir: PathBuf,
}

impl FileEntryStore {
    /// Create a new store, creating the directory when missing
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, WikiError> {
        let base_dir = base_dir.into();
        if !base_dir.is_dir() {
            info!("Creating entries directory {:?}", base_dir);
            fs::create_dir_all(&base_dir).map_err(|e| {
                error!("Failed to create entries directory {:?}: {}", base_dir, e);
                WikiError::Io(e)
            })?;
        }
        debug!("Opened FileEntryStore at {:?}", base_dir);
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn entry_path(&self, title: &str) -> Option<PathBuf> {
        is_storable_title(title)
            .then(|| self.base_dir.join(format!("{}{}", title, ENTRY_FILE_SUFFIX)))
    }
}

impl EntryStore for FileEntryStore {
    fn list_entries(&self) -> Result<Vec<String>, WikiError> {
        debug!("Listing entries in {:?}", self.base_dir);

        let dir = fs::read_dir(&self.base_dir).map_err(|e| {
            error!("Failed to read entries directory {:?}: {}", self.base_dir, e);
            WikiError::Io(e)
        })?;

        let mut titles = Vec::new();
        for entry in dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                continue;
            }
            let path = entry.path();
            let is_entry = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == ENTRY_EXTENSION)
                .unwrap_or(false);
            if !is_entry {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => titles.push(stem.to_string()),
                None => warn!("Skipping entry with non UTF-8 name: {:?}", path),
            }
        }

        titles.sort();
        info!("Listed {} entries", titles.len());
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>, WikiError> {
        let Some(path) = self.entry_path(title) else {
            warn!("Refusing to read entry with unusable title {:?}", title);
            return Ok(None);
        };

        // Anything list_entries would skip is not an entry either
        if path.exists() && !path.is_file() {
            warn!("Entry path {:?} is not a regular file", path);
            return Ok(None);
        }

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read entry '{}', {} bytes", title, content.len());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Entry '{}' does not exist", title);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to read entry {:?}: {}", path, e);
                Err(WikiError::Io(e))
            }
        }
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<(), WikiError> {
        let path = self
            .entry_path(title)
            .ok_or_else(|| WikiError::InvalidTitle(title.to_string()))?;

        fs::write(&path, content).map_err(|e| {
            error!("Failed to write entry {:?}: {}", path, e);
            WikiError::Io(e)
        })?;

        info!("Saved entry '{}', {} bytes", title, content.len());
        Ok(())
    }
}

/// Store keeping entries in memory, for embedding and tests
#[derive(Default)]
pub struct MemoryEntryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(title, content)` pairs
    pub fn with_entries<I, T, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, C)>,
        T: Into<String>,
        C: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(title, content)| (title.into(), content.into()))
            .collect();
        Self { entries: Mutex::new(entries) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EntryStore for MemoryEntryStore {
    fn list_entries(&self) -> Result<Vec<String>, WikiError> {
        Ok(self.lock().keys().cloned().collect())
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>, WikiError> {
        Ok(self.lock().get(title).cloned())
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<(), WikiError> {
        if !is_storable_title(title) {
            return Err(WikiError::InvalidTitle(title.to_string()));
        }
        self.lock().insert(title.to_string(), content.to_string());
        debug!("Saved in-memory entry '{}'", title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_store() -> (TempDir, FileEntryStore) {
        let dir = TempDir::new().unwrap();
        let store = FileEntryStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("wiki").join("entries");
        let store = FileEntryStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn lists_only_markdown_files_without_extension() {
        let (dir, store) = file_store();
        fs::write(dir.path().join("HTML.md"), "# HTML").unwrap();
        fs::write(dir.path().join("CSS.md"), "# CSS").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("Folder.md")).unwrap();

        assert_eq!(store.list_entries().unwrap(), vec!["CSS", "HTML"]);
    }

    #[test]
    fn save_then_get_keeps_original_casing() {
        let (dir, store) = file_store();
        store.save_entry("Python", "# Python\nA language.").unwrap();

        assert!(dir.path().join("Python.md").is_file());
        assert_eq!(store.get_entry("Python").unwrap().as_deref(), Some("# Python\nA language."));
        assert_eq!(store.list_entries().unwrap(), vec!["Python"]);
    }

    #[test]
    fn save_overwrites_existing_entry() {
        let (_dir, store) = file_store();
        store.save_entry("Git", "old").unwrap();
        store.save_entry("Git", "new").unwrap();
        assert_eq!(store.get_entry("Git").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn missing_entry_is_none() {
        let (_dir, store) = file_store();
        assert_eq!(store.get_entry("Django").unwrap(), None);
    }

    #[test]
    fn path_like_titles_never_touch_the_filesystem() {
        let (dir, _store) = file_store();
        fs::write(dir.path().join("secret.md"), "hidden").unwrap();
        let inner = FileEntryStore::open(dir.path().join("inner")).unwrap();

        assert_eq!(inner.get_entry("../secret").unwrap(), None);
        assert!(matches!(
            inner.save_entry("../escape", "x"),
            Err(WikiError::InvalidTitle(_))
        ));
        assert!(!dir.path().join("escape.md").exists());
    }

    #[test]
    fn directory_named_like_an_entry_is_absent() {
        let (dir, store) = file_store();
        fs::create_dir(dir.path().join("Folder.md")).unwrap();
        assert_eq!(store.get_entry("Folder").unwrap(), None);
    }

    #[test]
    fn overlong_title_is_absent_and_unsavable() {
        let (_dir, store) = file_store();
        let title = "a".repeat(300);
        assert_eq!(store.get_entry(&title).unwrap(), None);
        assert!(matches!(store.save_entry(&title, "x"), Err(WikiError::InvalidTitle(_))));
    }

    #[test]
    fn memory_store_lookup_is_exact_case() {
        let store = MemoryEntryStore::with_entries([("HTML", "markup")]);
        assert_eq!(store.get_entry("HTML").unwrap().as_deref(), Some("markup"));
        assert_eq!(store.get_entry("html").unwrap(), None);
    }
}
