//! JSON-file implementation of [`ConfigRepository`].
//!
//! # File layout
//!
//! One file (default `./data/chat_config.json`) containing exactly one
//! pretty-printed [`ChatConfig`], non-ASCII text written literally.
//!
//! # Atomic replace
//!
//! A plain file has no transactions, so `save` never writes the target in
//! place:
//!
//! ```text
//! 1. write  .chat_config.json.<uuid>.tmp   (same directory as the target)
//! 2. fsync  the temporary file
//! 3. rename temporary → chat_config.json   (atomic on the same filesystem)
//! 4. fsync  the directory                  (Unix only)
//! ```
//!
//! A reader, in this process or another one, sees either the old file or the
//! new one.  If any step fails the temporary file is removed.  The steps run
//! on the blocking pool as a single task, so a `save` whose caller goes away
//! (client disconnect, timeout) still finishes or cleans up before the next
//! writer gets the lock.
//!
//! # Locking
//!
//! Inside the process a `tokio::sync::RwLock` serialises writers against each
//! other and against readers.  Seeding on first read happens under the write
//! lock after re-checking that the file is still missing, so two concurrent
//! first reads seed exactly once.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chat_config_core::{default_config, parse_document, render_document, ChatConfig};
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::{ConfigRepository, StorageError};

/// File-backed store for the single chat config document.
///
/// Construct one per process and share it behind an `Arc`.
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl FileConfigStore {
    /// Creates a store for `path`.  Nothing is touched on disk until the first
    /// `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    /// Path of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the file.  `Ok(None)` means the file does not exist.
    async fn read_existing(&self) -> Result<Option<ChatConfig>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => parse_document(&text)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    path: self.path.clone(),
                    source,
                }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Writes `config` to a temporary sibling file and renames it over the
    /// target.
    ///
    /// The whole sequence runs as one blocking task that owns `guard`, so the
    /// write lock is held until the rename has landed or the temporary file
    /// has been removed, even if the calling future is dropped halfway.
    async fn write_atomically(
        &self,
        guard: OwnedRwLockWriteGuard<()>,
        config: &ChatConfig,
    ) -> Result<(), StorageError> {
        let text = render_document(config).map_err(StorageError::Encode)?;
        let dir = self.parent_dir().to_path_buf();
        let target = self.path.clone();
        let tmp_path = dir.join(format!(".{}.{}.tmp", self.file_name(), Uuid::new_v4()));

        let task = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            replace_file(&dir, &tmp_path, &target, text.as_bytes())
        });

        match task.await {
            Ok(result) => result,
            Err(join_err) => Err(StorageError::Io {
                path: self.path.clone(),
                source: std::io::Error::other(join_err),
            }),
        }
    }

    /// Directory holding the document.  A bare file name lives in `.`.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chat_config.json".to_string())
    }
}

/// Creates `dir`, writes `bytes` to `tmp_path`, fsyncs it, renames it over
/// `target` and fsyncs `dir`.  On failure the temporary file is removed.
fn replace_file(
    dir: &Path,
    tmp_path: &Path,
    target: &Path,
    bytes: &[u8],
) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    debug!(tmp = %tmp_path.display(), "writing chat config to temporary file");
    if let Err(source) = write_and_rename(tmp_path, target, bytes) {
        if let Err(e) = std::fs::remove_file(tmp_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(tmp = %tmp_path.display(), "could not remove temporary file: {e}");
            }
        }
        return Err(StorageError::Io {
            path: target.to_path_buf(),
            source,
        });
    }

    // Best effort: the new document is already in place.
    if let Err(e) = sync_dir(dir) {
        warn!(dir = %dir.display(), "could not fsync data directory: {e}");
    }
    Ok(())
}

fn write_and_rename(tmp_path: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    std::fs::rename(tmp_path, target)
}

/// Persists the directory entry written by the rename.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

/// Windows cannot open a directory as a file; NTFS journals the rename.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl ConfigRepository for FileConfigStore {
    async fn load(&self) -> Result<ChatConfig, StorageError> {
        {
            let _read = self.lock.read().await;
            if let Some(config) = self.read_existing().await? {
                return Ok(config);
            }
        }

        let write = Arc::clone(&self.lock).write_owned().await;
        // Another first read may have seeded while we waited for the lock.
        if let Some(config) = self.read_existing().await? {
            return Ok(config);
        }

        let config = default_config();
        self.write_atomically(write, &config).await?;
        info!(path = %self.path.display(), "seeded chat config with built-in default");
        Ok(config)
    }

    async fn save(&self, config: &ChatConfig) -> Result<(), StorageError> {
        let write = Arc::clone(&self.lock).write_owned().await;
        self.write_atomically(write, config).await?;
        debug!(
            path = %self.path.display(),
            chats = config.chats.len(),
            "chat config saved"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chat_config_core::{ChatItem, Theme};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileConfigStore {
        FileConfigStore::new(dir.path().join("data").join("chat_config.json"))
    }

    fn small_config() -> ChatConfig {
        ChatConfig {
            title: "T".to_string(),
            theme: Theme::Dark,
            chats: vec![ChatItem::new("1", "n", "d", "https://example.com/1")],
            categories: None,
        }
    }

    fn leftover_tmp_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "tmp"))
            .collect()
    }

    #[tokio::test]
    async fn test_load_on_empty_store_returns_and_persists_default() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        // Act
        let cfg = store.load().await.unwrap();

        // Assert: the default is returned and now exists on disk
        assert_eq!(cfg, default_config());
        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(parse_document(&on_disk).unwrap(), default_config());
    }

    #[tokio::test]
    async fn test_seeded_file_is_pretty_and_not_escaped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.load().await.unwrap();

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("\n  \"title\": \"AI Chat 集合\""));
    }

    #[tokio::test]
    async fn test_second_load_reads_seeded_file() {
        // Arrange: seed, then edit the file behind the store's back
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.load().await.unwrap();
        let edited = render_document(&small_config()).unwrap();
        std::fs::write(store.path(), edited).unwrap();

        // Act
        let cfg = store.load().await.unwrap();

        // Assert: the file wins; no reseeding once it exists
        assert_eq!(cfg, small_config());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&small_config()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), small_config());
    }

    #[tokio::test]
    async fn test_save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::new(dir.path().join("a").join("b").join("c.json"));

        store.save(&small_config()).await.unwrap();

        assert!(store.path().is_file());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&small_config()).await.unwrap();
        store.save(&default_config()).await.unwrap();

        assert!(leftover_tmp_files(store.parent_dir()).is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_error_and_file_untouched() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.parent_dir()).unwrap();
        std::fs::write(store.path(), "{\"title\": \"half").unwrap();

        // Act
        let result = store.load().await;

        // Assert: hard failure, never replaced with the default
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "{\"title\": \"half"
        );
    }

    #[tokio::test]
    async fn test_load_schema_violation_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.parent_dir()).unwrap();
        std::fs::write(store.path(), r#"{"title":"T","theme":"blue","chats":[]}"#).unwrap();

        assert!(matches!(
            store.load().await,
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_when_path_is_directory_is_io_error() {
        // Arrange: the document path exists but is a directory
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::new(dir.path());

        // Act
        let result = store.load().await;

        // Assert
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[tokio::test]
    async fn test_save_under_regular_file_is_io_error() {
        // Arrange: the would-be parent directory is a plain file
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FileConfigStore::new(blocker.join("chat_config.json"));

        // Act
        let result = store.save(&small_config()).await;

        // Assert
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_all_see_default() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(store_in(&dir));

        // Act: many first reads racing to seed
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.load().await }));
        }

        // Assert
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), default_config());
        }
        assert!(leftover_tmp_files(store.parent_dir()).is_empty());
    }

    #[test]
    fn test_replace_file_creates_target_and_syncs_directory() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        let target = data.join("chat_config.json");
        let tmp = data.join(".chat_config.json.test.tmp");

        // Act
        replace_file(&data, &tmp, &target, b"{}\n").unwrap();

        // Assert: target written, temporary gone, directory can be synced again
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "{}\n");
        assert!(!tmp.exists());
        sync_dir(&data).unwrap();
    }

    #[test]
    fn test_replace_file_failure_removes_temporary() {
        // Arrange: the target is a non-empty directory, so the rename fails
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        std::fs::create_dir_all(target.join("child")).unwrap();
        let tmp = dir.path().join(".occupied.test.tmp");

        // Act
        let result = replace_file(dir.path(), &tmp, &target, b"{}");

        // Assert
        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert!(!tmp.exists());
    }

    #[test]
    fn test_bare_file_name_lives_in_current_directory() {
        let store = FileConfigStore::new("chat_config.json");
        assert_eq!(store.parent_dir(), Path::new("."));
        assert_eq!(store.file_name(), "chat_config.json");
    }
}
