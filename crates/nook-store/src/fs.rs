//! Filesystem store implementation.
//!
//! Provides [`FsStore`], which keeps one JSON record per entity
//! (`<id>.json`) under a root directory. The host platform's storage layer
//! is assumed to serialize concurrent writes to the same entity; this
//! backend performs plain read-modify-write per field.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::entity::{BookEntity, BookId};
use crate::store::{
    EntityStore, FieldUpdate, StoreError, StoreErrorKind, UpdateOutcome, WriteToken,
};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem store implementation.
///
/// Record files are created lazily; a missing root directory simply means
/// no entities exist yet. Ids are allocated by scanning for the current
/// maximum, so the store keeps no counter state that could drift from the
/// records themselves.
///
/// # Example
///
/// ```ignore
/// use nook_store::{EntityStore, FsStore, WriteToken};
///
/// let store = FsStore::new("books");
/// let id = store.create(&WriteToken::new())?;
/// ```
pub struct FsStore {
    /// Root directory holding one JSON record per entity.
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory is created on the first write, not here.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store from loaded configuration.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.root)
    }

    fn record_path(&self, id: BookId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    /// Highest id currently on disk, or zero for an empty store.
    fn max_id(&self) -> Result<u64, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(StoreError::io(e, None).with_backend(BACKEND)),
        };

        let mut max = 0;
        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name();
            let path = Path::new(&name);
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && let Ok(n) = stem.parse::<u64>()
            {
                max = max.max(n);
            }
        }
        Ok(max)
    }

    fn read_record(&self, id: BookId) -> Result<Option<BookEntity>, StoreError> {
        let path = self.record_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(e, Some(id)).with_backend(BACKEND)),
        };

        match serde_json::from_str::<BookEntity>(&contents) {
            Ok(entity) => Ok(Some(entity)),
            Err(e) => {
                // Corrupt record reads as absent so a stale embed degrades
                // to empty output instead of failing the whole render.
                tracing::warn!(id = %id, error = %e, "Unreadable book record");
                Ok(None)
            }
        }
    }

    fn write_record(&self, entity: &BookEntity) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StoreError::io(e, Some(entity.id)).with_backend(BACKEND))?;

        let json = serde_json::to_string_pretty(entity).map_err(|e| {
            StoreError::new(StoreErrorKind::InvalidRecord)
                .with_id(entity.id)
                .with_backend(BACKEND)
                .with_source(e)
        })?;

        fs::write(self.record_path(entity.id), json)
            .map_err(|e| StoreError::io(e, Some(entity.id)).with_backend(BACKEND))
    }
}

impl EntityStore for FsStore {
    fn create(&self, _token: &WriteToken) -> Result<BookId, StoreError> {
        let next = self.max_id()? + 1;
        let id = BookId::new(next).expect("max_id + 1 is always positive");
        self.write_record(&BookEntity::empty(id))?;
        Ok(id)
    }

    fn get(&self, id: BookId) -> Result<Option<BookEntity>, StoreError> {
        self.read_record(id)
    }

    fn update(
        &self,
        _token: &WriteToken,
        id: BookId,
        update: FieldUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        let Some(mut entity) = self.read_record(id)? else {
            return Err(StoreError::not_found(id).with_backend(BACKEND));
        };

        let outcome = update.apply(&mut entity);
        if outcome == UpdateOutcome::Applied {
            self.write_record(&entity)?;
        }
        Ok(outcome)
    }
}
