//! Store trait and error types.
//!
//! Provides the core [`EntityStore`] trait for abstracting book entity
//! persistence, along with [`StoreError`] for unified error handling across
//! backends.
//!
//! # Fail-soft reads
//!
//! "Not retrievable" is a normal answer, not an error: `get()` returns
//! `Ok(None)` for missing or unreadable records so a stale embed directive
//! can degrade to empty output. `Err` is reserved for real backend
//! failures (permission denied, unavailable storage).

use crate::entity::{BookEntity, BookId};
use crate::validate;

/// Capability proof for write operations.
///
/// The store performs no authorization itself: possession of a token is
/// taken as evidence that the host platform's anti-forgery check already
/// passed. Mint one only after that check succeeds - the admin save
/// boundary in `nook-admin` is the intended minting site.
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteToken(());

impl WriteToken {
    /// Mint a write capability.
    #[must_use]
    pub fn new() -> Self {
        Self(())
    }
}

/// A single-field update submitted through the admin boundary.
///
/// Each variant carries the raw submitted value; validation happens when
/// the update is applied, so backends cannot skip it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the title. Stored as-is; escaped at render time.
    Title(String),
    /// Replace the author. Sanitized and truncated before storage.
    Author(String),
    /// Replace the cover background color. Rejected unless `#RRGGBB`.
    CoverColor(String),
    /// Replace the cover text color. Rejected unless `#RRGGBB`.
    TextColor(String),
}

impl FieldUpdate {
    /// Field name for summaries and log output.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Author(_) => "author",
            Self::CoverColor(_) => "cover_color",
            Self::TextColor(_) => "text_color",
        }
    }

    /// Validate the raw value and apply it to `entity`.
    ///
    /// Returns [`UpdateOutcome::Rejected`] without touching the entity when
    /// the value fails its format check.
    pub(crate) fn apply(self, entity: &mut BookEntity) -> UpdateOutcome {
        match self {
            Self::Title(raw) => {
                entity.title = raw;
                UpdateOutcome::Applied
            }
            Self::Author(raw) => {
                entity.author = validate::sanitize_author(&raw);
                UpdateOutcome::Applied
            }
            Self::CoverColor(raw) => match validate::validate_color(&raw) {
                Some(color) => {
                    entity.cover_color = Some(color);
                    UpdateOutcome::Applied
                }
                None => UpdateOutcome::Rejected,
            },
            Self::TextColor(raw) => match validate::validate_color(&raw) {
                Some(color) => {
                    entity.text_color = Some(color);
                    UpdateOutcome::Applied
                }
                None => UpdateOutcome::Rejected,
            },
        }
    }
}

/// Result of a single-field update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The value passed validation and was persisted.
    Applied,
    /// The value failed validation; the stored field is unchanged.
    Rejected,
}

/// Semantic error categories for store backends.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// No entity exists with the given id.
    NotFound,
    /// Permission denied by the backing storage.
    PermissionDenied,
    /// A record exists but cannot be serialized or deserialized.
    InvalidRecord,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Entity id context (if applicable).
    pub id: Option<BookId>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            id: None,
            backend: None,
            source: None,
        }
    }

    /// Attach entity id context.
    #[must_use]
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with id context.
    #[must_use]
    pub fn not_found(id: BookId) -> Self {
        Self::new(StoreErrorKind::NotFound).with_id(id)
    }

    /// Create a store error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, id: Option<BookId>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
            _ => StoreErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(id) = id {
            error = error.with_id(id);
        }
        error
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (id: 7)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::PermissionDenied => "Permission denied",
            StoreErrorKind::InvalidRecord => "Invalid record",
            StoreErrorKind::Unavailable => "Unavailable",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(id) = self.id {
            write!(f, " (id: {id})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Persistence abstraction for book entities.
///
/// Provides a unified interface for the render and admin layers regardless
/// of backend. Implementations handle backend-specific details like record
/// layout and id allocation; validation is shared through
/// [`FieldUpdate::apply`] so every backend enforces the same attribute
/// invariants.
pub trait EntityStore: Send + Sync {
    /// Allocate a new entity with empty attributes and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot persist the new record.
    fn create(&self, token: &WriteToken) -> Result<BookId, StoreError>;

    /// Fetch an entity.
    ///
    /// Returns `Ok(None)` when no record exists with that id, or when the
    /// record is unreadable (fail-soft: stale directives must degrade to
    /// empty output, not break rendering).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for real backend failures such as
    /// permission errors.
    fn get(&self, id: BookId) -> Result<Option<BookEntity>, StoreError>;

    /// Validate and apply a single-field update.
    ///
    /// Fields are independent: a rejected value leaves that field - and
    /// only that field - unchanged, and is reported as
    /// [`UpdateOutcome::Rejected`] rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the entity does not exist or the backend
    /// cannot persist the change.
    fn update(
        &self,
        token: &WriteToken,
        id: BookId,
        update: FieldUpdate,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Check whether an entity exists. Returns `false` on any error.
    fn exists(&self, id: BookId) -> bool {
        self.get(id).is_ok_and(|entity| entity.is_some())
    }
}
