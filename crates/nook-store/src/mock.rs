//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::entity::{BookEntity, BookId};
use crate::store::{EntityStore, FieldUpdate, StoreError, UpdateOutcome, WriteToken};

/// Mock store for testing.
///
/// Stores entities in memory. Use the builder methods to configure the
/// mock with test data.
///
/// # Example
///
/// ```ignore
/// use nook_store::{EntityStore, MockStore};
///
/// let store = MockStore::new()
///     .with_book(7, "The Nook")
///     .with_author(7, "Jane Doe");
///
/// assert!(store.exists(nook_store::BookId::new(7).unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    books: RwLock<HashMap<BookId, BookEntity>>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity with the given id and title and empty attributes.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero or the internal lock is poisoned.
    #[must_use]
    pub fn with_book(self, id: u64, title: impl Into<String>) -> Self {
        let id = BookId::new(id).expect("mock book id must be positive");
        let mut entity = BookEntity::empty(id);
        entity.title = title.into();
        self.books.write().unwrap().insert(id, entity);
        self
    }

    /// Set the author of an already-added entity.
    ///
    /// # Panics
    ///
    /// Panics if the entity was not added first or the lock is poisoned.
    #[must_use]
    pub fn with_author(self, id: u64, author: impl Into<String>) -> Self {
        let id = BookId::new(id).expect("mock book id must be positive");
        self.books
            .write()
            .unwrap()
            .get_mut(&id)
            .expect("with_author requires the book to exist")
            .author = author.into();
        self
    }

    /// Set the colors of an already-added entity.
    ///
    /// Values are stored verbatim - deliberately unvalidated, so tests can
    /// seed malformed stored state and exercise the read-path fallbacks.
    ///
    /// # Panics
    ///
    /// Panics if the entity was not added first or the lock is poisoned.
    #[must_use]
    pub fn with_colors(
        self,
        id: u64,
        cover_color: Option<&str>,
        text_color: Option<&str>,
    ) -> Self {
        let id = BookId::new(id).expect("mock book id must be positive");
        {
            let mut books = self.books.write().unwrap();
            let entity = books
                .get_mut(&id)
                .expect("with_colors requires the book to exist");
            entity.cover_color = cover_color.map(str::to_owned);
            entity.text_color = text_color.map(str::to_owned);
        }
        self
    }

    /// Add a fully populated entity.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entity(self, entity: BookEntity) -> Self {
        self.books.write().unwrap().insert(entity.id, entity);
        self
    }
}

impl EntityStore for MockStore {
    fn create(&self, _token: &WriteToken) -> Result<BookId, StoreError> {
        let mut books = self.books.write().unwrap();
        let next = books.keys().map(|id| id.get()).max().unwrap_or(0) + 1;
        let id = BookId::new(next).expect("max id + 1 is always positive");
        books.insert(id, BookEntity::empty(id));
        Ok(id)
    }

    fn get(&self, id: BookId) -> Result<Option<BookEntity>, StoreError> {
        Ok(self.books.read().unwrap().get(&id).cloned())
    }

    fn update(
        &self,
        _token: &WriteToken,
        id: BookId,
        update: FieldUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut books = self.books.write().unwrap();
        let Some(entity) = books.get_mut(&id) else {
            return Err(StoreError::not_found(id).with_backend("Mock"));
        };
        Ok(update.apply(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_seeds_entities() {
        let store = MockStore::new()
            .with_book(7, "The Nook")
            .with_author(7, "Jane Doe")
            .with_colors(7, Some("#112233"), None);

        let entity = store.get(BookId::new(7).unwrap()).unwrap().unwrap();
        assert_eq!(entity.title, "The Nook");
        assert_eq!(entity.author, "Jane Doe");
        assert_eq!(entity.cover_color.as_deref(), Some("#112233"));
        assert!(entity.text_color.is_none());
    }

    #[test]
    fn test_create_allocates_past_seeded_ids() {
        let store = MockStore::new().with_book(7, "Seeded");
        let id = store.create(&WriteToken::new()).unwrap();

        assert_eq!(id.get(), 8);
    }

    #[test]
    fn test_update_validates_like_real_backends() {
        let store = MockStore::new().with_book(1, "Book");
        let token = WriteToken::new();
        let id = BookId::new(1).unwrap();

        let outcome = store
            .update(&token, id, FieldUpdate::CoverColor("nope".to_owned()))
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Rejected);
        assert!(store.get(id).unwrap().unwrap().cover_color.is_none());
    }

    #[test]
    fn test_unvalidated_seed_colors_kept_verbatim() {
        let store = MockStore::new()
            .with_book(1, "Book")
            .with_colors(1, Some("garbage"), None);

        let entity = store.get(BookId::new(1).unwrap()).unwrap().unwrap();
        assert_eq!(entity.cover_color.as_deref(), Some("garbage"));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = MockStore::new();
        assert_eq!(store.get(BookId::new(5).unwrap()).unwrap(), None);
    }
}
