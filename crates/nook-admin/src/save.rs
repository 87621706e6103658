//! Save handling for the book edit form.
//!
//! The host platform collects the form fields and the anti-forgery nonce;
//! this module is the explicit boundary they pass through. The nonce is
//! verified before anything reaches the store, and each submitted field is
//! applied independently - one invalid value never rolls back the rest of
//! the save.

use nook_store::{
    BookId, EntityStore, FieldUpdate, StoreError, UpdateOutcome, WriteToken,
};

/// Nonce action name for book edits.
pub const SAVE_ACTION: &str = "nook_meta_edit";

/// Anti-forgery verification supplied by the host platform.
pub trait NonceVerifier {
    /// Check a submitted nonce against an action name.
    fn verify(&self, nonce: &str, action: &str) -> bool;
}

/// A submitted edit form, as an explicit parameter object.
///
/// `None` means the field was not present in the submission and stays
/// untouched; `Some` values are raw form input, validated by the store.
#[derive(Clone, Debug)]
pub struct SaveRequest {
    /// Entity being edited.
    pub book_id: BookId,
    /// Anti-forgery nonce from the form.
    pub nonce: String,
    /// Submitted title, if present.
    pub title: Option<String>,
    /// Submitted author name, if present.
    pub author: Option<String>,
    /// Submitted cover background color, if present.
    pub cover_color: Option<String>,
    /// Submitted cover text color, if present.
    pub text_color: Option<String>,
}

impl SaveRequest {
    /// Create a request with no submitted fields.
    #[must_use]
    pub fn new(book_id: BookId, nonce: impl Into<String>) -> Self {
        Self {
            book_id,
            nonce: nonce.into(),
            title: None,
            author: None,
            cover_color: None,
            text_color: None,
        }
    }
}

/// Error type for save handling.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The anti-forgery check failed; nothing reached the store.
    #[error("anti-forgery check failed")]
    Unauthorized,

    /// The store could not apply the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which fields of a save were applied and which were dropped.
///
/// Rejected fields are not errors - the form shows the retained prior
/// value on the next load.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// Fields that passed validation and were persisted.
    pub applied: Vec<&'static str>,
    /// Fields dropped by validation, prior values retained.
    pub rejected: Vec<&'static str>,
}

/// Apply an edit-form submission to the store.
///
/// Verifies the nonce, then applies each submitted field independently.
///
/// # Errors
///
/// Returns [`SaveError::Unauthorized`] when the nonce check fails and
/// [`SaveError::Store`] when the entity is missing or the backend fails.
/// Validation failures are reported in the summary, never as errors.
pub fn handle_save(
    store: &dyn EntityStore,
    verifier: &dyn NonceVerifier,
    request: SaveRequest,
) -> Result<SaveSummary, SaveError> {
    if !verifier.verify(&request.nonce, SAVE_ACTION) {
        return Err(SaveError::Unauthorized);
    }
    let token = WriteToken::new();

    let updates = [
        request.title.map(FieldUpdate::Title),
        request.author.map(FieldUpdate::Author),
        request.cover_color.map(FieldUpdate::CoverColor),
        request.text_color.map(FieldUpdate::TextColor),
    ];

    let mut summary = SaveSummary::default();
    for update in updates.into_iter().flatten() {
        let field = update.field_name();
        match store.update(&token, request.book_id, update)? {
            UpdateOutcome::Applied => summary.applied.push(field),
            UpdateOutcome::Rejected => {
                tracing::debug!(id = %request.book_id, field, "Dropped invalid field update");
                summary.rejected.push(field);
            }
        }
    }
    Ok(summary)
}

/// Create a new draft entity after verifying the nonce.
///
/// # Errors
///
/// Returns [`SaveError::Unauthorized`] when the nonce check fails and
/// [`SaveError::Store`] when the backend cannot persist the record.
pub fn create_book(
    store: &dyn EntityStore,
    verifier: &dyn NonceVerifier,
    nonce: &str,
) -> Result<BookId, SaveError> {
    if !verifier.verify(nonce, SAVE_ACTION) {
        return Err(SaveError::Unauthorized);
    }
    Ok(store.create(&WriteToken::new())?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use nook_store::MockStore;

    use super::*;

    /// Verifier accepting a single known nonce.
    struct FixedNonce(&'static str);

    impl NonceVerifier for FixedNonce {
        fn verify(&self, nonce: &str, action: &str) -> bool {
            nonce == self.0 && action == SAVE_ACTION
        }
    }

    fn id(raw: u64) -> BookId {
        BookId::new(raw).unwrap()
    }

    #[test]
    fn test_save_applies_all_valid_fields() {
        let store = MockStore::new().with_book(1, "");
        let verifier = FixedNonce("good");

        let mut request = SaveRequest::new(id(1), "good");
        request.title = Some("The Nook".to_owned());
        request.author = Some("Jane Doe".to_owned());
        request.cover_color = Some("#112233".to_owned());
        request.text_color = Some("#FFFFFF".to_owned());

        let summary = handle_save(&store, &verifier, request).unwrap();

        assert_eq!(
            summary.applied,
            vec!["title", "author", "cover_color", "text_color"]
        );
        assert!(summary.rejected.is_empty());

        let entity = store.get(id(1)).unwrap().unwrap();
        assert_eq!(entity.title, "The Nook");
        assert_eq!(entity.cover_color.as_deref(), Some("#112233"));
        assert_eq!(entity.text_color.as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_partial_submission_touches_only_present_fields() {
        let store = MockStore::new()
            .with_book(1, "Keep Title")
            .with_author(1, "Keep Author");
        let verifier = FixedNonce("good");

        let mut request = SaveRequest::new(id(1), "good");
        request.cover_color = Some("#AABBCC".to_owned());

        let summary = handle_save(&store, &verifier, request).unwrap();
        assert_eq!(summary.applied, vec!["cover_color"]);

        let entity = store.get(id(1)).unwrap().unwrap();
        assert_eq!(entity.title, "Keep Title");
        assert_eq!(entity.author, "Keep Author");
    }

    #[test]
    fn test_invalid_field_dropped_without_failing_save() {
        let store = MockStore::new().with_book(1, "");
        let verifier = FixedNonce("good");

        let mut request = SaveRequest::new(id(1), "good");
        request.author = Some("Jane Doe".to_owned());
        request.cover_color = Some("not-a-color".to_owned());

        let summary = handle_save(&store, &verifier, request).unwrap();

        assert_eq!(summary.applied, vec!["author"]);
        assert_eq!(summary.rejected, vec!["cover_color"]);

        let entity = store.get(id(1)).unwrap().unwrap();
        assert_eq!(entity.author, "Jane Doe");
        assert!(entity.cover_color.is_none());
    }

    #[test]
    fn test_bad_nonce_aborts_before_store() {
        let store = MockStore::new().with_book(1, "");
        let verifier = FixedNonce("good");

        let mut request = SaveRequest::new(id(1), "forged");
        request.author = Some("Mallory".to_owned());

        let err = handle_save(&store, &verifier, request).unwrap_err();
        assert!(matches!(err, SaveError::Unauthorized));

        let entity = store.get(id(1)).unwrap().unwrap();
        assert!(entity.author.is_empty());
    }

    #[test]
    fn test_save_to_missing_entity_is_store_error() {
        let store = MockStore::new();
        let verifier = FixedNonce("good");

        let mut request = SaveRequest::new(id(42), "good");
        request.title = Some("x".to_owned());

        let err = handle_save(&store, &verifier, request).unwrap_err();
        assert!(matches!(err, SaveError::Store(_)));
    }

    #[test]
    fn test_empty_submission_is_a_no_op() {
        let store = MockStore::new().with_book(1, "Title");
        let verifier = FixedNonce("good");

        let summary = handle_save(&store, &verifier, SaveRequest::new(id(1), "good")).unwrap();
        assert_eq!(summary, SaveSummary::default());
    }

    #[test]
    fn test_create_book_requires_nonce() {
        let store = MockStore::new();
        let verifier = FixedNonce("good");

        assert!(matches!(
            create_book(&store, &verifier, "forged"),
            Err(SaveError::Unauthorized)
        ));

        let id = create_book(&store, &verifier, "good").unwrap();
        assert!(store.exists(id));
    }
}
