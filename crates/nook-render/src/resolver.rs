//! Cover resolution.
//!
//! Turns a stored entity into a renderable [`Cover`], applying escaping and
//! color defaults. Lookup failures degrade to "nothing to render".

use std::sync::Arc;

use nook_store::{BookId, EntityStore};

use crate::cover::Cover;

/// Resolves entity ids to renderable covers.
///
/// Takes its store as an explicit dependency - handlers that need covers
/// hold a resolver instance rather than reaching into any ambient
/// registry.
#[derive(Clone)]
pub struct CoverResolver {
    store: Arc<dyn EntityStore>,
}

impl CoverResolver {
    /// Create a resolver reading from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Resolve an entity id to a renderable cover.
    ///
    /// Returns `None` when the entity is absent or the lookup fails; the
    /// caller renders nothing for that directive. The returned cover
    /// carries escaped text and colors that are always valid (defaults
    /// substituted for absent or malformed stored values).
    #[must_use]
    pub fn resolve(&self, id: BookId) -> Option<Cover> {
        let entity = match self.store.get(id) {
            Ok(entity) => entity?,
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "Cover lookup failed");
                return None;
            }
        };
        Some(Cover::from_entity(&entity))
    }
}
