//! Embed snippet generation.
//!
//! The edit screen shows the shortcode for a saved book next to a copy
//! button; this is the exact text placed on the clipboard.

use nook_store::BookId;

/// Shortcode snippet for embedding a book in content.
#[must_use]
pub fn embed_snippet(id: BookId) -> String {
    format!(r#"[book id="{id}"]"#)
}
