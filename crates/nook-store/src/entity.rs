//! Book entity types.
//!
//! Provides the [`BookId`] identifier and the [`BookEntity`] record that
//! storage backends persist. This module contains only data types -
//! validation lives in [`crate::validate`] and is applied by the store on
//! the write path.

use serde::{Deserialize, Serialize};

/// Identifier for a stored book entity.
///
/// Ids are positive integers assigned by the store on creation and never
/// changed or reused afterwards. Zero is not a valid id; embed directives
/// that parse to zero are dropped by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Create an id from a raw integer.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Parse an id from decimal text.
    ///
    /// Surrounding whitespace is tolerated. Returns `None` for anything that
    /// is not a positive integer.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().and_then(Self::new)
    }

    /// Raw integer value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored book entity: title plus the three cover attributes.
///
/// `title` and `author` are stored as plain text and escaped at render
/// time. A present color always matches `#RRGGBB`; the store rejects any
/// update that would break that invariant, so readers may trust stored
/// values (the renderer still re-checks and falls back to defaults).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    /// Stable identifier assigned on creation.
    pub id: BookId,

    /// Free-text title, may be empty.
    #[serde(default)]
    pub title: String,

    /// Author name, markup-stripped, at most 128 code points.
    #[serde(default)]
    pub author: String,

    /// Cover background color (`#RRGGBB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_color: Option<String>,

    /// Cover text color (`#RRGGBB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl BookEntity {
    /// Create an entity with empty attributes, as allocated by
    /// [`crate::EntityStore::create`].
    #[must_use]
    pub fn empty(id: BookId) -> Self {
        Self {
            id,
            title: String::new(),
            author: String::new(),
            cover_color: None,
            text_color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_rejects_zero() {
        assert_eq!(BookId::new(0), None);
        assert_eq!(BookId::new(1), Some(BookId(1)));
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(BookId::parse("42"), BookId::new(42));
        assert_eq!(BookId::parse(" 7 "), BookId::new(7));
        assert_eq!(BookId::parse("0"), None);
        assert_eq!(BookId::parse("-3"), None);
        assert_eq!(BookId::parse("abc"), None);
        assert_eq!(BookId::parse(""), None);
        assert_eq!(BookId::parse("7.5"), None);
    }

    #[test]
    fn test_id_display() {
        let id = BookId::new(42).unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_empty_entity() {
        let entity = BookEntity::empty(BookId::new(3).unwrap());
        assert_eq!(entity.id.get(), 3);
        assert!(entity.title.is_empty());
        assert!(entity.author.is_empty());
        assert!(entity.cover_color.is_none());
        assert!(entity.text_color.is_none());
    }

    #[test]
    fn test_record_roundtrip() {
        let entity = BookEntity {
            id: BookId::new(7).unwrap(),
            title: "The Nook".to_owned(),
            author: "Jane Doe".to_owned(),
            cover_color: Some("#AABBCC".to_owned()),
            text_color: None,
        };

        let json = serde_json::to_string(&entity).unwrap();
        let back: BookEntity = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entity);
    }

    #[test]
    fn test_record_absent_fields_read_as_none() {
        let back: BookEntity = serde_json::from_str(r#"{"id": 5}"#).unwrap();

        assert_eq!(back.id, BookId::new(5).unwrap());
        assert!(back.title.is_empty());
        assert!(back.cover_color.is_none());
        assert!(back.text_color.is_none());
    }

    #[test]
    fn test_record_skips_absent_colors() {
        let entity = BookEntity::empty(BookId::new(9).unwrap());
        let json = serde_json::to_string(&entity).unwrap();

        assert!(!json.contains("cover_color"));
        assert!(!json.contains("text_color"));
    }
}
