//! Cover markup and the `book` shortcode handler.

use std::sync::Arc;

use nook_store::validate::{DEFAULT_COVER_COLOR, DEFAULT_TEXT_COLOR, is_valid_color};
use nook_store::{BookEntity, BookId, EntityStore};

use crate::directive::{ShortcodeArgs, ShortcodeExpander, ShortcodeHandler, ShortcodeOutput};
use crate::html::escape_html;
use crate::resolver::CoverResolver;

/// A renderable book cover.
///
/// Text fields are already HTML-escaped and colors are always valid hex
/// values - construction through [`Cover::from_entity`] substitutes the
/// defaults for anything absent or malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    /// Escaped title.
    pub title: String,
    /// Escaped author name.
    pub author: String,
    /// Background color, `#RRGGBB`.
    pub cover_color: String,
    /// Text color, `#RRGGBB`.
    pub text_color: String,
}

impl Cover {
    /// Build a renderable cover from a stored entity.
    #[must_use]
    pub fn from_entity(entity: &BookEntity) -> Self {
        Self {
            title: escape_html(&entity.title),
            author: escape_html(&entity.author),
            cover_color: resolve_color(entity.cover_color.as_deref(), DEFAULT_COVER_COLOR),
            text_color: resolve_color(entity.text_color.as_deref(), DEFAULT_TEXT_COLOR),
        }
    }

    /// Render the cover markup.
    ///
    /// One container span carrying both colors as inline style, one child
    /// with the title, one child with the author prefixed "By ".
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            r#"<span class="book-cover" style="background-color: {};color: {}"><span class="book-cover-title">{}</span><span class="book-cover-author">By {}</span></span>"#,
            self.cover_color, self.text_color, self.title, self.author
        )
    }
}

/// Pick the stored color when it is valid, else the default.
fn resolve_color(stored: Option<&str>, default: &str) -> String {
    match stored {
        Some(value) if is_valid_color(value) => value.to_owned(),
        _ => default.to_owned(),
    }
}

/// Handler for the `book` shortcode: `[book id="42"]`
///
/// A malformed or missing id, and an id with no stored entity, both expand
/// to the empty string - a broken embed never breaks the surrounding
/// content.
pub struct BookCoverShortcode {
    resolver: CoverResolver,
}

impl BookCoverShortcode {
    /// Create the handler with its cover resolver.
    #[must_use]
    pub fn new(resolver: CoverResolver) -> Self {
        Self { resolver }
    }
}

impl ShortcodeHandler for BookCoverShortcode {
    fn name(&self) -> &'static str {
        "book"
    }

    fn process(&mut self, args: ShortcodeArgs) -> ShortcodeOutput {
        // Missing, non-numeric, or non-positive id: drop the directive.
        let Some(id) = args.get("id").and_then(BookId::parse) else {
            return ShortcodeOutput::Empty;
        };

        match self.resolver.resolve(id) {
            Some(cover) => ShortcodeOutput::html(cover.to_html()),
            None => ShortcodeOutput::Empty,
        }
    }
}

/// Build an expander with the `book` handler wired to `store`.
#[must_use]
pub fn book_cover_expander(store: Arc<dyn EntityStore>) -> ShortcodeExpander {
    ShortcodeExpander::new().with_handler(BookCoverShortcode::new(CoverResolver::new(store)))
}
