//! Shortcode expansion and cover markup for book embeds.
//!
//! This crate turns content containing `[book id="42"]` directives into
//! content with rendered cover badges. It provides:
//!
//! - [`directive`]: the generic shortcode parsing/expansion system with
//!   pluggable [`directive::ShortcodeHandler`]s
//! - [`CoverResolver`]: entity lookup with escaping and color defaults
//! - [`BookCoverShortcode`]: the `book` handler tying the two together
//! - [`escape_html`]: entity escaping for embedded text
//!
//! Everything on the render path is fail-soft: a stale, malformed, or
//! unresolvable directive expands to the empty string and never surfaces an
//! error to the viewer.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use nook_render::book_cover_expander;
//! use nook_store::FsStore;
//!
//! let store = Arc::new(FsStore::new("books"));
//! let mut expander = book_cover_expander(store);
//! let html = expander.expand(r#"Read [book id="7"] next."#);
//! ```

mod cover;
pub mod directive;
mod html;
mod resolver;

pub use cover::{BookCoverShortcode, Cover, book_cover_expander};
pub use html::escape_html;
pub use resolver::CoverResolver;
