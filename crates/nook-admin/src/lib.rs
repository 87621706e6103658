//! Authenticated save boundary for the book edit form.
//!
//! The host platform renders the edit form and collects its fields; this
//! crate is the explicit seam between that form and the entity store:
//!
//! - [`SaveRequest`]: the submission as an explicit parameter object, with
//!   the anti-forgery nonce as data rather than ambient request state
//! - [`NonceVerifier`]: the host-supplied anti-forgery check, consulted
//!   before anything reaches the store
//! - [`handle_save`] / [`create_book`]: the two write entry points
//! - [`embed_snippet`]: the shortcode text offered for copying
//!
//! Field validation lives in `nook-store`; this crate only sequences the
//! nonce check, the per-field updates, and the outcome reporting.

mod save;
mod snippet;

pub use save::{
    NonceVerifier, SAVE_ACTION, SaveError, SaveRequest, SaveSummary, create_book, handle_save,
};
pub use snippet::embed_snippet;
