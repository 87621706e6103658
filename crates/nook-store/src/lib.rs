//! Validated persistence for book cover entities.
//!
//! This crate owns the book entity record and the pair of mechanisms that
//! keep it safe to embed: pure attribute validation ([`validate`]) and the
//! [`EntityStore`] persistence trait. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem records today, anything keyed by
//!   entity id tomorrow)
//! - **Clean separation** between attribute rules and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`validate`] with the pure color/author checks and default constants
//! - [`EntityStore`] trait with `create()`, `get()`, and `update()` methods
//! - [`FsStore`] implementation storing one JSON record per entity
//! - [`MockStore`] for testing (behind the `mock` feature flag)
//!
//! Writes require a [`WriteToken`]; reads are fail-soft — an entity that is
//! missing or unreadable is reported as absent, never as a render error.
//!
//! # Example
//!
//! ```ignore
//! use nook_store::{EntityStore, FieldUpdate, FsStore, WriteToken};
//!
//! let store = FsStore::new("books");
//! let token = WriteToken::new();
//! let id = store.create(&token)?;
//! store.update(&token, id, FieldUpdate::Author("Jane Doe".to_owned()))?;
//! ```

mod config;
mod entity;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod store;
pub mod validate;

pub use config::{ConfigError, StoreConfig};
pub use entity::{BookEntity, BookId};
pub use fs::FsStore;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use store::{EntityStore, FieldUpdate, StoreError, StoreErrorKind, UpdateOutcome, WriteToken};
