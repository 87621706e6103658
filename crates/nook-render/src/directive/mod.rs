//! Pluggable shortcode directives for bracket-style embed syntax.
//!
//! This module provides a trait-based system for handling inline shortcode
//! directives of the form `[name key="value"]` embedded in free-form
//! content.
//!
//! # Architecture
//!
//! Expansion is a single left-to-right pass over the content
//! ([`ShortcodeExpander::expand`]). Each occurrence is parsed and
//! dispatched to the handler registered under its name; unknown names pass
//! through unchanged so arbitrary bracketed text is left alone. Handlers
//! are registered explicitly on the expander instance - there is no global
//! registry.
//!
//! Substituted output is never rescanned: directive-like substrings inside
//! rendered markup stay inert.
//!
//! # Example
//!
//! ```ignore
//! use nook_render::directive::{
//!     ShortcodeArgs, ShortcodeExpander, ShortcodeHandler, ShortcodeOutput,
//! };
//!
//! struct Shout;
//!
//! impl ShortcodeHandler for Shout {
//!     fn name(&self) -> &str { "shout" }
//!
//!     fn process(&mut self, args: ShortcodeArgs) -> ShortcodeOutput {
//!         let text = args.get("text").unwrap_or_default();
//!         ShortcodeOutput::html(format!("<strong>{}</strong>", text.to_uppercase()))
//!     }
//! }
//!
//! let mut expander = ShortcodeExpander::new().with_handler(Shout);
//! let output = expander.expand(r#"Hello [shout text="world"]!"#);
//! assert_eq!(output, "Hello <strong>WORLD</strong>!");
//! ```

mod args;
mod expander;
mod handler;
mod output;
mod parser;

pub use args::ShortcodeArgs;
pub use expander::ShortcodeExpander;
pub use handler::ShortcodeHandler;
pub use output::ShortcodeOutput;
