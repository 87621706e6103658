//! Shortcode handler trait.

use super::{ShortcodeArgs, ShortcodeOutput};

/// Handler for a named shortcode: `[name key="value"]`
///
/// Handlers are registered on a [`super::ShortcodeExpander`] and dispatched
/// by name during the expansion pass.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each render gets its
/// own expander instance. For parallel rendering, create separate expander
/// instances per thread.
pub trait ShortcodeHandler: Send {
    /// Directive name (e.g., "book").
    ///
    /// This is matched against the shortcode syntax: `[name ...]`
    fn name(&self) -> &str;

    /// Process one directive occurrence.
    ///
    /// Returns:
    /// - [`ShortcodeOutput::Html`] to substitute markup
    /// - [`ShortcodeOutput::Empty`] to drop the directive (fail-soft)
    /// - [`ShortcodeOutput::Skip`] to pass the original text through
    fn process(&mut self, args: ShortcodeArgs) -> ShortcodeOutput;

    /// Get warnings generated during processing.
    ///
    /// Override this method if your handler can produce warnings.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
