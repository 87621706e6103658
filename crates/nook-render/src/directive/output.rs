//! Shortcode output types.
//!
//! Defines the output variants that shortcode handlers can return.

/// Output from shortcode processing.
///
/// Handlers can produce three types of output:
///
/// - [`Html`](Self::Html): markup substituted for the directive
/// - [`Empty`](Self::Empty): substitute nothing - the fail-soft result for
///   a recognized directive that cannot be rendered (missing entity,
///   malformed id)
/// - [`Skip`](Self::Skip): not handled; the original text passes through
///   unchanged
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortcodeOutput {
    /// Markup substituted for the directive occurrence.
    Html(String),
    /// Substitute the empty string (drop the directive).
    Empty,
    /// Don't handle this directive (pass through unchanged).
    Skip,
}

impl ShortcodeOutput {
    /// Create an HTML output.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use nook_render::directive::ShortcodeOutput;
    ///
    /// let output = ShortcodeOutput::html("<strong>bold</strong>");
    /// assert!(matches!(output, ShortcodeOutput::Html(_)));
    /// ```
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
