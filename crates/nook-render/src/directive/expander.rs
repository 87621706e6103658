//! Shortcode expander.
//!
//! Replaces shortcode occurrences with handler output in a single pass.

use super::parser::{self, ParsedShortcode};
use super::{ShortcodeHandler, ShortcodeOutput};

/// Expander for bracket-style shortcodes.
///
/// Holds the registered handlers and performs one linear left-to-right
/// pass per content string. Substituted output is never rescanned, so
/// expansion cost is bounded by the content length and a failing directive
/// never affects its neighbors.
///
/// # Example
///
/// ```ignore
/// use nook_render::directive::{
///     ShortcodeArgs, ShortcodeExpander, ShortcodeHandler, ShortcodeOutput,
/// };
///
/// struct Shout;
///
/// impl ShortcodeHandler for Shout {
///     fn name(&self) -> &str { "shout" }
///     fn process(&mut self, args: ShortcodeArgs) -> ShortcodeOutput {
///         match args.get("text") {
///             Some(text) => ShortcodeOutput::html(text.to_uppercase()),
///             None => ShortcodeOutput::Empty,
///         }
///     }
/// }
///
/// let mut expander = ShortcodeExpander::new().with_handler(Shout);
/// assert_eq!(expander.expand(r#"[shout text="hi"]"#), "HI");
/// ```
#[derive(Default)]
pub struct ShortcodeExpander {
    handlers: Vec<Box<dyn ShortcodeHandler>>,
}

impl ShortcodeExpander {
    /// Create a new expander with no registered handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shortcode handler.
    #[must_use]
    pub fn with_handler<H: ShortcodeHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Expand all shortcode occurrences in `content`.
    ///
    /// Occurrences are processed left-to-right, each independently: a
    /// directive that fails to render substitutes the empty string without
    /// affecting the rest. Content without directives is returned
    /// unchanged. Unknown shortcode names pass through as plain text.
    #[must_use]
    pub fn expand(&mut self, content: &str) -> String {
        let mut result = String::with_capacity(content.len());
        let mut remaining = content;

        while !remaining.is_empty() {
            if let Some((shortcode, start, end)) = parser::parse_next(remaining) {
                // Add content before the directive
                result.push_str(&remaining[..start]);

                match self.dispatch(shortcode) {
                    ShortcodeOutput::Html(html) => result.push_str(&html),
                    ShortcodeOutput::Empty => {}
                    ShortcodeOutput::Skip => {
                        // Pass through unchanged
                        result.push_str(&remaining[start..end]);
                    }
                }

                remaining = &remaining[end..];
            } else {
                // No more directives, add remaining content
                result.push_str(remaining);
                break;
            }
        }

        result
    }

    fn dispatch(&mut self, shortcode: ParsedShortcode) -> ShortcodeOutput {
        let Some(idx) = self
            .handlers
            .iter()
            .position(|h| h.name() == shortcode.name)
        else {
            return ShortcodeOutput::Skip;
        };
        self.handlers[idx].process(shortcode.args)
    }

    /// Get all warnings generated by handlers during processing.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.handlers
            .iter()
            .flat_map(|h| h.warnings().iter().cloned())
            .collect()
    }
}
