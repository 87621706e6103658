//! Shortcode attribute parsing.
//!
//! Parses the `key="value"` attribute list from shortcode directives.

use std::collections::HashMap;

/// Parsed attributes from shortcode syntax.
///
/// Represents the attributes extracted from a directive:
/// `[name key="value" other='v' bare=7]`
///
/// # Example
///
/// ```ignore
/// use nook_render::directive::ShortcodeArgs;
///
/// let args = ShortcodeArgs::parse(r#"id="42" lang='en' width=7"#);
/// assert_eq!(args.get("id"), Some("42"));
/// assert_eq!(args.get("lang"), Some("en"));
/// assert_eq!(args.get("width"), Some("7"));
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShortcodeArgs {
    /// Key-value attributes.
    attrs: HashMap<String, String>,
}

impl ShortcodeArgs {
    /// Parse an attribute string into structured arguments.
    ///
    /// Supports `key="value"`, `key='value'`, and `key=value`, separated by
    /// whitespace. Unparseable fragments are skipped rather than failing
    /// the whole list - a malformed attribute simply reads as absent.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut args = Self::default();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();

            if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else if remaining.is_empty() {
                break;
            } else {
                // Skip unrecognized character
                let mut chars = remaining.chars();
                chars.next();
                remaining = chars.as_str();
            }
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// True when no attributes were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Parse a key-value pair from the attributes string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || !is_valid_key(key) {
        return None;
    }

    let after_eq = s[eq_pos + 1..].trim_start();

    if let Some(stripped) = after_eq.strip_prefix('"') {
        // Quoted with double quotes
        let end_quote = stripped.find('"')?;
        let value = &stripped[..end_quote];
        let rest = &stripped[end_quote + 1..];
        Some((key, value, rest))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        // Quoted with single quotes
        let end_quote = stripped.find('\'')?;
        let value = &stripped[..end_quote];
        let rest = &stripped[end_quote + 1..];
        Some((key, value, rest))
    } else {
        // Unquoted value (until whitespace)
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        let value = &after_eq[..end];
        let rest = &after_eq[end..];
        Some((key, value, rest))
    }
}

/// Attribute keys are alphanumeric with hyphens and underscores.
fn is_valid_key(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
