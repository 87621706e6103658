//! Attribute validation and sanitization.
//!
//! Pure functions with no side effects. Invalid input never raises an
//! error; it yields "no value" so callers can keep the prior stored state.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum stored author length in code points.
pub const AUTHOR_MAX_LEN: usize = 128;

/// Maximum color length: `#` plus six hex digits.
pub const COLOR_MAX_LEN: usize = 7;

/// Cover background fallback when no valid color is stored.
pub const DEFAULT_COVER_COLOR: &str = "#000000";

/// Cover text fallback when no valid color is stored.
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Validate a submitted color value.
///
/// The raw value is clipped to [`COLOR_MAX_LEN`] code points and matched
/// against `#RRGGBB` (hex digits in either case). Returns the clipped value
/// unchanged - case preserved - on an exact match, `None` otherwise.
#[must_use]
pub fn validate_color(raw: &str) -> Option<String> {
    let clipped: String = raw.chars().take(COLOR_MAX_LEN).collect();
    HEX_COLOR_RE.is_match(&clipped).then_some(clipped)
}

/// Check a stored color value without clipping.
///
/// Used on the read path, where values are either valid or replaced by a
/// default.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// Sanitize a submitted author name to plain text.
///
/// Strips tag-like sequences, drops control characters, collapses
/// whitespace runs to single spaces, trims, and truncates to
/// [`AUTHOR_MAX_LEN`] code points.
#[must_use]
pub fn sanitize_author(raw: &str) -> String {
    let stripped = strip_markup(raw);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for c in stripped.chars() {
        if c.is_control() {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out.chars().take(AUTHOR_MAX_LEN).collect()
}

/// Remove tag-like sequences from text.
///
/// Everything from `<` to the matching `>` is dropped; an unclosed `<`
/// swallows the rest of the input. Stray `>` characters are kept - they are
/// not markup on their own and get entity-escaped at render time.
fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => out.push(c),
        }
    }
    out
}
