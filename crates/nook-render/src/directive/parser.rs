//! Shortcode syntax parsing.
//!
//! Finds `[name key="value"]` occurrences in free-form content.

use super::ShortcodeArgs;

/// Parsed shortcode occurrence.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedShortcode {
    /// Directive name (e.g., "book").
    pub name: String,
    /// Parsed attributes.
    pub args: ShortcodeArgs,
}

/// Find the next shortcode occurrence in `s`.
///
/// Returns the parsed shortcode and its byte range `[start, end)`, or
/// `None` when no well-formed occurrence remains. Bracketed text that does
/// not parse as a shortcode (no name, unclosed, nested open bracket) is
/// stepped over so the scan stays linear.
pub(crate) fn parse_next(s: &str) -> Option<(ParsedShortcode, usize, usize)> {
    let mut search_from = 0;
    while let Some(offset) = s[search_from..].find('[') {
        let start = search_from + offset;
        if let Some((shortcode, len)) = parse_at(&s[start..]) {
            return Some((shortcode, start, start + len));
        }
        search_from = start + 1;
    }
    None
}

/// Try to parse a shortcode at the head of `s`, which starts with `[`.
///
/// Returns the shortcode and the number of bytes consumed.
fn parse_at(s: &str) -> Option<(ParsedShortcode, usize)> {
    let inner = &s[1..];

    // Whitespace is tolerated after the opening bracket.
    let ws = inner.len() - inner.trim_start().len();
    let name_start = 1 + ws;
    let rest = &s[name_start..];

    let name_len = rest
        .find(|c: char| !is_name_char(c))
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];

    // The name must be followed by whitespace or the closing bracket;
    // anything else (e.g. markdown link text) is not a shortcode.
    let after_name = &rest[name_len..];
    let next = after_name.chars().next()?;
    if next != ']' && !next.is_whitespace() {
        return None;
    }

    // Locate the closing bracket, ignoring brackets inside quoted values.
    let mut quote: Option<char> = None;
    let mut close_rel = None;
    for (i, c) in after_name.char_indices() {
        match c {
            _ if quote == Some(c) => quote = None,
            _ if quote.is_some() => {}
            '"' | '\'' => quote = Some(c),
            ']' => {
                close_rel = Some(i);
                break;
            }
            '[' => return None,
            _ => {}
        }
    }
    let close_rel = close_rel?;

    let args = ShortcodeArgs::parse(&after_name[..close_rel]);
    let consumed = name_start + name_len + close_rel + 1;

    Some((
        ParsedShortcode {
            name: name.to_owned(),
            args,
        },
        consumed,
    ))
}

/// Shortcode names are alphanumeric with hyphens and underscores.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_shortcode() {
        let (shortcode, start, end) = parse_next(r#"See [book id="7"] now"#).unwrap();

        assert_eq!(start, 4);
        assert_eq!(end, 17);
        assert_eq!(shortcode.name, "book");
        assert_eq!(shortcode.args.get("id"), Some("7"));
    }

    #[test]
    fn test_shortcode_at_start() {
        let (_, start, end) = parse_next(r#"[book id="7"]"#).unwrap();
        assert_eq!(start, 0);
        assert_eq!(end, 13);
    }

    #[test]
    fn test_no_attributes() {
        let (shortcode, _, _) = parse_next("[book]").unwrap();
        assert_eq!(shortcode.name, "book");
        assert!(shortcode.args.is_empty());
    }

    #[test]
    fn test_whitespace_variations() {
        let (shortcode, _, end) = parse_next(r#"[ book id = "7" ]"#).unwrap();
        assert_eq!(shortcode.name, "book");
        assert_eq!(shortcode.args.get("id"), Some("7"));
        assert_eq!(end, 17);
    }

    #[test]
    fn test_single_quotes_and_unquoted() {
        let (a, _, _) = parse_next("[book id='7']").unwrap();
        assert_eq!(a.args.get("id"), Some("7"));

        let (b, _, _) = parse_next("[book id=7]").unwrap();
        assert_eq!(b.args.get("id"), Some("7"));
    }

    #[test]
    fn test_no_brackets() {
        assert!(parse_next("regular text").is_none());
        assert!(parse_next("").is_none());
    }

    #[test]
    fn test_empty_brackets_not_a_shortcode() {
        assert!(parse_next("a [] b").is_none());
    }

    #[test]
    fn test_unclosed_not_a_shortcode() {
        assert!(parse_next(r#"[book id="7""#).is_none());
    }

    #[test]
    fn test_invalid_name_char_not_a_shortcode() {
        // Markdown link syntax: name is followed by a non-space, non-bracket
        // character sequence that disqualifies it.
        assert!(parse_next("[a!b]").is_none());
    }

    #[test]
    fn test_markdown_link_text_parses_as_plain_name() {
        // `[link]` is a well-formed occurrence; it is the expander's
        // unknown-name passthrough that leaves it untouched.
        let (shortcode, _, _) = parse_next("[link](url)").unwrap();
        assert_eq!(shortcode.name, "link");
    }

    #[test]
    fn test_bracket_inside_quoted_value() {
        let (shortcode, _, end) = parse_next(r#"[book id="7]8"]"#).unwrap();
        assert_eq!(shortcode.args.get("id"), Some("7]8"));
        assert_eq!(end, 15);
    }

    #[test]
    fn test_nested_open_bracket_skips_to_inner() {
        let (shortcode, start, _) = parse_next(r#"[book [book id="7"]"#).unwrap();
        assert_eq!(start, 6);
        assert_eq!(shortcode.args.get("id"), Some("7"));
    }

    #[test]
    fn test_scan_past_non_shortcode_brackets() {
        let (shortcode, start, _) = parse_next(r#"a [] b [book id="3"]"#).unwrap();
        assert_eq!(start, 7);
        assert_eq!(shortcode.args.get("id"), Some("3"));
    }
}
