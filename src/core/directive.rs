//! Include directive recognition
//!
//! A directive is any line whose first 9 bytes are exactly `#include `. This is
//! a textual match, not a preprocessor grammar: leading whitespace, other
//! casing, or a tab after `include` make the line ordinary text.

/// The literal prefix that marks an include directive
pub const DIRECTIVE_PREFIX: &[u8] = b"#include ";

/// Characters stripped from both ends of the directive remainder
const TARGET_TRIM: &[u8] = b"\n\r \"<>";

/// Check whether a raw line is an include directive
pub fn is_directive(line: &[u8]) -> bool {
    line.starts_with(DIRECTIVE_PREFIX)
}

/// Extract the raw include target from a line.
///
/// Returns `None` when the line is not a directive. The returned target may be
/// empty (e.g. `#include ""`).
pub fn parse_target(line: &[u8]) -> Option<String> {
    if !is_directive(line) {
        return None;
    }
    let rest = &line[DIRECTIVE_PREFIX.len()..];
    Some(String::from_utf8_lossy(trim_target(rest)).into_owned())
}

fn trim_target(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !TARGET_TRIM.contains(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !TARGET_TRIM.contains(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_target() {
        assert_eq!(parse_target(b"#include \"a.h\"\n"), Some("a.h".to_string()));
    }

    #[test]
    fn test_angle_target() {
        assert_eq!(parse_target(b"#include <vector>\n"), Some("vector".to_string()));
    }

    #[test]
    fn test_crlf_and_padding_stripped() {
        assert_eq!(
            parse_target(b"#include   \"dir/b.h\"  \r\n"),
            Some("dir/b.h".to_string())
        );
    }

    #[test]
    fn test_no_terminator() {
        assert_eq!(parse_target(b"#include \"a.h\""), Some("a.h".to_string()));
    }

    #[test]
    fn test_strip_is_a_set_not_a_pair() {
        // Mismatched delimiters are stripped just the same
        assert_eq!(parse_target(b"#include <a.h\"\n"), Some("a.h".to_string()));
        assert_eq!(parse_target(b"#include \"<<a.h>>\"\n"), Some("a.h".to_string()));
    }

    #[test]
    fn test_inner_characters_kept() {
        assert_eq!(
            parse_target(b"#include \"my dir/x.h\"\n"),
            Some("my dir/x.h".to_string())
        );
    }

    #[test]
    fn test_empty_target() {
        assert_eq!(parse_target(b"#include \"\"\n"), Some(String::new()));
        assert_eq!(parse_target(b"#include \n"), Some(String::new()));
    }

    #[test]
    fn test_leading_whitespace_is_not_a_directive() {
        assert!(!is_directive(b"  #include \"a.h\"\n"));
        assert_eq!(parse_target(b"\t#include \"a.h\"\n"), None);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_directive(b"#Include \"a.h\"\n"));
        assert!(!is_directive(b"#INCLUDE \"a.h\"\n"));
    }

    #[test]
    fn test_requires_single_space_after_keyword() {
        assert!(!is_directive(b"#include\"a.h\"\n"));
        assert!(!is_directive(b"#include\t\"a.h\"\n"));
        assert!(!is_directive(b"# include \"a.h\"\n"));
        assert!(!is_directive(b"#include_next <a.h>\n"));
    }

    #[test]
    fn test_plain_lines() {
        assert!(!is_directive(b"int x;\n"));
        assert!(!is_directive(b""));
        assert!(!is_directive(b"#include"));
    }
}
