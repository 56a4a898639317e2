//! Description extraction from sketch source text.
//!
//! The description shown alongside an exported applet is the first
//! doc-comment block in the main source file, with the comment decoration
//! stripped line-by-line.

use regex::Regex;
use std::sync::LazyLock;

/// First doc-comment block: an opening marker of two or more asterisks,
/// a body, and a closing marker of one or more asterisks.
static DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*{2,}(.*?)\*+/").unwrap());

/// Extracts the applet description from sketch source text.
///
/// Returns an empty string when the source has no doc-comment block;
/// absence of a description is not an error.
pub fn extract_description(source: &str) -> String {
    let Some(captures) = DOC_BLOCK.captures(source) else {
        return String::new();
    };

    let mut description = String::new();
    for line in captures[1].split('\n') {
        description.push_str(strip_decoration(line));
        description.push('\n');
    }

    // The whitespace before the closing marker produces blank tail lines
    while description.ends_with("\n\n") {
        description.pop();
    }
    description
}

/// Strips surrounding whitespace and a leading run of asterisks from one
/// body line.
fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    let stripped = line.trim_start_matches('*');
    if stripped.len() != line.len() {
        stripped.trim_start()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markers_per_line() {
        let source = "/** Hello\n * World\n */\nvoid setup() {}";
        assert_eq!(extract_description(source), "Hello\nWorld\n");
    }

    #[test]
    fn single_line_block() {
        assert_eq!(extract_description("/** Bouncing balls */"), "Bouncing balls\n");
    }

    #[test]
    fn no_doc_comment_is_empty() {
        assert_eq!(extract_description("void setup() {}"), "");
        assert_eq!(extract_description("/* plain comment */"), "");
        assert_eq!(extract_description(""), "");
    }

    #[test]
    fn only_first_block_is_used() {
        let source = "/** first */\n/** second */";
        assert_eq!(extract_description(source), "first\n");
    }

    #[test]
    fn lines_without_markers_keep_their_text() {
        let source = "/**\nplain line\n * starred line\n*/";
        assert_eq!(extract_description(source), "\nplain line\nstarred line\n");
    }
}
