//! Doc comment recovery from tree-sitter comment nodes.
//!
//! Comments are extras in the Go grammar, so they show up as siblings of the
//! declarations they document. A node's doc comment is the run of comments
//! right above it:
//!
//! - the last comment ends on the line immediately before the node
//! - consecutive comments in the run are on adjacent lines
//! - a comment sharing a line with the preceding code is a trailing comment
//!   of that code and ends the run
//!
//! The text is then normalized the way `go doc` presents it.

use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

// Tool directives such as `//go:generate` or `//line foo.go:10`
static RE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(line |extern |export |[a-z0-9]+:[a-z0-9])").unwrap());

/// Statement terminators appear as anonymous sibling tokens.
fn is_terminator(node: &Node) -> bool {
    !node.is_named() && matches!(node.kind(), "\n" | ";" | "\0")
}

/// Collect the doc comment of `siblings[index]`, or an empty string.
pub fn doc_comment(siblings: &[Node], index: usize, source: &str) -> String {
    let Some(target) = siblings.get(index) else {
        return String::new();
    };

    // Row of the last code token before the run, if any
    let code_row = siblings[..index]
        .iter()
        .rev()
        .find(|n| n.kind() != "comment" && !is_terminator(n))
        .map(|n| n.end_position().row);

    let mut group: Vec<&str> = Vec::new();
    let mut next_row = target.start_position().row;
    let mut first = true;

    for node in siblings[..index].iter().rev() {
        if node.kind() != "comment" {
            break;
        }
        let end_row = node.end_position().row;
        let adjacent = if first {
            end_row + 1 == next_row
        } else {
            end_row + 1 >= next_row
        };
        if !adjacent || code_row == Some(node.start_position().row) {
            break;
        }
        group.push(text(node, source));
        next_row = node.start_position().row;
        first = false;
    }

    group.reverse();
    comment_text(&group)
}

/// Source text covered by a node.
pub fn text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Normalize raw comments into documentation text.
///
/// Markers are removed along with the first space of a line comment,
/// directives are dropped, trailing whitespace is trimmed, leading blank lines
/// are removed and blank runs collapse to one. A non-empty result ends with a
/// newline.
pub fn comment_text(comments: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for &raw in comments {
        let body = if let Some(rest) = raw.strip_prefix("//") {
            if let Some(rest) = rest.strip_prefix(' ') {
                rest
            } else if RE_DIRECTIVE.is_match(rest) {
                continue;
            } else {
                rest
            }
        } else if let Some(rest) = raw.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            raw
        };

        for line in body.split('\n') {
            lines.push(line.trim_end());
        }
    }

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let after_text = kept.last().is_some_and(|prev| !prev.is_empty());
        if !line.is_empty() || after_text {
            kept.push(line);
        }
    }

    if kept.last().is_some_and(|last| !last.is_empty()) {
        kept.push("");
    }
    kept.join("\n")
}
