//! Canonical textual rendering of Python expressions.
//!
//! The audit compares default expressions by exact canonical text, not by
//! semantic equivalence: reordered arguments or a different fallback value
//! are violations even when behaviorally identical. Canonicalization only
//! forgives formatting — whitespace is collapsed and simple string literals
//! are normalized to single quotes.

use tree_sitter::Node;

use crate::python::node_text;

/// Render `node` with whitespace collapsed and string quotes normalized.
pub fn canonical_form(node: Node<'_>, source: &[u8]) -> String {
    let mut out = String::new();
    render(node, source, &mut out);
    out
}

fn render(node: Node<'_>, source: &[u8], out: &mut String) {
    if node.kind() == "string" {
        render_string(node, source, out);
        return;
    }
    if node.child_count() == 0 {
        push_token(out, node_text(node, source));
        return;
    }
    let mut walk = node.walk();
    for child in node.children(&mut walk) {
        render(child, source, out);
    }
}

/// Normalize a plain string literal to single quotes. Prefixed strings
/// (f/r/b), triple quotes, interpolations, escapes, and contents that use
/// single quotes are rendered verbatim.
fn render_string(node: Node<'_>, source: &[u8], out: &mut String) {
    let mut walk = node.walk();
    let mut start = None;
    let mut end = None;
    let mut plain = true;
    for child in node.children(&mut walk) {
        match child.kind() {
            "string_start" => {
                // Anything longer than the quote itself is a prefix or a
                // triple quote.
                if node_text(child, source).len() > 1 {
                    plain = false;
                }
                start = Some(child);
            }
            "string_end" => end = Some(child),
            "string_content" => {}
            _ => plain = false,
        }
    }
    let (Some(start), Some(end)) = (start, end) else {
        push_token(out, node_text(node, source));
        return;
    };
    let inner =
        std::str::from_utf8(&source[start.end_byte()..end.start_byte()]).unwrap_or_default();
    if plain && !inner.contains('\'') && !inner.contains('\\') {
        out.push('\'');
        out.push_str(inner);
        out.push('\'');
    } else {
        push_token(out, node_text(node, source));
    }
}

/// Append a token, spacing it off the previous one when both sides are
/// word characters (`not x`, `a if b else c`).
fn push_token(out: &mut String, token: &str) {
    if token.is_empty() {
        return;
    }
    if let (Some(prev), Some(next)) = (out.chars().last(), token.chars().next()) {
        if is_word(prev) && is_word(next) {
            out.push(' ');
        }
    }
    out.push_str(token);
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
