/*
 * lexer.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Template tokenization.
//!
//! [`tokenize`] scans raw template text into a flat node sequence: literal
//! text, variable references, and `for`/`if`/`end` directives. Nesting is
//! the tree builder's job; the `for` and `if` nodes produced here have
//! empty bodies.
//!
//! The scanner is deliberately forgiving. A `{` that does not open a
//! recognized directive is emitted as literal text, a trailing lone `{` is
//! kept, and an unterminated `{$...` or `{%...` drops only the consumed `{`
//! and re-scans the remainder as ordinary text. Compatibility with existing
//! report templates depends on these behaviors.

use crate::ast::{Conditional, EndKind, EndMarker, ForLoop, Node, Text, VariableRef};
use crate::error::TemplateResult;

fn text_node(text: impl Into<String>) -> Node {
    Node::Text(Text { text: text.into() })
}

/// Scan template text into a flat node sequence.
///
/// The only error raised here is a malformed `for` directive; every other
/// irregularity degrades to literal text.
pub fn tokenize(text: &str) -> TemplateResult<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(pos) = rest.find('{') else {
            nodes.push(text_node(rest));
            break;
        };
        if pos > 0 {
            nodes.push(text_node(&rest[..pos]));
        }
        if pos == rest.len() - 1 {
            // Trailing lone brace is tolerated, not an error.
            nodes.push(text_node("{"));
            break;
        }
        rest = &rest[pos + 1..];

        match rest.as_bytes()[0] {
            b'$' => {
                if let Some(end) = rest.find('}') {
                    nodes.push(Node::Variable(VariableRef {
                        // Raw and untrimmed, exactly as written.
                        key: rest[1..end].to_string(),
                    }));
                    rest = &rest[end + 1..];
                }
                // Unterminated: the consumed `{` is dropped and the
                // remainder re-scanned as text on the next pass.
            }
            b'%' => {
                if let Some(end) = rest.find('}') {
                    // The expression runs from after `%` to just before the
                    // `%}` closer; a closer within two characters leaves it
                    // empty.
                    let expression = rest.get(1..end.saturating_sub(1)).unwrap_or("").trim();
                    if expression.starts_with("for") {
                        nodes.push(Node::For(ForLoop::from_directive(expression)?));
                    } else if expression.starts_with("if") {
                        nodes.push(Node::If(Conditional {
                            expr: expression.to_string(),
                            body: Vec::new(),
                        }));
                    } else {
                        let kind = if expression == "endfor" {
                            EndKind::EndFor
                        } else {
                            EndKind::EndIf
                        };
                        nodes.push(Node::End(EndMarker { kind }));
                    }
                    rest = &rest[end + 1..];
                }
            }
            _ => {
                // Not a directive opener: emit the brace alone and resume
                // scanning from the character that followed it.
                nodes.push(text_node("{"));
            }
        }
    }

    Ok(nodes)
}
