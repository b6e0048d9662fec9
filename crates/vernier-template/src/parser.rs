/*
 * parser.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Template compilation: flat node sequence to directive tree.
//!
//! The tree builder consumes nodes from the front of the lexer's output.
//! When it takes a `for` or `if` node it recurses on the *same* remaining
//! sequence to collect that node's body, stopping at the node's own
//! terminator kind. Because the recursion always uses the opener's own
//! terminator, arbitrarily nested blocks of mixed kinds close correctly
//! regardless of what the caller was waiting for.
//!
//! A stray end marker never matches the caller's terminator, so it is kept
//! in the tree and rejected later, at render time.

use crate::ast::{EndKind, Node};
use crate::error::TemplateResult;
use crate::lexer::tokenize;

/// A compiled template ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// The directive tree.
    pub(crate) nodes: Vec<Node>,

    /// Original source (for error reporting).
    #[allow(dead_code)]
    pub(crate) source: String,
}

impl Template {
    /// Compile a template from source text.
    pub fn compile(source: &str) -> TemplateResult<Self> {
        let mut tokens = tokenize(source)?.into_iter();
        let nodes = parse_block(&mut tokens, None)?;
        Ok(Template {
            nodes,
            source: source.to_string(),
        })
    }

    /// The directive tree of this template.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Build one block of the tree, consuming nodes until the sequence is
/// exhausted or an end marker of kind `until` is taken (and dropped).
fn parse_block(
    tokens: &mut std::vec::IntoIter<Node>,
    until: Option<EndKind>,
) -> TemplateResult<Vec<Node>> {
    let mut tree = Vec::new();
    while let Some(mut node) = tokens.next() {
        match &node {
            Node::For(_) => {
                let body = parse_block(tokens, Some(EndKind::EndFor))?;
                node.set_children(body)?;
            }
            Node::If(_) => {
                let body = parse_block(tokens, Some(EndKind::EndIf))?;
                node.set_children(body)?;
            }
            Node::End(end) if Some(end.kind) == until => return Ok(tree),
            _ => {}
        }
        tree.push(node);
    }
    Ok(tree)
}
