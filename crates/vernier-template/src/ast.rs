/*
 * ast.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Directive node types.
//!
//! The lexer produces a flat sequence of these nodes; the tree builder then
//! nests the bodies of `for` and `if` nodes. Only those two kinds may hold
//! children.

use crate::error::{TemplateError, TemplateResult};

/// One parsed unit of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text to be output as-is.
    Text(Text),

    /// Variable interpolation: `{$dotted.path}`
    Variable(VariableRef),

    /// Loop block: `{% for item in list.path %}...{% endfor %}`
    For(ForLoop),

    /// Conditional block: `{% if expr %}...{% endif %}`
    If(Conditional),

    /// Block terminator: `{% endfor %}` or `{% endif %}`. Never rendered.
    End(EndMarker),
}

/// Literal text node.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The literal text content.
    pub text: String,
}

/// A reference to a variable by dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    /// The raw, untrimmed key between `{$` and `}`.
    pub key: String,
}

/// Loop block: `{% for item in list.path %}...{% endfor %}`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// Per-iteration binding name.
    pub var: String,
    /// Dotted path that must resolve to a list.
    pub source: String,
    /// Loop body, filled in by the tree builder.
    pub body: Vec<Node>,
}

impl ForLoop {
    /// Parse a trimmed `for` directive expression.
    ///
    /// The expression must split on whitespace into exactly four tokens
    /// (`for`, binding, `in`, source); anything else is malformed.
    pub fn from_directive(expression: &str) -> TemplateResult<Self> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        match tokens.as_slice() {
            [_, var, _, source] => Ok(ForLoop {
                var: (*var).to_string(),
                source: (*source).to_string(),
                body: Vec::new(),
            }),
            _ => Err(TemplateError::MalformedDirective {
                expression: expression.to_string(),
            }),
        }
    }
}

/// Conditional block: `{% if expr %}...{% endif %}`
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// The trimmed directive expression, including the leading `if`.
    pub expr: String,
    /// Conditional body, filled in by the tree builder.
    pub body: Vec<Node>,
}

/// Block terminator node.
#[derive(Debug, Clone, PartialEq)]
pub struct EndMarker {
    pub kind: EndKind,
}

/// Which opener an end marker closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndKind {
    EndFor,
    EndIf,
}

impl Node {
    /// The children of this node.
    ///
    /// Only `For` and `If` nodes hold children; asking any other kind is a
    /// programming error.
    pub fn children(&self) -> TemplateResult<&[Node]> {
        match self {
            Node::For(f) => Ok(&f.body),
            Node::If(c) => Ok(&c.body),
            _ => Err(Self::no_children()),
        }
    }

    /// Replace the children of this node. Fails for leaf kinds.
    pub fn set_children(&mut self, children: Vec<Node>) -> TemplateResult<()> {
        match self {
            Node::For(f) => {
                f.body = children;
                Ok(())
            }
            Node::If(c) => {
                c.body = children;
                Ok(())
            }
            _ => Err(Self::no_children()),
        }
    }

    fn no_children() -> TemplateError {
        TemplateError::UnsupportedOperation {
            message: "this node kind cannot have children".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_directive_parses_four_tokens() {
        let f = ForLoop::from_directive("for item in results.runs").unwrap();
        assert_eq!(f.var, "item");
        assert_eq!(f.source, "results.runs");
        assert!(f.body.is_empty());
    }

    #[test]
    fn test_for_directive_rejects_wrong_token_count() {
        for expr in ["for", "for item", "for item in", "for item in xs extra"] {
            assert!(matches!(
                ForLoop::from_directive(expr),
                Err(TemplateError::MalformedDirective { .. })
            ));
        }
    }

    #[test]
    fn test_only_blocks_hold_children() {
        let mut text = Node::Text(Text {
            text: "x".to_string(),
        });
        assert!(text.children().is_err());
        assert!(text.set_children(Vec::new()).is_err());

        let mut end = Node::End(EndMarker {
            kind: EndKind::EndIf,
        });
        assert!(end.children().is_err());
        assert!(end.set_children(Vec::new()).is_err());

        let mut f = Node::For(ForLoop {
            var: "x".to_string(),
            source: "xs".to_string(),
            body: Vec::new(),
        });
        f.set_children(vec![Node::Text(Text {
            text: "body".to_string(),
        })])
        .unwrap();
        assert_eq!(f.children().unwrap().len(), 1);
    }
}
