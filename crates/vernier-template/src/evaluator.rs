/*
 * evaluator.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Template rendering.
//!
//! The evaluator walks the directive tree and appends to an output string,
//! resolving variable references and directive semantics against a mutable
//! data context.
//!
//! Loop evaluation mutates the caller's context in place: each iteration
//! binds the iteration variable and a `loop` map (`index` 1-based, `index0`
//! 0-based) at the top level, and the final iteration's bindings remain
//! visible to sibling nodes and to the caller after the render returns.
//! Existing report templates depend on this leak-through; it must not be
//! scoped away.

use crate::ast::{Conditional, ForLoop, Node};
use crate::error::{TemplateError, TemplateResult};
use crate::parser::Template;
use crate::resolver::resolve;
use crate::value::Context;

impl Template {
    /// Render this template against a data context.
    ///
    /// Any error aborts the whole render; no partial output is returned.
    pub fn render(&self, context: &mut Context) -> TemplateResult<String> {
        let mut output = String::new();
        render_nodes(&self.nodes, context, &mut output)?;
        Ok(output)
    }
}

fn render_nodes(nodes: &[Node], context: &mut Context, output: &mut String) -> TemplateResult<()> {
    for node in nodes {
        render_node(node, context, output)?;
    }
    Ok(())
}

fn render_node(node: &Node, context: &mut Context, output: &mut String) -> TemplateResult<()> {
    match node {
        Node::Text(t) => {
            output.push_str(&t.text);
            Ok(())
        }

        Node::Variable(var) => {
            let value = resolve(&var.key, context)?;
            output.push_str(&value.as_scalar()?);
            Ok(())
        }

        Node::For(f) => render_for(f, context, output),

        Node::If(c) => render_if(c, context, output),

        // A stray end marker that survived tree building is a hard error
        // here, not at parse time.
        Node::End(_) => Err(TemplateError::UnsupportedOperation {
            message: "end markers have no renderable content".to_string(),
        }),
    }
}

fn render_for(f: &ForLoop, context: &mut Context, output: &mut String) -> TemplateResult<()> {
    let items = resolve(&f.source, context)?.as_list()?;
    for (i, item) in items.iter().enumerate() {
        let mut loop_map = Context::new();
        loop_map.insert("index", (i + 1).to_string());
        loop_map.insert("index0", i.to_string());
        context.insert("loop", loop_map);
        // The item's handle, not a copy: body mutations alias the list.
        context.insert(f.var.clone(), item.clone());
        render_nodes(&f.body, context, output)?;
    }
    Ok(())
}

fn render_if(c: &Conditional, context: &mut Context, output: &mut String) -> TemplateResult<()> {
    if is_true(&c.expr, context)? {
        render_nodes(&c.body, context, output)?;
    }
    Ok(())
}

/// Evaluate an `if` directive expression.
///
/// Grammar over the whitespace-split tokens (the leading token is `if`):
/// `if not X` is true iff `X` resolves empty; `if X` iff `X` resolves
/// non-empty; `if X <op> Y` compares scalar texts, where `==` means
/// equality and any other operator token means inequality. Extra trailing
/// tokens are ignored; a condition with nothing to test is malformed.
fn is_true(expr: &str, context: &mut Context) -> TemplateResult<bool> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    match tokens.as_slice() {
        [_, "not", key, ..] => Ok(resolve(key, context)?.is_empty()),
        [_, key] if *key != "not" => Ok(!resolve(key, context)?.is_empty()),
        [_, lhs, op, rhs, ..] => {
            let lhs = resolve(lhs, context)?.as_scalar()?;
            let rhs = resolve(rhs, context)?.as_scalar()?;
            Ok(if *op == "==" { lhs == rhs } else { lhs != rhs })
        }
        _ => Err(TemplateError::MalformedDirective {
            expression: expr.to_string(),
        }),
    }
}
