/*
 * lib.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Minimal text template engine for benchmark report generation.
//!
//! This crate renders report templates (HTML, CSV, plain text) against a
//! hierarchical data context populated from benchmark results. It supports:
//!
//! - Variable interpolation: `{$name}` or `{$results.mean}`
//! - Loops: `{% for run in runs %}...{% endfor %}`, with `{$loop.index}`
//!   (1-based) and `{$loop.index0}` (0-based) bound inside the body
//! - Conditionals: `{% if x %}`, `{% if not x %}`, `{% if a == b %}`,
//!   `{% if a != b %}` ... `{% endif %}`
//! - Quoted literals in any value position: `{% if op == "multiply" %}`
//!
//! A `{` that does not open a recognized directive is emitted verbatim, and
//! an unresolved variable renders as its own literal placeholder (`{$key}`)
//! so template mistakes stay visible in the output instead of failing.
//!
//! # Architecture
//!
//! Rendering is a three-stage pipeline: [`lexer::tokenize`] scans the
//! source into a flat node sequence, [`Template::compile`] nests `for`/`if`
//! bodies into a directive tree, and [`Template::render`] walks the tree
//! against a mutable [`Context`]. Values are shared handles ([`Data`]):
//! binding one into a list, a map, or a loop variable aliases it rather
//! than copying it.
//!
//! # Example
//!
//! ```
//! use vernier_template::{Context, Data, Template};
//!
//! let mut ctx = Context::new();
//! ctx.insert("title", "spin benchmark");
//! ctx.push_value("runs", "3.1 ms")?;
//! ctx.push_value("runs", "2.9 ms")?;
//!
//! let template = Template::compile(
//!     "{$title}: {% for run in runs %}[{$loop.index}] {$run} {% endfor %}",
//! )?;
//! let output = template.render(&mut ctx)?;
//! assert_eq!(output, "spin benchmark: [1] 3.1 ms [2] 2.9 ms ");
//! # Ok::<(), vernier_template::TemplateError>(())
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod value;

// Re-export main types at crate root
pub use ast::{Conditional, EndKind, EndMarker, ForLoop, Node, Text, VariableRef};
pub use error::{TemplateError, TemplateResult};
pub use parser::Template;
pub use resolver::resolve;
pub use value::{Context, Data, Value};

/// Compile and render a template in one call.
pub fn render(source: &str, context: &mut Context) -> TemplateResult<String> {
    Template::compile(source)?.render(context)
}
