//! Recursive, indentation-aware pretty-printer for [`Value`] trees.
//!
//! The output is for human inspection only and is deliberately NOT
//! re-parseable JSON:
//!
//! - Null renders as the literal `nil`.
//! - Every array element and object member keeps a trailing comma.
//! - Strings are wrapped in double quotes with no escaping of embedded
//!   quotes or control characters.
//!
//! Use [`crate::to_json`] for re-ingestible output. One tab per depth
//! level; the closing bracket sits at the opening indent level.

use std::fmt;

use crate::Value;

/// Render a value as indented text, starting at `depth` tab stops.
///
/// Numbers always carry a decimal point (`1.0`, not `1`). Object member
/// order follows `HashMap` iteration and is not deterministic across runs.
pub fn render(value: &Value, depth: usize) -> String {
    let mut out = String::new();
    render_into(value, depth, &mut out);
    out
}

fn render_into(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Number(n) => out.push_str(&format!("{n:?}")),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Array(items) => {
            let indent = make_indent(depth + 1);
            out.push_str("[\n");
            for item in items {
                out.push_str(&indent);
                render_into(item, depth + 1, out);
                out.push_str(",\n");
            }
            out.push_str(&make_indent(depth));
            out.push(']');
        }
        Value::Object(map) => {
            let indent = make_indent(depth + 1);
            out.push_str("{\n");
            for (key, value) in map {
                out.push_str(&indent);
                out.push('"');
                out.push_str(key);
                out.push_str("\": ");
                render_into(value, depth + 1, out);
                out.push_str(",\n");
            }
            out.push_str(&make_indent(depth));
            out.push('}');
        }
        Value::Null => out.push_str("nil"),
    }
}

/// One tab character per depth level.
fn make_indent(depth: usize) -> String {
    "\t".repeat(depth)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, 0))
    }
}
