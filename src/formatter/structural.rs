//! Structural-mode formatting (spec.md §4.7 "Structural mode").
//!
//! Produces a Lisp-style dump of the AST's shape: `Variant(child, ...)`
//! for aggregates, `Variant(key=child, ...)` for compounds, and a quoted
//! atom name for atoms. Unlike CSP mode this traversal is entirely
//! mechanical (one shared rendering rule for every variant, rather than
//! a per-variant style table), since the point of structural mode is to
//! show the tree shape itself (SPEC_FULL.md §4.7).

use crate::ast::Node;

/// Default wrap width in columns; the `cspfmt` binary may override this
/// with the real terminal width via `terminal_size`.
pub const STRUCTURAL_WRAP_WIDTH: usize = 80;

/// Render `ast` as a structural dump at the default wrap width.
pub fn format_structural(ast: &Node) -> String {
    format_structural_with_width(ast, STRUCTURAL_WRAP_WIDTH)
}

/// Render `ast` as a structural dump, wrapping children onto their own
/// 4-space-indented lines once the single-line form would exceed `width`.
pub fn format_structural_with_width(ast: &Node, width: usize) -> String {
    render(ast, 0, width)
}

const INDENT_STEP: usize = 4;

fn render(node: &Node, depth: usize, width: usize) -> String {
    if let Some(name) = node.atom_name() {
        return format!("{}(\"{}\")", node.variant_name(), name);
    }

    let bonds = node.bonds();
    let parts: Vec<String> = bonds
        .iter()
        .map(|bond| {
            let child = render(bond.child, depth + 1, width);
            match bond.key {
                Some(key) => format!("{}={}", key, child),
                None => child,
            }
        })
        .collect();

    let flat = format!("{}({})", node.variant_name(), parts.join(", "));
    if depth * INDENT_STEP + flat.len() <= width || parts.is_empty() {
        return flat;
    }

    let inner_indent = " ".repeat((depth + 1) * INDENT_STEP);
    let outer_indent = " ".repeat(depth * INDENT_STEP);
    let body = parts
        .iter()
        .map(|part| format!("{inner_indent}{part}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{}(\n{}\n{}{})", node.variant_name(), body, outer_indent, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::source_map::SourceMap;

    fn dump(text: &str, width: usize) -> String {
        let (_map, tokens) = SourceMap::give(text);
        let ast = parser::parse(&tokens).unwrap();
        format_structural_with_width(&ast, width)
    }

    #[test]
    fn atoms_render_their_quoted_name() {
        assert_eq!(dump("STOP", 80), "ProcName(\"STOP\")");
    }

    #[test]
    fn a_short_prong_stays_on_one_line() {
        assert_eq!(
            dump("tick → STOP", 80),
            "Prong(prolog=Event(\"tick\"), epilog=ProcName(\"STOP\"))"
        );
    }

    #[test]
    fn a_wide_node_wraps_one_child_per_line() {
        let out = dump(
            "(coin → choc → STOP | coin → toffee → STOP)",
            20,
        );
        assert!(out.starts_with("Pocket(\n    inner=Fork(\n"));
        assert!(out.trim_end().ends_with(")"));
    }

    #[test]
    fn empty_aggregates_never_wrap() {
        assert_eq!(dump("{}", 1), "EventSet()");
        assert_eq!(dump("⟨⟩", 1), "Transcript()");
    }
}
