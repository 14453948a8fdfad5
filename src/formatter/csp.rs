//! CSP-mode formatting (spec.md §4.7 "CSP mode").
//!
//! Reproduces canonical CSP source text from an AST, using each variant's
//! [`crate::ast::Node::csp_style`] to join its already-formatted children.
//! `format_csp(parse(t))` must equal `t` modulo whitespace normalisation
//! for any well-formed `t` (the round-trip property, spec.md §8).

use crate::ast::Node;

/// Render `ast` as canonical CSP source text.
pub fn format_csp(ast: &Node) -> String {
    match ast.atom_name() {
        Some(name) => name.to_owned(),
        None => {
            let children: Vec<String> = ast.bonds().iter().map(|bond| format_csp(bond.child)).collect();
            ast.csp_style().join(&children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::source_map::SourceMap;

    fn roundtrip(text: &str) -> String {
        let (_map, tokens) = SourceMap::give(text);
        let ast = parser::parse(&tokens).unwrap();
        format_csp(&ast)
    }

    #[test]
    fn formats_a_bare_prong() {
        assert_eq!(roundtrip("tick → STOP"), "tick → STOP");
    }

    #[test]
    fn formats_a_fork_inside_a_pocket() {
        assert_eq!(
            roundtrip("(coin → choc → STOP | coin → toffee → STOP)"),
            "(coin → choc → STOP | coin → toffee → STOP)"
        );
    }

    #[test]
    fn formats_a_proc_def_with_sharp_body() {
        assert_eq!(
            roundtrip("CLOCK = μ X : {tick} • (tick → X)"),
            "CLOCK = μ X : {tick} • (tick → X)"
        );
    }

    #[test]
    fn formats_a_fuzzy_body() {
        assert_eq!(roundtrip("CLOCK = μ X • (tick → X)"), "CLOCK = μ X • (tick → X)");
    }

    #[test]
    fn formats_an_empty_transcript_and_event_set() {
        assert_eq!(roundtrip("⟨⟩"), "⟨⟩");
        assert_eq!(roundtrip("{}"), "{}");
    }

    #[test]
    fn formats_a_transcript_with_repeated_events() {
        assert_eq!(
            roundtrip("⟨coin, choc, coin, choc⟩"),
            "⟨coin, choc, coin, choc⟩"
        );
    }

    #[test]
    fn formats_proc_with_args() {
        assert_eq!(roundtrip("VMCT(x)"), "VMCT(x)");
    }

    #[test]
    fn formats_an_argot_def() {
        assert_eq!(roundtrip("αP = {a, b}"), "αP = {a, b}");
    }

    #[test]
    fn normalises_whitespace_but_not_meaning() {
        // Extra interior whitespace in the source is not preserved; the
        // reformatted text uses the style table's own spacing.
        assert_eq!(roundtrip("tick   →   STOP"), "tick → STOP");
    }
}
