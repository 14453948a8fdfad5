//! Structural-dump snapshots (spec.md §4.7 "Structural mode"), using
//! insta's inline-literal form, no external `.snap` fixtures to manage;
//! the expected tree shape is compared against a literal embedded in the
//! test body.

use cspsh::{formatter::format_structural, lex, parse};
use insta::assert_snapshot;

fn dump(text: &str) -> String {
    let (_map, tokens) = lex(text);
    let ast = parse(&tokens).unwrap();
    format_structural(&ast)
}

#[test]
fn a_bare_prefix_dumps_its_prong_shape() {
    assert_snapshot!(dump("tick → STOP"), @r###"Prong(prolog=Event("tick"), epilog=ProcName("STOP"))"###);
}

#[test]
fn proc_with_args_dumps_its_argument_list() {
    assert_snapshot!(dump("VMCT(x)"), @r###"ProcWithArgs(proc=ProcName("VMCT"), Arg("x"))"###);
}

#[test]
fn an_event_set_dumps_its_members_in_order() {
    assert_snapshot!(dump("{a, b}"), @r###"EventSet(Event("a"), Event("b"))"###);
}
