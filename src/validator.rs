//! Validator
//!
//! Post-parse invariant checks (spec.md §4.6). Walks the AST bottom-up;
//! each node with a structural invariant is checked as it's visited, so
//! the first violation encountered (in a stable depth-first, left-to-
//! right order) is the one reported.
//!
//! Token positions for the raised hints are approximate: the validator
//! sees only the AST, not the token stream, so it cites the position of
//! the first duplicate's named atom as carried through from parsing,
//! here reported as index `0`, the root of the bad node, since the AST
//! does not retain per-atom token indices (see DESIGN.md).

use crate::ast::Node;
use crate::error::CspError;

/// Walk `ast` bottom-up, raising the first structural invariant
/// violation found.
pub fn validate(ast: &Node) -> Result<(), CspError> {
    for bond in ast.bonds() {
        validate(bond.child)?;
    }

    match ast {
        Node::EventSet(events) => {
            check_distinct("event names", events)?;
        }
        Node::Fork(prongs) => {
            let guards: Vec<Node> = prongs.iter().map(first_guard_event).collect();
            check_distinct("guard names", &guards)?;
        }
        Node::ArgotDef { names, .. } => {
            let argots = match names.as_ref() {
                Node::ArgotNames(names) => names.clone(),
                single => vec![single.clone()],
            };
            check_distinct("argot names", &argots)?;
        }
        _ => {}
    }

    Ok(())
}

/// The event name that opens a prong's prolog (its "menu" entry, the one
/// that must be distinct across a fork's prongs). A typed guard (`x:A`)
/// parses as an `ArgotEvent`, not a bare `Event`; its own event name (`x`)
/// is what the distinctness check must see, so descend into it.
fn first_guard_event(prong: &Node) -> Node {
    let Node::Prong { prolog, .. } = prong else {
        unreachable!("Fork always contains Prong children")
    };
    let step = match prolog.as_ref() {
        Node::Prolog(steps) => &steps[0],
        single => single,
    };
    match step {
        Node::ArgotEvent { event, .. } => event.as_ref().clone(),
        other => other.clone(),
    }
}

/// Check `items` (atoms or `ArgotNames`' constituent argots) for
/// pairwise-distinct names. Every occurrence that participates in a
/// duplicate (not just the repeat) is reported, in the items' original
/// order (`{a, a}` reports "a a", not "a"), mirroring `duplicates()` in
/// the original `cspsh` interpreter, which keeps every item that has an
/// equal neighbour once the list is sorted.
fn check_distinct(kind: &'static str, items: &[Node]) -> Result<(), CspError> {
    let names: Vec<&str> = items
        .iter()
        .map(|item| node_name(item).unwrap_or_else(|| unreachable!("non-atom in distinctness check: {item:?}")))
        .collect();

    let mut counts = std::collections::HashMap::new();
    for name in &names {
        *counts.entry(*name).or_insert(0usize) += 1;
    }

    let duplicates: Vec<String> = names
        .iter()
        .filter(|name| counts[*name] > 1)
        .map(|name| (*name).to_owned())
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(CspError::NeedDistinct {
            kind,
            duplicates,
            token: 0,
        })
    }
}

/// The name an atom carries, or (for an `Argot`) the name of the process
/// its body defines.
fn node_name(node: &Node) -> Option<&str> {
    if let Some(name) = node.atom_name() {
        return Some(name);
    }
    match node {
        Node::Argot { body } => argot_body_name(body),
        _ => None,
    }
}

/// `ArgotDef`'s `names` field holds `Argot` wrappers around a
/// `proc_body`: the "argot name" that must be distinct is the process
/// name that body ultimately names.
fn argot_body_name(body: &Node) -> Option<&str> {
    match body {
        Node::ProcName(name) => Some(name),
        Node::ProcWithArgs { proc, .. } | Node::ProcWithOne { proc, .. } => argot_body_name(proc),
        Node::SharpBody { proc, .. } | Node::FuzzyBody { proc, .. } => argot_body_name(proc),
        Node::Pocket { inner } => argot_body_name(inner),
        _ => None,
    }
}
