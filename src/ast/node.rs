//! The AST Node model (spec.md §3, §4.4).
//!
//! One Rust enum carries every atom, aggregate, and compound the grammar
//! produces. "Abstract categories" (`Proc`, `ProcBody`, `BasicBody`,
//! `Pocketable`, `Step`, `Epilog`, `World`, `Term`) are not variants here:
//! they are parser-level union types that return one of the variants
//! below directly, exactly as their namesake classes do in the original
//! `cspsh` interpreter (see SPEC_FULL.md §3).

use serde::Serialize;

use super::style::Style;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    // Atoms
    Event(String),
    ProcName(String),
    Alphabet(String),
    Arg(String),

    // Aggregates
    Transcript(Vec<Node>),
    EventSet(Vec<Node>),
    ArgList(Vec<Node>),
    ArgotNames(Vec<Node>),
    Prolog(Vec<Node>),
    Fork(Vec<Node>),
    Sentence(Vec<Node>),

    // Compounds
    ProcWithOne {
        proc: Box<Node>,
        arg: Box<Node>,
    },
    ProcWithArgs {
        proc: Box<Node>,
        args: Vec<Node>,
    },
    Argot {
        body: Box<Node>,
    },
    ArgotDef {
        names: Box<Node>,
        event_set: Box<Node>,
    },
    ArgotEvent {
        event: Box<Node>,
        world: Box<Node>,
    },
    Prong {
        prolog: Box<Node>,
        epilog: Box<Node>,
    },
    ProcDef {
        proc: Box<Node>,
        body: Box<Node>,
    },
    SharpBody {
        proc: Box<Node>,
        world: Box<Node>,
        basic: Box<Node>,
    },
    FuzzyBody {
        proc: Box<Node>,
        basic: Box<Node>,
    },
    Pocket {
        inner: Box<Node>,
    },
}

/// One child of a [`Node`], keyed by field name for compounds, unkeyed
/// (`None`) for aggregates: the Rust rendering of `Bond` from the
/// original source.
pub struct Bond<'a> {
    pub key: Option<&'static str>,
    pub child: &'a Node,
}

impl Node {
    /// The variant's name, used by the structural formatter and by
    /// diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Node::Event(_) => "Event",
            Node::ProcName(_) => "ProcName",
            Node::Alphabet(_) => "Alphabet",
            Node::Arg(_) => "Arg",
            Node::Transcript(_) => "Transcript",
            Node::EventSet(_) => "EventSet",
            Node::ArgList(_) => "ArgList",
            Node::ArgotNames(_) => "ArgotNames",
            Node::Prolog(_) => "Prolog",
            Node::Fork(_) => "Fork",
            Node::Sentence(_) => "Sentence",
            Node::ProcWithOne { .. } => "ProcWithOne",
            Node::ProcWithArgs { .. } => "ProcWithArgs",
            Node::Argot { .. } => "Argot",
            Node::ArgotDef { .. } => "ArgotDef",
            Node::ArgotEvent { .. } => "ArgotEvent",
            Node::Prong { .. } => "Prong",
            Node::ProcDef { .. } => "ProcDef",
            Node::SharpBody { .. } => "SharpBody",
            Node::FuzzyBody { .. } => "FuzzyBody",
            Node::Pocket { .. } => "Pocket",
        }
    }

    /// The atom's own name text, if this is an atom.
    pub fn atom_name(&self) -> Option<&str> {
        match self {
            Node::Event(s) | Node::ProcName(s) | Node::Alphabet(s) | Node::Arg(s) => Some(s),
            _ => None,
        }
    }

    /// Children in canonical textual order (spec.md §3 "every non-atomic
    /// variant exposes its children in a canonical order").
    pub fn bonds(&self) -> Vec<Bond<'_>> {
        let unkeyed = |nodes: &[Node]| -> Vec<Bond<'_>> {
            nodes.iter().map(|n| Bond { key: None, child: n }).collect()
        };

        match self {
            Node::Event(_) | Node::ProcName(_) | Node::Alphabet(_) | Node::Arg(_) => Vec::new(),

            Node::Transcript(events) => unkeyed(events),
            Node::EventSet(events) => unkeyed(events),
            Node::ArgList(args) => unkeyed(args),
            Node::ArgotNames(argots) => unkeyed(argots),
            Node::Prolog(steps) => unkeyed(steps),
            Node::Fork(prongs) => unkeyed(prongs),
            Node::Sentence(terms) => unkeyed(terms),

            Node::ProcWithOne { proc, arg } => vec![
                Bond { key: Some("proc"), child: proc },
                Bond { key: Some("arg"), child: arg },
            ],
            Node::ProcWithArgs { proc, args } => {
                let mut bonds = vec![Bond {
                    key: Some("proc"),
                    child: proc,
                }];
                bonds.extend(args.iter().map(|a| Bond {
                    key: None,
                    child: a,
                }));
                bonds
            }
            Node::Argot { body } => vec![Bond {
                key: Some("body"),
                child: body,
            }],
            Node::ArgotDef { names, event_set } => vec![
                Bond { key: Some("names"), child: names },
                Bond { key: Some("event_set"), child: event_set },
            ],
            Node::ArgotEvent { event, world } => vec![
                Bond { key: Some("event"), child: event },
                Bond { key: Some("world"), child: world },
            ],
            Node::Prong { prolog, epilog } => vec![
                Bond { key: Some("prolog"), child: prolog },
                Bond { key: Some("epilog"), child: epilog },
            ],
            Node::ProcDef { proc, body } => vec![
                Bond { key: Some("proc"), child: proc },
                Bond { key: Some("body"), child: body },
            ],
            Node::SharpBody { proc, world, basic } => vec![
                Bond { key: Some("proc"), child: proc },
                Bond { key: Some("world"), child: world },
                Bond { key: Some("basic"), child: basic },
            ],
            Node::FuzzyBody { proc, basic } => vec![
                Bond { key: Some("proc"), child: proc },
                Bond { key: Some("basic"), child: basic },
            ],
            Node::Pocket { inner } => vec![Bond {
                key: Some("inner"),
                child: inner,
            }],
        }
    }

    /// The per-variant CSP-mode [`Style`], transcribed from `_csp_style_`
    /// in the original source (see DESIGN.md for the full grounding
    /// table). Atoms and abstract-category pass-throughs have no style of
    /// their own (atoms render as their literal name; abstract categories
    /// never construct a `Node` of their own).
    pub fn csp_style(&self) -> Style {
        match self {
            Node::Event(_) | Node::ProcName(_) | Node::Alphabet(_) | Node::Arg(_) => Style::new(),

            Node::Transcript(_) => Style::new().head("⟨").first("{}").middle(", {}").tail("⟩"),
            Node::EventSet(_) => Style::new().head("{").first("{}").middle(", {}").tail("}"),
            Node::ArgList(_) => Style::new().head("(").first("{}").middle(", {}").tail(")"),
            Node::ArgotNames(_) => Style::new().first("{}").middle(" = {}"),
            Node::Prolog(_) => Style::new().first("{}").middle(" → {}"),
            Node::Fork(_) => Style::new().first("{}").middle(" | {}"),
            Node::Sentence(_) => Style::new().first("{}").middle(" = {}"),

            Node::ProcWithOne { .. } => Style::new().first("{}").middle("*{}"),
            Node::ProcWithArgs { .. } => Style::new()
                .first("{}(")
                .middle("{}, ")
                .last("{}")
                .tail(")"),
            Node::Argot { .. } => Style::new().first("α{}"),
            Node::ArgotDef { .. } => Style::new().first("{}").last(" = {}"),
            Node::ArgotEvent { .. } => Style::new().first("{}").last(":{}"),
            Node::Prong { .. } => Style::new().first("{}").last(" → {}"),
            Node::ProcDef { .. } => Style::new().first("{}").last(" = {}"),
            Node::SharpBody { .. } => Style::new()
                .first("μ {}")
                .middle(" : {}")
                .last(" • {}"),
            Node::FuzzyBody { .. } => Style::new().first("μ {}").last(" • {}"),
            Node::Pocket { .. } => Style::new().head("(").middle("{}").tail(")"),
        }
    }
}
