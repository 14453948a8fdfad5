//! Parser (Knitter)
//!
//! Recursive-descent parser with unbounded lookahead via backtracking
//! checkpoints (spec.md §4.5). Every production function returns
//! `Option<Node>`: `None` means "did not match here", and the caller rolls
//! back its own checkpoint and tries its next alternative. No production
//! ever raises partway through: a production that commits to one
//! alternative (consumes a mark, say) but then can't complete the rest of
//! its own body simply rolls itself back to where it started and reports
//! "did not match" too, exactly like `KnitterBot`'s `with self._checkpoint_():`
//! blocks in the original `cspsh` interpreter, whose `__exit__` restores the
//! saved cursor unless `_commit_()` was called.
//!
//! A [`CspError`] is raised in exactly one place: [`parse`] itself, after
//! the whole grammar has had its say. If no alternative matched anything
//! at all, that's `need a stronger knitter`; if something matched but
//! tokens remain unconsumed, that's `need more source to knit`, mirroring
//! `knit_csp_splits`'s own two-check shape in the original source, not the
//! "open production vs. dead end" framing one might guess from the hint
//! names alone.
//!
//! Abstract categories (`Proc`, `ProcBody`, `BasicBody`, `Pocketable`,
//! `Step`, `Epilog`, `World`, `Term`) are not functions that wrap their
//! result in a variant of their own: they just try each alternative in
//! turn and return whichever `Node` matched, exactly as the grammar
//! describes them (spec.md §4.5, §3).

use crate::ast::Node;
use crate::error::CspError;
use crate::source_map::Token;
use crate::token_stream::TokenStream;

/// Parse a full token slice into the AST root. `csp = sentence` to the
/// letter (spec.md §4.5's grammar head). Classification of a failed parse
/// happens only here (spec.md §4.5 "Failure modes"), matching
/// `knit_csp_splits` in the original source: no grammar production below
/// ever raises on its own.
pub fn parse(tokens: &[Token]) -> Result<Node, CspError> {
    if tokens.is_empty() {
        return Err(CspError::NeedSomeSource);
    }

    let mut stream = TokenStream::new(tokens);
    match sentence(&mut stream) {
        Some(root) if stream.at_end() => Ok(root),
        Some(_) => Err(CspError::NeedMoreSourceToKnit {
            token: stream.cursor(),
        }),
        None => Err(CspError::NeedAStrongerKnitter { token: 0 }),
    }
}

/// Fold a one-element aggregate to its lone child (spec.md §4.4 "single
/// element folding").
fn form_plural(mut children: Vec<Node>, wrap: fn(Vec<Node>) -> Node) -> Node {
    if children.len() == 1 {
        children.pop().unwrap()
    } else {
        wrap(children)
    }
}

/// `sentence = term { '=' term }`
fn sentence(stream: &mut TokenStream) -> Option<Node> {
    let mut terms = vec![term(stream)?];

    loop {
        stream.checkpoint();
        if !stream.accept_mark("=") {
            stream.rollback();
            break;
        }
        match term(stream) {
            Some(next) => {
                stream.commit();
                terms.push(next);
            }
            None => {
                stream.rollback();
                break;
            }
        }
    }

    Some(form_plural(terms, Node::Sentence))
}

/// `term = transcript | event_set | proc_def | argot_def | pocketable | step | argot`
fn term(stream: &mut TokenStream) -> Option<Node> {
    transcript(stream)
        .or_else(|| event_set(stream))
        .or_else(|| proc_def(stream))
        .or_else(|| argot_def(stream))
        .or_else(|| pocketable(stream))
        .or_else(|| step(stream))
        .or_else(|| argot(stream))
}

/// `transcript = '⟨' [ event { ',' event } [ ',' ] ] '⟩'`
fn transcript(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("⟨") {
        stream.rollback();
        return None;
    }
    let events = accept_comma_list(stream, event);
    if !stream.accept_mark("⟩") {
        stream.rollback();
        return None;
    }
    stream.commit();
    Some(Node::Transcript(events))
}

/// `event_set = '{' [ event { ',' event } [ ',' ] ] '}'`
fn event_set(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("{") {
        stream.rollback();
        return None;
    }
    let events = accept_comma_list(stream, event);
    if !stream.accept_mark("}") {
        stream.rollback();
        return None;
    }
    stream.commit();
    Some(Node::EventSet(events))
}

/// Shared helper for the `[ X { ',' X } [ ',' ] ]` shape used by
/// transcripts, event sets, and arg lists: greedily consume while each
/// successive `,` is followed by a successful `X`, tolerating a trailing
/// comma and an empty list.
fn accept_comma_list(
    stream: &mut TokenStream,
    mut one: impl FnMut(&mut TokenStream) -> Option<Node>,
) -> Vec<Node> {
    let mut items = Vec::new();

    let Some(first) = one(stream) else {
        return items;
    };
    items.push(first);

    loop {
        stream.checkpoint();
        if !stream.accept_mark(",") {
            stream.rollback();
            break;
        }
        match one(stream) {
            Some(next) => {
                stream.commit();
                items.push(next);
            }
            None => {
                // Trailing comma: the `,` was consumed speculatively,
                // roll it back so the closing mark is still current.
                stream.rollback();
                break;
            }
        }
    }

    items
}

/// `event = Name` where `Name` classifies as lowercase.
fn event(stream: &mut TokenStream) -> Option<Node> {
    let tok = stream.peek()?;
    let name = tok.peek_event_name()?.to_owned();
    stream.advance();
    Some(Node::Event(name))
}

/// `proc_name = Name` where `Name` classifies as uppercase. Shared by
/// both `PROC` atoms and `alphabet` atoms (spec.md §3: "Alphabet ...
/// shares shape with ProcName").
fn proc_name_atom(stream: &mut TokenStream) -> Option<Node> {
    let tok = stream.peek()?;
    let name = tok.peek_proc_name()?.to_owned();
    stream.advance();
    Some(Node::ProcName(name))
}

fn alphabet_atom(stream: &mut TokenStream) -> Option<Node> {
    let tok = stream.peek()?;
    let name = tok.peek_proc_name()?.to_owned();
    stream.advance();
    Some(Node::Alphabet(name))
}

/// `arg = Name` (any identifier shape).
fn arg(stream: &mut TokenStream) -> Option<Node> {
    let tok = stream.peek()?;
    let name = tok.peek_arg_name()?.to_owned();
    stream.advance();
    Some(Node::Arg(name))
}

/// `proc_def = PROC '=' proc_body`
fn proc_def(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    let Some(proc) = proc(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark("=") {
        stream.rollback();
        return None;
    }
    let Some(body) = proc_body(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::ProcDef {
        proc: Box::new(proc),
        body: Box::new(body),
    })
}

/// `proc_body = sharp_body | fuzzy_body | fork | basic_body`
fn proc_body(stream: &mut TokenStream) -> Option<Node> {
    sharp_body(stream)
        .or_else(|| fuzzy_body(stream))
        .or_else(|| fork(stream))
        .or_else(|| basic_body(stream))
}

/// `sharp_body = 'μ' PROC ':' world '•' basic_body`
fn sharp_body(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("μ") {
        stream.rollback();
        return None;
    }
    let Some(proc) = proc(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark(":") {
        stream.rollback();
        return None;
    }
    let Some(world) = world(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark("•") {
        stream.rollback();
        return None;
    }
    let Some(basic) = basic_body(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::SharpBody {
        proc: Box::new(proc),
        world: Box::new(world),
        basic: Box::new(basic),
    })
}

/// `fuzzy_body = 'μ' PROC '•' basic_body`
fn fuzzy_body(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("μ") {
        stream.rollback();
        return None;
    }
    let Some(proc) = proc(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark("•") {
        stream.rollback();
        return None;
    }
    let Some(basic) = basic_body(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::FuzzyBody {
        proc: Box::new(proc),
        basic: Box::new(basic),
    })
}

/// `basic_body = PROC | pocket`
fn basic_body(stream: &mut TokenStream) -> Option<Node> {
    proc(stream).or_else(|| pocket(stream))
}

/// `PROC = proc_with_args | proc_with_one | proc_name`
fn proc(stream: &mut TokenStream) -> Option<Node> {
    proc_with_args(stream)
        .or_else(|| proc_with_one(stream))
        .or_else(|| proc_name_atom(stream))
}

/// `proc_with_args = proc_name arg_list`
fn proc_with_args(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    let Some(name) = proc_name_atom(stream) else {
        stream.rollback();
        return None;
    };
    let Some(args) = arg_list(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    let args = match args {
        Node::ArgList(items) => items,
        _ => unreachable!("arg_list always yields Node::ArgList"),
    };
    Some(Node::ProcWithArgs {
        proc: Box::new(name),
        args,
    })
}

/// `proc_with_one = proc_name '*' arg`
fn proc_with_one(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    let Some(name) = proc_name_atom(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark("*") {
        stream.rollback();
        return None;
    }
    let Some(a) = arg(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::ProcWithOne {
        proc: Box::new(name),
        arg: Box::new(a),
    })
}

/// `arg_list = '(' [ arg { ',' arg } [ ',' ] ] ')'`
fn arg_list(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("(") {
        stream.rollback();
        return None;
    }
    let args = accept_comma_list(stream, arg);
    if !stream.accept_mark(")") {
        stream.rollback();
        return None;
    }
    stream.commit();
    Some(Node::ArgList(args))
}

/// `argot_def = argot_names '=' event_set`
fn argot_def(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    let Some(names) = argot_names(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark("=") {
        stream.rollback();
        return None;
    }
    let Some(events) = event_set(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::ArgotDef {
        names: Box::new(names),
        event_set: Box::new(events),
    })
}

/// `argot_names = argot { '=' argot }`
fn argot_names(stream: &mut TokenStream) -> Option<Node> {
    let mut argots = vec![argot(stream)?];
    loop {
        stream.checkpoint();
        if !stream.accept_mark("=") {
            stream.rollback();
            break;
        }
        match argot(stream) {
            Some(next) => {
                stream.commit();
                argots.push(next);
            }
            None => {
                stream.rollback();
                break;
            }
        }
    }
    Some(form_plural(argots, Node::ArgotNames))
}

/// `argot = 'α' proc_body`
fn argot(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("α") {
        stream.rollback();
        return None;
    }
    let Some(body) = proc_body(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::Argot {
        body: Box::new(body),
    })
}

/// `world = event_set | argot | alphabet`
fn world(stream: &mut TokenStream) -> Option<Node> {
    event_set(stream)
        .or_else(|| argot(stream))
        .or_else(|| alphabet_atom(stream))
}

/// `argot_event = event ':' world`
fn argot_event(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    let Some(ev) = event(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark(":") {
        stream.rollback();
        return None;
    }
    let Some(w) = world(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::ArgotEvent {
        event: Box::new(ev),
        world: Box::new(w),
    })
}

/// `step = argot_event | event`
fn step(stream: &mut TokenStream) -> Option<Node> {
    argot_event(stream).or_else(|| event(stream))
}

/// `prolog = step { '→' step }`
fn prolog(stream: &mut TokenStream) -> Option<Node> {
    let mut steps = vec![step(stream)?];
    loop {
        stream.checkpoint();
        if !stream.accept_mark("→") {
            stream.rollback();
            break;
        }
        match step(stream) {
            Some(next) => {
                stream.commit();
                steps.push(next);
            }
            None => {
                stream.rollback();
                break;
            }
        }
    }
    Some(form_plural(steps, Node::Prolog))
}

/// `epilog = PROC | pocket`
fn epilog(stream: &mut TokenStream) -> Option<Node> {
    proc(stream).or_else(|| pocket(stream))
}

/// `prong = prolog '→' epilog`
fn prong(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    let Some(pro) = prolog(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark("→") {
        stream.rollback();
        return None;
    }
    let Some(epi) = epilog(stream) else {
        stream.rollback();
        return None;
    };
    stream.commit();
    Some(Node::Prong {
        prolog: Box::new(pro),
        epilog: Box::new(epi),
    })
}

/// `fork = prong { '|' prong }`
fn fork(stream: &mut TokenStream) -> Option<Node> {
    let mut prongs = vec![prong(stream)?];
    loop {
        stream.checkpoint();
        if !stream.accept_mark("|") {
            stream.rollback();
            break;
        }
        match prong(stream) {
            Some(next) => {
                stream.commit();
                prongs.push(next);
            }
            None => {
                stream.rollback();
                break;
            }
        }
    }
    Some(form_plural(prongs, Node::Fork))
}

/// `pocketable = fork | proc_body`
fn pocketable(stream: &mut TokenStream) -> Option<Node> {
    fork(stream).or_else(|| proc_body(stream))
}

/// `pocket = '(' pocketable ')'`
fn pocket(stream: &mut TokenStream) -> Option<Node> {
    stream.checkpoint();
    if !stream.accept_mark("(") {
        stream.rollback();
        return None;
    }
    let Some(inner) = pocketable(stream) else {
        stream.rollback();
        return None;
    };
    if !stream.accept_mark(")") {
        stream.rollback();
        return None;
    }
    stream.commit();
    Some(Node::Pocket {
        inner: Box::new(inner),
    })
}
