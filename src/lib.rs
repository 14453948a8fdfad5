//! cspsh: a CSP notation compiler
//!
//! A small pipeline that turns CSP process notation text (as defined in
//! Hoare's 1985 "Communicating Sequential Processes" monograph, chapter
//! 1) into a validated, formattable abstract syntax tree.
//!
//! ```
//! let (map, tokens) = cspsh::lex("tick → STOP");
//! let ast = cspsh::parse(&tokens).unwrap();
//! cspsh::validate(&ast).unwrap();
//! assert_eq!(cspsh::format_csp(&ast), "tick → STOP");
//! # let _ = map;
//! ```
//!
//! The pipeline stages, in order: [`source_map`] (lex), [`parser`]
//! (knit tokens into an AST), [`validator`] (check structural
//! invariants), [`formatter`] (render CSP text or a structural dump),
//! and [`diagnostics`] (cite the offending token on failure).

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod source_map;
pub mod token_stream;
pub mod validator;

pub use ast::Node;
pub use diagnostics::CspDiagnostic;
pub use error::CspError;
pub use formatter::{format_csp, format_structural};
pub use source_map::{SourceMap, Token};

/// Lex `text` into a [`SourceMap`] and its token stream (spec.md §6).
pub fn lex(text: &str) -> (SourceMap, Vec<Token>) {
    SourceMap::give(text)
}

/// Parse `tokens` into an AST (spec.md §6).
pub fn parse(tokens: &[Token]) -> Result<Node, CspError> {
    parser::parse(tokens)
}

/// Check `ast` against the structural invariants (spec.md §6).
pub fn validate(ast: &Node) -> Result<(), CspError> {
    validator::validate(ast)
}

/// Render `source_map`/`tokens`'s citation of `error` as the three-line
/// diagnostic block (spec.md §4.8, §6).
pub fn cite(source_map: &SourceMap, tokens: &[Token], error: &CspError) -> String {
    diagnostics::cite(source_map, tokens, error)
}

/// Run the full pipeline (lex, parse, validate) and format the result
/// as canonical CSP text, mirroring spec.md §5's "pure function
/// `parse_and_format: text → (AST, formatted_text) | error`".
///
/// On failure, the returned [`CspDiagnostic`] carries both the `CspError`
/// and its already-rendered citation against `text`.
pub fn parse_and_format(text: &str) -> Result<(Node, String), CspDiagnostic> {
    let (source_map, tokens) = lex(text);

    let ast = parse(&tokens).map_err(|err| diagnostics::diagnose(&source_map, &tokens, err))?;
    validate(&ast).map_err(|err| diagnostics::diagnose(&source_map, &tokens, err))?;

    let formatted = format_csp(&ast);
    Ok((ast, formatted))
}
