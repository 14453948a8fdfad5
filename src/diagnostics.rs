//! Diagnostics
//!
//! Renders a [`crate::error::CspError`] as the three-line citation block
//! from spec.md §4.8: the source line (prefixed with its 1-based line
//! number), a caret line underlining the offending token, and the hint
//! text itself.

use crate::error::CspError;
use crate::source_map::{SourceMap, Token};

/// A `CspError` bundled with its citation, pre-rendered against the
/// `SourceMap`/tokens that produced it, so a caller never needs to
/// re-derive the offending token by hand (SPEC_FULL.md §6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspDiagnostic {
    pub error: CspError,
    pub citation: String,
}

impl std::fmt::Display for CspDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.citation)
    }
}

impl std::error::Error for CspDiagnostic {}

/// Render the three-line citation block for `error`, given the
/// `source_map`/`tokens` that `error` was raised against.
///
/// `NeedSomeSource` has no offending token (it cites nothing but its own
/// hint line, since there is no source line to show).
pub fn cite(source_map: &SourceMap, tokens: &[Token], error: &CspError) -> String {
    match error.token_index() {
        Some(index) => match tokens.get(index).or_else(|| tokens.last()) {
            Some(token) => {
                let (line_no, line_text, caret_line) = source_map.cite(token);
                format!("{line_no}:{line_text}\n{caret_line}\nerror: {}", error.hint())
            }
            None => format!("error: {}", error.hint()),
        },
        None => format!("error: {}", error.hint()),
    }
}

/// Build a [`CspDiagnostic`] by citing `error` against `source_map`/`tokens`.
pub fn diagnose(source_map: &SourceMap, tokens: &[Token], error: CspError) -> CspDiagnostic {
    let citation = cite(source_map, tokens, &error);
    CspDiagnostic { error, citation }
}
