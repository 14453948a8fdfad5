//! Repair hints and internal errors
//!
//! `CspError` is the Rust rendering of `SourceRepairHint` from the original
//! `cspsh` interpreter (spec.md §7): a closed set of plain-English hints,
//! each paired with the offending token's index into the token slice that
//! was parsed, so a caller can always re-derive a citation via
//! [`crate::diagnostics::cite`].

use std::fmt;

/// One of the closed set of repair hints, or an internal invariant
/// violation that indicates a bug rather than malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CspError {
    /// Input was empty after blanks/comments were stripped.
    NeedSomeSource,
    /// End-of-stream reached with an open production.
    NeedMoreSourceToKnit { token: usize },
    /// Tokens remain unmatched, or a partial match dead-ended with no
    /// viable alternative.
    NeedAStrongerKnitter { token: usize },
    /// A duplicate-name invariant failed. `kind` is one of "event names",
    /// "guard names", "argot names".
    NeedDistinct {
        kind: &'static str,
        duplicates: Vec<String>,
        token: usize,
    },
    /// A bug, not a malformed-input condition: a lexer or checkpoint
    /// invariant was violated.
    Internal(String),
}

impl CspError {
    /// The token index this error should be cited against, if any.
    /// `NeedSomeSource` has no offending token (there is no input at all).
    pub fn token_index(&self) -> Option<usize> {
        match self {
            CspError::NeedSomeSource => None,
            CspError::NeedMoreSourceToKnit { token } => Some(*token),
            CspError::NeedAStrongerKnitter { token } => Some(*token),
            CspError::NeedDistinct { token, .. } => Some(*token),
            CspError::Internal(_) => None,
        }
    }

    /// The plain-English hint text, exactly one of the closed set in
    /// spec.md §7.
    pub fn hint(&self) -> String {
        match self {
            CspError::NeedSomeSource => "need some source".to_owned(),
            CspError::NeedMoreSourceToKnit { .. } => "need more source to knit".to_owned(),
            CspError::NeedAStrongerKnitter { .. } => "need a stronger knitter".to_owned(),
            CspError::NeedDistinct {
                kind, duplicates, ..
            } => format!("need distinct {}, got: {}", kind, duplicates.join(" ")),
            CspError::Internal(msg) => format!("internal error: {}", msg),
        }
    }
}

impl fmt::Display for CspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hint())
    }
}

impl std::error::Error for CspError {}
