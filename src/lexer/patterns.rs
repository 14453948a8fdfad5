//! Shared regex patterns for CSP tokenization.
//!
//! Mirrors `SPLITS_REGEX` in the original `cspsh` interpreter: one
//! alternation tried left to right at each scan position, named capture
//! groups picking out exactly one kind per match.

use regex::Regex;
use std::sync::OnceLock;

/// Mark chars recognised by the `mark` alternative, in the exact order
/// spec.md §4.2 lists them.
pub const MARKS: &str = "(),:={|}αμ•→⟨⟩*";

/// `[A-Za-z_][A-Za-z_0-9.]*`, shared by Event, ProcName, Alphabet, Arg.
pub const NAME_PATTERN: &str = r"[A-Za-z_][A-Za-z_0-9.]*";

fn splits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?P<blanks>[ \t]+)|(?P<comment>#[^\n]*)|(?P<mark>[(){{}},:=|αμ•→⟨⟩*])|(?P<name>{})|(?P<freak>.)",
            NAME_PATTERN
        );
        Regex::new(&pattern).expect("static SPLITS_REGEX must compile")
    })
}

pub fn splits_captures(line: &str) -> regex::CaptureMatches<'static, '_> {
    splits_regex().captures_iter(line)
}
