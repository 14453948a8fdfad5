//! Lexer (Splitter)
//!
//! Regex-tokenises each input line, classifying every char into exactly one
//! [`Split`](crate::source_map::Split): `blanks`, `comment`, `mark`, `name`,
//! or `freak`. See spec.md §4.2 for the grammar and SPEC_FULL.md §4.2 for
//! the ambient balance-check addition.

pub mod patterns;

use crate::source_map::{Split, SplitKind};

/// Split one source line into its fragments. The lexer never sees more than
/// a line at a time, so line/column bookkeeping for [`crate::source_map`]
/// falls out of that directly.
pub fn split_line(line: &str) -> Vec<Split> {
    let mut splits = Vec::new();
    let mut column = 0usize;

    for caps in patterns::splits_captures(line) {
        let (kind, chars) = classify(&caps);
        let char_count = chars.chars().count();

        splits.push(Split {
            kind,
            chars,
            column,
        });

        column += char_count;
    }

    splits
}

fn classify(caps: &regex::Captures) -> (SplitKind, String) {
    if let Some(m) = caps.name("blanks") {
        (SplitKind::Blanks, m.as_str().to_owned())
    } else if let Some(m) = caps.name("comment") {
        (SplitKind::Comment, m.as_str().to_owned())
    } else if let Some(m) = caps.name("mark") {
        (SplitKind::Mark, m.as_str().to_owned())
    } else if let Some(m) = caps.name("name") {
        (SplitKind::Name, m.as_str().to_owned())
    } else if let Some(m) = caps.name("freak") {
        (SplitKind::Freak, m.as_str().to_owned())
    } else {
        unreachable!("SPLITS_REGEX always matches exactly one named group")
    }
}
