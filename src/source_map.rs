//! Source Map
//!
//! Remembers where each token came from, so diagnostics can print the
//! offending source line with a caret underneath it.
//!
//! A [`SourceMap`] is built once by [`SourceMap::give`] and then read many
//! times by the parser (via the token slice it returns) and by
//! [`crate::diagnostics`] (via [`SourceMap::cite`]). It never mutates after
//! construction and never escapes the call that built it (see spec.md §5).

use serde::Serialize;

/// The kind of fragment a [`Split`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SplitKind {
    Blanks,
    Comment,
    Mark,
    Name,
    Freak,
}

impl SplitKind {
    /// Splits of these kinds never reach the token stream.
    fn is_yarn(self) -> bool {
        !matches!(self, SplitKind::Blanks | SplitKind::Comment)
    }
}

/// One lexical fragment: a kind tag plus the literal source chars it covers.
///
/// Invariant: `chars` is non-empty for every kind but [`SplitKind::Blanks`]
/// is allowed to be empty only at end-of-input bookkeeping; in practice the
/// lexer never emits an empty `Split`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    pub kind: SplitKind,
    pub chars: String,
    pub column: usize,
}

impl Split {
    pub fn is_yarn(&self) -> bool {
        self.kind.is_yarn()
    }

    pub fn is_mark(&self, chars: &str) -> bool {
        self.kind == SplitKind::Mark && self.chars == chars
    }

    /// The chars of the name if this Split splits as a lowercase Event name.
    pub fn peek_event_name(&self) -> Option<&str> {
        if self.kind != SplitKind::Name {
            return None;
        }
        let name = self.chars.as_str();
        if name.to_uppercase() != name && name == name.to_lowercase() {
            Some(name)
        } else {
            None
        }
    }

    /// The chars of the name if this Split splits as an uppercase
    /// ProcName/Alphabet name.
    pub fn peek_proc_name(&self) -> Option<&str> {
        if self.kind != SplitKind::Name {
            return None;
        }
        let name = self.chars.as_str();
        if name.to_lowercase() != name && name == name.to_uppercase() {
            Some(name)
        } else {
            None
        }
    }

    /// Any Name Split can stand for an Arg name, upper, lower, or neither.
    pub fn peek_arg_name(&self) -> Option<&str> {
        if self.kind == SplitKind::Name {
            Some(self.chars.as_str())
        } else {
            None
        }
    }
}

/// A Split that participates in parsing: a mark, name, or freak char.
/// Tokens preserve their back-reference to the originating Split via
/// `(line, index_in_line)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub split: Split,
    pub line: usize,
    pub index_in_line: usize,
}

impl Token {
    pub fn is_mark(&self, chars: &str) -> bool {
        self.split.is_mark(chars)
    }

    pub fn peek_event_name(&self) -> Option<&str> {
        self.split.peek_event_name()
    }

    pub fn peek_proc_name(&self) -> Option<&str> {
        self.split.peek_proc_name()
    }

    pub fn peek_arg_name(&self) -> Option<&str> {
        self.split.peek_arg_name()
    }

    /// The literal source chars this token covers.
    pub fn chars(&self) -> &str {
        &self.split.chars
    }
}

/// Holds the original text, split into per-line fragment lists, so any
/// token can be traced back to a citeable source line.
#[derive(Debug, Clone)]
pub struct SourceMap {
    lines: Vec<String>,
    splits_by_line: Vec<Vec<Split>>,
    freak_warnings: Vec<String>,
}

const OPENING_MARKS: &str = "([{⟨";
const CLOSING_MARKS: &str = ")]}⟩";

impl SourceMap {
    /// Split `text` into Splits, remember them per source line, and return
    /// the token subsequence (non-blank, non-comment).
    ///
    /// `\r\n` is normalised to `\n` on entry, matching `_cspsh4.py`'s
    /// `"\n".join(source.splitlines())`.
    pub fn give(text: &str) -> (SourceMap, Vec<Token>) {
        let normalized: Vec<&str> = text.lines().collect();

        let mut splits_by_line = Vec::with_capacity(normalized.len());
        let mut tokens = Vec::new();
        let mut freak_warnings = Vec::new();

        for (line_no, line) in normalized.iter().enumerate() {
            let splits = crate::lexer::split_line(line);

            // Invariant (spec.md §4.1): concatenating every Split's chars on
            // a line reproduces that line exactly.
            let rejoined: String = splits.iter().map(|s| s.chars.as_str()).collect();
            debug_assert_eq!(
                rejoined, *line,
                "lexer dropped source chars on line {}",
                line_no
            );

            for (index_in_line, split) in splits.iter().enumerate() {
                if split.kind == SplitKind::Freak && !freak_warnings.iter().any(|w| w == &split.chars) {
                    freak_warnings.push(split.chars.clone());
                }
                if split.is_yarn() {
                    tokens.push(Token {
                        split: split.clone(),
                        line: line_no,
                        index_in_line,
                    });
                }
            }

            splits_by_line.push(splits);
        }

        let lines = normalized.into_iter().map(str::to_owned).collect();

        (
            SourceMap {
                lines,
                splits_by_line,
                freak_warnings,
            },
            tokens,
        )
    }

    /// Anomalous single chars encountered during lexing, each reported
    /// once in first-occurrence order (the Rust rendering of the
    /// per-Source-Map "freaks already warned" dedup set, spec.md §4.2,
    /// §9). Never global: a fresh `SourceMap` starts with an empty set.
    pub fn freak_warnings(&self) -> &[String] {
        &self.freak_warnings
    }

    /// Locate the originating line for `token`, format it with a 1-based
    /// line number prefix, and a caret line aligned to the token's column.
    pub fn cite(&self, token: &Token) -> (usize, String, String) {
        let line_no = token.line + 1;
        let line_text = self
            .lines
            .get(token.line)
            .cloned()
            .unwrap_or_default();

        let column: usize = self.splits_by_line[token.line][..token.index_in_line]
            .iter()
            .map(|s| s.chars.chars().count())
            .sum();
        let width = token.split.chars.chars().count().max(1);

        let caret_line = format!("{}{}", " ".repeat(column), "^".repeat(width));

        (line_no, line_text, caret_line)
    }

    /// Report paired marks left open or closed without a matching partner,
    /// across the whole source (ambient diagnostic aid, see SPEC_FULL.md §4.2).
    pub fn unbalanced_marks(&self, tokens: &[Token]) -> (String, String) {
        let mut opened = String::new();
        let mut closed = String::new();
        let mut next_closing: Option<char> = None;

        for token in tokens {
            if token.split.kind != SplitKind::Mark {
                continue;
            }
            let ch = token.split.chars.chars().next().unwrap();

            if let Some(pos) = OPENING_MARKS.find(ch) {
                opened.push(ch);
                next_closing = CLOSING_MARKS.chars().nth(pos);
                continue;
            }

            if CLOSING_MARKS.contains(ch) {
                if Some(ch) == next_closing {
                    opened.pop();
                } else {
                    closed.push(ch);
                }
            }
        }

        (opened, closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freak_chars_are_deduped_in_first_occurrence_order() {
        let (map, _tokens) = SourceMap::give("a $ b $ c ~ d");
        assert_eq!(map.freak_warnings(), &["$".to_owned(), "~".to_owned()]);
    }

    #[test]
    fn a_fresh_source_map_has_no_freak_warnings() {
        let (map, _tokens) = SourceMap::give("tick → STOP");
        assert!(map.freak_warnings().is_empty());
    }

    #[test]
    fn cite_points_at_the_tokens_column() {
        let (map, tokens) = SourceMap::give("tick → STOP");
        let (line_no, line_text, caret) = map.cite(&tokens[1]);
        assert_eq!(line_no, 1);
        assert_eq!(line_text, "tick → STOP");
        assert_eq!(caret, "     ^");
    }
}
