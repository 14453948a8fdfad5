//! Token Stream with checkpoint/commit/rollback
//!
//! A cursor over `[Token]` supporting arbitrary-depth backtracking, the
//! Rust rendering of `KnitterBot`'s `__enter__`/`__exit__`/`_commit_` context
//! manager in the original `cspsh` interpreter. See spec.md §4.3.

use crate::source_map::Token;

#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    cursor: usize,
    checkpoints: Vec<usize>,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream {
            tokens,
            cursor: 0,
            checkpoints: Vec::new(),
        }
    }

    /// Return the current token without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    /// Consume one token, returning it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.cursor);
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// True if the current token is a mark equal to `chars`, or (when
    /// `chars` is empty) the cursor is past the last token.
    pub fn at_mark(&self, chars: &str) -> bool {
        match self.peek() {
            Some(tok) => tok.is_mark(chars),
            None => chars.is_empty(),
        }
    }

    /// Accept a mark if present, consuming it and returning true.
    pub fn accept_mark(&mut self, chars: &str) -> bool {
        if self.peek().is_some_and(|tok| tok.is_mark(chars)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Push the current cursor. Must be paired with `commit` or `rollback`.
    pub fn checkpoint(&mut self) {
        self.checkpoints.push(self.cursor);
    }

    /// Discard the saved checkpoint, keeping whatever advances were made.
    pub fn commit(&mut self) {
        self.checkpoints
            .pop()
            .expect("commit() without a matching checkpoint()");
    }

    /// Restore the cursor to the checkpointed position.
    pub fn rollback(&mut self) {
        let saved = self
            .checkpoints
            .pop()
            .expect("rollback() without a matching checkpoint()");
        self.cursor = saved;
    }

    /// Split the token list at the cursor into "consumed so far" and
    /// "remaining", rendered as space-joined source fragments, used by
    /// diagnostics to show the fit/misfit boundary (SPEC_FULL.md §4.3).
    pub fn fit_misfit(&self) -> (String, String) {
        let fit: Vec<&str> = self.tokens[..self.cursor]
            .iter()
            .map(|t| t.chars())
            .collect();
        let misfit: Vec<&str> = self.tokens[self.cursor..]
            .iter()
            .map(|t| t.chars())
            .collect();
        (fit.join(" "), misfit.join(" "))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
