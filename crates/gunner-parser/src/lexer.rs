//! Tokenizer
//!
//! Turns indentation-structured text into a flat token stream.
//!
//! Indentation is tracked with a stack of open indentation widths, starting
//! at `[0]`:
//! - a deeper line pushes its width and yields one `Indent`
//! - a shallower line pops every wider level and yields one `Dedent` per pop
//! - blank and comment-only lines yield nothing
//!
//! Content tokens are list markers (`- `), `key: value` pairs and bare
//! scalars. Only spaces count as indentation.
//!
//! The stream always ends with the dedents still open followed by exactly
//! one `EndOfInput`.

use std::cmp::Ordering;

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the document (always the last token)
    EndOfInput,
    /// Line break; never produced, line structure is carried by indentation tokens
    Newline,
    /// Opens a deeper indentation scope
    Indent,
    /// Closes one indentation scope
    Dedent,
    /// `key:value` pair; an empty value means nested content follows
    KeyValue,
    /// Bare text without a colon
    Scalar,
    /// `-` list item marker
    ListMarker,
}

/// A lexical token with its 1-based source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// `key:value` for `KeyValue`, the literal text for `Scalar`, empty otherwise
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    fn structural(kind: TokenKind, line: usize, column: usize) -> Self {
        Self::new(kind, String::new(), line, column)
    }

    /// Split a `KeyValue` token on its first colon into trimmed key and value
    ///
    /// Returns `None` for other token kinds.
    pub fn split_key_value(&self) -> Option<(&str, &str)> {
        if self.kind != TokenKind::KeyValue {
            return None;
        }
        let (key, value) = self.text.split_once(':').unwrap_or((self.text.as_str(), ""));
        Some((key.trim(), value.trim()))
    }
}

/// Kind of indentation anomaly seen while tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A dedent landed between two open levels; `resolved` is the level
    /// the stack settled on
    InconsistentDedent { indent: usize, resolved: usize },
    /// A tab appeared in a line's leading whitespace
    TabIndentation,
}

/// Indentation anomaly absorbed by the tokenizer
///
/// Diagnostics never alter the token stream; strict mode turns them into
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexDiagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
}

/// Indentation-aware tokenizer over one document
///
/// Each tokenizer owns its cursor and indentation stack; separate documents
/// need separate tokenizers.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    indent_stack: Vec<usize>,
    pending_dedents: usize,
    at_line_start: bool,
    finished: bool,
    diagnostics: Vec<LexDiagnostic>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
            indent_stack: vec![0],
            pending_dedents: 0,
            at_line_start: true,
            finished: false,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the remaining input, up to and including `EndOfInput`
    pub fn tokenize(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        log::trace!("tokenized {} tokens", tokens.len());
        tokens
    }

    /// Number of open indentation scopes, including the bottom `0` level
    pub fn indent_depth(&self) -> usize {
        self.indent_stack.len()
    }

    /// Indentation anomalies seen so far
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<LexDiagnostic> {
        self.diagnostics
    }

    /// Produce the next token
    ///
    /// Queued dedents are returned one per call before any further input is
    /// scanned. Once the input is exhausted this keeps returning
    /// `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.pending_dedents > 0 {
                self.pending_dedents -= 1;
                return Token::structural(TokenKind::Dedent, self.line, self.column);
            }

            if self.at_line_start {
                self.at_line_start = false;
                if let Some(token) = self.handle_indentation() {
                    return token;
                }
            }

            self.skip_whitespace();
            self.skip_comment();

            match self.peek() {
                None => {
                    if self.indent_stack.len() > 1 {
                        self.indent_stack.pop();
                        return Token::structural(TokenKind::Dedent, self.line, self.column);
                    }
                    self.finished = true;
                    return Token::structural(TokenKind::EndOfInput, self.line, self.column);
                }
                Some(b'\n') => {
                    self.advance();
                    self.at_line_start = true;
                    continue;
                }
                Some(_) => {}
            }

            let (line, column) = (self.line, self.column);

            if self.at_list_marker() {
                self.advance();
                self.skip_whitespace();
                return Token::new(TokenKind::ListMarker, "-", line, column);
            }

            let identifier = self.read_until_colon();

            if self.peek() == Some(b':') {
                self.advance();
                let value = self.read_value();
                return Token::new(
                    TokenKind::KeyValue,
                    format!("{}:{}", identifier, value),
                    line,
                    column,
                );
            }

            if !identifier.is_empty() {
                return Token::new(TokenKind::Scalar, identifier, line, column);
            }
        }
    }

    /// Measure the current line's indentation and update the stack
    fn handle_indentation(&mut self) -> Option<Token> {
        let mut indent = 0;
        while self.peek() == Some(b' ') {
            self.advance();
            indent += 1;
        }

        if self.rest_of_line_is_blank() {
            return None;
        }

        if self.peek() == Some(b'\t') {
            self.diagnostics.push(LexDiagnostic {
                kind: DiagnosticKind::TabIndentation,
                line: self.line,
                column: self.column,
            });
        }

        match indent.cmp(&self.current_indent()) {
            Ordering::Greater => {
                self.indent_stack.push(indent);
                Some(Token::structural(TokenKind::Indent, self.line, self.column))
            }
            Ordering::Equal => None,
            Ordering::Less => {
                let mut popped = 0;
                while self.indent_stack.len() > 1 && self.current_indent() > indent {
                    self.indent_stack.pop();
                    popped += 1;
                }

                let resolved = self.current_indent();
                if resolved != indent {
                    log::debug!(
                        "line {}: dedent to column {} matches no open level, resolved to {}",
                        self.line,
                        indent + 1,
                        resolved
                    );
                    self.diagnostics.push(LexDiagnostic {
                        kind: DiagnosticKind::InconsistentDedent { indent, resolved },
                        line: self.line,
                        column: self.column,
                    });
                }

                // One dedent is returned now, the rest are queued
                self.pending_dedents += popped - 1;
                Some(Token::structural(TokenKind::Dedent, self.line, self.column))
            }
        }
    }

    fn current_indent(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    fn rest_of_line_is_blank(&self) -> bool {
        let rest = &self.input.as_bytes()[self.position..];
        match rest.iter().find(|b| !matches!(b, b' ' | b'\t' | b'\r')) {
            None => true,
            Some(b) => matches!(b, b'\n' | b'#'),
        }
    }

    fn at_list_marker(&self) -> bool {
        self.peek() == Some(b'-')
            && matches!(
                self.peek_at(1),
                None | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n')
            )
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        let Some(byte) = self.peek() else {
            return;
        };
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            // UTF-8 continuation bytes do not start a new column
            self.column += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.peek() == Some(b'#') {
            while !matches!(self.peek(), None | Some(b'\n')) {
                self.advance();
            }
        }
    }

    fn read_until_colon(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        while !matches!(self.peek(), None | Some(b':') | Some(b'\n')) {
            self.advance();
        }
        input[start..self.position].trim()
    }

    fn read_value(&mut self) -> &'a str {
        let input = self.input;
        self.skip_whitespace();
        let start = self.position;
        while !matches!(self.peek(), None | Some(b'\n') | Some(b'#')) {
            self.advance();
        }
        input[start..self.position].trim()
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields tokens through `EndOfInput`, then `None`
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
