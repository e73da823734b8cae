//! Tree builder
//!
//! Recursive-descent consumer of the token stream, with one token of
//! lookahead. Grammar:
//!
//! ```text
//! Document := Mapping
//! Mapping  := (KeyValue NestedBlock?)*
//! Sequence := (ListMarker (Scalar | ItemMapping))*
//! ```
//!
//! A key with an empty inline value followed by `Indent` owns a nested
//! block; the token after the `Indent` decides its shape (`ListMarker` for a
//! sequence, `KeyValue` for a mapping). After a nested block exactly one
//! `Dedent` is consumed.
//!
//! The builder is lenient: tokens that do not fit where they appear end the
//! current block and are left unconsumed. Nothing here returns an error;
//! strict checking lives in `validation`.

use crate::lexer::{Token, TokenKind};
use gunner_core::ast::{Mapping, Node};

static END_OF_INPUT: Token = Token {
    kind: TokenKind::EndOfInput,
    text: String::new(),
    line: 0,
    column: 0,
};

/// Builds a document tree from a token slice
#[derive(Debug)]
pub struct TreeBuilder<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TreeBuilder<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Build the root mapping
    pub fn build(&mut self) -> Node {
        let mut root = Mapping::new();
        self.parse_mapping(&mut root);
        Node::Mapping(root)
    }

    /// First token the build did not consume, other than `EndOfInput`
    pub fn remaining(&self) -> Option<&'t Token> {
        self.tokens
            .get(self.pos)
            .filter(|t| t.kind != TokenKind::EndOfInput)
    }

    fn current(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(&END_OF_INPUT)
    }

    fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::EndOfInput, |t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume consecutive `KeyValue` entries into `mapping`
    fn parse_mapping(&mut self, mapping: &mut Mapping) {
        while self.at(TokenKind::KeyValue) {
            let token = self.current();
            self.advance();
            self.bind_entry(mapping, token);
        }
    }

    /// Bind one already-consumed `KeyValue` token, including its nested block
    fn bind_entry(&mut self, mapping: &mut Mapping, token: &'t Token) {
        let (key, value) = token.split_key_value().unwrap_or(("", ""));

        let node = if !value.is_empty() {
            Node::scalar(value)
        } else if self.at(TokenKind::Indent) {
            self.advance();
            let nested = self.parse_nested_block();
            if self.at(TokenKind::Dedent) {
                self.advance();
            }
            match nested {
                Some(node) => node,
                None => return,
            }
        } else {
            Node::scalar("")
        };

        if let Some(previous) = mapping.insert(key, node) {
            log::debug!(
                "line {}: key '{}' repeated, earlier {} replaced",
                token.line,
                key,
                previous.kind_name()
            );
        }
    }

    /// Parse the block after an `Indent`, shaped by its first token
    fn parse_nested_block(&mut self) -> Option<Node> {
        let token = self.current();
        match token.kind {
            TokenKind::ListMarker => Some(Node::Sequence(self.parse_sequence())),
            TokenKind::KeyValue => {
                let mut mapping = Mapping::new();
                self.parse_mapping(&mut mapping);
                Some(Node::Mapping(mapping))
            }
            other => {
                log::debug!(
                    "line {}, column {}: {:?} cannot start a nested block, skipping",
                    token.line,
                    token.column,
                    other
                );
                None
            }
        }
    }

    fn parse_sequence(&mut self) -> Vec<Node> {
        let mut items = Vec::new();

        while self.at(TokenKind::ListMarker) {
            self.advance();
            let token = self.current();
            match token.kind {
                TokenKind::Scalar => {
                    items.push(Node::scalar(token.text.as_str()));
                    self.advance();
                }
                TokenKind::KeyValue => items.push(Node::Mapping(self.parse_item_mapping())),
                other => log::debug!(
                    "line {}, column {}: {:?} after list marker, item skipped",
                    token.line,
                    token.column,
                    other
                ),
            }
        }

        items
    }

    /// Parse a list item written as key/value pairs after its dash
    ///
    /// When the first pair has an inline value and the next line is indented
    /// further, that indented block holds the item's remaining pairs:
    ///
    /// ```text
    /// - name: build
    ///   run: make
    /// ```
    fn parse_item_mapping(&mut self) -> Mapping {
        let mut mapping = Mapping::new();

        let first = self.current();
        self.advance();
        let inline = first
            .split_key_value()
            .map_or(false, |(_, value)| !value.is_empty());
        let continues = inline
            && self.at(TokenKind::Indent)
            && self.peek_kind(1) == TokenKind::KeyValue;
        self.bind_entry(&mut mapping, first);

        if continues {
            self.advance();
            self.parse_mapping(&mut mapping);
            if self.at(TokenKind::Dedent) {
                self.advance();
            }
        } else {
            self.parse_mapping(&mut mapping);
        }

        mapping
    }
}
