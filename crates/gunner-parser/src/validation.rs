//! Strict-mode structure validation
//!
//! The lenient parser absorbs indentation anomalies and stray tokens. In
//! strict mode the token stream is checked before the tree is built, and
//! anything left unconsumed afterwards is rejected.

use crate::error::{ParseError, Result};
use crate::lexer::{DiagnosticKind, LexDiagnostic, Token, TokenKind};

/// Token stream validator
pub struct Validator;

impl Validator {
    /// Validate a complete token stream and the tokenizer's diagnostics
    ///
    /// Reports, in this order:
    /// - the first indentation anomaly seen by the tokenizer
    /// - `Indent`/`Dedent` tokens that do not pair up
    /// - a document whose root is not a mapping
    pub fn validate(tokens: &[Token], diagnostics: &[LexDiagnostic]) -> Result<()> {
        if let Some(diagnostic) = diagnostics.first() {
            return Err(Self::diagnostic_error(diagnostic));
        }
        Self::check_balance(tokens)?;
        Self::check_root(tokens)
    }

    /// Reject a token the tree builder left unconsumed
    pub fn check_fully_consumed(remaining: Option<&Token>) -> Result<()> {
        match remaining {
            None => Ok(()),
            Some(token) => Err(ParseError::malformed(
                format!("unexpected {} where the document structure ends", describe(token)),
                token.line,
                token.column,
            )),
        }
    }

    fn diagnostic_error(diagnostic: &LexDiagnostic) -> ParseError {
        let message = match &diagnostic.kind {
            DiagnosticKind::InconsistentDedent { indent, resolved } => format!(
                "dedent to indentation {} does not match any open level (nearest is {})",
                indent, resolved
            ),
            DiagnosticKind::TabIndentation => "tab character in indentation".to_string(),
        };
        ParseError::malformed(message, diagnostic.line, diagnostic.column)
    }

    fn check_balance(tokens: &[Token]) -> Result<()> {
        let mut open: Vec<&Token> = Vec::new();

        for token in tokens {
            match token.kind {
                TokenKind::Indent => open.push(token),
                TokenKind::Dedent => {
                    if open.pop().is_none() {
                        return Err(ParseError::malformed(
                            "dedent without a matching indent",
                            token.line,
                            token.column,
                        ));
                    }
                }
                TokenKind::EndOfInput => break,
                _ => {}
            }
        }

        match open.last() {
            None => Ok(()),
            Some(indent) => Err(ParseError::malformed(
                "indented block is never closed",
                indent.line,
                indent.column,
            )),
        }
    }

    fn check_root(tokens: &[Token]) -> Result<()> {
        match tokens.first() {
            None => Ok(()),
            Some(token) if matches!(token.kind, TokenKind::KeyValue | TokenKind::EndOfInput) => {
                Ok(())
            }
            Some(token) => Err(ParseError::malformed(
                format!("document root must be a mapping, found {}", describe(token)),
                token.line,
                token.column,
            )),
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::KeyValue => format!("key '{}'", token.text),
        TokenKind::Scalar => format!("scalar '{}'", token.text),
        TokenKind::ListMarker => "list item".to_string(),
        TokenKind::Indent => "indented block".to_string(),
        TokenKind::Dedent => "dedent".to_string(),
        TokenKind::Newline => "line break".to_string(),
        TokenKind::EndOfInput => "end of input".to_string(),
    }
}
