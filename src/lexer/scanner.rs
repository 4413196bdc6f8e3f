use rayon::prelude::*;

use super::config::{IdentifierPolicy, ScannerConfig};
use super::token::{Token, TokenKind, END_OF_FILE};
use crate::error::{Error, Result};

/// Check if `c` is an ASCII decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if `c` is alphabetic, meaning its upper and lower case forms differ.
///
/// Letters without case (CJK, most symbols) are not alphabetic under this rule.
pub fn is_alphabetic(c: char) -> bool {
    !c.to_uppercase().eq(c.to_lowercase())
}

/// Single-pass scanner driven by a [`ScannerConfig`]
pub struct Scanner<'a> {
    /// Grammar being scanned
    config: &'a ScannerConfig,
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Line where the current token starts
    start_line: usize,
    /// Column where the current token starts
    start_column: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over `source` for the given grammar
    pub fn new(source: &str, config: &'a ScannerConfig) -> Self {
        Scanner {
            config,
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Scans the whole source and returns its tokens.
    ///
    /// Stops at the first unrecognized character; no partial token list is
    /// returned in that case.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        tracing::debug!(
            grammar = %self.config.name,
            chars = self.source.len(),
            "scan started"
        );

        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token()?;
        }

        if self.config.end_marker {
            self.tokens.push(Token::new(
                TokenKind::EndOfInput,
                END_OF_FILE,
                self.line,
                self.column,
            ));
        }

        tracing::debug!(
            grammar = %self.config.name,
            tokens = self.tokens.len(),
            "scan finished"
        );
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        if let Some(kind) = self.config.single_char_kind(c) {
            self.add_token(kind);
        } else if is_digit(c) {
            self.scan_number();
        } else if is_alphabetic(c) {
            self.scan_identifier_or_keyword();
        } else if self.config.is_whitespace(c) {
            // skipped
        } else {
            tracing::warn!(
                grammar = %self.config.name,
                character = ?c,
                line = self.start_line,
                column = self.start_column,
                "unrecognized character, aborting scan"
            );
            return Err(Error::UnrecognizedCharacter {
                character: c,
                line: self.start_line,
                column: self.start_column,
                offset: self.start,
            });
        }

        Ok(())
    }

    fn scan_number(&mut self) {
        while !self.is_at_end() && is_digit(self.peek()) {
            self.advance();
        }
        self.add_token(TokenKind::Number);
    }

    fn scan_identifier_or_keyword(&mut self) {
        while !self.is_at_end() && is_alphabetic(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        if let Some(kind) = self.config.keyword_kind(&text) {
            self.push(kind, text);
            return;
        }

        match self.config.identifiers {
            IdentifierPolicy::Emit => self.push(TokenKind::Identifier, text),
            IdentifierPolicy::Drop => {
                tracing::trace!(
                    identifier = %text,
                    line = self.start_line,
                    column = self.start_column,
                    "dropped identifier"
                );
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        self.push(kind, lexeme);
    }

    fn push(&mut self, kind: TokenKind, value: String) {
        let token = Token::new(kind, value, self.start_line, self.start_column);
        tracing::trace!(token = %token, line = token.line, column = token.column, "token");
        self.tokens.push(token);
    }
}

/// Tokenizes `source` with the given grammar
pub fn tokenize(source: &str, config: &ScannerConfig) -> Result<Vec<Token>> {
    Scanner::new(source, config).scan_tokens()
}

/// Tokenizes independent sources in parallel.
///
/// Results are returned in input order, one per source.
pub fn tokenize_batch<S>(sources: &[S], config: &ScannerConfig) -> Vec<Result<Vec<Token>>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| tokenize(source.as_ref(), config))
        .collect()
}
