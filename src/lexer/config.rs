//! Scanner configuration
//!
//! A [`ScannerConfig`] is plain data describing one lexical grammar: which
//! single characters are tokens, which keywords are reserved, and what happens
//! to alphabetic runs that are not keywords. The scanner itself knows nothing
//! about any particular grammar.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::scanner::{is_alphabetic, is_digit};
use super::token::TokenKind;
use crate::error::{Error, Result};

/// What to do with an alphabetic run that matches no keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierPolicy {
    /// Emit a generic `Identifier` token carrying the run
    #[default]
    Emit,
    /// Consume the run and emit nothing
    Drop,
}

/// Set of characters that all produce one-character tokens of the same kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorClass {
    /// Kind emitted for every member character
    pub kind: TokenKind,
    /// Member characters
    pub chars: BTreeSet<char>,
}

impl OperatorClass {
    /// Creates an operator class from the characters of `chars`
    pub fn new(kind: TokenKind, chars: &str) -> Self {
        OperatorClass {
            kind,
            chars: chars.chars().collect(),
        }
    }
}

fn default_whitespace() -> BTreeSet<char> {
    [' ', '\n', '\t'].into_iter().collect()
}

/// Lexical grammar consumed by [`Scanner`](super::Scanner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Grammar name, used in logs
    pub name: String,
    /// Single-character tokens
    #[serde(default)]
    pub symbols: BTreeMap<char, TokenKind>,
    /// Operator-class characters
    #[serde(default)]
    pub operators: Option<OperatorClass>,
    /// Case-sensitive reserved words
    #[serde(default)]
    pub keywords: BTreeMap<String, TokenKind>,
    /// Handling of non-keyword alphabetic runs
    #[serde(default)]
    pub identifiers: IdentifierPolicy,
    /// Append an `EndOfInput` token after the last real token
    #[serde(default)]
    pub end_marker: bool,
    /// Characters skipped between tokens
    #[serde(default = "default_whitespace")]
    pub whitespace: BTreeSet<char>,
}

impl ScannerConfig {
    /// Creates an empty grammar: no symbols, no keywords, identifiers emitted,
    /// no end marker, default whitespace
    pub fn new(name: impl Into<String>) -> Self {
        ScannerConfig {
            name: name.into(),
            symbols: BTreeMap::new(),
            operators: None,
            keywords: BTreeMap::new(),
            identifiers: IdentifierPolicy::Emit,
            end_marker: false,
            whitespace: default_whitespace(),
        }
    }

    /// Maps a single character to a token kind
    pub fn symbol(mut self, c: char, kind: TokenKind) -> Self {
        self.symbols.insert(c, kind);
        self
    }

    /// Sets the operator class
    pub fn operators(mut self, kind: TokenKind, chars: &str) -> Self {
        self.operators = Some(OperatorClass::new(kind, chars));
        self
    }

    /// Reserves a keyword
    pub fn keyword(mut self, word: impl Into<String>, kind: TokenKind) -> Self {
        self.keywords.insert(word.into(), kind);
        self
    }

    /// Sets the identifier policy
    pub fn identifiers(mut self, policy: IdentifierPolicy) -> Self {
        self.identifiers = policy;
        self
    }

    /// Enables or disables the end-of-input marker
    pub fn end_marker(mut self, enabled: bool) -> Self {
        self.end_marker = enabled;
        self
    }

    /// Replaces the whitespace set
    pub fn whitespace(mut self, chars: &str) -> Self {
        self.whitespace = chars.chars().collect();
        self
    }

    /// Kind of the single-character token `c`, if any.
    ///
    /// The symbol table takes precedence over the operator class.
    pub fn single_char_kind(&self, c: char) -> Option<TokenKind> {
        if let Some(kind) = self.symbols.get(&c) {
            return Some(*kind);
        }
        self.operators
            .as_ref()
            .filter(|class| class.chars.contains(&c))
            .map(|class| class.kind)
    }

    /// Kind of the keyword exactly equal to `word`, if any
    pub fn keyword_kind(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word).copied()
    }

    /// Check if `c` is skipped between tokens
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }

    /// Checks that every rule of this grammar can fire as written
    pub fn validate(&self) -> Result<()> {
        for (word, kind) in &self.keywords {
            if word.is_empty() || !word.chars().all(is_alphabetic) {
                return Err(Error::invalid_config(format!(
                    "{}: keyword {:?} is not a purely alphabetic word",
                    self.name, word
                )));
            }
            if *kind == TokenKind::EndOfInput {
                return Err(Error::invalid_config(format!(
                    "{}: keyword {:?} mapped to EndOfInput",
                    self.name, word
                )));
            }
        }

        for &c in &self.whitespace {
            if is_digit(c) || is_alphabetic(c) {
                return Err(Error::invalid_config(format!(
                    "{}: whitespace character {:?} is a digit or letter",
                    self.name, c
                )));
            }
        }

        for (&c, &kind) in &self.symbols {
            self.check_single_char(c, kind)?;
        }

        if let Some(class) = &self.operators {
            for &c in &class.chars {
                if self.symbols.contains_key(&c) {
                    return Err(Error::invalid_config(format!(
                        "{}: {:?} is both a symbol and an operator",
                        self.name, c
                    )));
                }
                self.check_single_char(c, class.kind)?;
            }
        }

        Ok(())
    }

    fn check_single_char(&self, c: char, kind: TokenKind) -> Result<()> {
        if self.is_whitespace(c) {
            return Err(Error::invalid_config(format!(
                "{}: {:?} is both a token and whitespace",
                self.name, c
            )));
        }
        if kind == TokenKind::EndOfInput {
            return Err(Error::invalid_config(format!(
                "{}: {:?} mapped to EndOfInput",
                self.name, c
            )));
        }
        Ok(())
    }

    /// Parses and validates a grammar from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a grammar from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::io(path.display().to_string(), &e))?;
        Self::from_json(&json)
    }

    /// Serializes this grammar as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
