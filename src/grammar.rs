//! Built-in grammars
//!
//! The expression language (`let x = (1 + 2)`) and the bit-machine
//! description language (`bit 0, pointer +, state 6`), expressed as scanner
//! configurations.

use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::{Error, Result};
use crate::lexer::{IdentifierPolicy, ScannerConfig, TokenKind};

lazy_static! {
    /// Shared expression grammar
    pub static ref EXPRESSION: ScannerConfig = expression();

    /// Shared bit-machine grammar
    pub static ref BIT_MACHINE: ScannerConfig = bit_machine();
}

/// Arithmetic and assignment expressions.
///
/// Non-keyword words become `Identifier` tokens; no end marker.
pub fn expression() -> ScannerConfig {
    ScannerConfig::new("expression")
        .symbol('(', TokenKind::OpenParen)
        .symbol(')', TokenKind::CloseParen)
        .symbol('=', TokenKind::Equals)
        .operators(TokenKind::BinaryOperator, "+-*/")
        .keyword("let", TokenKind::Let)
        .identifiers(IdentifierPolicy::Emit)
        .end_marker(false)
}

/// Bit-machine descriptions.
///
/// Non-keyword words are dropped; the token list ends with `EndOfInput`.
pub fn bit_machine() -> ScannerConfig {
    ScannerConfig::new("bit-machine")
        .symbol(',', TokenKind::Comma)
        .operators(TokenKind::Direction, "+-")
        .keyword("bit", TokenKind::Bit)
        .keyword("pointer", TokenKind::Pointer)
        .keyword("state", TokenKind::State)
        .identifiers(IdentifierPolicy::Drop)
        .end_marker(true)
}

/// Selector for the built-in grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// See [`expression`]
    Expression,
    /// See [`bit_machine`]
    BitMachine,
}

impl Grammar {
    /// The shared configuration for this grammar
    pub fn config(self) -> &'static ScannerConfig {
        match self {
            Grammar::Expression => &*EXPRESSION,
            Grammar::BitMachine => &*BIT_MACHINE,
        }
    }
}

impl FromStr for Grammar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "expression" | "expr" => Ok(Grammar::Expression),
            "bit-machine" | "bitmachine" | "bit" => Ok(Grammar::BitMachine),
            other => Err(Error::invalid_config(format!(
                "unknown grammar {:?} (expected \"expression\" or \"bit-machine\")",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.config().name)
    }
}
