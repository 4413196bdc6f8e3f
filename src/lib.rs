//! # toylex - Configurable Lexer for Toy Languages
//!
//! A single-pass scanner that turns source text into a flat list of
//! classified tokens. The same engine serves two small grammars:
//!
//! - the **expression** language: `let x = (1 + 2) * 3`
//! - the **bit-machine** language: `bit 0, pointer +, state 6`
//!
//! A grammar is a [`ScannerConfig`] value (single-character tokens, an operator
//! class, keywords, an identifier policy and an end-marker flag), so new
//! grammars can be built in code or loaded from JSON without touching the
//! scanner.
//!
//! ## Quick Start
//!
//! ```rust
//! use toylex::{tokenize, TokenKind, EXPRESSION};
//!
//! # fn main() -> toylex::Result<()> {
//! let tokens = tokenize("let x = 45", &EXPRESSION)?;
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Let, TokenKind::Identifier, TokenKind::Equals, TokenKind::Number]
//! );
//! assert_eq!(tokens[3].value, "45");
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Grammars
//!
//! ```rust
//! use toylex::{tokenize, IdentifierPolicy, ScannerConfig, TokenKind};
//!
//! # fn main() -> toylex::Result<()> {
//! let config = ScannerConfig::new("commas")
//!     .symbol(',', TokenKind::Comma)
//!     .keyword("bit", TokenKind::Bit)
//!     .identifiers(IdentifierPolicy::Drop);
//! config.validate()?;
//!
//! let tokens = tokenize("bit, ignored, 7", &config)?;
//! assert_eq!(tokens.len(), 4); // bit , , 7
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Scanning is fail-fast: the first character no rule accepts aborts the
//! scan with [`Error::UnrecognizedCharacter`], and no partial token list is
//! returned.
//!
//! ```rust
//! use toylex::{tokenize, Error, EXPRESSION};
//!
//! match tokenize("1 @ 2", &EXPRESSION) {
//!     Err(Error::UnrecognizedCharacter { character, column, .. }) => {
//!         assert_eq!(character, '@');
//!         assert_eq!(column, 3);
//!     }
//!     other => panic!("expected failure, got {:?}", other),
//! }
//! ```

/// Version of the toylex crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod grammar;
pub mod lexer;

// Re-export main types
pub use error::{Error, Result};
pub use grammar::{Grammar, BIT_MACHINE, EXPRESSION};
pub use lexer::{
    tokenize, tokenize_batch, IdentifierPolicy, OperatorClass, Scanner, ScannerConfig, Token,
    TokenKind,
};
