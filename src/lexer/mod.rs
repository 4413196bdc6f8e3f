//! Lexical analysis
//!
//! Converts source text into a flat sequence of tokens. One scanning engine
//! serves every grammar; a grammar is a [`ScannerConfig`] value.

mod config;
mod scanner;
mod token;

pub use config::{IdentifierPolicy, OperatorClass, ScannerConfig};
pub use scanner::{is_alphabetic, is_digit, tokenize, tokenize_batch, Scanner};
pub use token::{Token, TokenKind, END_OF_FILE};
