use serde::{Deserialize, Serialize};

/// Value carried by the end-of-input token
pub const END_OF_FILE: &str = "EndOfFile";

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact source text of the token (`"EndOfFile"` for the end marker)
    pub value: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// Check if this is the end-of-input marker
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

/// Token kinds of the expression and bit-machine grammars
///
/// A grammar only ever produces the subset its configuration maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Unsigned integer literal (maximal digit run)
    Number,
    /// Alphabetic run that is not a keyword
    Identifier,

    // Expression grammar
    /// Assignment (=)
    Equals,
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Arithmetic operator (+ - * /)
    BinaryOperator,
    /// LET keyword
    Let,

    // Bit-machine grammar
    /// Pointer direction (+ -)
    Direction,
    /// Comma delimiter
    Comma,
    /// BIT keyword
    Bit,
    /// POINTER keyword
    Pointer,
    /// STATE keyword
    State,

    // Special
    /// End of input marker
    EndOfInput,
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let | TokenKind::Bit | TokenKind::Pointer | TokenKind::State
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
