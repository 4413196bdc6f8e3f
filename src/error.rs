//! Error types for the toylex scanner

use thiserror::Error;

/// Scanner and configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Scan errors
    /// Character that no rule of the active grammar accepts
    ///
    /// **Triggered by:** a character that is not a configured symbol, operator,
    /// digit, letter, or whitespace
    /// **Example:** `@` under the expression grammar
    /// **Recovery:** none; the scan aborts and no tokens are returned
    #[error("Unrecognized character '{character}' at line {line}, column {column}")]
    UnrecognizedCharacter {
        /// The offending character
        character: char,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
        /// Character offset from the start of the source
        offset: usize,
    },

    // Configuration errors
    /// Scanner configuration that cannot behave as written
    ///
    /// **Triggered by:** keywords that are not purely alphabetic, whitespace that
    /// overlaps a run class, a character mapped twice
    #[error("Invalid scanner configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },

    /// Configuration document could not be deserialized
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    // External errors
    /// Source or config file could not be read
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error with a message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: msg.into(),
        }
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

/// Result type for toylex operations
pub type Result<T> = std::result::Result<T, Error>;
