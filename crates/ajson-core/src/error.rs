//! Error types for parsing, arena management and value access

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type covering parser, arena and accessor failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Wrong character class at a grammar position
    #[error("unexpected token at position {position}: expected {expected}, found {found:?}")]
    UnexpectedToken {
        /// Byte offset in the input where the token was found
        position: usize,
        /// Description of what the grammar allowed here
        expected: &'static str,
        /// Character actually present
        found: char,
    },

    /// Input ended in the middle of a value
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput {
        /// Byte offset where the input ran out
        position: usize,
    },

    /// Unrecognized escape or malformed `\u` sequence
    #[error("invalid escape sequence at position {position}: {message}")]
    InvalidEscape {
        /// Byte offset of the backslash introducing the escape
        position: usize,
        /// Error description
        message: String,
    },

    /// Integer literal outside the 64-bit signed range
    #[error("integer literal at position {position} does not fit in 64 bits: {literal}")]
    NumericOverflow {
        /// Byte offset of the first digit (or sign)
        position: usize,
        /// The offending literal text
        literal: String,
    },

    /// Non-whitespace content after a complete top-level value
    #[error("trailing data at position {position} after complete value")]
    TrailingData {
        /// Byte offset of the first unexpected character
        position: usize,
    },

    /// Container nesting exceeded the configured parser limit
    #[error("nesting depth at position {position} exceeds limit of {limit}")]
    DepthLimitExceeded {
        /// Byte offset of the opening bracket that crossed the limit
        position: usize,
        /// The configured limit
        limit: usize,
    },

    /// Arena allocation request exceeded the remaining capacity
    #[error("arena exhausted: requested {requested} bytes with {remaining} remaining")]
    ArenaExhausted {
        /// Bytes requested by the failing allocation
        requested: usize,
        /// Bytes left in the arena at the time of the request
        remaining: usize,
    },

    /// Invalid construction parameter (zero capacity, bad alignment)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Accessor asked for a different variant than the value holds
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Variant the accessor was asked for
        expected: &'static str,
        /// Variant the value actually holds
        actual: &'static str,
    },
}

impl Error {
    /// Create an unexpected-token error
    pub fn unexpected_token(position: usize, expected: &'static str, found: char) -> Self {
        Self::UnexpectedToken {
            position,
            expected,
            found,
        }
    }

    /// Create an end-of-input error
    pub fn end_of_input(position: usize) -> Self {
        Self::UnexpectedEndOfInput { position }
    }

    /// Create an invalid-escape error
    pub fn invalid_escape(position: usize, message: impl Into<String>) -> Self {
        Self::InvalidEscape {
            position,
            message: message.into(),
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}
