//! Error types for onionviz.
//!
//! The geometric core has no recoverable-error cases by design: every
//! precondition is checked at the boundary (bitstring parsing, envelope
//! construction, instance parsing), and past the boundary all computation is
//! infallible. Functions that touch a boundary return
//! `Result<T, OnionError>` instead of panicking or producing NaN.

use thiserror::Error;

/// Result type alias for onionviz operations.
pub type OnionResult<T> = Result<T, OnionError>;

/// Unified error type for all onionviz operations.
#[derive(Debug, Error)]
pub enum OnionError {
    // ===== Precondition Violations =====
    /// A bitstring with zero length was supplied to the projector boundary.
    #[error("empty bitstring: the onion projection requires at least one bit")]
    EmptyBitstring,

    /// A bitstring contained a symbol other than '0' or '1'.
    #[error("invalid bit symbol {symbol:?} at index {index}")]
    InvalidBitSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based position in the input string.
        index: usize,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Parsing Errors =====
    /// A TSP instance file did not match the EUC_2D line format.
    #[error("invalid TSP instance: {message}")]
    InvalidTspInstance {
        /// What was malformed or missing.
        message: String,
    },

    /// A comma-separated permutation string could not be parsed.
    #[error("invalid permutation: {message}")]
    InvalidPermutation {
        /// What was malformed or missing.
        message: String,
    },

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OnionError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a TSP instance parse error.
    #[must_use]
    pub fn tsp(message: impl Into<String>) -> Self {
        Self::InvalidTspInstance {
            message: message.into(),
        }
    }

    /// Create a permutation parse error.
    #[must_use]
    pub fn permutation(message: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            message: message.into(),
        }
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Check if this error is a precondition violation on caller input,
    /// as opposed to an environment failure such as I/O.
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::EmptyBitstring
                | Self::InvalidBitSymbol { .. }
                | Self::Config { .. }
                | Self::Validation(..)
                | Self::InvalidTspInstance { .. }
                | Self::InvalidPermutation { .. }
        )
    }
}
