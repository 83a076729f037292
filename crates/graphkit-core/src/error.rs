use std::fmt;

/// Errors surfaced by every graphkit algorithm.
///
/// All variants are reported synchronously and no partial result accompanies
/// them. Nothing is retried: the computations are pure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A referenced vertex or symbol is absent. Carries its `Debug` rendering.
    #[error("not found: {0}")]
    KeyNotFound(String),

    /// Malformed input: mismatched parallel sequences, negative capacity,
    /// negative or non-finite weights, duplicate symbols, and so on.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a [`Error::KeyNotFound`] from any debuggable key.
    #[must_use]
    pub fn key_not_found(key: &impl fmt::Debug) -> Self {
        Self::KeyNotFound(format!("{key:?}"))
    }

    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyNotFound(_) => ErrorKind::KeyNotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Result alias used across the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Machine-readable error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyNotFound,
    InvalidInput,
}

impl ErrorKind {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::KeyNotFound => "E1001",
            Self::InvalidInput => "E2001",
        }
    }

    /// Short human-facing summary for logs.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::KeyNotFound => "Referenced vertex or symbol not found",
            Self::InvalidInput => "Malformed algorithm input",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::KeyNotFound => {
                Some("Check that the start vertex and every edge endpoint exist in the graph.")
            }
            Self::InvalidInput => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
