use thiserror::Error as ThisError;

///
/// SourceErrorKind
///
/// Stable classification for data-source failures. The engine performs no
/// retries and no suppression; a failed store call surfaces unchanged.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceErrorKind {
    /// The store could not be reached or refused the query.
    Unavailable,

    /// The store returned rows that violate the listing schema contract.
    Corrupt,

    /// The store cannot execute the requested predicate or ordering.
    Unsupported,
}

///
/// SourceError
///
/// Structured failure from the underlying tabular store. Message text is
/// for operators; user-facing wording is the rendering layer's concern.
///

#[derive(Clone, Debug, ThisError)]
#[error("{message}")]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    #[must_use]
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Construct an unavailable-store error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unavailable, message)
    }

    /// Construct a corrupt-row error.
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Corrupt, message)
    }

    /// Construct an unsupported-query error.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unsupported, message)
    }
}
