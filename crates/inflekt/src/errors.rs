//! # Error Types

/// Errors from inflekt operations.
#[derive(Debug, thiserror::Error)]
pub enum InflektError {
    /// A raw dataset line cannot yield a valid record.
    #[error("malformed row ({reason}): {line:?}")]
    MalformedRow {
        /// The offending input line (or tag string fragment).
        line: String,

        /// What made the row unparseable.
        reason: String,
    },

    /// Vocabulary construction was attempted over zero records.
    #[error("empty corpus: vector layout is undefined")]
    EmptyCorpus,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InflektError {
    /// Build a [`InflektError::MalformedRow`] from line and reason fragments.
    pub fn malformed_row<L, R>(
        line: L,
        reason: R,
    ) -> Self
    where
        L: Into<String>,
        R: Into<String>,
    {
        Self::MalformedRow {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for inflekt operations.
pub type InflektResult<T> = core::result::Result<T, InflektError>;
