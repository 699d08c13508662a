use thiserror::Error;

/// Errors reducing an operation's response set to dispatch records.
/// Fatal for the operation being classified; never recovered locally.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid response key `{0}` (expected a 3-digit code, `1XX`..`5XX`, or `default`)")]
    InvalidResponseKey(String),

    #[error("unresolved schema reference `{0}`")]
    UnresolvedRef(String),
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("operation `{operation}`: {source}")]
    Operation {
        operation: String,
        #[source]
        source: ClassifyError,
    },

    #[error("invalid content_types configuration: {0}")]
    InvalidTables(#[from] serde_json::Error),
}
