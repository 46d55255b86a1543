use thiserror::Error;

/// Construction-time failure. An adapter that fails to build is unusable;
/// this is never swallowed into a usable-looking value.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to derive parameter schema: {source}")]
    Schema {
        #[source]
        source: serde_json::Error,
    },
}

/// Structural validation failure on a tool specification. One variant per
/// rule; validation is fail-fast, so callers see the first violation only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("tool spec must include a non-empty name")]
    EmptyName,
    #[error("tool name must not exceed 64 characters")]
    NameTooLong { len: usize },
    #[error("tool name must contain only alphanumeric characters, underscores, or hyphens")]
    InvalidNameCharacter { found: char },
    #[error("tool spec description cannot be empty")]
    EmptyDescription,
    #[error("tool spec parameters cannot be null")]
    MissingParameters,
}

/// Per-call execution failure. Local to one call; the adapter stays usable.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to parse parameters: {0}")]
    InvalidParams(#[source] serde_json::Error),
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("operation was cancelled")]
    Cancelled,
}
