use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("invalid location type: {kind}")]
    InvalidLocationKind { kind: String },
    #[error("data required for {kind} source")]
    EmptyData { kind: &'static str },
    #[error("content source requires at least one chunk")]
    MissingChunks,
}
