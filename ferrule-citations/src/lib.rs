//! Citable document model: discriminated document sources, chunk providers,
//! and location-based citations that attach to tool results.

mod document;
mod error;
mod location;
mod media;
mod source;

pub use document::CitableDocument;
pub use error::ContentError;
pub use location::Location;
pub use media::MediaType;
pub use source::{content_blocks, ChunkedDocument, ChunkedText, ContentBlock, DocumentSource};
