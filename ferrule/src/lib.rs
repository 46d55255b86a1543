//! Ferrule exposes strongly-typed async functions as dynamically invokable
//! tools: a schema-described [`ToolSpec`] for discovery, a [`TypedTool`]
//! adapter that decodes untyped JSON parameters into the handler's input
//! type, and a [`ToolResult`] envelope whose success path can carry citable
//! documents.

pub use ferrule_citations::{
    content_blocks, ChunkedDocument, ChunkedText, CitableDocument, ContentBlock, ContentError,
    DocumentSource, Location, MediaType,
};
pub use ferrule_core::{
    validate, BuildError, CancellationToken, SpecError, Tool, ToolContext, ToolError, ToolImage,
    ToolResult, ToolSpec, TypedTool, TypedToolBuilder, UiHints, Value,
};

// Prelude module for ferrule
//
// Import commonly used types with: `use ferrule::prelude::*;`
pub mod prelude {
    pub use crate::{
        // Citations
        ChunkedDocument,
        CitableDocument,
        DocumentSource,
        Location,

        CancellationToken,
        // Execution
        Tool,
        ToolContext,

        // Errors
        ToolError,

        ToolResult,
        // Discovery
        ToolSpec,
        TypedTool,

        Value,
    };
}
