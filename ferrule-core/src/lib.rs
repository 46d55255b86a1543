//! Typed tool adapters: schema-described specifications for discovery, safe
//! decoding of untyped parameters into typed handlers, and a multi-channel
//! result envelope.

mod context;
mod error;
mod result;
mod tool;
mod typed;

pub use context::{CancellationToken, ToolContext};
pub use error::{BuildError, SpecError, ToolError};
pub use result::{ToolImage, ToolResult};
pub use tool::{validate, Tool, ToolSpec, UiHints};
pub use typed::{TypedTool, TypedToolBuilder};

pub type Value = serde_json::Value;
