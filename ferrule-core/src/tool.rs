use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{SpecError, ToolContext, ToolError, ToolResult, Value};

const MAX_TOOL_NAME_LENGTH: usize = 64;

/// Immutable descriptor advertised for a tool: its addressing name, a
/// category tag (conventionally `"<name>_v1"`), a human description, the
/// parameter schema, and UI hints.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ToolSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub parameters: Value,
    #[serde(default, skip_serializing_if = "UiHints::is_empty")]
    pub ui_hints: UiHints,
}

/// Display hints for callers rendering tool activity. `verb` is a present
/// progressive phrase, e.g. "Searching for companies".
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiHints {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub verb: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub long_running: bool,
}

impl UiHints {
    fn is_empty(&self) -> bool {
        self.verb.is_empty() && !self.long_running
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ToolSpec {
    /// Checks structural well-formedness, fail-fast in rule order. A spec
    /// failing here must never be advertised for discovery.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        if self.name.len() > MAX_TOOL_NAME_LENGTH {
            return Err(SpecError::NameTooLong {
                len: self.name.len(),
            });
        }
        if let Some(found) = self
            .name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
        {
            return Err(SpecError::InvalidNameCharacter { found });
        }
        if self.description.is_empty() {
            return Err(SpecError::EmptyDescription);
        }
        if self.parameters.is_null() {
            return Err(SpecError::MissingParameters);
        }
        Ok(())
    }
}

/// Uniform surface every tool exposes: a spec for discovery and an execution
/// entry point taking raw serialized parameters.
#[async_trait]
pub trait Tool: Send + Sync {
    fn spec(&self) -> &ToolSpec;
    async fn execute(&self, ctx: ToolContext, params: &[u8]) -> Result<ToolResult, ToolError>;
}

/// Registration-time gate: validates a tool's advertised spec.
pub fn validate(tool: &dyn Tool) -> Result<(), SpecError> {
    tool.spec().validate()
}
