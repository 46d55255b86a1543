use ferrule_citations::CitableDocument;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Image payload attached to a tool result, e.g. a screen capture.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ToolImage {
    pub base64_image: String,
    pub content_type: String,
}

/// Outcome of a tool execution. `output` and `error` are mutually exclusive;
/// `system`, `image`, and `citable_documents` are independent side channels
/// that may accompany either outcome.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ToolResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ToolImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citable_documents: Vec<CitableDocument>,
}

impl ToolResult {
    pub fn success(output: impl Into<Value>) -> Self {
        Self {
            output: Some(output.into()),
            ..Self::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_image(mut self, image: ToolImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_citable_documents(mut self, documents: Vec<CitableDocument>) -> Self {
        self.citable_documents = documents;
        self
    }

    pub fn is_success(&self) -> bool {
        self.output.is_some() && self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some() && self.output.is_none()
    }

    /// A settled envelope carries exactly one primary outcome.
    pub fn is_settled(&self) -> bool {
        self.output.is_some() != self.error.is_some()
    }
}
