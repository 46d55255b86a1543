use serde::{Deserialize, Serialize};

use crate::{ContentError, DocumentSource, Location};

/// Evidentiary document attachable to a tool result. `unique_title`
/// identifies the document among its siblings; `title` is the official title.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CitableDocument {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unique_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub citations_enabled: bool,
    pub source: DocumentSource,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CitableDocument {
    pub fn new(unique_title: impl Into<String>, source: DocumentSource) -> Self {
        Self {
            unique_title: unique_title.into(),
            title: String::new(),
            description: String::new(),
            citations_enabled: false,
            source,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_citations(mut self, enabled: bool) -> Self {
        self.citations_enabled = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        self.source.validate()
    }

    /// Formats a citation at `location` via the chunk provider. Inline
    /// sources define no formatting here and yield an empty string.
    pub fn formatted_citation_at(&self, location: &Location) -> String {
        match &self.source {
            DocumentSource::Content { content } => content.formatted_citation_at(location),
            _ => String::new(),
        }
    }
}
