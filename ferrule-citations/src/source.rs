use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ContentError, Location, MediaType};

/// Capability interface for custom-chunked citation sources: a chunk sequence
/// plus the provider's own citation formatting.
pub trait ChunkedDocument: Send + Sync {
    fn chunks(&self) -> Vec<String>;
    fn formatted_citation_at(&self, location: &Location) -> String;
    fn formatted_citation_for_text(&self, text: &str) -> String;
}

/// Built-in provider over a fixed chunk list. Formatting methods return empty
/// strings; callers wanting real citation text supply their own provider.
///
/// Custom-chunked sources deserialize into this type, so round trips keep the
/// discriminant and chunk text while the original provider's formatting logic
/// stays behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkedText {
    chunks: Vec<String>,
}

impl ChunkedText {
    pub fn new(chunks: Vec<String>) -> Self {
        Self { chunks }
    }
}

impl ChunkedDocument for ChunkedText {
    fn chunks(&self) -> Vec<String> {
        self.chunks.clone()
    }

    fn formatted_citation_at(&self, _location: &Location) -> String {
        String::new()
    }

    fn formatted_citation_for_text(&self, _text: &str) -> String {
        String::new()
    }
}

/// One `{"type": "text", "text": ...}` chunk on the wire.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Renders a chunk sequence as wire content blocks.
pub fn content_blocks(chunks: &[String]) -> Vec<ContentBlock> {
    chunks
        .iter()
        .map(|chunk| ContentBlock::text(chunk.clone()))
        .collect()
}

/// Discriminated document content. Exactly one representation exists per tag:
/// `text` and `base64` carry inline data, `content` carries a chunk provider.
/// Unknown tags fail at decode, so tag/payload disagreement is
/// unrepresentable.
#[derive(Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentSource {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<MediaType>,
        data: String,
    },
    Base64 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<MediaType>,
        data: String,
    },
    Content {
        #[serde(
            serialize_with = "serialize_chunks",
            deserialize_with = "deserialize_chunks"
        )]
        content: Arc<dyn ChunkedDocument>,
    },
}

impl DocumentSource {
    pub fn text(data: impl Into<String>) -> Self {
        DocumentSource::Text {
            media_type: None,
            data: data.into(),
        }
    }

    pub fn base64(data: impl Into<String>) -> Self {
        DocumentSource::Base64 {
            media_type: None,
            data: data.into(),
        }
    }

    pub fn custom<P>(provider: P) -> Self
    where
        P: ChunkedDocument + 'static,
    {
        DocumentSource::Content {
            content: Arc::new(provider),
        }
    }

    /// Sets the media type on inline sources; no-op for `content` sources,
    /// which carry no media type.
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        match &mut self {
            DocumentSource::Text { media_type: slot, .. }
            | DocumentSource::Base64 { media_type: slot, .. } => *slot = Some(media_type),
            DocumentSource::Content { .. } => {}
        }
        self
    }

    /// The wire discriminant for this source.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentSource::Text { .. } => "text",
            DocumentSource::Base64 { .. } => "base64",
            DocumentSource::Content { .. } => "content",
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        match self {
            DocumentSource::Text { data, .. } | DocumentSource::Base64 { data, .. } => {
                if data.is_empty() {
                    return Err(ContentError::EmptyData { kind: self.kind() });
                }
                Ok(())
            }
            DocumentSource::Content { content } => {
                if content.chunks().is_empty() {
                    return Err(ContentError::MissingChunks);
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Text { media_type, data } => f
                .debug_struct("Text")
                .field("media_type", media_type)
                .field("data", data)
                .finish(),
            DocumentSource::Base64 { media_type, data } => f
                .debug_struct("Base64")
                .field("media_type", media_type)
                .field("data", data)
                .finish(),
            DocumentSource::Content { content } => f
                .debug_struct("Content")
                .field("chunks_len", &content.chunks().len())
                .finish(),
        }
    }
}

fn serialize_chunks<S>(content: &Arc<dyn ChunkedDocument>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    content_blocks(&content.chunks()).serialize(serializer)
}

fn deserialize_chunks<'de, D>(deserializer: D) -> Result<Arc<dyn ChunkedDocument>, D::Error>
where
    D: Deserializer<'de>,
{
    let blocks = Vec::<ContentBlock>::deserialize(deserializer)?;
    let chunks = blocks.into_iter().map(|block| block.text).collect();
    Ok(Arc::new(ChunkedText::new(chunks)))
}
