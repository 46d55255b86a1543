use serde::{Deserialize, Serialize};

/// Media type of a document source or image payload. The wire set is open:
/// unrecognized strings decode to `Unknown` rather than failing.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum MediaType {
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "application/pdf")]
    ApplicationPdf,
    #[serde(rename = "image/jpeg")]
    ImageJpeg,
    #[serde(rename = "image/png")]
    ImagePng,
    #[serde(rename = "image/gif")]
    ImageGif,
    #[serde(rename = "image/webp")]
    ImageWebp,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::TextPlain => "text/plain",
            MediaType::ApplicationPdf => "application/pdf",
            MediaType::ImageJpeg => "image/jpeg",
            MediaType::ImagePng => "image/png",
            MediaType::ImageGif => "image/gif",
            MediaType::ImageWebp => "image/webp",
            MediaType::Unknown => "unknown",
        }
    }
}
