//! Document records for the library

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// MIME type accepted for PDF files
pub const PDF_MIME: &str = "application/pdf";
/// MIME type accepted for Word documents
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Kind of document the reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Docx,
}

impl DocumentType {
    /// Classify from a reported media type. Anything that doesn't mention
    /// "pdf" (including no media type at all) is treated as docx.
    pub fn from_mime(mime_type: Option<&str>) -> Self {
        match mime_type {
            Some(mime) if mime.contains("pdf") => Self::Pdf,
            _ => Self::Docx,
        }
    }

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A file candidate returned by the file picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    /// Display name reported by the source
    pub name: String,
    /// Opaque locator for the file
    pub uri: String,
    /// Reported media type, if any
    pub mime_type: Option<String>,
    /// Reported size in bytes, if any
    pub size: Option<u64>,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            mime_type: None,
            size: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// A document tracked by the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier assigned at import
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Locator of the underlying file; used for deduplication
    pub uri: String,
    /// Document kind
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Size in bytes (0 when unknown)
    pub size: u64,
    /// When the document entered the library
    pub date_added: DateTime<Utc>,
}

impl Document {
    /// Create a new document with a fresh id and the current time
    pub fn new(name: impl Into<String>, uri: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            uri: uri.into(),
            doc_type,
            size: 0,
            date_added: Utc::now(),
        }
    }

    /// Build a document from a picked file
    pub fn from_picked(file: &PickedFile) -> Self {
        let mut doc = Self::new(
            file.name.clone(),
            file.uri.clone(),
            DocumentType::from_mime(file.mime_type.as_deref()),
        );
        doc.size = file.size.unwrap_or(0);
        doc
    }

    /// Human readable size, e.g. "12.3 KB"
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Format a byte count using binary units
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
