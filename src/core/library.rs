//! In-memory document library

use uuid::Uuid;

use super::document::Document;

/// Ordered collection of imported documents.
///
/// At most one document per `uri` is ever stored. Documents keep the order
/// in which they were added.
#[derive(Debug, Clone, Default)]
pub struct Library {
    documents: Vec<Document>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document unless one with the same uri is already present.
    ///
    /// Rejected duplicates are dropped silently; the return value tells
    /// whether the document was actually inserted.
    pub fn add_document(&mut self, document: Document) -> bool {
        tracing::debug!(
            id = %document.id,
            name = %document.name,
            uri = %document.uri,
            doc_type = %document.doc_type,
            size = document.size,
            "Attempting to add document"
        );

        if self.contains_uri(&document.uri) {
            tracing::warn!("Document already exists with uri: {}", document.uri);
            return false;
        }

        self.documents.push(document);
        tracing::info!("Added document, library size: {}", self.documents.len());
        true
    }

    /// Remove the document with the given id, if present
    pub fn remove_document(&mut self, id: Uuid) -> Option<Document> {
        let index = self.documents.iter().position(|doc| doc.id == id)?;
        let removed = self.documents.remove(index);
        tracing::info!(
            "Removed document {} ({}), library size: {}",
            removed.name,
            id,
            self.documents.len()
        );
        Some(removed)
    }

    /// Look up a document by id
    pub fn get_document(&self, id: Uuid) -> Option<&Document> {
        let document = self.documents.iter().find(|doc| doc.id == id);
        tracing::debug!(
            "Getting document {}: {}",
            id,
            if document.is_some() { "found" } else { "not found" }
        );
        document
    }

    /// Look up a document by uri
    pub fn find_by_uri(&self, uri: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.uri == uri)
    }

    pub fn contains_uri(&self, uri: &str) -> bool {
        self.find_by_uri(uri).is_some()
    }

    /// All documents in insertion order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
