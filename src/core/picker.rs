//! File selection for document imports

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::document::{PickedFile, DOCX_MIME, PDF_MIME};
use super::import::ImportError;

/// What the picker should offer the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    /// Accepted MIME types
    pub mime_types: Vec<String>,
    /// Allow selecting more than one file
    pub multiple: bool,
    /// Directory the dialog starts in
    pub start_dir: Option<PathBuf>,
}

impl PickRequest {
    /// Request for PDF and DOCX files, multiple selection allowed
    pub fn documents() -> Self {
        Self {
            mime_types: vec![PDF_MIME.to_string(), DOCX_MIME.to_string()],
            multiple: true,
            start_dir: None,
        }
    }

    pub fn with_start_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.start_dir = dir;
        self
    }

    /// File extensions matching the accepted MIME types
    pub fn extensions(&self) -> Vec<&'static str> {
        self.mime_types
            .iter()
            .filter_map(|mime| extension_for_mime(mime))
            .collect()
    }
}

/// Result of a picker invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResponse {
    /// The user dismissed the picker
    Cancelled,
    /// Selected files in the order the picker returned them
    Picked(Vec<PickedFile>),
}

/// Source of candidate files for an import
#[async_trait]
pub trait FilePicker: Send + Sync {
    async fn pick(&self, request: &PickRequest) -> Result<PickResponse, ImportError>;
}

/// Picker backed by the native file dialog
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPicker;

#[async_trait]
impl FilePicker for DialogPicker {
    async fn pick(&self, request: &PickRequest) -> Result<PickResponse, ImportError> {
        let extensions = request.extensions();
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Add Documents")
            .add_filter("Documents", extensions.as_slice());
        if let Some(ref dir) = request.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let paths: Vec<PathBuf> = if request.multiple {
            match dialog.pick_files().await {
                Some(handles) => handles.iter().map(|h| h.path().to_path_buf()).collect(),
                None => return Ok(PickResponse::Cancelled),
            }
        } else {
            match dialog.pick_file().await {
                Some(handle) => vec![handle.path().to_path_buf()],
                None => return Ok(PickResponse::Cancelled),
            }
        };

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(picked_from_path(&path).await);
        }
        Ok(PickResponse::Picked(files))
    }
}

/// Describe a local file the way a picker reports it
pub async fn picked_from_path(path: &Path) -> PickedFile {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let mut file = PickedFile::new(name, path.to_string_lossy().to_string());
    if let Some(mime) = mime_for_path(path) {
        file = file.with_mime_type(mime);
    }
    match tokio::fs::metadata(path).await {
        Ok(meta) => file.with_size(meta.len()),
        Err(e) => {
            tracing::warn!("Could not read size of {}: {}", path.display(), e);
            file
        }
    }
}

/// Guess the MIME type from a file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        _ => None,
    }
}

fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        PDF_MIME => Some("pdf"),
        DOCX_MIME => Some("docx"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_request() {
        let request = PickRequest::documents();
        assert!(request.multiple);
        assert_eq!(request.extensions(), vec!["pdf", "docx"]);
        assert!(request.start_dir.is_none());
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("/a/b.pdf")), Some(PDF_MIME));
        assert_eq!(mime_for_path(Path::new("/a/B.PDF")), Some(PDF_MIME));
        assert_eq!(mime_for_path(Path::new("report.docx")), Some(DOCX_MIME));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("README")), None);
    }

    #[tokio::test]
    async fn test_picked_from_missing_path() {
        let file = picked_from_path(Path::new("/definitely/not/here/paper.pdf")).await;
        assert_eq!(file.name, "paper.pdf");
        assert_eq!(file.uri, "/definitely/not/here/paper.pdf");
        assert_eq!(file.mime_type.as_deref(), Some(PDF_MIME));
        assert_eq!(file.size, None);
    }

    #[tokio::test]
    async fn test_picked_from_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        std::fs::write(&path, b"0123456789").unwrap();

        let file = picked_from_path(&path).await;
        assert_eq!(file.name, "report.docx");
        assert_eq!(file.mime_type.as_deref(), Some(DOCX_MIME));
        assert_eq!(file.size, Some(10));
    }
}
