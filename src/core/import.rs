//! Importing picked files into the library

use std::collections::HashSet;

use thiserror::Error;

use super::document::{Document, PickedFile};
use super::library::Library;
use super::picker::PickResponse;

/// Errors raised while selecting documents
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file picker failed: {0}")]
    Picker(String),
    #[error("an import is already in progress")]
    AlreadyRunning,
}

/// Title/message pair shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Generic notice for a failed file selection
    pub fn selection_failed() -> Self {
        Self::new("Error", "Failed to select documents. Please try again.")
    }
}

/// Counts collected while importing a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub added: usize,
    pub skipped: usize,
    /// Display names of candidates already in the library
    pub skipped_names: Vec<String>,
}

impl ImportOutcome {
    /// User facing summary; `None` when nothing was added or skipped
    pub fn summary(&self) -> Option<Alert> {
        let names = self.skipped_names.join(", ");
        match (self.added, self.skipped) {
            (0, 0) => None,
            (added, 0) => Some(Alert::new(
                "Success",
                format!("Added {} {} to your library", added, documents(added)),
            )),
            (0, skipped) => Some(Alert::new(
                "Already in Library",
                format!(
                    "{} {} already in your library:\n{}",
                    skipped,
                    documents_were(skipped),
                    names
                ),
            )),
            (added, skipped) => Some(Alert::new(
                "Partially Added",
                format!(
                    "Added {} new {}.\n\n{} {} already in library:\n{}",
                    added,
                    documents(added),
                    skipped,
                    documents_were(skipped),
                    names
                ),
            )),
        }
    }

    /// Whether the library view should be shown afterwards
    pub fn should_navigate(&self) -> bool {
        self.added > 0
    }
}

fn documents(count: usize) -> &'static str {
    if count == 1 { "document" } else { "documents" }
}

fn documents_were(count: usize) -> &'static str {
    if count == 1 { "document was" } else { "documents were" }
}

/// How an import run ended
#[derive(Debug)]
pub enum ImportResult {
    /// The user dismissed the picker
    Cancelled,
    Completed(ImportOutcome),
    Failed(ImportError),
}

impl ImportResult {
    /// Alert to show, if any
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::Cancelled => None,
            Self::Completed(outcome) => outcome.summary(),
            Self::Failed(_) => Some(Alert::selection_failed()),
        }
    }

    pub fn should_navigate(&self) -> bool {
        matches!(self, Self::Completed(outcome) if outcome.should_navigate())
    }
}

/// Add every candidate whose uri wasn't in the library before the batch.
///
/// Candidates are checked against the uris present when the import
/// started. A uri repeated within the batch passes that check each time;
/// the library's own guard keeps only the first copy.
pub fn import_candidates(library: &mut Library, candidates: &[PickedFile]) -> ImportOutcome {
    tracing::info!("Importing {} picked file(s)", candidates.len());
    let existing: HashSet<String> = library
        .documents()
        .iter()
        .map(|doc| doc.uri.clone())
        .collect();
    let mut outcome = ImportOutcome::default();

    for candidate in candidates {
        if existing.contains(&candidate.uri) {
            tracing::info!("Skipping {}: already in library", candidate.name);
            outcome.skipped += 1;
            outcome.skipped_names.push(candidate.name.clone());
            continue;
        }

        if !library.add_document(Document::from_picked(candidate)) {
            tracing::debug!("{} repeats a uri from this batch", candidate.name);
        }
        outcome.added += 1;
    }

    tracing::info!(
        added = outcome.added,
        skipped = outcome.skipped,
        "Import finished"
    );
    outcome
}

/// Apply a picker response to the library
pub fn apply_response(library: &mut Library, response: Result<PickResponse, ImportError>) -> ImportResult {
    match response {
        Ok(PickResponse::Cancelled) => {
            tracing::info!("Document selection cancelled");
            ImportResult::Cancelled
        }
        Ok(PickResponse::Picked(files)) => {
            ImportResult::Completed(import_candidates(library, &files))
        }
        Err(e) => {
            tracing::error!("Document selection error: {}", e);
            ImportResult::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::core::document::{DocumentType, PDF_MIME};
    use crate::core::picker::{FilePicker, PickRequest};

    /// Picker that replays a canned response
    struct FakePicker {
        response: Mutex<Option<Result<PickResponse, ImportError>>>,
        requests: Mutex<Vec<PickRequest>>,
    }

    impl FakePicker {
        fn new(response: Result<PickResponse, ImportError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn picking(files: Vec<PickedFile>) -> Self {
            Self::new(Ok(PickResponse::Picked(files)))
        }
    }

    #[async_trait]
    impl FilePicker for FakePicker {
        async fn pick(&self, request: &PickRequest) -> Result<PickResponse, ImportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(PickResponse::Cancelled))
        }
    }

    /// Pick then apply, the same two steps the app runs across threads
    async fn run_import(
        picker: &dyn FilePicker,
        library: &mut Library,
        request: &PickRequest,
    ) -> ImportResult {
        let response = picker.pick(request).await;
        apply_response(library, response)
    }

    fn file(name: &str) -> PickedFile {
        PickedFile::new(name, format!("file:///docs/{}", name))
    }

    fn library_with(names: &[&str]) -> Library {
        let mut library = Library::new();
        for name in names {
            library.add_document(Document::from_picked(&file(name)));
        }
        library
    }

    #[tokio::test]
    async fn test_partial_import() {
        let mut library = library_with(&["b.pdf"]);
        let picker = FakePicker::picking(vec![file("a.pdf"), file("b.pdf"), file("c.docx")]);

        let result = run_import(&picker, &mut library, &PickRequest::documents()).await;

        let ImportResult::Completed(ref outcome) = result else {
            panic!("expected completed import, got {:?}", result);
        };
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.skipped_names, vec!["b.pdf".to_string()]);
        assert!(result.should_navigate());
        assert_eq!(library.len(), 3);

        let alert = result.alert().unwrap();
        assert_eq!(alert.title, "Partially Added");
        assert_eq!(
            alert.message,
            "Added 2 new documents.\n\n1 document was already in library:\nb.pdf"
        );
    }

    #[tokio::test]
    async fn test_all_duplicates() {
        let mut library = library_with(&["a.pdf", "b.pdf"]);
        let picker = FakePicker::picking(vec![file("a.pdf"), file("b.pdf")]);

        let result = run_import(&picker, &mut library, &PickRequest::documents()).await;

        let ImportResult::Completed(ref outcome) = result else {
            panic!("expected completed import, got {:?}", result);
        };
        assert_eq!(outcome.added, 0);
        assert_eq!(outcome.skipped, 2);
        assert!(!result.should_navigate());
        assert_eq!(library.len(), 2);

        let alert = result.alert().unwrap();
        assert_eq!(alert.title, "Already in Library");
        assert_eq!(
            alert.message,
            "2 documents were already in your library:\na.pdf, b.pdf"
        );
    }

    #[tokio::test]
    async fn test_cancel_leaves_library_untouched() {
        let mut library = library_with(&["a.pdf"]);
        let picker = FakePicker::new(Ok(PickResponse::Cancelled));

        let result = run_import(&picker, &mut library, &PickRequest::documents()).await;

        assert!(matches!(result, ImportResult::Cancelled));
        assert!(result.alert().is_none());
        assert!(!result.should_navigate());
        assert_eq!(library.len(), 1);
    }

    #[tokio::test]
    async fn test_picker_failure_shows_generic_notice() {
        let mut library = library_with(&["a.pdf"]);
        let picker = FakePicker::new(Err(ImportError::Picker("permission denied".into())));

        let result = run_import(&picker, &mut library, &PickRequest::documents()).await;

        assert!(matches!(result, ImportResult::Failed(ImportError::Picker(_))));
        assert_eq!(result.alert(), Some(Alert::selection_failed()));
        assert!(!result.should_navigate());
        assert_eq!(library.len(), 1);
    }

    #[tokio::test]
    async fn test_requests_documents_with_multiple_selection() {
        let mut library = Library::new();
        let picker = FakePicker::picking(vec![]);

        run_import(&picker, &mut library, &PickRequest::documents()).await;

        let requests = picker.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].multiple);
        assert_eq!(requests[0].mime_types.len(), 2);
    }

    #[test]
    fn test_all_added_summary() {
        let mut library = Library::new();
        let candidates = vec![
            file("a.pdf").with_mime_type(PDF_MIME).with_size(10),
            file("b.docx"),
        ];

        let outcome = import_candidates(&mut library, &candidates);

        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped, 0);
        let alert = outcome.summary().unwrap();
        assert_eq!(alert.title, "Success");
        assert_eq!(alert.message, "Added 2 documents to your library");

        let docs = library.documents();
        assert_eq!(docs[0].doc_type, DocumentType::Pdf);
        assert_eq!(docs[0].size, 10);
        assert_eq!(docs[1].doc_type, DocumentType::Docx);
        assert_eq!(docs[1].size, 0);
    }

    #[test]
    fn test_singular_wording() {
        let outcome = ImportOutcome {
            added: 1,
            skipped: 0,
            skipped_names: vec![],
        };
        assert_eq!(
            outcome.summary().unwrap().message,
            "Added 1 document to your library"
        );

        let outcome = ImportOutcome {
            added: 0,
            skipped: 1,
            skipped_names: vec!["a.pdf".into()],
        };
        assert_eq!(
            outcome.summary().unwrap().message,
            "1 document was already in your library:\na.pdf"
        );
    }

    #[test]
    fn test_empty_selection_has_no_summary() {
        let mut library = Library::new();
        let outcome = import_candidates(&mut library, &[]);

        assert_eq!(outcome, ImportOutcome::default());
        assert!(outcome.summary().is_none());
        assert!(!outcome.should_navigate());
    }

    #[test]
    fn test_repeated_uri_within_batch_is_added_once() {
        let mut library = Library::new();
        let candidates = vec![
            PickedFile::new("a.pdf", "file:///docs/a.pdf"),
            PickedFile::new("a-copy.pdf", "file:///docs/a.pdf"),
        ];

        let outcome = import_candidates(&mut library, &candidates);

        assert_eq!(library.len(), 1);
        assert_eq!(library.documents()[0].name, "a.pdf");
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped, 0);
        assert!(outcome.skipped_names.is_empty());
        assert_eq!(outcome.summary().unwrap().title, "Success");
    }

    #[test]
    fn test_prior_documents_still_skipped_alongside_batch_repeats() {
        let mut library = library_with(&["a.pdf"]);
        let candidates = vec![file("a.pdf"), file("b.pdf"), file("b.pdf")];

        let outcome = import_candidates(&mut library, &candidates);

        assert_eq!(library.len(), 2);
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.skipped_names, vec!["a.pdf".to_string()]);
    }
}
