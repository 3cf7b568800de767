pub mod documentcloud;

use crate::error::SpacetextError;
use crate::model::{Document, PagesUpdate};
use tracing::info;

/// Which documents a run should process.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub document_ids: Vec<u64>,
    /// Search query; every matching document is added after the explicit ids.
    pub query: Option<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.document_ids.is_empty() && self.query.as_deref().map_or(true, str::is_empty)
    }
}

/// Trait for the document-management platform the run reads from and
/// writes back to.
pub trait DocumentPlatform {
    fn get_document(&self, id: u64) -> Result<Document, SpacetextError>;

    /// All documents matching a search query, across every result page.
    fn search_documents(&self, query: &str) -> Result<Vec<Document>, SpacetextError>;

    /// Size of the document's PDF in bytes.
    fn pdf_size(&self, document: &Document) -> Result<u64, SpacetextError>;

    /// Replace the document's text and word positions.
    fn update_pages(&self, document_id: u64, update: &PagesUpdate) -> Result<(), SpacetextError>;

    /// Show a status message to the user who started the run.
    fn set_message(&self, message: &str) -> Result<(), SpacetextError>;
}

/// Resolve a selection into documents, explicit ids first.
pub fn select_documents(
    platform: &dyn DocumentPlatform,
    selection: &Selection,
) -> Result<Vec<Document>, SpacetextError> {
    let mut documents = Vec::new();
    for &id in &selection.document_ids {
        documents.push(platform.get_document(id)?);
    }
    if let Some(query) = selection.query.as_deref().filter(|q| !q.is_empty()) {
        let found = platform.search_documents(query)?;
        info!(query, count = found.len(), "search matched documents");
        for doc in found {
            if !documents.iter().any(|d| d.id == doc.id) {
                documents.push(doc);
            }
        }
    }
    Ok(documents)
}
