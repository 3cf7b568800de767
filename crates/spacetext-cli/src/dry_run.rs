use spacetext_core::error::SpacetextError;
use spacetext_core::model::{Document, PagesUpdate};
use spacetext_core::platform::DocumentPlatform;
use tracing::info;

/// Reads from the wrapped platform but never writes to it.
///
/// Page updates are printed to stdout as one JSON object per document.
pub struct DryRunPlatform<'a> {
    inner: &'a dyn DocumentPlatform,
}

impl<'a> DryRunPlatform<'a> {
    pub fn new(inner: &'a dyn DocumentPlatform) -> Self {
        DryRunPlatform { inner }
    }
}

impl DocumentPlatform for DryRunPlatform<'_> {
    fn get_document(&self, id: u64) -> Result<Document, SpacetextError> {
        self.inner.get_document(id)
    }

    fn search_documents(&self, query: &str) -> Result<Vec<Document>, SpacetextError> {
        self.inner.search_documents(query)
    }

    fn pdf_size(&self, document: &Document) -> Result<u64, SpacetextError> {
        self.inner.pdf_size(document)
    }

    fn update_pages(&self, document_id: u64, update: &PagesUpdate) -> Result<(), SpacetextError> {
        let json = serde_json::to_string(&serde_json::json!({
            "document_id": document_id,
            "pages": update.pages,
        }))?;
        println!("{json}");
        Ok(())
    }

    fn set_message(&self, message: &str) -> Result<(), SpacetextError> {
        info!(message, "run message (dry run)");
        Ok(())
    }
}
