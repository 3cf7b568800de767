pub mod error;
pub mod model;
pub mod normalize;
pub mod ocr;
pub mod outcome;
pub mod page_spec;
pub mod platform;

mod http;

use error::SpacetextError;
use model::{Document, PageRecord, PagesUpdate};
use ocr::{OcrRequest, OcrService};
use outcome::RunSummary;
use platform::{DocumentPlatform, Selection};
use tracing::{error, info, warn};

/// PDFs larger than this are skipped.
pub const MAX_PDF_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Language sent to the OCR service instead of each document's own.
    pub language: Option<String>,
    pub max_pdf_bytes: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            language: None,
            max_pdf_bytes: MAX_PDF_BYTES,
        }
    }
}

/// Main API entry point: OCR every selected document and write the word
/// positions back to the platform.
///
/// Any error ends the run after its user-facing message has been sent to
/// the platform. Oversized PDFs are skipped and reported in the final
/// message instead.
pub fn run(
    platform: &dyn DocumentPlatform,
    ocr: &dyn OcrService,
    selection: &Selection,
    options: &RunOptions,
) -> Result<RunSummary, SpacetextError> {
    match run_documents(platform, ocr, selection, options) {
        Ok(summary) => {
            platform.set_message(&summary.message())?;
            Ok(summary)
        }
        Err(e) => {
            if let Err(report_err) = platform.set_message(&e.user_message()) {
                warn!(error = %report_err, "could not report run failure");
            }
            Err(e)
        }
    }
}

fn run_documents(
    platform: &dyn DocumentPlatform,
    ocr: &dyn OcrService,
    selection: &Selection,
    options: &RunOptions,
) -> Result<RunSummary, SpacetextError> {
    if selection.is_empty() {
        return Err(SpacetextError::NoDocuments);
    }
    let documents = platform::select_documents(platform, selection)?;
    if documents.is_empty() {
        return Err(SpacetextError::NoDocuments);
    }

    // Checked up front so a private document stops the run before anything is written.
    if let Some(doc) = documents.iter().find(|d| !d.access.is_public()) {
        error!(id = doc.id, access = %doc.access, "document is not public");
        return Err(SpacetextError::NotPublic { id: doc.id });
    }

    let mut summary = RunSummary::new(options.max_pdf_bytes);
    for document in &documents {
        let size = platform.pdf_size(document)?;
        if size > options.max_pdf_bytes {
            warn!(id = document.id, size, "PDF exceeds size limit, skipping");
            summary.skipped_oversize.push(document.id);
            continue;
        }

        let pages = ocr_document(ocr, document, options)?;
        info!(id = document.id, pages = pages.len(), "writing OCR results");
        platform.update_pages(document.id, &PagesUpdate { pages })?;
        summary.processed.push(document.id);
    }

    Ok(summary)
}

/// OCR one document and build its page records.
pub fn ocr_document(
    ocr: &dyn OcrService,
    document: &Document,
    options: &RunOptions,
) -> Result<Vec<PageRecord>, SpacetextError> {
    let dimensions = page_spec::parse(&document.page_spec)?;
    let request = OcrRequest {
        url: document.pdf_url(),
        language: options
            .language
            .clone()
            .unwrap_or_else(|| document.language.clone()),
        overlay: true,
    };
    info!(id = document.id, title = %document.title, "running OCR");

    let response = ocr.recognize(&request)?;
    if response.is_errored_on_processing {
        let messages = response.error_messages();
        error!(id = document.id, ?messages, "OCR service reported an error");
        return Err(SpacetextError::OcrFailed { messages });
    }

    Ok(normalize::build_pages(&response, &dimensions, &ocr.engine_tag()))
}
