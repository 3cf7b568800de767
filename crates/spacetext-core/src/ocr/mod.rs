pub mod response;
pub mod space;

use crate::error::SpacetextError;
use response::OcrResponse;

/// What to send the OCR service for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrRequest {
    /// Publicly reachable URL of the PDF.
    pub url: String,
    /// ISO 639-2 language code.
    pub language: String,
    /// Ask for word-level bounding boxes.
    pub overlay: bool,
}

/// Trait for OCR backends.
pub trait OcrService {
    /// Submit a document and return the service's parsed response.
    ///
    /// A response with `is_errored_on_processing` set is still `Ok`; callers
    /// decide how to treat it.
    fn recognize(&self, request: &OcrRequest) -> Result<OcrResponse, SpacetextError>;

    /// Tag written into each page record's `ocr` field.
    fn engine_tag(&self) -> String;
}
