//! Conversion of OCR.space word boxes into page-relative fractions.

use crate::model::{PageDimensions, PageRecord, Position};
use crate::ocr::response::{OcrResponse, OverlayWord};
use tracing::warn;

/// OCR.space reports boxes in a space 4/3 larger than the page spec's.
pub const CORRECTION_FACTOR: f64 = 4.0 / 3.0;

/// Scale one word box to fractions of the (corrected) page size.
pub fn normalize_word(word: &OverlayWord, page: PageDimensions) -> Position {
    let width = page.width * CORRECTION_FACTOR;
    let height = page.height * CORRECTION_FACTOR;
    Position {
        text: word.word_text.clone(),
        x1: word.left / width,
        y1: word.top / height,
        x2: (word.left + word.width) / width,
        y2: (word.top + word.height) / height,
    }
}

/// Assemble page records from an OCR response.
///
/// Pages are paired with dimensions by index. When the two lists differ
/// in length the extra entries on the longer side are dropped.
pub fn build_pages(
    response: &OcrResponse,
    dimensions: &[PageDimensions],
    engine_tag: &str,
) -> Vec<PageRecord> {
    let results = response.pages();
    if results.len() != dimensions.len() {
        warn!(
            ocr_pages = results.len(),
            spec_pages = dimensions.len(),
            "page count mismatch between OCR result and page spec"
        );
    }

    results
        .iter()
        .zip(dimensions)
        .enumerate()
        .map(|(page_number, (result, &dims))| PageRecord {
            page_number,
            text: result.parsed_text.clone(),
            ocr: engine_tag.to_string(),
            positions: result
                .lines()
                .iter()
                .flat_map(|line| &line.words)
                .map(|word| normalize_word(word, dims))
                .collect(),
        })
        .collect()
}
