use serde::{Deserialize, Serialize};

/// What a run did, for the final status message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Documents whose pages were written back.
    pub processed: Vec<u64>,
    /// Documents skipped because their PDF exceeded the size limit.
    pub skipped_oversize: Vec<u64>,
    /// Size limit the run applied, in bytes.
    pub max_pdf_bytes: u64,
}

impl RunSummary {
    pub fn new(max_pdf_bytes: u64) -> Self {
        RunSummary {
            processed: Vec::new(),
            skipped_oversize: Vec::new(),
            max_pdf_bytes,
        }
    }

    /// The size limit for display, e.g. "5MB".
    pub fn size_limit(&self) -> String {
        const MB: u64 = 1024 * 1024;
        if self.max_pdf_bytes > 0 && self.max_pdf_bytes % MB == 0 {
            format!("{}MB", self.max_pdf_bytes / MB)
        } else {
            format!("{} bytes", self.max_pdf_bytes)
        }
    }

    pub fn message(&self) -> String {
        let mut message = format!("OCR complete for {} document(s).", self.processed.len());
        if !self.skipped_oversize.is_empty() {
            message.push_str(&format!(
                " {} document(s) skipped: PDF larger than {}.",
                self.skipped_oversize.len(),
                self.size_limit()
            ));
        }
        message
    }
}
