#[derive(Debug, thiserror::Error)]
pub enum SpacetextError {
    #[error("no documents selected")]
    NoDocuments,

    #[error("document {id} is not public")]
    NotPublic { id: u64 },

    #[error("OCR processing failed: {}", .messages.join("; "))]
    OcrFailed { messages: Vec<String> },

    #[error("invalid page spec: {0}")]
    PageSpec(String),

    #[error("request to {url} failed with status {status}: {body}")]
    Api { status: u16, url: String, body: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpacetextError {
    /// The message shown to the user on the run record.
    ///
    /// OCR failures are deliberately reported as a bare "Error"; the
    /// service's own messages only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            SpacetextError::NoDocuments => "Please select at least one document".into(),
            SpacetextError::NotPublic { .. } => "Document must be public".into(),
            SpacetextError::OcrFailed { .. } => "Error".into(),
            other => format!("Error: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            SpacetextError::NotPublic { id: 7 }.user_message(),
            "Document must be public"
        );
        let ocr = SpacetextError::OcrFailed {
            messages: vec!["E101: Timed out".into()],
        };
        assert_eq!(ocr.user_message(), "Error");
        assert_eq!(ocr.to_string(), "OCR processing failed: E101: Timed out");
        assert_eq!(
            SpacetextError::PageSpec("empty".into()).user_message(),
            "Error: invalid page spec: empty"
        );
    }
}
