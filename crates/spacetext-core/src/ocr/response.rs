use crate::error::SpacetextError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level body returned by the OCR.space `parse/image` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrResponse {
    /// One entry per page, in page order. Null when processing failed.
    #[serde(default)]
    pub parsed_results: Option<Vec<ParsedResult>>,
    #[serde(rename = "OCRExitCode", default)]
    pub ocr_exit_code: Option<i32>,
    pub is_errored_on_processing: bool,
    #[serde(default)]
    pub error_message: Option<ErrorMessages>,
    #[serde(default)]
    pub error_details: Option<String>,
    #[serde(default)]
    pub processing_time_in_milliseconds: Option<String>,
}

impl OcrResponse {
    pub fn pages(&self) -> &[ParsedResult] {
        self.parsed_results.as_deref().unwrap_or(&[])
    }

    /// All error text the service reported, top-level first.
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = self
            .error_message
            .clone()
            .map(ErrorMessages::into_vec)
            .unwrap_or_default();
        if let Some(details) = self.error_details.as_deref().filter(|d| !d.is_empty()) {
            messages.push(details.to_string());
        }
        for page in self.pages() {
            if let Some(msg) = page.error_message.as_deref().filter(|m| !m.is_empty()) {
                messages.push(msg.to_string());
            }
        }
        messages
    }
}

/// The service sends `ErrorMessage` either as a string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ErrorMessages::One(s) if s.is_empty() => Vec::new(),
            ErrorMessages::One(s) => vec![s],
            ErrorMessages::Many(v) => v,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    #[serde(default)]
    pub text_overlay: Option<TextOverlay>,
    #[serde(default)]
    pub file_parse_exit_code: Option<i32>,
    #[serde(default)]
    pub parsed_text: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ParsedResult {
    pub fn lines(&self) -> &[OverlayLine] {
        self.text_overlay
            .as_ref()
            .map(|o| o.lines.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextOverlay {
    #[serde(default)]
    pub lines: Vec<OverlayLine>,
    #[serde(default)]
    pub has_overlay: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayLine {
    #[serde(default)]
    pub line_text: String,
    #[serde(default)]
    pub words: Vec<OverlayWord>,
}

/// A recognized word and its box in source pixel units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayWord {
    pub word_text: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Read a saved OCR.space response from disk.
pub fn load(path: &Path) -> Result<OcrResponse, SpacetextError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SUCCESS: &str = r#"{
        "ParsedResults": [{
            "TextOverlay": {
                "Lines": [{
                    "LineText": "Hello world",
                    "Words": [
                        {"WordText": "Hello", "Left": 10, "Top": 20, "Height": 12, "Width": 40},
                        {"WordText": "world", "Left": 55.5, "Top": 20, "Height": 12, "Width": 42}
                    ],
                    "MaxHeight": 12,
                    "MinTop": 20
                }],
                "HasOverlay": true,
                "Message": "Total lines: 1"
            },
            "TextOrientation": "0",
            "FileParseExitCode": 1,
            "ParsedText": "Hello world\r\n",
            "ErrorMessage": "",
            "ErrorDetails": ""
        }],
        "OCRExitCode": 1,
        "IsErroredOnProcessing": false,
        "ProcessingTimeInMilliseconds": "343",
        "SearchablePDFURL": "Searchable PDF not generated as it was not requested."
    }"#;

    #[test]
    fn test_parse_success_response() {
        let resp: OcrResponse = serde_json::from_str(SUCCESS).unwrap();
        assert!(!resp.is_errored_on_processing);
        assert_eq!(resp.ocr_exit_code, Some(1));
        assert_eq!(resp.pages().len(), 1);
        let words = &resp.pages()[0].lines()[0].words;
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].word_text, "world");
        assert_eq!(words[1].left, 55.5);
        assert!(resp.error_messages().is_empty());
    }

    #[test]
    fn test_parse_error_message_list() {
        let json = r#"{
            "OCRExitCode": 99,
            "IsErroredOnProcessing": true,
            "ErrorMessage": ["Unable to recognize the file type", "E216:Unable to detect the file extension"],
            "ProcessingTimeInMilliseconds": "0"
        }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_errored_on_processing);
        assert!(resp.pages().is_empty());
        assert_eq!(resp.error_messages().len(), 2);
    }

    #[test]
    fn test_parse_error_message_string_and_null() {
        let json = r#"{"ParsedResults": null, "IsErroredOnProcessing": true,
                       "ErrorMessage": "Timed out waiting for results", "ErrorDetails": null}"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error_messages(), vec!["Timed out waiting for results"]);

        let json = r#"{"IsErroredOnProcessing": false, "ErrorMessage": null}"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert!(resp.error_messages().is_empty());
    }

    #[test]
    fn test_page_without_overlay_has_no_lines() {
        let json = r#"{"ParsedResults": [{"TextOverlay": null, "ParsedText": "x"}],
                       "IsErroredOnProcessing": false}"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert!(resp.pages()[0].lines().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SUCCESS.as_bytes()).unwrap();
        let resp = load(file.path()).unwrap();
        assert_eq!(resp.pages()[0].parsed_text, "Hello world\r\n");
    }
}
