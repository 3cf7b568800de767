use crate::error::SpacetextError;
use crate::http;
use crate::ocr::response::OcrResponse;
use crate::ocr::{OcrRequest, OcrService};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.ocr.space/parse/image";

/// Connection settings for the OCR.space API.
#[derive(Debug, Clone)]
pub struct OcrSpaceConfig {
    pub endpoint: String,
    pub api_key: String,
    /// OCR.space engine number (1 or 2).
    pub engine: u8,
    pub timeout: Duration,
}

impl OcrSpaceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        OcrSpaceConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            engine: 1,
            timeout: Duration::from_secs(120),
        }
    }

    fn validate(&self) -> Result<(), SpacetextError> {
        if self.api_key.trim().is_empty() {
            return Err(SpacetextError::Config(
                "OCR.space API key is empty. Set it with: export KEY=...".into(),
            ));
        }
        if !matches!(self.engine, 1 | 2) {
            return Err(SpacetextError::Config(format!(
                "OCR engine must be 1 or 2, got {}",
                self.engine
            )));
        }
        Ok(())
    }
}

/// OCR backend that posts a document URL to OCR.space.
pub struct OcrSpaceClient {
    config: OcrSpaceConfig,
    client: Client,
}

impl OcrSpaceClient {
    pub fn new(config: OcrSpaceConfig) -> Result<Self, SpacetextError> {
        config.validate()?;
        let client = http::client(config.timeout)?;
        Ok(OcrSpaceClient { config, client })
    }

    fn form(&self, request: &OcrRequest) -> Vec<(&'static str, String)> {
        vec![
            ("url", request.url.clone()),
            ("isOverlayRequired", request.overlay.to_string()),
            ("language", request.language.clone()),
            ("filetype", "PDF".to_string()),
            ("OCREngine", self.config.engine.to_string()),
        ]
    }
}

impl OcrService for OcrSpaceClient {
    fn recognize(&self, request: &OcrRequest) -> Result<OcrResponse, SpacetextError> {
        debug!(url = %request.url, language = %request.language, "submitting to OCR.space");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("apikey", &self.config.api_key)
            .form(&self.form(request))
            .send()?;
        let body = http::ensure_success(response)?.text()?;

        // Rate-limit and quota errors arrive as plain text rather than JSON.
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "OCR.space returned a non-JSON body");
            SpacetextError::OcrFailed {
                messages: vec![body.trim().to_string()],
            }
        })
    }

    fn engine_tag(&self) -> String {
        format!("ocrspace{}", self.config.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_key() {
        let err = OcrSpaceClient::new(OcrSpaceConfig::new("  ")).err().unwrap();
        assert!(matches!(err, SpacetextError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_engine() {
        let mut config = OcrSpaceConfig::new("k");
        config.engine = 5;
        assert!(OcrSpaceClient::new(config).is_err());
    }

    #[test]
    fn test_form_fields_and_tag() {
        let mut config = OcrSpaceConfig::new("k");
        config.engine = 2;
        let client = OcrSpaceClient::new(config).unwrap();
        let request = OcrRequest {
            url: "https://example.org/a.pdf".into(),
            language: "spa".into(),
            overlay: true,
        };
        let form = client.form(&request);
        assert!(form.contains(&("url", "https://example.org/a.pdf".to_string())));
        assert!(form.contains(&("isOverlayRequired", "true".to_string())));
        assert!(form.contains(&("language", "spa".to_string())));
        assert!(form.contains(&("OCREngine", "2".to_string())));
        assert_eq!(client.engine_tag(), "ocrspace2");
    }
}
