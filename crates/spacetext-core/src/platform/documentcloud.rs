use crate::error::SpacetextError;
use crate::http;
use crate::model::{Document, PagesUpdate};
use crate::platform::DocumentPlatform;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_LENGTH;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_API_URL: &str = "https://api.www.documentcloud.org/api/";

/// Connection settings for the DocumentCloud REST API.
#[derive(Debug, Clone)]
pub struct DocumentCloudConfig {
    /// API root, e.g. "https://api.www.documentcloud.org/api/".
    pub api_url: String,
    /// Bearer token; needed for writes and for non-public reads.
    pub token: Option<String>,
    /// Add-on run that receives status messages.
    pub run_id: Option<String>,
    pub timeout: Duration,
}

impl Default for DocumentCloudConfig {
    fn default() -> Self {
        DocumentCloudConfig {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            run_id: None,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    results: Vec<Document>,
    next: Option<String>,
}

/// `DocumentPlatform` backed by the DocumentCloud API.
pub struct DocumentCloudClient {
    config: DocumentCloudConfig,
    client: Client,
}

impl DocumentCloudClient {
    pub fn new(config: DocumentCloudConfig) -> Result<Self, SpacetextError> {
        if !config.api_url.starts_with("http://") && !config.api_url.starts_with("https://") {
            return Err(SpacetextError::Config(format!(
                "DocumentCloud API URL must be http(s): {}",
                config.api_url
            )));
        }
        let client = http::client(config.timeout)?;
        Ok(DocumentCloudClient { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn require_token(&self) -> Result<(), SpacetextError> {
        if self.config.token.is_none() {
            return Err(SpacetextError::Config(
                "writing to DocumentCloud needs a token. Set DOCUMENTCLOUD_TOKEN".into(),
            ));
        }
        Ok(())
    }
}

impl DocumentPlatform for DocumentCloudClient {
    fn get_document(&self, id: u64) -> Result<Document, SpacetextError> {
        let url = self.url(&format!("documents/{id}/"));
        debug!(%url, "fetching document");
        let response = self.authorized(self.client.get(&url)).send()?;
        Ok(http::ensure_success(response)?.json()?)
    }

    fn search_documents(&self, query: &str) -> Result<Vec<Document>, SpacetextError> {
        let mut documents = Vec::new();
        let first = self
            .client
            .get(self.url("documents/search/"))
            .query(&[("q", query)]);
        let mut page: SearchPage = http::ensure_success(self.authorized(first).send()?)?.json()?;

        loop {
            documents.append(&mut page.results);
            let Some(next) = page.next.take() else {
                break;
            };
            debug!(url = %next, "fetching next search page");
            page = http::ensure_success(self.authorized(self.client.get(&next)).send()?)?.json()?;
        }

        Ok(documents)
    }

    fn pdf_size(&self, document: &Document) -> Result<u64, SpacetextError> {
        let url = document.pdf_url();
        let response = http::ensure_success(self.client.head(&url).send()?)?;
        let header_len = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        if let Some(len) = header_len {
            return Ok(len);
        }

        debug!(%url, "no Content-Length on HEAD, downloading PDF to size it");
        let bytes = http::ensure_success(self.client.get(&url).send()?)?.bytes()?;
        Ok(bytes.len() as u64)
    }

    fn update_pages(&self, document_id: u64, update: &PagesUpdate) -> Result<(), SpacetextError> {
        self.require_token()?;
        let url = self.url(&format!("documents/{document_id}/"));
        let response = self
            .authorized(self.client.patch(&url))
            .json(update)
            .send()?;
        http::ensure_success(response)?;
        Ok(())
    }

    fn set_message(&self, message: &str) -> Result<(), SpacetextError> {
        info!(message, "run message");
        let Some(run_id) = self.config.run_id.as_deref() else {
            return Ok(());
        };
        self.require_token()?;
        let url = self.url(&format!("addon_runs/{run_id}/"));
        let response = self
            .authorized(self.client.patch(&url))
            .json(&serde_json::json!({ "message": message }))
            .send()?;
        http::ensure_success(response)?;
        Ok(())
    }
}
