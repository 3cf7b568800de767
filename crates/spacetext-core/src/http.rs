use crate::error::SpacetextError;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = concat!("spacetext/", env!("CARGO_PKG_VERSION"));

/// Blocking client shared by the OCR and platform backends.
pub fn client(timeout: Duration) -> Result<Client, SpacetextError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Turn a non-2xx response into `SpacetextError::Api`, keeping the body.
pub fn ensure_success(response: Response) -> Result<Response, SpacetextError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().unwrap_or_default();
    Err(api_error(status, url, body))
}

fn api_error(status: StatusCode, url: String, body: String) -> SpacetextError {
    SpacetextError::Api {
        status: status.as_u16(),
        url,
        body,
    }
}
