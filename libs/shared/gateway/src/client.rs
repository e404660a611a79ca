use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Builds the HTTP client shared by every upstream gateway.
pub fn build_http_client(config: &AppConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()?;
    Ok(client)
}

pub(crate) async fn send_json<T>(request: RequestBuilder, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        error!("{} error ({}): {}", label, status, error_text);

        return Err(match status.as_u16() {
            401 | 403 => anyhow!("{} authentication error: {}", label, error_text),
            404 => anyhow!("{} resource not found: {}", label, error_text),
            _ => anyhow!("{} error ({}): {}", label, status, error_text),
        });
    }

    let body = response.bytes().await?;
    debug!("{} responded with {} bytes", label, body.len());

    serde_json::from_slice::<T>(&body)
        .map_err(|e| anyhow!("{} returned an unreadable payload: {}", label, e))
}
