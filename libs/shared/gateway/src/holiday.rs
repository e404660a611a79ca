use anyhow::Result;
use reqwest::{header::AUTHORIZATION, Client};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;

use crate::client::send_json;

#[derive(Debug, Deserialize)]
struct ResourceResponse {
    resource: String,
}

/// Client for the command endpoint that stores the holiday resource.
pub struct HolidayClient {
    client: Client,
    url: String,
    key: String,
    resource_uri: String,
}

impl HolidayClient {
    pub fn new(config: &AppConfig, client: Client) -> Self {
        Self {
            client,
            url: config.holiday_feed_url.clone(),
            key: config.holiday_feed_key.clone(),
            resource_uri: config.holiday_resource_uri.clone(),
        }
    }

    /// Returns the raw holiday text, e.g. `"25/12-01/01"`.
    pub async fn fetch_resource(&self) -> Result<String> {
        let command = json!({
            "id": Uuid::new_v4().to_string(),
            "method": "get",
            "uri": self.resource_uri,
        });

        let request = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, &self.key)
            .json(&command);

        let response: ResourceResponse = send_json(request, "Holiday resource").await?;
        debug!("Holiday resource: {}", response.resource);

        Ok(response.resource)
    }
}
