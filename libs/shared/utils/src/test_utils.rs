use std::sync::Arc;

use shared_config::{AppConfig, DEFAULT_HOLIDAY_RESOURCE_URI};

pub const TEST_API_TOKEN: &str = "test-api-token";
pub const TEST_PRIMARY_AGENDA: &str = "1111";
pub const TEST_SECONDARY_AGENDA: &str = "2222";
pub const TEST_EXPORT_PATH: &str = "/WebSoc/exportadados";
pub const TEST_HOLIDAY_PATH: &str = "/commands";

pub struct TestConfig {
    pub api_token: String,
    pub upstream_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_token: TEST_API_TOKEN.to_string(),
            upstream_url: "http://localhost:54321".to_string(),
        }
    }
}

impl TestConfig {
    /// Points both the export service and the holiday feed at `upstream_url`.
    pub fn with_upstream(upstream_url: &str) -> Self {
        Self {
            upstream_url: upstream_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_token: self.api_token.clone(),
            export_base_url: format!("{}{}", self.upstream_url, TEST_EXPORT_PATH),
            export_company: "900".to_string(),
            export_code: "901".to_string(),
            export_key: "test-export-key".to_string(),
            primary_agenda_code: TEST_PRIMARY_AGENDA.to_string(),
            secondary_agenda_code: TEST_SECONDARY_AGENDA.to_string(),
            holiday_feed_url: format!("{}{}", self.upstream_url, TEST_HOLIDAY_PATH),
            holiday_feed_key: "Key test-holiday-key".to_string(),
            holiday_resource_uri: DEFAULT_HOLIDAY_RESOURCE_URI.to_string(),
            upstream_timeout_secs: 5,
            server_port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_token)
    }
}
