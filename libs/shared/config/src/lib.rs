use std::env;
use tracing::warn;

pub const DEFAULT_EXPORT_BASE_URL: &str = "https://ws1.soc.com.br/WebSoc/exportadados";
pub const DEFAULT_PRIMARY_AGENDA_CODE: &str = "3015983";
pub const DEFAULT_HOLIDAY_RESOURCE_URI: &str = "/resources/feriados";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SERVER_PORT: u16 = 2026;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_token: String,
    pub export_base_url: String,
    pub export_company: String,
    pub export_code: String,
    pub export_key: String,
    pub primary_agenda_code: String,
    pub secondary_agenda_code: String,
    pub holiday_feed_url: String,
    pub holiday_feed_key: String,
    pub holiday_resource_uri: String,
    pub upstream_timeout_secs: u64,
    pub server_port: u16,
}

fn required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, using empty value", name);
        String::new()
    })
}

fn with_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, using default", name);
        default.to_string()
    })
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid value ({}), using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_token: required("AGENDA_API_TOKEN"),
            export_base_url: with_default("EXPORT_BASE_URL", DEFAULT_EXPORT_BASE_URL),
            export_company: required("EXPORT_COMPANY"),
            export_code: required("EXPORT_CODE"),
            export_key: required("EXPORT_KEY"),
            primary_agenda_code: with_default("PRIMARY_AGENDA_CODE", DEFAULT_PRIMARY_AGENDA_CODE),
            secondary_agenda_code: required("SECONDARY_AGENDA_CODE"),
            holiday_feed_url: required("HOLIDAY_FEED_URL"),
            holiday_feed_key: required("HOLIDAY_FEED_KEY"),
            holiday_resource_uri: with_default("HOLIDAY_RESOURCE_URI", DEFAULT_HOLIDAY_RESOURCE_URI),
            upstream_timeout_secs: parsed_or("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
            server_port: parsed_or("SERVER_PORT", DEFAULT_SERVER_PORT),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }
        if !config.is_holiday_feed_configured() {
            warn!("Holiday feed not configured - holiday checks will fail open");
        }

        config
    }

    /// Credentials needed to reach both booking feeds and to authorize callers.
    pub fn is_configured(&self) -> bool {
        !self.api_token.is_empty()
            && !self.export_base_url.is_empty()
            && !self.export_company.is_empty()
            && !self.export_code.is_empty()
            && !self.export_key.is_empty()
            && !self.primary_agenda_code.is_empty()
            && !self.secondary_agenda_code.is_empty()
    }

    pub fn is_holiday_feed_configured(&self) -> bool {
        !self.holiday_feed_url.is_empty() && !self.holiday_feed_key.is_empty()
    }
}
