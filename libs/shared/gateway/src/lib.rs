pub mod client;
pub mod export;
pub mod holiday;

pub use client::build_http_client;
pub use export::{ExportClient, ExportEntry};
pub use holiday::HolidayClient;
