use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::error;

use shared_gateway::{ExportClient, ExportEntry, HolidayClient};

use crate::error::AgendaError;
use crate::models::{format_day, parse_day, BookingRecord};

/// A feed of reservations for a single day.
#[async_trait]
pub trait BookingFeed: Send + Sync {
    async fn fetch_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, AgendaError>;
}

/// Raw holiday text, `dd/mm` tokens joined by a delimiter.
#[async_trait]
pub trait HolidayFeed: Send + Sync {
    async fn fetch_holiday_text(&self) -> Result<String, AgendaError>;
}

/// One agenda of the booking-export service.
pub struct ExportBookingFeed {
    client: Arc<ExportClient>,
    agenda_code: String,
}

impl ExportBookingFeed {
    pub fn new(client: Arc<ExportClient>, agenda_code: impl Into<String>) -> Self {
        Self {
            client,
            agenda_code: agenda_code.into(),
        }
    }

    pub fn agenda_code(&self) -> &str {
        &self.agenda_code
    }
}

/// Converts export rows; one unreadable date rejects the whole payload.
pub fn records_from_entries(entries: Vec<ExportEntry>) -> Result<Vec<BookingRecord>, AgendaError> {
    entries
        .into_iter()
        .map(|entry| {
            let date = parse_day(&entry.data).map_err(|_| {
                AgendaError::UpstreamFetch(format!(
                    "Agenda export returned an unreadable date '{}'",
                    entry.data
                ))
            })?;
            Ok(BookingRecord::new(date, entry.horario))
        })
        .collect()
}

#[async_trait]
impl BookingFeed for ExportBookingFeed {
    async fn fetch_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, AgendaError> {
        let day = format_day(date);

        let entries = self
            .client
            .fetch_agenda_entries(&self.agenda_code, &day, &day)
            .await
            .map_err(|e| {
                error!("Failed to fetch agenda {}: {}", self.agenda_code, e);
                AgendaError::UpstreamFetch(format!("Agenda {} unavailable: {}", self.agenda_code, e))
            })?;

        records_from_entries(entries)
    }
}

pub struct ResourceHolidayFeed {
    client: Arc<HolidayClient>,
}

impl ResourceHolidayFeed {
    pub fn new(client: Arc<HolidayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HolidayFeed for ResourceHolidayFeed {
    async fn fetch_holiday_text(&self) -> Result<String, AgendaError> {
        self.client
            .fetch_resource()
            .await
            .map_err(|e| AgendaError::UpstreamFetch(format!("Holiday feed unavailable: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn entry(data: &str, horario: &str) -> ExportEntry {
        ExportEntry {
            data: data.to_string(),
            horario: horario.to_string(),
        }
    }

    #[test]
    fn test_records_keep_raw_slot_text() {
        let records = records_from_entries(vec![entry("11/03/2025", "09:15")]).unwrap();
        assert_eq!(records[0].slot, "09:15");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
    }

    #[test]
    fn test_unreadable_date_is_an_upstream_failure() {
        let result = records_from_entries(vec![
            entry("11/03/2025", "09:00"),
            entry("2025-03-11", "09:00"),
        ]);
        assert_matches!(result, Err(AgendaError::UpstreamFetch(_)));
    }
}
