use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_gateway::{build_http_client, ExportClient, HolidayClient};

use crate::error::AgendaError;
use crate::models::{parse_day, DayVerdict, OpenSlot, Slot, SlotTally};
use crate::services::clock::{Clock, SystemClock};
use crate::services::day_gate::DayGate;
use crate::services::decider;
use crate::services::feeds::{BookingFeed, ExportBookingFeed, HolidayFeed, ResourceHolidayFeed};
use crate::services::tally;

/// Answers availability questions for one day from the primary and
/// secondary agendas. Holds no per-request state; every call builds its own
/// tallies.
pub struct AvailabilityEngine {
    primary: Arc<dyn BookingFeed>,
    secondary: Arc<dyn BookingFeed>,
    holidays: Arc<dyn HolidayFeed>,
    clock: Arc<dyn Clock>,
    gate: DayGate,
}

impl AvailabilityEngine {
    pub fn new(
        primary: Arc<dyn BookingFeed>,
        secondary: Arc<dyn BookingFeed>,
        holidays: Arc<dyn HolidayFeed>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            primary,
            secondary,
            holidays,
            clock,
            gate: DayGate::default(),
        }
    }

    /// Wires the engine to the upstream services named in `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    pub fn from_config_with_clock(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let http = build_http_client(config)?;
        let export = Arc::new(ExportClient::new(config, http.clone()));
        let holiday = Arc::new(HolidayClient::new(config, http));

        Ok(Self::new(
            Arc::new(ExportBookingFeed::new(export.clone(), &config.primary_agenda_code)),
            Arc::new(ExportBookingFeed::new(export, &config.secondary_agenda_code)),
            Arc::new(ResourceHolidayFeed::new(holiday)),
            clock,
        ))
    }

    /// `date` is `dd/mm/yyyy`, `slot` is one of the bookable `HH:MM` markers.
    pub async fn is_slot_open(&self, date: &str, slot: &str) -> Result<bool, AgendaError> {
        let date = parse_day(date)?;
        let slot = Slot::try_from(slot)?;
        self.is_slot_open_on(date, slot).await
    }

    /// `date` is `dd/mm/yyyy`.
    pub async fn list_open_slots(&self, date: &str) -> Result<Vec<OpenSlot>, AgendaError> {
        let date = parse_day(date)?;
        self.list_open_slots_on(date).await
    }

    pub async fn is_slot_open_on(&self, date: NaiveDate, slot: Slot) -> Result<bool, AgendaError> {
        let now = self.clock.now();
        let verdict = self.require_bookable(date, now).await?;

        let (primary, secondary) = self.tallies(date).await?;
        let available = decider::decide_slot(verdict, slot, &primary, &secondary)?;

        info!(
            "Slot {} on {} is {}",
            slot,
            date,
            if available { "available" } else { "not available" }
        );
        Ok(available)
    }

    pub async fn list_open_slots_on(&self, date: NaiveDate) -> Result<Vec<OpenSlot>, AgendaError> {
        let now = self.clock.now();
        let verdict = self.require_bookable(date, now).await?;

        let (primary, secondary) = self.tallies(date).await?;
        let open = decider::list_open_slots(verdict, date, now, &primary, &secondary)?;

        info!("{} open slots on {}", open.len(), date);
        Ok(open
            .into_iter()
            .map(|time| OpenSlot { date, time })
            .collect())
    }

    async fn require_bookable(
        &self,
        date: NaiveDate,
        now: DateTime<FixedOffset>,
    ) -> Result<DayVerdict, AgendaError> {
        let verdict = self
            .gate
            .evaluate_with_feed(date, now, self.holidays.as_ref())
            .await;

        if !verdict.is_eligible() {
            info!("Day {} is not bookable: {}", date, verdict);
            return Err(AgendaError::DayNotBookable(verdict));
        }
        Ok(verdict)
    }

    async fn tallies(&self, date: NaiveDate) -> Result<(SlotTally, SlotTally), AgendaError> {
        let (primary_records, secondary_records) = tokio::try_join!(
            self.primary.fetch_bookings(date),
            self.secondary.fetch_bookings(date),
        )?;

        let primary = tally::aggregate(&primary_records, date);
        let secondary = tally::aggregate(&secondary_records, date);

        let capacity = decider::day_capacity(&primary, &secondary);
        debug!(
            "Capacity on {}: {} primary places, {} secondary open slots",
            date, capacity.primary_places, capacity.secondary_open_slots
        );

        Ok((primary, secondary))
    }
}
