#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use mockall::mock;

use agenda_cell::services::clock::service_offset;
use agenda_cell::{
    AgendaError, AvailabilityEngine, BookingFeed, BookingRecord, FixedClock, HolidayFeed, Slot,
    SlotTally,
};

mock! {
    pub Feed {}

    #[async_trait]
    impl BookingFeed for Feed {
        async fn fetch_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, AgendaError>;
    }
}

mock! {
    pub Holidays {}

    #[async_trait]
    impl HolidayFeed for Holidays {
        async fn fetch_holiday_text(&self) -> Result<String, AgendaError>;
    }
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    service_offset()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

/// Monday 10/03/2025, 10:15 service time.
pub fn now() -> DateTime<FixedOffset> {
    at(2025, 3, 10, 10, 15)
}

pub fn today() -> NaiveDate {
    day(2025, 3, 10)
}

pub fn tuesday() -> NaiveDate {
    day(2025, 3, 11)
}

pub fn saturday() -> NaiveDate {
    day(2025, 3, 15)
}

pub fn sunday() -> NaiveDate {
    day(2025, 3, 16)
}

pub fn last_friday() -> NaiveDate {
    day(2025, 3, 7)
}

pub fn slot(text: &str) -> Slot {
    Slot::parse(text).unwrap()
}

pub fn slots(texts: &[&str]) -> Vec<Slot> {
    texts.iter().map(|text| slot(text)).collect()
}

pub fn tally(counts: &[(&str, u32)]) -> SlotTally {
    counts.iter().map(|(slot, count)| (*slot, *count)).collect()
}

/// Expands `(slot, count)` pairs into `count` records on `date`.
pub fn records(date: NaiveDate, counts: &[(&str, u32)]) -> Vec<BookingRecord> {
    counts
        .iter()
        .flat_map(|(slot, count)| (0..*count).map(move |_| BookingRecord::new(date, *slot)))
        .collect()
}

pub fn feed_returning(records: Vec<BookingRecord>) -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_fetch_bookings()
        .returning(move |_| Ok(records.clone()));
    feed
}

pub fn unused_feed() -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_fetch_bookings().never();
    feed
}

pub fn holidays_returning(text: &str) -> MockHolidays {
    let text = text.to_string();
    let mut holidays = MockHolidays::new();
    holidays
        .expect_fetch_holiday_text()
        .returning(move || Ok(text.clone()));
    holidays
}

pub fn engine(
    primary: MockFeed,
    secondary: MockFeed,
    holidays: MockHolidays,
    now: DateTime<FixedOffset>,
) -> AvailabilityEngine {
    AvailabilityEngine::new(
        Arc::new(primary),
        Arc::new(secondary),
        Arc::new(holidays),
        Arc::new(FixedClock::new(now)),
    )
}
