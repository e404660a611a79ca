use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::models::{DayVerdict, HolidayMarker};
use crate::services::feeds::HolidayFeed;
use crate::services::holidays::DateIntervalParser;

/// Decides whether a day may be booked at all.
///
/// Checks run in a fixed order: past, weekend, holiday. The holiday feed is
/// only consulted once the calendar checks pass, and a feed or parse failure
/// degrades to "not a holiday".
#[derive(Debug, Clone, Default)]
pub struct DayGate {
    parser: DateIntervalParser,
}

impl DayGate {
    pub fn new(parser: DateIntervalParser) -> Self {
        Self { parser }
    }

    /// Past and weekend checks, which need no upstream data.
    pub fn calendar_verdict(target: NaiveDate, now: DateTime<FixedOffset>) -> Option<DayVerdict> {
        if target < now.date_naive() {
            return Some(DayVerdict::Past);
        }
        if matches!(target.weekday(), Weekday::Sat | Weekday::Sun) {
            return Some(DayVerdict::Weekend);
        }
        None
    }

    pub fn evaluate(
        target: NaiveDate,
        now: DateTime<FixedOffset>,
        holidays: &[HolidayMarker],
    ) -> DayVerdict {
        if let Some(verdict) = Self::calendar_verdict(target, now) {
            return verdict;
        }
        if holidays.iter().any(|marker| marker.matches(target)) {
            return DayVerdict::Holiday;
        }
        DayVerdict::Eligible
    }

    pub async fn evaluate_with_feed(
        &self,
        target: NaiveDate,
        now: DateTime<FixedOffset>,
        feed: &dyn HolidayFeed,
    ) -> DayVerdict {
        if let Some(verdict) = Self::calendar_verdict(target, now) {
            debug!("Day {} rejected before holiday lookup: {}", target, verdict);
            return verdict;
        }

        let holidays = self.load_holidays(feed).await;
        Self::evaluate(target, now, &holidays)
    }

    async fn load_holidays(&self, feed: &dyn HolidayFeed) -> Vec<HolidayMarker> {
        let text = match feed.fetch_holiday_text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Holiday check skipped, treating day as a working day: {}", e);
                return Vec::new();
            }
        };

        match self.parser.parse(&text) {
            Ok(markers) => markers,
            Err(e) => {
                warn!("Holiday check skipped, holiday text is unreadable: {}", e);
                Vec::new()
            }
        }
    }
}
