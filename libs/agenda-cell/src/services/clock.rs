use chrono::{DateTime, FixedOffset, Utc};

/// Seconds west of UTC for the service's civil time (UTC-3).
pub const SERVICE_UTC_OFFSET_WEST_SECS: i32 = 3 * 60 * 60;

pub fn service_offset() -> FixedOffset {
    FixedOffset::west_opt(SERVICE_UTC_OFFSET_WEST_SECS).expect("UTC-3 is a valid offset")
}

/// Source of "now" for day and slot decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&service_offset())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant: instant.with_timezone(&service_offset()),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
