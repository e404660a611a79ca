use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::AgendaError;

/// Half-hour markers that can be booked, in booking order.
pub const SLOT_TIMES: [&str; 19] = [
    "07:30", "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00",
    "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
];

const FIRST_SLOT_MINUTE: u32 = 7 * 60 + 30;
const SLOT_LENGTH_MINUTES: u32 = 30;

pub const DAY_FORMAT: &str = "%d/%m/%Y";

// ==============================================================================
// SLOTS
// ==============================================================================

/// One of the fixed half-hour slots. Ordering follows the booking day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_TIMES.len() as u8).map(Slot)
    }

    /// Exact `HH:MM` match against the fixed sequence.
    pub fn parse(text: &str) -> Option<Slot> {
        SLOT_TIMES
            .iter()
            .position(|candidate| *candidate == text)
            .map(|index| Slot(index as u8))
    }

    pub fn as_str(&self) -> &'static str {
        SLOT_TIMES[self.0 as usize]
    }

    pub fn position(&self) -> usize {
        self.0 as usize
    }

    pub fn minute_of_day(&self) -> u32 {
        FIRST_SLOT_MINUTE + SLOT_LENGTH_MINUTES * self.0 as u32
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Slot {
    type Error = AgendaError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Slot::parse(text).ok_or_else(|| {
            AgendaError::Format(format!(
                "'{}' is not a bookable time. Use one of {} to {} in 30 minute steps.",
                text,
                SLOT_TIMES[0],
                SLOT_TIMES[SLOT_TIMES.len() - 1]
            ))
        })
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ==============================================================================
// DAYS
// ==============================================================================

fn day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("day pattern compiles"))
}

/// Parses a `dd/mm/yyyy` day.
pub fn parse_day(text: &str) -> Result<NaiveDate, AgendaError> {
    let invalid = || AgendaError::Format(format!("Invalid date '{}'. Use the format dd/mm/yyyy.", text));

    if !day_pattern().is_match(text) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DAY_FORMAT).map_err(|_| invalid())
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub mod day_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_day(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_day(&text).map_err(serde::de::Error::custom)
    }
}

// ==============================================================================
// FEED DATA
// ==============================================================================

/// One reservation observed on an upstream agenda. The slot is kept as the
/// raw `HH:MM` text so markers outside the bookable sequence still tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(with = "day_format")]
    pub date: NaiveDate,
    pub slot: String,
}

impl BookingRecord {
    pub fn new(date: NaiveDate, slot: impl Into<String>) -> Self {
        Self {
            date,
            slot: slot.into(),
        }
    }
}

/// Occupancy per slot for one feed and one day. Absent slots count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTally {
    counts: HashMap<String, u32>,
}

impl SlotTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, slot: &str) {
        *self.counts.entry(slot.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, slot: &str) -> u32 {
        self.counts.get(slot).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(slot, count)| (slot.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SlotTally {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            counts: iter
                .into_iter()
                .map(|(slot, count)| (slot.into(), count))
                .collect(),
        }
    }
}

/// A recurring (month, day) holiday with no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayMarker {
    pub month: u32,
    pub day: u32,
}

impl HolidayMarker {
    pub fn matches(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        date.month() == self.month && date.day() == self.day
    }
}

// ==============================================================================
// RESULTS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayVerdict {
    Eligible,
    Past,
    Weekend,
    Holiday,
}

impl DayVerdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, DayVerdict::Eligible)
    }

    pub fn reason(&self) -> &'static str {
        match self {
            DayVerdict::Eligible => "eligible",
            DayVerdict::Past => "past",
            DayVerdict::Weekend => "weekend",
            DayVerdict::Holiday => "holiday",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DayVerdict::Eligible => "Requested day is open for booking",
            DayVerdict::Past => "Requested day is in the past",
            DayVerdict::Weekend => "Requested day falls on a weekend",
            DayVerdict::Holiday => "Bookings are not accepted on holidays",
        }
    }
}

impl fmt::Display for DayVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// An open (day, slot) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenSlot {
    #[serde(serialize_with = "day_format::serialize")]
    pub date: NaiveDate,
    pub time: Slot,
}

// ==============================================================================
// HTTP TYPES
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct AgendaQuery {
    pub data: Option<String>,
    pub hora: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SlotCheckResponse {
    #[serde(serialize_with = "day_format::serialize")]
    pub date: NaiveDate,
    pub time: Slot,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct OpenSlotsResponse {
    #[serde(serialize_with = "day_format::serialize")]
    pub date: NaiveDate,
    pub available_slots: Vec<OpenSlot>,
    pub total_slots: usize,
}
