pub mod clock;
pub mod day_gate;
pub mod decider;
pub mod engine;
pub mod feeds;
pub mod holidays;
pub mod tally;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day_gate::DayGate;
pub use engine::AvailabilityEngine;
pub use feeds::{BookingFeed, ExportBookingFeed, HolidayFeed, ResourceHolidayFeed};
pub use holidays::DateIntervalParser;
