//! Slot decisions over the two booking feeds.
//!
//! The primary agenda reports occupancy that is capped at
//! [`PRIMARY_CAPACITY_CEILING`]; a slot is primary-available only when the
//! capped count is above zero. The secondary agenda works as a capacity tier:
//! only a count of exactly 2 or 3 opens the slot. A slot is open when both
//! agendas agree.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use tracing::debug;

use crate::error::AgendaError;
use crate::models::{DayVerdict, Slot, SlotTally};

pub const PRIMARY_CAPACITY_CEILING: u32 = 5;
pub const SECONDARY_OPEN_TIERS: [u32; 2] = [2, 3];

pub fn clamp_primary(count: u32) -> u32 {
    count.min(PRIMARY_CAPACITY_CEILING)
}

pub fn is_primary_available(count: u32) -> bool {
    clamp_primary(count) > 0
}

pub fn is_secondary_available(count: u32) -> bool {
    SECONDARY_OPEN_TIERS.contains(&count)
}

/// Applies the two-agenda rule to one slot.
pub fn check_slot(slot: Slot, primary: &SlotTally, secondary: &SlotTally) -> bool {
    let key = slot.as_str();
    is_primary_available(primary.count(key)) && is_secondary_available(secondary.count(key))
}

/// True when `target` is today and the slot's start is at or before the
/// current minute.
pub fn has_elapsed(slot: Slot, target: NaiveDate, now: DateTime<FixedOffset>) -> bool {
    if target != now.date_naive() {
        return false;
    }
    let current_minute = now.hour() * 60 + now.minute();
    slot.minute_of_day() <= current_minute
}

/// [`check_slot`] guarded by the day verdict.
pub fn decide_slot(
    verdict: DayVerdict,
    slot: Slot,
    primary: &SlotTally,
    secondary: &SlotTally,
) -> Result<bool, AgendaError> {
    if !verdict.is_eligible() {
        return Err(AgendaError::DayNotBookable(verdict));
    }
    Ok(check_slot(slot, primary, secondary))
}

/// Open slots of an eligible day, in booking order.
pub fn list_open_slots(
    verdict: DayVerdict,
    target: NaiveDate,
    now: DateTime<FixedOffset>,
    primary: &SlotTally,
    secondary: &SlotTally,
) -> Result<Vec<Slot>, AgendaError> {
    if !verdict.is_eligible() {
        return Err(AgendaError::DayNotBookable(verdict));
    }

    let mut open = Vec::new();
    for slot in Slot::all() {
        if has_elapsed(slot, target, now) {
            debug!("Slot {} already passed today, skipping", slot);
            continue;
        }
        if check_slot(slot, primary, secondary) {
            open.push(slot);
        }
    }

    Ok(open)
}

/// Day-level capacity as seen by each agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCapacity {
    /// Sum of capped primary counts over the bookable slots.
    pub primary_places: u32,
    /// Bookable slots whose secondary count sits in an open tier.
    pub secondary_open_slots: u32,
}

pub fn day_capacity(primary: &SlotTally, secondary: &SlotTally) -> DayCapacity {
    Slot::all().fold(DayCapacity::default(), |mut capacity, slot| {
        capacity.primary_places += clamp_primary(primary.count(slot.as_str()));
        if is_secondary_available(secondary.count(slot.as_str())) {
            capacity.secondary_open_slots += 1;
        }
        capacity
    })
}
