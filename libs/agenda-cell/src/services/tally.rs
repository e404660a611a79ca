use chrono::NaiveDate;
use tracing::debug;

use crate::models::{BookingRecord, SlotTally};

/// Counts the records that fall exactly on `target`, per slot text.
pub fn aggregate(records: &[BookingRecord], target: NaiveDate) -> SlotTally {
    let mut tally = SlotTally::new();

    for record in records.iter().filter(|record| record.date == target) {
        tally.increment(&record.slot);
    }

    debug!(
        "Tallied {} of {} records into {} slots for {}",
        tally.iter().map(|(_, count)| count as usize).sum::<usize>(),
        records.len(),
        tally.len(),
        target
    );
    tally
}
