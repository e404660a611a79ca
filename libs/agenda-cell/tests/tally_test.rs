mod common;

use agenda_cell::services::tally::aggregate;
use agenda_cell::BookingRecord;
use common::{records, tuesday, day};

#[test]
fn test_counts_only_the_target_day() {
    let mut input = records(tuesday(), &[("09:00", 2), ("10:00", 1)]);
    input.extend(records(day(2025, 3, 12), &[("09:00", 4)]));
    input.extend(records(day(2024, 3, 11), &[("09:00", 1)]));

    let tally = aggregate(&input, tuesday());

    assert_eq!(tally.count("09:00"), 2);
    assert_eq!(tally.count("10:00"), 1);
    assert_eq!(tally.len(), 2);
}

#[test]
fn test_absent_slots_are_zero_and_not_stored() {
    let tally = aggregate(&records(tuesday(), &[("08:00", 1)]), tuesday());

    assert_eq!(tally.count("16:30"), 0);
    assert_eq!(tally.len(), 1);
}

#[test]
fn test_slots_outside_the_sequence_are_still_counted() {
    let input = vec![
        BookingRecord::new(tuesday(), "09:15"),
        BookingRecord::new(tuesday(), "09:15"),
        BookingRecord::new(tuesday(), "18:00"),
    ];

    let tally = aggregate(&input, tuesday());

    assert_eq!(tally.count("09:15"), 2);
    assert_eq!(tally.count("18:00"), 1);
}

#[test]
fn test_no_records_gives_empty_tally() {
    assert!(aggregate(&[], tuesday()).is_empty());
}

#[test]
fn test_other_days_only_gives_empty_tally() {
    let input = records(day(2025, 3, 12), &[("09:00", 3)]);
    assert!(aggregate(&input, tuesday()).is_empty());
}
