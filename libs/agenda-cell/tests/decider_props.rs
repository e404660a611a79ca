//! Property tests for the two-agenda slot rule.

mod common;

use proptest::prelude::*;

use agenda_cell::services::decider::{check_slot, list_open_slots};
use agenda_cell::{DayVerdict, Slot, SlotTally, SLOT_TIMES};
use common::{at, now, today, tuesday};

fn arb_slot() -> impl Strategy<Value = Slot> {
    (0..SLOT_TIMES.len()).prop_map(|index| Slot::parse(SLOT_TIMES[index]).unwrap())
}

fn arb_tally() -> impl Strategy<Value = SlotTally> {
    prop::collection::vec(0u32..8, SLOT_TIMES.len()).prop_map(|counts| {
        SLOT_TIMES
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(slot, count)| (*slot, count))
            .collect()
    })
}

proptest! {
    #[test]
    fn check_slot_matches_rule(slot in arb_slot(), primary in arb_tally(), secondary in arb_tally()) {
        let p = primary.count(slot.as_str()).min(5);
        let q = secondary.count(slot.as_str());
        let expected = p > 0 && (q == 2 || q == 3);

        prop_assert_eq!(check_slot(slot, &primary, &secondary), expected);
    }

    #[test]
    fn listing_is_ordered_unique_and_open(primary in arb_tally(), secondary in arb_tally()) {
        let open = list_open_slots(DayVerdict::Eligible, tuesday(), now(), &primary, &secondary).unwrap();

        prop_assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
        for slot in &open {
            prop_assert!(primary.count(slot.as_str()).min(5) > 0);
            prop_assert!(matches!(secondary.count(slot.as_str()), 2 | 3));
        }

        let expected: Vec<Slot> = Slot::all()
            .filter(|slot| check_slot(*slot, &primary, &secondary))
            .collect();
        prop_assert_eq!(open, expected);
    }

    #[test]
    fn today_never_lists_elapsed_slots(
        hour in 0u32..24,
        minute in 0u32..60,
        primary in arb_tally(),
        secondary in arb_tally(),
    ) {
        let clock = at(2025, 3, 10, hour, minute);
        let open = list_open_slots(DayVerdict::Eligible, today(), clock, &primary, &secondary).unwrap();

        for slot in open {
            prop_assert!(slot.minute_of_day() > hour * 60 + minute);
        }
    }

    #[test]
    fn ineligible_days_never_list(primary in arb_tally(), secondary in arb_tally()) {
        for verdict in [DayVerdict::Past, DayVerdict::Weekend, DayVerdict::Holiday] {
            prop_assert!(list_open_slots(verdict, tuesday(), now(), &primary, &secondary).is_err());
        }
    }
}
