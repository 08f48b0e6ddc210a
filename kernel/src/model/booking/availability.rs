//! Date-range conflict detection for a place's bookings.
//!
//! A booking occupies the half-open interval
//! `[truncate_to_day(start), truncate_to_day(start) + nights days)`.
//! The time of day on the stored start is deliberately ignored: a stay
//! beginning at 14:00 still blocks its whole calendar day. Half-open
//! semantics let a checkout day double as the next guest's checkin day.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Normalize a timestamp to midnight of its calendar day.
pub fn truncate_to_day(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_time(NaiveTime::MIN)
}

fn interval(start: NaiveDateTime, nights: i32) -> (NaiveDateTime, NaiveDateTime) {
    let start0 = truncate_to_day(start);
    (start0, start0 + Duration::days(i64::from(nights)))
}

/// Whether the candidate stay overlaps any existing stay on the place.
///
/// The three relations below are the contract, kept spelled out rather
/// than collapsed into the equivalent `a.start < b.end && b.start < a.end`:
/// the boundary cases they encode (back-to-back stays do not conflict) are
/// pinned by the tests in this module.
pub fn conflicts(
    candidate_start: NaiveDateTime,
    candidate_nights: i32,
    existing: &[(NaiveDateTime, i32)],
) -> bool {
    let (book_start, book_end) = interval(candidate_start, candidate_nights);
    existing.iter().any(|&(start, nights)| {
        let (date_start, date_end) = interval(start, nights);
        // candidate starts during an existing stay
        if date_start <= book_start && book_start < date_end {
            return true;
        }
        // candidate ends during an existing stay
        if date_start < book_end && book_end <= date_end {
            return true;
        }
        // candidate surrounds an existing stay
        book_start <= date_start && date_start < book_end
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn empty_calendar_never_conflicts() {
        assert!(!conflicts(day(2024, 1, 10), 2, &[]));
    }

    #[test]
    fn start_during_existing_stay_conflicts() {
        // existing covers Jan 10-12; candidate starts Jan 11
        let existing = [(day(2024, 1, 10), 2)];
        assert!(conflicts(day(2024, 1, 11), 1, &existing));
    }

    #[test]
    fn end_during_existing_stay_conflicts() {
        // existing covers Jan 10-12; candidate Jan 8-11 ends inside it
        let existing = [(day(2024, 1, 10), 2)];
        assert!(conflicts(day(2024, 1, 8), 3, &existing));
    }

    #[test]
    fn surrounding_an_existing_stay_conflicts() {
        // existing covers Jan 10-11; candidate Jan 8-14 swallows it
        let existing = [(day(2024, 1, 10), 1)];
        assert!(conflicts(day(2024, 1, 8), 6, &existing));
    }

    #[test]
    fn checkout_day_is_free_for_the_next_checkin() {
        // existing covers Jan 10-12; candidate starts exactly on Jan 12
        let existing = [(day(2024, 1, 10), 2)];
        assert!(!conflicts(day(2024, 1, 12), 3, &existing));
    }

    #[test]
    fn candidate_ending_on_existing_checkin_day_is_free() {
        // candidate Jan 8-10 ends exactly when the existing stay begins
        let existing = [(day(2024, 1, 10), 2)];
        assert!(!conflicts(day(2024, 1, 8), 2, &existing));
    }

    #[test]
    fn same_start_day_conflicts_regardless_of_nights() {
        let existing = [(day(2024, 1, 10), 5)];
        assert!(conflicts(day(2024, 1, 10), 1, &existing));
        let existing = [(day(2024, 1, 10), 1)];
        assert!(conflicts(day(2024, 1, 10), 5, &existing));
    }

    #[test]
    fn time_of_day_is_ignored_on_both_sides() {
        // existing stored with an afternoon start still blocks the whole day
        let existing = [(at(2024, 3, 10, 14, 30, 0), 1)];
        assert!(conflicts(at(2024, 3, 10, 23, 59, 59), 1, &existing));
        // and the day after is free
        assert!(!conflicts(at(2024, 3, 11, 0, 0, 1), 1, &existing));
    }

    #[test]
    fn conflict_relation_is_commutative() {
        let pairs = [
            ((day(2024, 1, 10), 2), (day(2024, 1, 11), 1)),
            ((day(2024, 1, 10), 2), (day(2024, 1, 12), 3)),
            ((day(2024, 1, 8), 6), (day(2024, 1, 10), 1)),
            ((day(2024, 1, 1), 1), (day(2024, 2, 1), 1)),
            ((at(2024, 1, 10, 9, 0, 0), 3), (at(2024, 1, 12, 18, 0, 0), 2)),
        ];
        for ((a_start, a_nights), (b_start, b_nights)) in pairs {
            assert_eq!(
                conflicts(a_start, a_nights, &[(b_start, b_nights)]),
                conflicts(b_start, b_nights, &[(a_start, a_nights)]),
                "asymmetric verdict for {a_start} vs {b_start}"
            );
        }
    }

    #[test]
    fn scans_past_non_conflicting_entries() {
        let existing = [
            (day(2024, 1, 1), 2),
            (day(2024, 2, 1), 2),
            (day(2024, 3, 1), 2),
        ];
        assert!(conflicts(day(2024, 3, 2), 1, &existing));
        assert!(!conflicts(day(2024, 4, 1), 1, &existing));
    }
}
