//! Bulk availability planning: turns one working-shift declaration into
//! the list of fixed-length slots to create.

use shared::{CreateAvailabilityRequest, DayOfWeek, TimeOfDay};
use thiserror::Error;

/// Slot lengths offered by the generator form, in minutes.
pub const SLOT_DURATIONS: [u16; 4] = [30, 45, 60, 90];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShiftError {
    #[error("Fill in both the start and end time")]
    MissingFields,
    #[error("End time must be after the start time")]
    EndBeforeStart,
    #[error("The shift is shorter than one slot")]
    ShiftTooShort,
    #[error("Times must be valid HH:MM values")]
    InvalidTime,
}

/// Validate a shift declaration and expand it into create-requests, one
/// per slot. All checks run before anything is emitted; a failed check
/// means nothing gets submitted.
///
/// The walk stops as soon as the next slot would cross the end of the
/// shift, so a trailing remainder shorter than one slot is dropped rather
/// than rounded or emitted short. That boundary is intentional.
pub fn plan_shift(
    day_of_week: DayOfWeek,
    start_time: &str,
    end_time: &str,
    duration_minutes: u16,
) -> Result<Vec<CreateAvailabilityRequest>, ShiftError> {
    if start_time.is_empty() || end_time.is_empty() {
        return Err(ShiftError::MissingFields);
    }
    let start: TimeOfDay = start_time.parse().map_err(|_| ShiftError::InvalidTime)?;
    let end: TimeOfDay = end_time.parse().map_err(|_| ShiftError::InvalidTime)?;
    if start >= end {
        return Err(ShiftError::EndBeforeStart);
    }
    if end.total_minutes() - start.total_minutes() < duration_minutes {
        return Err(ShiftError::ShiftTooShort);
    }

    let end_min = end.total_minutes();
    let mut current = start.total_minutes();
    let mut slots = Vec::new();
    while current + duration_minutes <= end_min {
        // Both bounds stay at or under end_min <= 23:59, so the
        // conversions cannot fail
        let slot_start = TimeOfDay::from_minutes(current).ok_or(ShiftError::InvalidTime)?;
        let slot_end =
            TimeOfDay::from_minutes(current + duration_minutes).ok_or(ShiftError::InvalidTime)?;
        slots.push(CreateAvailabilityRequest {
            day_of_week,
            start_time: slot_start,
            end_time: slot_end,
        });
        current += duration_minutes;
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(slots: &[CreateAvailabilityRequest]) -> Vec<(String, String)> {
        slots
            .iter()
            .map(|s| (s.start_time.to_string(), s.end_time.to_string()))
            .collect()
    }

    #[test]
    fn test_shift_expands_into_contiguous_slots() {
        let slots = plan_shift(DayOfWeek::Monday, "08:00", "09:40", 30).unwrap();
        assert_eq!(
            times(&slots),
            vec![
                ("08:00".into(), "08:30".into()),
                ("08:30".into(), "09:00".into()),
                ("09:00".into(), "09:30".into()),
            ]
        );
        // The trailing 10 minutes are dropped, not emitted short
        assert!(slots.iter().all(|s| s.day_of_week == DayOfWeek::Monday));
    }

    #[test]
    fn test_slot_count_matches_floor_of_shift_over_duration() {
        for (start, end, duration, expected) in [
            ("08:00", "12:00", 30, 8),
            ("08:00", "12:00", 45, 5),
            ("08:00", "12:00", 60, 4),
            ("08:00", "12:00", 90, 2),
            ("07:15", "07:45", 30, 1),
            ("00:00", "23:59", 90, 15),
        ] {
            let slots = plan_shift(DayOfWeek::Tuesday, start, end, duration).unwrap();
            assert_eq!(slots.len(), expected, "{start}-{end} @ {duration}");

            // Contiguous, non-overlapping, ascending, last end within shift
            for pair in slots.windows(2) {
                assert_eq!(pair[0].end_time, pair[1].start_time);
            }
            let shift_end: TimeOfDay = end.parse().unwrap();
            assert!(slots.last().unwrap().end_time <= shift_end);
        }
    }

    #[test]
    fn test_shift_shorter_than_one_slot_is_rejected() {
        // Not a silent empty result
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "08:00", "08:20", 30),
            Err(ShiftError::ShiftTooShort)
        );
    }

    #[test]
    fn test_missing_and_inverted_times_are_rejected() {
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "", "12:00", 30),
            Err(ShiftError::MissingFields)
        );
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "08:00", "", 30),
            Err(ShiftError::MissingFields)
        );
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "12:00", "08:00", 30),
            Err(ShiftError::EndBeforeStart)
        );
        // Equal bounds count as inverted
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "08:00", "08:00", 30),
            Err(ShiftError::EndBeforeStart)
        );
    }

    #[test]
    fn test_unparseable_times_are_rejected() {
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "99:99", "12:00", 30),
            Err(ShiftError::InvalidTime)
        );
        assert_eq!(
            plan_shift(DayOfWeek::Monday, "08:0", "12:00", 30),
            Err(ShiftError::InvalidTime)
        );
    }

    #[test]
    fn test_planning_twice_yields_two_identical_batches() {
        // There is deliberately no dedup state between submissions: the
        // same shift submitted twice produces two independent batches.
        let first = plan_shift(DayOfWeek::Friday, "09:00", "11:00", 60).unwrap();
        let second = plan_shift(DayOfWeek::Friday, "09:00", "11:00", 60).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
