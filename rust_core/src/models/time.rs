//! Clock-time bookkeeping for the rendered timetable.

use chrono::{Duration, NaiveTime};

/// Conference days open at 09:00.
pub fn day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time of day")
}

/// 12-hour slot label, e.g. `09:00AM`, matching the original timetable
/// output format.
pub fn format_slot_time(time: NaiveTime) -> String {
    time.format("%I:%M%p").to_string()
}

/// A day's running clock. Each slot is stamped with the current time and
/// the clock advances by the slot's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotClock {
    current: NaiveTime,
}

impl SlotClock {
    pub fn new(start: NaiveTime) -> Self {
        Self { current: start }
    }

    /// Clock positioned at the start of a conference day.
    pub fn at_day_start() -> Self {
        Self::new(day_start())
    }

    pub fn current(&self) -> NaiveTime {
        self.current
    }

    /// Returns the start time for a slot of the given length and advances
    /// the clock past it.
    pub fn stamp(&mut self, duration_minutes: u32) -> NaiveTime {
        let start = self.current;
        self.current = self.current + Duration::minutes(i64::from(duration_minutes));
        start
    }
}
