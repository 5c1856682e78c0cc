//! Rendered schedule output: stamped talks, day tracks, and the full
//! conference schedule handed to the presentation layer.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::time::format_slot_time;

/// A talk (or synthetic break) placed at a concrete clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTalk {
    pub title: String,
    pub duration_minutes: u32,
    pub starts_at: NaiveTime,
}

impl ScheduledTalk {
    /// 12-hour display label for the slot start, e.g. `09:00AM`.
    pub fn start_label(&self) -> String {
        format_slot_time(self.starts_at)
    }
}

/// One conference day: morning talks, Lunch, evening talks, Networking
/// Event, in timetable order. Tracks are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTrack {
    pub day: usize,
    pub slots: Vec<ScheduledTalk>,
}

impl std::fmt::Display for ScheduledTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Track {}:", self.day)?;
        for slot in &self.slots {
            writeln!(f, "{} {}", slot.start_label(), slot.title)?;
        }
        Ok(())
    }
}

/// The finished day-partitioned schedule.
///
/// `checksum` is the SHA-256 hex digest of the raw input lines; two runs
/// over the same input produce the same checksum and the same tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceSchedule {
    pub checksum: String,
    pub tracks: Vec<ScheduledTrack>,
}

impl ConferenceSchedule {
    /// Number of scheduled days.
    pub fn day_count(&self) -> usize {
        self.tracks.len()
    }

    /// JSON rendering of the schedule for downstream consumers.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for ConferenceSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{track}")?;
        }
        Ok(())
    }
}
