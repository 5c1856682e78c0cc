//! Lays accepted sessions onto the fixed daily template.
//!
//! Every day follows the same shape: talks from 09:00, Lunch at whatever
//! time the morning session ends (12:00 whenever the session is full, and
//! morning sessions are always full), the evening session after lunch, and
//! a closing Networking Event.

use crate::models::{ScheduledTalk, ScheduledTrack, Session, SlotClock, TalkArena, TalkId};

pub const LUNCH_TITLE: &str = "Lunch";
pub const NETWORKING_TITLE: &str = "Networking Event";
pub const LUNCH_MINUTES: u32 = 60;
/// The networking slot's length only exists to keep the record shape
/// uniform; nothing is scheduled after it and its end time is discarded.
pub const NETWORKING_MINUTES: u32 = 60;

/// Render index-aligned morning/evening session lists into day tracks with
/// concrete clock times. Inputs are trusted to be valid; no session totals
/// are re-checked here.
pub fn render_timetable(
    arena: &TalkArena,
    morning_sessions: &[Session],
    evening_sessions: &[Session],
) -> Vec<ScheduledTrack> {
    morning_sessions
        .iter()
        .zip(evening_sessions)
        .enumerate()
        .map(|(day_index, (morning, evening))| {
            let mut clock = SlotClock::at_day_start();
            let mut slots = Vec::with_capacity(morning.len() + evening.len() + 2);

            for &id in morning.talks() {
                slots.push(stamp_talk(arena, id, &mut clock));
            }

            slots.push(ScheduledTalk {
                title: LUNCH_TITLE.to_string(),
                duration_minutes: LUNCH_MINUTES,
                starts_at: clock.stamp(LUNCH_MINUTES),
            });

            for &id in evening.talks() {
                slots.push(stamp_talk(arena, id, &mut clock));
            }

            slots.push(ScheduledTalk {
                title: NETWORKING_TITLE.to_string(),
                duration_minutes: NETWORKING_MINUTES,
                starts_at: clock.stamp(NETWORKING_MINUTES),
            });

            ScheduledTrack {
                day: day_index + 1,
                slots,
            }
        })
        .collect()
}

fn stamp_talk(arena: &TalkArena, id: TalkId, clock: &mut SlotClock) -> ScheduledTalk {
    let talk = arena.get(id);
    ScheduledTalk {
        title: talk.title.clone(),
        duration_minutes: talk.duration_minutes,
        starts_at: clock.stamp(talk.duration_minutes),
    }
}
