//! Second-chance placement of leftover talks.
//!
//! Talks the two packing passes could not place get one more chance:
//! evening sessions may grow past their initially packed total as long as
//! they stay within the 240-minute ceiling. Whatever still does not fit is
//! returned and dooms the run.

use std::collections::HashSet;

use log::debug;

use crate::models::{Session, TalkArena, TalkId};

/// Try to append every leftover talk to an evening session with room for
/// it, walking sessions and leftovers in original order.
///
/// Capacity is checked against the session's running total, so a session
/// never exceeds 240 minutes no matter how many leftovers it absorbs.
/// Returns the residual leftovers; non-empty means the conference cannot
/// be scheduled within the computed day budget.
pub fn reconcile_leftovers(
    arena: &TalkArena,
    leftovers: Vec<TalkId>,
    evening_sessions: &mut [Session],
) -> Vec<TalkId> {
    let mut leftovers = leftovers;
    if leftovers.is_empty() {
        return leftovers;
    }

    for session in evening_sessions.iter_mut() {
        let mut absorbed: HashSet<TalkId> = HashSet::new();

        for &id in &leftovers {
            let minutes = arena.get(id).duration_minutes;
            if minutes <= session.remaining_capacity() {
                session.push_talk(id, minutes);
                absorbed.insert(id);
            }
        }

        if !absorbed.is_empty() {
            debug!(
                "reconciled {} leftover talk(s) into an evening session, now {} min",
                absorbed.len(),
                session.total_minutes()
            );
            leftovers.retain(|id| !absorbed.contains(id));
        }
        if leftovers.is_empty() {
            break;
        }
    }

    leftovers
}
