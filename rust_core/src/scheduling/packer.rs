//! Greedy session packing.
//!
//! A pass sweeps every candidate start position over the remaining talks
//! in original order and accumulates a session from each, keeping the
//! first accumulation that satisfies the session kind's validity rule.
//! Accepted talks are consumed for the rest of the pass; everything else
//! is handed back as the new remaining set.

use std::collections::HashSet;

use log::debug;

use crate::models::{
    Session, SessionKind, TalkArena, TalkId, MAX_SESSION_MINUTES, MORNING_SESSION_MINUTES,
};

/// Result of one packing pass.
pub struct PackOutcome {
    /// Accepted sessions, in the order they were found.
    pub sessions: Vec<Session>,
    /// Talks not consumed by this pass, still in original order.
    pub remaining: Vec<TalkId>,
}

/// Pack up to `requested_sessions` sessions of the given kind out of the
/// remaining talks.
///
/// The pass never fails: finding fewer sessions than requested simply
/// leaves more talks in the returned remaining set. The requested count is
/// compared for equality only after an acceptance, so a request of zero
/// does not cap the sweep.
pub fn pack_sessions(
    arena: &TalkArena,
    remaining: &[TalkId],
    requested_sessions: usize,
    kind: SessionKind,
) -> PackOutcome {
    let scan_cap = kind.scan_cap();
    let mut sessions: Vec<Session> = Vec::new();
    let mut consumed: HashSet<TalkId> = HashSet::new();

    for start in 0..remaining.len() {
        let mut picked: Vec<TalkId> = Vec::new();
        let mut total: u32 = 0;

        for &id in &remaining[start..] {
            if consumed.contains(&id) {
                continue;
            }
            let minutes = arena.get(id).duration_minutes;

            // A talk that cannot fit is passed over; the scan keeps going
            // in case a shorter talk further on still fits.
            if minutes > scan_cap || total + minutes > scan_cap {
                continue;
            }

            picked.push(id);
            total += minutes;

            match kind {
                SessionKind::Morning => {
                    if total == MORNING_SESSION_MINUTES {
                        break;
                    }
                }
                SessionKind::Evening => {
                    // A talk that tips the session past the ceiling is
                    // dropped again and closes the session outright.
                    if total > MAX_SESSION_MINUTES {
                        picked.pop();
                        total -= minutes;
                        break;
                    }
                }
            }
        }

        if kind.is_valid_total(total) {
            consumed.extend(picked.iter().copied());
            debug!(
                "accepted {:?} session of {} talk(s), {} min",
                kind,
                picked.len(),
                total
            );
            sessions.push(Session::new(kind, picked, total));
            if sessions.len() == requested_sessions {
                break;
            }
        }
    }

    let remaining: Vec<TalkId> = remaining
        .iter()
        .copied()
        .filter(|id| !consumed.contains(id))
        .collect();

    PackOutcome {
        sessions,
        remaining,
    }
}
