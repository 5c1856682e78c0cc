//! Sessions: ordered groups of talks filling one slot of a conference day.

use serde::{Deserialize, Serialize};

use super::talk::TalkId;

/// Exact fill required of a morning session, in minutes (09:00 to 12:00).
pub const MORNING_SESSION_MINUTES: u32 = 180;

/// Hard ceiling of an evening session, in minutes (13:00 to 17:00).
pub const MAX_SESSION_MINUTES: u32 = 240;

/// Which slot of the day a session fills, and therefore which packing
/// policy applies to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Morning,
    Evening,
}

impl SessionKind {
    /// Ceiling the packer enforces while scanning: a talk is passed over
    /// when it alone, or the running total with it, would exceed this.
    pub fn scan_cap(&self) -> u32 {
        match self {
            SessionKind::Morning => MORNING_SESSION_MINUTES,
            SessionKind::Evening => MAX_SESSION_MINUTES,
        }
    }

    /// Whether a finished accumulation is an acceptable session.
    /// Morning sessions must land on 180 exactly; evening sessions may
    /// close anywhere in 180..=240.
    pub fn is_valid_total(&self, total_minutes: u32) -> bool {
        match self {
            SessionKind::Morning => total_minutes == MORNING_SESSION_MINUTES,
            SessionKind::Evening => {
                total_minutes >= MORNING_SESSION_MINUTES
                    && total_minutes <= MAX_SESSION_MINUTES
            }
        }
    }
}

/// An accepted group of talks for one slot of one day, in packing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub kind: SessionKind,
    talks: Vec<TalkId>,
    total_minutes: u32,
}

impl Session {
    pub fn new(kind: SessionKind, talks: Vec<TalkId>, total_minutes: u32) -> Self {
        Self {
            kind,
            talks,
            total_minutes,
        }
    }

    pub fn talks(&self) -> &[TalkId] {
        &self.talks
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    /// Append a talk after acceptance (reconciliation path). The caller is
    /// responsible for checking capacity first.
    pub fn push_talk(&mut self, id: TalkId, duration_minutes: u32) {
        self.talks.push(id);
        self.total_minutes += duration_minutes;
    }

    /// Minutes still available under the evening ceiling.
    pub fn remaining_capacity(&self) -> u32 {
        MAX_SESSION_MINUTES.saturating_sub(self.total_minutes)
    }
}
