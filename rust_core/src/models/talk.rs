//! Talk records and the arena that owns them.

use serde::{Deserialize, Serialize};

/// Index of a talk inside the orchestrator's [`TalkArena`].
///
/// Packing and reconciliation hand ordered sets of these around instead of
/// flagging talks in place, so consumption state is always explicit.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TalkId(pub usize);

impl std::fmt::Display for TalkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for TalkId {
    fn from(v: usize) -> Self {
        TalkId(v)
    }
}

impl TalkId {
    pub fn value(&self) -> usize {
        self.0
    }
}

/// A single parsed talk.
///
/// `title` is the original raw line and serves as the stable display key;
/// `name` is everything before the trailing duration token, kept untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    pub name: String,
    pub duration_minutes: u32,
}

impl Talk {
    pub fn new(
        title: impl Into<String>,
        name: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            title: title.into(),
            name: name.into(),
            duration_minutes,
        }
    }
}

/// Ordered, append-only collection of every parsed talk.
///
/// Created once per scheduling run; talks are never removed. All other
/// components reference talks by [`TalkId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkArena {
    talks: Vec<Talk>,
}

impl TalkArena {
    pub fn new(talks: Vec<Talk>) -> Self {
        Self { talks }
    }

    pub fn get(&self, id: TalkId) -> &Talk {
        &self.talks[id.0]
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Talk> {
        self.talks.iter()
    }

    /// Every talk id, in original input order.
    pub fn ids(&self) -> Vec<TalkId> {
        (0..self.talks.len()).map(TalkId).collect()
    }

    /// Sum of the durations of the given talks, in minutes.
    pub fn total_minutes_of(&self, ids: &[TalkId]) -> u32 {
        ids.iter().map(|&id| self.get(id).duration_minutes).sum()
    }

    /// Sum of the durations of every talk in the arena, in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.talks.iter().map(|t| t.duration_minutes).sum()
    }
}
