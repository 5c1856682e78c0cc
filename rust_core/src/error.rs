//! Error types for conference scheduling.

/// Result type for scheduling operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for scheduling operations
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("there is not any talk in the list")]
    EmptyTalkList,

    #[error("invalid talk '{line}': talk time must be specified")]
    MalformedTalk { line: String },

    #[error("invalid talk time for '{line}': time must be in min or in lightning")]
    InvalidDurationUnit { line: String },

    #[error("unable to parse time '{token}' for talk '{line}'")]
    DurationParse { line: String, token: String },

    #[error("unable to schedule {unplaced} talk(s) within {days} conference day(s)")]
    UnschedulableConference { unplaced: usize, days: usize },

    #[error("configuration error: {0}")]
    Configuration(String),
}
