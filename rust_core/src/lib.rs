//! Conference track scheduling core.
//!
//! Turns an ordered list of raw talk descriptions (`"<name> <Nmin|Nlightning>"`)
//! into the minimal number of conference days, each holding an exactly
//! 180-minute morning session, lunch, a 180-to-240-minute evening session,
//! and a closing networking event, with concrete clock times for every
//! slot.
//!
//! Reading input lines and printing the result are the caller's job; the
//! crate consumes strings and produces a [`models::ConferenceSchedule`].
//!
//! ```
//! use ctm_rust::scheduling::ConferenceScheduler;
//!
//! let lines = [
//!     "Writing Fast Tests 60min",
//!     "Overdoing it in Python 45min",
//!     "Lua for the Masses 30min",
//!     "Common Ruby Errors 45min",
//!     "Accounting-Driven Development 45min",
//!     "Pair Programming vs Noise 45min",
//!     "Sick Code Smells 45min",
//!     "A World Without HackerNews 30min",
//!     "User Interface CSS in Apps 30min",
//!     "Rails for Python Developers lightning",
//! ];
//! let schedule = ConferenceScheduler::new().schedule(&lines)?;
//! assert_eq!(schedule.day_count(), 1);
//! # Ok::<(), ctm_rust::error::ScheduleError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod scheduling;

pub use config::SchedulerConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use models::{
    ConferenceSchedule, ScheduledTalk, ScheduledTrack, Session, SessionKind, Talk, TalkArena,
    TalkId,
};
pub use scheduling::ConferenceScheduler;
