//! The conference scheduling orchestrator.
//!
//! Sequences the whole run: checksum → optional raw-line pre-sort →
//! parse → day budget → morning pack → evening pack → reconcile →
//! render. Any component failure aborts the run; there is no partial
//! schedule.

use log::{debug, info, warn};

use crate::config::SchedulerConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ConferenceSchedule, Session, SessionKind, TalkArena};
use crate::parsing::talk_parser::{duration_sort_key, parse_talks};
use crate::scheduling::packer::pack_sessions;
use crate::scheduling::reconciler::reconcile_leftovers;
use crate::scheduling::timetable::render_timetable;

/// Minutes of talk material that fill one conference day
/// (180-minute morning + up-to-240-minute evening, budgeted at 360).
pub const DAY_MINUTES: u32 = 360;

/// Single entry point for turning raw talk lines into a day-partitioned
/// schedule.
#[derive(Debug, Clone, Default)]
pub struct ConferenceScheduler {
    config: SchedulerConfig,
}

impl ConferenceScheduler {
    /// Scheduler with the default configuration (input order preserved).
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Schedule the given raw talk lines.
    ///
    /// The day budget is fixed up front as total talk minutes / 360; if
    /// the greedy passes and the reconciler cannot place every talk within
    /// that many days the run fails with
    /// [`ScheduleError::UnschedulableConference`].
    pub fn schedule<S: AsRef<str>>(&self, raw_lines: &[S]) -> ScheduleResult<ConferenceSchedule> {
        if raw_lines.is_empty() {
            return Err(ScheduleError::EmptyTalkList);
        }

        let mut lines: Vec<String> = raw_lines
            .iter()
            .map(|line| line.as_ref().to_string())
            .collect();
        let checksum = compute_input_checksum(&lines);

        if self.config.sort_by_duration {
            // The pre-sort reorders the raw, unparsed lines; the key
            // function reads the duration token off each line directly.
            lines.sort_by(|a, b| duration_sort_key(b).cmp(&duration_sort_key(a)));
            debug!("pre-sorted {} line(s) by descending duration", lines.len());
        }

        let arena = TalkArena::new(parse_talks(&lines)?);
        let total_minutes = arena.total_minutes();
        let total_days = (total_minutes / DAY_MINUTES) as usize;
        info!(
            "scheduling {} talk(s), {} min total, into {} day(s)",
            arena.len(),
            total_minutes,
            total_days
        );

        let morning = pack_sessions(&arena, &arena.ids(), total_days, SessionKind::Morning);
        let evening = pack_sessions(&arena, &morning.remaining, total_days, SessionKind::Evening);

        let mut evening_sessions = evening.sessions;
        let residual = reconcile_leftovers(&arena, evening.remaining, &mut evening_sessions);
        if !residual.is_empty() {
            warn!(
                "{} talk(s) left unplaced after reconciliation",
                residual.len()
            );
            return Err(ScheduleError::UnschedulableConference {
                unplaced: residual.len(),
                days: total_days,
            });
        }

        // Every rendered day needs one morning and one evening session.
        // Talks stranded in sessions that cannot be paired into a whole
        // day count as unplaced.
        let paired_days = morning.sessions.len().min(evening_sessions.len());
        let stranded = count_talks(&morning.sessions[paired_days..])
            + count_talks(&evening_sessions[paired_days..]);
        if stranded > 0 {
            warn!("{stranded} talk(s) stranded in unpairable sessions");
            return Err(ScheduleError::UnschedulableConference {
                unplaced: stranded,
                days: total_days,
            });
        }

        let tracks = render_timetable(&arena, &morning.sessions, &evening_sessions);
        info!("scheduled {} track(s)", tracks.len());
        Ok(ConferenceSchedule { checksum, tracks })
    }
}

fn count_talks(sessions: &[Session]) -> usize {
    sessions.iter().map(Session::len).sum()
}

/// SHA-256 hex digest of the raw input lines, the schedule's identity key.
fn compute_input_checksum(lines: &[String]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
