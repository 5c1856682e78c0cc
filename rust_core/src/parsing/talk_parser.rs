//! Raw line to [`Talk`] conversion.

use log::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Talk;

const MIN_SUFFIX: &str = "min";
const LIGHTNING_SUFFIX: &str = "lightning";
const LIGHTNING_UNIT_MINUTES: u32 = 5;

/// Parse every input line into a talk, preserving input order.
///
/// Input order is semantically significant: it is the only tie-break the
/// session packer uses. An empty input collection is rejected outright.
pub fn parse_talks<S: AsRef<str>>(lines: &[S]) -> ScheduleResult<Vec<Talk>> {
    if lines.is_empty() {
        return Err(ScheduleError::EmptyTalkList);
    }
    let talks = lines
        .iter()
        .map(|line| parse_talk_line(line.as_ref()))
        .collect::<ScheduleResult<Vec<_>>>()?;
    debug!("parsed {} talk(s)", talks.len());
    Ok(talks)
}

/// Parse a single `<name> <duration-token>` line.
///
/// The split happens at the last space; everything before it is the name
/// (which must be non-blank), everything after is the duration token.
pub fn parse_talk_line(line: &str) -> ScheduleResult<Talk> {
    let split = line.rfind(' ').ok_or_else(|| ScheduleError::MalformedTalk {
        line: line.to_string(),
    })?;

    let name = &line[..split];
    if name.trim().is_empty() {
        return Err(ScheduleError::MalformedTalk {
            line: line.to_string(),
        });
    }

    let token = &line[split + 1..];
    let duration_minutes = parse_duration_token(line, token)?;
    Ok(Talk::new(line, name, duration_minutes))
}

fn parse_duration_token(line: &str, token: &str) -> ScheduleResult<u32> {
    if let Some(prefix) = token.strip_suffix(MIN_SUFFIX) {
        prefix.parse::<u32>().map_err(|_| ScheduleError::DurationParse {
            line: line.to_string(),
            token: token.to_string(),
        })
    } else if let Some(prefix) = token.strip_suffix(LIGHTNING_SUFFIX) {
        if prefix.is_empty() {
            // Bare "lightning" means a single 5-minute unit.
            Ok(LIGHTNING_UNIT_MINUTES)
        } else {
            prefix
                .parse::<u32>()
                .map(|units| units * LIGHTNING_UNIT_MINUTES)
                .map_err(|_| ScheduleError::DurationParse {
                    line: line.to_string(),
                    token: token.to_string(),
                })
        }
    } else {
        Err(ScheduleError::InvalidDurationUnit {
            line: line.to_string(),
        })
    }
}

/// Duration carried by a raw, unparsed line; 0 when the token is
/// unparseable.
///
/// This is the explicit sort key for the orchestrator's optional
/// pre-sort, which reorders the raw line collection before parsing.
/// Unparseable lines key to 0 and sink to the end of a descending sort;
/// the parser rejects them immediately afterwards.
pub fn duration_sort_key(line: &str) -> u32 {
    line.rfind(' ')
        .and_then(|split| token_minutes(&line[split + 1..]))
        .unwrap_or(0)
}

fn token_minutes(token: &str) -> Option<u32> {
    if let Some(prefix) = token.strip_suffix(MIN_SUFFIX) {
        prefix.parse().ok()
    } else if let Some(prefix) = token.strip_suffix(LIGHTNING_SUFFIX) {
        if prefix.is_empty() {
            Some(LIGHTNING_UNIT_MINUTES)
        } else {
            prefix
                .parse::<u32>()
                .ok()
                .map(|units| units * LIGHTNING_UNIT_MINUTES)
        }
    } else {
        None
    }
}
