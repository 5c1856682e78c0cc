//! End-to-end tests for the full scheduling pipeline.
//!
//! These tests drive the orchestrator the way an external caller would:
//! raw lines in, day-partitioned schedule (or typed error) out.

use anyhow::Result;
use chrono::NaiveTime;

use ctm_rust::scheduling::ConferenceScheduler;
use ctm_rust::{ConferenceSchedule, ScheduleError, SchedulerConfig};

// ==================== Helper Functions ====================

/// The well-known 19-talk conference input; schedules into exactly 2 days.
fn conference_lines() -> Vec<&'static str> {
    vec![
        "Writing Fast Tests Against Enterprise Rails 60min",
        "Overdoing it in Python 45min",
        "Lua for the Masses 30min",
        "Ruby Errors from Mismatched Gem Versions 45min",
        "Common Ruby Errors 45min",
        "Rails for Python Developers lightning",
        "Communicating Over Distance 60min",
        "Accounting-Driven Development 45min",
        "Woah 30min",
        "Sick Code Smells 45min",
        "A World Without HackerNews 30min",
        "User Interface CSS in Rails Apps 30min",
        "Clojure Ate Scala (on my project) 45min",
        "Programming in the Boondocks of Seattle 30min",
        "Ruby on Rails: Why We Should Move On 60min",
        "Clojure Made Simple 30min",
        "Ruby on Rails Legacy App Maintenance 60min",
        "A Deep Dive into HTML5 Canvas 30min",
        "Rust vs. Scala in Enterprise Apps 45min",
    ]
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn schedule_default(lines: &[&str]) -> Result<ConferenceSchedule, ScheduleError> {
    ConferenceScheduler::new().schedule(lines)
}

/// (starts_at, title) pairs of one track, for compact assertions.
fn slot_pairs(schedule: &ConferenceSchedule, track: usize) -> Vec<(NaiveTime, &str)> {
    schedule.tracks[track]
        .slots
        .iter()
        .map(|slot| (slot.starts_at, slot.title.as_str()))
        .collect()
}

// ==================== Full Pipeline ====================

#[test]
fn test_conference_schedules_into_two_tracks() {
    let schedule = schedule_default(&conference_lines()).unwrap();
    assert_eq!(schedule.day_count(), 2);
}

#[test]
fn test_first_track_timetable_exactly() {
    let schedule = schedule_default(&conference_lines()).unwrap();
    let expected = vec![
        (t(9, 0), "Writing Fast Tests Against Enterprise Rails 60min"),
        (t(10, 0), "Overdoing it in Python 45min"),
        (t(10, 45), "Lua for the Masses 30min"),
        (t(11, 15), "Ruby Errors from Mismatched Gem Versions 45min"),
        (t(12, 0), "Lunch"),
        (t(13, 0), "Common Ruby Errors 45min"),
        (t(13, 45), "Rails for Python Developers lightning"),
        (t(13, 50), "A World Without HackerNews 30min"),
        (t(14, 20), "User Interface CSS in Rails Apps 30min"),
        (t(14, 50), "Clojure Ate Scala (on my project) 45min"),
        (t(15, 35), "Programming in the Boondocks of Seattle 30min"),
        (t(16, 5), "Clojure Made Simple 30min"),
        (t(16, 35), "Networking Event"),
    ];
    assert_eq!(slot_pairs(&schedule, 0), expected);
}

#[test]
fn test_second_track_timetable_exactly() {
    let schedule = schedule_default(&conference_lines()).unwrap();
    let expected = vec![
        (t(9, 0), "Communicating Over Distance 60min"),
        (t(10, 0), "Accounting-Driven Development 45min"),
        (t(10, 45), "Woah 30min"),
        (t(11, 15), "Sick Code Smells 45min"),
        (t(12, 0), "Lunch"),
        (t(13, 0), "Ruby on Rails: Why We Should Move On 60min"),
        (t(14, 0), "Ruby on Rails Legacy App Maintenance 60min"),
        (t(15, 0), "A Deep Dive into HTML5 Canvas 30min"),
        (t(15, 30), "Rust vs. Scala in Enterprise Apps 45min"),
        (t(16, 15), "Networking Event"),
    ];
    assert_eq!(slot_pairs(&schedule, 1), expected);
}

#[test]
fn test_schedule_partitions_the_input() {
    let lines = conference_lines();
    let schedule = schedule_default(&lines).unwrap();

    let mut scheduled_titles: Vec<&str> = schedule
        .tracks
        .iter()
        .flat_map(|track| track.slots.iter())
        .map(|slot| slot.title.as_str())
        .filter(|&title| title != "Lunch" && title != "Networking Event")
        .collect();
    scheduled_titles.sort_unstable();

    let mut input_titles = lines.clone();
    input_titles.sort_unstable();
    assert_eq!(scheduled_titles, input_titles);
}

#[test]
fn test_every_track_has_one_lunch_and_one_networking_event() {
    let schedule = schedule_default(&conference_lines()).unwrap();
    for track in &schedule.tracks {
        let lunches = track.slots.iter().filter(|s| s.title == "Lunch").count();
        assert_eq!(lunches, 1);
        assert_eq!(track.slots.last().unwrap().title, "Networking Event");
        assert_eq!(track.slots.first().unwrap().starts_at, t(9, 0));
    }
}

#[test]
fn test_session_sums_hold_after_reconciliation() {
    let schedule = schedule_default(&conference_lines()).unwrap();
    for track in &schedule.tracks {
        let lunch_index = track
            .slots
            .iter()
            .position(|s| s.title == "Lunch")
            .expect("every track has a lunch slot");

        let morning: u32 = track.slots[..lunch_index]
            .iter()
            .map(|s| s.duration_minutes)
            .sum();
        assert_eq!(morning, 180);

        let evening: u32 = track.slots[lunch_index + 1..track.slots.len() - 1]
            .iter()
            .map(|s| s.duration_minutes)
            .sum();
        assert!((180..=240).contains(&evening), "evening was {evening} min");
    }
}

#[test]
fn test_rerun_yields_identical_schedule() {
    let lines = conference_lines();
    let scheduler = ConferenceScheduler::new();
    let first = scheduler.schedule(&lines).unwrap();
    let second = scheduler.schedule(&lines).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sorted_mode_schedules_longest_talks_first() {
    let config = SchedulerConfig {
        sort_by_duration: true,
    };
    let schedule = ConferenceScheduler::with_config(config)
        .schedule(&conference_lines())
        .unwrap();

    assert_eq!(schedule.day_count(), 2);
    let first = &schedule.tracks[0].slots[0];
    assert_eq!(first.duration_minutes, 60);
    // The sort is stable, so the first 60-minute line of the input leads.
    assert_eq!(
        first.title,
        "Writing Fast Tests Against Enterprise Rails 60min"
    );
}

// ==================== Failure Paths ====================

#[test]
fn test_greedy_shortfall_fails_as_unschedulable() {
    // Without the final 45-minute talk the evening pass can only assemble
    // one session and three talks (150 minutes) have nowhere to go, even
    // though 725 minutes nominally fit the 2-day budget.
    let mut lines = conference_lines();
    lines.pop();
    let err = schedule_default(&lines).unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::UnschedulableConference {
            unplaced: 3,
            days: 2
        }
    ));
}

#[test]
fn test_malformed_line_aborts_without_partial_schedule() {
    let mut lines = conference_lines();
    lines[3] = "NoDurationHere";
    let err = schedule_default(&lines).unwrap_err();
    assert!(matches!(err, ScheduleError::MalformedTalk { .. }));
}

#[test]
fn test_empty_input_fails() {
    let err = schedule_default(&[]).unwrap_err();
    assert!(matches!(err, ScheduleError::EmptyTalkList));
}

// ==================== Output Formats ====================

#[test]
fn test_display_matches_original_console_layout() {
    let schedule = schedule_default(&conference_lines()).unwrap();
    let rendered = schedule.to_string();

    assert!(rendered.starts_with("Track 1:\n09:00AM Writing Fast Tests Against Enterprise Rails 60min\n"));
    assert!(rendered.contains("12:00PM Lunch\n"));
    assert!(rendered.contains("\nTrack 2:\n"));
    assert!(rendered.contains("01:00PM Ruby on Rails: Why We Should Move On 60min\n"));
    assert!(rendered.ends_with("04:15PM Networking Event\n"));
}

#[test]
fn test_schedule_round_trips_through_json() -> Result<()> {
    let schedule = schedule_default(&conference_lines()).unwrap();
    let json = schedule.to_json_string()?;
    let decoded: ConferenceSchedule = serde_json::from_str(&json)?;
    assert_eq!(decoded, schedule);
    Ok(())
}

#[test]
fn test_config_file_drives_the_scheduler() -> Result<()> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "sort_by_duration = true")?;
    let config = SchedulerConfig::from_file(file.path())?;

    let schedule = ConferenceScheduler::with_config(config).schedule(&conference_lines())?;
    assert_eq!(schedule.tracks[0].slots[0].duration_minutes, 60);
    Ok(())
}
