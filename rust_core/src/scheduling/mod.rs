//! The scheduling pipeline: session packing, leftover reconciliation,
//! timetable rendering, and the orchestrator that sequences them.
//!
//! # Modules
//!
//! - [`packer`]: greedy grouping of unscheduled talks into morning
//!   (exact 180-minute) and evening (180..=240-minute) sessions
//! - [`reconciler`]: second-chance placement of leftover talks into
//!   evening sessions with spare capacity
//! - [`timetable`]: lays accepted sessions onto the fixed daily template,
//!   stamping clock times
//! - [`pipeline`]: the [`ConferenceScheduler`](pipeline::ConferenceScheduler)
//!   entry point

pub mod packer;
pub mod pipeline;
pub mod reconciler;
pub mod timetable;


pub use pipeline::ConferenceScheduler;
