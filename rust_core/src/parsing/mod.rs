//! Parsers for raw talk-description input.
//!
//! The input convention is one talk per line, `<name> <duration-token>`,
//! where the duration token is either `<n>min` (minutes) or
//! `<n>lightning` (5-minute units, `lightning` alone meaning one unit).
//!
//! # Example
//!
//! ```
//! use ctm_rust::parsing::talk_parser::parse_talk_line;
//!
//! let talk = parse_talk_line("Common Ruby Errors 45min").unwrap();
//! assert_eq!(talk.name, "Common Ruby Errors");
//! assert_eq!(talk.duration_minutes, 45);
//! ```

pub mod talk_parser;


pub use talk_parser::{parse_talk_line, parse_talks};
