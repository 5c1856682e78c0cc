//! Scheduler configuration file support.
//!
//! This module provides utilities for reading scheduler configuration
//! from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ScheduleError, ScheduleResult};

/// Scheduler configuration.
///
/// `sort_by_duration` enables the pre-sort of the raw talk lines by
/// descending duration before parsing; by default input order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub sort_by_duration: bool,
}

impl SchedulerConfig {
    /// Load scheduler configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::Configuration(format!("failed to read config file: {e}"))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse scheduler configuration from a TOML string.
    ///
    /// Deserialization goes through `serde_path_to_error` so a malformed
    /// file reports the offending key path.
    pub fn from_toml_str(content: &str) -> ScheduleResult<Self> {
        let deserializer = toml::Deserializer::new(content);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            ScheduleError::Configuration(format!("failed to parse config file: {e}"))
        })
    }
}
