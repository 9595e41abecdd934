//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::clearup::{ClearUpConfig, Retention};
use crate::ltop::LtopConfig;

/// Upper bound for `[processing].workers`.
pub const MAX_WORKERS: usize = 64;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Station and control-point identifiers
    #[serde(default)]
    pub identifiers: ClearUpConfig,
    /// Default retention flags for `clear-up`
    #[serde(default)]
    pub retention: Retention,
    #[serde(default)]
    pub ltop: LtopConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Batch processing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Worker threads for multi-file runs; unset means one per CPU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        let ids = &self.identifiers;
        for (key, value) in [
            ("free_station_id", &ids.free_station_id),
            ("known_station_id", &ids.known_station_id),
            ("control_point_id", &ids.control_point_id),
        ] {
            if value.trim().is_empty() {
                return Err(format!("identifiers.{} must not be empty", key));
            }
        }
        if ids.free_station_id.eq_ignore_ascii_case(&ids.control_point_id)
            || ids.known_station_id.eq_ignore_ascii_case(&ids.control_point_id)
        {
            return Err(format!(
                "identifiers.control_point_id '{}' clashes with a station identifier",
                ids.control_point_id
            ));
        }
        if self.ltop.two_face_word_index > 99 {
            return Err(format!(
                "ltop.two_face_word_index {} is not a two-digit word index",
                self.ltop.two_face_word_index
            ));
        }
        if let Some(0) = self.processing.workers {
            return Err("processing.workers must be > 0".to_string());
        }
        if let Some(w) = self.processing.workers {
            if w > MAX_WORKERS {
                return Err(format!(
                    "processing.workers {} exceeds maximum ({})",
                    w, MAX_WORKERS
                ));
            }
        }
        Ok(())
    }
}
