// Application state module
// Everything a request handler may read, built once before the listener starts

use std::time::Instant;

use chrono::{DateTime, Utc};

use super::types::Config;
use crate::data::Dataset;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Sample tables, never mutated after startup
    pub data: Dataset,
    /// Monotonic start point used for uptime reporting
    pub started: Instant,
    /// Wall-clock start time, logged at startup
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &Config, data: Dataset) -> Self {
        Self {
            config: config.clone(),
            data,
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Seconds since the process started serving
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
