//! Analysis window resolution with clamped bounds

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_SECS: i64 = 300;
pub const MAX_WINDOW_SECS: i64 = 3600;
pub const MIN_STEP_SECS: i64 = 5;
pub const MAX_STEP_SECS: i64 = 30;

const DEFAULT_WINDOW_SECS: i64 = 900;
const DEFAULT_STEP_SECS: i64 = 10;

/// Resolved query window in epoch seconds, plus the sampling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl AnalysisWindow {
    /// Resolve a window ending now from raw requester input.
    ///
    /// Both inputs are optional query-string text. Absent or unparseable
    /// values fall back to the defaults (900s window, 10s step); values
    /// outside the bounds are silently clamped, never rejected.
    pub fn resolve(seconds: Option<&str>, step: Option<&str>) -> Self {
        Self::resolve_at(seconds, step, Utc::now().timestamp())
    }

    /// Same as [`AnalysisWindow::resolve`] with an explicit end timestamp,
    /// for deterministic tests.
    pub fn resolve_at(seconds: Option<&str>, step: Option<&str>, now: i64) -> Self {
        let seconds =
            parse_or(seconds, DEFAULT_WINDOW_SECS).clamp(MIN_WINDOW_SECS, MAX_WINDOW_SECS);
        let step = parse_or(step, DEFAULT_STEP_SECS).clamp(MIN_STEP_SECS, MAX_STEP_SECS);

        Self {
            start: now - seconds,
            end: now,
            step,
        }
    }

    pub fn seconds(&self) -> i64 {
        self.end - self.start
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
        .unwrap_or(default)
}
