//! Lagged autocorrelation and fixed-threshold oscillation detection

use serde::{Deserialize, Serialize};

/// Autocorrelation strictly above this value is judged periodic.
/// Dashboards key off this exact threshold; do not tune it without
/// migrating them.
const DETECTION_THRESHOLD: f64 = 0.3;

/// Oscillation period probed by the analyzer when none is given (seconds).
pub const DEFAULT_TARGET_PERIOD_SECS: f64 = 15.0;

/// Autocorrelation at the target lag plus the periodicity verdict.
/// `value` is `None` when the series is too short or constant, in which
/// case `detected` is always false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodicityResult {
    pub value: Option<f64>,
    pub detected: bool,
}

/// Detects oscillation at a fixed target period.
pub struct PeriodicityDetector {
    target_period_secs: f64,
}

impl PeriodicityDetector {
    pub fn new(target_period_secs: f64) -> Self {
        Self { target_period_secs }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TARGET_PERIOD_SECS)
    }

    /// Probe `values` for oscillation at the target period.
    ///
    /// `step_secs` is the sampling step the series was fetched with; the
    /// lag is `round(period / step)` samples.
    pub fn detect(&self, values: &[f64], step_secs: f64) -> PeriodicityResult {
        let lag_steps = (self.target_period_secs / step_secs).round() as usize;
        let value = autocorrelation(values, lag_steps);
        let detected = matches!(value, Some(v) if v > DETECTION_THRESHOLD);

        PeriodicityResult { value, detected }
    }
}

/// Normalized autocorrelation of `values` at a lag of `lag_steps` samples.
///
/// Returns `None` when the series is too short relative to the lag
/// (`n < lag_steps + 3`) or has zero variance.
pub fn autocorrelation(values: &[f64], lag_steps: usize) -> Option<f64> {
    let n = values.len();
    if n < lag_steps.saturating_add(3) {
        return None;
    }

    let nf = n as f64;
    let (mut sx, mut sxx) = (0.0, 0.0);
    for v in values {
        sx += v;
        sxx += v * v;
    }
    let mean = sx / nf;
    let variance = sxx / nf - mean * mean;
    if variance <= 0.0 {
        return None;
    }

    let mut lagged_cov = 0.0;
    for i in lag_steps..n {
        lagged_cov += (values[i] - mean) * (values[i - lag_steps] - mean);
    }

    Some(lagged_cov / (n - lag_steps) as f64 / variance)
}
