//! JSON-serializable diagnosis report

use super::periodicity::PeriodicityResult;
use super::window::AnalysisWindow;
use serde::{Deserialize, Serialize};

/// Correlation verdicts for the two latency pairings.
///
/// Drops-vs-cpu is deliberately absent: the consuming dashboard reads
/// exactly these two fields, and the omission is part of the report's
/// contract. Undefined coefficients serialize as JSON null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSummary {
    pub latency_vs_drops: Option<f64>,
    pub latency_vs_cpu: Option<f64>,
}

/// Full diagnosis for one analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub window: AnalysisWindow,
    pub corr: CorrelationSummary,
    pub periodicity: PeriodicityResult,
}
