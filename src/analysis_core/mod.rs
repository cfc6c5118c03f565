//! Analysis Core - Link Quality Diagnosis Pipeline
//!
//! This module answers two questions about a network link from raw
//! telemetry: is latency degradation correlated with packet drops or CPU
//! saturation, and does latency oscillate at a short fixed period
//! (periodic stalling from scheduling or polling artifacts).
//!
//! # Architecture
//!
//! ```text
//! MetricSource (latency | drops | cpu, fetched concurrently)
//!     ↓
//! normalizer (coerce to numbers, drop non-finite)
//!     ↓                                ↓
//! aligner (inner join on timestamp)    latency values
//!     ↓                                ↓
//! correlator (Pearson)                 periodicity (lag ACF vs threshold)
//!     ↓                                ↓
//! AnalysisReport { window, corr, periodicity }
//! ```
//!
//! Every invocation computes from freshly fetched series; nothing here is
//! cached or shared between requests.

pub mod aligner;
pub mod analyzer;
pub mod correlator;
pub mod normalizer;
pub mod periodicity;
pub mod report;
pub mod window;

pub use aligner::{align, AlignedPair};
pub use analyzer::LinkAnalyzer;
pub use correlator::pearson;
pub use normalizer::{normalize, RawSample, Sample, TimeSeries};
pub use periodicity::{autocorrelation, PeriodicityDetector, PeriodicityResult};
pub use report::{AnalysisReport, CorrelationSummary};
pub use window::AnalysisWindow;
