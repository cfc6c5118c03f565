//! End-to-end diagnosis over a metric source

use super::aligner::align;
use super::correlator::pearson;
use super::normalizer::{self, normalize, TimeSeries};
use super::periodicity::PeriodicityDetector;
use super::report::{AnalysisReport, CorrelationSummary};
use super::window::AnalysisWindow;
use crate::prom_source::MetricSource;

/// Round-trip latency of the link under test (milliseconds).
pub const LATENCY_EXPR: &str = "starlink_latency_ms";

/// Packet drop rate across all interfaces, receive plus transmit.
pub const DROPS_EXPR: &str =
    "sum(rate(node_network_receive_drop_total[2m]) + rate(node_network_transmit_drop_total[2m]))";

/// CPU busy percentage.
pub const CPU_EXPR: &str =
    "100 * (1 - avg(rate(node_cpu_seconds_total{mode=\"idle\"}[2m])))";

/// Runs the full diagnosis pipeline against a [`MetricSource`].
///
/// Stateless: every [`LinkAnalyzer::analyze`] call fetches fresh series
/// and shares nothing with other invocations.
pub struct LinkAnalyzer<S> {
    source: S,
    detector: PeriodicityDetector,
}

impl<S: MetricSource> LinkAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            detector: PeriodicityDetector::with_defaults(),
        }
    }

    /// Run one full diagnosis over `window`.
    ///
    /// The three range queries are issued concurrently. A query that fails
    /// or returns nothing degrades that series to empty, which resolves
    /// the dependent statistics to null; the report itself is always
    /// produced. Field values depend only on the fetched series, not on
    /// fetch completion order.
    pub async fn analyze(&self, window: AnalysisWindow) -> AnalysisReport {
        let (latency, drops, cpu) = tokio::join!(
            self.fetch(LATENCY_EXPR, &window),
            self.fetch(DROPS_EXPR, &window),
            self.fetch(CPU_EXPR, &window),
        );
        log::debug!(
            "fetched series: latency={} drops={} cpu={}",
            latency.len(),
            drops.len(),
            cpu.len()
        );

        let lat_drops = align(&latency, &drops);
        let lat_cpu = align(&latency, &cpu);

        let latency_values = normalizer::values(&latency);
        let periodicity = self.detector.detect(&latency_values, window.step as f64);

        AnalysisReport {
            window,
            corr: CorrelationSummary {
                latency_vs_drops: pearson(&lat_drops.a, &lat_drops.b),
                latency_vs_cpu: pearson(&lat_cpu.a, &lat_cpu.b),
            },
            periodicity,
        }
    }

    async fn fetch(&self, expr: &str, window: &AnalysisWindow) -> TimeSeries {
        match self.source.range_query(expr, window).await {
            Ok(raw) => normalize(&raw),
            Err(e) => {
                log::warn!("⚠️  Range query failed for {}: {}", expr, e);
                Vec::new()
            }
        }
    }
}
