//! Integration tests for the full diagnosis pipeline
//!
//! Drives LinkAnalyzer end-to-end against a mock metric source, covering:
//! - Concurrent three-metric fetch feeding the report assembler
//! - Latency spikes coinciding with drop spikes producing strong
//!   positive correlation
//! - Oscillating latency tripping the periodicity verdict
//! - Failed or empty fetches degrading fields to null instead of erroring

#[cfg(test)]
mod analysis_integration_tests {
    use async_trait::async_trait;
    use linkpulse::analysis_core::analyzer::{CPU_EXPR, DROPS_EXPR, LATENCY_EXPR};
    use linkpulse::analysis_core::normalizer::{RawField, RawSample};
    use linkpulse::analysis_core::{AnalysisWindow, LinkAnalyzer};
    use linkpulse::prom_source::{MetricSource, SourceError};

    /// Canned per-expression series, with optional per-expression failure.
    #[derive(Default)]
    struct MockSource {
        latency: Vec<RawSample>,
        drops: Vec<RawSample>,
        cpu: Vec<RawSample>,
        fail_drops: bool,
    }

    #[async_trait]
    impl MetricSource for MockSource {
        async fn range_query(
            &self,
            expr: &str,
            _window: &AnalysisWindow,
        ) -> Result<Vec<RawSample>, SourceError> {
            match expr {
                LATENCY_EXPR => Ok(self.latency.clone()),
                DROPS_EXPR if self.fail_drops => Err(SourceError::Status(502)),
                DROPS_EXPR => Ok(self.drops.clone()),
                CPU_EXPR => Ok(self.cpu.clone()),
                other => panic!("unexpected expression: {}", other),
            }
        }
    }

    /// Build a raw point the way Prometheus encodes it: numeric timestamp,
    /// textual value. Exercises the normalizer's coercion path too.
    fn point(timestamp: i64, value: f64) -> RawSample {
        RawSample(
            RawField::Num(timestamp as f64),
            RawField::Text(value.to_string()),
        )
    }

    fn series(points: &[(i64, f64)]) -> Vec<RawSample> {
        points.iter().map(|&(t, v)| point(t, v)).collect()
    }

    fn window() -> AnalysisWindow {
        AnalysisWindow { start: 0, end: 900, step: 10 }
    }

    #[tokio::test]
    async fn test_latency_spike_correlates_with_drop_spike() {
        let source = MockSource {
            latency: series(&[(0, 50.0), (10, 52.0), (20, 140.0), (30, 55.0)]),
            drops: series(&[(0, 0.01), (10, 0.01), (20, 0.9), (30, 0.01)]),
            cpu: series(&[(0, 20.0), (10, 20.0), (20, 20.0), (30, 20.0)]),
            ..Default::default()
        };

        let report = LinkAnalyzer::new(source).analyze(window()).await;

        let corr = report.corr.latency_vs_drops.expect("correlation should be defined");
        assert!(corr > 0.5, "spikes coincide, expected strong positive, got {}", corr);

        // Constant CPU has zero variance, so that pairing is undefined.
        assert_eq!(report.corr.latency_vs_cpu, None);

        // Four points are too few for a 2-sample lag.
        assert_eq!(report.periodicity.value, None);
        assert!(!report.periodicity.detected);
    }

    #[tokio::test]
    async fn test_oscillating_latency_trips_periodicity_verdict() {
        // Latency alternating every sample: a 20s period at 10s steps,
        // which the 15s probe rounds to (lag of 2 samples).
        let latency: Vec<(i64, f64)> = (0..60)
            .map(|i| (i * 10, if i % 2 == 0 { 50.0 } else { 100.0 }))
            .collect();
        let drops: Vec<(i64, f64)> = latency.iter().map(|&(t, v)| (t, v / 100.0)).collect();

        let source = MockSource {
            latency: series(&latency),
            drops: series(&drops),
            cpu: series(&[(0, 10.0), (10, 30.0), (20, 20.0)]),
            ..Default::default()
        };

        let report = LinkAnalyzer::new(source).analyze(window()).await;

        let ac = report.periodicity.value.expect("autocorrelation should be defined");
        assert!(ac > 0.9, "in-phase lag should be near 1.0, got {}", ac);
        assert!(report.periodicity.detected);

        // Drops mirror latency exactly.
        let corr = report.corr.latency_vs_drops.unwrap();
        assert!((corr - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_null_without_erroring() {
        let source = MockSource {
            latency: series(&[(0, 50.0), (10, 52.0), (20, 54.0), (30, 53.0), (40, 51.0)]),
            cpu: series(&[(0, 10.0), (10, 35.0), (20, 42.0), (30, 38.0), (40, 12.0)]),
            fail_drops: true,
            ..Default::default()
        };

        let report = LinkAnalyzer::new(source).analyze(window()).await;

        assert_eq!(report.corr.latency_vs_drops, None);
        assert!(report.corr.latency_vs_cpu.is_some(), "unaffected pairing still computes");
    }

    #[tokio::test]
    async fn test_empty_source_produces_all_null_report() {
        let report = LinkAnalyzer::new(MockSource::default()).analyze(window()).await;

        assert_eq!(report.corr.latency_vs_drops, None);
        assert_eq!(report.corr.latency_vs_cpu, None);
        assert_eq!(report.periodicity.value, None);
        assert!(!report.periodicity.detected);
        assert_eq!(report.window, window());
    }

    #[tokio::test]
    async fn test_unmatched_timestamps_leave_correlation_undefined() {
        // Drops sampled on a disjoint grid: the inner join is empty.
        let source = MockSource {
            latency: series(&[(0, 50.0), (10, 52.0), (20, 54.0), (30, 53.0)]),
            drops: series(&[(5, 0.1), (15, 0.2), (25, 0.3), (35, 0.4)]),
            cpu: series(&[(0, 10.0), (10, 35.0), (20, 42.0), (30, 38.0)]),
            ..Default::default()
        };

        let report = LinkAnalyzer::new(source).analyze(window()).await;

        assert_eq!(report.corr.latency_vs_drops, None);
        assert!(report.corr.latency_vs_cpu.is_some());
    }

    #[tokio::test]
    async fn test_report_serializes_with_null_sentinels() {
        let report = LinkAnalyzer::new(MockSource::default()).analyze(window()).await;

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["corr"]["latency_vs_drops"].is_null());
        assert!(json["corr"]["latency_vs_cpu"].is_null());
        assert!(json["periodicity"]["value"].is_null());
        assert_eq!(json["periodicity"]["detected"], false);
        assert_eq!(json["window"]["step"], 10);
    }
}
