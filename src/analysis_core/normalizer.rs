//! Raw query output to canonical numeric series

use serde::Deserialize;

/// One telemetry point: epoch seconds and a finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub value: f64,
}

/// Ordered series of samples, timestamps non-decreasing, possibly empty.
pub type TimeSeries = Vec<Sample>;

/// One element of a raw query-result pair.
///
/// Prometheus encodes sample values as strings and timestamps as numbers,
/// but neither is guaranteed, so both shapes are accepted everywhere.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Num(f64),
    Text(String),
}

impl RawField {
    fn as_finite(&self) -> Option<f64> {
        let v = match self {
            RawField::Num(v) => *v,
            RawField::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

/// A `[timestamp, value]` pair exactly as returned by the query interface.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSample(pub RawField, pub RawField);

impl RawSample {
    pub fn new(timestamp: i64, value: f64) -> Self {
        RawSample(RawField::Num(timestamp as f64), RawField::Num(value))
    }
}

/// Convert raw pairs into a canonical series.
///
/// Both elements are coerced to numbers; any pair whose value is NaN,
/// infinite, or non-numeric is dropped, never defaulted to zero. Input
/// order is preserved (range queries already return ascending timestamps,
/// so no sorting happens here).
pub fn normalize(raw: &[RawSample]) -> TimeSeries {
    raw.iter()
        .filter_map(|RawSample(ts, value)| {
            let timestamp = ts.as_finite()? as i64;
            let value = value.as_finite()?;
            Some(Sample { timestamp, value })
        })
        .collect()
}

/// Values of a series, in order.
pub fn values(series: &[Sample]) -> Vec<f64> {
    series.iter().map(|s| s.value).collect()
}
