//! Inner-join alignment of two series on shared timestamps

use super::normalizer::Sample;
use std::collections::HashMap;

/// Two equal-length value arrays; index `i` in both refers to the same
/// timestamp. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedPair {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Inner-join two series on timestamp.
///
/// `a` is indexed by timestamp, then `b` is walked in order; every
/// timestamp of `b` that also exists in `a` emits one value pair.
/// Timestamps present in only one series are silently dropped. Duplicate
/// timestamps in `a` resolve last-write-wins (the index overwrites), while
/// a duplicate in `b` emits one row per occurrence. An empty result is not
/// an error.
pub fn align(a: &[Sample], b: &[Sample]) -> AlignedPair {
    let index: HashMap<i64, f64> = a.iter().map(|s| (s.timestamp, s.value)).collect();

    let mut pair = AlignedPair::default();
    for sample in b {
        if let Some(&matched) = index.get(&sample.timestamp) {
            pair.a.push(matched);
            pair.b.push(sample.value);
        }
    }
    pair
}
