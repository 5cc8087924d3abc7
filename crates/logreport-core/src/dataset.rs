//! The pre-computed analytics data mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// One data row; column order matches the report header.
pub type Row = Vec<Scalar>;

/// Mapping from data-series key (e.g. `daily_distribution`,
/// `statuses`) to its ordered rows.
///
/// Produced upstream by the log-parsing step, once per invocation.
/// Row order is significant (chronological or rank by volume) and is
/// preserved as-is. A missing series is valid and reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    series: BTreeMap<String, Vec<Row>>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows for a series, or an empty slice when the key is absent.
    pub fn series(&self, key: &str) -> &[Row] {
        self.series.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, key: impl Into<String>, rows: Vec<Row>) {
        self.series.insert(key.into(), rows);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
