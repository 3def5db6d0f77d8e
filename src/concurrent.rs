use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::discover::Source;

/// Hostnames accumulated across sources.
///
/// Every commit goes through the one lock. Contributions are keyed by source so
/// the flattened output is stable across runs no matter which parser finished
/// first; within a source the emission order is kept.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    inner: Arc<Mutex<BTreeMap<Source, Vec<String>>>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source's hostnames.
    pub fn commit(&self, source: Source, hosts: Vec<String>) {
        self.inner.lock().entry(source).or_default().extend(hosts);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count_for(&self, source: Source) -> usize {
        self.inner.lock().get(&source).map_or(0, Vec::len)
    }

    /// Flatten into one sequence, in source order.
    pub fn into_records(self) -> Vec<String> {
        let map = match Arc::try_unwrap(self.inner) {
            Ok(m) => m.into_inner(),
            Err(shared) => shared.lock().clone(),
        };
        map.into_values().flatten().collect()
    }
}

/// Drop repeated hostnames, keeping the first occurrence.
pub fn dedup_preserving_order(records: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records.into_iter().filter(|r| seen.insert(r.clone())).collect()
}
