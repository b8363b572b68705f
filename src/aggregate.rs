use std::collections::{BTreeSet, HashMap};

/// Which side of a (release, version) pair becomes the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// release -> {versions}
    #[default]
    Forward,
    /// version -> {releases}
    Inverted,
}

impl Orientation {
    pub fn from_invert_flag(invert: bool) -> Self {
        if invert {
            Orientation::Inverted
        } else {
            Orientation::Forward
        }
    }
}

/// Accumulates distinct values per key across a scan
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    orientation: Orientation,
    entries: HashMap<String, BTreeSet<String>>,
}

impl Aggregator {
    pub fn new(orientation: Orientation) -> Self {
        Aggregator {
            orientation,
            entries: HashMap::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Insert `value` under `key`; repeated pairs are absorbed
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(value.into());
    }

    /// Record a release/version pair according to the orientation
    pub fn record_pair(&mut self, release: &str, version: &str) {
        match self.orientation {
            Orientation::Forward => self.record(release, version),
            Orientation::Inverted => self.record(version, release),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }
}
