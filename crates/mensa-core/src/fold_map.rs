// FoldMap: insertion-ordered map whose keys are matched by Unicode case folding.
//
// Keys keep the casing they were first inserted with. Lookups by any casing
// resolve to that stored key.

use hashbrown::HashMap;

/// Return the Unicode default case folding of `key`.
///
/// `Σ`, `σ` and `ς` fold together, as do `S`, `s` and `ſ`.
pub fn fold(key: &str) -> String {
    caseless::default_case_fold_str(key)
}

/// A map keyed by short codes that are matched case-insensitively.
///
/// The first insertion of a key wins: inserting a key that already matches an
/// existing key under case folding is a no-op, and the stored casing and value
/// are never changed afterwards.
#[derive(Debug, Clone)]
pub struct FoldMap<V> {
    /// Entries in insertion order, under their original casing.
    entries: Vec<(String, V)>,
    /// Maps the folded form of each key to its index in `entries`.
    index: HashMap<String, usize>,
}

impl<V> Default for FoldMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FoldMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert `key` with `value`.
    ///
    /// Returns `true` if the key was new. If a key equal under case folding is
    /// already present nothing is changed and `false` is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        let folded = fold(&key);
        if self.index.contains_key(&folded) {
            return false;
        }
        self.index.insert(folded, self.entries.len());
        self.entries.push((key, value));
        true
    }

    /// Position of the entry matching `key`, if any.
    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(&fold(key)).copied()
    }

    /// Check whether a key equal to `key` under case folding is present.
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Check whether `key` is present with exactly this casing.
    pub fn contains_exact(&self, key: &str) -> bool {
        self.position(key)
            .is_some_and(|pos| self.entries[pos].0 == key)
    }

    /// Return the stored casing of `key`.
    pub fn key(&self, key: &str) -> Option<&str> {
        self.position(key).map(|pos| self.entries[pos].0.as_str())
    }

    /// Return the stored key and its value.
    pub fn get(&self, key: &str) -> Option<(&str, &V)> {
        self.position(key).map(|pos| {
            let (stored, value) = &self.entries[pos];
            (stored.as_str(), value)
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FoldMap<usize> {
    /// Build a map assigning each key its position in `keys`.
    ///
    /// Keys that repeat an earlier key under case folding are skipped, but
    /// still consume a position.
    pub fn from_order<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let iter = keys.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (rank, key) in iter.enumerate() {
            map.insert(key, rank);
        }
        map
    }
}
