//! Purpose: Associative map with one dedicated slot for a keyless entry.
//! Exports: `OptionKeyMap`.
//! Invariants: `len` counts the keyless slot iff occupied; the wrapper adds no
//! invariants beyond the underlying map's.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct OptionKeyMap<K, V> {
    keyed: HashMap<K, V>,
    keyless: Option<V>,
}

impl<K: Eq + Hash, V> OptionKeyMap<K, V> {
    pub fn new() -> Self {
        Self {
            keyed: HashMap::new(),
            keyless: None,
        }
    }

    /// Insert at `key`, returning the displaced value if the slot was occupied.
    pub fn insert(&mut self, key: Option<K>, value: V) -> Option<V> {
        match key {
            Some(key) => self.keyed.insert(key, value),
            None => self.keyless.replace(value),
        }
    }

    pub fn get(&self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.keyed.get(key),
            None => self.keyless.as_ref(),
        }
    }

    pub fn get_mut(&mut self, key: Option<&K>) -> Option<&mut V> {
        match key {
            Some(key) => self.keyed.get_mut(key),
            None => self.keyless.as_mut(),
        }
    }

    pub fn remove(&mut self, key: Option<&K>) -> Option<V> {
        match key {
            Some(key) => self.keyed.remove(key),
            None => self.keyless.take(),
        }
    }

    pub fn contains_key(&self, key: Option<&K>) -> bool {
        match key {
            Some(key) => self.keyed.contains_key(key),
            None => self.keyless.is_some(),
        }
    }

    pub fn len(&self) -> usize {
        self.keyed.len() + usize::from(self.keyless.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keyed entries first (map order), then the keyless entry if occupied.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&K>, &V)> {
        self.keyed
            .iter()
            .map(|(key, value)| (Some(key), value))
            .chain(self.keyless.iter().map(|value| (None, value)))
    }
}

impl<K: Eq + Hash, V> Default for OptionKeyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::OptionKeyMap;

    #[test]
    fn keyless_slot_behaves_like_a_keyed_entry() {
        let mut map = OptionKeyMap::new();
        assert!(map.insert(None, "a").is_none());
        assert_eq!(map.insert(None, "b"), Some("a"));
        assert_eq!(map.get(None), Some(&"b"));
        assert!(map.contains_key(None));
        assert_eq!(map.remove(None), Some("b"));
        assert!(!map.contains_key(None));
        let _ = map.insert(Some("k"), "v");
    }

    #[test]
    fn len_counts_the_keyless_slot_iff_occupied() {
        let mut map = OptionKeyMap::new();
        assert!(map.is_empty());
        map.insert(Some(1), "one");
        assert_eq!(map.len(), 1);
        map.insert(None, "none");
        assert_eq!(map.len(), 2);
        map.remove(None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iter_lists_the_keyless_entry_last() {
        let mut map = OptionKeyMap::new();
        map.insert(None, 0);
        map.insert(Some("x"), 1);
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.last(), Some(&(None, &0)));
    }

    #[test]
    fn keyed_and_keyless_entries_are_independent() {
        let mut map = OptionKeyMap::new();
        map.insert(Some("k"), 1);
        map.insert(None, 2);
        assert_eq!(map.get(Some(&"k")), Some(&1));
        assert_eq!(map.get(None), Some(&2));
        map.remove(Some(&"k"));
        assert_eq!(map.get(None), Some(&2));
    }
}
