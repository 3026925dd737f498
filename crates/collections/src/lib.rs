//! Map upsert and grouped-insert helpers
//!
//! Two small extension traits over the std map types:
//!
//! - [`MapExt::upsert`] - insert-or-overwrite that returns `&mut Self` so
//!   several writes chain in one expression
//! - [`GroupMapExt::try_add_to_group`] - for maps whose values are `Vec`s:
//!   create the group on first use, append only if the value is not already
//!   present
//!
//! ```rust
//! use std::collections::HashMap;
//! use omnitool_collections::{GroupMapExt, MapExt};
//!
//! let mut settings = HashMap::new();
//! settings.upsert("retries", 3).upsert("retries", 5);
//! assert_eq!(settings["retries"], 5);
//!
//! let mut by_host: HashMap<&str, Vec<u16>> = HashMap::new();
//! assert!(by_host.try_add_to_group("db", 5432));
//! assert!(!by_host.try_add_to_group("db", 5432));
//! assert_eq!(by_host["db"], vec![5432]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Chainable insert-or-overwrite for map types
pub trait MapExt<K, V> {
    /// Inserts `value` under `key`, overwriting any previous value, and
    /// returns the map for chaining
    fn upsert(&mut self, key: K, value: V) -> &mut Self;
}

impl<K: Eq + Hash, V> MapExt<K, V> for HashMap<K, V> {
    fn upsert(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }
}

impl<K: Ord, V> MapExt<K, V> for BTreeMap<K, V> {
    fn upsert(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }
}

/// Create-or-append semantics for maps that group values under a key
pub trait GroupMapExt<K, V> {
    /// Appends `value` to the group stored under `key`
    ///
    /// The group is created if the key is absent. Returns whether anything
    /// was added: a value already present in the group is left alone and
    /// `false` is returned.
    fn try_add_to_group(&mut self, key: K, value: V) -> bool;
}

impl<K: Eq + Hash, V: PartialEq> GroupMapExt<K, V> for HashMap<K, Vec<V>> {
    fn try_add_to_group(&mut self, key: K, value: V) -> bool {
        let group = self.entry(key).or_default();
        if group.contains(&value) {
            return false;
        }
        group.push(value);
        true
    }
}

impl<K: Ord, V: PartialEq> GroupMapExt<K, V> for BTreeMap<K, Vec<V>> {
    fn try_add_to_group(&mut self, key: K, value: V) -> bool {
        let group = self.entry(key).or_default();
        if group.contains(&value) {
            return false;
        }
        group.push(value);
        true
    }
}
