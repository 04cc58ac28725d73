//! Live surfaces by tab key.

use std::collections::HashMap;

use tabdeck_common::TabKey;
use tracing::debug;

/// A cached surface and whether the interceptor has been attached to it.
pub struct RegistryEntry<S> {
    pub surface: S,
    pub interceptor_attached: bool,
}

/// At most one live surface per key. Dropping an entry destroys its surface.
pub struct ViewRegistry<S> {
    entries: HashMap<TabKey, RegistryEntry<S>>,
}

impl<S> ViewRegistry<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Cache `surface` for `key`, replacing (and destroying) any previous one.
    pub fn insert(&mut self, key: TabKey, surface: S, interceptor_attached: bool) {
        self.entries.insert(
            key,
            RegistryEntry {
                surface,
                interceptor_attached,
            },
        );
    }

    pub fn contains(&self, key: &TabKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &TabKey) -> Option<&S> {
        self.entries.get(key).map(|e| &e.surface)
    }

    pub fn get_mut(&mut self, key: &TabKey) -> Option<&mut S> {
        self.entries.get_mut(key).map(|e| &mut e.surface)
    }

    pub fn entry(&self, key: &TabKey) -> Option<&RegistryEntry<S>> {
        self.entries.get(key)
    }

    /// Drop the surface for `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &TabKey) -> bool {
        if self.entries.remove(key).is_some() {
            debug!(key = %key, "surface destroyed");
            true
        } else {
            false
        }
    }

    pub fn keys(&self) -> Vec<TabKey> {
        self.entries.keys().cloned().collect()
    }

    /// Destroy every surface. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for key in self.keys() {
            self.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for ViewRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn insert_and_get() {
        let mut registry = ViewRegistry::new();
        registry.insert(TabKey::from("a"), 1, true);
        assert!(registry.contains(&TabKey::from("a")));
        assert_eq!(registry.get(&TabKey::from("a")), Some(&1));
        assert!(registry.entry(&TabKey::from("a")).unwrap().interceptor_attached);
    }

    #[test]
    fn remove_destroys_surface() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = ViewRegistry::new();
        registry.insert(TabKey::from("a"), Tracked(drops.clone()), false);
        assert!(registry.remove(&TabKey::from("a")));
        assert_eq!(drops.get(), 1);
        assert!(!registry.remove(&TabKey::from("a")));
    }

    #[test]
    fn destroy_all_empties_registry() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = ViewRegistry::new();
        for key in ["a", "b", "c"] {
            registry.insert(TabKey::from(key), Tracked(drops.clone()), false);
        }
        registry.destroy_all();
        assert!(registry.is_empty());
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn one_surface_per_key() {
        let mut registry = ViewRegistry::new();
        registry.insert(TabKey::from("a"), 1, false);
        registry.insert(TabKey::from("a"), 2, false);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&TabKey::from("a")), Some(&2));
    }
}
