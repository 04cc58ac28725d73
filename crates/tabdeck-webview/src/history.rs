//! Per-tab navigation history.

use std::collections::{HashMap, VecDeque};

use tabdeck_common::{HistoryError, TabKey};

/// Visited URLs per tab, most recent last.
///
/// After a push the oldest entries are evicted until the sequence is below
/// `capacity`, so it holds at most `capacity - 1` URLs.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    capacity: usize,
    entries: HashMap<TabKey, VecDeque<String>>,
}

impl NavigationHistory {
    /// `capacity` below 2 is raised to 2. Config validation rejects such
    /// values before they get here.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(2),
            entries: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append `url` unless it equals the most recent entry.
    pub fn record(&mut self, key: &TabKey, url: &str) {
        let list = self.entries.entry(key.clone()).or_default();
        if list.back().is_some_and(|last| last == url) {
            return;
        }
        list.push_back(url.to_string());
        while list.len() >= self.capacity {
            list.pop_front();
        }
    }

    /// Drop the last `count` entries and pop the new top as the target.
    ///
    /// The target leaves the list because loading it records it again.
    pub fn go_back(&mut self, key: &TabKey, count: usize) -> Result<String, HistoryError> {
        let list = match self.entries.get_mut(key) {
            Some(list) if !list.is_empty() => list,
            _ => return Err(HistoryError::Empty(key.to_string())),
        };
        list.truncate(list.len().saturating_sub(count));
        list.pop_back().ok_or_else(|| HistoryError::Exhausted {
            key: key.to_string(),
            count,
        })
    }

    pub fn entries(&self, key: &TabKey) -> Vec<&str> {
        self.entries
            .get(key)
            .map(|list| list.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self, key: &TabKey) -> usize {
        self.entries.get(key).map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self, key: &TabKey) -> bool {
        self.len(key) == 0
    }

    pub fn clear(&mut self, key: &TabKey) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> TabKey {
        TabKey::from("tab")
    }

    fn filled(urls: &[&str]) -> NavigationHistory {
        let mut history = NavigationHistory::new(100);
        for url in urls {
            history.record(&key(), url);
        }
        history
    }

    #[test]
    fn records_in_order() {
        let history = filled(&["a", "b", "c"]);
        assert_eq!(history.entries(&key()), vec!["a", "b", "c"]);
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let history = filled(&["a", "a", "b", "b", "a"]);
        assert_eq!(history.entries(&key()), vec!["a", "b", "a"]);
    }

    #[test]
    fn eviction_keeps_below_capacity() {
        let mut history = NavigationHistory::new(3);
        for url in ["1", "2", "3", "4", "5"] {
            history.record(&key(), url);
        }
        assert_eq!(history.entries(&key()), vec!["4", "5"]);
        assert!(history.len(&key()) < history.capacity());
    }

    #[test]
    fn hundred_and_one_pushes_keep_ninety_nine() {
        let mut history = NavigationHistory::new(100);
        for i in 0..=100 {
            history.record(&key(), &format!("https://site.test/{i}"));
        }
        assert_eq!(history.len(&key()), 99);
        assert_eq!(history.entries(&key())[0], "https://site.test/2");
    }

    #[test]
    fn go_back_one() {
        let mut history = filled(&["a", "b", "c"]);
        assert_eq!(history.go_back(&key(), 1).unwrap(), "b");
        assert_eq!(history.entries(&key()), vec!["a"]);
    }

    #[test]
    fn go_back_two() {
        let mut history = filled(&["a", "b", "c", "d"]);
        assert_eq!(history.go_back(&key(), 2).unwrap(), "b");
        assert_eq!(history.entries(&key()), vec!["a"]);
    }

    #[test]
    fn go_back_then_navigation_restores_entry() {
        let mut history = filled(&["a", "b", "c"]);
        let target = history.go_back(&key(), 1).unwrap();
        history.record(&key(), &target);
        assert_eq!(history.entries(&key()), vec!["a", "b"]);
    }

    #[test]
    fn go_back_zero_pops_top() {
        let mut history = filled(&["a", "b"]);
        assert_eq!(history.go_back(&key(), 0).unwrap(), "b");
        assert_eq!(history.entries(&key()), vec!["a"]);
    }

    #[test]
    fn go_back_without_history_is_empty_error() {
        let mut history = NavigationHistory::new(100);
        assert_eq!(
            history.go_back(&key(), 1),
            Err(HistoryError::Empty("tab".into()))
        );
    }

    #[test]
    fn go_back_past_start_is_exhausted() {
        let mut history = filled(&["a", "b"]);
        assert_eq!(
            history.go_back(&key(), 2),
            Err(HistoryError::Exhausted {
                key: "tab".into(),
                count: 2
            })
        );
        assert!(history.is_empty(&key()));
    }

    #[test]
    fn tabs_are_independent() {
        let mut history = NavigationHistory::new(100);
        history.record(&TabKey::from("x"), "a");
        history.record(&TabKey::from("y"), "b");
        assert_eq!(history.entries(&TabKey::from("x")), vec!["a"]);
        history.clear(&TabKey::from("x"));
        assert!(history.is_empty(&TabKey::from("x")));
        assert_eq!(history.len(&TabKey::from("y")), 1);
    }
}
