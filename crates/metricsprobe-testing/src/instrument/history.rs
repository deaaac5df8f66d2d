use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

/// One recorded value and when it was appended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<T> {
    pub at: DateTime<Utc>,
    pub value: T,
}

/// Append-only observation log.
///
/// Each append happens under the history's own mutex, so readers see either
/// the entry in full or not at all. Order is the order appends acquired the
/// lock; timestamps are taken inside the lock but wall-clock resolution may
/// still produce equal stamps for neighbours.
#[derive(Debug)]
pub struct History<T> {
    entries: Mutex<Vec<Observation<T>>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Copy> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, value: T) {
        let mut entries = self.lock();
        entries.push(Observation {
            at: Utc::now(),
            value,
        });
    }

    /// Copy of every observation in append order.
    pub fn snapshot(&self) -> Vec<Observation<T>> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Observation<T>> {
        self.lock().last().copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Appends never leave a partial entry behind, so a poisoned guard is usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Observation<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let h = History::new();
        h.append(3i64);
        h.append(1);
        h.append(2);
        let values: Vec<i64> = h.snapshot().iter().map(|o| o.value).collect();
        assert_eq!(values, vec![3, 1, 2]);
        assert_eq!(h.last().map(|o| o.value), Some(2));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn empty_history() {
        let h: History<i64> = History::new();
        assert!(h.is_empty());
        assert!(h.last().is_none());
    }
}
