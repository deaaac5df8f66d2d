//! Get-or-create cache, one per instrument kind.
//!
//! Each fingerprint moves `Absent -> Present(instrument)` exactly once and
//! never back. Lookup, construction and insertion run under the write lock of
//! the fingerprint's `DashMap` shard, so concurrent first-time requests build
//! a single instance and every loser receives the winner's `Arc`.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use metricsprobe_core::{to_owned_dimensions, Dimensions, Fingerprint, Fingerprinter};

use crate::instrument::Instrument;

/// Fingerprint-keyed store of shared instruments of one kind.
pub struct InstrumentCache<I> {
    fingerprinter: Fingerprinter,
    map: DashMap<Fingerprint, Arc<I>>,
}

impl<I: Instrument> InstrumentCache<I> {
    pub fn new(fingerprinter: Fingerprinter) -> Self {
        Self {
            fingerprinter,
            map: DashMap::new(),
        }
    }

    /// Return the instrument for this identity, building it with `make` on
    /// first request. When the identity already exists `make` is not called,
    /// so the first caller's configuration wins.
    pub fn get_or_create<K, V, F>(&self, label: &str, dimensions: &[(K, V)], make: F) -> Arc<I>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        F: FnOnce(&str, Dimensions) -> I,
    {
        let fingerprint = self.fingerprinter.fingerprint(label, dimensions);

        let (instrument, created) = match self.map.entry(fingerprint.clone()) {
            Entry::Occupied(o) => (Arc::clone(o.get()), false),
            Entry::Vacant(v) => {
                let instrument = Arc::new(make(label, to_owned_dimensions(dimensions)));
                v.insert(Arc::clone(&instrument));
                (instrument, true)
            }
        };

        if created {
            tracing::debug!(
                kind = I::KIND.as_str(),
                label,
                fingerprint = %fingerprint,
                id = %instrument.id(),
                "instrument created"
            );
        }
        instrument
    }

    /// Lookup without creating.
    pub fn get<K, V>(&self, label: &str, dimensions: &[(K, V)]) -> Option<Arc<I>>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let fingerprint = self.fingerprinter.fingerprint(label, dimensions);
        self.map.get(&fingerprint).map(|r| Arc::clone(r.value()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Every instrument currently present, in no particular order.
    pub fn instances(&self) -> Vec<Arc<I>> {
        self.map.iter().map(|r| Arc::clone(r.value())).collect()
    }
}

impl<I: Instrument> Default for InstrumentCache<I> {
    fn default() -> Self {
        Self::new(Fingerprinter::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    use super::*;
    use crate::instrument::TestCounter;

    #[test]
    fn second_request_reuses_instance_and_skips_make() {
        let cache: InstrumentCache<TestCounter> = InstrumentCache::default();
        let a = cache.get_or_create("hits", &[("k", "v")], TestCounter::new);
        let b = cache.get_or_create("hits", &[("k", "v")], |_: &str, _: Dimensions| -> TestCounter {
            panic!("must not construct twice")
        });
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_does_not_create() {
        let cache: InstrumentCache<TestCounter> = InstrumentCache::default();
        assert!(cache.get("hits", &[("k", "v")]).is_none());
        assert!(cache.is_empty());
        let a = cache.get_or_create("hits", &[("k", "v")], TestCounter::new);
        let found = cache.get("hits", &[("other", "v")]).unwrap();
        assert!(Arc::ptr_eq(&a, &found));
    }

    #[test]
    fn concurrent_first_requests_construct_once() {
        const THREADS: usize = 16;
        let cache: InstrumentCache<TestCounter> = InstrumentCache::default();
        let built = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let handles: Vec<Arc<TestCounter>> = thread::scope(|s| {
            let joins: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        cache.get_or_create("race", &[("k", "v")], |label, dims| {
                            built.fetch_add(1, Ordering::SeqCst);
                            TestCounter::new(label, dims)
                        })
                    })
                })
                .collect();
            joins.into_iter().map(|j| j.join().unwrap()).collect()
        });

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }
}
