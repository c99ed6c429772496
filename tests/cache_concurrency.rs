// ==============================================
// CONCURRENT MRU CACHE TESTS (integration)
// ==============================================
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use mrulist::ds::ConcurrentMruList;
use mrulist::policy::mru_cache::ConcurrentMruCache;

mod shared_cache {
    use super::*;

    #[test]
    fn test_parallel_inserts_respect_capacity() {
        let cache: ConcurrentMruCache<String, usize> = ConcurrentMruCache::new(100);
        let num_threads = 8;
        let operations_per_thread = 500;

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..operations_per_thread {
                        cache.insert(format!("thread_{}_{}", thread_id, i), i);
                        assert!(cache.len() <= 100);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 100);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_mixed_readers_and_writers() {
        let cache: ConcurrentMruCache<u64, u64> = ConcurrentMruCache::new(64);
        for k in 0..64 {
            cache.insert(k, k * 2);
        }
        let hits = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..6u64)
            .map(|thread_id| {
                let cache = cache.clone();
                let hits = hits.clone();
                thread::spawn(move || {
                    for i in 0..1_000u64 {
                        match i % 3 {
                            0 => {
                                if cache.get(&(i % 64)).is_some() {
                                    hits.fetch_add(1, Ordering::Relaxed);
                                }
                            },
                            1 => {
                                let _ = cache.peek_with(&(i % 64), |v| *v);
                            },
                            _ => {
                                cache.insert(1_000 + thread_id * 10_000 + i, i);
                            },
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(hits.load(Ordering::Relaxed) > 0);
        assert_eq!(cache.len(), 64);
        cache.check_invariants().unwrap();
    }
}

mod shared_list {
    use super::*;

    #[test]
    fn test_concurrent_list_promotions() {
        let list = Arc::new(ConcurrentMruList::new(32));
        let ids: Vec<_> = (0..32u32).map(|n| list.insert(n).0).collect();
        let ids = Arc::new(ids);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let list = list.clone();
                let ids = ids.clone();
                thread::spawn(move || {
                    for i in 0..500 {
                        list.promote(ids[(i * 7 + t) % 32]);
                        let _ = list.find(&((i % 32) as u32));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(list.len(), 32);
        let mut values = list.to_vec();
        values.sort_unstable();
        assert_eq!(values, (0..32).collect::<Vec<_>>());
        list.check_invariants().unwrap();
    }
}
