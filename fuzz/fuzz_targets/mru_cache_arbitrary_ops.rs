#![no_main]

use libfuzzer_sys::fuzz_target;
use mrulist::policy::mru_cache::MruCache;

// Fuzz arbitrary operation sequences on MruCache
//
// The key index and the list must agree after every insert, get, peek,
// pop_last and clear.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut cache: MruCache<u8, u32> = MruCache::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1];

        match op {
            0 | 1 => {
                let existed = cache.contains(&key);
                let old = cache.insert(key, u32::from(key) + idx as u32);
                assert_eq!(old.is_some(), existed);
                assert!(cache.contains(&key));
            }
            2 => {
                let present = cache.contains(&key);
                assert_eq!(cache.get(&key).is_some(), present);
            }
            3 => {
                let last = cache.peek_last().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_last(), last);
            }
            _ => {
                if key % 32 == 0 {
                    cache.clear();
                    assert!(cache.is_empty());
                } else {
                    let _ = cache.peek(&key);
                }
            }
        }

        assert!(cache.len() <= capacity);
        assert!(cache.check_invariants().is_ok());
        idx += 2;
    }
});
