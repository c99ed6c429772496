#![no_main]

use libfuzzer_sys::fuzz_target;
use mrulist::ds::MruList;

// Fuzz arbitrary operation sequences on MruList
//
// Tests random sequences of insert, evict_last, promote, find, get and
// clear, checking the structure after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let mut list: MruList<u32> = MruList::new(capacity);
    let mut all_ids = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // insert
                let old_len = list.len();
                let old_last = list.last().copied();
                let (id, evicted) = list.insert(value);
                all_ids.push(id);

                if old_len == capacity {
                    assert_eq!(evicted, old_last);
                    assert_eq!(list.len(), capacity);
                } else {
                    assert_eq!(evicted, None);
                    assert_eq!(list.len(), old_len + 1);
                }
                assert_eq!(list.last_id(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            }
            1 => {
                // evict_last
                let old_len = list.len();
                let old_last = list.last().copied();
                assert_eq!(list.evict_last(), old_last);
                assert_eq!(list.len(), old_len.saturating_sub(1));
            }
            2 => {
                // promote
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let prev = list.prev_id(id);
                    let moved = list.promote(id);
                    assert_eq!(moved, prev.is_some());
                    if let Some(prev) = prev {
                        assert_eq!(list.next_id(id), Some(prev));
                    }
                }
            }
            3 => {
                // find
                let before = list.len();
                if let Some(id) = list.find(&value) {
                    assert_eq!(list.get(id), Some(&value));
                }
                assert_eq!(list.len(), before);
            }
            4 => {
                // get
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    assert_eq!(list.get(id).is_some(), list.contains(id));
                }
            }
            _ => {
                // clear (rarely)
                if value % 16 == 0 {
                    list.clear();
                    all_ids.clear();
                    assert!(list.is_empty());
                }
            }
        }

        assert!(list.len() <= capacity);
        assert!(list.check_invariants().is_ok());
        idx += 2;
    }
});
