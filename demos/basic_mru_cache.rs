//! Example demonstrating the key-indexed MRU cache.
//!
//! A hit promotes its entry one position toward the root, so a key has to be
//! read repeatedly to stay clear of the eviction end.
//!
//! Run with: cargo run --example basic_mru_cache

use mrulist::builder::MruCacheBuilder;
use mrulist::policy::mru_cache::MruCache;

fn print_order(cache: &MruCache<String, String>) {
    let keys: Vec<_> = cache.keys().map(String::as_str).collect();
    println!("  order (root → last): {:?}", keys);
}

fn main() {
    println!("=== MRU Cache Example ===\n");

    let mut cache: MruCache<String, String> = MruCacheBuilder::new(4).build();
    println!("Created cache: capacity={}\n", cache.capacity());

    for (k, v) in [("1", "one"), ("2", "two"), ("3", "three"), ("4", "four")] {
        cache.insert(k.to_string(), v.to_string());
    }
    println!("Inserted keys 1-4");
    print_order(&cache);

    cache.insert("5".to_string(), "five".to_string());
    println!("\nInserted key 5 (cache full, tail evicted)");
    println!("  contains 4? {}", cache.contains(&"4".to_string()));
    print_order(&cache);

    let value = cache.get(&"5".to_string()).cloned();
    println!("\nget(5) = {:?} (one step toward root)", value);
    print_order(&cache);

    cache.insert("6".to_string(), "six".to_string());
    println!("\nInserted key 6");
    println!("  contains 3? {}", cache.contains(&"3".to_string()));
    println!("  len: {}", cache.len());
    print_order(&cache);

    if let Some((k, v)) = cache.peek_last() {
        println!("\nNext eviction candidate: {k} => {v}");
    }
}
