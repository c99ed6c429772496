//! Example demonstrating the bounded MRU list.
//!
//! New entries join at the tail, a full list evicts its tail, and each access
//! moves an entry exactly one position toward the root.
//!
//! Run with: cargo run --example basic_mru_list

use std::io;

use mrulist::ds::MruList;

fn main() -> io::Result<()> {
    println!("=== MRU List Example ===\n");

    let mut list = MruList::new(3);
    println!("Created list: capacity={}\n", list.capacity());

    for word in ["alpha", "beta", "gamma"] {
        let (id, _) = list.insert(word);
        println!("Inserted {word:?} at slot {id}");
    }
    list.dump(&mut io::stdout())?;

    // Each find climbs one step.
    println!("\nfind(\"gamma\") twice:");
    list.find(&"gamma");
    list.dump(&mut io::stdout())?;
    list.find(&"gamma");
    list.dump(&mut io::stdout())?;

    // Full: the tail goes.
    let (_, evicted) = list.insert("delta");
    println!("\nInserted \"delta\", evicted {:?}", evicted);
    list.dump(&mut io::stdout())?;

    println!("\nReverse order:");
    list.dump_rev(&mut io::stdout())?;

    println!("\nroot={:?} last={:?}", list.root(), list.last());
    Ok(())
}
