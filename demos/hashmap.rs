//! `BuildDjb2` in a std `HashMap`, next to `ChainedHashTable` fed the same
//! scores.

use std::collections::HashMap;
use std::hash::BuildHasher;

use chained_hash::{djb2, BuildDjb2, ChainOrder, ChainedHashTable};

type Djb2HashMap<K, V> = HashMap<K, V, BuildDjb2>;

fn main() -> chained_hash::Result<()> {
    let scores = [("Alice", 100), ("Bob", 87), ("Charlie", 95), ("Alice", 50)];

    let mut map: Djb2HashMap<&str, i32> = Djb2HashMap::default();
    let mut table = ChainedHashTable::new(4)?;
    for (name, score) in scores {
        map.insert(name, score);
        table.insert(name, score)?;
    }

    // The map keeps the last Alice, the table keeps both and answers with the first
    println!("HashMap: {} entries, Alice = {}", map.len(), map["Alice"]);
    println!("Table:   {} entries, {}", table.len(), table.describe("Alice"));
    table.print_table(ChainOrder::Insertion);

    table.remove("Alice");
    println!("After one remove: {}", table.describe("Alice"));

    // `str` hashing adds a 0xff terminator, so map hashes are not raw DJB2
    let build = BuildDjb2::default();
    println!("\ndjb2(\"Alice\")          = 0x{:016x}", djb2("Alice"));
    println!("BuildDjb2 (\"Alice\")    = 0x{:016x}", build.hash_one("Alice"));
    println!("djb2(\"Alice\" + 0xff)   = 0x{:016x}", djb2(b"Alice\xff"));

    table.destroy();
    Ok(())
}
