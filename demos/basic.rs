use chained_hash::{djb2, ChainOrder, ChainedHashTable};

fn main() -> chained_hash::Result<()> {
    chained_hash::logger::init();

    // Hash some data
    let data = "Hello, world!";
    println!("DJB2 of {:?}: 0x{:016x}", data, djb2(data));

    // A tiny table makes collisions easy to see
    let mut table = ChainedHashTable::new(3)?;
    for (key, value) in [("alice", 100), ("bob", 87), ("carol", 95), ("alice", 42)] {
        table.insert(key, value)?;
        println!("{} -> bucket {}", key, table.bucket_index(key));
    }

    // Repeated keys are appended, lookups see the first one
    table.print_value("alice");
    table.remove("alice");
    table.print_value("alice");
    table.print_value("mallory");

    table.print_table(ChainOrder::Insertion);
    println!("Released {} entries", table.destroy());
    Ok(())
}
